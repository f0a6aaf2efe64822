//! Storage infrastructure: everything that touches the settings file.
//!
//! - `files`    – existence checks, whole-file reads, atomic writes, renames.
//! - `backup`   – collision-free `OLD-...` names for broken settings files.
//! - `anchor`   – turns an [`settings_core::Anchor`] into a directory.
//! - `location` – the anchor/relative/absolute path triple a store owns.
//!
//! Keeping file access here means the load/save state machine in
//! `application` reads as policy only.

pub mod anchor;
pub mod backup;
pub mod files;
pub mod location;

pub use anchor::resolve_anchor;
pub use backup::{next_backup_name, next_backup_name_at};
pub use location::SettingsLocation;
