//! settings-store library entry point.
//!
//! A file-backed store for one user-defined settings record.  The store loads
//! the record from disk, repairs or recreates the file when it is missing or
//! unreadable (as its policies dictate), saves it back, and keeps broken files
//! under collision-free `OLD-...` backup names.
//!
//! ```no_run
//! use serde::{Deserialize, Serialize};
//! use settings_store::{settings_field, Defaultable, Field, FieldSet, JsonSerializer, SettingsStore};
//!
//! #[derive(Debug, Default, Clone, Serialize, Deserialize)]
//! #[serde(deny_unknown_fields)]
//! struct AppSettings {
//!     theme: String,
//!     font_size: u32,
//! }
//!
//! impl Defaultable for AppSettings {}
//!
//! impl FieldSet for AppSettings {
//!     fn fields() -> Vec<Field<Self>> {
//!         vec![
//!             settings_field!(AppSettings, theme),
//!             settings_field!(AppSettings, font_size),
//!         ]
//!     }
//! }
//!
//! # fn main() -> Result<(), settings_store::SettingsError> {
//! let mut store: SettingsStore<AppSettings> = SettingsStore::new(JsonSerializer)?;
//! store.load()?;
//! store.settings_mut().font_size = 14;
//! store.save()?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod error;
pub mod infrastructure;

pub use application::settings_store::SettingsStore;
pub use error::SettingsError;
pub use infrastructure::storage::{next_backup_name, next_backup_name_at, SettingsLocation};

// The record contracts and policies are part of this crate's API surface.
pub use settings_core::{
    merge, settings_field, Anchor, CorruptFilePolicy, Defaultable, Field, FieldSet,
    JsonSerializer, MissingFilePolicy, Serializer, SerializerError, StoreOptions,
    TomlSerializer, Visibility,
};
