//! Infrastructure layer for the settings store.
//!
//! Contains the file-system facing adapters: reading and atomically writing
//! the settings file, choosing backup names for broken files, and resolving
//! the anchor directory a relative settings path hangs off.
//!
//! **Dependency rule**: this layer may depend on `settings_core` and the
//! crate's error type, but MUST NOT import from `application`.

pub mod storage;
