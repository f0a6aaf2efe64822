//! # settings-core
//!
//! Shared library for settings-store containing the contracts a settings
//! record must satisfy, the field-by-field merge routine, the store policy
//! types, and the serializers that turn a record into bytes and back.
//!
//! This crate never touches the file system.  Everything that reads, writes
//! or renames files lives in the `settings-store` crate.
//!
//! # Architecture overview
//!
//! A settings store keeps exactly one *live* settings record in memory and
//! mirrors it to a single file on disk.  This crate supplies the pieces the
//! store is built from:
//!
//! - **`domain`** – What a settings record is (`Defaultable`, `FieldSet`),
//!   how one record is merged into another without replacing it (`merge`),
//!   and how the store reacts to missing or corrupt files (`MissingFilePolicy`,
//!   `CorruptFilePolicy`, `StoreOptions`).
//!
//! - **`serialization`** – The `Serializer` collaborator trait and two
//!   implementations: pretty-printed JSON (the default) and TOML.

pub mod domain;
pub mod serialization;

pub use domain::defaults::Defaultable;
pub use domain::fields::{eligible_field_names, merge, Field, FieldSet, Visibility};
pub use domain::options::{
    Anchor, CorruptFilePolicy, MissingFilePolicy, StoreOptions, DEFAULT_MAX_RECOVERY_ATTEMPTS,
};
pub use serialization::json::JsonSerializer;
pub use serialization::toml_format::TomlSerializer;
pub use serialization::{Serializer, SerializerError};

#[cfg(any(test, feature = "mock"))]
pub use serialization::MockSerializer;
