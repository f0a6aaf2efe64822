//! The `Serializer` collaborator.
//!
//! The store hands whole settings records to a serializer and gets bytes back,
//! and vice versa.  It never looks inside the bytes.  Two failures matter to
//! the store and are kept apart in [`SerializerError`]: a record that cannot
//! be encoded, and bytes that cannot be decoded.  Only the second one drives
//! the corrupt-file recovery policy.
//!
//! # Unknown fields
//!
//! Recovery is only meaningful when a file written for a different shape is
//! rejected.  Settings types are expected to declare
//! `#[serde(deny_unknown_fields)]` so that extra keys fail deserialization in
//! every format.

pub mod json;
pub mod toml_format;

use thiserror::Error;

/// Boxed cause carried by [`SerializerError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by a [`Serializer`].
#[derive(Debug, Error)]
pub enum SerializerError {
    /// The record could not be encoded.
    #[error("failed to serialize settings as {format}: {source}")]
    Serialize {
        format: &'static str,
        #[source]
        source: BoxError,
    },

    /// The bytes could not be decoded into a record.
    #[error("failed to deserialize settings from {format}: {source}")]
    Deserialize {
        format: &'static str,
        #[source]
        source: BoxError,
    },
}

impl SerializerError {
    pub fn serialize(format: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Serialize {
            format,
            source: source.into(),
        }
    }

    pub fn deserialize(format: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Deserialize {
            format,
            source: source.into(),
        }
    }

    /// Name of the format that failed (`"json"`, `"toml"`, ...).
    pub fn format(&self) -> &'static str {
        match self {
            Self::Serialize { format, .. } | Self::Deserialize { format, .. } => format,
        }
    }
}

/// Converts settings records of type `T` to and from bytes.
///
/// Production code uses [`json::JsonSerializer`] or
/// [`toml_format::TomlSerializer`]; tests inject failures through the
/// generated `MockSerializer`.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Serializer<T: 'static> {
    /// Encodes `settings`.
    fn serialize(&self, settings: &T) -> Result<Vec<u8>, SerializerError>;

    /// Decodes a fresh record from `bytes`.
    fn deserialize(&self, bytes: &[u8]) -> Result<T, SerializerError>;
}
