//! Error type for settings store operations.

use std::path::PathBuf;

use settings_core::SerializerError;
use thiserror::Error;

/// Errors returned by [`crate::SettingsStore`] operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No settings file exists and the missing-file policy is `Fail`.
    #[error("settings file not found at {path} and the missing-file policy is `fail`")]
    MissingFile { path: PathBuf },

    /// The file could not be deserialized and the corrupt-file policy is `Fail`.
    #[error("settings file at {path} could not be deserialized: {source}")]
    DeserializationFailed {
        path: PathBuf,
        #[source]
        source: SerializerError,
    },

    /// A file-system operation on the settings file or its directory failed.
    #[error("I/O error accessing settings at {path}: {source}")]
    FileAccessFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The serializer could not encode a settings record.
    #[error("failed to serialize settings: {0}")]
    SerializationFailed(#[source] SerializerError),

    /// Recovery kept producing a file that does not deserialize.
    #[error("settings file at {path} still unreadable after {attempts} recovery attempts")]
    Unrecoverable { path: PathBuf, attempts: u32 },

    /// The anchor directory for a relative settings path could not be determined.
    #[error("could not determine the anchor directory for the settings file")]
    NoAnchorDirectory,
}

impl SettingsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccessFailed {
            path: path.into(),
            source,
        }
    }
}
