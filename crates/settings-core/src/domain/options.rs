//! Store policy and the options bundle.
//!
//! The store's behaviour on a missing or unreadable file is chosen by two
//! closed enums and one flag.  They can be set individually on a live store,
//! or bundled in a [`StoreOptions`] which a host application can keep inside
//! its own TOML configuration:
//!
//! ```toml
//! [settings]
//! relative_path = "Settings/Settings.json"
//! on_missing_file = "create-default"
//! on_failed_deserialization = "backup-and-recreate"
//! throw_on_failed_save = true
//! max_recovery_attempts = 3
//!
//! [settings.anchor]
//! kind = "platform-config"
//! app = "my-app"
//! ```
//!
//! Keys absent from the file take their default values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How many recovery actions one load may take before giving up.
pub const DEFAULT_MAX_RECOVERY_ATTEMPTS: u32 = 3;

/// What a load does when the settings file does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingFilePolicy {
    /// Write a default settings file, then load it.
    #[default]
    CreateDefault,
    /// Fail with `MissingFile`.  Nothing is created.
    Fail,
    /// Keep the live settings as they are and report success.
    Skip,
}

/// What a load does when the settings file cannot be deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorruptFilePolicy {
    /// Rename the broken file to a backup name, write defaults, load again.
    BackupAndRecreate,
    /// Write defaults over the broken file, load again.
    #[default]
    OverwriteWithDefault,
    /// Fail with `DeserializationFailed`.  The file is left untouched.
    Fail,
}

/// Where a relative settings path is anchored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Anchor {
    /// Directory containing the running executable.
    #[default]
    Executable,
    /// The process working directory.
    WorkingDirectory,
    /// The per-user platform configuration directory for `app`.
    PlatformConfig { app: String },
    /// An explicit directory.
    Directory { path: PathBuf },
}

/// Everything needed to construct a settings store, apart from the serializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Settings file path relative to the anchor.
    pub relative_path: PathBuf,
    pub on_missing_file: MissingFilePolicy,
    pub on_failed_deserialization: CorruptFilePolicy,
    /// When `false`, save failures are logged and swallowed.
    pub throw_on_failed_save: bool,
    /// Upper bound on recovery actions (backup/overwrite) per load.
    pub max_recovery_attempts: u32,
    /// Base directory for `relative_path`.  Last, so it serializes as a
    /// trailing TOML table.
    pub anchor: Anchor,
}

impl StoreOptions {
    /// `Settings/Settings.json`, the default path relative to the anchor.
    pub fn default_relative_path() -> PathBuf {
        Path::new("Settings").join("Settings.json")
    }

    /// Parses options from a TOML document.  Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the TOML error when the text is malformed or a value is not a
    /// recognised policy name.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            relative_path: Self::default_relative_path(),
            on_missing_file: MissingFilePolicy::default(),
            on_failed_deserialization: CorruptFilePolicy::default(),
            throw_on_failed_save: true,
            max_recovery_attempts: DEFAULT_MAX_RECOVERY_ATTEMPTS,
            anchor: Anchor::default(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_store_constructor_defaults() {
        // Arrange / Act
        let opts = StoreOptions::default();

        // Assert
        assert_eq!(opts.anchor, Anchor::Executable);
        assert_eq!(opts.relative_path, Path::new("Settings").join("Settings.json"));
        assert_eq!(opts.on_missing_file, MissingFilePolicy::CreateDefault);
        assert_eq!(
            opts.on_failed_deserialization,
            CorruptFilePolicy::OverwriteWithDefault
        );
        assert!(opts.throw_on_failed_save);
        assert_eq!(opts.max_recovery_attempts, DEFAULT_MAX_RECOVERY_ATTEMPTS);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let opts = StoreOptions::from_toml_str("").expect("empty document must parse");
        assert_eq!(opts, StoreOptions::default());
    }

    #[test]
    fn test_toml_overrides_policies() {
        // Arrange
        let text = r#"
on_missing_file = "fail"
on_failed_deserialization = "backup-and-recreate"
throw_on_failed_save = false
max_recovery_attempts = 5
"#;

        // Act
        let opts = StoreOptions::from_toml_str(text).expect("deserialize");

        // Assert
        assert_eq!(opts.on_missing_file, MissingFilePolicy::Fail);
        assert_eq!(
            opts.on_failed_deserialization,
            CorruptFilePolicy::BackupAndRecreate
        );
        assert!(!opts.throw_on_failed_save);
        assert_eq!(opts.max_recovery_attempts, 5);
        // Unspecified fields keep their defaults
        assert_eq!(opts.anchor, Anchor::Executable);
    }

    #[test]
    fn test_toml_anchor_variants_parse() {
        let text = r#"
[anchor]
kind = "platform-config"
app = "demo"
"#;
        let opts = StoreOptions::from_toml_str(text).expect("deserialize");
        assert_eq!(
            opts.anchor,
            Anchor::PlatformConfig {
                app: "demo".to_string()
            }
        );

        let text = r#"
[anchor]
kind = "directory"
path = "/srv/app"
"#;
        let opts = StoreOptions::from_toml_str(text).expect("deserialize");
        assert_eq!(
            opts.anchor,
            Anchor::Directory {
                path: PathBuf::from("/srv/app")
            }
        );
    }

    #[test]
    fn test_unknown_policy_name_is_rejected() {
        let result = StoreOptions::from_toml_str(r#"on_missing_file = "ignore""#);
        assert!(result.is_err(), "policy values form a closed set");
    }

    #[test]
    fn test_options_round_trip_through_toml() {
        // Arrange
        let opts = StoreOptions {
            relative_path: PathBuf::from("conf/app.toml"),
            on_missing_file: MissingFilePolicy::Skip,
            on_failed_deserialization: CorruptFilePolicy::Fail,
            throw_on_failed_save: false,
            max_recovery_attempts: 1,
            anchor: Anchor::WorkingDirectory,
        };

        // Act
        let text = toml::to_string_pretty(&opts).expect("serialize");
        let restored = StoreOptions::from_toml_str(&text).expect("deserialize");

        // Assert
        assert_eq!(opts, restored);
    }
}
