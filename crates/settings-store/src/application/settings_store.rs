//! SettingsStore: load, save and recover one settings file.
//!
//! The store owns the *live* settings record and the location of the file that
//! mirrors it.  The live record is created once, from defaults, and is only
//! ever changed in place by merging another record into it, so a reference
//! taken through [`SettingsStore::settings`] always names the same object.
//!
//! # Load state machine
//!
//! ```text
//!              ┌──────────── file missing? ────────────┐
//!              │ CreateDefault   Fail          Skip    │
//!              │ write defaults  MissingFile   Ok(())  │
//!              └───────┬───────────────────────────────┘
//!                      ▼
//!   ┌──────────► read bytes ── I/O error ──► FileAccessFailed
//!   │                  │
//!   │             deserialize ── ok ──► merge into live record, Ok(())
//!   │                  │
//!   │               failed
//!   │                  │  Fail ──────────────► DeserializationFailed
//!   │                  │  cap reached ───────► Unrecoverable
//!   │                  ▼
//!   │   BackupAndRecreate: rename to OLD-..., write defaults
//!   │   OverwriteWithDefault: write defaults
//!   └──────────────────┘
//! ```
//!
//! Writing defaults is a save and follows the save-failure flag: with
//! `throw_on_failed_save` off, failures while recovering are logged and the
//! loop carries on, ending either at the mandatory read or at the cap.  A
//! broken file that could not be moved aside is never overwritten.

use std::path::{Path, PathBuf};

use settings_core::{
    merge, CorruptFilePolicy, Defaultable, FieldSet, JsonSerializer, MissingFilePolicy,
    Serializer, StoreOptions,
};
use tracing::{debug, info, warn};

use crate::error::SettingsError;
use crate::infrastructure::storage::{backup, files, SettingsLocation};

/// File-backed store for a settings record of type `T`.
pub struct SettingsStore<T, S = JsonSerializer> {
    settings: T,
    serializer: S,
    location: SettingsLocation,
    on_missing_file: MissingFilePolicy,
    on_failed_deserialization: CorruptFilePolicy,
    throw_on_failed_save: bool,
    max_recovery_attempts: u32,
}

impl<T, S> SettingsStore<T, S>
where
    T: Defaultable + FieldSet + 'static,
    S: Serializer<T>,
{
    /// Creates a store with default options: `Settings/Settings.json` next to
    /// the running executable.
    ///
    /// # Errors
    ///
    /// Returns an error when the executable's directory cannot be determined.
    pub fn new(serializer: S) -> Result<Self, SettingsError> {
        Self::with_options(serializer, StoreOptions::default())
    }

    /// Creates a store from an options bundle.
    ///
    /// # Errors
    ///
    /// Returns an error when the options' anchor cannot be resolved.
    pub fn with_options(serializer: S, options: StoreOptions) -> Result<Self, SettingsError> {
        let location = SettingsLocation::resolve(&options.anchor, options.relative_path.clone())?;
        Ok(Self::from_parts(serializer, location, &options))
    }

    /// Creates a store for the file at `path` with default policies.
    pub fn at_path(serializer: S, path: impl Into<PathBuf>) -> Self {
        Self::from_parts(
            serializer,
            SettingsLocation::at(path),
            &StoreOptions::default(),
        )
    }

    fn from_parts(serializer: S, location: SettingsLocation, options: &StoreOptions) -> Self {
        Self {
            settings: T::new_default(),
            serializer,
            location,
            on_missing_file: options.on_missing_file,
            on_failed_deserialization: options.on_failed_deserialization,
            throw_on_failed_save: options.throw_on_failed_save,
            max_recovery_attempts: options.max_recovery_attempts,
        }
    }

    // ── Load / save ───────────────────────────────────────────────────────────

    /// Makes the live settings reflect the file, creating or repairing the
    /// file as the policies dictate.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::MissingFile`] – no file and policy `Fail`.
    /// - [`SettingsError::FileAccessFailed`] – the file could not be read, or
    ///   a recovery step failed while `throw_on_failed_save` is on.
    /// - [`SettingsError::DeserializationFailed`] – bad content and policy `Fail`.
    /// - [`SettingsError::SerializationFailed`] – defaults could not be encoded
    ///   while `throw_on_failed_save` is on.
    /// - [`SettingsError::Unrecoverable`] – the recovery cap was reached.
    pub fn load(&mut self) -> Result<(), SettingsError> {
        let path = self.location.absolute_path().to_path_buf();

        if !files::file_exists(&path) {
            match self.on_missing_file {
                MissingFilePolicy::CreateDefault => {
                    info!("no settings file at {}; writing defaults", path.display());
                    self.write_defaults()?;
                }
                MissingFilePolicy::Fail => return Err(SettingsError::MissingFile { path }),
                MissingFilePolicy::Skip => {
                    debug!("no settings file at {}; keeping current settings", path.display());
                    return Ok(());
                }
            }
        }

        let mut attempts = 0;
        loop {
            let bytes = files::read_bytes(&path)?;
            let error = match self.serializer.deserialize(&bytes) {
                Ok(fresh) => {
                    let copied = merge(&fresh, &mut self.settings);
                    debug!("loaded {copied} settings fields from {}", path.display());
                    return Ok(());
                }
                Err(error) => error,
            };

            match self.on_failed_deserialization {
                CorruptFilePolicy::Fail => {
                    return Err(SettingsError::DeserializationFailed {
                        path,
                        source: error,
                    });
                }
                _ if attempts >= self.max_recovery_attempts => {
                    return Err(SettingsError::Unrecoverable { path, attempts });
                }
                CorruptFilePolicy::BackupAndRecreate => {
                    let backup = backup::next_backup_name(&path);
                    warn!(
                        "settings file {} is unreadable ({error}); moving it to {}",
                        path.display(),
                        backup.display()
                    );
                    match files::rename(&path, &backup) {
                        Ok(()) => self.write_defaults()?,
                        // Unmoved bytes stay where they are.
                        Err(move_error) => self.apply_save_policy(Err(move_error))?,
                    }
                }
                CorruptFilePolicy::OverwriteWithDefault => {
                    warn!(
                        "settings file {} is unreadable ({error}); overwriting with defaults",
                        path.display()
                    );
                    self.write_defaults()?;
                }
            }
            attempts += 1;
        }
    }

    /// Writes the live settings to the file.
    ///
    /// # Errors
    ///
    /// With `throw_on_failed_save` on, returns
    /// [`SettingsError::SerializationFailed`] or
    /// [`SettingsError::FileAccessFailed`] (whose source is the original
    /// `io::Error`).  With it off, failures are logged and `Ok(())` is returned.
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_record(&self.settings)
    }

    fn save_record(&self, settings: &T) -> Result<(), SettingsError> {
        let written = self
            .serialize(settings)
            .and_then(|bytes| files::write_atomic(self.location.absolute_path(), &bytes));
        self.apply_save_policy(written)
    }

    fn write_defaults(&self) -> Result<(), SettingsError> {
        self.save_record(&T::new_default())
    }

    fn apply_save_policy(&self, result: Result<(), SettingsError>) -> Result<(), SettingsError> {
        match result {
            Err(error) if !self.throw_on_failed_save => {
                warn!(
                    "ignoring failed write to {}: {error}",
                    self.location.absolute_path().display()
                );
                Ok(())
            }
            other => other,
        }
    }

    // ── Settings record ───────────────────────────────────────────────────────

    /// The live settings record.
    pub fn settings(&self) -> &T {
        &self.settings
    }

    /// Mutable access to the live settings record.
    pub fn settings_mut(&mut self) -> &mut T {
        &mut self.settings
    }

    /// A new default record with the live settings merged into it.
    pub fn copy_of_settings(&self) -> T {
        let mut copy = T::new_default();
        merge(&self.settings, &mut copy);
        copy
    }

    /// Merges `source` into the live settings; returns the number of fields
    /// copied.
    pub fn copy_settings_from(&mut self, source: &T) -> usize {
        merge(source, &mut self.settings)
    }

    pub fn new_default_settings(&self) -> T {
        T::new_default()
    }

    /// The live settings as the serializer would write them.
    pub fn serialized_settings(&self) -> Result<Vec<u8>, SettingsError> {
        self.serialize(&self.settings)
    }

    /// `settings` as the serializer would write them.
    pub fn serialize(&self, settings: &T) -> Result<Vec<u8>, SettingsError> {
        self.serializer
            .serialize(settings)
            .map_err(SettingsError::SerializationFailed)
    }
}

impl<T, S> SettingsStore<T, S> {
    // ── Location ──────────────────────────────────────────────────────────────

    pub fn absolute_path(&self) -> &Path {
        self.location.absolute_path()
    }

    pub fn set_absolute_path(&mut self, path: impl Into<PathBuf>) {
        self.location.set_absolute_path(path);
    }

    pub fn relative_path(&self) -> &Path {
        self.location.relative_path()
    }

    /// Sets the path relative to the anchor directory; the absolute path
    /// follows.
    pub fn set_relative_path(&mut self, path: impl Into<PathBuf>) {
        self.location.set_relative_path(path);
    }

    /// Directory holding the settings file.
    pub fn directory(&self) -> Option<&Path> {
        self.location.directory()
    }

    pub fn anchor_directory(&self) -> &Path {
        self.location.anchor_dir()
    }

    // ── Policy ────────────────────────────────────────────────────────────────

    pub fn on_missing_file(&self) -> MissingFilePolicy {
        self.on_missing_file
    }

    pub fn set_on_missing_file(&mut self, policy: MissingFilePolicy) {
        self.on_missing_file = policy;
    }

    pub fn on_failed_deserialization(&self) -> CorruptFilePolicy {
        self.on_failed_deserialization
    }

    pub fn set_on_failed_deserialization(&mut self, policy: CorruptFilePolicy) {
        self.on_failed_deserialization = policy;
    }

    pub fn throw_on_failed_save(&self) -> bool {
        self.throw_on_failed_save
    }

    pub fn set_throw_on_failed_save(&mut self, throw: bool) {
        self.throw_on_failed_save = throw;
    }

    pub fn max_recovery_attempts(&self) -> u32 {
        self.max_recovery_attempts
    }

    /// Caps recovery actions per load.  `0` turns every corrupt file into
    /// [`SettingsError::Unrecoverable`] unless the policy is `Fail`.
    pub fn set_max_recovery_attempts(&mut self, attempts: u32) {
        self.max_recovery_attempts = attempts;
    }
}

impl<T, S> std::fmt::Debug for SettingsStore<T, S>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("settings", &self.settings)
            .field("location", &self.location)
            .field("on_missing_file", &self.on_missing_file)
            .field("on_failed_deserialization", &self.on_failed_deserialization)
            .field("throw_on_failed_save", &self.throw_on_failed_save)
            .field("max_recovery_attempts", &self.max_recovery_attempts)
            .finish_non_exhaustive()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
