//! Where the settings file lives.
//!
//! A store knows its file through three paths: the anchor directory, the path
//! relative to that anchor, and the absolute path used for every file
//! operation.  The containing directory is never stored; it is always
//! derived from the absolute path, so it cannot drift out of sync.

use std::path::{Path, PathBuf};

use settings_core::Anchor;
use tracing::debug;

use super::anchor::resolve_anchor;
use crate::error::SettingsError;

/// Anchor, relative and absolute path of one settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLocation {
    anchor_dir: PathBuf,
    relative_path: PathBuf,
    absolute_path: PathBuf,
}

impl SettingsLocation {
    /// Builds a location from an already resolved anchor directory.
    pub fn new(anchor_dir: impl Into<PathBuf>, relative_path: impl Into<PathBuf>) -> Self {
        let anchor_dir = anchor_dir.into();
        let relative_path = relative_path.into();
        let absolute_path = anchor_dir.join(&relative_path);
        Self {
            anchor_dir,
            relative_path,
            absolute_path,
        }
    }

    /// Resolves `anchor` and joins `relative_path` onto it.
    pub fn resolve(anchor: &Anchor, relative_path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        Ok(Self::new(resolve_anchor(anchor)?, relative_path))
    }

    /// A location for a file at `path`; its parent becomes the anchor.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let anchor_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let relative_path = path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| path.clone());
        Self {
            anchor_dir,
            relative_path,
            absolute_path: path,
        }
    }

    pub fn anchor_dir(&self) -> &Path {
        &self.anchor_dir
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Path used for every read, write and rename.
    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    /// Directory containing the settings file, derived from the absolute path.
    pub fn directory(&self) -> Option<&Path> {
        self.absolute_path.parent()
    }

    /// Replaces the relative path and recomputes the absolute path from the
    /// anchor.
    pub fn set_relative_path(&mut self, relative_path: impl Into<PathBuf>) {
        self.relative_path = relative_path.into();
        self.absolute_path = self.anchor_dir.join(&self.relative_path);
        debug!("settings path is now {}", self.absolute_path.display());
    }

    /// Points the location at `path` directly.  The anchor and relative path
    /// are left as they were.
    pub fn set_absolute_path(&mut self, path: impl Into<PathBuf>) {
        self.absolute_path = path.into();
        debug!("settings path is now {}", self.absolute_path.display());
    }
}
