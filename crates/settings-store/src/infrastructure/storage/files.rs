//! Whole-file operations on the settings file.
//!
//! Every failure is reported as [`SettingsError::FileAccessFailed`] carrying
//! the path that was being touched and the original `io::Error`.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;

/// Returns `true` if anything (file, directory, dangling symlink) exists at
/// `path`.
pub fn file_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Reads the whole file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, SettingsError> {
    fs::read(path).map_err(|source| SettingsError::io(path, source))
}

/// Renames `from` to `to`.  Both paths are expected on the same file system.
pub fn rename(from: &Path, to: &Path) -> Result<(), SettingsError> {
    fs::rename(from, to).map_err(|source| SettingsError::io(from, source))
}

/// Writes `bytes` to `path`, creating the parent directory if needed.
///
/// The bytes go to a sibling `<name>.tmp` file first, which is then renamed
/// over `path`.  On failure the temp file is removed, so `path` holds either
/// its previous content or the new content and never a partial write.
///
/// When `path` is a symlink the link is kept and its target is rewritten.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), SettingsError> {
    let target = write_target(path)?;
    if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| SettingsError::io(dir, source))?;
    }

    let tmp = temp_path(&target);
    if let Err(source) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(SettingsError::io(&tmp, source));
    }
    if let Err(source) = fs::rename(&tmp, &target) {
        let _ = fs::remove_file(&tmp);
        return Err(SettingsError::io(&target, source));
    }
    Ok(())
}

/// The file a write to `path` must replace: the link target for a symlink,
/// `path` itself otherwise.
fn write_target(path: &Path) -> Result<PathBuf, SettingsError> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).map_err(|source| SettingsError::io(path, source))
        }
        _ => Ok(path.to_path_buf()),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("settings"));
    name.push(".tmp");
    path.with_file_name(name)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
