//! Collision-free names for broken settings files.
//!
//! When a settings file cannot be deserialized and the policy says to keep
//! it, the file is renamed next to itself as
//!
//! ```text
//! OLD-<stem>-<yyyy-MM-dd-HH-mm-ss><suffix><ext>
//! ```
//!
//! `<suffix>` is empty on the first try and `-2`, `-3`, ... on later tries, so
//! two backups made within the same wall-clock second get distinct names.
//! The first candidate that does not exist on disk wins.
//!
//! The search has no upper bound.  It ends because a directory never holds
//! every suffix for one second; a directory deliberately pre-filled with
//! `OLD-...-2` through `OLD-...-N` only delays it, and an unbounded supply of
//! such files would keep it searching.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use super::files::file_exists;

/// Prefix of every backup file name.
pub const BACKUP_PREFIX: &str = "OLD-";

/// `strftime` pattern of the backup timestamp (one-second granularity).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Returns an unused backup path for `original`, stamped with the local time.
pub fn next_backup_name(original: &Path) -> PathBuf {
    next_backup_name_at(original, Local::now().naive_local())
}

/// Returns an unused backup path for `original`, stamped with `now`.
pub fn next_backup_name_at(original: &Path, now: NaiveDateTime) -> PathBuf {
    let stamp = now.format(TIMESTAMP_FORMAT).to_string();
    let directory = original.parent().unwrap_or_else(|| Path::new(""));

    let mut attempt: u64 = 1;
    loop {
        let candidate = directory.join(candidate_file_name(original, &stamp, attempt));
        if !file_exists(&candidate) {
            return candidate;
        }
        attempt += 1;
    }
}

fn candidate_file_name(original: &Path, stamp: &str, attempt: u64) -> OsString {
    let mut name = OsString::from(BACKUP_PREFIX);
    if let Some(stem) = original.file_stem() {
        name.push(stem);
    }
    name.push("-");
    name.push(stamp);
    if attempt > 1 {
        name.push(format!("-{attempt}"));
    }
    if let Some(ext) = original.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

// ── Tests ─────────────────────────────────────────────────────────────────────
