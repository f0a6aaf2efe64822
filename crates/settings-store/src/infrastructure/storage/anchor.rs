//! Anchor resolution: the directory a relative settings path is joined to.
//!
//! - Windows:  `%APPDATA%\<app>`
//! - Linux:    `$XDG_CONFIG_HOME/<app>` or `~/.config/<app>`
//! - macOS:    `~/Library/Application Support/<app>`
//!
//! are the platform-config locations; the other anchors are the executable's
//! directory, the working directory, or an explicit directory.

use std::path::PathBuf;

use settings_core::Anchor;

use crate::error::SettingsError;

/// Resolves `anchor` to a directory.
///
/// # Errors
///
/// Returns [`SettingsError::NoAnchorDirectory`] when the executable has no
/// parent directory or the platform config base cannot be determined from the
/// environment, and [`SettingsError::FileAccessFailed`] when the OS refuses to
/// report the executable path or working directory.
pub fn resolve_anchor(anchor: &Anchor) -> Result<PathBuf, SettingsError> {
    match anchor {
        Anchor::Executable => {
            let exe = std::env::current_exe()
                .map_err(|source| SettingsError::io("<current executable>", source))?;
            exe.parent()
                .map(PathBuf::from)
                .ok_or(SettingsError::NoAnchorDirectory)
        }
        Anchor::WorkingDirectory => std::env::current_dir()
            .map_err(|source| SettingsError::io("<working directory>", source)),
        Anchor::PlatformConfig { app } => platform_config_base()
            .map(|base| base.join(app))
            .ok_or(SettingsError::NoAnchorDirectory),
        Anchor::Directory { path } => Ok(path.clone()),
    }
}

/// Resolves the per-user platform config base directory, without the app name.
fn platform_config_base() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(|h| PathBuf::from(h).join("Library").join("Application Support"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_directory_is_returned_as_is() {
        let dir = PathBuf::from("/srv/app/config");
        let resolved = resolve_anchor(&Anchor::Directory { path: dir.clone() }).unwrap();
        assert_eq!(resolved, dir);
    }

    #[test]
    fn test_executable_anchor_is_parent_of_current_exe() {
        // Arrange
        let exe = std::env::current_exe().expect("test binary path");

        // Act
        let resolved = resolve_anchor(&Anchor::Executable).expect("resolve");

        // Assert
        assert_eq!(Some(resolved.as_path()), exe.parent());
    }

    #[test]
    fn test_working_directory_anchor_matches_current_dir() {
        let resolved = resolve_anchor(&Anchor::WorkingDirectory).expect("resolve");
        assert_eq!(resolved, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_platform_config_anchor_ends_with_app_name() {
        // May be NoAnchorDirectory in a stripped environment; that is acceptable.
        let anchor = Anchor::PlatformConfig {
            app: "settings-store-test".to_string(),
        };
        match resolve_anchor(&anchor) {
            Ok(path) => assert!(path.ends_with("settings-store-test"), "got {path:?}"),
            Err(SettingsError::NoAnchorDirectory) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
}
