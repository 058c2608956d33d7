//! XDG-compliant path resolution for hostname-sync
//!
//! Provides consistent path resolution across platforms:
//! - Linux/macOS: ~/.config/hostname-sync/
//! - Windows: %APPDATA%\hostname-sync\

use std::path::{Path, PathBuf};

/// Get the configuration directory path
///
/// Returns the directory where config.json should be stored:
/// - Linux: `~/.config/hostname-sync/`
/// - macOS: `~/.config/hostname-sync/` (XDG-style, not ~/Library)
/// - Windows: `%APPDATA%\hostname-sync\`
pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        get_home_dir().map(|home| home.join(".config").join("hostname-sync"))
    }
    #[cfg(target_os = "windows")]
    {
        directories::BaseDirs::new().map(|dirs| dirs.config_dir().join("hostname-sync"))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        None
    }
}

/// Get the full path to the config file
///
/// Returns: `{config_dir}/config.json`
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|d| d.join("config.json"))
}

/// Get the current user's home directory
pub fn get_home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Expand a leading `~` to the home directory
///
/// Only `~` on its own or followed by a separator is expanded; `~user`
/// forms are left untouched.
pub fn expand_home(path: &str) -> PathBuf {
    expand_home_with(path, get_home_dir().as_deref())
}

fn expand_home_with(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home.to_path_buf();
    }
    match path
        .strip_prefix("~/")
        .or_else(|| path.strip_prefix("~\\"))
    {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}
