//! Centralized configuration paths for tagbox
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/tagbox/`
//! - Windows: `%APPDATA%\tagbox\`
//!
//! tagbox keeps no state between runs, so only two locations matter: the
//! optional `config.yaml` read by [`TextBoxConfig::load`] and the `logs/`
//! directory used by `tagbox --log`.
//!
//! [`TextBoxConfig::load`]: crate::config::TextBoxConfig::load

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

const APP_DIR: &str = "tagbox";

/// Base name of the rotated log files
pub const LOG_FILE_NAME: &str = "tagbox.log";

/// Base config directory for tagbox
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/tagbox`
///   - Else: `~/.config/tagbox`
///
/// Windows:
///   - `%APPDATA%\tagbox`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/tagbox/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/tagbox/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("No config directory available")?;
    ensure_dir(&logs)?;
    Ok(logs)
}
