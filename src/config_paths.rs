//! Where documint-layout keeps its files
//!
//! Everything lives under one base directory:
//! - Unix/macOS: `$XDG_CONFIG_HOME/documint-layout/` or `~/.config/documint-layout/`
//! - Windows: `%APPDATA%\documint-layout\`
//!
//! ```text
//! documint-layout/
//!   config.yaml    layout config (breakpoint, minimum width, storage key)
//!   state/         FileStore records, one <key>.json per key
//!   logs/          rolling log files from the tracing file layer
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "documint-layout";
const CONFIG_FILE: &str = "config.yaml";
const STATE_DIR: &str = "state";
const LOGS_DIR: &str = "logs";

/// Base directory, or None when neither the platform variable nor a home
/// directory is available
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Directory of the default file-backed layout store
pub fn state_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(STATE_DIR))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create `path` and its parents; an existing directory is fine
pub(crate) fn ensure_dir(path: &Path) -> Result<PathBuf, String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))?;
    Ok(path.to_path_buf())
}

fn ensure_subdir(name: &str) -> Result<PathBuf, String> {
    let base = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&base.join(name))
}

/// Ensure the layout store directory exists, returning it
pub fn ensure_state_dir() -> Result<PathBuf, String> {
    ensure_subdir(STATE_DIR)
}

/// Ensure the log directory exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    ensure_subdir(LOGS_DIR)
}
