//! Where panelview keeps its files
//!
//! `config.yaml` and the `logs/` directory share one per-user directory named
//! after the app. The layout file itself is not here; it lives wherever
//! `ViewerConfig::layout_file` or `--layout` points.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "panelview";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// Per-user panelview directory.
///
/// `$XDG_CONFIG_HOME/panelview` when that variable is set, `~/.config/panelview`
/// otherwise, and `%APPDATA%\panelview` on Windows. `None` if no home
/// directory can be determined.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|base| base.join(APP_DIR))
}

/// Viewer settings read by `ViewerConfig::load`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Target of the rolling file log
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

fn create(path: &Path) -> Result<PathBuf, String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))?;
    Ok(path.to_path_buf())
}

/// Create the log directory (and its parent) if missing
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    create(&dir)
}
