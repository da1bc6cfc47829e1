//! Viewer configuration persistence
//!
//! Stores user preferences in `~/.config/panelview/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::persistence::DEFAULT_LAYOUT_FILE;

/// Viewer configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Layout file used by the save/load hotkeys
    #[serde(default = "default_layout_file")]
    pub layout_file: PathBuf,

    /// Load `layout_file` on startup instead of the default layout
    #[serde(default)]
    pub restore_layout: bool,

    /// Initial window width in logical pixels
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Initial window height in logical pixels
    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

fn default_layout_file() -> PathBuf {
    PathBuf::from(DEFAULT_LAYOUT_FILE)
}

fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    800
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            layout_file: default_layout_file(),
            restore_layout: false,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl ViewerConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write config as YAML, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
