//! Application model - the complete state of the viewer shell
//!
//! This module contains the state types following the Elm Architecture pattern.

use std::path::PathBuf;

use crate::config::ViewerConfig;
use crate::layout::LayoutStore;
use crate::panel::PanelCategory;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Panel layout and in-progress gesture
    pub layout: LayoutStore,
    /// Persisted viewer configuration
    pub config: ViewerConfig,
    /// Layout file used by save/load when no explicit path is given
    pub layout_path: PathBuf,
    /// Window dimensions in physical pixels
    pub window_size: (u32, u32),
    /// Last diagnostic shown to the user
    pub status: Option<String>,
    /// Frames ticked so far
    pub frame: u64,
}

impl AppModel {
    /// Create a model with the standard layout
    pub fn new(window_width: u32, window_height: u32, config: ViewerConfig) -> Self {
        let layout_path = config.layout_file.clone();
        Self {
            layout: LayoutStore::with_default_layout(),
            config,
            layout_path,
            window_size: (window_width, window_height),
            status: None,
            frame: 0,
        }
    }

    /// Record a status line. Console panels echo it.
    pub fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        for panel in self
            .layout
            .iter_mut()
            .filter(|p| p.category == PanelCategory::Console)
        {
            if let Some(console) = panel.content.as_console_mut() {
                console.push_line(message.clone());
            }
        }
        self.status = Some(message);
    }

    /// Explicit path if given, otherwise the configured layout file
    pub fn resolve_layout_path(&self, path: Option<PathBuf>) -> PathBuf {
        path.unwrap_or_else(|| self.layout_path.clone())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width.max(1), height.max(1));
    }

    /// Convert a window pixel position to normalized viewport coordinates
    pub fn normalize_point(&self, x: f64, y: f64) -> (f32, f32) {
        let (w, h) = self.window_size;
        ((x / w.max(1) as f64) as f32, (y / h.max(1) as f64) as f32)
    }
}
