//! Placeholder panel
//!
//! Diagnostic content used for categories without a dedicated view. Reports
//! the panel's name and geometry.

use crate::panel::Rect;

use super::PanelView;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderPanel;

impl PanelView for PlaceholderPanel {
    fn draw(&self, name: &str, rect: Rect) -> Vec<String> {
        vec![format!(
            "Module: {} at ({}, {}) size ({}x{})",
            name, rect.x, rect.y, rect.width, rect.height
        )]
    }
}
