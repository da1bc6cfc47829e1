//! Render view panel - hosts the 3D scene preview

use crate::panel::Rect;

use super::PanelView;

#[derive(Debug, Clone, Default)]
pub struct RenderViewPanel {
    /// Frames this panel has been updated for
    pub frames: u64,
}

impl PanelView for RenderViewPanel {
    fn draw(&self, _name: &str, _rect: Rect) -> Vec<String> {
        vec![
            "=== RENDER VIEW ===".to_string(),
            "Displaying 3D scene preview".to_string(),
            "Controls:".to_string(),
            "  - WASD: Move camera".to_string(),
            "  - Mouse: Look around".to_string(),
            "  - Scroll: Zoom".to_string(),
            format!("Frames: {}", self.frames),
        ]
    }

    fn update(&mut self) {
        self.frames += 1;
    }
}
