//! Asset browser panel

use crate::panel::Rect;

use super::PanelView;

#[derive(Debug, Clone)]
pub struct AssetsPanel {
    pub assets: Vec<String>,
}

impl Default for AssetsPanel {
    fn default() -> Self {
        Self {
            assets: [
                "model.obj",
                "texture.png",
                "material.mat",
                "scene.fbx",
                "sound.wav",
                "script.lua",
                "shader.glsl",
                "config.ini",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl PanelView for AssetsPanel {
    fn draw(&self, _name: &str, _rect: Rect) -> Vec<String> {
        let mut lines = vec![
            "=== ASSETS BROWSER ===".to_string(),
            "Project Assets:".to_string(),
        ];
        lines.extend(self.assets.iter().map(|asset| format!("  - {}", asset)));
        lines.push(format!("Total assets: {}", self.assets.len()));
        lines
    }
}
