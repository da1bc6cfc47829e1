//! Object properties panel
//!
//! Shows the transform and components of the selected scene object.

use crate::panel::Rect;

use super::PanelView;

#[derive(Debug, Clone)]
pub struct PropertiesPanel {
    pub selected: String,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    pub components: Vec<String>,
}

impl Default for PropertiesPanel {
    fn default() -> Self {
        Self {
            selected: "Cube_01".to_string(),
            position: [0.0, 1.5, -2.0],
            rotation: [0.0, 45.0, 0.0],
            scale: [1.0, 1.0, 1.0],
            components: vec![
                "MeshRenderer".to_string(),
                "BoxCollider".to_string(),
                "Rigidbody".to_string(),
            ],
        }
    }
}

fn vec3(v: [f32; 3]) -> String {
    format!("({:.1}, {:.1}, {:.1})", v[0], v[1], v[2])
}

impl PanelView for PropertiesPanel {
    fn draw(&self, _name: &str, _rect: Rect) -> Vec<String> {
        let mut lines = vec![
            "=== OBJECT PROPERTIES ===".to_string(),
            format!("Selected: {}", self.selected),
            "Transform:".to_string(),
            format!("  Position: {}", vec3(self.position)),
            format!("  Rotation: {}", vec3(self.rotation)),
            format!("  Scale:    {}", vec3(self.scale)),
            "Components:".to_string(),
        ];
        lines.extend(self.components.iter().map(|c| format!("  - {}", c)));
        lines
    }
}
