//! Scene hierarchy panel

use crate::panel::Rect;

use super::PanelView;

#[derive(Debug, Clone)]
pub struct HierarchyPanel {
    pub objects: Vec<String>,
}

impl Default for HierarchyPanel {
    fn default() -> Self {
        Self {
            objects: [
                "Main Camera",
                "Cube_01",
                "Light_Directional",
                "Player",
                "Floor",
                "Sphere_01",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl PanelView for HierarchyPanel {
    fn draw(&self, _name: &str, _rect: Rect) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.objects.len() + 2);
        lines.push("=== SCENE HIERARCHY ===".to_string());
        for (i, object) in self.objects.iter().enumerate() {
            lines.push(format!("  [{}] {}", i, object));
        }
        lines.push(format!("Total objects: {}", self.objects.len()));
        lines
    }
}
