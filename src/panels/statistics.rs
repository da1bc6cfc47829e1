//! Statistics panel

use crate::panel::Rect;

use super::PanelView;

#[derive(Debug, Clone, Default)]
pub struct StatisticsPanel {
    pub updates: u64,
    pub resizes: u64,
    /// Normalized size reported by the last resize
    pub last_size: Option<(f32, f32)>,
}

impl PanelView for StatisticsPanel {
    fn draw(&self, _name: &str, rect: Rect) -> Vec<String> {
        let (w, h) = self.last_size.unwrap_or((rect.width, rect.height));
        vec![
            "=== STATISTICS ===".to_string(),
            format!("Updates: {}", self.updates),
            format!("Resizes: {}", self.resizes),
            format!("Size: {:.2} x {:.2}", w, h),
        ]
    }

    fn update(&mut self) {
        self.updates += 1;
    }

    fn on_resize(&mut self, width: f32, height: f32) {
        self.resizes += 1;
        self.last_size = Some((width, height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_updates_and_resizes() {
        let mut stats = StatisticsPanel::default();
        stats.update();
        stats.update();
        stats.on_resize(0.3, 0.4);
        assert_eq!(stats.updates, 2);
        assert_eq!(stats.resizes, 1);
        assert_eq!(stats.last_size, Some((0.3, 0.4)));
    }
}
