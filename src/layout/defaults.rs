//! Standard panel arrangement (F1 / `--default-layout`)

use crate::panel::{Panel, PanelCategory, Rect};

/// The four standard panels, in insertion order.
///
/// Hierarchy down the left, render view in the middle, assets under the
/// hierarchy, properties down the right.
pub fn default_panels() -> Vec<Panel> {
    vec![
        Panel::new(
            PanelCategory::Hierarchy,
            "Hierarchy",
            Rect::new(0.0, 0.0, 0.2, 1.0),
        ),
        Panel::new(
            PanelCategory::RenderView,
            "RenderView",
            Rect::new(0.2, 0.0, 0.6, 0.7),
        ),
        Panel::new(
            PanelCategory::Assets,
            "Assets",
            Rect::new(0.0, 0.7, 0.2, 0.3),
        ),
        Panel::new(
            PanelCategory::ObjectProperties,
            "Properties",
            Rect::new(0.8, 0.0, 0.2, 1.0),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panels_are_normalized() {
        for panel in default_panels() {
            assert_eq!(panel.rect, panel.rect.normalized(), "{}", panel.name);
            assert!(!panel.name.contains(char::is_whitespace));
        }
    }
}
