//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use panelview::config::ViewerConfig;
use panelview::layout::LayoutStore;
use panelview::model::AppModel;
use panelview::panel::{Panel, PanelCategory, Rect};

/// A custom panel with the given name and rect
pub fn custom_panel(name: &str, x: f32, y: f32, width: f32, height: f32) -> Panel {
    Panel::new(PanelCategory::Custom, name, Rect::new(x, y, width, height))
}

/// A store holding the given panels in insertion order
pub fn store_from(panels: Vec<Panel>) -> LayoutStore {
    let mut store = LayoutStore::new();
    for panel in panels {
        store.add_panel(panel);
    }
    store
}

/// Names of the panels, in the order given
pub fn names<'a>(panels: impl IntoIterator<Item = &'a Panel>) -> Vec<String> {
    panels.into_iter().map(|p| p.name.clone()).collect()
}

/// `(category, name, x, y, width, height)` per panel, in store order
pub fn tuples(store: &LayoutStore) -> Vec<(i32, String, f32, f32, f32, f32)> {
    store
        .iter()
        .map(|p| {
            (
                p.category.index(),
                p.name.clone(),
                p.rect.x,
                p.rect.y,
                p.rect.width,
                p.rect.height,
            )
        })
        .collect()
}

/// An 800x600 model with the default layout, saving to `layout_path`
pub fn test_model(layout_path: &std::path::Path) -> AppModel {
    let mut model = AppModel::new(800, 600, ViewerConfig::default());
    model.layout_path = layout_path.to_path_buf();
    model
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

/// Assert the clamp invariant for every panel in the store
pub fn assert_in_bounds(store: &LayoutStore) {
    for panel in store.iter() {
        let r = panel.rect;
        assert!(
            (0.1..=1.0).contains(&r.width) && (0.1..=1.0).contains(&r.height),
            "{} has out-of-range size: {:?}",
            panel.name,
            r
        );
        assert!(r.x >= 0.0 && r.y >= 0.0, "{} has negative origin: {:?}", panel.name, r);
        assert!(
            r.right() <= 1.0 + 1e-6 && r.bottom() <= 1.0 + 1e-6,
            "{} extends past the viewport: {:?}",
            panel.name,
            r
        );
    }
}
