//! Layout store tests: lookup, hit-testing, draw order, visibility

mod common;

use common::{approx, assert_in_bounds, custom_panel, names, store_from, tuples};
use panelview::error::LayoutError;
use panelview::layout::LayoutStore;
use panelview::panel::{Panel, PanelCategory, Rect, MIN_SIZE};
use panelview::persistence;

// ============================================================================
// Hit-testing
// ============================================================================

#[test]
fn test_get_panel_at_returns_most_recently_added() {
    let store = store_from(vec![
        custom_panel("bottom", 0.0, 0.0, 0.6, 0.6),
        custom_panel("middle", 0.2, 0.2, 0.6, 0.6),
        custom_panel("top", 0.4, 0.4, 0.5, 0.5),
    ]);

    assert_eq!(store.get_panel_at(0.5, 0.5).unwrap().name, "top");
    assert_eq!(store.get_panel_at(0.3, 0.3).unwrap().name, "middle");
    assert_eq!(store.get_panel_at(0.1, 0.1).unwrap().name, "bottom");
    assert!(store.get_panel_at(0.95, 0.05).is_none());
}

#[test]
fn test_get_panel_at_bounds_are_inclusive() {
    let store = store_from(vec![custom_panel("p", 0.2, 0.2, 0.3, 0.3)]);

    assert!(store.get_panel_at(0.2, 0.2).is_some());
    assert!(store.get_panel_at(0.5, 0.5).is_some());
    assert!(store.get_panel_at(0.51, 0.3).is_none());
}

#[test]
fn test_get_panel_at_empty_store() {
    let store = LayoutStore::new();
    assert!(store.get_panel_at(0.5, 0.5).is_none());
}

#[test]
fn test_add_panel_normalizes_rect() {
    let mut store = store_from(vec![custom_panel("tiny", 0.95, 0.0, 0.05, 0.5)]);

    let rect = store.get_panel("tiny").unwrap().rect;
    assert!(approx(rect.x, 0.9));
    assert_eq!(rect.y, 0.0);
    assert!(approx(rect.width, 0.1));
    assert_eq!(rect.height, 0.5);

    // A move keeps the normalized size, so the saved tuple reloads unchanged
    store.on_press(0.95, 0.25);
    store.on_drag(0.0, 0.1);
    store.on_release();
    let before = tuples(&store);
    let mut reloaded = LayoutStore::new();
    reloaded.replace(persistence::decode(&persistence::encode(store.iter())).panels);
    assert_eq!(tuples(&reloaded), before);
    assert_in_bounds(&store);
}

#[test]
fn test_replace_normalizes_rects() {
    let mut store = LayoutStore::new();
    store.replace(vec![custom_panel("wide", -0.2, 0.5, 1.4, 0.8)]);

    let rect = store.get_panel("wide").unwrap().rect;
    assert_eq!((rect.x, rect.width), (0.0, 1.0));
    assert!(approx(rect.y, 0.2));
    assert!(approx(rect.height, 0.8));
}

#[test]
fn test_dense_grid_of_minimum_panels_is_stored_unchanged() {
    let side = 23;
    let step = (1.0 - MIN_SIZE) / side as f32;
    let panels: Vec<Panel> = (0..512)
        .map(|i| {
            let rect = Rect::new(
                (i % side) as f32 * step,
                (i / side) as f32 * step,
                MIN_SIZE,
                MIN_SIZE,
            );
            Panel::new(PanelCategory::Custom, format!("cell{}", i), rect)
        })
        .collect();
    let expected: Vec<Rect> = panels.iter().map(|p| p.rect).collect();

    let store = store_from(panels);
    let stored: Vec<Rect> = store.iter().map(|p| p.rect).collect();
    assert_eq!(stored, expected);
    assert_in_bounds(&store);
}

// ============================================================================
// Draw order
// ============================================================================

#[test]
fn test_draw_order_sorts_by_row_then_column() {
    let store = store_from(vec![
        custom_panel("A", 0.0, 0.5, 0.2, 0.2),
        custom_panel("B", 0.5, 0.2, 0.2, 0.2),
        custom_panel("C", 0.0, 0.2, 0.2, 0.2),
    ]);

    assert_eq!(names(store.compute_draw_order()), vec!["C", "B", "A"]);
    // Store order is untouched
    assert_eq!(names(store.iter()), vec!["A", "B", "C"]);
}

#[test]
fn test_draw_order_is_independent_of_insertion_order() {
    let forward = store_from(vec![
        custom_panel("A", 0.0, 0.5, 0.2, 0.2),
        custom_panel("B", 0.5, 0.2, 0.2, 0.2),
        custom_panel("C", 0.0, 0.2, 0.2, 0.2),
    ]);
    let reversed = store_from(vec![
        custom_panel("C", 0.0, 0.2, 0.2, 0.2),
        custom_panel("B", 0.5, 0.2, 0.2, 0.2),
        custom_panel("A", 0.0, 0.5, 0.2, 0.2),
    ]);

    assert_eq!(
        names(forward.compute_draw_order()),
        names(reversed.compute_draw_order())
    );
}

#[test]
fn test_draw_order_keeps_ties_in_insertion_order() {
    let store = store_from(vec![
        custom_panel("first", 0.3, 0.3, 0.2, 0.2),
        custom_panel("second", 0.3, 0.3, 0.4, 0.4),
    ]);
    assert_eq!(names(store.compute_draw_order()), vec!["first", "second"]);
}

#[test]
fn test_hidden_panels_are_skipped_but_retained() {
    let mut store = store_from(vec![
        custom_panel("shown", 0.0, 0.0, 0.5, 0.5),
        custom_panel("hidden", 0.5, 0.5, 0.5, 0.5).hidden(),
    ]);

    assert_eq!(names(store.compute_draw_order()), vec!["shown"]);
    assert_eq!(store.len(), 2);

    store.set_visible("hidden", true).unwrap();
    assert_eq!(names(store.compute_draw_order()), vec!["shown", "hidden"]);
}

// ============================================================================
// Lookup and removal
// ============================================================================

#[test]
fn test_get_panels_by_category_in_store_order() {
    let mut store = LayoutStore::with_default_layout();
    store.add_panel(Panel::new(
        PanelCategory::Hierarchy,
        "Outliner",
        Rect::new(0.3, 0.3, 0.2, 0.2),
    ));

    let found = store.get_panels_by_category(PanelCategory::Hierarchy);
    assert_eq!(names(found), vec!["Hierarchy", "Outliner"]);
    assert!(store
        .get_panels_by_category(PanelCategory::Statistics)
        .is_empty());
}

#[test]
fn test_duplicate_names_first_match_and_remove_all() {
    let mut store = store_from(vec![
        custom_panel("dup", 0.0, 0.0, 0.2, 0.2),
        custom_panel("other", 0.5, 0.5, 0.2, 0.2),
        custom_panel("dup", 0.3, 0.0, 0.2, 0.2),
    ]);

    assert_eq!(store.get_panel("dup").unwrap().rect.x, 0.0);

    store.remove_panel("dup").unwrap();
    assert_eq!(names(store.iter()), vec!["other"]);
}

#[test]
fn test_remove_missing_panel_is_not_found() {
    let mut store = LayoutStore::with_default_layout();
    let err = store.remove_panel("Timeline").unwrap_err();

    assert_eq!(err, LayoutError::NotFound("Timeline".to_string()));
    assert_eq!(store.len(), 4);
}

#[test]
fn test_toggle_visible_round_trip() {
    let mut store = LayoutStore::with_default_layout();

    assert_eq!(store.toggle_visible("Assets"), Ok(false));
    assert!(!store.get_panel("Assets").unwrap().visible);
    assert_eq!(store.toggle_visible("Assets"), Ok(true));
    assert!(store.toggle_visible("Nope").is_err());
}

// ============================================================================
// Default layout and frame output
// ============================================================================

#[test]
fn test_default_layout_arrangement() {
    let store = LayoutStore::with_default_layout();
    let expected = [
        (PanelCategory::Hierarchy, Rect::new(0.0, 0.0, 0.2, 1.0)),
        (PanelCategory::RenderView, Rect::new(0.2, 0.0, 0.6, 0.7)),
        (PanelCategory::Assets, Rect::new(0.0, 0.7, 0.2, 0.3)),
        (PanelCategory::ObjectProperties, Rect::new(0.8, 0.0, 0.2, 1.0)),
    ];

    assert_eq!(store.len(), expected.len());
    for (panel, (category, rect)) in store.iter().zip(expected) {
        assert_eq!(panel.category, category);
        assert_eq!(panel.rect, rect);
        assert!(panel.visible);
    }
}

#[test]
fn test_reset_to_default_discards_custom_panels() {
    let mut store = store_from(vec![custom_panel("mine", 0.1, 0.1, 0.3, 0.3)]);
    store.reset_to_default();

    assert!(store.get_panel("mine").is_none());
    assert_eq!(store.len(), 4);
}

#[test]
fn test_render_frame_emits_headers_in_draw_order() {
    let store = store_from(vec![
        custom_panel("lower", 0.0, 0.5, 0.3, 0.3),
        custom_panel("upper", 0.0, 0.0, 0.3, 0.3),
    ]);
    let frame = store.render_frame();

    let headers: Vec<&String> = frame.iter().filter(|l| l.starts_with('[')).collect();
    assert_eq!(headers.len(), 2);
    assert!(headers[0].starts_with("[upper]"));
    assert!(headers[1].starts_with("[lower]"));
    assert_eq!(frame.iter().filter(|l| *l == "---").count(), 2);
}
