//! Layout store - the owning collection of panels
//!
//! Panels are kept in insertion order. That order drives two different
//! things:
//!
//! - **Hit-testing**: reverse insertion order, so the most recently added
//!   panel is "on top" and receives the click.
//! - **Persistence**: panels are saved and reloaded in insertion order.
//!
//! Drawing uses its own order (`compute_draw_order`): visible panels sorted by
//! `(y, x)`, independent of insertion order.
//!
//! The panels targeted by an in-progress gesture are tracked as indices into
//! the panel list. Any structural change (remove, replace) clears them.

mod defaults;
mod gesture;

pub use defaults::default_panels;
pub use gesture::GestureState;

use std::cmp::Ordering;

use crate::error::LayoutError;
use crate::panel::{Panel, PanelCategory};

/// Ordered collection of panels plus the current gesture targets
#[derive(Debug, Default)]
pub struct LayoutStore {
    panels: Vec<Panel>,
    /// Panel grabbed by the current press
    active: Option<usize>,
    /// Panel being resized by the current press
    resizing: Option<usize>,
}

impl LayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store populated with the standard four-panel layout
    pub fn with_default_layout() -> Self {
        let mut store = Self::new();
        store.reset_to_default();
        store
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Panels in insertion order
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Panel> {
        self.panels.iter_mut()
    }

    /// Append a panel. It becomes the topmost panel for hit-testing.
    ///
    /// Duplicate names are accepted; lookups by name return the first match.
    /// The rect is normalized on the way in.
    pub fn add_panel(&mut self, mut panel: Panel) {
        normalize_rect(&mut panel);
        if self.get_panel(&panel.name).is_some() {
            tracing::warn!(name = %panel.name, "Adding panel with duplicate name");
        }
        tracing::debug!(
            name = %panel.name,
            category = panel.category.display_name(),
            "Panel added"
        );
        self.panels.push(panel);
    }

    /// Remove every panel with the given name
    pub fn remove_panel(&mut self, name: &str) -> Result<(), LayoutError> {
        let before = self.panels.len();
        self.panels.retain(|p| p.name != name);
        let removed = before - self.panels.len();

        if removed == 0 {
            tracing::info!(name, "Panel not found");
            return Err(LayoutError::NotFound(name.to_string()));
        }

        self.clear_gesture_targets();
        tracing::debug!(name, removed, "Panel removed");
        Ok(())
    }

    /// First panel with the given name, in insertion order
    pub fn get_panel(&self, name: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.name == name)
    }

    pub fn get_panel_mut(&mut self, name: &str) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.name == name)
    }

    /// Topmost panel containing the point (bounds inclusive)
    pub fn get_panel_at(&self, x: f32, y: f32) -> Option<&Panel> {
        self.index_at(x, y).map(|i| &self.panels[i])
    }

    pub(crate) fn index_at(&self, x: f32, y: f32) -> Option<usize> {
        self.panels.iter().rposition(|p| p.rect.contains(x, y))
    }

    /// All panels of a category, in insertion order
    pub fn get_panels_by_category(&self, category: PanelCategory) -> Vec<&Panel> {
        self.panels
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Visible panels sorted by `(y, x)` ascending.
    ///
    /// The sort is stable, so panels with identical origins keep their
    /// insertion order. The store itself is not reordered.
    pub fn compute_draw_order(&self) -> Vec<&Panel> {
        let mut visible: Vec<&Panel> = self.panels.iter().filter(|p| p.visible).collect();
        visible.sort_by(|a, b| compare_draw_position(a, b));
        visible
    }

    /// Update every visible panel
    pub fn update_panels(&mut self) {
        for panel in self.panels.iter_mut().filter(|p| p.visible) {
            panel.update();
        }
    }

    /// Text rendering of one frame: header, body and separator per visible
    /// panel, in draw order
    pub fn render_frame(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for panel in self.compute_draw_order() {
            lines.push(panel.header());
            lines.extend(panel.draw());
            lines.push("---".to_string());
        }
        lines
    }

    pub fn set_visible(&mut self, name: &str, visible: bool) -> Result<(), LayoutError> {
        let panel = self
            .get_panel_mut(name)
            .ok_or_else(|| LayoutError::NotFound(name.to_string()))?;
        panel.visible = visible;
        Ok(())
    }

    /// Flip visibility; returns the new state
    pub fn toggle_visible(&mut self, name: &str) -> Result<bool, LayoutError> {
        let panel = self
            .get_panel_mut(name)
            .ok_or_else(|| LayoutError::NotFound(name.to_string()))?;
        panel.visible = !panel.visible;
        Ok(panel.visible)
    }

    /// Replace every panel at once
    pub fn replace(&mut self, mut panels: Vec<Panel>) {
        self.clear_gesture_targets();
        panels.iter_mut().for_each(normalize_rect);
        self.panels = panels;
    }

    /// Discard the current panels and install the standard layout
    pub fn reset_to_default(&mut self) {
        self.replace(Vec::new());
        for panel in default_panels() {
            self.add_panel(panel);
        }
        tracing::info!(panels = self.panels.len(), "Default layout created");
    }

    /// Panel grabbed by the current gesture, if any
    pub fn active_panel(&self) -> Option<&Panel> {
        self.active.and_then(|i| self.panels.get(i))
    }

    /// Panel being resized by the current gesture, if any
    pub fn resizing_panel(&self) -> Option<&Panel> {
        self.resizing.and_then(|i| self.panels.get(i))
    }

    fn clear_gesture_targets(&mut self) {
        if let Some(panel) = self.resizing.and_then(|i| self.panels.get_mut(i)) {
            panel.end_resize();
        }
        self.active = None;
        self.resizing = None;
    }
}

fn normalize_rect(panel: &mut Panel) {
    let normalized = panel.rect.normalized();
    if normalized != panel.rect {
        tracing::debug!(
            name = %panel.name,
            rect = ?panel.rect,
            ?normalized,
            "Clamped panel rect"
        );
        panel.rect = normalized;
    }
}

fn compare_draw_position(a: &Panel, b: &Panel) -> Ordering {
    a.rect
        .y
        .total_cmp(&b.rect.y)
        .then_with(|| a.rect.x.total_cmp(&b.rect.x))
}
