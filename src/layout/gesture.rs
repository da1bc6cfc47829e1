//! Gesture controller - pointer press/drag/release against the layout store
//!
//! ```text
//! Idle --press on panel--> Moving | Resizing --release--> Idle
//! ```
//!
//! Selection only happens on press. A press that misses every panel keeps the
//! controller idle for the rest of the gesture, even if the pointer later
//! crosses a panel. Events are expected in temporal order; nothing here
//! buffers or reorders them.

use super::LayoutStore;

/// Current phase of the pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Moving,
    Resizing,
}

impl LayoutStore {
    pub fn gesture_state(&self) -> GestureState {
        match (self.active, self.resizing) {
            (_, Some(_)) => GestureState::Resizing,
            (Some(_), None) => GestureState::Moving,
            (None, None) => GestureState::Idle,
        }
    }

    /// Pointer pressed at a normalized position
    pub fn on_press(&mut self, x: f32, y: f32) -> GestureState {
        // A press without a release in between starts a fresh gesture
        self.clear_gesture_targets();

        let Some(index) = self.index_at(x, y) else {
            tracing::debug!(x, y, "Press on empty space");
            return GestureState::Idle;
        };

        let panel = &mut self.panels[index];
        panel.process_mouse_click(x, y);
        self.active = Some(index);

        if panel.is_resizing() {
            self.resizing = Some(index);
            tracing::debug!(name = %panel.name, edge = ?panel.active_edge, "Resizing panel");
            GestureState::Resizing
        } else {
            tracing::debug!(name = %panel.name, "Grabbed panel");
            GestureState::Moving
        }
    }

    /// Pointer moved by a normalized delta while pressed
    pub fn on_drag(&mut self, dx: f32, dy: f32) {
        match self.gesture_state() {
            GestureState::Resizing => {
                if let Some(panel) = self.resizing.and_then(|i| self.panels.get_mut(i)) {
                    panel.process_mouse_drag(dx, dy);
                }
            }
            GestureState::Moving => {
                if let Some(panel) = self.active.and_then(|i| self.panels.get_mut(i)) {
                    panel.rect.translate(dx, dy);
                    tracing::trace!(
                        name = %panel.name,
                        x = panel.rect.x,
                        y = panel.rect.y,
                        "Moving panel"
                    );
                }
            }
            GestureState::Idle => {}
        }
    }

    /// Pointer released. Idempotent.
    pub fn on_release(&mut self) {
        if let Some(panel) = self.resizing_panel() {
            tracing::debug!(name = %panel.name, "Finished resizing panel");
        }
        self.clear_gesture_targets();
    }
}
