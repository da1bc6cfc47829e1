//! Panel state and resize handling

use crate::panels::{PanelContent, PanelView};

use super::{PanelCategory, Rect};

/// Distance from a border (normalized units) within which a click starts a resize
pub const RESIZE_BORDER: f32 = 0.02;

/// Border grabbed by a resize gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
}

/// A single panel owned by the layout store
#[derive(Debug, Clone)]
pub struct Panel {
    pub category: PanelCategory,
    pub name: String,
    pub rect: Rect,
    pub visible: bool,

    /// Set by `process_mouse_click` when the click landed on a border
    pub resizing: bool,
    /// Border being dragged; `None` when not resizing
    pub active_edge: Option<ResizeEdge>,

    /// Content variant that renders this panel
    pub content: PanelContent,
}

impl Panel {
    /// Create a visible panel with the standard content for its category
    pub fn new(category: PanelCategory, name: impl Into<String>, rect: Rect) -> Self {
        Self::with_content(category, name, rect, PanelContent::for_category(category))
    }

    /// Create a visible panel with explicit content
    pub fn with_content(
        category: PanelCategory,
        name: impl Into<String>,
        rect: Rect,
        content: PanelContent,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            rect,
            visible: true,
            resizing: false,
            active_edge: None,
            content,
        }
    }

    /// Builder: start hidden
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    /// Edge within `RESIZE_BORDER` of the point, checked in the order left,
    /// right, top, bottom. The point is assumed to already lie inside `rect`.
    pub fn detect_edge(&self, x: f32, y: f32) -> Option<ResizeEdge> {
        let rect = self.rect;
        if (x - rect.x).abs() < RESIZE_BORDER {
            Some(ResizeEdge::Left)
        } else if (x - rect.right()).abs() < RESIZE_BORDER {
            Some(ResizeEdge::Right)
        } else if (y - rect.y).abs() < RESIZE_BORDER {
            Some(ResizeEdge::Top)
        } else if (y - rect.bottom()).abs() < RESIZE_BORDER {
            Some(ResizeEdge::Bottom)
        } else {
            None
        }
    }

    /// Decide whether a click starts a resize, and on which edge.
    ///
    /// A click away from every edge clears the resize state, which the
    /// gesture controller treats as a move.
    pub fn process_mouse_click(&mut self, x: f32, y: f32) {
        self.active_edge = self.detect_edge(x, y);
        self.resizing = self.active_edge.is_some();
    }

    /// Apply a resize drag to the grabbed edge. No-op unless resizing.
    ///
    /// Left/top drags move the origin and keep the opposite edge where it was,
    /// including through the size clamp. Right/bottom drags only change the
    /// size. The size clamp always runs before the position clamp.
    pub fn process_mouse_drag(&mut self, dx: f32, dy: f32) {
        if !self.resizing {
            return;
        }
        let Some(edge) = self.active_edge else {
            return;
        };

        let before = self.rect;
        let rect = &mut self.rect;
        match edge {
            ResizeEdge::Left => {
                let far = rect.right();
                rect.x += dx;
                rect.width -= dx;
                rect.clamp_size();
                rect.x = far - rect.width;
            }
            ResizeEdge::Right => {
                rect.width += dx;
                rect.clamp_size();
            }
            ResizeEdge::Top => {
                let far = rect.bottom();
                rect.y += dy;
                rect.height -= dy;
                rect.clamp_size();
                rect.y = far - rect.height;
            }
            ResizeEdge::Bottom => {
                rect.height += dy;
                rect.clamp_size();
            }
        }
        rect.clamp_position();

        if rect.width != before.width || rect.height != before.height {
            let (width, height) = (rect.width, rect.height);
            self.content.on_resize(width, height);
        }
    }

    /// Drop any in-progress resize state
    pub fn end_resize(&mut self) {
        self.resizing = false;
        self.active_edge = None;
    }

    /// Header line shown above the panel body
    pub fn header(&self) -> String {
        format!(
            "[{}] Type: {} Visible: {}",
            self.name,
            self.category.index(),
            if self.visible { "Yes" } else { "No" }
        )
    }

    /// Body lines produced by the content variant
    pub fn draw(&self) -> Vec<String> {
        self.content.draw(&self.name, self.rect)
    }

    pub fn update(&mut self) {
        self.content.update();
    }
}
