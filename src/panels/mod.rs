//! Panel content implementations
//!
//! Every panel carries one of a closed set of content variants. Each variant
//! implements `PanelView` and produces the text lines the host draws inside the
//! panel's rect.
//!
//! ## Available Panels
//!
//! - **Placeholder**: diagnostic output for categories without dedicated content
//! - **RenderView**: 3D scene preview
//! - **Hierarchy**: scene object tree
//! - **Assets**: project asset browser
//! - **Properties**: selected object inspector
//! - **Console**: bounded log output
//! - **Statistics**: frame/update counters

mod assets;
mod console;
mod hierarchy;
mod placeholder;
mod properties;
mod render_view;
mod statistics;

pub use assets::AssetsPanel;
pub use console::ConsolePanel;
pub use hierarchy::HierarchyPanel;
pub use placeholder::PlaceholderPanel;
pub use properties::PropertiesPanel;
pub use render_view::RenderViewPanel;
pub use statistics::StatisticsPanel;

use crate::panel::{PanelCategory, Rect};

/// Capability shared by all panel content variants
pub trait PanelView {
    /// Produce the body lines for a panel named `name` occupying `rect`
    fn draw(&self, name: &str, rect: Rect) -> Vec<String>;

    /// Per-frame state update (only called for visible panels)
    fn update(&mut self) {}

    /// Called after a resize gesture changed the panel's normalized size
    fn on_resize(&mut self, _width: f32, _height: f32) {}
}

/// Closed set of panel contents
#[derive(Debug, Clone)]
pub enum PanelContent {
    Placeholder(PlaceholderPanel),
    RenderView(RenderViewPanel),
    Hierarchy(HierarchyPanel),
    Assets(AssetsPanel),
    Properties(PropertiesPanel),
    Console(ConsolePanel),
    Statistics(StatisticsPanel),
}

impl PanelContent {
    /// Standard content for a category.
    ///
    /// Used both when building panels in code and when reloading a layout,
    /// so a reloaded panel draws the same way it did before it was saved.
    pub fn for_category(category: PanelCategory) -> Self {
        match category {
            PanelCategory::RenderView => PanelContent::RenderView(RenderViewPanel::default()),
            PanelCategory::Hierarchy => PanelContent::Hierarchy(HierarchyPanel::default()),
            PanelCategory::Assets => PanelContent::Assets(AssetsPanel::default()),
            PanelCategory::ObjectProperties => {
                PanelContent::Properties(PropertiesPanel::default())
            }
            PanelCategory::Console => PanelContent::Console(ConsolePanel::default()),
            PanelCategory::Statistics => PanelContent::Statistics(StatisticsPanel::default()),
            PanelCategory::SceneView | PanelCategory::Custom => {
                PanelContent::Placeholder(PlaceholderPanel)
            }
        }
    }

    fn view(&self) -> &dyn PanelView {
        match self {
            PanelContent::Placeholder(p) => p,
            PanelContent::RenderView(p) => p,
            PanelContent::Hierarchy(p) => p,
            PanelContent::Assets(p) => p,
            PanelContent::Properties(p) => p,
            PanelContent::Console(p) => p,
            PanelContent::Statistics(p) => p,
        }
    }

    fn view_mut(&mut self) -> &mut dyn PanelView {
        match self {
            PanelContent::Placeholder(p) => p,
            PanelContent::RenderView(p) => p,
            PanelContent::Hierarchy(p) => p,
            PanelContent::Assets(p) => p,
            PanelContent::Properties(p) => p,
            PanelContent::Console(p) => p,
            PanelContent::Statistics(p) => p,
        }
    }

    pub fn as_console_mut(&mut self) -> Option<&mut ConsolePanel> {
        match self {
            PanelContent::Console(console) => Some(console),
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PanelContent::Placeholder(_))
    }
}

impl PanelView for PanelContent {
    fn draw(&self, name: &str, rect: Rect) -> Vec<String> {
        self.view().draw(name, rect)
    }

    fn update(&mut self) {
        self.view_mut().update();
    }

    fn on_resize(&mut self, width: f32, height: f32) {
        self.view_mut().on_resize(width, height);
    }
}

/// Fill color (0xAARRGGBB) used by the renderer for a category
pub fn panel_color(category: PanelCategory) -> u32 {
    match category {
        PanelCategory::RenderView => 0xFF1E2A38,
        PanelCategory::Hierarchy => 0xFF2B2D31,
        PanelCategory::Assets => 0xFF2D2A24,
        PanelCategory::ObjectProperties => 0xFF262B2A,
        PanelCategory::SceneView => 0xFF20262E,
        PanelCategory::Console => 0xFF1A1A1A,
        PanelCategory::Statistics => 0xFF2A2430,
        PanelCategory::Custom => 0xFF303030,
    }
}
