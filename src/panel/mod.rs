//! Panel system - rectangular UI regions laid out in normalized screen space
//!
//! Panels float over the 3D viewport. Each one has a category, a unique name,
//! a normalized `Rect`, a visibility flag, and a content variant that produces
//! its draw output.
//!
//! ## Architecture
//!
//! - `Rect`: normalized rectangle with the size/position clamp rules
//! - `PanelCategory`: fixed enumeration of panel kinds, persisted by index
//! - `Panel`: one panel plus its transient resize sub-state
//! - `ResizeEdge`: which border a resize gesture grabbed
//!
//! ## Integration
//!
//! - Ownership, hit-testing and draw order live in `layout::LayoutStore`
//! - Content variants live in `panels`
//! - Persistence lives in `persistence`

mod category;
mod rect;
mod state;

pub use category::PanelCategory;
pub use rect::{PixelRect, Rect, MAX_SIZE, MIN_SIZE};
pub use state::{Panel, ResizeEdge, RESIZE_BORDER};
