//! panelview - dockable panel layout for a 3D model viewer
//!
//! This crate provides the panel layout engine (rects, panels, the layout
//! store and its pointer gestures, plain-text persistence) and the
//! Elm-style application shell that drives it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod layout;
pub mod messages;
pub mod model;
pub mod panel;
pub mod panels;
pub mod persistence;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ViewerConfig;
pub use error::LayoutError;
pub use layout::LayoutStore;
pub use messages::Msg;
pub use model::AppModel;
pub use panel::{Panel, PanelCategory, Rect};
