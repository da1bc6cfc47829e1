//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

/// Pointer messages, in normalized viewport coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum PointerMsg {
    /// Primary button pressed at (x, y)
    Press { x: f32, y: f32 },
    /// Pointer moved by (dx, dy) while pressed
    Drag { dx: f32, dy: f32 },
    /// Primary button released
    Release,
}

/// Layout-level operations (hotkeys and commands)
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Replace the layout with the standard arrangement (F1)
    ResetToDefault,
    /// Save the layout; `None` uses the configured layout file (F5)
    Save(Option<PathBuf>),
    /// Load a layout; `None` uses the configured layout file (F9)
    Load(Option<PathBuf>),
    /// Show/hide a panel by name
    TogglePanel(String),
    /// Remove every panel with this name
    RemovePanel(String),
}

/// App messages (window, frame clock)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized to (width, height) physical pixels
    Resize(u32, u32),
    /// Once per frame; drives panel updates
    Tick,
    /// Exit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Pointer gestures against the panel layout
    Pointer(PointerMsg),
    /// Layout operations (reset, save, load, visibility)
    Layout(LayoutMsg),
    /// App messages (window, frame clock)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn press(x: f32, y: f32) -> Self {
        Msg::Pointer(PointerMsg::Press { x, y })
    }

    pub fn drag(dx: f32, dy: f32) -> Self {
        Msg::Pointer(PointerMsg::Drag { dx, dy })
    }

    pub fn release() -> Self {
        Msg::Pointer(PointerMsg::Release)
    }

    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}
