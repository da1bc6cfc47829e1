//! Keyboard input handling
//!
//! The viewer shell only binds a handful of layout hotkeys; everything else
//! is left to the 3D backend.

use winit::keyboard::{Key, NamedKey};

use panelview::messages::{AppMsg, LayoutMsg, Msg};

/// Map a pressed key to a message
///
/// - F1: restore the default layout
/// - F5: save the layout to the configured file
/// - F9: load the layout from the configured file
/// - Escape: quit
pub fn key_to_msg(key: &Key) -> Option<Msg> {
    match key {
        Key::Named(NamedKey::F1) => Some(Msg::Layout(LayoutMsg::ResetToDefault)),
        Key::Named(NamedKey::F5) => Some(Msg::Layout(LayoutMsg::Save(None))),
        Key::Named(NamedKey::F9) => Some(Msg::Layout(LayoutMsg::Load(None))),
        Key::Named(NamedKey::Escape) => Some(Msg::App(AppMsg::Quit)),
        _ => None,
    }
}
