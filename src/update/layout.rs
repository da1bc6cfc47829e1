//! Layout message handlers (reset, save, load, visibility)
//!
//! Failures are reported through the status line and the log; none of them
//! interrupt the frame loop.

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::AppModel;

/// Handle layout messages
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::ResetToDefault => {
            model.layout.reset_to_default();
            model.set_status("Default layout restored");
            Some(Cmd::Redraw)
        }

        LayoutMsg::Save(path) => {
            let path = model.resolve_layout_path(path);
            match model.layout.save_to(&path) {
                Ok(()) => model.set_status(format!("Layout saved to: {}", path.display())),
                Err(e) => {
                    tracing::warn!("Failed to save layout: {}", e);
                    model.set_status(format!("Failed to save layout: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        LayoutMsg::Load(path) => {
            let path = model.resolve_layout_path(path);
            match model.layout.load_from(&path) {
                Ok(skipped) if skipped.is_empty() => {
                    model.set_status(format!("Layout loaded from: {}", path.display()));
                }
                Ok(skipped) => {
                    model.set_status(format!(
                        "Layout loaded from: {} ({} line(s) skipped)",
                        path.display(),
                        skipped.len()
                    ));
                }
                Err(e) => {
                    tracing::warn!("Failed to load layout: {}", e);
                    model.set_status(format!("Failed to load layout: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        LayoutMsg::TogglePanel(name) => match model.layout.toggle_visible(&name) {
            Ok(visible) => {
                let state = if visible { "shown" } else { "hidden" };
                model.set_status(format!("{} {}", name, state));
                Some(Cmd::Redraw)
            }
            Err(e) => {
                model.set_status(e.to_string());
                None
            }
        },

        LayoutMsg::RemovePanel(name) => match model.layout.remove_panel(&name) {
            Ok(()) => {
                model.set_status(format!("Panel removed: {}", name));
                Some(Cmd::Redraw)
            }
            Err(e) => {
                model.set_status(e.to_string());
                None
            }
        },
    }
}
