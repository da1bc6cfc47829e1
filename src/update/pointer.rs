//! Pointer message handlers
//!
//! Forwards press/drag/release to the layout's gesture controller. Presses
//! and drags on empty space are silent no-ops.

use crate::commands::Cmd;
use crate::layout::GestureState;
use crate::messages::PointerMsg;
use crate::model::AppModel;

pub fn update_pointer(model: &mut AppModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Press { x, y } => match model.layout.on_press(x, y) {
            GestureState::Idle => None,
            GestureState::Moving | GestureState::Resizing => Some(Cmd::Redraw),
        },

        PointerMsg::Drag { dx, dy } => {
            if model.layout.gesture_state() == GestureState::Idle {
                return None;
            }
            model.layout.on_drag(dx, dy);
            Some(Cmd::Redraw)
        }

        PointerMsg::Release => {
            let was_active = model.layout.gesture_state() != GestureState::Idle;
            model.layout.on_release();
            was_active.then_some(Cmd::Redraw)
        }
    }
}
