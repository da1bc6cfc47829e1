//! App message handlers (window events, frame clock)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::Tick => {
            model.frame += 1;
            model.layout.update_panels();
            None
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
