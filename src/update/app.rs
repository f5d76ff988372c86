//! App message handlers

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(_model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Refresh => Some(Cmd::Redraw),
        AppMsg::Quit => Some(Cmd::Quit),
    }
}
