//! Pointer event dispatch using the frame hit-test
//!
//! A press is resolved against the current frame and turned into a message.
//! While a drag session is active, moves and the release go to the session
//! no matter where the pointer is, so the drag survives leaving the divider.

use documint_layout::commands::Cmd;
use documint_layout::frame::{compute_frame, hit_test, HitTarget};
use documint_layout::messages::{DragMsg, Msg, PanelMsg, ViewportMsg};
use documint_layout::model::AppModel;
use documint_layout::update::update;

/// Map a hit target to the message it triggers on press
fn press_message(target: HitTarget, x: f32) -> Option<Msg> {
    match target {
        HitTarget::Divider { index } => Some(Msg::Drag(DragMsg::Begin {
            divider_index: index,
            x,
        })),
        HitTarget::RestoreTab(id) => Some(Msg::Panel(PanelMsg::Restore(id))),
        HitTarget::MobileTab(id) => Some(Msg::Viewport(ViewportMsg::SelectMobilePanel(id))),
        HitTarget::ExpandButton(id) => Some(Msg::Panel(PanelMsg::Expand(id))),
        HitTarget::MinimizeButton(id) => Some(Msg::Panel(PanelMsg::Minimize(id))),
        // Panel content owns presses on its body
        HitTarget::Panel(_) => None,
    }
}

/// Handle a pointer press at `(x, y)`
pub fn handle_press(model: &mut AppModel, x: f32, y: f32) -> Option<Cmd> {
    let frame = compute_frame(model);
    let target = hit_test(&frame, x, y)?;
    tracing::trace!(?target, x, y, "Pointer press");
    let msg = press_message(target, x)?;
    update(model, msg)
}

/// Handle a pointer move; ignored unless a drag session is active
pub fn handle_move(model: &mut AppModel, x: f32, _y: f32) -> Option<Cmd> {
    if !model.is_dragging() {
        return None;
    }
    update(model, Msg::Drag(DragMsg::Move { x }))
}

/// Handle a pointer release; ends the drag session if one is active
pub fn handle_release(model: &mut AppModel) -> Option<Cmd> {
    if !model.is_dragging() {
        return None;
    }
    update(model, Msg::Drag(DragMsg::End))
}
