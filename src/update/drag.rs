//! Divider drag session handlers
//!
//! A session starts on a divider press and ends on release. Every move in
//! between runs the geometry solver and applies the result immediately, but
//! only the release writes the layout to storage.

use crate::commands::Cmd;
use crate::messages::DragMsg;
use crate::model::{AppModel, DragSession};
use crate::solver::{compute_widths_with, pointer_percentage};

/// Update function for drag messages
pub fn update_drag(model: &mut AppModel, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Begin { divider_index, x } => begin_drag(model, divider_index, x),
        DragMsg::Move { x } => move_drag(model, x),
        DragMsg::End => end_drag(model),
    }
}

fn begin_drag(model: &mut AppModel, divider_index: usize, x: f32) -> Option<Cmd> {
    if let Some(session) = &model.drag {
        tracing::trace!(
            active = session.divider_index,
            requested = divider_index,
            "Drag already in progress, ignoring press"
        );
        return None;
    }
    if model.is_mobile() {
        return None;
    }

    let panels = model.layout.visible_panels();
    if divider_index + 1 >= panels.len() {
        tracing::trace!(divider_index, visible = panels.len(), "No such divider");
        return None;
    }

    tracing::debug!(divider_index, x, "Drag started");
    model.drag = Some(DragSession::new(
        divider_index,
        panels,
        model.container,
        *model.layout.widths(),
        x,
    ));
    Some(Cmd::Redraw)
}

fn move_drag(model: &mut AppModel, x: f32) -> Option<Cmd> {
    let Some(session) = model.drag.as_mut() else {
        return None;
    };
    session.last_x = x;
    session.moves += 1;

    let pointer = pointer_percentage(x, &session.container);
    let current = model.layout.effective_widths();
    let proposal = compute_widths_with(
        model.config.min_panel_width,
        &current,
        &session.panels,
        session.divider_index,
        pointer,
    );

    if proposal == current {
        return None;
    }

    // Only the visible panels take solver output; hidden panels keep their stored width
    let mut stored = *model.layout.widths();
    for &id in &session.panels {
        stored[id] = proposal[id];
    }
    tracing::trace!(pointer, widths = ?stored.as_array(), "Drag move");
    model.layout.set_widths(stored);
    Some(Cmd::Redraw)
}

/// End the active session, persisting once if the widths changed
pub(crate) fn end_drag(model: &mut AppModel) -> Option<Cmd> {
    let session = model.drag.take()?;

    if *model.layout.widths() == session.start_widths {
        tracing::debug!(
            moves = session.moves,
            last_x = session.last_x,
            "Drag ended without a width change"
        );
        return Some(Cmd::Redraw);
    }

    tracing::debug!(
        moves = session.moves,
        last_x = session.last_x,
        widths = ?model.layout.widths().as_array(),
        "Drag ended"
    );
    Some(Cmd::save_and_redraw(&model.layout))
}
