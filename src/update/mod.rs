//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod drag;
pub mod panels;
mod viewport;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use drag::update_drag;
pub use panels::{reduce, update_panels};
pub use viewport::update_viewport;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => panels::update_panels(model, m),
        Msg::Drag(m) => drag::update_drag(model, m),
        Msg::Viewport(m) => viewport::update_viewport(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::DragMsg;

    // Drag moves arrive at pointer rate; keep them out of the debug log
    let is_noisy = matches!(&msg, Msg::Drag(DragMsg::Move { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if !is_noisy {
        let after = LayoutSnapshot::from_model(model);
        if let Some(diff) = before.diff(&after) {
            debug!(target: "layout", %diff, "state changed");
        }
    }

    model.layout.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Panel::Expand(Qa)`
/// - `Drag::Move { x: 412.0 }`
/// - `Viewport::Resize { width: 640.0 }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Drag(m) => format!("Drag::{:?}", m),
        Msg::Viewport(m) => format!("Viewport::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
