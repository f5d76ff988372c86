//! Viewport handlers for the responsive single-panel mode
//!
//! Crossing the breakpoint only changes how the layout is presented. The
//! desktop `LayoutState` is never touched here, so returning above the
//! breakpoint shows exactly what was stored before.

use crate::commands::Cmd;
use crate::messages::ViewportMsg;
use crate::model::{AppModel, LayoutMode};

use super::drag::end_drag;

/// Update function for viewport messages
pub fn update_viewport(model: &mut AppModel, msg: ViewportMsg) -> Option<Cmd> {
    match msg {
        ViewportMsg::Resize { width } => {
            if !width.is_finite() || width < 0.0 {
                tracing::trace!(width, "Ignoring invalid viewport width");
                return None;
            }

            let before = model.layout_mode();
            model.viewport.width = Some(width);
            let after = model.layout_mode();

            if before == after {
                return Some(Cmd::Redraw);
            }

            tracing::debug!(?before, ?after, width, "Layout mode changed");

            // Dividers do not exist in mobile mode; an active drag ends here
            if after == LayoutMode::Mobile {
                if let Some(cmd) = end_drag(model) {
                    return Some(cmd);
                }
            }
            Some(Cmd::Redraw)
        }

        ViewportMsg::SetContainer(rect) => {
            // An active session keeps the rectangle it captured on press
            model.container = rect;
            Some(Cmd::Redraw)
        }

        ViewportMsg::SelectMobilePanel(id) => {
            if model.viewport.active_mobile_panel == id {
                return None;
            }
            tracing::debug!(panel = ?id, "Mobile panel selected");
            model.viewport.active_mobile_panel = id;
            Some(Cmd::Redraw)
        }
    }
}
