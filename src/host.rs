//! Host page contract
//!
//! The host owns panel content (document text, insights, answers). The layout
//! engine only decides where each panel goes; the host draws into the
//! rectangles it is handed through `PanelRenderer`.

use crate::frame::{compute_frame, DividerBar, LayoutFrame, PanelFrame, TabFrame};
use crate::model::AppModel;

/// Render callbacks supplied by the host
///
/// Callbacks run in a fixed order per frame: tabs, panels left to right,
/// then dividers.
pub trait PanelRenderer {
    /// Called once before anything else in the frame
    fn begin_frame(&mut self, _frame: &LayoutFrame) {}

    /// Draw a panel's header and content into its rectangles
    fn render_panel(&mut self, panel: &PanelFrame);

    /// Draw a restore tab (desktop) or a panel selector tab (mobile)
    fn render_tab(&mut self, tab: &TabFrame);

    /// Draw a divider; `active` is true while it is being dragged
    fn render_divider(&mut self, _divider: &DividerBar, _active: bool) {}

    /// Called once after everything else in the frame
    fn end_frame(&mut self) {}
}

/// Compute the current frame and hand it to the renderer
pub fn render(model: &AppModel, renderer: &mut dyn PanelRenderer) -> LayoutFrame {
    let frame = compute_frame(model);
    let dragging = model.drag.as_ref().map(|session| session.divider_index);

    renderer.begin_frame(&frame);
    for tab in &frame.tabs {
        renderer.render_tab(tab);
    }
    for panel in &frame.panels {
        renderer.render_panel(panel);
    }
    for divider in &frame.dividers {
        renderer.render_divider(divider, dragging == Some(divider.index));
    }
    renderer.end_frame();

    frame
}
