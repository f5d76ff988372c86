//! Drag session state for divider resizing

use super::Rect;
use crate::panel::{PanelId, PanelWidths};

/// State of an active divider drag
///
/// While a session exists the host must deliver every pointer move and the
/// final release to the engine, wherever the pointer is. The session is the
/// only multi-event operation in the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Index of the divider being dragged (between `panels[i]` and `panels[i + 1]`)
    pub divider_index: usize,
    /// Visible panels, in display order, captured when the drag started
    pub panels: Vec<PanelId>,
    /// Container rectangle used to convert pointer x into a percentage
    pub container: Rect,
    /// Stored widths when the session started (to detect a net change on release)
    pub start_widths: PanelWidths,
    /// Most recent pointer x coordinate
    pub last_x: f32,
    /// Number of move events applied so far
    pub moves: u32,
}

impl DragSession {
    pub fn new(
        divider_index: usize,
        panels: Vec<PanelId>,
        container: Rect,
        start_widths: PanelWidths,
        x: f32,
    ) -> Self {
        Self {
            divider_index,
            panels,
            container,
            start_widths,
            last_x: x,
            moves: 0,
        }
    }
}
