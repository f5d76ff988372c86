//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::Rect;
use crate::panel::PanelId;

/// Panel mode transitions (header buttons, restore tabs)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelMsg {
    /// Expand a panel to fill the layout area, or collapse it if already expanded
    Expand(PanelId),
    /// Minimize a panel to a restore tab (ignored for the last visible panel)
    Minimize(PanelId),
    /// Return a panel to normal mode
    Restore(PanelId),
    /// Return every panel to normal mode with the default split
    RestoreAll,
}

/// Divider drag messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragMsg {
    /// Pointer pressed on a divider's hit region
    Begin { divider_index: usize, x: f32 },
    /// Pointer moved while a session is active (delivered wherever the pointer is)
    Move { x: f32 },
    /// Pointer released anywhere
    End,
}

/// Viewport and responsive-mode messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportMsg {
    /// Viewport width changed (logical pixels)
    Resize { width: f32 },
    /// Bounding rectangle of the layout area changed
    SetContainer(Rect),
    /// Mobile tab selected
    SelectMobilePanel(PanelId),
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Re-render the current layout without changing state
    Refresh,
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Panel mode transitions
    Panel(PanelMsg),
    /// Divider drag lifecycle
    Drag(DragMsg),
    /// Viewport and container changes
    Viewport(ViewportMsg),
    /// App messages
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn expand(id: PanelId) -> Self {
        Msg::Panel(PanelMsg::Expand(id))
    }

    pub fn minimize(id: PanelId) -> Self {
        Msg::Panel(PanelMsg::Minimize(id))
    }

    pub fn restore(id: PanelId) -> Self {
        Msg::Panel(PanelMsg::Restore(id))
    }

    pub fn restore_all() -> Self {
        Msg::Panel(PanelMsg::RestoreAll)
    }

    pub fn resize(width: f32) -> Self {
        Msg::Viewport(ViewportMsg::Resize { width })
    }
}
