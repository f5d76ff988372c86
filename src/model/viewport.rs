//! Viewport state for the responsive single-panel mode
//!
//! NOTE: None of this is part of `LayoutState`. The mobile selector lives and
//! dies with the session and is never persisted.

use crate::panel::PanelId;

/// Default viewport width (logical pixels) below which only one panel is shown
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;

/// Which presentation the layout area uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Multi-panel layout driven by `LayoutState`
    Desktop,
    /// Single panel chosen by the active mobile tab
    Mobile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    /// Last reported viewport width (None until the host reports one)
    pub width: Option<f32>,
    /// Widths strictly below this are mobile
    pub breakpoint: f32,
    /// Panel shown in mobile mode
    pub active_mobile_panel: PanelId,
}

impl ViewportState {
    pub fn new(breakpoint: f32) -> Self {
        Self {
            width: None,
            breakpoint,
            active_mobile_panel: PanelId::Document,
        }
    }

    /// Mode implied by the current width; desktop until a width is known
    pub fn mode(&self) -> LayoutMode {
        match self.width {
            Some(width) if width < self.breakpoint => LayoutMode::Mobile,
            _ => LayoutMode::Desktop,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.mode() == LayoutMode::Mobile
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(DEFAULT_MOBILE_BREAKPOINT)
    }
}
