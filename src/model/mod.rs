//! Application model - the complete state of the layout engine
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod drag;
pub mod geometry;
pub mod viewport;

pub use drag::DragSession;
pub use geometry::Rect;
pub use viewport::{LayoutMode, ViewportState, DEFAULT_MOBILE_BREAKPOINT};

use crate::config::LayoutConfig;
use crate::panel::{LayoutState, PanelId, PanelWidths};

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Persisted panel modes and widths
    pub layout: LayoutState,
    /// Active divider drag, if any
    pub drag: Option<DragSession>,
    /// Viewport width and the mobile panel selector
    pub viewport: ViewportState,
    /// Bounding rectangle of the layout area, supplied by the host
    pub container: Rect,
    /// Loaded layout configuration
    pub config: LayoutConfig,
}

impl AppModel {
    /// Create a model around a restored (or default) layout state
    pub fn new(config: LayoutConfig, layout: LayoutState) -> Self {
        Self {
            layout,
            drag: None,
            viewport: ViewportState::new(config.mobile_breakpoint),
            container: Rect::default(),
            config,
        }
    }

    /// Current presentation mode
    pub fn layout_mode(&self) -> LayoutMode {
        self.viewport.mode()
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.is_mobile()
    }

    /// Panels currently on screen, in display order
    pub fn displayed_panels(&self) -> Vec<PanelId> {
        match self.layout_mode() {
            LayoutMode::Mobile => vec![self.viewport.active_mobile_panel],
            LayoutMode::Desktop => self.layout.visible_panels(),
        }
    }

    /// Widths currently on screen, in percent
    pub fn displayed_widths(&self) -> PanelWidths {
        match self.layout_mode() {
            LayoutMode::Mobile => {
                let mut widths = PanelWidths::new([0.0; 3]);
                widths[self.viewport.active_mobile_panel] = 100.0;
                widths
            }
            LayoutMode::Desktop => self.layout.effective_widths(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(LayoutConfig::default(), LayoutState::default())
    }
}
