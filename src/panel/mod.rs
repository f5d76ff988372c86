//! Panel system - the three content regions and their layout state
//!
//! The layout area always holds the same three panels (document, insights, Q&A).
//! Each panel has a mode (normal, expanded, minimized) and a stored width in
//! percent of the container. Together they form the persisted `LayoutState`.
//!
//! ## Architecture
//!
//! - `PanelId`: Identifier for one of the three panels
//! - `PanelMode`: Normal, Expanded, or Minimized
//! - `LayoutState`: Modes and widths for every panel, plus effective-width queries
//!
//! ## Integration
//!
//! The panel state integrates with:
//! - Transitions via `Msg::Panel` dispatch in `update/panels.rs`
//! - Width updates from the drag controller in `update/drag.rs`
//! - Frame geometry via `compute_frame()` in `frame.rs`
//! - Persistence via `persistence::load_layout()` / `save_layout()`

mod layout;

pub use layout::{
    LayoutState, PanelId, PanelMode, PanelWidths, DEFAULT_WIDTHS, WIDTH_SUM_TOLERANCE,
};
