//! DocuMint panel layout - Elm-style layout engine
//!
//! This crate manages three resizable content regions (document, insights, Q&A)
//! inside a fixed viewport: expand-to-fullscreen, minimize-to-tab, drag-resize,
//! and a single-panel view on narrow viewports, following the Elm Architecture
//! pattern.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod frame;
pub mod host;
pub mod messages;
pub mod model;
pub mod panel;
pub mod persistence;
pub mod solver;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::LayoutConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use panel::{LayoutState, PanelId, PanelMode};
