//! Runtime module - headless host for the layout engine
//!
//! This module contains the code that drives the engine outside a browser:
//! - `app` - Command execution against the store and output writer
//! - `input` - Script line to input event parsing
//! - `mouse` - Pointer event dispatch with hit-testing and drag capture
//! - `text_renderer` - Plain-text `PanelRenderer`

pub mod app;
pub mod input;
pub mod mouse;
pub mod text_renderer;

pub use app::App;
