//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! panel transitions, drag sessions, and responsive mode switches.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=documint_layout::update=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/documint-layout/logs/documint-layout.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, LayoutMode};
use crate::panel::{PanelId, PanelMode};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering and goes to stderr,
/// so it never interleaves with rendered layouts on stdout.
///
/// File logging writes to `~/.config/documint-layout/logs/documint-layout.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "documint-layout.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of layout state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub modes: [PanelMode; 3],
    pub widths: [f32; 3],
    pub mode: LayoutMode,
    pub mobile_panel: PanelId,
    pub dragging: Option<usize>,
}

impl LayoutSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            modes: model.layout.modes(),
            widths: model.layout.widths().as_array(),
            mode: model.layout_mode(),
            mobile_panel: model.viewport.active_mobile_panel,
            dragging: model.drag.as_ref().map(|session| session.divider_index),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        for id in PanelId::ALL {
            let (before, after) = (self.modes[id.index()], other.modes[id.index()]);
            if before != after {
                changes.push(format!("{}: {:?} → {:?}", id.key(), before, after));
            }
        }

        if self.widths != other.widths {
            changes.push(format!(
                "widths: [{:.2}, {:.2}, {:.2}] → [{:.2}, {:.2}, {:.2}]",
                self.widths[0],
                self.widths[1],
                self.widths[2],
                other.widths[0],
                other.widths[1],
                other.widths[2]
            ));
        }

        if self.mode != other.mode {
            changes.push(format!("mode: {:?} → {:?}", self.mode, other.mode));
        }

        if self.mobile_panel != other.mobile_panel {
            changes.push(format!(
                "mobile panel: {} → {}",
                self.mobile_panel.key(),
                other.mobile_panel.key()
            ));
        }

        match (self.dragging, other.dragging) {
            (None, Some(index)) => changes.push(format!("drag started on divider {}", index)),
            (Some(_), None) => changes.push("drag ended".to_string()),
            _ => {}
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
