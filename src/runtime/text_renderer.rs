//! Plain-text renderer for the headless shell
//!
//! Describes each frame as a few lines of text: the presentation mode, the
//! tab strip, one line per panel, and the divider positions.

use std::fmt::Write as _;

use documint_layout::frame::{DividerBar, LayoutFrame, PanelFrame, TabFrame, TabKind};
use documint_layout::host::{render, PanelRenderer};
use documint_layout::model::{AppModel, LayoutMode};
use documint_layout::panel::PanelMode;

#[derive(Debug, Default)]
pub struct TextRenderer {
    output: String,
    container_width: f32,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PanelRenderer for TextRenderer {
    fn begin_frame(&mut self, frame: &LayoutFrame) {
        self.output.clear();
        self.container_width = frame
            .panels
            .iter()
            .map(|p| p.rect.right())
            .fold(0.0, f32::max)
            - frame.panels.first().map_or(0.0, |p| p.rect.x);
        let mode = match frame.mode {
            LayoutMode::Desktop => "desktop",
            LayoutMode::Mobile => "mobile",
        };
        let _ = writeln!(self.output, "[{}]", mode);
    }

    fn render_tab(&mut self, tab: &TabFrame) {
        let marker = match tab.kind {
            TabKind::Restore => "restore",
            TabKind::Mobile { active: true } => "active",
            TabKind::Mobile { active: false } => "tab",
        };
        let _ = writeln!(
            self.output,
            "  tab {:<9} {:<8} x={:.1}",
            tab.id.display_name(),
            marker,
            tab.rect.x
        );
    }

    fn render_panel(&mut self, panel: &PanelFrame) {
        let percent = if self.container_width > 0.0 {
            panel.rect.width / self.container_width * 100.0
        } else {
            0.0
        };
        let mode = match panel.mode {
            PanelMode::Normal => "",
            PanelMode::Expanded => " (expanded)",
            PanelMode::Minimized => " (minimized)",
        };
        let _ = writeln!(
            self.output,
            "  panel {:<9} {:6.2}%  x={:.1} w={:.1}{}",
            panel.id.display_name(),
            percent,
            panel.rect.x,
            panel.rect.width,
            mode
        );
    }

    fn render_divider(&mut self, divider: &DividerBar, active: bool) {
        let _ = writeln!(
            self.output,
            "  divider {} x={:.1}{}",
            divider.index,
            divider.x,
            if active { " (dragging)" } else { "" }
        );
    }
}

/// Render the model to text
pub fn describe(model: &AppModel) -> String {
    let mut renderer = TextRenderer::new();
    render(model, &mut renderer);
    renderer.output
}
