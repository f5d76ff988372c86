//! Frame geometry and hit-testing for the layout area
//!
//! `compute_frame()` turns the model into concrete rectangles: one per shown
//! panel (with header buttons), one hit region per divider, and the tab strip
//! (restore tabs on desktop, panel tabs on mobile). `hit_test()` maps a point
//! back to the highest-priority target.
//!
//! Priority order: dividers, tabs, header buttons, panel bodies. Divider hit
//! regions overlap the panels on both sides of the boundary.

use crate::model::{AppModel, LayoutMode, Rect};
use crate::panel::{PanelId, PanelMode};

/// Height of a panel's header bar
pub const PANEL_HEADER_HEIGHT: f32 = 28.0;

/// Side length of a header button
pub const HEADER_BUTTON_SIZE: f32 = 24.0;

/// Preferred width of a tab in the tab strip
pub const TAB_WIDTH: f32 = 120.0;

/// A panel placed in the layout area
#[derive(Debug, Clone, PartialEq)]
pub struct PanelFrame {
    pub id: PanelId,
    pub mode: PanelMode,
    /// Full panel rectangle (header + content)
    pub rect: Rect,
    pub header: Rect,
    pub content: Rect,
    /// Expand/collapse toggle (desktop only)
    pub expand_button: Option<Rect>,
    /// Minimize button (desktop only)
    pub minimize_button: Option<Rect>,
}

/// A draggable divider between two adjacent panels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerBar {
    /// Divider index (between visible panel `index` and `index + 1`)
    pub index: usize,
    /// Boundary x coordinate
    pub x: f32,
    /// Hit-testing rectangle, centered on the boundary
    pub rect: Rect,
}

/// What a tab in the tab strip does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    /// Restore control for a minimized panel (desktop)
    Restore,
    /// Panel selector (mobile)
    Mobile { active: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabFrame {
    pub id: PanelId,
    pub kind: TabKind,
    pub rect: Rect,
}

/// Complete geometry of the layout area for one render
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutFrame {
    pub mode: LayoutMode,
    pub panels: Vec<PanelFrame>,
    pub dividers: Vec<DividerBar>,
    pub tabs: Vec<TabFrame>,
}

/// Logical targets in the layout area that can receive pointer presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Divider hit region
    Divider { index: usize },
    /// Restore tab of a minimized panel
    RestoreTab(PanelId),
    /// Mobile panel selector tab
    MobileTab(PanelId),
    /// Expand/collapse toggle in a panel header
    ExpandButton(PanelId),
    /// Minimize button in a panel header
    MinimizeButton(PanelId),
    /// Panel body (content owns the event)
    Panel(PanelId),
}

/// Compute the frame for the model's current container and mode
pub fn compute_frame(model: &AppModel) -> LayoutFrame {
    let container = model.container;
    match model.layout_mode() {
        LayoutMode::Desktop => desktop_frame(model, container),
        LayoutMode::Mobile => mobile_frame(model, container),
    }
}

fn desktop_frame(model: &AppModel, container: Rect) -> LayoutFrame {
    let minimized = model.layout.minimized_panels();
    let (strip, area) = if minimized.is_empty() {
        (Rect::new(container.x, container.y, container.width, 0.0), container)
    } else {
        container.split_top(model.config.tab_strip_height)
    };

    let tabs = layout_tabs(strip, &minimized, |_| TabKind::Restore);

    let widths = model.layout.effective_widths();
    let visible = model.layout.visible_panels();
    let mut panels = Vec::with_capacity(visible.len());
    let mut dividers = Vec::new();
    let mut x = area.x;

    for (i, &id) in visible.iter().enumerate() {
        // Last panel absorbs rounding so the row ends exactly at the container edge
        let width = if i + 1 == visible.len() {
            area.right() - x
        } else {
            area.width * widths[id] / 100.0
        };
        let rect = Rect::new(x, area.y, width, area.height);
        panels.push(panel_frame(id, model.layout.mode(id), rect, true));
        x += width;

        if i + 1 < visible.len() {
            let hit = model.config.divider_hit_width;
            dividers.push(DividerBar {
                index: i,
                x,
                rect: Rect::new(x - hit / 2.0, area.y, hit, area.height),
            });
        }
    }

    LayoutFrame {
        mode: LayoutMode::Desktop,
        panels,
        dividers,
        tabs,
    }
}

fn mobile_frame(model: &AppModel, container: Rect) -> LayoutFrame {
    let active = model.viewport.active_mobile_panel;
    let (strip, area) = container.split_top(model.config.tab_strip_height);
    let tabs = layout_tabs(strip, &PanelId::ALL, |id| TabKind::Mobile {
        active: id == active,
    });

    LayoutFrame {
        mode: LayoutMode::Mobile,
        panels: vec![panel_frame(active, PanelMode::Normal, area, false)],
        dividers: Vec::new(),
        tabs,
    }
}

fn layout_tabs(
    strip: Rect,
    ids: &[PanelId],
    kind: impl Fn(PanelId) -> TabKind,
) -> Vec<TabFrame> {
    if ids.is_empty() || strip.height <= 0.0 {
        return Vec::new();
    }
    let tab_width = TAB_WIDTH.min(strip.width / ids.len() as f32);
    ids.iter()
        .enumerate()
        .map(|(i, &id)| TabFrame {
            id,
            kind: kind(id),
            rect: Rect::new(
                strip.x + i as f32 * tab_width,
                strip.y,
                tab_width,
                strip.height,
            ),
        })
        .collect()
}

fn panel_frame(id: PanelId, mode: PanelMode, rect: Rect, with_buttons: bool) -> PanelFrame {
    let (header, content) = rect.split_top(PANEL_HEADER_HEIGHT);

    let (expand_button, minimize_button) = if with_buttons {
        let inset = (header.height - HEADER_BUTTON_SIZE).max(0.0) / 2.0;
        let size = HEADER_BUTTON_SIZE.min(header.height);
        let expand = Rect::new(header.right() - inset - size, header.y + inset, size, size);
        let minimize = Rect::new(expand.x - inset - size, header.y + inset, size, size);
        (Some(expand), Some(minimize))
    } else {
        (None, None)
    };

    PanelFrame {
        id,
        mode,
        rect,
        header,
        content,
        expand_button,
        minimize_button,
    }
}

/// Find the target under a point
pub fn hit_test(frame: &LayoutFrame, x: f32, y: f32) -> Option<HitTarget> {
    if let Some(divider) = frame.dividers.iter().find(|d| d.rect.contains(x, y)) {
        return Some(HitTarget::Divider {
            index: divider.index,
        });
    }

    if let Some(tab) = frame.tabs.iter().find(|t| t.rect.contains(x, y)) {
        return Some(match tab.kind {
            TabKind::Restore => HitTarget::RestoreTab(tab.id),
            TabKind::Mobile { .. } => HitTarget::MobileTab(tab.id),
        });
    }

    for panel in &frame.panels {
        if panel.expand_button.is_some_and(|r| r.contains(x, y)) {
            return Some(HitTarget::ExpandButton(panel.id));
        }
        if panel.minimize_button.is_some_and(|r| r.contains(x, y)) {
            return Some(HitTarget::MinimizeButton(panel.id));
        }
        if panel.rect.contains(x, y) {
            return Some(HitTarget::Panel(panel.id));
        }
    }

    None
}
