//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::VecDeque;

use documint_layout::config::LayoutConfig;
use documint_layout::messages::{Msg, PanelMsg, ViewportMsg};
use documint_layout::model::{AppModel, Rect};
use documint_layout::panel::{LayoutState, PanelId, PanelMode, PanelWidths};
use documint_layout::update::{reduce, update};

/// Container used by most tests: 1000px wide so pixels map to tenths of a percent
pub const CONTAINER: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1000.0,
    height: 600.0,
};

/// Desktop model with the default layout and a 1000x600 container
pub fn test_model() -> AppModel {
    test_model_with(LayoutState::default())
}

/// Desktop model around the given layout state
pub fn test_model_with(layout: LayoutState) -> AppModel {
    let mut model = AppModel::new(LayoutConfig::default(), layout);
    update(&mut model, Msg::Viewport(ViewportMsg::SetContainer(CONTAINER)));
    update(&mut model, Msg::resize(CONTAINER.width));
    model
}

pub fn layout(modes: [PanelMode; 3], widths: [f32; 3]) -> LayoutState {
    LayoutState::from_parts(modes, PanelWidths::new(widths))
}

/// Every panel message in the public transition set
pub fn all_panel_msgs() -> Vec<PanelMsg> {
    let mut msgs = Vec::new();
    for id in PanelId::ALL {
        msgs.push(PanelMsg::Expand(id));
        msgs.push(PanelMsg::Minimize(id));
        msgs.push(PanelMsg::Restore(id));
    }
    msgs.push(PanelMsg::RestoreAll);
    msgs
}

/// Every layout state reachable from the default through panel transitions
pub fn reachable_states() -> Vec<LayoutState> {
    let mut seen = vec![LayoutState::default()];
    let mut queue = VecDeque::from([LayoutState::default()]);
    let msgs = all_panel_msgs();

    while let Some(state) = queue.pop_front() {
        for &msg in &msgs {
            let next = reduce(&state, msg);
            if !seen.contains(&next) {
                seen.push(next.clone());
                queue.push_back(next);
            }
        }
    }
    seen
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}
