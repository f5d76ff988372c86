//! Panel mode transitions
//!
//! Each transition is a pure reducer over `LayoutState`. Guard clauses return
//! the input unchanged; refusing to hide the last visible panel is routine
//! interaction, not an error.

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::AppModel;
use crate::panel::{LayoutState, PanelId, PanelMode};

/// Handle panel messages, persisting the layout when it changes
pub fn update_panels(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    if model.is_mobile() {
        tracing::debug!(?msg, "Ignoring panel transition in mobile mode");
        return None;
    }
    if model.drag.is_some() {
        tracing::trace!(?msg, "Ignoring panel transition during divider drag");
        return None;
    }

    let next = reduce(&model.layout, msg);
    if next == model.layout {
        tracing::trace!(?msg, "Panel transition was a no-op");
        return None;
    }

    tracing::debug!(?msg, visible = ?next.visible_panels(), "Panel transition");
    model.layout = next;
    Some(Cmd::save_and_redraw(&model.layout))
}

/// Apply a panel message to a layout state
pub fn reduce(state: &LayoutState, msg: PanelMsg) -> LayoutState {
    match msg {
        PanelMsg::Expand(id) => expand(state, id),
        PanelMsg::Minimize(id) => minimize(state, id),
        PanelMsg::Restore(id) => restore(state, id),
        PanelMsg::RestoreAll => restore_all(state),
    }
}

/// Expand `id` exclusively, or collapse it back to the default split if it
/// is already expanded
///
/// Expansion clears minimization on every panel.
pub fn expand(state: &LayoutState, id: PanelId) -> LayoutState {
    let mut next = state.clone();
    next.set_all_modes(PanelMode::Normal);

    if state.mode(id) == PanelMode::Expanded {
        next.reset_widths();
    } else {
        next.set_mode(id, PanelMode::Expanded);
    }
    next
}

/// Minimize `id` and reset widths to the default split
///
/// No-op when `id` is the last visible panel or already minimized.
pub fn minimize(state: &LayoutState, id: PanelId) -> LayoutState {
    if state.non_minimized_count() <= 1 {
        tracing::trace!(panel = ?id, "Refusing to minimize the last visible panel");
        return state.clone();
    }
    if state.is_minimized(id) {
        return state.clone();
    }

    let mut next = state.clone();
    if let Some(expanded) = state.expanded() {
        next.set_mode(expanded, PanelMode::Normal);
    }
    next.set_mode(id, PanelMode::Minimized);
    next.reset_widths();
    next
}

/// Return `id` to normal mode, clearing any expansion
///
/// Widths reset to the default split when all three panels become visible
/// again, or when a panel was expanded.
pub fn restore(state: &LayoutState, id: PanelId) -> LayoutState {
    let was_expanded = state.expanded().is_some();
    let visible_before = state.non_minimized_count();

    let mut next = state.clone();
    if let Some(expanded) = state.expanded() {
        next.set_mode(expanded, PanelMode::Normal);
    }
    next.set_mode(id, PanelMode::Normal);

    let visible_after = next.non_minimized_count();
    if was_expanded || (visible_before == 2 && visible_after == 3) {
        next.reset_widths();
    }
    next
}

/// Every panel normal, default split
pub fn restore_all(_state: &LayoutState) -> LayoutState {
    LayoutState::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{PanelWidths, DEFAULT_WIDTHS};

    fn state(modes: [PanelMode; 3], widths: [f32; 3]) -> LayoutState {
        LayoutState::from_parts(modes, PanelWidths::new(widths))
    }

    #[test]
    fn test_expand_is_exclusive() {
        let start = state(
            [PanelMode::Expanded, PanelMode::Normal, PanelMode::Normal],
            [50.0, 25.0, 25.0],
        );
        let next = expand(&start, PanelId::Insights);
        assert_eq!(
            next.modes(),
            [PanelMode::Normal, PanelMode::Expanded, PanelMode::Normal]
        );
        // Expanding keeps the stored split for later
        assert_eq!(next.widths().as_array(), [50.0, 25.0, 25.0]);
    }

    #[test]
    fn test_expand_clears_minimization() {
        let start = state(
            [PanelMode::Minimized, PanelMode::Normal, PanelMode::Minimized],
            [33.33, 33.33, 33.34],
        );
        let next = expand(&start, PanelId::Insights);
        assert_eq!(next.expanded(), Some(PanelId::Insights));
        assert!(next.minimized_panels().is_empty());
    }

    #[test]
    fn test_expand_twice_collapses_to_default_split() {
        let start = state([PanelMode::Normal; 3], [50.0, 25.0, 25.0]);
        let expanded = expand(&start, PanelId::Qa);
        let collapsed = expand(&expanded, PanelId::Qa);
        assert_eq!(collapsed, LayoutState::default());
    }

    #[test]
    fn test_minimize_last_visible_is_noop() {
        let start = state(
            [PanelMode::Minimized, PanelMode::Normal, PanelMode::Minimized],
            [33.33, 33.33, 33.34],
        );
        assert_eq!(minimize(&start, PanelId::Insights), start);
        assert_eq!(minimize(&start, PanelId::Document), start);
    }

    #[test]
    fn test_minimize_already_minimized_keeps_widths() {
        let start = state(
            [PanelMode::Normal, PanelMode::Minimized, PanelMode::Normal],
            [60.0, 33.33, 40.0],
        );
        assert_eq!(minimize(&start, PanelId::Insights), start);
    }

    #[test]
    fn test_minimize_clears_expansion_and_resets_widths() {
        let start = state(
            [PanelMode::Normal, PanelMode::Normal, PanelMode::Expanded],
            [50.0, 25.0, 25.0],
        );
        let next = minimize(&start, PanelId::Document);
        assert_eq!(
            next.modes(),
            [PanelMode::Minimized, PanelMode::Normal, PanelMode::Normal]
        );
        assert_eq!(*next.widths(), DEFAULT_WIDTHS);
    }

    #[test]
    fn test_restore_to_three_visible_resets_widths() {
        let start = state(
            [PanelMode::Normal, PanelMode::Minimized, PanelMode::Normal],
            [70.0, 33.33, 30.0],
        );
        let next = restore(&start, PanelId::Insights);
        assert_eq!(next, LayoutState::default());
    }

    #[test]
    fn test_restore_from_one_to_two_keeps_widths() {
        let start = state(
            [PanelMode::Normal, PanelMode::Minimized, PanelMode::Minimized],
            [33.33, 33.33, 33.34],
        );
        let next = restore(&start, PanelId::Qa);
        assert_eq!(
            next.modes(),
            [PanelMode::Normal, PanelMode::Minimized, PanelMode::Normal]
        );
        assert_eq!(next.widths(), start.widths());
    }

    #[test]
    fn test_restore_expanded_panel_resets_widths() {
        let start = state(
            [PanelMode::Expanded, PanelMode::Normal, PanelMode::Normal],
            [60.0, 20.0, 20.0],
        );
        let next = restore(&start, PanelId::Document);
        assert_eq!(next, LayoutState::default());
    }

    #[test]
    fn test_restore_normal_panel_is_noop() {
        let start = state([PanelMode::Normal; 3], [60.0, 20.0, 20.0]);
        assert_eq!(restore(&start, PanelId::Qa), start);
    }

    #[test]
    fn test_restore_all_is_idempotent() {
        let start = state(
            [PanelMode::Minimized, PanelMode::Normal, PanelMode::Normal],
            [10.0, 45.0, 45.0],
        );
        let once = restore_all(&start);
        let twice = restore_all(&once);
        assert_eq!(once, twice);
        assert_eq!(once, LayoutState::default());
    }
}
