//! Panel identifiers, modes, and the layout state record
//!
//! This module defines the core data structures for the three-panel layout.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Allowed drift of the visible width sum away from 100%
pub const WIDTH_SUM_TOLERANCE: f32 = 0.1;

/// Default equal split, in panel order (document, insights, qa)
pub const DEFAULT_WIDTHS: PanelWidths = PanelWidths([33.33, 33.33, 33.34]);

/// Unique identifier for one of the three panels
///
/// Panel IDs are used for persistence keys, hit-testing, and message routing.
/// The declaration order is the left-to-right display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    Document,
    Insights,
    Qa,
}

impl PanelId {
    /// All panels in display order
    pub const ALL: [PanelId; 3] = [PanelId::Document, PanelId::Insights, PanelId::Qa];

    /// Position of this panel in display order
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PanelId::Document => 0,
            PanelId::Insights => 1,
            PanelId::Qa => 2,
        }
    }

    /// Get the display name for this panel
    pub fn display_name(&self) -> &'static str {
        match self {
            PanelId::Document => "Document",
            PanelId::Insights => "Insights",
            PanelId::Qa => "Q&A",
        }
    }

    /// Stable lowercase key, matching the serialized form
    pub fn key(&self) -> &'static str {
        match self {
            PanelId::Document => "document",
            PanelId::Insights => "insights",
            PanelId::Qa => "qa",
        }
    }

    /// Parse a user-facing panel name (case-insensitive, accepts short aliases)
    pub fn from_name(name: &str) -> Option<PanelId> {
        match name.trim().to_ascii_lowercase().as_str() {
            "document" | "doc" => Some(PanelId::Document),
            "insights" | "insight" => Some(PanelId::Insights),
            "qa" | "q&a" => Some(PanelId::Qa),
            _ => None,
        }
    }
}

/// Display mode of a single panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelMode {
    #[default]
    Normal,
    /// Fills the whole layout area; all other panels are hidden
    Expanded,
    /// Removed from the layout area, shown as a restore tab
    Minimized,
}

/// Stored panel widths in percent of the container, indexed by `PanelId`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelWidths(pub [f32; 3]);

impl PanelWidths {
    pub fn new(widths: [f32; 3]) -> Self {
        Self(widths)
    }

    pub fn as_array(&self) -> [f32; 3] {
        self.0
    }

    /// Sum of the widths of the given panels
    pub fn sum_of(&self, panels: &[PanelId]) -> f32 {
        panels.iter().map(|&id| self[id]).sum()
    }
}

impl Default for PanelWidths {
    fn default() -> Self {
        DEFAULT_WIDTHS
    }
}

impl Index<PanelId> for PanelWidths {
    type Output = f32;

    fn index(&self, id: PanelId) -> &f32 {
        &self.0[id.index()]
    }
}

impl IndexMut<PanelId> for PanelWidths {
    fn index_mut(&mut self, id: PanelId) -> &mut f32 {
        &mut self.0[id.index()]
    }
}

/// Complete persisted layout record: a mode and a stored width for every panel
///
/// NOTE: Stored widths are not what gets displayed. Use `effective_widths()`,
/// which accounts for expansion and minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    modes: [PanelMode; 3],
    widths: PanelWidths,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            modes: [PanelMode::Normal; 3],
            widths: DEFAULT_WIDTHS,
        }
    }
}

impl LayoutState {
    /// Build a state from raw parts without checking invariants
    ///
    /// Callers that accept external data should follow up with `invariant_violation()`.
    pub fn from_parts(modes: [PanelMode; 3], widths: PanelWidths) -> Self {
        Self { modes, widths }
    }

    pub fn mode(&self, id: PanelId) -> PanelMode {
        self.modes[id.index()]
    }

    pub fn modes(&self) -> [PanelMode; 3] {
        self.modes
    }

    pub(crate) fn set_mode(&mut self, id: PanelId, mode: PanelMode) {
        self.modes[id.index()] = mode;
    }

    /// Stored (not effective) width of a panel
    pub fn width(&self, id: PanelId) -> f32 {
        self.widths[id]
    }

    pub fn widths(&self) -> &PanelWidths {
        &self.widths
    }

    pub(crate) fn set_widths(&mut self, widths: PanelWidths) {
        self.widths = widths;
    }

    pub(crate) fn reset_widths(&mut self) {
        self.widths = DEFAULT_WIDTHS;
    }

    pub(crate) fn set_all_modes(&mut self, mode: PanelMode) {
        self.modes = [mode; 3];
    }

    /// The expanded panel, if any
    pub fn expanded(&self) -> Option<PanelId> {
        PanelId::ALL
            .into_iter()
            .find(|&id| self.mode(id) == PanelMode::Expanded)
    }

    pub fn is_minimized(&self, id: PanelId) -> bool {
        self.mode(id) == PanelMode::Minimized
    }

    /// Number of panels not in `Minimized` mode
    pub fn non_minimized_count(&self) -> usize {
        self.modes
            .iter()
            .filter(|&&m| m != PanelMode::Minimized)
            .count()
    }

    /// Panels shown in the layout area, in display order
    ///
    /// With an expanded panel this is just that panel.
    pub fn visible_panels(&self) -> Vec<PanelId> {
        if let Some(expanded) = self.expanded() {
            return vec![expanded];
        }
        PanelId::ALL
            .into_iter()
            .filter(|&id| !self.is_minimized(id))
            .collect()
    }

    /// Panels shown as restore tabs, in display order
    pub fn minimized_panels(&self) -> Vec<PanelId> {
        PanelId::ALL
            .into_iter()
            .filter(|&id| self.is_minimized(id))
            .collect()
    }

    /// Number of draggable dividers in the current layout
    pub fn divider_count(&self) -> usize {
        self.visible_panels().len().saturating_sub(1)
    }

    /// Widths as displayed: visible panels sum to 100, hidden panels are 0
    ///
    /// An expanded panel takes 100 regardless of stored widths. Otherwise the
    /// stored widths of the visible panels are scaled to fill the container.
    pub fn effective_widths(&self) -> PanelWidths {
        let mut effective = PanelWidths([0.0; 3]);

        if let Some(expanded) = self.expanded() {
            effective[expanded] = 100.0;
            return effective;
        }

        let visible = self.visible_panels();
        let total = self.widths.sum_of(&visible);
        for &id in &visible {
            effective[id] = if total > 0.0 {
                self.widths[id] / total * 100.0
            } else {
                100.0 / visible.len() as f32
            };
        }
        effective
    }

    /// Effective width of a single panel
    pub fn effective_width(&self, id: PanelId) -> f32 {
        self.effective_widths()[id]
    }

    /// Describe the first broken invariant, if any
    ///
    /// A state that returns `Some` must never be restored from storage.
    pub fn invariant_violation(&self) -> Option<&'static str> {
        let expanded_count = self
            .modes
            .iter()
            .filter(|&&m| m == PanelMode::Expanded)
            .count();
        if expanded_count > 1 {
            return Some("more than one panel is expanded");
        }
        if self.non_minimized_count() == 0 {
            return Some("every panel is minimized");
        }
        if self
            .widths
            .0
            .iter()
            .any(|w| !w.is_finite() || !(0.0..=100.0).contains(w))
        {
            return Some("width is not a finite percentage");
        }
        if expanded_count == 0 && self.widths.sum_of(&self.visible_panels()) <= 0.0 {
            return Some("visible panels have no width");
        }
        None
    }

    /// Panic with context if the state breaks an invariant (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        if let Some(violation) = self.invariant_violation() {
            panic!("Layout invariant violated after {}: {} ({:?})", context, violation, self);
        }
        let sum = self.effective_widths().sum_of(&self.visible_panels());
        assert!(
            (sum - 100.0).abs() <= WIDTH_SUM_TOLERANCE,
            "Effective widths sum to {} after {} ({:?})",
            sum,
            context,
            self
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = LayoutState::default();
        assert_eq!(state.modes(), [PanelMode::Normal; 3]);
        assert_eq!(*state.widths(), DEFAULT_WIDTHS);
        assert_eq!(state.visible_panels(), PanelId::ALL.to_vec());
        assert_eq!(state.divider_count(), 2);
        assert!(state.invariant_violation().is_none());
    }

    #[test]
    fn test_panel_names() {
        assert_eq!(PanelId::from_name("doc"), Some(PanelId::Document));
        assert_eq!(PanelId::from_name("Insights"), Some(PanelId::Insights));
        assert_eq!(PanelId::from_name("Q&A"), Some(PanelId::Qa));
        assert_eq!(PanelId::from_name("sidebar"), None);
        assert_eq!(PanelId::Qa.display_name(), "Q&A");
    }

    #[test]
    fn test_effective_widths_with_expanded_panel() {
        let state = LayoutState::from_parts(
            [PanelMode::Normal, PanelMode::Normal, PanelMode::Expanded],
            PanelWidths::new([50.0, 30.0, 20.0]),
        );
        let effective = state.effective_widths();
        assert_eq!(effective.as_array(), [0.0, 0.0, 100.0]);
        assert_eq!(state.visible_panels(), vec![PanelId::Qa]);
        assert_eq!(state.divider_count(), 0);
    }

    #[test]
    fn test_effective_widths_normalize_visible_panels() {
        let state = LayoutState::from_parts(
            [PanelMode::Normal, PanelMode::Minimized, PanelMode::Normal],
            DEFAULT_WIDTHS,
        );
        let effective = state.effective_widths();
        assert_eq!(effective[PanelId::Insights], 0.0);
        let sum = effective[PanelId::Document] + effective[PanelId::Qa];
        assert!((sum - 100.0).abs() <= WIDTH_SUM_TOLERANCE);
        assert!((effective[PanelId::Document] - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_single_visible_panel_fills_container() {
        let state = LayoutState::from_parts(
            [PanelMode::Minimized, PanelMode::Normal, PanelMode::Minimized],
            DEFAULT_WIDTHS,
        );
        assert!((state.effective_width(PanelId::Insights) - 100.0).abs() < 0.001);
        assert_eq!(state.minimized_panels(), vec![PanelId::Document, PanelId::Qa]);
    }

    #[test]
    fn test_invariant_violations() {
        let two_expanded = LayoutState::from_parts(
            [PanelMode::Expanded, PanelMode::Expanded, PanelMode::Normal],
            DEFAULT_WIDTHS,
        );
        assert!(two_expanded.invariant_violation().is_some());

        let none_visible = LayoutState::from_parts([PanelMode::Minimized; 3], DEFAULT_WIDTHS);
        assert!(none_visible.invariant_violation().is_some());

        let out_of_range = LayoutState::from_parts(
            [PanelMode::Normal; 3],
            PanelWidths::new([120.0, 10.0, 10.0]),
        );
        assert!(out_of_range.invariant_violation().is_some());

        let zero_width = LayoutState::from_parts(
            [PanelMode::Normal; 3],
            PanelWidths::new([0.0, 0.0, 0.0]),
        );
        assert!(zero_width.invariant_violation().is_some());
    }
}
