//! Geometry solver for divider drags
//!
//! Maps (current widths, visible panels, dragged divider, pointer position) to a
//! new width assignment. The solver is pure and total: any proposal that would
//! break the minimum-width or sum constraints yields the input widths unchanged.

use crate::model::Rect;
use crate::panel::{PanelId, PanelWidths, WIDTH_SUM_TOLERANCE};

/// Minimum width of a visible panel, in percent
pub const MIN_PANEL_WIDTH: f32 = 20.0;

/// Upper bound for the first panel when the first of two dividers is dragged
pub const MAX_FIRST_PANEL_WIDTH: f32 = 70.0;

/// Slack for float noise when comparing against the minimum width
const MIN_WIDTH_EPSILON: f32 = 1e-4;

/// Convert an absolute pointer x coordinate into a percentage of the container
///
/// The result is clamped to [0, 100]. A container without horizontal extent yields 0.
pub fn pointer_percentage(x: f32, container: &Rect) -> f32 {
    if container.width <= 0.0 || !x.is_finite() {
        return 0.0;
    }
    ((x - container.x) / container.width * 100.0).clamp(0.0, 100.0)
}

/// Compute new widths for a divider drag using the default minimum width
pub fn compute_widths(
    current: &PanelWidths,
    visible: &[PanelId],
    divider_index: usize,
    pointer: f32,
) -> PanelWidths {
    compute_widths_with(MIN_PANEL_WIDTH, current, visible, divider_index, pointer)
}

/// Compute new widths for a divider drag
///
/// `visible` lists the visible panels in display order; divider `i` sits between
/// `visible[i]` and `visible[i + 1]`. Widths of panels not in `visible` are
/// carried over untouched.
pub fn compute_widths_with(
    min_width: f32,
    current: &PanelWidths,
    visible: &[PanelId],
    divider_index: usize,
    pointer: f32,
) -> PanelWidths {
    if !pointer.is_finite() || !min_width.is_finite() || min_width < 0.0 {
        return *current;
    }
    if has_duplicates(visible) {
        return *current;
    }

    let pointer = pointer.clamp(0.0, 100.0);
    let proposal = match (visible, divider_index) {
        (&[left, right], 0) => Some(drag_pair(min_width, current, left, right, pointer)),
        (&[first, second, third], 0) => Some(drag_first_of_three(
            min_width, current, first, second, third, pointer,
        )),
        (&[first, second, third], 1) => {
            drag_second_of_three(min_width, current, first, second, third, pointer)
        }
        _ => None,
    };

    match proposal {
        Some(widths) if is_acceptable(min_width, &widths, visible) => widths,
        Some(_) => {
            tracing::trace!(divider_index, pointer, "Rejected divider proposal");
            *current
        }
        None => *current,
    }
}

/// Two visible panels share a single divider
fn drag_pair(
    min_width: f32,
    current: &PanelWidths,
    left: PanelId,
    right: PanelId,
    pointer: f32,
) -> PanelWidths {
    let mut widths = *current;
    let left_width = clamp_between(pointer, min_width, 100.0 - min_width);
    widths[left] = left_width;
    widths[right] = 100.0 - left_width;
    widths
}

/// First divider of three: the first panel follows the pointer and the other
/// two split the rest in their prior ratio
fn drag_first_of_three(
    min_width: f32,
    current: &PanelWidths,
    first: PanelId,
    second: PanelId,
    third: PanelId,
    pointer: f32,
) -> PanelWidths {
    let mut widths = *current;
    let first_width = clamp_between(pointer, min_width, MAX_FIRST_PANEL_WIDTH);
    let remaining = 100.0 - first_width;

    let (second_width, third_width) = if remaining < 2.0 * min_width {
        (min_width, remaining - min_width)
    } else {
        let prior_total = current[second] + current[third];
        let ratio = if prior_total > 0.0 {
            current[second] / prior_total
        } else {
            0.5
        };
        (
            (remaining * ratio).max(min_width),
            (remaining * (1.0 - ratio)).max(min_width),
        )
    };

    widths[first] = first_width;
    widths[second] = second_width;
    widths[third] = third_width;
    widths
}

/// Second divider of three: the first panel stays put, the divider moves
/// between the second and third panels
fn drag_second_of_three(
    min_width: f32,
    current: &PanelWidths,
    first: PanelId,
    second: PanelId,
    third: PanelId,
    pointer: f32,
) -> Option<PanelWidths> {
    let first_width = current[first];
    let position = clamp_between(pointer, first_width + min_width, 100.0 - min_width);
    let second_width = position - first_width;
    if second_width < min_width - MIN_WIDTH_EPSILON {
        return None;
    }

    let mut widths = *current;
    widths[second] = second_width;
    widths[third] = 100.0 - position;
    Some(widths)
}

/// Every visible panel meets the minimum and the visible sum does not overflow
fn is_acceptable(min_width: f32, widths: &PanelWidths, visible: &[PanelId]) -> bool {
    let all_wide_enough = visible
        .iter()
        .all(|&id| widths[id].is_finite() && widths[id] >= min_width - MIN_WIDTH_EPSILON);
    all_wide_enough && widths.sum_of(visible) <= 100.0 + WIDTH_SUM_TOLERANCE
}

/// `value.clamp(lo, hi)` that never panics when `lo > hi` (the upper bound wins)
#[inline]
fn clamp_between(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi)
}

fn has_duplicates(panels: &[PanelId]) -> bool {
    panels
        .iter()
        .enumerate()
        .any(|(i, id)| panels[i + 1..].contains(id))
}
