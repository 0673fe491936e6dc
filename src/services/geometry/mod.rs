//! Geometry mapping between selection ranges and overlay pixels.
//!
//! Overlay coordinates are relative to the day area: `top` counts from the
//! top of the header row, `offset` from the leading edge of day 0 (left for
//! left-to-right grids, right for right-to-left ones). The time axis is not
//! part of that space.

use crate::models::day::DayDirection;
use crate::models::layout::{EventGeometry, LayoutMetrics};
use crate::models::selection::SelectionRange;

/// Distance from a viewport edge that triggers auto-scroll while dragging.
pub const EDGE_SCROLL_ZONE: f32 = 30.0;
/// Pixels scrolled per pointer move inside the zone.
pub const EDGE_SCROLL_STEP: f32 = 10.0;

/// Place `range` as an overlay block painted in `color`.
pub fn map_range(
    range: &SelectionRange,
    metrics: &LayoutMetrics,
    direction: DayDirection,
    color: &str,
) -> EventGeometry {
    EventGeometry {
        top: metrics.header_height + range.start as f32 * metrics.row_height,
        offset: range.day.index() as f32 * metrics.column_width,
        direction,
        width: metrics.column_width,
        height: range.len() as f32 * metrics.row_height,
        background_color: color.to_string(),
        border_color: color.to_string(),
    }
}

/// Inverse of the vertical mapping: slot index under a container-relative y.
///
/// Hosts hit-test drawn cells instead; this is the arithmetic reference the
/// cell rects must agree with.
pub fn slot_at_offset(y: f32, metrics: &LayoutMetrics, slot_count: usize) -> Option<usize> {
    if metrics.row_height <= 0.0 {
        return None;
    }
    let relative = y - metrics.header_height;
    if relative < 0.0 {
        return None;
    }
    let index = (relative / metrics.row_height).floor() as usize;
    (index < slot_count).then_some(index)
}

/// Scroll delta for a pointer at `pointer_y` during a drag: negative near the
/// top of the viewport, positive near the bottom, zero elsewhere.
pub fn edge_scroll_delta(pointer_y: f32, viewport_top: f32, viewport_bottom: f32) -> f32 {
    if pointer_y < viewport_top + EDGE_SCROLL_ZONE {
        -EDGE_SCROLL_STEP
    } else if pointer_y > viewport_bottom - EDGE_SCROLL_ZONE {
        EDGE_SCROLL_STEP
    } else {
        0.0
    }
}
