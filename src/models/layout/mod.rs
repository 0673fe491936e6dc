// Layout module
// Pixel metrics and overlay geometry, independent of any rendering backend

use super::day::{DayDirection, DAYS_PER_WEEK};

pub const DEFAULT_ROW_HEIGHT: f32 = 30.0;
pub const DEFAULT_HEADER_HEIGHT: f32 = 40.0;
pub const DEFAULT_TIME_AXIS_WIDTH: f32 = 60.0;

/// Grid metrics. Row height, header height and the time-axis column width are
/// fixed; the column width is re-measured whenever the container resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub column_width: f32,
    pub row_height: f32,
    pub header_height: f32,
    pub time_axis_width: f32,
}

impl LayoutMetrics {
    pub fn new(row_height: f32, header_height: f32, time_axis_width: f32) -> Self {
        Self {
            column_width: 0.0,
            row_height,
            header_height,
            time_axis_width,
        }
    }

    /// Recompute the column width from a measured container width.
    ///
    /// `None` means the container is not mounted yet; the previous metrics are
    /// kept. Returns whether the column width changed.
    pub fn measure(&mut self, container_width: Option<f32>) -> bool {
        let Some(width) = container_width else {
            return false;
        };
        let column_width = ((width - self.time_axis_width) / DAYS_PER_WEEK as f32).max(0.0);
        let changed = column_width != self.column_width;
        self.column_width = column_width;
        changed
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::new(
            DEFAULT_ROW_HEIGHT,
            DEFAULT_HEADER_HEIGHT,
            DEFAULT_TIME_AXIS_WIDTH,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Half-open on the right and bottom edges so adjacent cells never overlap.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.left && point.x < self.right() && point.y >= self.top && point.y < self.bottom()
    }
}

/// Absolute placement and colors of an overlay block inside the grid
/// container. `offset` is measured from the edge given by `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventGeometry {
    pub top: f32,
    pub offset: f32,
    pub direction: DayDirection,
    pub width: f32,
    pub height: f32,
    pub background_color: String,
    pub border_color: String,
}

impl EventGeometry {
    /// Left edge relative to the container's left edge, whatever the direction.
    pub fn left_within(&self, container_width: f32) -> f32 {
        match self.direction {
            DayDirection::LeftToRight => self.offset,
            DayDirection::RightToLeft => container_width - self.offset - self.width,
        }
    }

    /// Replace both style colors, leaving placement untouched.
    pub fn recolor(&mut self, color: &str) {
        self.background_color = color.to_string();
        self.border_color = color.to_string();
    }
}
