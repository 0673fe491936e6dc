// Cell hit map
//
// Every drawn cell records its screen rect together with its own day and slot,
// so pointer positions resolve to cells by hit-testing what was actually
// painted rather than by re-deriving rows from the metrics.

use egui::{Pos2, Rect};

use crate::models::cell::Cell;
use crate::models::layout::{ScreenPoint, ScreenRect};
use crate::services::selection::CellResolver;

pub fn to_screen_rect(rect: Rect) -> ScreenRect {
    ScreenRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn to_screen_point(pos: Pos2) -> ScreenPoint {
    ScreenPoint::new(pos.x, pos.y)
}

#[derive(Debug, Default)]
pub struct CellHitMap {
    cells: Vec<(ScreenRect, Cell)>,
    clip: Option<ScreenRect>,
}

impl CellHitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's cells; only the visible viewport `clip` can hit.
    pub fn begin_frame(&mut self, clip: Rect) {
        self.cells.clear();
        self.clip = Some(to_screen_rect(clip));
    }

    pub fn record(&mut self, rect: Rect, cell: Cell) {
        self.cells.push((to_screen_rect(rect), cell));
    }
}

impl CellResolver for CellHitMap {
    fn resolve(&self, point: ScreenPoint) -> Option<Cell> {
        if let Some(clip) = self.clip {
            if !clip.contains(point) {
                return None;
            }
        }
        self.cells
            .iter()
            .find(|(rect, _)| rect.contains(point))
            .map(|(_, cell)| cell.clone())
    }
}
