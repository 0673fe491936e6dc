//! Drag-selection state machine.
//!
//! Tracks the Idle → Dragging → Naming → Idle lifecycle and the anchor/current
//! cell pair of an in-progress drag. The highlighted cell keys are rebuilt on
//! every accepted move so renderers can test membership in O(1).

pub mod normalizer;

use std::collections::HashSet;

use crate::models::cell::{cell_key, Cell};
use crate::models::layout::ScreenPoint;
use crate::models::selection::SelectionRange;
use crate::services::slots::SlotSequence;

pub use normalizer::normalize_range;

/// Maps a pointer position to the cell under it.
///
/// The rendering host implements this by hit-testing the cells it drew, each
/// of which knows its own day and slot.
#[cfg_attr(test, mockall::automock)]
pub trait CellResolver {
    fn resolve(&self, point: ScreenPoint) -> Option<Cell>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragContext {
    pub anchor: Cell,
    pub current: Cell,
}

impl DragContext {
    pub fn range(&self, slots: &SlotSequence) -> Option<SelectionRange> {
        normalize_range(&self.anchor, &self.current, slots)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Dragging(DragContext),
    /// A released selection is waiting for its title.
    Naming,
}

#[derive(Debug, Default)]
pub struct SelectionMachine {
    phase: SelectionPhase,
    highlighted: HashSet<String>,
}

impl SelectionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SelectionPhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, SelectionPhase::Dragging(_))
    }

    pub fn is_naming(&self) -> bool {
        matches!(self.phase, SelectionPhase::Naming)
    }

    pub fn drag(&self) -> Option<&DragContext> {
        match &self.phase {
            SelectionPhase::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    /// Open a drag on `cell`. Refused unless idle, so a click while a pending
    /// event is being named cannot start a second selection.
    pub fn pointer_down(&mut self, cell: Cell, slots: &SlotSequence) -> bool {
        if !matches!(self.phase, SelectionPhase::Idle) {
            log::debug!("Ignoring pointer-down on {} while {:?}", cell.key(), self.phase);
            return false;
        }
        log::debug!("Drag started at {}", cell.key());
        self.phase = SelectionPhase::Dragging(DragContext {
            anchor: cell.clone(),
            current: cell,
        });
        self.rebuild_highlight(slots);
        true
    }

    /// Global pointer move: resolve the hovered cell and extend the drag.
    pub fn pointer_move(
        &mut self,
        point: ScreenPoint,
        resolver: &dyn CellResolver,
        slots: &SlotSequence,
    ) -> bool {
        if !self.is_dragging() {
            return false;
        }
        match resolver.resolve(point) {
            Some(cell) => self.drag_over(cell, slots),
            None => false,
        }
    }

    /// Extend the drag to `cell`. Cells outside the anchor's day column are
    /// ignored, as are cells whose slot no longer resolves.
    pub fn drag_over(&mut self, cell: Cell, slots: &SlotSequence) -> bool {
        let SelectionPhase::Dragging(drag) = &mut self.phase else {
            return false;
        };
        if drag.anchor.day != cell.day || drag.current == cell {
            return false;
        }
        if normalize_range(&drag.anchor, &cell, slots).is_none() {
            log::warn!("Slot {} is not in the current sequence; keeping selection", cell.slot);
            return false;
        }
        drag.current = cell;
        self.rebuild_highlight(slots);
        true
    }

    /// Close the drag and hand back its final anchor/current pair.
    pub fn pointer_up(&mut self) -> Option<DragContext> {
        if !self.is_dragging() {
            return None;
        }
        let SelectionPhase::Dragging(drag) = std::mem::take(&mut self.phase) else {
            return None;
        };
        self.highlighted.clear();
        log::debug!("Drag released {} → {}", drag.anchor.key(), drag.current.key());
        Some(drag)
    }

    /// Idle → Naming, once a pending event exists.
    pub fn enter_naming(&mut self) {
        if matches!(self.phase, SelectionPhase::Idle) {
            self.phase = SelectionPhase::Naming;
        }
    }

    /// Naming → Idle after confirm or discard.
    pub fn finish_naming(&mut self) {
        if self.is_naming() {
            self.phase = SelectionPhase::Idle;
        }
    }

    pub fn is_highlighted(&self, cell: &Cell) -> bool {
        self.highlighted.contains(&cell.key())
    }

    pub fn is_key_highlighted(&self, key: &str) -> bool {
        self.highlighted.contains(key)
    }

    pub fn highlighted_count(&self) -> usize {
        self.highlighted.len()
    }

    /// Recompute highlight membership, e.g. after the slot sequence changed.
    pub fn rebuild_highlight(&mut self, slots: &SlotSequence) {
        self.highlighted.clear();
        let Some(range) = self.drag().and_then(|drag| drag.range(slots)) else {
            return;
        };
        for index in range.slot_indices() {
            if let Some(label) = slots.get(index) {
                self.highlighted.insert(cell_key(range.day, label));
            }
        }
    }
}
