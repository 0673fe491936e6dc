use crate::models::cell::Cell;
use crate::models::selection::SelectionRange;
use crate::services::slots::SlotSequence;

/// Canonical range for an anchor/current pair, independent of drag direction.
///
/// Declines (returns `None`) when the cells are on different days or either
/// label is missing from `slots`, e.g. after the window changed mid-drag.
pub fn normalize_range(anchor: &Cell, current: &Cell, slots: &SlotSequence) -> Option<SelectionRange> {
    if anchor.day != current.day {
        return None;
    }
    let anchor_index = slots.index_of(&anchor.slot)?;
    let current_index = slots.index_of(&current.slot)?;
    Some(SelectionRange::new(anchor.day, anchor_index, current_index))
}
