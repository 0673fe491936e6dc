use proptest::prelude::*;
use week_grid::models::day::Day;
use week_grid::models::window::TimeWindow;
use week_grid::services::selection::{normalize_range, SelectionMachine, SelectionPhase};
use week_grid::services::slots::SlotSequence;

use crate::fixtures::{cell, morning_grid};

fn slots() -> SlotSequence {
    SlotSequence::new(TimeWindow::full_day())
}

proptest! {
    /// Property: normalizing (A, B) equals normalizing (B, A) on the same day
    #[test]
    fn prop_normalize_is_order_independent(day in 0..7usize, a in 0..96usize, b in 0..96usize) {
        let slots = slots();
        let first = cell(day, slots.get(a).unwrap());
        let second = cell(day, slots.get(b).unwrap());

        let forward = normalize_range(&first, &second, &slots);
        let backward = normalize_range(&second, &first, &slots);
        prop_assert_eq!(forward, backward);

        let range = forward.unwrap();
        prop_assert!(range.start <= range.end);
        prop_assert_eq!(range.start, a.min(b));
        prop_assert_eq!(range.end, a.max(b));
    }

    /// Property: no sequence of moves produces a range spanning two days
    #[test]
    fn prop_drag_never_leaves_anchor_day(
        anchor_day in 0..7usize,
        anchor_slot in 0..96usize,
        moves in prop::collection::vec((0..7usize, 0..96usize), 0..30),
    ) {
        let slots = slots();
        let mut machine = SelectionMachine::new();
        machine.pointer_down(cell(anchor_day, slots.get(anchor_slot).unwrap()), &slots);

        for (day, slot) in moves {
            machine.drag_over(cell(day, slots.get(slot).unwrap()), &slots);
            let SelectionPhase::Dragging(drag) = machine.phase() else {
                return Err(TestCaseError::fail("drag ended early"));
            };
            prop_assert_eq!(drag.current.day, Day::new(anchor_day).unwrap());
            let range = drag.range(&slots).unwrap();
            prop_assert_eq!(range.day, Day::new(anchor_day).unwrap());
            prop_assert_eq!(machine.highlighted_count(), range.len());
        }
    }

    /// Property: blank titles never reach the store, real ones add exactly one event
    #[test]
    fn prop_confirm_appends_only_named_events(title in "[ a-z]{0,12}") {
        let mut grid = morning_grid();
        grid.pointer_down(cell(3, "09:15"));
        grid.pointer_up();
        grid.set_title(title.clone());
        grid.confirm();

        let expected = usize::from(!title.trim().is_empty());
        prop_assert_eq!(grid.events().len(), expected);
        prop_assert!(grid.pending().is_none());
        prop_assert_eq!(grid.workflow().title(), "");
    }
}
