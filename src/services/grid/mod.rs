//! The week-grid widget core.
//!
//! `WeekGrid` wires the slot sequence, the selection state machine, geometry
//! mapping, the naming workflow and the event store together. Hosts feed it
//! pointer, focus and resize input and read back everything a render pass
//! needs: day labels, slot labels, highlight membership, confirmed events and
//! the pending event.
//!
//! All state is owned here and mutated only through these handlers.

use crate::models::cell::Cell;
use crate::models::day::{Day, DayDirection, DayLabels};
use crate::models::event::{CalendarEvent, PendingEvent};
use crate::models::layout::{EventGeometry, LayoutMetrics, ScreenPoint, ScreenRect};
use crate::models::selection::SelectionRange;
use crate::models::settings::GridSettings;
use crate::models::window::TimeWindow;
use crate::services::deferred::{DeferredAction, TurnQueue};
use crate::services::event::EventStore;
use crate::services::geometry::map_range;
use crate::services::pending::{BlurOutcome, FocusTarget, PendingWorkflow};
use crate::services::selection::{CellResolver, SelectionMachine, SelectionPhase};
use crate::services::slots::SlotSequence;

#[derive(Debug)]
pub struct WeekGrid {
    days: DayLabels,
    direction: DayDirection,
    slots: SlotSequence,
    metrics: LayoutMetrics,
    selection: SelectionMachine,
    workflow: PendingWorkflow,
    store: EventStore,
    deferred: TurnQueue,
}

impl WeekGrid {
    pub fn new(settings: &GridSettings) -> Self {
        Self {
            days: settings.day_labels(),
            direction: settings.direction,
            slots: SlotSequence::new(settings.window()),
            metrics: settings.metrics(),
            selection: SelectionMachine::new(),
            workflow: PendingWorkflow::new(settings.palette.clone(), settings.default_color.clone()),
            store: EventStore::new(),
            deferred: TurnQueue::new(),
        }
    }

    // ── Configuration & layout ─────────────────────────────────────────

    /// Regenerate slots for a new window; highlight and the pending event
    /// follow the new labels.
    pub fn set_window(&mut self, window: TimeWindow) {
        if self.slots.set_window(window) {
            log::debug!("Time window changed, {} slots", self.slots.len());
            self.selection.rebuild_highlight(&self.slots);
            self.relocate_pending();
        }
    }

    fn relocate_pending(&mut self) {
        let Some(pending) = self.workflow.pending() else {
            return;
        };
        let (Some(start), Some(end)) = (
            self.slots.index_of(&pending.start_slot),
            self.slots.index_of(&pending.end_slot),
        ) else {
            log::warn!(
                "Pending event {}-{} is outside the new window; keeping its last position",
                pending.start_slot,
                pending.end_slot
            );
            return;
        };
        let range = SelectionRange::new(pending.range.day, start, end);
        let geometry = map_range(&range, &self.metrics, self.direction, pending.color());
        self.workflow.relocate(range, geometry);
    }

    /// Re-measure after a container resize. `None` while unmounted.
    pub fn measure(&mut self, container_width: Option<f32>) -> bool {
        self.metrics.measure(container_width)
    }

    // ── Pointer input ──────────────────────────────────────────────────

    pub fn pointer_down(&mut self, cell: Cell) -> bool {
        if self.workflow.is_active() {
            return false;
        }
        self.selection.pointer_down(cell, &self.slots)
    }

    pub fn pointer_move(&mut self, point: ScreenPoint, resolver: &dyn CellResolver) -> bool {
        self.selection.pointer_move(point, resolver, &self.slots)
    }

    pub fn drag_over(&mut self, cell: Cell) -> bool {
        self.selection.drag_over(cell, &self.slots)
    }

    /// Release the drag. Returns whether a pending event was created.
    pub fn pointer_up(&mut self) -> bool {
        let Some(drag) = self.selection.pointer_up() else {
            return false;
        };
        let Some(range) = drag.range(&self.slots) else {
            log::warn!(
                "Dropping selection {} → {}: slots no longer resolve",
                drag.anchor.key(),
                drag.current.key()
            );
            return false;
        };
        let (Some(start_slot), Some(end_slot)) = (self.slots.get(range.start), self.slots.get(range.end))
        else {
            return false;
        };

        let geometry = map_range(&range, &self.metrics, self.direction, self.workflow.color());
        let pending = PendingEvent {
            range,
            start_slot: start_slot.to_string(),
            end_slot: end_slot.to_string(),
            geometry,
        };
        self.workflow.begin(pending);
        self.selection.enter_naming();
        true
    }

    // ── Naming ─────────────────────────────────────────────────────────

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.workflow.set_title(title);
    }

    pub fn title_mut(&mut self) -> &mut String {
        self.workflow.title_mut()
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.workflow.set_color(color);
    }

    pub fn choose_color(&mut self, color: impl Into<String>) {
        self.workflow.choose_color(color);
    }

    pub fn toggle_palette(&mut self, trigger: Option<ScreenRect>) {
        self.workflow.toggle_palette(trigger);
    }

    pub fn close_palette(&mut self) {
        self.workflow.close_palette();
    }

    /// Call right before the pointer interacts with a control inside the
    /// pending overlay.
    pub fn arm_ignore_blur(&mut self) {
        self.workflow.arm_ignore_blur();
    }

    /// The title field lost focus to `focus`.
    pub fn title_blurred(&mut self, focus: FocusTarget) -> BlurOutcome {
        let outcome = self.workflow.on_title_blur(focus);
        match &outcome {
            BlurOutcome::Ignored => self.deferred.schedule(DeferredAction::ClearIgnoreBlur),
            BlurOutcome::Confirmed(event) => self.finish_naming(event.clone()),
            BlurOutcome::PaletteOpen | BlurOutcome::StillNaming => {}
        }
        outcome
    }

    /// Explicit confirm (Enter). Returns whether an event was committed.
    pub fn confirm(&mut self) -> bool {
        let event = self.workflow.confirm();
        let committed = event.is_some();
        self.finish_naming(event);
        committed
    }

    fn finish_naming(&mut self, event: Option<CalendarEvent>) {
        if let Some(event) = event {
            self.store.append(event);
        }
        self.selection.finish_naming();
    }

    pub fn take_focus_request(&mut self) -> bool {
        self.workflow.take_focus_request()
    }

    /// Run everything deferred during the turn that just finished.
    pub fn end_turn(&mut self) {
        for action in self.deferred.drain_turn() {
            match action {
                DeferredAction::ClearIgnoreBlur => self.workflow.clear_ignore_blur(),
            }
        }
    }

    // ── Render surface ─────────────────────────────────────────────────

    pub fn days(&self) -> &DayLabels {
        &self.days
    }

    pub fn direction(&self) -> DayDirection {
        self.direction
    }

    pub fn slots(&self) -> &SlotSequence {
        &self.slots
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn phase(&self) -> &SelectionPhase {
        self.selection.phase()
    }

    pub fn is_highlighted(&self, cell: &Cell) -> bool {
        self.selection.is_highlighted(cell)
    }

    pub fn is_key_highlighted(&self, key: &str) -> bool {
        self.selection.is_key_highlighted(key)
    }

    pub fn events(&self) -> &[CalendarEvent] {
        self.store.as_slice()
    }

    pub fn pending(&self) -> Option<&PendingEvent> {
        self.workflow.pending()
    }

    pub fn workflow(&self) -> &PendingWorkflow {
        &self.workflow
    }

    /// Geometry of `event` under the current metrics and slots. Falls back to
    /// the geometry captured at creation when its slots no longer resolve.
    pub fn layout_event(&self, event: &CalendarEvent) -> EventGeometry {
        self.layout_slots(event.day(), event.start_slot(), event.end_slot(), event.color())
            .unwrap_or_else(|| event.geometry().clone())
    }

    /// Pending overlay geometry under the current metrics and slots, with the
    /// same fallback as [`layout_event`](Self::layout_event).
    pub fn layout_pending(&self) -> Option<EventGeometry> {
        self.workflow.pending().map(|pending| {
            self.layout_slots(
                pending.range.day,
                &pending.start_slot,
                &pending.end_slot,
                pending.color(),
            )
            .unwrap_or_else(|| pending.geometry.clone())
        })
    }

    fn layout_slots(
        &self,
        day: Day,
        start_slot: &str,
        end_slot: &str,
        color: &str,
    ) -> Option<EventGeometry> {
        let start = self.slots.index_of(start_slot)?;
        let end = self.slots.index_of(end_slot)?;
        let range = SelectionRange::new(day, start, end);
        Some(map_range(&range, &self.metrics, self.direction, color))
    }
}

impl Default for WeekGrid {
    fn default() -> Self {
        Self::new(&GridSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid() -> WeekGrid {
        let settings = GridSettings {
            start_hour: 9,
            start_minute: 0,
            end_hour: 12,
            end_minute: 0,
            ..GridSettings::default()
        };
        let mut grid = WeekGrid::new(&settings);
        grid.measure(Some(760.0));
        grid
    }

    fn cell(day: usize, slot: &str) -> Cell {
        Cell::new(Day::new(day).unwrap(), slot)
    }

    fn select(grid: &mut WeekGrid, day: usize, from: &str, to: &str) {
        assert!(grid.pointer_down(cell(day, from)));
        grid.drag_over(cell(day, to));
        assert!(grid.pointer_up());
    }

    #[test]
    fn test_release_creates_pending_event() {
        let mut grid = grid();
        select(&mut grid, 2, "10:00", "09:30");

        let pending = grid.pending().unwrap();
        assert_eq!(pending.start_slot, "09:30");
        assert_eq!(pending.end_slot, "10:00");
        assert_eq!(pending.geometry.top, 40.0 + 2.0 * 30.0);
        assert_eq!(pending.geometry.offset, 200.0);
        assert_eq!(pending.geometry.height, 90.0);
        assert_eq!(grid.phase(), &SelectionPhase::Naming);
        assert!(grid.take_focus_request());
    }

    #[test]
    fn test_click_without_movement_creates_one_slot_event() {
        let mut grid = grid();
        grid.pointer_down(cell(0, "11:00"));
        assert!(grid.pointer_up());
        assert_eq!(grid.pending().unwrap().range.len(), 1);
    }

    #[test]
    fn test_second_selection_refused_while_naming() {
        let mut grid = grid();
        select(&mut grid, 2, "10:00", "10:00");
        assert!(!grid.pointer_down(cell(4, "09:00")));
        assert_eq!(grid.pending().unwrap().range.day, Day::new(2).unwrap());
    }

    #[test]
    fn test_confirm_appends_and_resets() {
        let mut grid = grid();
        select(&mut grid, 1, "09:00", "09:45");
        grid.set_title("Planning");
        assert!(grid.confirm());

        assert_eq!(grid.events().len(), 1);
        assert_eq!(grid.events()[0].title(), "Planning");
        assert!(grid.pending().is_none());
        assert_eq!(grid.phase(), &SelectionPhase::Idle);
    }

    #[test]
    fn test_confirm_blank_title_discards() {
        let mut grid = grid();
        select(&mut grid, 1, "09:00", "09:45");
        assert!(!grid.confirm());
        assert!(grid.events().is_empty());
        assert_eq!(grid.phase(), &SelectionPhase::Idle);
    }

    #[test]
    fn test_ignored_blur_is_reset_next_turn() {
        let mut grid = grid();
        select(&mut grid, 3, "09:00", "09:00");
        grid.set_title("Sync");

        grid.arm_ignore_blur();
        assert_eq!(grid.title_blurred(FocusTarget::Elsewhere), BlurOutcome::Ignored);
        assert!(grid.workflow().ignores_blur());

        grid.end_turn();
        assert!(!grid.workflow().ignores_blur());
        assert!(grid.pending().is_some());

        assert!(matches!(
            grid.title_blurred(FocusTarget::Elsewhere),
            BlurOutcome::Confirmed(Some(_))
        ));
        assert_eq!(grid.events().len(), 1);
    }

    #[test]
    fn test_color_sticks_for_next_event() {
        let mut grid = grid();
        select(&mut grid, 1, "09:00", "09:00");
        grid.choose_color("#ffccff");
        grid.set_title("One");
        grid.confirm();

        select(&mut grid, 1, "10:00", "10:00");
        assert_eq!(grid.pending().unwrap().color(), "#ffccff");
        assert_eq!(grid.events()[0].color(), "#ffccff");
    }

    #[test]
    fn test_layout_event_follows_resize() {
        let mut grid = grid();
        select(&mut grid, 3, "09:00", "09:15");
        grid.set_title("Resize me");
        grid.confirm();

        grid.measure(Some(1460.0));
        let geometry = grid.layout_event(&grid.events()[0]);
        assert_eq!(geometry.width, 200.0);
        assert_eq!(geometry.offset, 600.0);
        assert_eq!(grid.events()[0].geometry().width, 100.0);
    }

    #[test]
    fn test_layout_event_falls_back_when_slots_vanish() {
        let mut grid = grid();
        select(&mut grid, 0, "11:45", "12:00");
        grid.set_title("Late");
        grid.confirm();

        grid.set_window(TimeWindow::new(8, 0, 10, 0));
        let event = &grid.events()[0];
        assert_eq!(grid.layout_event(event), event.geometry().clone());
    }

    #[test]
    fn test_window_change_while_naming_moves_pending_event() {
        let mut grid = grid();
        select(&mut grid, 2, "10:00", "10:00");
        assert_eq!(grid.layout_pending().unwrap().top, 40.0 + 4.0 * 30.0);

        grid.set_window(TimeWindow::new(8, 0, 12, 0));

        let pending = grid.pending().unwrap();
        assert_eq!((pending.range.start, pending.range.end), (8, 8));
        assert_eq!(grid.slots().get(pending.range.start), Some("10:00"));
        assert_eq!(pending.geometry.top, 40.0 + 8.0 * 30.0);
        assert_eq!(grid.layout_pending().unwrap().top, 40.0 + 8.0 * 30.0);

        grid.set_title("Moved");
        assert!(grid.confirm());
        assert_eq!(grid.events()[0].start_slot(), "10:00");
        assert_eq!(grid.events()[0].geometry().top, 40.0 + 8.0 * 30.0);
    }

    #[test]
    fn test_window_change_while_naming_keeps_vanished_pending_in_place() {
        let mut grid = grid();
        select(&mut grid, 2, "11:30", "11:45");
        let before = grid.pending().unwrap().clone();

        grid.set_window(TimeWindow::new(8, 0, 10, 0));

        assert_eq!(grid.pending(), Some(&before));
        assert_eq!(grid.layout_pending(), Some(before.geometry.clone()));
    }

    #[test]
    fn test_armed_blur_does_not_leak_into_next_session() {
        let mut grid = grid();
        select(&mut grid, 1, "09:00", "09:00");
        grid.set_title("First");
        grid.arm_ignore_blur();
        assert!(grid.confirm());
        grid.end_turn();

        select(&mut grid, 1, "10:00", "10:00");
        grid.set_title("Second");
        assert!(matches!(
            grid.title_blurred(FocusTarget::Elsewhere),
            BlurOutcome::Confirmed(Some(_))
        ));
        assert_eq!(grid.events().len(), 2);
    }

    #[test]
    fn test_window_change_mid_drag_declines_release() {
        let mut grid = grid();
        grid.pointer_down(cell(2, "11:30"));
        grid.set_window(TimeWindow::new(8, 0, 10, 0));
        assert!(!grid.pointer_up());
        assert!(grid.pending().is_none());
        assert_eq!(grid.phase(), &SelectionPhase::Idle);
    }
}
