//! Pending-event naming workflow.
//!
//! Owns the short-lived event between drag release and confirmation: its
//! title buffer, its color, the palette popup and the blur rules that decide
//! when losing focus means "done".
//!
//! Clicking a control inside the pending overlay first moves focus away from
//! the title field, so the host reports a blur before the click lands. The host
//! calls [`PendingWorkflow::arm_ignore_blur`] on pointer-down over such a control;
//! the next blur is then swallowed, and the caller schedules
//! [`PendingWorkflow::clear_ignore_blur`] for the following turn.

use crate::models::event::{CalendarEvent, PendingEvent};
use crate::models::layout::{EventGeometry, ScreenPoint, ScreenRect};
use crate::models::selection::SelectionRange;

/// Gap between the palette toggle and the popup below it.
pub const PALETTE_GAP: f32 = 4.0;

/// Where keyboard focus went when the title field lost it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    TitleInput,
    /// A swatch, the palette toggle or anything else inside the pending overlay.
    PendingControl,
    Elsewhere,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlurOutcome {
    /// Swallowed by the one-shot ignore flag; the flag reset must be deferred.
    Ignored,
    /// The palette is open, naming continues.
    PaletteOpen,
    /// Focus stayed inside the pending overlay, naming continues.
    StillNaming,
    /// Naming ended: `Some` when an event was committed, `None` when discarded.
    Confirmed(Option<CalendarEvent>),
}

#[derive(Debug, Clone)]
pub struct PendingWorkflow {
    pending: Option<PendingEvent>,
    title: String,
    color: String,
    palette: Vec<String>,
    palette_open: bool,
    palette_anchor: Option<ScreenPoint>,
    ignore_next_blur: bool,
    focus_requested: bool,
}

impl PendingWorkflow {
    pub fn new(palette: Vec<String>, default_color: impl Into<String>) -> Self {
        Self {
            pending: None,
            title: String::new(),
            color: default_color.into(),
            palette,
            palette_open: false,
            palette_anchor: None,
            ignore_next_blur: false,
            focus_requested: false,
        }
    }

    /// Start naming `pending` with an empty title and ask for title focus.
    pub fn begin(&mut self, pending: PendingEvent) {
        log::debug!(
            "Naming event on day {} {}-{}",
            pending.range.day,
            pending.start_slot,
            pending.end_slot
        );
        self.pending = Some(pending);
        self.title.clear();
        self.palette_open = false;
        self.ignore_next_blur = false;
        self.focus_requested = true;
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingEvent> {
        self.pending.as_ref()
    }

    /// Move the pending event to `range` after the slot sequence changed.
    pub fn relocate(&mut self, range: SelectionRange, geometry: EventGeometry) {
        if let Some(pending) = self.pending.as_mut() {
            pending.range = range;
            pending.geometry = geometry;
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Mutable title buffer for text-edit widgets.
    pub fn title_mut(&mut self) -> &mut String {
        &mut self.title
    }

    /// Color for the next pending event; the last one chosen sticks.
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Update the buffer color and recolor the pending event in place.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        if let Some(pending) = self.pending.as_mut() {
            pending.geometry.recolor(&self.color);
        }
    }

    /// Pick a swatch and close the palette.
    pub fn choose_color(&mut self, color: impl Into<String>) {
        self.set_color(color);
        self.palette_open = false;
    }

    pub fn palette_open(&self) -> bool {
        self.palette_open
    }

    /// Top-left corner of the palette popup.
    pub fn palette_anchor(&self) -> Option<ScreenPoint> {
        self.palette_anchor
    }

    /// Open the palette below `trigger`. Without a trigger rect the previous
    /// anchor is kept.
    pub fn open_palette(&mut self, trigger: Option<ScreenRect>) {
        if let Some(rect) = trigger {
            self.palette_anchor = Some(ScreenPoint::new(rect.left, rect.bottom() + PALETTE_GAP));
        }
        self.palette_open = true;
    }

    pub fn close_palette(&mut self) {
        self.palette_open = false;
    }

    pub fn toggle_palette(&mut self, trigger: Option<ScreenRect>) {
        if self.palette_open {
            self.close_palette();
        } else {
            self.open_palette(trigger);
        }
    }

    pub fn arm_ignore_blur(&mut self) {
        self.ignore_next_blur = true;
    }

    pub fn ignores_blur(&self) -> bool {
        self.ignore_next_blur
    }

    pub fn clear_ignore_blur(&mut self) {
        self.ignore_next_blur = false;
    }

    /// The title field lost focus to `focus`.
    pub fn on_title_blur(&mut self, focus: FocusTarget) -> BlurOutcome {
        if self.ignore_next_blur {
            return BlurOutcome::Ignored;
        }
        if self.palette_open {
            return BlurOutcome::PaletteOpen;
        }
        match focus {
            FocusTarget::TitleInput | FocusTarget::PendingControl => BlurOutcome::StillNaming,
            FocusTarget::Elsewhere => BlurOutcome::Confirmed(self.confirm()),
        }
    }

    /// End naming. Commits when the trimmed title is non-empty; the title
    /// buffer, pending event and ignore-blur flag are cleared either way.
    pub fn confirm(&mut self) -> Option<CalendarEvent> {
        let pending = self.pending.take();
        let title = std::mem::take(&mut self.title);
        self.palette_open = false;
        self.ignore_next_blur = false;

        let pending = pending?;
        match CalendarEvent::from_pending(pending, &title) {
            Ok(event) => Some(event),
            Err(_) => {
                log::debug!("Discarding pending event with empty title");
                None
            }
        }
    }

    /// One-shot: true once after [`begin`](Self::begin).
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day::{Day, DayDirection};
    use crate::models::settings::DEFAULT_PALETTE;
    use pretty_assertions::assert_eq;

    fn workflow() -> PendingWorkflow {
        PendingWorkflow::new(
            DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            "#add8e6",
        )
    }

    fn pending(color: &str) -> PendingEvent {
        PendingEvent {
            range: SelectionRange::new(Day::new(1).unwrap(), 0, 1),
            start_slot: "09:00".into(),
            end_slot: "09:15".into(),
            geometry: EventGeometry {
                top: 40.0,
                offset: 100.0,
                direction: DayDirection::LeftToRight,
                width: 100.0,
                height: 60.0,
                background_color: color.into(),
                border_color: color.into(),
            },
        }
    }

    #[test]
    fn test_begin_requests_focus_once() {
        let mut workflow = workflow();
        workflow.begin(pending("#add8e6"));
        assert!(workflow.is_active());
        assert!(workflow.take_focus_request());
        assert!(!workflow.take_focus_request());
    }

    #[test]
    fn test_set_color_merges_into_geometry() {
        let mut workflow = workflow();
        workflow.begin(pending("#add8e6"));
        workflow.set_color("#ffcccc");

        let geometry = &workflow.pending().unwrap().geometry;
        assert_eq!(geometry.background_color, "#ffcccc");
        assert_eq!(geometry.border_color, "#ffcccc");
        assert_eq!((geometry.top, geometry.height), (40.0, 60.0));
        assert_eq!(workflow.color(), "#ffcccc");
    }

    #[test]
    fn test_set_color_without_pending_updates_buffer() {
        let mut workflow = workflow();
        workflow.set_color("#ccffcc");
        assert_eq!(workflow.color(), "#ccffcc");
        assert!(workflow.pending().is_none());
    }

    #[test]
    fn test_confirm_with_title_commits() {
        let mut workflow = workflow();
        workflow.begin(pending("#add8e6"));
        workflow.set_title("  Lunch  ");

        let event = workflow.confirm().unwrap();
        assert_eq!(event.title(), "Lunch");
        assert!(!workflow.is_active());
        assert_eq!(workflow.title(), "");
    }

    #[test]
    fn test_confirm_with_blank_title_discards() {
        let mut workflow = workflow();
        workflow.begin(pending("#add8e6"));
        workflow.set_title("   ");
        assert!(workflow.confirm().is_none());
        assert!(!workflow.is_active());
        assert_eq!(workflow.title(), "");
    }

    #[test]
    fn test_begin_starts_from_clean_title() {
        let mut workflow = workflow();
        workflow.set_title("leftover");
        workflow.begin(pending("#add8e6"));
        assert_eq!(workflow.title(), "");
    }

    #[test]
    fn test_ignore_blur_does_not_outlive_session() {
        let mut workflow = workflow();
        workflow.begin(pending("#add8e6"));
        workflow.set_title("First");
        workflow.arm_ignore_blur();
        assert!(workflow.confirm().is_some());
        assert!(!workflow.ignores_blur());

        workflow.arm_ignore_blur();
        workflow.begin(pending("#add8e6"));
        assert!(!workflow.ignores_blur());
        workflow.set_title("Second");
        assert!(matches!(
            workflow.on_title_blur(FocusTarget::Elsewhere),
            BlurOutcome::Confirmed(Some(_))
        ));
    }

    #[test]
    fn test_toggle_palette_anchors_below_trigger() {
        let mut workflow = workflow();
        workflow.toggle_palette(Some(ScreenRect::new(200.0, 100.0, 24.0, 20.0)));
        assert!(workflow.palette_open());
        assert_eq!(workflow.palette_anchor(), Some(ScreenPoint::new(200.0, 124.0)));

        workflow.toggle_palette(None);
        assert!(!workflow.palette_open());
        assert_eq!(workflow.palette_anchor(), Some(ScreenPoint::new(200.0, 124.0)));
    }

    #[test]
    fn test_choose_color_closes_palette() {
        let mut workflow = workflow();
        workflow.begin(pending("#add8e6"));
        workflow.open_palette(None);
        workflow.choose_color("#e6ccff");
        assert!(!workflow.palette_open());
        assert_eq!(workflow.pending().unwrap().color(), "#e6ccff");
    }

    #[test]
    fn test_blur_rules() {
        let mut workflow = workflow();
        workflow.begin(pending("#add8e6"));
        workflow.set_title("Review");

        workflow.arm_ignore_blur();
        assert_eq!(workflow.on_title_blur(FocusTarget::Elsewhere), BlurOutcome::Ignored);
        workflow.clear_ignore_blur();

        workflow.open_palette(None);
        assert_eq!(workflow.on_title_blur(FocusTarget::Elsewhere), BlurOutcome::PaletteOpen);
        workflow.close_palette();

        assert_eq!(
            workflow.on_title_blur(FocusTarget::PendingControl),
            BlurOutcome::StillNaming
        );
        assert!(workflow.is_active());

        match workflow.on_title_blur(FocusTarget::Elsewhere) {
            BlurOutcome::Confirmed(Some(event)) => assert_eq!(event.title(), "Review"),
            other => panic!("expected commit, got {:?}", other),
        }
        assert!(!workflow.is_active());
    }
}
