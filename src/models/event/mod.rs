// Event module
// Pending (being named) and confirmed calendar events

use super::day::Day;
use super::layout::EventGeometry;
use super::selection::SelectionRange;

/// A released selection waiting for a title. At most one exists at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEvent {
    pub range: SelectionRange,
    pub start_slot: String,
    pub end_slot: String,
    pub geometry: EventGeometry,
}

impl PendingEvent {
    pub fn color(&self) -> &str {
        &self.geometry.background_color
    }
}

/// A confirmed event. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    day: Day,
    start_slot: String,
    end_slot: String,
    title: String,
    color: String,
    geometry: EventGeometry,
}

impl CalendarEvent {
    /// Materialize a pending event under a title.
    ///
    /// Returns `Err` when the title is blank after trimming.
    pub fn from_pending(pending: PendingEvent, title: &str) -> Result<Self, String> {
        let title = title.trim();
        if title.is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        Ok(Self {
            day: pending.range.day,
            start_slot: pending.start_slot,
            end_slot: pending.end_slot,
            title: title.to_string(),
            color: pending.geometry.background_color.clone(),
            geometry: pending.geometry,
        })
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn start_slot(&self) -> &str {
        &self.start_slot
    }

    pub fn end_slot(&self) -> &str {
        &self.end_slot
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Geometry captured when the event was confirmed.
    pub fn geometry(&self) -> &EventGeometry {
        &self.geometry
    }
}
