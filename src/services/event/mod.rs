// Event store
// Append-only, in-memory list of confirmed events

use crate::models::event::CalendarEvent;

#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, event: CalendarEvent) {
        log::info!(
            "Created event '{}' on day {} {}-{}",
            event.title(),
            event.day(),
            event.start_slot(),
            event.end_slot()
        );
        self.events.push(event);
    }

    pub fn as_slice(&self) -> &[CalendarEvent] {
        &self.events
    }
}
