//! Slot generation.
//!
//! Turns a [`TimeWindow`] into the ordered sequence of `HH:MM` labels the grid
//! rows are built from. Labels wrap 24:00 to `00:00` for display only; a slot is
//! identified by its index in the sequence, never by its clock value.

use chrono::NaiveTime;

use crate::models::window::{TimeWindow, MINUTES_PER_DAY, SLOT_MINUTES};

/// Labels for every 15-minute step in `[start, end]`, inclusive.
///
/// An inverted window yields an empty sequence.
pub fn generate_slots(
    start_hour: u32,
    start_minute: u32,
    end_hour: u32,
    end_minute: u32,
) -> Vec<String> {
    let window = TimeWindow::new(start_hour, start_minute, end_hour, end_minute);
    let start = window.start_minutes();

    (0..window.slot_count())
        .map(|index| format_label(start + index as u32 * SLOT_MINUTES))
        .collect()
}

fn format_label(total_minutes: u32) -> String {
    let seconds = (total_minutes % MINUTES_PER_DAY) * 60;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// The current slot labels, regenerated whenever the window changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotSequence {
    window: Option<TimeWindow>,
    labels: Vec<String>,
}

impl SlotSequence {
    pub fn new(window: TimeWindow) -> Self {
        let mut sequence = Self::default();
        sequence.set_window(window);
        sequence
    }

    /// Regenerate for a new window. Returns `false` when nothing changed.
    pub fn set_window(&mut self, window: TimeWindow) -> bool {
        if self.window == Some(window) {
            return false;
        }
        if window.is_inverted() {
            log::warn!(
                "Time window {:02}:{:02}-{:02}:{:02} ends before it starts; grid has no slots",
                window.start_hour,
                window.start_minute,
                window.end_hour,
                window.end_minute
            );
        } else if window.is_past_midnight() {
            log::warn!(
                "Time window ends at {:02}:{:02}, past 24:00; grid has no slots",
                window.end_hour,
                window.end_minute
            );
        }
        self.labels = generate_slots(
            window.start_hour,
            window.start_minute,
            window.end_hour,
            window.end_minute,
        );
        self.window = Some(window);
        true
    }

    /// Linear lookup of a label's position.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
