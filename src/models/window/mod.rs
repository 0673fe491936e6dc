// Time window module
// The configurable [start, end] span the grid covers

/// Minutes per grid slot.
pub const SLOT_MINUTES: u32 = 15;

/// Minutes in a day; an end of 24:00 equals this value.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Inclusive time window, e.g. 08:30 → 24:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
}

impl TimeWindow {
    pub const fn new(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Self {
        Self {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        }
    }

    /// The whole day at 15-minute resolution, 00:00 → 23:45.
    pub const fn full_day() -> Self {
        Self::new(0, 0, 23, 45)
    }

    pub fn start_minutes(&self) -> u32 {
        clock_minutes(self.start_hour, self.start_minute)
    }

    pub fn end_minutes(&self) -> u32 {
        clock_minutes(self.end_hour, self.end_minute)
    }

    /// `floor((end - start) / 15) + 1`, or zero for an inverted window or one
    /// that ends past 24:00.
    pub fn slot_count(&self) -> usize {
        let (start, end) = (self.start_minutes(), self.end_minutes());
        if end < start || end > MINUTES_PER_DAY {
            return 0;
        }
        ((end - start) / SLOT_MINUTES) as usize + 1
    }

    /// Ends after 24:00; such a window covers no slots.
    pub fn is_past_midnight(&self) -> bool {
        self.end_minutes() > MINUTES_PER_DAY
    }

    pub fn is_inverted(&self) -> bool {
        self.end_minutes() < self.start_minutes()
    }
}

fn clock_minutes(hour: u32, minute: u32) -> u32 {
    hour.saturating_mul(60).saturating_add(minute)
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::new(8, 30, 24, 0)
    }
}
