// Selection module
// A normalized single-day run of slots

use super::day::Day;

/// Normalized selection: one day, `start <= end`, both slot indices inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    pub day: Day,
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Builds a range from two slot indices in either order.
    pub fn new(day: Day, a: usize, b: usize) -> Self {
        Self {
            day,
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Number of slots covered, always at least one.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, day: Day, slot_index: usize) -> bool {
        self.day == day && (self.start..=self.end).contains(&slot_index)
    }

    pub fn slot_indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}
