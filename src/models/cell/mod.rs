// Cell module
// The (day, time slot) intersection a pointer can address

use super::day::Day;

/// One addressable grid cell. Transient: it only lives during interaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub day: Day,
    pub slot: String,
}

impl Cell {
    pub fn new(day: Day, slot: impl Into<String>) -> Self {
        Self {
            day,
            slot: slot.into(),
        }
    }

    /// Key used for highlighted-cell membership, `day-HH:MM`.
    pub fn key(&self) -> String {
        cell_key(self.day, &self.slot)
    }
}

pub fn cell_key(day: Day, slot: &str) -> String {
    format!("{}-{}", day, slot)
}
