// Day module
// Day-of-week columns and their horizontal ordering

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of day columns in the grid.
pub const DAYS_PER_WEEK: usize = 7;

/// A day column, identified by its index 0..=6 in the configured label sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day(u8);

impl Day {
    /// Returns `None` for indices outside the week.
    pub fn new(index: usize) -> Option<Self> {
        (index < DAYS_PER_WEEK).then_some(Self(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All seven columns in label order.
    pub fn all() -> impl Iterator<Item = Day> {
        (0..DAYS_PER_WEEK as u8).map(Day)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which edge day offsets are measured from.
///
/// Right-to-left grids place day 0 against the trailing (right) edge, the way
/// the Hebrew week is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DayDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// The seven day labels, fixed for the lifetime of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLabels {
    labels: Vec<String>,
}

impl DayLabels {
    /// Build from exactly seven labels; anything else is rejected.
    pub fn new<I, S>(labels: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        (labels.len() == DAYS_PER_WEEK).then_some(Self { labels })
    }

    pub fn english() -> Self {
        Self {
            labels: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }

    pub fn hebrew() -> Self {
        Self {
            labels: ["ראשון", "שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn label(&self, day: Day) -> &str {
        &self.labels[day.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, &str)> {
        Day::all().zip(self.labels.iter().map(String::as_str))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

impl Default for DayLabels {
    fn default() -> Self {
        Self::english()
    }
}
