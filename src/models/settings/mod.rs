// Settings module
// User-tunable grid configuration, persisted as TOML

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::day::{DayDirection, DayLabels, DAYS_PER_WEEK};
use super::layout::{
    LayoutMetrics, DEFAULT_HEADER_HEIGHT, DEFAULT_ROW_HEIGHT, DEFAULT_TIME_AXIS_WIDTH,
};
use super::window::{TimeWindow, SLOT_MINUTES};

pub const DEFAULT_EVENT_COLOR: &str = "#add8e6";

pub const DEFAULT_PALETTE: [&str; 7] = [
    "#add8e6", "#ffcccc", "#ccffcc", "#ffffcc", "#e6ccff", "#ffccff", "#ccffff",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("start hour {0} is outside 0-23")]
    StartHour(u32),
    #[error("end hour {0} is outside 0-24")]
    EndHour(u32),
    #[error("minute {0} is not a multiple of 15 below 60")]
    Minute(u32),
    #[error("end time {0:02}:{1:02} is past 24:00")]
    EndPastMidnight(u32, u32),
    #[error("expected 7 day labels, found {0}")]
    DayLabelCount(usize),
    #[error("color palette must not be empty")]
    EmptyPalette,
    #[error("color '{0}' must be in hex format (#RRGGBB or #RGB)")]
    Color(String),
    #[error("layout value '{0}' must be positive")]
    Layout(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
    pub day_labels: Vec<String>,
    pub direction: DayDirection,
    pub palette: Vec<String>,
    pub default_color: String,
    pub row_height: f32,
    pub header_height: f32,
    pub time_axis_width: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        let window = TimeWindow::default();
        Self {
            start_hour: window.start_hour,
            start_minute: window.start_minute,
            end_hour: window.end_hour,
            end_minute: window.end_minute,
            day_labels: DayLabels::english().as_slice().to_vec(),
            direction: DayDirection::LeftToRight,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            default_color: DEFAULT_EVENT_COLOR.to_string(),
            row_height: DEFAULT_ROW_HEIGHT,
            header_height: DEFAULT_HEADER_HEIGHT,
            time_axis_width: DEFAULT_TIME_AXIS_WIDTH,
        }
    }
}

impl GridSettings {
    /// Right-to-left Hebrew week.
    pub fn hebrew() -> Self {
        Self {
            day_labels: DayLabels::hebrew().as_slice().to_vec(),
            direction: DayDirection::RightToLeft,
            ..Self::default()
        }
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(
            self.start_hour,
            self.start_minute,
            self.end_hour,
            self.end_minute,
        )
    }

    pub fn day_labels(&self) -> DayLabels {
        DayLabels::new(self.day_labels.iter().cloned()).unwrap_or_default()
    }

    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics::new(self.row_height, self.header_height, self.time_axis_width)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.start_hour > 23 {
            return Err(SettingsError::StartHour(self.start_hour));
        }
        if self.end_hour > 24 {
            return Err(SettingsError::EndHour(self.end_hour));
        }
        for minute in [self.start_minute, self.end_minute] {
            if minute >= 60 || minute % SLOT_MINUTES != 0 {
                return Err(SettingsError::Minute(minute));
            }
        }
        if self.window().is_past_midnight() {
            return Err(SettingsError::EndPastMidnight(self.end_hour, self.end_minute));
        }
        if self.day_labels.len() != DAYS_PER_WEEK {
            return Err(SettingsError::DayLabelCount(self.day_labels.len()));
        }
        if self.palette.is_empty() {
            return Err(SettingsError::EmptyPalette);
        }
        for color in self.palette.iter().chain(std::iter::once(&self.default_color)) {
            if !is_hex_color(color) {
                return Err(SettingsError::Color(color.clone()));
            }
        }
        for (name, value) in [
            ("row_height", self.row_height),
            ("header_height", self.header_height),
            ("time_axis_width", self.time_axis_width),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(SettingsError::Layout(name));
            }
        }
        Ok(())
    }
}

fn is_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
