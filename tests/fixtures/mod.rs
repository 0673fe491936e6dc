// Test fixtures - reusable grids, cells and drags
// Provides consistent test data across all test files

#![allow(dead_code)]

use week_grid::models::cell::Cell;
use week_grid::models::day::Day;
use week_grid::models::settings::GridSettings;
use week_grid::services::grid::WeekGrid;

/// Container width giving 100px day columns with the default 60px time axis.
pub const CONTAINER_WIDTH: f32 = 760.0;

/// Settings for a 09:00-12:00 window (13 slots).
pub fn morning_settings() -> GridSettings {
    GridSettings {
        start_hour: 9,
        start_minute: 0,
        end_hour: 12,
        end_minute: 0,
        ..GridSettings::default()
    }
}

/// A mounted grid over the morning window.
pub fn morning_grid() -> WeekGrid {
    let mut grid = WeekGrid::new(&morning_settings());
    grid.measure(Some(CONTAINER_WIDTH));
    grid
}

pub fn cell(day: usize, slot: &str) -> Cell {
    Cell::new(Day::new(day).expect("day index in range"), slot)
}

/// Press on `from`, drag over `to`, release.
pub fn drag(grid: &mut WeekGrid, day: usize, from: &str, to: &str) -> bool {
    grid.pointer_down(cell(day, from));
    grid.drag_over(cell(day, to));
    grid.pointer_up()
}
