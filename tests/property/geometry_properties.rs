use proptest::prelude::*;
use week_grid::models::day::{Day, DayDirection};
use week_grid::models::layout::LayoutMetrics;
use week_grid::models::selection::SelectionRange;
use week_grid::services::geometry::{map_range, slot_at_offset};

fn metrics(width: f32) -> LayoutMetrics {
    let mut metrics = LayoutMetrics::default();
    metrics.measure(Some(width));
    metrics
}

proptest! {
    /// Property: height grows with the number of slots, one row per slot
    #[test]
    fn prop_height_is_monotonic(start in 0..90usize, len in 1..6usize, day in 0..7usize) {
        let metrics = metrics(760.0);
        let day = Day::new(day).unwrap();
        let shorter = SelectionRange::new(day, start, start + len - 1);
        let longer = SelectionRange::new(day, start, start + len);

        let short_height = map_range(&shorter, &metrics, DayDirection::LeftToRight, "#add8e6").height;
        let long_height = map_range(&longer, &metrics, DayDirection::LeftToRight, "#add8e6").height;
        prop_assert!(long_height >= short_height);
        prop_assert_eq!(short_height, len as f32 * metrics.row_height);
    }

    /// Property: the vertical inverse recovers the start slot of any mapped range
    #[test]
    fn prop_top_maps_back_to_start_slot(start in 0..96usize, extra in 0..4usize) {
        let metrics = metrics(1060.0);
        let range = SelectionRange::new(Day::new(0).unwrap(), start, start + extra);
        let geometry = map_range(&range, &metrics, DayDirection::RightToLeft, "#add8e6");
        prop_assert_eq!(slot_at_offset(geometry.top + 0.5, &metrics, 100), Some(start));
    }

    /// Property: doubling the day area doubles the column width
    #[test]
    fn prop_column_width_scales_with_container(days_area in 70u32..4000) {
        let axis = LayoutMetrics::default().time_axis_width;
        let narrow = metrics(axis + days_area as f32);
        let wide = metrics(axis + 2.0 * days_area as f32);
        prop_assert!((wide.column_width - 2.0 * narrow.column_width).abs() <= wide.column_width * 1e-5);
    }
}
