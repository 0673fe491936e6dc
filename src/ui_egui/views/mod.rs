mod palette;
mod utils;
pub mod week_grid_view;

pub use utils::{parse_color, readable_text_color};
pub use week_grid_view::WeekGridView;
