mod app;
pub mod hit_map;
pub mod views;

pub use app::WeekGridApp;
