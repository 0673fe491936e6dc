// Module exports for models

pub mod cell;
pub mod day;
pub mod event;
pub mod layout;
pub mod selection;
pub mod settings;
pub mod window;
