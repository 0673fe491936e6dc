// Service module exports

pub mod deferred;
pub mod event;
pub mod geometry;
pub mod grid;
pub mod pending;
pub mod selection;
pub mod settings;
pub mod slots;
