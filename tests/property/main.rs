// Property-based tests for slot generation, range normalization and geometry
// Each module checks invariants over random windows, drags and layouts

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod geometry_properties;
mod selection_properties;
mod slot_properties;
