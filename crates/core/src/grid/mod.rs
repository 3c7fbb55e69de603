//! Vector field construction from per-point observations.

pub mod builder;

pub use builder::{build_grid, build_grid_for_path, path_bounds, ObservationProvider};
