//! FluxCast Analysis Core
//!
//! Derives physically-interpretable structure from a gridded atmospheric
//! wind field by applying two classical vector-calculus theorems as
//! discrete numerical estimators:
//!
//! - **Divergence (Gauss)**: the discrete divergence field plus a
//!   closed-surface flux estimate over the bounding volume, classified
//!   into net outflow/inflow and pressure-tendency interpretations.
//! - **Circulation (Stokes)**: the vertical curl component plus a line
//!   integral around an arbitrary closed path, classified into rotational
//!   strength and storm likelihood.
//!
//! The grid itself is sampled from per-point weather observations supplied
//! by an [`ObservationProvider`]; a failed fetch degrades that cell to a
//! zero wind vector rather than aborting the build. The analyzers are
//! pure and synchronous: given a [`VectorField`] and a bounds or path,
//! each produces a self-contained, serialization-ready result.

pub mod analysis;
pub mod core_types;
pub mod error;
pub mod geodesy;
pub mod grid;
pub mod viz;

// Re-export the request-level API
pub use analysis::{
    AnalysisThresholds, CirculationAnalysis, CirculationAnalyzer, DivergenceAnalysis,
    DivergenceAnalyzer,
};
pub use core_types::{
    GeographicBounds, LatLon, ScalarField, SpatialIndex, Vec3, VectorField, WeatherObservation,
};
pub use error::{Error, FetchError, Result};
pub use grid::{build_grid, build_grid_for_path, ObservationProvider};
