//! Core types shared across the analysis engine.

pub mod bounds;
pub mod field;
pub mod observation;
pub mod spatial;
pub mod vec3;

pub use bounds::GeographicBounds;
pub use field::{LatLon, ScalarField, VectorField};
pub use observation::WeatherObservation;
pub use spatial::SpatialIndex;
pub use vec3::Vec3;
