//! Builds the sampled wind [`VectorField`] from a per-point observation
//! source.
//!
//! Every grid cell gets one observation fetch. Wind speed and direction
//! become Cartesian (u, v) components and the pressure deviation from the
//! standard atmosphere becomes the estimated vertical component. A failed
//! fetch degrades that cell to a zero wind vector instead of aborting the
//! build, so one bad sample never voids a whole analysis.

use rayon::prelude::*;
use tracing::warn;

use crate::core_types::bounds::GeographicBounds;
use crate::core_types::field::{LatLon, VectorField};
use crate::core_types::observation::WeatherObservation;
use crate::core_types::vec3::Vec3;
use crate::error::{Error, FetchError, Result};
use crate::geodesy::constants::{PRESSURE_TO_W_FACTOR, STANDARD_PRESSURE_HPA};

/// Margin (degrees) added around a path's bounding box so the sampled grid
/// has interior coverage even for narrow or near-linear paths.
const PATH_BOUNDS_MARGIN_DEG: f64 = 0.1;

/// Source of raw weather observations, one per grid point.
///
/// Implementations are typically remote and may be slow or flaky; the
/// builder issues fetches in parallel across grid rows and tolerates
/// per-point failures. Retry and timeout policy belongs to the
/// implementation, not to the builder.
pub trait ObservationProvider: Sync {
    /// Fetch the current observation at a coordinate (degrees).
    ///
    /// # Errors
    /// Returns [`FetchError`] when no observation can be produced for the
    /// point; the builder records a zero wind vector for that cell.
    fn fetch(&self, lat: f64, lon: f64) -> std::result::Result<WeatherObservation, FetchError>;
}

/// Convert an observation into a wind vector.
///
/// The direction angle is applied as u = speed·cos(θ), v = speed·sin(θ).
/// The vertical component is inferred from the pressure deviation: air
/// over a higher-than-standard reading subsides, so
/// w = -(p - 1013.25)·0.001.
fn wind_vector(observation: &WeatherObservation) -> Vec3 {
    let direction = observation.wind_direction_deg.to_radians();
    Vec3::new(
        observation.wind_speed_m_s * direction.cos(),
        observation.wind_speed_m_s * direction.sin(),
        -(observation.pressure_hpa - STANDARD_PRESSURE_HPA) * PRESSURE_TO_W_FACTOR,
    )
}

/// `count` evenly spaced samples over `[start, end]`, both ends included.
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    debug_assert!(count >= 2, "linspace needs both endpoints");
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| step.mul_add(i as f64, start)).collect()
}

/// Sample a `resolution` × `resolution` wind field over `bounds`.
///
/// Latitude samples run south → north (row axis), longitude samples run
/// west → east (column axis), endpoints included. Rows are fetched in
/// parallel; a failing fetch zeroes that cell's wind while its coordinate
/// is still recorded.
///
/// # Errors
/// Returns [`Error::InvalidBounds`] for degenerate bounds and
/// [`Error::InvalidResolution`] when `resolution < 2` (a single-sample
/// axis cannot carry a finite difference).
pub fn build_grid<P>(
    provider: &P,
    bounds: &GeographicBounds,
    resolution: usize,
) -> Result<VectorField>
where
    P: ObservationProvider + ?Sized,
{
    bounds.validate()?;
    if resolution < 2 {
        return Err(Error::InvalidResolution(resolution));
    }

    let rows = resolution;
    let cols = resolution;
    let lats = linspace(bounds.south, bounds.north, rows);
    let lons = linspace(bounds.west, bounds.east, cols);

    let mut wind = vec![Vec3::zeros(); rows * cols];
    let mut coordinates = vec![LatLon::new(0.0, 0.0); rows * cols];

    wind.par_chunks_mut(cols)
        .zip(coordinates.par_chunks_mut(cols))
        .enumerate()
        .for_each(|(row, (wind_row, coordinate_row))| {
            let lat = lats[row];
            for (col, &lon) in lons.iter().enumerate() {
                coordinate_row[col] = LatLon::new(lat, lon);
                match provider.fetch(lat, lon) {
                    Ok(observation) => wind_row[col] = wind_vector(&observation),
                    Err(error) => {
                        // Cell stays a zero vector; the coordinate is kept.
                        warn!("zeroing cell at ({lat:.3}, {lon:.3}): {error}");
                    }
                }
            }
        });

    VectorField::new(wind, coordinates, rows, cols)
}

/// Sample a wind field covering a path's neighborhood.
///
/// The grid spans the path's bounding box padded by 0.1° per side, so even
/// a degenerate or near-linear path gets interior samples. Returns the
/// padded bounds alongside the field for callers that also want a
/// divergence analysis of the same region.
///
/// # Errors
/// Returns [`Error::EmptyPath`] for a path with no points, plus everything
/// [`build_grid`] rejects.
pub fn build_grid_for_path<P>(
    provider: &P,
    path: &[LatLon],
    resolution: usize,
) -> Result<(VectorField, GeographicBounds)>
where
    P: ObservationProvider + ?Sized,
{
    let bounds = path_bounds(path)?;
    let field = build_grid(provider, &bounds, resolution)?;
    Ok((field, bounds))
}

/// Padded bounding box of a path (degrees).
///
/// # Errors
/// Returns [`Error::EmptyPath`] when the path has no points.
pub fn path_bounds(path: &[LatLon]) -> Result<GeographicBounds> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }
    let mut south = f64::INFINITY;
    let mut north = f64::NEG_INFINITY;
    let mut west = f64::INFINITY;
    let mut east = f64::NEG_INFINITY;
    for point in path {
        south = south.min(point.lat);
        north = north.max(point.lat);
        west = west.min(point.lon);
        east = east.max(point.lon);
    }
    GeographicBounds::new(
        north + PATH_BOUNDS_MARGIN_DEG,
        south - PATH_BOUNDS_MARGIN_DEG,
        east + PATH_BOUNDS_MARGIN_DEG,
        west - PATH_BOUNDS_MARGIN_DEG,
    )
}
