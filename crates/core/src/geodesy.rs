//! Great-circle geometry shared by the grid builder and both analyzers.
//!
//! Pure functions over degree-valued coordinates; everything metric comes
//! out in meters on a spherical Earth of fixed radius.

use crate::core_types::bounds::GeographicBounds;

/// Physical and model constants for the geographic grid.
pub mod constants {
    /// Mean Earth radius (m).
    pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

    /// Standard sea-level pressure (hPa), the reference for the vertical
    /// velocity estimate.
    pub const STANDARD_PRESSURE_HPA: f64 = 1013.25;

    /// Vertical velocity inferred per hPa of pressure deviation
    /// ((m/s) / hPa). Higher-than-standard pressure implies subsidence.
    pub const PRESSURE_TO_W_FACTOR: f64 = 0.001;

    /// Number of vertical levels the altitude band is notionally divided
    /// into when deriving a vertical grid spacing.
    pub const VERTICAL_LEVELS: f64 = 10.0;
}

/// Great-circle distance between two points (degrees in, meters out).
///
/// Standard haversine formula; identical points yield 0.
#[must_use]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    constants::EARTH_RADIUS_M * c
}

/// Metric spacing (m) of one grid step along the latitude and longitude
/// axes of an R×C grid covering `bounds`.
///
/// The angular extent is divided by the sample count per axis and scaled
/// to meters on the sphere; the longitude step additionally shrinks by
/// cos(mean latitude) for meridian convergence.
#[must_use]
pub fn grid_spacing(bounds: &GeographicBounds, rows: usize, cols: usize) -> (f64, f64) {
    debug_assert!(rows > 0 && cols > 0, "grid spacing needs a non-empty grid");
    let lat_step = bounds.lat_extent().to_radians() / rows as f64;
    let lon_step = bounds.lon_extent().to_radians() / cols as f64;
    let mean_lat = bounds.mean_latitude().to_radians();
    (
        lat_step * constants::EARTH_RADIUS_M,
        lon_step * constants::EARTH_RADIUS_M * mean_lat.cos(),
    )
}

/// Vertical grid spacing (m) of the notional 10-level column spanning the
/// bounds' altitude band.
///
/// The sampled wind field is single-level, so nothing differences over
/// this spacing today; it defines the step a multi-level w field would
/// use.
#[must_use]
pub fn vertical_spacing(bounds: &GeographicBounds) -> f64 {
    bounds.altitude_extent() / constants::VERTICAL_LEVELS
}
