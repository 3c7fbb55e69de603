//! Geographic bounding box for analysis requests.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default lower altitude of the analysis volume (m).
pub const DEFAULT_ALTITUDE_MIN: f64 = 0.0;

/// Default upper altitude of the analysis volume (m).
pub const DEFAULT_ALTITUDE_MAX: f64 = 1000.0;

/// Rectangular geographic region with an altitude band.
///
/// Latitudes and longitudes are in degrees, altitudes in meters.
/// `north > south` and `east > west` are construction invariants: a
/// degenerate box cannot carry a finite-difference grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
    /// Lower altitude of the analysis volume (m).
    pub altitude_min: f64,
    /// Upper altitude of the analysis volume (m).
    pub altitude_max: f64,
}

impl GeographicBounds {
    /// Create validated bounds with the default 0–1000 m altitude band.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBounds`] when `north <= south`,
    /// `east <= west`, or any coordinate is non-finite.
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Result<Self> {
        let bounds = GeographicBounds {
            north,
            south,
            east,
            west,
            altitude_min: DEFAULT_ALTITUDE_MIN,
            altitude_max: DEFAULT_ALTITUDE_MAX,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Replace the altitude band, keeping the horizontal extent.
    #[must_use]
    pub fn with_altitudes(mut self, altitude_min: f64, altitude_max: f64) -> Self {
        self.altitude_min = altitude_min;
        self.altitude_max = altitude_max;
        self
    }

    /// Check the construction invariants.
    ///
    /// Useful for bounds that arrived through deserialization rather than
    /// [`GeographicBounds::new`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidBounds`] when `north <= south`,
    /// `east <= west`, or any coordinate is non-finite.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.north,
            self.south,
            self.east,
            self.west,
            self.altitude_min,
            self.altitude_max,
        ]
        .iter()
        .copied()
        .all(f64::is_finite);
        if !finite {
            return Err(Error::InvalidBounds("non-finite coordinate".to_string()));
        }
        if self.north <= self.south {
            return Err(Error::InvalidBounds(format!(
                "north ({}) must exceed south ({})",
                self.north, self.south
            )));
        }
        if self.east <= self.west {
            return Err(Error::InvalidBounds(format!(
                "east ({}) must exceed west ({})",
                self.east, self.west
            )));
        }
        Ok(())
    }

    /// Latitude extent in degrees.
    #[must_use]
    pub fn lat_extent(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude extent in degrees.
    #[must_use]
    pub fn lon_extent(&self) -> f64 {
        self.east - self.west
    }

    /// Mid-latitude of the box in degrees.
    #[must_use]
    pub fn mean_latitude(&self) -> f64 {
        (self.north + self.south) / 2.0
    }

    /// Height of the altitude band in meters.
    #[must_use]
    pub fn altitude_extent(&self) -> f64 {
        self.altitude_max - self.altitude_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_bounds_carry_default_altitudes() {
        let bounds = GeographicBounds::new(10.0, 0.0, 20.0, 5.0).unwrap();
        assert_eq!(bounds.altitude_min, DEFAULT_ALTITUDE_MIN);
        assert_eq!(bounds.altitude_max, DEFAULT_ALTITUDE_MAX);
        assert_eq!(bounds.lat_extent(), 10.0);
        assert_eq!(bounds.lon_extent(), 15.0);
        assert_eq!(bounds.mean_latitude(), 5.0);
    }

    #[test]
    fn inverted_latitudes_rejected() {
        assert!(GeographicBounds::new(0.0, 10.0, 20.0, 5.0).is_err());
        assert!(GeographicBounds::new(10.0, 10.0, 20.0, 5.0).is_err());
    }

    #[test]
    fn inverted_longitudes_rejected() {
        assert!(GeographicBounds::new(10.0, 0.0, 5.0, 20.0).is_err());
        assert!(GeographicBounds::new(10.0, 0.0, 5.0, 5.0).is_err());
    }

    #[test]
    fn non_finite_coordinates_rejected() {
        assert!(GeographicBounds::new(f64::NAN, 0.0, 20.0, 5.0).is_err());
        assert!(GeographicBounds::new(f64::INFINITY, 0.0, 20.0, 5.0).is_err());
    }

    #[test]
    fn altitude_band_replaceable() {
        let bounds = GeographicBounds::new(10.0, 0.0, 20.0, 5.0)
            .unwrap()
            .with_altitudes(500.0, 2500.0);
        assert_eq!(bounds.altitude_extent(), 2000.0);
    }
}
