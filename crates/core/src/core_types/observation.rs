//! Raw per-point weather observation.

use serde::{Deserialize, Serialize};

/// A single surface observation as returned by an observation provider.
///
/// Only `pressure_hpa`, `wind_speed_m_s`, and `wind_direction_deg` feed the
/// vector field; temperature and humidity ride along for consumers that
/// display the raw conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature (°C).
    pub temperature_c: f64,
    /// Relative humidity (%).
    pub humidity_pct: f64,
    /// Station pressure (hPa); 1013.25 is the standard atmosphere.
    pub pressure_hpa: f64,
    /// Wind speed (m/s).
    pub wind_speed_m_s: f64,
    /// Wind direction (degrees).
    pub wind_direction_deg: f64,
}
