//! Vector type alias for per-cell wind vectors.

use nalgebra::Vector3;

/// Wind vector at a grid sample: `x` = u (eastward), `y` = v (northward),
/// `z` = w (vertical, positive upward), all in m/s.
///
/// A simple alias for `nalgebra::Vector3<f64>`; the analysis is carried out
/// in double precision end to end.
pub type Vec3 = Vector3<f64>;
