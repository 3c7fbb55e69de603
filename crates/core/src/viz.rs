//! Flattened per-cell payloads handed to the rendering layer.
//!
//! Both analyzers emit the same shapes: point-indexed records in row-major
//! grid order plus a color-scale bracket. Field names and colormap ids are
//! part of the wire format consumed by existing renderers.

use serde::{Deserialize, Serialize};

use crate::core_types::field::{LatLon, ScalarField, VectorField};

/// Diverging colormap for the divergence field (red positive, blue
/// negative).
pub const DIVERGENCE_COLORMAP: &str = "RdBu_r";

/// Diverging colormap for the curl field.
pub const CURL_COLORMAP: &str = "RdYlBu_r";

/// A bare coordinate record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePoint {
    pub lat: f64,
    pub lon: f64,
}

impl From<LatLon> for CoordinatePoint {
    fn from(c: LatLon) -> Self {
        CoordinatePoint { lat: c.lat, lon: c.lon }
    }
}

/// Wind arrow for vector-field rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorArrow {
    pub lat: f64,
    pub lon: f64,
    pub u: f64,
    pub v: f64,
    pub w: f64,
    /// Horizontal wind speed √(u² + v²) (m/s).
    pub magnitude: f64,
}

/// Rotation arrow for curl rendering; only cells with nonzero horizontal
/// wind get one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationArrow {
    pub lat: f64,
    pub lon: f64,
    pub u: f64,
    pub v: f64,
    pub magnitude: f64,
    /// Local vertical curl (1/s).
    pub rotation: f64,
}

/// Value range plus the colormap a renderer should apply over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
    pub colormap: String,
}

/// Per-cell curl sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurlPoint {
    pub lat: f64,
    pub lon: f64,
    pub curl: f64,
}

/// The divergence field flattened into parallel coordinate/value lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivergenceFieldData {
    pub coordinates: Vec<CoordinatePoint>,
    pub values: Vec<f64>,
}

/// Rendering payload of a divergence analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivergenceVisualization {
    pub divergence_field: DivergenceFieldData,
    pub vector_arrows: Vec<VectorArrow>,
    pub color_scale: ColorScale,
}

/// Rendering payload of a circulation analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirculationVisualization {
    pub curl_field: Vec<CurlPoint>,
    pub rotation_arrows: Vec<RotationArrow>,
    pub path: Vec<CoordinatePoint>,
    pub circulation_value: f64,
    pub color_scale: ColorScale,
}

/// Flatten a divergence field and its wind grid for rendering.
#[must_use]
pub fn divergence_visualization(
    field: &VectorField,
    divergence: &ScalarField,
) -> DivergenceVisualization {
    let cells = field.rows() * field.cols();
    let mut coordinates = Vec::with_capacity(cells);
    let mut values = Vec::with_capacity(cells);
    let mut vector_arrows = Vec::with_capacity(cells);

    for row in 0..field.rows() {
        for col in 0..field.cols() {
            let c = field.coordinate(row, col);
            coordinates.push(CoordinatePoint::from(c));
            values.push(divergence.get(row, col));

            let (u, v, w) = (field.u(row, col), field.v(row, col), field.w(row, col));
            vector_arrows.push(VectorArrow {
                lat: c.lat,
                lon: c.lon,
                u,
                v,
                w,
                magnitude: u.hypot(v),
            });
        }
    }

    DivergenceVisualization {
        divergence_field: DivergenceFieldData {
            coordinates,
            values,
        },
        vector_arrows,
        color_scale: ColorScale {
            min: divergence.min(),
            max: divergence.max(),
            colormap: DIVERGENCE_COLORMAP.to_string(),
        },
    }
}

/// Flatten a curl field, its rotation arrows, and the analyzed path for
/// rendering.
#[must_use]
pub fn circulation_visualization(
    field: &VectorField,
    curl: &ScalarField,
    path: &[LatLon],
    circulation: f64,
) -> CirculationVisualization {
    let cells = field.rows() * field.cols();
    let mut curl_field = Vec::with_capacity(cells);
    let mut rotation_arrows = Vec::new();

    for row in 0..field.rows() {
        for col in 0..field.cols() {
            let c = field.coordinate(row, col);
            curl_field.push(CurlPoint {
                lat: c.lat,
                lon: c.lon,
                curl: curl.get(row, col),
            });

            let (u, v) = (field.u(row, col), field.v(row, col));
            let magnitude = u.hypot(v);
            if magnitude > 0.0 {
                rotation_arrows.push(RotationArrow {
                    lat: c.lat,
                    lon: c.lon,
                    u,
                    v,
                    magnitude,
                    rotation: curl.get(row, col),
                });
            }
        }
    }

    CirculationVisualization {
        curl_field,
        rotation_arrows,
        path: path.iter().copied().map(CoordinatePoint::from).collect(),
        circulation_value: circulation,
        color_scale: ColorScale {
            min: curl.min(),
            max: curl.max(),
            colormap: CURL_COLORMAP.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::vec3::Vec3;

    fn two_cell_field() -> VectorField {
        let wind = vec![Vec3::new(3.0, 4.0, 1.0), Vec3::zeros()];
        let coordinates = vec![LatLon::new(0.0, 0.0), LatLon::new(0.0, 1.0)];
        VectorField::new(wind, coordinates, 1, 2).unwrap()
    }

    #[test]
    fn arrows_carry_horizontal_magnitude() {
        let field = two_cell_field();
        let divergence = ScalarField::from_parts(1, 2, vec![0.5, -0.5]);
        let payload = divergence_visualization(&field, &divergence);

        assert_eq!(payload.vector_arrows.len(), 2);
        assert_eq!(payload.vector_arrows[0].magnitude, 5.0);
        assert_eq!(payload.divergence_field.values, vec![0.5, -0.5]);
        assert_eq!(payload.color_scale.min, -0.5);
        assert_eq!(payload.color_scale.max, 0.5);
        assert_eq!(payload.color_scale.colormap, DIVERGENCE_COLORMAP);
    }

    #[test]
    fn rotation_arrows_skip_calm_cells() {
        let field = two_cell_field();
        let curl = ScalarField::from_parts(1, 2, vec![0.1, 0.2]);
        let payload = circulation_visualization(&field, &curl, &[], 42.0);

        // The second cell has zero horizontal wind and gets no arrow.
        assert_eq!(payload.curl_field.len(), 2);
        assert_eq!(payload.rotation_arrows.len(), 1);
        assert_eq!(payload.rotation_arrows[0].rotation, 0.1);
        assert_eq!(payload.circulation_value, 42.0);
        assert_eq!(payload.color_scale.colormap, CURL_COLORMAP);
    }

    #[test]
    fn path_is_echoed_in_order() {
        let field = two_cell_field();
        let curl = ScalarField::zeros(1, 2);
        let path = [LatLon::new(1.0, 2.0), LatLon::new(3.0, 4.0)];
        let payload = circulation_visualization(&field, &curl, &path, 0.0);
        assert_eq!(payload.path.len(), 2);
        assert_eq!(payload.path[1].lat, 3.0);
        assert_eq!(payload.path[1].lon, 4.0);
    }
}
