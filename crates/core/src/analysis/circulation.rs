//! Circulation analysis around a closed geographic path.
//!
//! Computes the vertical curl component ∂v/∂x - ∂u/∂y over the grid, the
//! line integral ∮ F·dr around the path, a surface-integral estimate of
//! curl over the enclosed region, and a heuristic storm classification.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::gradient::{gradient, Axis};
use crate::analysis::polygon::{close_path, point_in_polygon, polygon_area};
use crate::analysis::thresholds::AnalysisThresholds;
use crate::core_types::field::{LatLon, ScalarField, VectorField};
use crate::core_types::spatial::SpatialIndex;
use crate::geodesy::haversine_distance;
use crate::viz::{circulation_visualization, CirculationVisualization};

/// Result of a circulation analysis, serialization-ready.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CirculationAnalysis {
    /// Line integral of the wind around the path (m²/s); negative values
    /// indicate clockwise circulation.
    pub circulation: f64,
    pub circulation_unit: String,
    /// Mean |curl| over the grid (1/s).
    pub curl_magnitude: f64,
    pub interpretation: String,
    pub storm_detection: bool,
    pub visualization_data: CirculationVisualization,
    pub computation_details: CirculationDetails,
}

/// Summary values accompanying a circulation analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CirculationDetails {
    pub line_integral: f64,
    pub surface_integral: f64,
    pub max_curl: f64,
    pub min_curl: f64,
    /// Number of points in the analyzed (closed) path.
    pub path_length: usize,
    pub theorem_applied: String,
}

/// Vertical curl component of the sampled wind over the grid.
///
/// Metric spacing comes from the first grid steps: `dx` between columns 0
/// and 1 of row 0, `dy` between rows 0 and 1 of column 0. A grid without
/// two samples per axis, or with coincident leading coordinates, has no
/// resolvable rotation and yields an all-zero field.
#[must_use]
pub fn curl_field(field: &VectorField) -> ScalarField {
    let rows = field.rows();
    let cols = field.cols();
    if rows < 2 || cols < 2 {
        return ScalarField::zeros(rows, cols);
    }

    let c00 = field.coordinate(0, 0);
    let c01 = field.coordinate(0, 1);
    let c10 = field.coordinate(1, 0);
    let dx = haversine_distance(c00.lat, c00.lon, c00.lat, c01.lon);
    let dy = haversine_distance(c00.lat, c00.lon, c10.lat, c00.lon);
    if dx == 0.0 || dy == 0.0 {
        return ScalarField::zeros(rows, cols);
    }

    let dv_dx = gradient(&field.v_field(), Axis::Col, dx);
    let du_dy = gradient(&field.u_field(), Axis::Row, dy);
    &dv_dx - &du_dy
}

/// Line integral ∮ F·dr along a closed path (m²/s).
///
/// Each segment samples the wind at the grid point nearest its start,
/// decomposes the segment into signed east-west and north-south metric
/// displacements, and accumulates `u·dx + v·dy`.
fn line_integral(field: &VectorField, closed_path: &[LatLon], index: &SpatialIndex) -> f64 {
    let mut circulation = 0.0;
    for segment in closed_path.windows(2) {
        let (start, end) = (segment[0], segment[1]);
        let (row, col) = index.nearest(start.lat, start.lon);
        let u = field.u(row, col);
        let v = field.v(row, col);

        let mut dx = haversine_distance(start.lat, start.lon, start.lat, end.lon);
        let mut dy = haversine_distance(start.lat, start.lon, end.lat, start.lon);
        if end.lon < start.lon {
            dx = -dx;
        }
        if end.lat < start.lat {
            dy = -dy;
        }

        circulation += u * dx + v * dy;
    }
    circulation
}

/// Surface-integral estimate of curl over the region enclosed by the path.
///
/// Sums curl at every grid cell whose coordinate lies inside the polygon,
/// then scales the sum by the polygon's shoelace area divided by the
/// interior cell count. No interior cells yields 0.
fn surface_integral(field: &VectorField, curl: &ScalarField, polygon: &[LatLon]) -> f64 {
    let mut total_curl = 0.0;
    let mut interior_cells = 0_usize;
    for row in 0..field.rows() {
        for col in 0..field.cols() {
            let c = field.coordinate(row, col);
            if point_in_polygon(c.lat, c.lon, polygon) {
                total_curl += curl.get(row, col);
                interior_cells += 1;
            }
        }
    }
    if interior_cells == 0 {
        return 0.0;
    }
    total_curl * polygon_area(polygon) / interior_cells as f64
}

/// Circulation analyzer configured with classification thresholds.
#[derive(Debug, Clone, Default)]
pub struct CirculationAnalyzer {
    thresholds: AnalysisThresholds,
}

impl CirculationAnalyzer {
    #[must_use]
    pub fn new(thresholds: AnalysisThresholds) -> Self {
        CirculationAnalyzer { thresholds }
    }

    /// Run the full circulation analysis of a field around a path.
    ///
    /// Paths with fewer than three points have no enclosed area and yield
    /// zero circulation; such paths are analyzed as given, while longer
    /// open paths are closed by appending their first point.
    #[must_use]
    pub fn analyze(&self, field: &VectorField, path: &[LatLon]) -> CirculationAnalysis {
        let closed_path = if path.len() < 3 {
            path.to_vec()
        } else {
            close_path(path)
        };

        let curl = curl_field(field);
        let circulation = if path.len() < 3 {
            0.0
        } else {
            let index = SpatialIndex::new(field);
            line_integral(field, &closed_path, &index)
        };
        let surface = surface_integral(field, &curl, &closed_path);
        let storm_detection = self.detect_storm(&curl, circulation);
        let interpretation = self.interpret(circulation, curl.mean());
        debug!(
            circulation,
            storm_detection, "circulation analysis complete"
        );

        CirculationAnalysis {
            circulation,
            circulation_unit: "m²/s".to_string(),
            curl_magnitude: curl.mean_abs(),
            interpretation,
            storm_detection,
            visualization_data: circulation_visualization(field, &curl, &closed_path, circulation),
            computation_details: CirculationDetails {
                line_integral: circulation,
                surface_integral: surface,
                max_curl: curl.max(),
                min_curl: curl.min(),
                path_length: closed_path.len(),
                theorem_applied: "Stokes' Theorem: ∮ F·dr = ∬ (∇ × F)·n dS".to_string(),
            },
        }
    }

    /// Storm heuristic: significant circulation is required, together with
    /// either a strong curl peak or a consistent rotational pattern.
    fn detect_storm(&self, curl: &ScalarField, circulation: f64) -> bool {
        let t = &self.thresholds;
        let high_circulation = circulation.abs() > t.storm_circulation;
        let high_curl = curl.max_abs() > t.storm_max_curl;
        let consistent_rotation = curl.mean_abs() > t.storm_mean_curl;
        high_circulation && (high_curl || consistent_rotation)
    }

    /// Strength and sense of the circulation plus a rotational-activity
    /// sentence derived from the signed mean curl's magnitude.
    fn interpret(&self, circulation: f64, mean_curl: f64) -> String {
        let t = &self.thresholds;
        let strength = if circulation.abs() > t.circulation_strong {
            "Strong"
        } else if circulation.abs() > t.circulation_moderate {
            "Moderate"
        } else {
            "Weak"
        };
        let direction = if circulation < 0.0 {
            "clockwise"
        } else {
            "counterclockwise"
        };

        let rotation = if mean_curl.abs() > t.storm_max_curl {
            "High rotational activity detected - possible storm formation"
        } else if mean_curl.abs() > t.storm_mean_curl {
            "Moderate rotational patterns present"
        } else {
            "Low rotational activity - stable conditions"
        };

        format!("{strength} {direction} circulation detected. {rotation}")
    }
}
