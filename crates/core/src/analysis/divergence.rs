//! Divergence analysis of the sampled wind field.
//!
//! Computes the discrete divergence ∇·F = ∂u/∂x + ∂v/∂y + ∂w/∂z over the
//! geographic lattice, estimates the net outward flux through the bounding
//! volume's faces, and classifies the result into a flow interpretation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::gradient::{gradient, Axis};
use crate::analysis::thresholds::AnalysisThresholds;
use crate::core_types::bounds::GeographicBounds;
use crate::core_types::field::{ScalarField, VectorField};
use crate::geodesy;
use crate::viz::{divergence_visualization, DivergenceVisualization};

/// Scale factor turning the degrees² bounding-box extent into the rough
/// surface-area proxy the net-flux estimate is reported against.
const FLUX_AREA_SCALE: f64 = 1e6;

/// Result of a divergence analysis, serialization-ready.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivergenceAnalysis {
    /// Net outward flux through the bounding volume (m³/s).
    pub net_flux: f64,
    pub flux_unit: String,
    pub interpretation: String,
    pub visualization_data: DivergenceVisualization,
    pub computation_details: DivergenceDetails,
}

/// Summary statistics accompanying a divergence analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivergenceDetails {
    pub mean_divergence: f64,
    pub max_divergence: f64,
    pub min_divergence: f64,
    /// Grid shape as (rows, cols).
    pub grid_resolution: (usize, usize),
    pub theorem_applied: String,
}

/// Discrete divergence field of the sampled wind.
///
/// Horizontal spacings come from the bounds' angular extent
/// ([`geodesy::grid_spacing`]). The ∂w/∂z term stays zero: the sampled
/// field is single-level, so w has no vertical neighbors to difference
/// over ([`geodesy::vertical_spacing`] defines the step a multi-level
/// field would use).
#[must_use]
pub fn divergence_field(field: &VectorField, bounds: &GeographicBounds) -> ScalarField {
    let (lat_spacing_m, lon_spacing_m) = geodesy::grid_spacing(bounds, field.rows(), field.cols());
    let du_dx = gradient(&field.u_field(), Axis::Col, lon_spacing_m);
    let dv_dy = gradient(&field.v_field(), Axis::Row, lat_spacing_m);
    &du_dx + &dv_dy
}

/// Net outward flux through the six faces of the bounding volume (m³/s).
///
/// u flows through the west (negated) and east columns, v through the
/// south (negated) and north rows; w sums over the whole grid for the top
/// face and its negation for the bottom face, so those two contributions
/// cancel exactly. The face total is scaled by the degrees² extent of the
/// bounds times [`FLUX_AREA_SCALE`].
fn net_flux(field: &VectorField, bounds: &GeographicBounds) -> f64 {
    let rows = field.rows();
    let cols = field.cols();

    let mut west_flux = 0.0;
    let mut east_flux = 0.0;
    for row in 0..rows {
        west_flux -= field.u(row, 0);
        east_flux += field.u(row, cols - 1);
    }

    let mut south_flux = 0.0;
    let mut north_flux = 0.0;
    for col in 0..cols {
        south_flux -= field.v(0, col);
        north_flux += field.v(rows - 1, col);
    }

    let mut top_flux = 0.0;
    for row in 0..rows {
        for col in 0..cols {
            top_flux += field.w(row, col);
        }
    }
    let bottom_flux = -top_flux;

    let total = top_flux + bottom_flux + west_flux + east_flux + south_flux + north_flux;
    let area_scale = bounds.lat_extent() * bounds.lon_extent() * FLUX_AREA_SCALE;
    total * area_scale
}

/// Divergence analyzer configured with classification thresholds.
#[derive(Debug, Clone, Default)]
pub struct DivergenceAnalyzer {
    thresholds: AnalysisThresholds,
}

impl DivergenceAnalyzer {
    #[must_use]
    pub fn new(thresholds: AnalysisThresholds) -> Self {
        DivergenceAnalyzer { thresholds }
    }

    /// Run the full divergence analysis of a field over its bounds.
    #[must_use]
    pub fn analyze(&self, field: &VectorField, bounds: &GeographicBounds) -> DivergenceAnalysis {
        let divergence = divergence_field(field, bounds);
        let flux = net_flux(field, bounds);
        let interpretation = self.interpret(flux, divergence.mean());
        debug!(
            net_flux = flux,
            mean_divergence = divergence.mean(),
            "divergence analysis complete"
        );

        DivergenceAnalysis {
            net_flux: flux,
            flux_unit: "m³/s".to_string(),
            interpretation,
            visualization_data: divergence_visualization(field, &divergence),
            computation_details: DivergenceDetails {
                mean_divergence: divergence.mean(),
                max_divergence: divergence.max(),
                min_divergence: divergence.min(),
                grid_resolution: (field.rows(), field.cols()),
                theorem_applied: "Gauss Divergence Theorem: ∮∮ F·n dS = ∭ ∇·F dV".to_string(),
            },
        }
    }

    /// Two independent heuristics joined into one sentence: the flux
    /// magnitude bucket and the mean-divergence bucket.
    fn interpret(&self, net_flux: f64, mean_divergence: f64) -> String {
        let t = &self.thresholds;
        let flux_interpretation = if net_flux > t.flux_balance {
            "Strong outflow detected - air mass is expanding/rising"
        } else if net_flux < -t.flux_balance {
            "Strong inflow detected - air mass is converging/sinking"
        } else {
            "Balanced flow - minimal net air movement"
        };

        let divergence_interpretation = if mean_divergence > t.mean_divergence {
            "Positive divergence indicates air expansion (low pressure formation)"
        } else if mean_divergence < -t.mean_divergence {
            "Negative divergence indicates air convergence (high pressure formation)"
        } else {
            "Low divergence indicates stable atmospheric conditions"
        };

        format!("{flux_interpretation}. {divergence_interpretation}")
    }
}
