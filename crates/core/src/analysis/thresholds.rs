//! Heuristic classification thresholds.

use serde::{Deserialize, Serialize};

/// Tunable thresholds for flow classification and storm detection.
///
/// The defaults are the operational values; they are heuristics, not
/// calibrated forecasting parameters, and tests probe the boundary
/// behavior at each one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisThresholds {
    /// Net flux magnitude (m³/s) above which flow is called strong
    /// outflow/inflow rather than balanced.
    pub flux_balance: f64,
    /// Mean divergence magnitude separating expansion/convergence from
    /// stable conditions.
    pub mean_divergence: f64,
    /// Circulation magnitude (m²/s) required before storm detection can
    /// trigger.
    pub storm_circulation: f64,
    /// Peak |curl| indicating significant rotation.
    pub storm_max_curl: f64,
    /// Mean |curl| indicating a consistent rotational pattern.
    pub storm_mean_curl: f64,
    /// Circulation magnitude classified as "Strong".
    pub circulation_strong: f64,
    /// Circulation magnitude classified as "Moderate".
    pub circulation_moderate: f64,
}

impl Default for AnalysisThresholds {
    fn default() -> Self {
        AnalysisThresholds {
            flux_balance: 1000.0,
            mean_divergence: 0.1,
            storm_circulation: 1000.0,
            storm_max_curl: 0.01,
            storm_mean_curl: 0.005,
            circulation_strong: 2000.0,
            circulation_moderate: 500.0,
        }
    }
}
