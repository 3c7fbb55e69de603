//! Vector-calculus analyzers over the sampled wind field.

pub mod circulation;
pub mod divergence;
pub mod gradient;
pub mod polygon;
pub mod thresholds;

pub use circulation::{curl_field, CirculationAnalysis, CirculationAnalyzer, CirculationDetails};
pub use divergence::{divergence_field, DivergenceAnalysis, DivergenceAnalyzer, DivergenceDetails};
pub use thresholds::AnalysisThresholds;
