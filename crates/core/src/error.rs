//! Error types for grid construction and analysis.

use thiserror::Error;

/// Crate-level result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by grid construction and field assembly.
///
/// Degenerate geometry (grids too small for a gradient axis, short paths,
/// zero-area polygons) is not an error: the analyzers recover locally with
/// zero-valued quantities. These variants cover invalid configuration and
/// internal shape defects, which must reach the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Bounds violate the north > south / east > west invariant or carry
    /// non-finite coordinates.
    #[error("invalid geographic bounds: {0}")]
    InvalidBounds(String),

    /// A finite-difference grid needs at least two samples per axis.
    #[error("invalid grid resolution {0}: at least 2 samples per axis required")]
    InvalidResolution(usize),

    /// A bounding box cannot be derived from an empty path.
    #[error("path contains no points to derive a bounding box from")]
    EmptyPath,

    /// Component buffers disagree on the grid shape. Indicates a defect in
    /// grid construction, never a meaningful physical degenerate case.
    #[error("vector field shape mismatch: {0}")]
    ShapeMismatch(String),
}

/// Failure reported by an observation provider for a single grid point.
///
/// The builder absorbs these per cell (the cell's wind degrades to a zero
/// vector); they never abort a grid build.
#[derive(Debug, Clone, Error)]
#[error("observation fetch failed: {0}")]
pub struct FetchError(String);

impl FetchError {
    /// Wrap a provider-side failure description.
    pub fn new(reason: impl Into<String>) -> Self {
        FetchError(reason.into())
    }
}
