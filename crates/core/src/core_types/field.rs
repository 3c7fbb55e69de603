//! Dense grid storage for the sampled wind field and derived scalar fields.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use crate::core_types::vec3::Vec3;
use crate::error::{Error, Result};

/// A (latitude, longitude) sample location in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        LatLon { lat, lon }
    }
}

/// Sampled wind field on an R×C geographic lattice.
///
/// Wind vectors and sample coordinates are stored flattened in row-major
/// order (`index = row * cols + col`); row 0 is the southernmost latitude,
/// column 0 the westernmost longitude. Built once per analysis request and
/// immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorField {
    wind: Vec<Vec3>,
    coordinates: Vec<LatLon>,
    rows: usize,
    cols: usize,
}

impl VectorField {
    /// Assemble a field from flattened row-major component buffers.
    ///
    /// # Errors
    /// Returns [`Error::ShapeMismatch`] when the grid is empty or the
    /// buffer lengths disagree with `rows * cols`. That indicates a defect
    /// in grid construction, not a degenerate input.
    pub fn new(wind: Vec<Vec3>, coordinates: Vec<LatLon>, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::ShapeMismatch(format!(
                "grid must have at least one sample per axis, got {rows}x{cols}"
            )));
        }
        let cells = rows * cols;
        if wind.len() != cells {
            return Err(Error::ShapeMismatch(format!(
                "wind buffer holds {} cells, grid shape is {rows}x{cols}",
                wind.len()
            )));
        }
        if coordinates.len() != cells {
            return Err(Error::ShapeMismatch(format!(
                "coordinate buffer holds {} cells, grid shape is {rows}x{cols}",
                coordinates.len()
            )));
        }
        Ok(VectorField {
            wind,
            coordinates,
            rows,
            cols,
        })
    }

    /// Flattened row-major index of a grid cell.
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Latitude sample count.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Longitude sample count.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Wind vector at a grid cell.
    #[must_use]
    pub fn wind_at(&self, row: usize, col: usize) -> Vec3 {
        self.wind[self.index(row, col)]
    }

    /// Sample location of a grid cell.
    #[must_use]
    pub fn coordinate(&self, row: usize, col: usize) -> LatLon {
        self.coordinates[self.index(row, col)]
    }

    /// Eastward wind component (m/s) at a grid cell.
    #[must_use]
    pub fn u(&self, row: usize, col: usize) -> f64 {
        self.wind[self.index(row, col)].x
    }

    /// Northward wind component (m/s) at a grid cell.
    #[must_use]
    pub fn v(&self, row: usize, col: usize) -> f64 {
        self.wind[self.index(row, col)].y
    }

    /// Vertical wind component (m/s) at a grid cell.
    #[must_use]
    pub fn w(&self, row: usize, col: usize) -> f64 {
        self.wind[self.index(row, col)].z
    }

    /// The u component extracted as a dense scalar field.
    #[must_use]
    pub fn u_field(&self) -> ScalarField {
        ScalarField::from_parts(self.rows, self.cols, self.wind.iter().map(|w| w.x).collect())
    }

    /// The v component extracted as a dense scalar field.
    #[must_use]
    pub fn v_field(&self) -> ScalarField {
        ScalarField::from_parts(self.rows, self.cols, self.wind.iter().map(|w| w.y).collect())
    }

    /// The w component extracted as a dense scalar field.
    #[must_use]
    pub fn w_field(&self) -> ScalarField {
        ScalarField::from_parts(self.rows, self.cols, self.wind.iter().map(|w| w.z).collect())
    }

    /// All sample coordinates in row-major order.
    #[must_use]
    pub fn coordinates(&self) -> &[LatLon] {
        &self.coordinates
    }
}

/// Dense R×C scalar field (divergence, curl) in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarField {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl ScalarField {
    /// All-zero field of the given shape.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        ScalarField {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Wrap a flattened row-major buffer.
    #[must_use]
    pub fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "scalar buffer length must match grid shape"
        );
        ScalarField { data, rows, cols }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at a grid cell.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.index(row, col)]
    }

    /// Overwrite the value at a grid cell.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    /// Flattened row-major values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Arithmetic mean over all cells; 0.0 for an empty field.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Mean of absolute values over all cells; 0.0 for an empty field.
    #[must_use]
    pub fn mean_abs(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().copied().map(f64::abs).sum::<f64>() / self.data.len() as f64
    }

    /// Largest value; 0.0 for an empty field.
    #[must_use]
    pub fn max(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest value; 0.0 for an empty field.
    #[must_use]
    pub fn min(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest absolute value; 0.0 for an empty field.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}

impl Add for &ScalarField {
    type Output = ScalarField;

    fn add(self, other: &ScalarField) -> ScalarField {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "scalar field shapes must match"
        );
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a + b)
            .collect();
        ScalarField::from_parts(self.rows, self.cols, data)
    }
}

impl Sub for &ScalarField {
    type Output = ScalarField;

    fn sub(self, other: &ScalarField) -> ScalarField {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "scalar field shapes must match"
        );
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a - b)
            .collect();
        ScalarField::from_parts(self.rows, self.cols, data)
    }
}
