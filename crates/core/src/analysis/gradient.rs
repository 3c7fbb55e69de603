//! Finite-difference gradients over dense scalar grids.
//!
//! Edge-handling convention: forward difference on the first sample of an
//! axis, backward on the last, central everywhere in between. An axis with
//! fewer than two samples has no resolvable gradient and yields zeros.

use crate::core_types::field::ScalarField;

/// Axis along which a gradient is differenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along rows (south → north, the latitude axis).
    Row,
    /// Along columns (west → east, the longitude axis).
    Col,
}

/// Gradient of `field` along `axis` with uniform sample `spacing` (m).
#[must_use]
pub fn gradient(field: &ScalarField, axis: Axis, spacing: f64) -> ScalarField {
    let rows = field.rows();
    let cols = field.cols();
    let mut out = ScalarField::zeros(rows, cols);
    let inv = 1.0 / spacing;
    let inv2 = 1.0 / (2.0 * spacing);

    match axis {
        Axis::Col => {
            if cols < 2 {
                return out;
            }
            for row in 0..rows {
                for col in 0..cols {
                    let d = if col == 0 {
                        (field.get(row, 1) - field.get(row, 0)) * inv
                    } else if col == cols - 1 {
                        (field.get(row, col) - field.get(row, col - 1)) * inv
                    } else {
                        (field.get(row, col + 1) - field.get(row, col - 1)) * inv2
                    };
                    out.set(row, col, d);
                }
            }
        }
        Axis::Row => {
            if rows < 2 {
                return out;
            }
            for row in 0..rows {
                for col in 0..cols {
                    let d = if row == 0 {
                        (field.get(1, col) - field.get(0, col)) * inv
                    } else if row == rows - 1 {
                        (field.get(row, col) - field.get(row - 1, col)) * inv
                    } else {
                        (field.get(row + 1, col) - field.get(row - 1, col)) * inv2
                    };
                    out.set(row, col, d);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(rows: usize, cols: usize, per_row: f64, per_col: f64) -> ScalarField {
        let mut field = ScalarField::zeros(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                field.set(row, col, per_row * row as f64 + per_col * col as f64);
            }
        }
        field
    }

    #[test]
    fn linear_ramp_has_exact_gradient() {
        // One-sided and central differences are both exact on a linear
        // field, so every cell should carry the slope.
        let field = ramp(4, 5, 0.0, 3.0);
        let d = gradient(&field, Axis::Col, 2.0);
        for row in 0..4 {
            for col in 0..5 {
                assert_relative_eq!(d.get(row, col), 1.5, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn row_axis_differences_rows() {
        let field = ramp(5, 3, 4.0, 0.0);
        let d = gradient(&field, Axis::Row, 2.0);
        for row in 0..5 {
            for col in 0..3 {
                assert_relative_eq!(d.get(row, col), 2.0, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn constant_field_has_zero_gradient() {
        let field = ScalarField::from_parts(3, 3, vec![7.0; 9]);
        let d = gradient(&field, Axis::Col, 1.0);
        assert!(d.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn quadratic_interior_uses_central_difference() {
        // f(col) = col²: central difference at col=1 gives (4-0)/2 = 2,
        // the exact derivative there; the forward edge gives 1.
        let mut field = ScalarField::zeros(1, 3);
        for col in 0..3 {
            field.set(0, col, (col * col) as f64);
        }
        let d = gradient(&field, Axis::Col, 1.0);
        assert_relative_eq!(d.get(0, 0), 1.0);
        assert_relative_eq!(d.get(0, 1), 2.0);
        assert_relative_eq!(d.get(0, 2), 3.0);
    }

    #[test]
    fn single_sample_axis_yields_zeros() {
        let field = ScalarField::from_parts(1, 4, vec![1.0, 2.0, 3.0, 4.0]);
        let d = gradient(&field, Axis::Row, 1.0);
        assert!(d.values().iter().all(|&v| v == 0.0));
    }
}
