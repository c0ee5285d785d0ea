//! Dense matrix used at the bulk-exchange boundary.
//!
//! The set-based structures in [`graph`](super::graph) and
//! [`neighborhood`](super::neighborhood) are authoritative for mutation;
//! `DenseMatrix` is the derived snapshot form produced on demand for loading
//! from and handing back to external numeric code. Matrix row/column index
//! `i` (0-based) maps to actor `i + 1` (1-based) everywhere.

use std::fmt;

use crate::engine::errors::ModelError;

/// An owned, row-major `f64` matrix.
///
/// Adjacency and neighborhood snapshots are 0/1 valued N×N matrices; the
/// overlap mirror is a 2×K coordinate list. Nothing here enforces either
/// shape beyond the dimensions the constructor was given.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Creates a zero-filled matrix with the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a matrix from row-major data.
    ///
    /// Fails with [`ModelError::DimensionMismatch`] when `data` does not hold
    /// exactly `rows * cols` entries.
    pub fn from_rows(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, ModelError> {
        if data.len() != rows * cols {
            return Err(ModelError::DimensionMismatch {
                expected: rows * cols,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Reads the entry at `(row, col)`.
    ///
    /// Callers index within the dimensions the matrix was built with; this is
    /// a plain slice access, not a checked boundary.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// Writes the entry at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// Iterates one row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

/// Human-readable dump, one row per line. Not a stable machine format.
impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:8.4}", self.get(r, c))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_requested_shape() {
        let m = DenseMatrix::zeros(3, 4);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        assert_eq!(m.get(2, 3), 0.0);
    }

    #[test]
    fn from_rows_rejects_wrong_length() {
        let err = DenseMatrix::from_rows(2, 2, vec![1.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::DimensionMismatch {
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut m = DenseMatrix::zeros(2, 2);
        m.set(0, 1, 1.0);
        m.set(1, 0, 2.5);
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(1, 0), 2.5);
        assert_eq!(m.row(1), &[2.5, 0.0]);
    }
}
