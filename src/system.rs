//! Validated containers for the original system `A·x = b` and its fixed-point form `x = B·x + c`.

use nalgebra::{DMatrix, DVector};

use crate::error::{Result, SolverError};

/// A dense square linear system `A·x = b` whose shape and entries have been validated.
#[derive(Clone, Debug)]
pub struct LinearSystem {
    a: DMatrix<f64>,
    b: DVector<f64>,
}

impl LinearSystem {
    /// Creates a `LinearSystem` after checking that `a` is square, non-empty,
    /// matches the length of `b`, and contains only finite values.
    pub fn new(a: DMatrix<f64>, b: DVector<f64>) -> Result<Self> {
        if a.nrows() != a.ncols() {
            return Err(SolverError::NonSquareMatrix {
                rows: a.nrows(),
                cols: a.ncols(),
            });
        }
        if a.nrows() == 0 {
            return Err(SolverError::dimension_mismatch("coefficient matrix", 1, 0));
        }
        if b.len() != a.nrows() {
            return Err(SolverError::dimension_mismatch(
                "right-hand side length",
                a.nrows(),
                b.len(),
            ));
        }
        if a.iter().any(|value| !value.is_finite()) {
            return Err(SolverError::non_finite("coefficient matrix"));
        }
        if b.iter().any(|value| !value.is_finite()) {
            return Err(SolverError::non_finite("right-hand side"));
        }

        Ok(Self { a, b })
    }

    /// Builds a system from a row-major slice of coefficients.
    pub fn from_row_slice(n: usize, a: &[f64], b: &[f64]) -> Result<Self> {
        if a.len() != n * n {
            return Err(SolverError::dimension_mismatch(
                "coefficient slice length",
                n * n,
                a.len(),
            ));
        }
        Self::new(DMatrix::from_row_slice(n, n, a), DVector::from_row_slice(b))
    }

    /// Number of unknowns.
    pub fn dimension(&self) -> usize {
        self.b.len()
    }

    /// Returns a read-only view of the coefficient matrix (`A`).
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// Returns a read-only view of the right-hand side (`b`).
    pub fn rhs(&self) -> &DVector<f64> {
        &self.b
    }

    /// Infinity norm of the residual `A·x − b`.
    pub fn residual_norm(&self, x: &DVector<f64>) -> Result<f64> {
        if x.len() != self.dimension() {
            return Err(SolverError::dimension_mismatch(
                "candidate solution length",
                self.dimension(),
                x.len(),
            ));
        }
        let residual = &self.a * x - &self.b;
        Ok(residual.amax())
    }
}

/// Fixed-point representation `x = B·x + c` of a [`LinearSystem`].
#[derive(Clone, Debug)]
pub struct FixedPointForm {
    iteration_matrix: DMatrix<f64>,
    offset: DVector<f64>,
}

impl FixedPointForm {
    /// Wraps an iteration matrix `B` and offset vector `c` after checking their shapes agree.
    pub fn new(iteration_matrix: DMatrix<f64>, offset: DVector<f64>) -> Result<Self> {
        if iteration_matrix.nrows() != iteration_matrix.ncols() {
            return Err(SolverError::NonSquareMatrix {
                rows: iteration_matrix.nrows(),
                cols: iteration_matrix.ncols(),
            });
        }
        if offset.len() != iteration_matrix.nrows() {
            return Err(SolverError::dimension_mismatch(
                "fixed-point offset length",
                iteration_matrix.nrows(),
                offset.len(),
            ));
        }
        Ok(Self {
            iteration_matrix,
            offset,
        })
    }

    /// Number of unknowns.
    pub fn dimension(&self) -> usize {
        self.offset.len()
    }

    /// The iteration matrix `B`.
    pub fn iteration_matrix(&self) -> &DMatrix<f64> {
        &self.iteration_matrix
    }

    /// The offset vector `c`.
    pub fn offset(&self) -> &DVector<f64> {
        &self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_square_matrix() {
        let a = DMatrix::from_row_slice(2, 3, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let b = DVector::from_vec(vec![1.0, 1.0]);
        let result = LinearSystem::new(a, b);
        assert!(matches!(
            result,
            Err(SolverError::NonSquareMatrix { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn rejects_mismatched_rhs() {
        let result = LinearSystem::from_row_slice(2, &[4.0, 1.0, 1.0, 3.0], &[1.0]);
        assert!(matches!(
            result,
            Err(SolverError::DimensionMismatch {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_and_non_finite_systems() {
        let empty = LinearSystem::new(DMatrix::zeros(0, 0), DVector::zeros(0));
        assert!(matches!(empty, Err(SolverError::DimensionMismatch { .. })));

        let nan = LinearSystem::from_row_slice(1, &[f64::NAN], &[1.0]);
        assert!(matches!(nan, Err(SolverError::NonFiniteInput { .. })));
    }

    #[test]
    fn residual_vanishes_at_exact_solution() {
        let system = LinearSystem::from_row_slice(2, &[4.0, 1.0, 1.0, 3.0], &[1.0, 2.0]).unwrap();
        let x = DVector::from_vec(vec![1.0 / 11.0, 7.0 / 11.0]);
        assert!(system.residual_norm(&x).unwrap() < 1e-12);
    }
}
