use thiserror::Error;

/// Unified error type for `itersolve` operations.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Raised when provided arrays or matrices have incompatible dimensions.
    #[error("dimension mismatch in {context}: expected {expected} but found {found}")]
    DimensionMismatch {
        /// Human-readable context describing the operation.
        context: &'static str,
        /// The required dimension, usually implied by the coefficient matrix.
        expected: usize,
        /// The dimension that was actually supplied.
        found: usize,
    },

    /// Raised when the coefficient matrix is not square.
    #[error("coefficient matrix must be square, found {rows}x{cols}")]
    NonSquareMatrix { rows: usize, cols: usize },

    /// Raised when the system contains NaN or infinite entries.
    #[error("encountered a non-finite value in {context}")]
    NonFiniteInput { context: &'static str },

    /// Raised when the requested precision is not a positive finite number.
    #[error("precision must be positive and finite, found {precision}")]
    InvalidPrecision { precision: f64 },

    /// Raised when the iteration cap is zero.
    #[error("iteration cap must allow at least one iteration")]
    InvalidIterationCap,

    /// Raised when the transform cannot find a non-zero diagonal pivot.
    #[error("matrix in {context} is singular")]
    SingularMatrix { context: &'static str },
}

impl SolverError {
    /// Shape error for `A`/`b` validation, fixed-point forms and update-rule output.
    pub fn dimension_mismatch(context: &'static str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            context,
            expected,
            found,
        }
    }

    /// Helper to raise when the transform runs out of usable pivots.
    pub fn singular(context: &'static str) -> Self {
        Self::SingularMatrix { context }
    }

    /// Helper for rejecting NaN or infinite input data.
    pub fn non_finite(context: &'static str) -> Self {
        Self::NonFiniteInput { context }
    }

    /// Returns `true` for precondition violations detected before any iteration runs.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. }
                | Self::NonSquareMatrix { .. }
                | Self::NonFiniteInput { .. }
                | Self::InvalidPrecision { .. }
                | Self::InvalidIterationCap
        )
    }
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, SolverError>;
