//! Configuration for the fixed-point solve.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolverError};

/// Default hard cap on loop rounds.
pub const MAX_ITERATIONS: usize = 1_000_000;

/// Stopping parameters for [`IterativeSolver`](crate::IterativeSolver).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Target upper bound on the error of the returned iterate.
    pub precision: f64,
    /// Maximum number of loop rounds before giving up on the bound.
    pub max_iterations: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            precision: 1e-6,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl SolverOptions {
    /// Options with the given precision and the default iteration cap.
    pub fn with_precision(precision: f64) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Override the iteration cap while preserving other settings.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks the preconditions of a solve.
    pub fn validate(&self) -> Result<()> {
        if !(self.precision.is_finite() && self.precision > 0.0) {
            return Err(SolverError::InvalidPrecision {
                precision: self.precision,
            });
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidIterationCap);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_global_cap() {
        let options = SolverOptions::default();
        assert_eq!(options.max_iterations, MAX_ITERATIONS);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_precision() {
        for precision in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            let result = SolverOptions::with_precision(precision).validate();
            assert!(matches!(result, Err(SolverError::InvalidPrecision { .. })));
        }
    }

    #[test]
    fn rejects_zero_cap() {
        let result = SolverOptions::default().with_max_iterations(0).validate();
        assert!(matches!(result, Err(SolverError::InvalidIterationCap)));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options: SolverOptions = serde_json::from_str(r#"{ "precision": 1e-9 }"#).unwrap();
        assert_eq!(options.precision, 1e-9);
        assert_eq!(options.max_iterations, MAX_ITERATIONS);
    }
}
