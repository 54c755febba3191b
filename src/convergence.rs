//! Selection of a contraction certificate for the fixed-point map.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::norms::Metric;
use crate::options::SolverOptions;
use crate::solving::IterativeSolver;
use crate::system::LinearSystem;

/// Proof that `x ↦ B·x + c` contracts with factor `alpha` under `metric`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractionCertificate {
    /// Contraction coefficient, always in `[0, 1)`.
    pub alpha: f64,
    /// Metric whose coefficient produced `alpha`; distances must be measured with it.
    pub metric: Metric,
}

impl ContractionCertificate {
    /// Distance between two iterates under the certifying metric.
    pub fn distance(&self, x: &DVector<f64>, y: &DVector<f64>) -> f64 {
        self.metric.distance(x, y)
    }
}

/// Returns the first metric in [`Metric::PRIORITY`] whose coefficient is strictly below one.
///
/// `None` only means none of the supported sufficient conditions hold; the
/// iteration may still converge.
pub fn select_certificate(b: &DMatrix<f64>) -> Option<ContractionCertificate> {
    Metric::PRIORITY.into_iter().find_map(|metric| {
        let alpha = metric.coefficient(b);
        if alpha < 1.0 {
            Some(ContractionCertificate { alpha, metric })
        } else {
            None
        }
    })
}

/// Transforms `A·x = b` with the [`DiagonalTransform`](crate::DiagonalTransform)
/// and returns its certificate, if any.
pub fn certify(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<Option<ContractionCertificate>> {
    let system = LinearSystem::new(a.clone(), b.clone())?;
    IterativeSolver::new(SolverOptions::default()).certify(&system)
}

/// Reports whether any supported norm certifies convergence for `A·x = b`.
///
/// No iteration is performed.
pub fn has_convergence_certificate(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<bool> {
    Ok(certify(a, b)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn row_sum_wins_when_below_one() {
        // Row sums 0.9, column sums up to 1.8, squared sum 1.62.
        let b = DMatrix::from_row_slice(2, 2, &[0.0, 0.9, 0.0, 0.9]);
        let certificate = select_certificate(&b).unwrap();
        assert_eq!(certificate.metric, Metric::RowSum);
        assert_relative_eq!(certificate.alpha, 0.9, epsilon = 1e-12);
    }

    #[test]
    fn column_sum_used_when_rows_fail() {
        let b = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 0.9, 0.9]);
        let certificate = select_certificate(&b).unwrap();
        assert_eq!(certificate.metric, Metric::ColumnSum);
        assert_relative_eq!(certificate.alpha, 0.9, epsilon = 1e-12);
    }

    #[test]
    fn euclidean_used_as_last_resort() {
        let b = DMatrix::from_row_slice(2, 2, &[0.6, 0.45, 0.45, 0.1]);
        let certificate = select_certificate(&b).unwrap();
        assert_eq!(certificate.metric, Metric::Euclidean);
        assert_relative_eq!(certificate.alpha, 0.775, epsilon = 1e-12);
    }

    #[test]
    fn coefficient_of_exactly_one_is_not_a_certificate() {
        let b = DMatrix::from_row_slice(2, 2, &[0.5, 0.5, 0.5, 0.5]);
        assert!(select_certificate(&b).is_none());
    }

    #[test]
    fn none_when_every_coefficient_reaches_one() {
        let b = DMatrix::from_row_slice(2, 2, &[0.0, -2.0, -3.0, 0.0]);
        assert!(select_certificate(&b).is_none());
    }

    #[test]
    fn diagonally_dominant_system_is_certified() {
        let a = DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 1.0, 3.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);
        let certificate = certify(&a, &b).unwrap().unwrap();
        assert_eq!(certificate.metric, Metric::RowSum);
        assert_relative_eq!(certificate.alpha, 1.0 / 3.0, epsilon = 1e-12);
        assert!(has_convergence_certificate(&a, &b).unwrap());
    }

    #[test]
    fn system_without_dominance_is_not_certified() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 1.0]);
        assert!(!has_convergence_certificate(&a, &b).unwrap());
    }

    #[test]
    fn invalid_input_is_reported_before_certification() {
        let a = DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 1.0, 3.0]);
        let b = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let err = has_convergence_certificate(&a, &b).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
