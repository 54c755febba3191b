//! Contraction coefficients of the iteration matrix and the vector distances they pair with.
//!
//! Each [`Metric`] couples one coefficient with the one distance under which that
//! coefficient bounds the contraction factor of `x ↦ B·x + c`. The coupling is
//! fixed; mixing a coefficient with another metric's distance voids the error bound.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// Maximum over rows of the absolute row sum (the matrix infinity-norm).
pub fn row_sum_coefficient(b: &DMatrix<f64>) -> f64 {
    b.row_iter()
        .map(|row| row.iter().map(|value| value.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Maximum over columns of the absolute column sum (the matrix 1-norm).
pub fn column_sum_coefficient(b: &DMatrix<f64>) -> f64 {
    b.column_iter()
        .map(|column| column.iter().map(|value| value.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Sum of squared entries. Deliberately not square-rooted.
pub fn euclidean_coefficient(b: &DMatrix<f64>) -> f64 {
    b.iter().map(|value| value * value).sum()
}

/// Largest absolute component-wise difference.
pub fn max_distance(x: &DVector<f64>, y: &DVector<f64>) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    x.iter()
        .zip(y.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

/// Sum of absolute component-wise differences.
pub fn sum_distance(x: &DVector<f64>, y: &DVector<f64>) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    x.iter().zip(y.iter()).map(|(a, b)| (a - b).abs()).sum()
}

/// Square root of the sum of squared component-wise differences.
pub fn euclidean_distance(x: &DVector<f64>, y: &DVector<f64>) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    x.iter()
        .zip(y.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

/// A coefficient/distance pair usable as a contraction certificate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Row-sum coefficient with the maximum distance.
    RowSum,
    /// Column-sum coefficient with the sum distance.
    ColumnSum,
    /// Squared-entry coefficient with the Euclidean distance.
    Euclidean,
}

impl Metric {
    /// Order in which certificates are attempted.
    pub const PRIORITY: [Metric; 3] = [Metric::RowSum, Metric::ColumnSum, Metric::Euclidean];

    /// Contraction coefficient of `b` under this metric.
    pub fn coefficient(self, b: &DMatrix<f64>) -> f64 {
        match self {
            Metric::RowSum => row_sum_coefficient(b),
            Metric::ColumnSum => column_sum_coefficient(b),
            Metric::Euclidean => euclidean_coefficient(b),
        }
    }

    /// Distance between `x` and `y` under this metric.
    pub fn distance(self, x: &DVector<f64>, y: &DVector<f64>) -> f64 {
        match self {
            Metric::RowSum => max_distance(x, y),
            Metric::ColumnSum => sum_distance(x, y),
            Metric::Euclidean => euclidean_distance(x, y),
        }
    }
}
