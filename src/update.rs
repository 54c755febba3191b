//! Update rules that advance one iterate of `x = B·x + c`.

use nalgebra::{DMatrix, DVector};

/// One refinement step `y = update(B, x, c)`.
///
/// Implementations must be deterministic; the solver relies on identical
/// inputs producing identical iterates.
pub trait UpdateRule {
    fn update(&self, b: &DMatrix<f64>, x: &DVector<f64>, c: &DVector<f64>) -> DVector<f64>;
}

impl<F> UpdateRule for F
where
    F: Fn(&DMatrix<f64>, &DVector<f64>, &DVector<f64>) -> DVector<f64>,
{
    fn update(&self, b: &DMatrix<f64>, x: &DVector<f64>, c: &DVector<f64>) -> DVector<f64> {
        self(b, x, c)
    }
}

/// Simple (Jacobi) iteration: every component is computed from the previous iterate.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleIteration;

impl UpdateRule for SimpleIteration {
    fn update(&self, b: &DMatrix<f64>, x: &DVector<f64>, c: &DVector<f64>) -> DVector<f64> {
        b * x + c
    }
}

/// Seidel iteration: component `i` already uses components `0..i` of the new iterate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Seidel;

impl UpdateRule for Seidel {
    fn update(&self, b: &DMatrix<f64>, x: &DVector<f64>, c: &DVector<f64>) -> DVector<f64> {
        let n = x.len();
        let mut y = x.clone();
        for i in 0..n {
            let mut value = c[i];
            for j in 0..n {
                value += b[(i, j)] * y[j];
            }
            y[i] = value;
        }
        y
    }
}
