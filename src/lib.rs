//! Fixed-point iterative solving of dense linear systems `A·x = b` with
//! contraction certificates and a-priori error bounds.
//!
//! Instead of eliminating, the system is rewritten as `x = B·x + c` and
//! iterated from the zero vector. Before the first round the crate tries to
//! prove that the map contracts under one of three norms:
//!
//! - the row-sum norm with the maximum distance,
//! - the column-sum norm with the sum distance,
//! - the squared-entry sum with the Euclidean distance.
//!
//! With such a certificate every round yields an upper bound on the distance to
//! the true solution, and the loop stops as soon as that bound drops below the
//! requested precision. Without one the iteration still runs, bounded only by
//! [`MAX_ITERATIONS`], and a `log` warning is emitted.
//!
//! # Quick start
//!
//! ```
//! use itersolve::{has_convergence_certificate, solve, SimpleIteration};
//! use nalgebra::{DMatrix, DVector};
//!
//! let a = DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 1.0, 3.0]);
//! let b = DVector::from_vec(vec![1.0, 2.0]);
//!
//! assert!(has_convergence_certificate(&a, &b).unwrap());
//! let (x, iterations) = solve(&a, &b, 1e-6, &SimpleIteration).unwrap();
//! assert!((x[0] - 1.0 / 11.0).abs() < 1e-6);
//! assert!(iterations < itersolve::MAX_ITERATIONS);
//! ```
//!
//! [`IterativeSolver`] exposes the full diagnostics (certificate, final error
//! bound and termination state) and accepts custom [`Transform`]s.

pub mod convergence;
pub mod error;
pub mod estimate;
pub mod norms;
pub mod options;
pub mod solving;
pub mod system;
pub mod transform;
pub mod update;

pub use convergence::{
    certify, has_convergence_certificate, select_certificate, ContractionCertificate,
};
pub use error::{Result, SolverError};
pub use estimate::estimate_error;
pub use norms::Metric;
pub use options::{SolverOptions, MAX_ITERATIONS};
pub use solving::{solve, IterativeSolver, Solution, SolveSummary, Termination};
pub use system::{FixedPointForm, LinearSystem};
pub use transform::{DiagonalTransform, Transform};
pub use update::{Seidel, SimpleIteration, UpdateRule};
