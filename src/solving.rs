//! Error-bounded fixed-point iteration and its diagnostics.

use log::{debug, trace, warn};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::convergence::{select_certificate, ContractionCertificate};
use crate::error::{Result, SolverError};
use crate::estimate::estimate_error;
use crate::options::SolverOptions;
use crate::system::{FixedPointForm, LinearSystem};
use crate::transform::{DiagonalTransform, Transform};
use crate::update::UpdateRule;

/// How the iteration loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The certified error bound dropped to or below the requested precision.
    Converged,
    /// The iteration cap was reached first.
    Capped,
}

/// Diagnostics returned alongside the iterate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveSummary {
    /// Loop rounds performed after the first candidate was computed.
    pub iterations: usize,
    /// Certificate that drove the stopping test, `None` if convergence was not guaranteed.
    pub certificate: Option<ContractionCertificate>,
    /// Final error bound; only available with a certificate.
    pub error_bound: Option<f64>,
    /// Terminal state of the loop.
    pub termination: Termination,
}

impl SolveSummary {
    /// Whether the solve ran under a contraction certificate.
    pub fn is_certified(&self) -> bool {
        self.certificate.is_some()
    }

    /// Whether the returned iterate is guaranteed to be within the requested precision.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Approximate solution and its diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Last iterate produced by the update rule.
    pub x: DVector<f64>,
    /// Certificate, error bound and termination state of the run.
    pub summary: SolveSummary,
}

/// Solver for `A·x = b` that iterates the fixed-point form until a certified
/// error bound meets the configured precision.
#[derive(Clone, Debug)]
pub struct IterativeSolver<T = DiagonalTransform> {
    options: SolverOptions,
    transform: T,
}

impl IterativeSolver<DiagonalTransform> {
    /// Creates a solver using the diagonal transform.
    pub fn new(options: SolverOptions) -> Self {
        Self {
            options,
            transform: DiagonalTransform,
        }
    }
}

impl Default for IterativeSolver<DiagonalTransform> {
    fn default() -> Self {
        Self::new(SolverOptions::default())
    }
}

impl<T: Transform> IterativeSolver<T> {
    /// Replaces the transform while keeping the options.
    pub fn with_transform<U: Transform>(self, transform: U) -> IterativeSolver<U> {
        IterativeSolver {
            options: self.options,
            transform,
        }
    }

    /// Accessor for the solver options.
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Transforms `system` and returns its contraction certificate, if any.
    pub fn certify(&self, system: &LinearSystem) -> Result<Option<ContractionCertificate>> {
        let form = self.transform.transform(system)?;
        Ok(select_certificate(form.iteration_matrix()))
    }

    /// Reports whether convergence of `system` can be certified without iterating.
    pub fn has_convergence_certificate(&self, system: &LinearSystem) -> Result<bool> {
        Ok(self.certify(system)?.is_some())
    }

    /// Iterates `rule` from the zero vector until the error bound meets the precision
    /// or the iteration cap is exhausted.
    pub fn solve<U>(&self, system: &LinearSystem, rule: &U) -> Result<Solution>
    where
        U: UpdateRule + ?Sized,
    {
        self.options.validate()?;
        let form = self.transform.transform(system)?;
        let certificate = select_certificate(form.iteration_matrix());
        match certificate {
            Some(certificate) => debug!(
                "convergence certified by {:?} norm with alpha = {}",
                certificate.metric, certificate.alpha
            ),
            None => warn!(
                "convergence is not guaranteed; iterating until the cap of {} rounds",
                self.options.max_iterations
            ),
        }

        let solution = iterate(&form, certificate, rule, &self.options)?;
        debug!(
            "fixed-point iteration stopped after {} rounds ({:?})",
            solution.summary.iterations, solution.summary.termination
        );
        Ok(solution)
    }
}

fn iterate<U>(
    form: &FixedPointForm,
    certificate: Option<ContractionCertificate>,
    rule: &U,
    options: &SolverOptions,
) -> Result<Solution>
where
    U: UpdateRule + ?Sized,
{
    let b = form.iteration_matrix();
    let c = form.offset();

    let mut x = DVector::zeros(form.dimension());
    let mut y = checked_update(rule, b, &x, c)?;
    let mut iterations = 0usize;

    let Some(certificate) = certificate else {
        while iterations < options.max_iterations {
            x = y;
            y = checked_update(rule, b, &x, c)?;
            iterations += 1;
        }
        return Ok(Solution {
            x: y,
            summary: SolveSummary {
                iterations,
                certificate: None,
                error_bound: None,
                termination: Termination::Capped,
            },
        });
    };

    let first_distance = certificate.distance(&x, &y);
    let mut last_distance = first_distance;
    let mut bound = estimate_error(certificate.alpha, first_distance, last_distance, iterations);

    while bound > options.precision && iterations < options.max_iterations {
        x = y;
        y = checked_update(rule, b, &x, c)?;
        last_distance = certificate.distance(&x, &y);
        iterations += 1;
        bound = estimate_error(certificate.alpha, first_distance, last_distance, iterations);
        trace!("round {iterations}: error bound {bound:e}");
    }

    let termination = if bound <= options.precision {
        Termination::Converged
    } else {
        Termination::Capped
    };

    Ok(Solution {
        x: y,
        summary: SolveSummary {
            iterations,
            certificate: Some(certificate),
            error_bound: Some(bound),
            termination,
        },
    })
}

/// Applies `rule` and rejects iterates whose length differs from the system dimension.
fn checked_update<U>(
    rule: &U,
    b: &DMatrix<f64>,
    x: &DVector<f64>,
    c: &DVector<f64>,
) -> Result<DVector<f64>>
where
    U: UpdateRule + ?Sized,
{
    let y = rule.update(b, x, c);
    if y.len() != x.len() {
        return Err(SolverError::dimension_mismatch(
            "update rule output",
            x.len(),
            y.len(),
        ));
    }
    Ok(y)
}

/// Solves `A·x = b` to within `precision` using `rule` and the diagonal transform.
///
/// Returns the final iterate and the number of loop rounds performed. Use
/// [`IterativeSolver`] to also obtain the certificate and termination state.
pub fn solve<U>(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    precision: f64,
    rule: &U,
) -> Result<(DVector<f64>, usize)>
where
    U: UpdateRule + ?Sized,
{
    let system = LinearSystem::new(a.clone(), b.clone())?;
    let solver = IterativeSolver::new(SolverOptions::with_precision(precision));
    let solution = solver.solve(&system, rule)?;
    Ok((solution.x, solution.summary.iterations))
}
