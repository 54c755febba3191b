//! Error bounds for contraction-certified iterations.

/// Upper bound on the distance between the current iterate and the true solution.
///
/// `alpha` is the certified contraction coefficient, `first_distance` the step
/// length measured before the loop, `last_distance` the most recent step length
/// and `iterations` the number of completed loop rounds. The result is the
/// tighter of the a-priori bound `alpha^k / (1 - alpha) * d0` and the
/// a-posteriori bound `alpha / (1 - alpha) * d_last`.
pub fn estimate_error(
    alpha: f64,
    first_distance: f64,
    last_distance: f64,
    iterations: usize,
) -> f64 {
    debug_assert!(
        (0.0..1.0).contains(&alpha),
        "error bounds require a certified coefficient, got {alpha}"
    );
    let scale = 1.0 / (1.0 - alpha);
    let exponent = i32::try_from(iterations).unwrap_or(i32::MAX);
    let a_priori = alpha.powi(exponent) * scale * first_distance;
    let a_posteriori = alpha * scale * last_distance;
    a_priori.min(a_posteriori)
}
