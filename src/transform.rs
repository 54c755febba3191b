//! Rewrites `A·x = b` into the fixed-point form `x = B·x + c`.

use nalgebra::{DMatrix, DVector};

use crate::error::{Result, SolverError};
use crate::system::{FixedPointForm, LinearSystem};

/// Produces a fixed-point form whose fixed points solve the original system.
pub trait Transform {
    fn transform(&self, system: &LinearSystem) -> Result<FixedPointForm>;
}

impl<T: Transform + ?Sized> Transform for &T {
    fn transform(&self, system: &LinearSystem) -> Result<FixedPointForm> {
        (**self).transform(system)
    }
}

/// Jacobi-style diagonal normalization.
///
/// Each row `i` is solved for `x_i`, so `B_ij = -a_ij / a_ii` for `j != i`,
/// `B_ii = 0` and `c_i = b_i / a_ii`. Zero diagonal entries are repaired by
/// reordering the rows so the diagonal is zero-free; row reordering does not
/// change the solution set. Such an ordering exists for every non-singular
/// matrix, so failing to find one means the matrix is singular.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiagonalTransform;

impl Transform for DiagonalTransform {
    fn transform(&self, system: &LinearSystem) -> Result<FixedPointForm> {
        let n = system.dimension();
        let (a, rhs) = if (0..n).all(|i| system.matrix()[(i, i)] != 0.0) {
            (system.matrix().clone(), system.rhs().clone())
        } else {
            let order = zero_free_row_order(system.matrix())
                .ok_or_else(|| SolverError::singular("diagonal pivot"))?;
            log::debug!("reordering rows as {order:?} to obtain a non-zero diagonal");
            let source = system.matrix();
            let a = DMatrix::from_fn(n, n, |i, j| source[(order[i], j)]);
            let rhs = DVector::from_fn(n, |i, _| system.rhs()[order[i]]);
            (a, rhs)
        };

        let mut iteration_matrix = DMatrix::<f64>::zeros(n, n);
        let mut offset = DVector::<f64>::zeros(n);
        for i in 0..n {
            let diagonal = a[(i, i)];
            for j in 0..n {
                if j != i {
                    iteration_matrix[(i, j)] = -a[(i, j)] / diagonal;
                }
            }
            offset[i] = rhs[i] / diagonal;
        }

        FixedPointForm::new(iteration_matrix, offset)
    }
}

/// Row order whose `i`-th row has a non-zero entry in column `i`.
///
/// Computed as a maximum bipartite matching between columns and rows. Returns
/// `None` when every permutation of the rows leaves a zero on the diagonal.
fn zero_free_row_order(a: &DMatrix<f64>) -> Option<Vec<usize>> {
    let n = a.nrows();
    let mut column_of_row: Vec<Option<usize>> = vec![None; n];
    for column in 0..n {
        let mut visited = vec![false; n];
        if !assign_column(a, column, &mut visited, &mut column_of_row) {
            return None;
        }
    }

    let mut order = vec![0usize; n];
    for (row, column) in column_of_row.into_iter().enumerate() {
        order[column?] = row;
    }
    Some(order)
}

/// Augmenting-path step: assigns `column` a row, displacing earlier assignments if needed.
fn assign_column(
    a: &DMatrix<f64>,
    column: usize,
    visited: &mut [bool],
    column_of_row: &mut [Option<usize>],
) -> bool {
    // Prefer keeping the row in place, then the largest magnitude.
    let mut candidates: Vec<usize> = (0..a.nrows())
        .filter(|&row| a[(row, column)] != 0.0)
        .collect();
    candidates.sort_by(|&p, &q| {
        (p != column)
            .cmp(&(q != column))
            .then(a[(q, column)].abs().total_cmp(&a[(p, column)].abs()))
    });

    for row in candidates {
        if visited[row] {
            continue;
        }
        visited[row] = true;
        let free = match column_of_row[row] {
            None => true,
            Some(previous) => assign_column(a, previous, visited, column_of_row),
        };
        if free {
            column_of_row[row] = Some(column);
            return true;
        }
    }
    false
}
