use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use itersolve::{IterativeSolver, LinearSystem, Seidel, SimpleIteration, SolverOptions};
use nalgebra::{DMatrix, DVector};

/// Tridiagonal system with a dominant diagonal of 4.
fn tridiagonal(n: usize) -> LinearSystem {
    let a = DMatrix::from_fn(n, n, |i, j| match i.abs_diff(j) {
        0 => 4.0,
        1 => -1.0,
        _ => 0.0,
    });
    let b = DVector::from_fn(n, |i, _| (i % 7) as f64 - 3.0);
    LinearSystem::new(a, b).expect("tridiagonal system is well-formed")
}

fn bench_update_rules(c: &mut Criterion) {
    let solver = IterativeSolver::new(SolverOptions::with_precision(1e-10));
    let mut group = c.benchmark_group("solve");
    for n in [8usize, 32, 128] {
        let system = tridiagonal(n);
        group.bench_with_input(BenchmarkId::new("simple", n), &system, |bench, system| {
            bench.iter(|| solver.solve(black_box(system), &SimpleIteration))
        });
        group.bench_with_input(BenchmarkId::new("seidel", n), &system, |bench, system| {
            bench.iter(|| solver.solve(black_box(system), &Seidel))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_update_rules);
criterion_main!(benches);
