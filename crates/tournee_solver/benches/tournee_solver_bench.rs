use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use tournee_core::cost_matrix::CostMatrix;
use tournee_solver::solver::tour_solver::{BestPathSolver, SolverStrategy, TourSolver};

/// Zero diagonal, uniform costs in 0..100 elsewhere. Fixed seed so every
/// strategy sees the same instance and runs are comparable.
fn random_matrix(size: usize, seed: u64) -> CostMatrix {
    let mut rng = SmallRng::seed_from_u64(seed);
    let rows = (0..size)
        .map(|i| {
            (0..size)
                .map(|j| {
                    if i == j {
                        0.0
                    } else {
                        rng.random_range(0.0..100.0)
                    }
                })
                .collect()
        })
        .collect();

    CostMatrix::from_rows(rows).unwrap()
}

fn strategy_benchmark(c: &mut Criterion) {
    let strategies = [
        ("exhaustive", SolverStrategy::Exhaustive),
        ("branch_and_bound", SolverStrategy::BranchAndBound),
        ("partitioned", SolverStrategy::Partitioned),
    ];

    for size in [3usize, 5, 8] {
        let mut group = c.benchmark_group(format!("solve_{size}x{size}"));

        for (name, strategy) in strategies {
            let mut solver = TourSolver::new(strategy);
            solver.bind_cost_matrix(random_matrix(size, 42));

            group.bench_function(name, |b| {
                b.iter(|| {
                    solver.compute_best_path().unwrap();
                    black_box(solver.best_distance())
                })
            });
        }

        group.finish();
    }
}

criterion_group!(benches, strategy_benchmark);
criterion_main!(benches);
