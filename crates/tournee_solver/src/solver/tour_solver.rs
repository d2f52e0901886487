use serde::{Deserialize, Serialize};

use tournee_core::cost_matrix::CostMatrix;
use tournee_core::tour::{SolveResult, Tour};

use crate::error::SolveError;
use crate::solver::solver_params::PartitionParams;
use crate::solver::{branch_and_bound, exhaustive, partitioned};

/// Uniform capability shared by every solving strategy: bind a cost
/// matrix, compute, read back the best tour and distance.
pub trait BestPathSolver {
    /// Hand the solver the matrix for the next compute. Replaces any
    /// previously bound matrix; the result of an earlier compute stays
    /// readable until the next successful one.
    fn bind_cost_matrix(&mut self, matrix: CostMatrix);

    /// Search for the optimal tour. Recomputes from scratch on every call
    /// and overwrites the previous result. Fails with
    /// [`SolveError::MatrixNotBound`] when no matrix has been bound, and
    /// publishes nothing unless the whole search succeeded.
    fn compute_best_path(&mut self) -> Result<(), SolveError>;

    /// Result of the last successful compute, if any.
    fn best_result(&self) -> Option<&SolveResult>;

    fn best_tour(&self) -> Option<&Tour> {
        self.best_result().map(|result| &result.tour)
    }

    fn best_distance(&self) -> Option<f64> {
        self.best_result().map(|result| result.distance)
    }
}

#[derive(Default)]
pub struct ExhaustiveSolver {
    matrix: Option<CostMatrix>,
    best: Option<SolveResult>,
}

impl BestPathSolver for ExhaustiveSolver {
    fn bind_cost_matrix(&mut self, matrix: CostMatrix) {
        self.matrix = Some(matrix);
    }

    fn compute_best_path(&mut self) -> Result<(), SolveError> {
        let matrix = self.matrix.as_ref().ok_or(SolveError::MatrixNotBound)?;
        self.best = Some(exhaustive::search(matrix));
        Ok(())
    }

    fn best_result(&self) -> Option<&SolveResult> {
        self.best.as_ref()
    }
}

#[derive(Default)]
pub struct BranchAndBoundSolver {
    matrix: Option<CostMatrix>,
    best: Option<SolveResult>,
}

impl BestPathSolver for BranchAndBoundSolver {
    fn bind_cost_matrix(&mut self, matrix: CostMatrix) {
        self.matrix = Some(matrix);
    }

    fn compute_best_path(&mut self) -> Result<(), SolveError> {
        let matrix = self.matrix.as_ref().ok_or(SolveError::MatrixNotBound)?;
        self.best = Some(branch_and_bound::search(matrix));
        Ok(())
    }

    fn best_result(&self) -> Option<&SolveResult> {
        self.best.as_ref()
    }
}

#[derive(Default)]
pub struct PartitionedSolver {
    params: PartitionParams,
    matrix: Option<CostMatrix>,
    best: Option<SolveResult>,
}

impl PartitionedSolver {
    pub fn with_params(params: PartitionParams) -> Self {
        PartitionedSolver {
            params,
            matrix: None,
            best: None,
        }
    }
}

impl BestPathSolver for PartitionedSolver {
    fn bind_cost_matrix(&mut self, matrix: CostMatrix) {
        self.matrix = Some(matrix);
    }

    fn compute_best_path(&mut self) -> Result<(), SolveError> {
        let matrix = self.matrix.as_ref().ok_or(SolveError::MatrixNotBound)?;
        self.best = Some(partitioned::search(matrix, &self.params)?);
        Ok(())
    }

    fn best_result(&self) -> Option<&SolveResult> {
        self.best.as_ref()
    }
}

/// Tag used by callers (e.g. the itinerary service) to pick a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverStrategy {
    Exhaustive,
    BranchAndBound,
    Partitioned,
}

pub enum TourSolver {
    Exhaustive(ExhaustiveSolver),
    BranchAndBound(BranchAndBoundSolver),
    Partitioned(PartitionedSolver),
}

impl TourSolver {
    pub fn new(strategy: SolverStrategy) -> Self {
        match strategy {
            SolverStrategy::Exhaustive => TourSolver::Exhaustive(ExhaustiveSolver::default()),
            SolverStrategy::BranchAndBound => {
                TourSolver::BranchAndBound(BranchAndBoundSolver::default())
            }
            SolverStrategy::Partitioned => TourSolver::Partitioned(PartitionedSolver::default()),
        }
    }
}

impl BestPathSolver for TourSolver {
    fn bind_cost_matrix(&mut self, matrix: CostMatrix) {
        match self {
            TourSolver::Exhaustive(solver) => solver.bind_cost_matrix(matrix),
            TourSolver::BranchAndBound(solver) => solver.bind_cost_matrix(matrix),
            TourSolver::Partitioned(solver) => solver.bind_cost_matrix(matrix),
        }
    }

    fn compute_best_path(&mut self) -> Result<(), SolveError> {
        match self {
            TourSolver::Exhaustive(solver) => solver.compute_best_path(),
            TourSolver::BranchAndBound(solver) => solver.compute_best_path(),
            TourSolver::Partitioned(solver) => solver.compute_best_path(),
        }
    }

    fn best_result(&self) -> Option<&SolveResult> {
        match self {
            TourSolver::Exhaustive(solver) => solver.best_result(),
            TourSolver::BranchAndBound(solver) => solver.best_result(),
            TourSolver::Partitioned(solver) => solver.best_result(),
        }
    }
}
