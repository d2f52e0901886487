pub mod branch_and_bound;
pub mod exhaustive;
pub mod partitioned;
pub mod solver_params;
pub mod tour_solver;
