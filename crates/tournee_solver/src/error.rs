use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("no cost matrix is bound to the solver")]
    MatrixNotBound,
    #[error("failed to build the worker thread pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
    #[error("worker for chunk {0} produced no local minimum")]
    EmptyChunk(usize),
}
