use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSlice;
use tracing::{debug, instrument};

use tournee_core::cost_matrix::CostMatrix;
use tournee_core::tour::{SolveResult, Tour, closed_tour_cost};

use crate::error::SolveError;
use crate::permutation::permutations;
use crate::solver::solver_params::PartitionParams;

/// Exhaustive search with the permutation list split into contiguous
/// chunks, one worker per chunk. Every worker owns its chunk and reduces
/// it to a local minimum; nothing mutable is shared, so there is no
/// locking. The local minima are then reduced on the calling thread in
/// chunk order, which makes the outcome identical to the sequential
/// exhaustive search no matter in which order the workers finish.
///
/// Any worker failure aborts the whole solve: a chunk that went missing
/// would make the minimum unsound, so no partial result is ever returned.
#[instrument(skip_all, level = "debug")]
pub(crate) fn search(
    matrix: &CostMatrix,
    params: &PartitionParams,
) -> Result<SolveResult, SolveError> {
    let clients = matrix.clients();
    if clients.is_empty() {
        return Ok(SolveResult::default());
    }

    let all_tours = permutations(&clients);
    debug!(
        permutations = all_tours.len(),
        chunks = all_tours.len().div_ceil(params.chunk_size),
        threads = params.threads.number_of_threads(),
        "dispatching chunk workers"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(params.threads.number_of_threads())
        .build()?;

    let local_minima = pool.install(|| {
        all_tours
            .par_chunks(params.chunk_size)
            .enumerate()
            .map(|(chunk_idx, chunk)| best_in_chunk(matrix, chunk_idx, chunk))
            .collect::<Result<Vec<_>, SolveError>>()
    })?;

    // `collect` keeps chunk order, so this reduction is deterministic
    // regardless of worker scheduling.
    let mut best = SolveResult {
        tour: Tour::new(),
        distance: f64::INFINITY,
    };
    for local in local_minima {
        if local.distance < best.distance {
            best = local;
        }
    }
    Ok(best)
}

fn best_in_chunk(
    matrix: &CostMatrix,
    chunk_idx: usize,
    chunk: &[Tour],
) -> Result<SolveResult, SolveError> {
    let mut best: Option<SolveResult> = None;
    for tour in chunk {
        let distance = closed_tour_cost(matrix, tour);
        if best.as_ref().is_none_or(|current| distance < current.distance) {
            best = Some(SolveResult {
                tour: tour.clone(),
                distance,
            });
        }
    }
    best.ok_or(SolveError::EmptyChunk(chunk_idx))
}
