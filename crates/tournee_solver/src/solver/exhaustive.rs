use tracing::{debug, instrument};

use tournee_core::cost_matrix::CostMatrix;
use tournee_core::tour::{SolveResult, Tour, closed_tour_cost};

use crate::permutation::permutations;

/// Evaluate every ordering of the clients and keep the cheapest closed
/// tour. On an exact tie the ordering enumerated first wins.
///
/// O((N-1)!) in time and in live permutations; only suited to small
/// instances (up to roughly a dozen clients).
#[instrument(skip_all, level = "debug")]
pub(crate) fn search(matrix: &CostMatrix) -> SolveResult {
    let clients = matrix.clients();
    if clients.is_empty() {
        return SolveResult::default();
    }

    let all_tours = permutations(&clients);
    debug!(
        clients = clients.len(),
        permutations = all_tours.len(),
        "evaluating every tour"
    );

    let mut best_distance = f64::INFINITY;
    let mut best_tour = Tour::new();
    for tour in all_tours {
        let distance = closed_tour_cost(matrix, &tour);
        if distance < best_distance {
            best_distance = distance;
            best_tour = tour;
        }
    }

    SolveResult {
        tour: best_tour,
        distance: best_distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{matrix_3x3, matrix_5x5, tour};

    #[test]
    fn finds_the_optimal_tour() {
        let result = search(&matrix_3x3());
        assert_eq!(result.tour, tour(&[2, 1]));
        assert_eq!(result.distance, 3.0);
    }

    #[test]
    fn first_enumerated_optimum_wins_ties() {
        // Fully uniform costs: every tour is optimal, so the solver must
        // report the first ordering of the enumeration, 1 -> 2 -> 3.
        let matrix = crate::test_utils::matrix(&[
            &[0.0, 1.0, 1.0, 1.0],
            &[1.0, 0.0, 1.0, 1.0],
            &[1.0, 1.0, 0.0, 1.0],
            &[1.0, 1.0, 1.0, 0.0],
        ]);

        let result = search(&matrix);
        assert_eq!(result.tour, tour(&[1, 2, 3]));
        assert_eq!(result.distance, 4.0);
    }

    #[test]
    fn result_matches_the_evaluator() {
        let matrix = matrix_5x5();
        let result = search(&matrix);
        assert_eq!(closed_tour_cost(&matrix, &result.tour), result.distance);
    }
}
