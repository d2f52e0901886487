use tracing::instrument;

use tournee_core::cost_matrix::CostMatrix;
use tournee_core::location::{DEPOT, LocationIdx};
use tournee_core::tour::{SolveResult, Tour};

/// Depth-first search over partial tours that abandons a branch as soon as
/// the distance travelled so far can no longer beat the best complete tour.
///
/// The bound compares the cost of the *open* prefix (not yet closed back
/// to the depot) against the best *closed* tour found so far. Keep exactly
/// that comparison, not a tighter one: with several optimal tours, a
/// stronger bound changes which of them gets reported. Candidate order
/// only affects how early the bound starts cutting; ties keep the first
/// complete tour found.
#[instrument(skip_all, level = "debug")]
pub(crate) fn search(matrix: &CostMatrix) -> SolveResult {
    let mut remaining = matrix.clients();
    if remaining.is_empty() {
        return SolveResult::default();
    }

    let mut search = Search {
        matrix,
        best_distance: f64::INFINITY,
        best_tour: Tour::new(),
    };
    let mut prefix = Tour::with_capacity(remaining.len());
    search.explore(&mut prefix, &mut remaining, 0.0);

    SolveResult {
        tour: search.best_tour,
        distance: search.best_distance,
    }
}

/// One invocation's frontier state: the tightening bound and the best tour
/// recorded so far. Never outlives its `search` call.
struct Search<'a> {
    matrix: &'a CostMatrix,
    best_distance: f64,
    best_tour: Tour,
}

impl Search<'_> {
    fn explore(&mut self, prefix: &mut Tour, remaining: &mut Vec<LocationIdx>, travelled: f64) {
        if remaining.is_empty() {
            if let Some(&last) = prefix.last() {
                let total = travelled + self.matrix.cost(last, DEPOT);
                if total < self.best_distance {
                    self.best_distance = total;
                    self.best_tour = prefix.clone();
                }
            }
            return;
        }

        for position in 0..remaining.len() {
            let candidate = remaining[position];
            let leg = match prefix.last() {
                Some(&last) => self.matrix.cost(last, candidate),
                None => self.matrix.cost(DEPOT, candidate),
            };

            let extended = travelled + leg;
            if extended < self.best_distance {
                // Order-preserving remove so candidates keep being visited
                // in ascending order after backtracking.
                remaining.remove(position);
                prefix.push(candidate);

                self.explore(prefix, remaining, extended);

                prefix.pop();
                remaining.insert(position, candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{matrix, matrix_3x3, matrix_5x5, tour};
    use tournee_core::tour::closed_tour_cost;

    #[test]
    fn finds_the_optimal_tour() {
        let result = search(&matrix_3x3());
        assert_eq!(result.tour, tour(&[2, 1]));
        assert_eq!(result.distance, 3.0);

        let result = search(&matrix_5x5());
        assert_eq!(result.tour, tour(&[2, 3, 4, 1]));
        assert_eq!(result.distance, 9.0);
    }

    #[test]
    fn first_complete_optimum_wins_ties() {
        // Uniform costs: the first complete tour, built in ascending
        // candidate order, is already optimal and must be kept.
        let matrix = matrix(&[
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
    fn pruning_does_not_change_the_distance() {
        // A detour so expensive every branch through it gets cut early.
        let matrix = matrix(&[
            &[0.0, 50.0, 2.0, 2.0],
            &[1.0, 0.0, 50.0, 50.0],
            &[3.0, 4.0, 0.0, 2.0],
            &[2.0, 3.0, 4.0, 0.0],
        ]);

        let pruned = search(&matrix);
        let exhaustive = crate::solver::exhaustive::search(&matrix);
        assert_eq!(pruned.distance, exhaustive.distance);
        assert_eq!(closed_tour_cost(&matrix, &pruned.tour), pruned.distance);
    }
}
