use serde::{Deserialize, Serialize};

use crate::cost_matrix::CostMatrix;
use crate::location::{DEPOT, LocationIdx};

/// Visiting order over the clients, excluding the depot. The closed loop
/// depot → tour[0] → … → tour[last] → depot is implied.
pub type Tour = Vec<LocationIdx>;

/// Outcome of one solver run: the best tour found and its closed-loop
/// distance. The default value (empty tour, distance 0.0) is the defined
/// result for an empty candidate set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    pub tour: Tour,
    pub distance: f64,
}

/// Closed-loop distance of a tour: depot to the first client, every
/// consecutive client leg, then back from the last client to the depot.
/// An empty tour costs nothing.
pub fn closed_tour_cost(matrix: &CostMatrix, tour: &[LocationIdx]) -> f64 {
    let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
        return 0.0;
    };

    let mut distance = matrix.cost(DEPOT, first);
    for leg in tour.windows(2) {
        distance += matrix.cost(leg[0], leg[1]);
    }
    distance + matrix.cost(last, DEPOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_3x3() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0.0, 2.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    fn tour(indices: &[usize]) -> Tour {
        indices.iter().copied().map(LocationIdx::new).collect()
    }

    #[test]
    fn empty_tour_costs_nothing() {
        assert_eq!(closed_tour_cost(&matrix_3x3(), &[]), 0.0);
    }

    #[test]
    fn single_client_tour_is_out_and_back() {
        // depot -> 1 -> depot
        assert_eq!(closed_tour_cost(&matrix_3x3(), &tour(&[1])), 3.0);
        // depot -> 2 -> depot
        assert_eq!(closed_tour_cost(&matrix_3x3(), &tour(&[2])), 2.0);
    }

    #[test]
    fn multi_client_tour_sums_every_leg() {
        assert_eq!(closed_tour_cost(&matrix_3x3(), &tour(&[1, 2])), 4.0);
        assert_eq!(closed_tour_cost(&matrix_3x3(), &tour(&[2, 1])), 3.0);
    }

    #[test]
    fn respects_asymmetric_costs() {
        let matrix = CostMatrix::from_rows(vec![vec![0.0, 2.0], vec![1.0, 0.0]]).unwrap();
        assert_eq!(closed_tour_cost(&matrix, &tour(&[1])), 3.0);
    }

    #[test]
    fn result_serializes_with_plain_indices() {
        let result = SolveResult {
            tour: tour(&[2, 1]),
            distance: 3.0,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"tour":[2,1],"distance":3.0}"#);

        let back: SolveResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
