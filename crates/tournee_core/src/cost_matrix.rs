use thiserror::Error;

use crate::location::LocationIdx;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("cost matrix needs at least a depot and one client, got {0} rows")]
    TooSmall(usize),
    #[error("cost matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("cost matrix entry [{row}][{col}] must be finite and non-negative, got {value}")]
    InvalidEntry { row: usize, col: usize, value: f64 },
}

/// Square matrix of travel costs between the depot and the clients.
///
/// Stored flat in row-major order; the cost of going from `from` to `to` is
/// at `from * num_locations + to`. The matrix is validated once on
/// construction and never mutated afterwards, so the solvers read it without
/// re-checking. It is not required to be symmetric.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    costs: Vec<f64>,
    num_locations: usize,
}

impl CostMatrix {
    /// Build a matrix from nested rows, as delivered by the distance
    /// provider. Rejects anything a solver could not safely consume:
    /// fewer than 2 rows, a non-square shape, or entries that are
    /// negative, NaN or infinite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let num_locations = rows.len();
        if num_locations < 2 {
            return Err(MatrixError::TooSmall(num_locations));
        }

        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != num_locations {
                return Err(MatrixError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: num_locations,
                });
            }
            for (col, &value) in entries.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(MatrixError::InvalidEntry { row, col, value });
                }
            }
        }

        Ok(CostMatrix {
            costs: rows.into_iter().flatten().collect(),
            num_locations,
        })
    }

    #[inline(always)]
    fn index(&self, from: LocationIdx, to: LocationIdx) -> usize {
        from.get() * self.num_locations + to.get()
    }

    #[inline(always)]
    pub fn cost(&self, from: LocationIdx, to: LocationIdx) -> f64 {
        self.costs[self.index(from, to)]
    }

    pub fn num_locations(&self) -> usize {
        self.num_locations
    }

    /// The candidate indices a tour has to visit, in ascending order.
    pub fn clients(&self) -> Vec<LocationIdx> {
        (1..self.num_locations).map(LocationIdx::new).collect()
    }
}
