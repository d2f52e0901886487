use serde::{Deserialize, Serialize};

/// Row/column index into a [`CostMatrix`](crate::cost_matrix::CostMatrix).
///
/// Index 0 is always the depot (the salesman's start and end point);
/// indices 1..N are the clients to visit.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub struct LocationIdx(usize);

pub const DEPOT: LocationIdx = LocationIdx(0);

impl LocationIdx {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for LocationIdx {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for LocationIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
