use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pair of overlapping intervals, `id1` indexing the first collection and `id2` the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverlapPair {
    pub id1: usize,
    pub id2: usize,
}

impl OverlapPair {
    pub fn new(id1: usize, id2: usize) -> Self {
        OverlapPair { id1, id2 }
    }
}

impl From<(usize, usize)> for OverlapPair {
    fn from((id1, id2): (usize, usize)) -> Self {
        OverlapPair { id1, id2 }
    }
}

/// Where a neighbor sits relative to the query interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// The neighbor ends at or before the query start.
    Upstream,
    /// The neighbor starts at or after the query end.
    Downstream,
    /// The neighbor shares at least one coordinate with the query.
    Overlap,
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Upstream => "upstream",
            Direction::Downstream => "downstream",
            Direction::Overlap => "overlap",
        };
        write!(f, "{}", s)
    }
}

///
/// A nearest-neighbor hit.
///
/// `distance` is 0 for a true overlap and `gap + 1` otherwise, so two touching
/// intervals sit at distance 1.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NeighborPair<I> {
    pub id1: usize,
    pub id2: usize,
    pub distance: I,
    pub direction: Direction,
}
