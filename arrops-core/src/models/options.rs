use num_traits::PrimInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How far apart two intervals may be and still end up in the same cluster.
///
/// Intervals are half-open, so `[0, 1)` and `[1, 2)` do not overlap but sit at
/// distance 0: they stay apart under [`MergeDistance::OverlapOnly`] and are merged
/// under `MergeDistance::Within(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MergeDistance<I> {
    /// Merge only intervals that share at least one coordinate.
    OverlapOnly,
    /// Merge intervals separated by a gap of at most this many coordinates.
    Within(I),
}

impl<I> Default for MergeDistance<I>
where
    I: PrimInt,
{
    fn default() -> Self {
        MergeDistance::Within(I::zero())
    }
}

impl<I> From<Option<I>> for MergeDistance<I> {
    fn from(value: Option<I>) -> Self {
        match value {
            Some(d) => MergeDistance::Within(d),
            None => MergeDistance::OverlapOnly,
        }
    }
}

/// Options for nearest-neighbor search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClosestOptions {
    /// Number of neighbors to report per query interval.
    pub k: usize,
    /// Skip neighbors that overlap the query.
    pub ignore_overlaps: bool,
    /// Skip neighbors that end at or before the query start.
    pub ignore_upstream: bool,
    /// Skip neighbors that start at or after the query end.
    pub ignore_downstream: bool,
}

impl Default for ClosestOptions {
    fn default() -> Self {
        ClosestOptions {
            k: 1,
            ignore_overlaps: false,
            ignore_upstream: false,
            ignore_downstream: false,
        }
    }
}

impl ClosestOptions {
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn ignore_overlaps(mut self, ignore: bool) -> Self {
        self.ignore_overlaps = ignore;
        self
    }

    pub fn ignore_upstream(mut self, ignore: bool) -> Self {
        self.ignore_upstream = ignore;
        self
    }

    pub fn ignore_downstream(mut self, ignore: bool) -> Self {
        self.ignore_downstream = ignore;
        self
    }

    /// Neighbors to collect in the upstream pass; zero when upstream is ignored.
    pub fn k_upstream(&self) -> usize {
        if self.ignore_upstream { 0 } else { self.k }
    }

    /// Neighbors to collect in the downstream pass; zero when downstream is ignored.
    pub fn k_downstream(&self) -> usize {
        if self.ignore_downstream { 0 } else { self.k }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_merge_distance_from_option() {
        assert_eq!(MergeDistance::from(None::<i64>), MergeDistance::OverlapOnly);
        assert_eq!(MergeDistance::from(Some(5i64)), MergeDistance::Within(5));
        assert_eq!(MergeDistance::<u32>::default(), MergeDistance::Within(0));
    }

    #[rstest]
    fn test_ignored_passes_have_no_budget() {
        let opts = ClosestOptions::default().with_k(3).ignore_upstream(true);
        assert_eq!(opts.k_upstream(), 0);
        assert_eq!(opts.k_downstream(), 3);
    }
}
