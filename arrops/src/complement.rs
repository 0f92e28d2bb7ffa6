//! Gaps left uncovered by an interval collection.

use log::debug;
use num_traits::PrimInt;

use arrops_core::models::{IntervalSet, MergeDistance};

use crate::merge::merge_intervals;

///
/// Compute the parts of `[lo, hi)` not covered by any interval.
///
/// The input is merged with a merge distance of 0, so touching intervals leave no gap
/// between them. The result is ascending and disjoint. An empty input leaves the whole
/// of `[lo, hi)` uncovered.
///
/// # Arguments
/// - intervals: the covering collection
/// - lo: inclusive lower bound
/// - hi: exclusive upper bound
///
/// # Example
/// ```
/// use arrops::complement_intervals;
/// use arrops_core::models::IntervalSet;
///
/// let set: IntervalSet<i64> = vec![(1, 5), (10, 12)].into();
/// let gaps = complement_intervals(&set, 0, 15);
/// assert_eq!(gaps.iter().collect::<Vec<_>>(), vec![(0, 1), (5, 10), (12, 15)]);
/// ```
pub fn complement_intervals<I>(intervals: &IntervalSet<I>, lo: I, hi: I) -> IntervalSet<I>
where
    I: PrimInt + Send + Sync,
{
    let merged = merge_intervals(intervals, MergeDistance::Within(I::zero()));
    let merged_starts = merged.spans.starts();
    let merged_ends = merged.spans.ends();

    // keep spans that end after lo and start before hi
    let first = merged_ends.partition_point(|end| *end <= lo);
    let last = merged_starts.partition_point(|start| *start < hi).max(first);
    let kept_starts = &merged_starts[first..last];
    let kept_ends = &merged_ends[first..last];

    // gap i runs from the end of span i-1 (or lo) to the start of span i (or hi)
    let gap_starts = std::iter::once(lo).chain(kept_ends.iter().copied());
    let gap_ends = kept_starts.iter().copied().chain(std::iter::once(hi));
    let mut gaps: Vec<(I, I)> = gap_starts.zip(gap_ends).collect();

    if gaps.last().is_some_and(|(start, end)| start >= end) {
        gaps.pop();
    }
    if gaps.first().is_some_and(|(start, end)| start >= end) {
        gaps.remove(0);
    }

    debug!(
        "Complement of {} merged spans has {} gaps",
        last - first,
        gaps.len()
    );

    gaps.into()
}

/// Compute the complement over `[0, I::max_value())`.
pub fn complement_unbounded<I>(intervals: &IntervalSet<I>) -> IntervalSet<I>
where
    I: PrimInt + Send + Sync,
{
    complement_intervals(intervals, I::zero(), I::max_value())
}
