//! k-nearest neighbors of one interval collection within another.
//!
//! For every interval of the first collection (the query) the neighbors are looked up in
//! the second collection in up to three ways:
//!
//! - upstream: intervals ending at or before the query start;
//! - downstream: intervals starting at or after the query end;
//! - overlapping: intervals found by [`overlap_intervals`].
//!
//! Distances are shifted by one so that 0 is reserved for true overlaps and two touching
//! intervals sit at distance 1. Distances too large for the coordinate type saturate at
//! its maximum. Candidates are ranked by distance, then by the optional
//! tie-breaker (lower wins), then by the lower `id2`. Upstream and downstream candidates at
//! the same distance are not ranked by direction.

use std::cmp::Ordering;

use log::debug;
use num_traits::PrimInt;

use arrops_core::errors::ArropsError;
use arrops_core::models::{ClosestOptions, Direction, IntervalSet, NeighborPair};

use crate::arange::{expand, repeat_owners};
use crate::overlap::overlap_intervals;
use crate::par;

/// Non-overlapping neighbors, reported per direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionalNeighbors<I> {
    pub upstream: Vec<NeighborPair<I>>,
    pub downstream: Vec<NeighborPair<I>>,
}

///
/// Find up to `k` closest intervals in `set2` for every interval in `set1`.
///
/// The result is ordered by `id1`, then from closest to furthest.
///
/// # Arguments
/// - set1: query intervals
/// - set2: candidate intervals
/// - options: number of neighbors and which kinds of neighbor to skip
///
/// # Example
/// ```
/// use arrops::closest_intervals;
/// use arrops_core::models::{ClosestOptions, Direction, IntervalSet};
///
/// let queries: IntervalSet<i64> = vec![(5, 6)].into();
/// let targets: IntervalSet<i64> = vec![(0, 1), (2, 3), (8, 9)].into();
/// let hits = closest_intervals(&queries, &targets, &ClosestOptions::default()).unwrap();
///
/// // (2, 3) and (8, 9) are both at distance 3; the lower id wins
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id2, 1);
/// assert_eq!(hits[0].distance, 3);
/// assert_eq!(hits[0].direction, Direction::Upstream);
/// ```
pub fn closest_intervals<I>(
    set1: &IntervalSet<I>,
    set2: &IntervalSet<I>,
    options: &ClosestOptions,
) -> Result<Vec<NeighborPair<I>>, ArropsError>
where
    I: PrimInt + Send + Sync,
{
    closest_impl::<I, ()>(set1, set2, None, options)
}

///
/// Like [`closest_intervals`], breaking distance ties with a value per `set2` interval.
///
/// Among candidates at the same distance the one with the lowest `tie_breaker` value is
/// preferred. Values that do not compare with themselves (NaN) rank after all others.
///
/// # Arguments
/// - set1: query intervals
/// - set2: candidate intervals
/// - tie_breaker: one value per interval of `set2`
/// - options: number of neighbors and which kinds of neighbor to skip
pub fn closest_intervals_with_ties<I, T>(
    set1: &IntervalSet<I>,
    set2: &IntervalSet<I>,
    tie_breaker: &[T],
    options: &ClosestOptions,
) -> Result<Vec<NeighborPair<I>>, ArropsError>
where
    I: PrimInt + Send + Sync,
    T: PartialOrd + Sync,
{
    closest_impl(set1, set2, Some(tie_breaker), options)
}

///
/// Find the closest non-overlapping neighbors upstream and downstream of every query.
///
/// Each pass reports up to its own `k` candidates per query, ordered by `id1`. A pass with
/// `k = 0` produces nothing. Intervals overlapping the query are never reported here.
///
/// # Arguments
/// - set1: query intervals
/// - set2: candidate intervals
/// - tie_breaker: optional value per interval of `set2`, lower preferred
/// - k_upstream: neighbors to report upstream of each query
/// - k_downstream: neighbors to report downstream of each query
pub fn directional_neighbors<I, T>(
    set1: &IntervalSet<I>,
    set2: &IntervalSet<I>,
    tie_breaker: Option<&[T]>,
    k_upstream: usize,
    k_downstream: usize,
) -> Result<DirectionalNeighbors<I>, ArropsError>
where
    I: PrimInt + Send + Sync,
    T: PartialOrd + Sync,
{
    if let Some(ties) = tie_breaker {
        if ties.len() != set2.len() {
            return Err(ArropsError::LengthMismatch {
                what: "tie breaker",
                expected: set2.len(),
                found: ties.len(),
            });
        }
    }

    let searchable = !set1.is_empty() && !set2.is_empty();
    let upstream = match searchable && k_upstream > 0 {
        true => upstream_pass(set1, set2, tie_breaker, k_upstream),
        false => Vec::new(),
    };
    let downstream = match searchable && k_downstream > 0 {
        true => downstream_pass(set1, set2, tie_breaker, k_downstream),
        false => Vec::new(),
    };

    Ok(DirectionalNeighbors {
        upstream,
        downstream,
    })
}

fn closest_impl<I, T>(
    set1: &IntervalSet<I>,
    set2: &IntervalSet<I>,
    tie_breaker: Option<&[T]>,
    options: &ClosestOptions,
) -> Result<Vec<NeighborPair<I>>, ArropsError>
where
    I: PrimInt + Send + Sync,
    T: PartialOrd + Sync,
{
    let k = options.k;
    if k == 0 {
        return Err(ArropsError::InvalidNeighborCount(k));
    }

    let DirectionalNeighbors {
        upstream,
        downstream,
    } = directional_neighbors(
        set1,
        set2,
        tie_breaker,
        options.k_upstream(),
        options.k_downstream(),
    )?;

    let mut candidates = upstream;
    candidates.extend(downstream);
    if !options.ignore_overlaps {
        candidates.extend(
            overlap_intervals(set1, set2)
                .into_iter()
                .map(|pair| NeighborPair {
                    id1: pair.id1,
                    id2: pair.id2,
                    distance: I::zero(),
                    direction: Direction::Overlap,
                }),
        );
    }

    par::sort_unstable_by(&mut candidates, |a, b| {
        a.id1
            .cmp(&b.id1)
            .then(a.distance.cmp(&b.distance))
            .then_with(|| compare_ties(tie_breaker, a.id2, b.id2))
            .then(a.id2.cmp(&b.id2))
            .then(a.direction.cmp(&b.direction))
    });

    // keep the first k of every run of equal id1
    let mut run_starts = Vec::new();
    let mut run_lengths = Vec::new();
    let mut offset = 0;
    for run in candidates.chunk_by(|a, b| a.id1 == b.id1) {
        run_starts.push(offset);
        run_lengths.push(run.len().min(k));
        offset += run.len();
    }
    let kept: Vec<NeighborPair<I>> = expand(&run_starts, &run_lengths)
        .into_iter()
        .map(|p| candidates[p])
        .collect();

    debug!(
        "Kept {} of {} neighbor candidates for {} query intervals (k = {})",
        kept.len(),
        candidates.len(),
        set1.len(),
        k
    );

    Ok(kept)
}

fn upstream_pass<I, T>(
    set1: &IntervalSet<I>,
    set2: &IntervalSet<I>,
    tie_breaker: Option<&[T]>,
    k: usize,
) -> Vec<NeighborPair<I>>
where
    I: PrimInt + Send + Sync,
    T: PartialOrd + Sync,
{
    let starts1 = set1.starts();
    let ends2 = set2.ends();

    // the best candidate at equal end must sit closest to the cut, i.e. last
    let order = par::argsort_by(set2.len(), |a, b| {
        ends2[a]
            .cmp(&ends2[b])
            .then_with(|| compare_ties(tie_breaker, b, a))
            .then(b.cmp(&a))
    });
    let sorted_ends: Vec<I> = order.iter().map(|j| ends2[*j]).collect();

    let window_ends: Vec<usize> = par::map_indices(set1.len(), |i| {
        sorted_ends.partition_point(|end| *end <= starts1[i])
    });
    let window_starts: Vec<usize> = window_ends.iter().map(|end| end.saturating_sub(k)).collect();
    let lengths: Vec<usize> = window_ends
        .iter()
        .zip(&window_starts)
        .map(|(end, start)| end - start)
        .collect();

    let queries = repeat_owners(&lengths);
    let positions = expand(&window_starts, &lengths);

    queries
        .into_iter()
        .zip(positions)
        .map(|(i, p)| {
            let j = order[p];
            NeighborPair {
                id1: i,
                id2: j,
                distance: gap_distance(ends2[j], starts1[i]),
                direction: Direction::Upstream,
            }
        })
        .collect()
}

fn downstream_pass<I, T>(
    set1: &IntervalSet<I>,
    set2: &IntervalSet<I>,
    tie_breaker: Option<&[T]>,
    k: usize,
) -> Vec<NeighborPair<I>>
where
    I: PrimInt + Send + Sync,
    T: PartialOrd + Sync,
{
    let ends1 = set1.ends();
    let starts2 = set2.starts();
    let n2 = set2.len();

    let order = par::argsort_by(n2, |a, b| {
        starts2[a]
            .cmp(&starts2[b])
            .then_with(|| compare_ties(tie_breaker, a, b))
            .then(a.cmp(&b))
    });
    let sorted_starts: Vec<I> = order.iter().map(|j| starts2[*j]).collect();

    let window_starts: Vec<usize> = par::map_indices(set1.len(), |i| {
        sorted_starts.partition_point(|start| *start < ends1[i])
    });
    let lengths: Vec<usize> = window_starts
        .iter()
        .map(|start| (start + k).min(n2) - start)
        .collect();

    let queries = repeat_owners(&lengths);
    let positions = expand(&window_starts, &lengths);

    queries
        .into_iter()
        .zip(positions)
        .map(|(i, p)| {
            let j = order[p];
            NeighborPair {
                id1: i,
                id2: j,
                distance: gap_distance(ends1[i], starts2[j]),
                direction: Direction::Downstream,
            }
        })
        .collect()
}

/// `right_start - left_end + 1`, saturating at `I::max_value()`.
fn gap_distance<I>(left_end: I, right_start: I) -> I
where
    I: PrimInt,
{
    right_start
        .checked_sub(&left_end)
        .and_then(|gap| gap.checked_add(&I::one()))
        .unwrap_or_else(I::max_value)
}

fn compare_ties<T>(tie_breaker: Option<&[T]>, a: usize, b: usize) -> Ordering
where
    T: PartialOrd,
{
    match tie_breaker {
        Some(ties) => compare_tie_values(&ties[a], &ties[b]),
        None => Ordering::Equal,
    }
}

/// Total order over partially ordered values: values incomparable with themselves go last.
fn compare_tie_values<T>(a: &T, b: &T) -> Ordering
where
    T: PartialOrd,
{
    match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => {
            let a_unordered = a.partial_cmp(a).is_none();
            let b_unordered = b.partial_cmp(b).is_none();
            a_unordered.cmp(&b_unordered)
        }
    }
}
