//! Sweep-line clustering of one interval collection.

use log::debug;
use num_traits::PrimInt;

use arrops_core::models::{IntervalSet, MergeDistance};

use crate::par;

/// The result of [`merge_intervals`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedIntervals<I> {
    /// Cluster of every input interval, aligned with the input.
    pub cluster_ids: Vec<usize>,
    /// Span of every cluster, ascending and disjoint. Indexed by cluster id.
    pub spans: IntervalSet<I>,
}

impl<I> MergedIntervals<I>
where
    I: PrimInt,
{
    pub fn n_clusters(&self) -> usize {
        self.spans.len()
    }

    /// Number of input intervals in each cluster.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.spans.len()];
        for cluster in &self.cluster_ids {
            sizes[*cluster] += 1;
        }
        sizes
    }
}

///
/// Merge overlapping (or nearby) intervals into clusters.
///
/// Intervals are swept in `(start, end)` order while tracking the furthest end seen so far.
/// A new cluster begins at an interval whose start lies beyond that running end:
///
/// - [`MergeDistance::OverlapOnly`]: `start >= running_end`, so touching intervals stay apart;
/// - [`MergeDistance::Within(d)`](MergeDistance::Within): `start > running_end + d`, so
///   `d = 0` joins touching intervals and larger `d` bridges gaps of up to `d`.
///
/// Cluster ids count up from 0 in coordinate order.
///
/// # Arguments
/// - intervals: the collection to merge
/// - min_dist: how far apart two intervals may be and still share a cluster
///
/// # Example
/// ```
/// use arrops::merge_intervals;
/// use arrops_core::models::{IntervalSet, MergeDistance};
///
/// let set: IntervalSet<i64> = vec![(1, 5), (3, 8), (10, 12)].into();
/// let merged = merge_intervals(&set, MergeDistance::Within(0));
/// assert_eq!(merged.cluster_ids, vec![0, 0, 1]);
/// assert_eq!(merged.spans.iter().collect::<Vec<_>>(), vec![(1, 8), (10, 12)]);
/// ```
pub fn merge_intervals<I>(intervals: &IntervalSet<I>, min_dist: MergeDistance<I>) -> MergedIntervals<I>
where
    I: PrimInt + Send + Sync,
{
    let n = intervals.len();
    if n == 0 {
        return MergedIntervals {
            cluster_ids: Vec::new(),
            spans: IntervalSet::new(),
        };
    }

    let starts = intervals.starts();
    let ends = intervals.ends();

    let order = par::argsort_by(n, |a, b| {
        starts[a]
            .cmp(&starts[b])
            .then(ends[a].cmp(&ends[b]))
            .then(a.cmp(&b))
    });

    // furthest end among the first p+1 sorted intervals
    let mut running_ends = Vec::with_capacity(n);
    let mut furthest = ends[order[0]];
    for &i in &order {
        furthest = furthest.max(ends[i]);
        running_ends.push(furthest);
    }

    let starts_cluster = |p: usize| -> bool {
        if p == 0 {
            return true;
        }
        let start = starts[order[p]];
        let reach = running_ends[p - 1];
        match min_dist {
            MergeDistance::OverlapOnly => start >= reach,
            // an overflowing reach covers every representable start
            MergeDistance::Within(d) => reach.checked_add(&d).is_some_and(|limit| start > limit),
        }
    };

    let boundaries: Vec<usize> = (0..n).filter(|p| starts_cluster(*p)).collect();

    // cluster c covers sorted positions boundaries[c]..boundaries[c + 1]
    let mut cluster_ids = vec![0usize; n];
    let mut spans = IntervalSet::with_capacity(boundaries.len());
    for (cluster, first) in boundaries.iter().enumerate() {
        let last = boundaries.get(cluster + 1).copied().unwrap_or(n);
        for &i in &order[*first..last] {
            cluster_ids[i] = cluster;
        }
        spans.push(starts[order[*first]], running_ends[last - 1]);
    }

    debug!("Merged {} intervals into {} clusters", n, spans.len());

    MergedIntervals { cluster_ids, spans }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::*;

    fn spans_of<I: PrimInt>(merged: &MergedIntervals<I>) -> Vec<(I, I)> {
        merged.spans.iter().collect()
    }

    #[rstest]
    fn test_merge_overlapping_and_disjoint() {
        let set: IntervalSet<i64> = vec![(1, 5), (3, 8), (10, 12)].into();
        let merged = merge_intervals(&set, MergeDistance::Within(0));
        assert_eq!(merged.cluster_ids, vec![0, 0, 1]);
        assert_eq!(spans_of(&merged), vec![(1, 8), (10, 12)]);
        assert_eq!(merged.cluster_sizes(), vec![2, 1]);
    }

    #[rstest]
    fn test_touching_intervals_depend_on_merge_distance() {
        let set: IntervalSet<i64> = vec![(0, 1), (1, 2)].into();

        let apart = merge_intervals(&set, MergeDistance::OverlapOnly);
        assert_eq!(apart.cluster_ids, vec![0, 1]);
        assert_eq!(spans_of(&apart), vec![(0, 1), (1, 2)]);

        let joined = merge_intervals(&set, MergeDistance::Within(0));
        assert_eq!(joined.cluster_ids, vec![0, 0]);
        assert_eq!(spans_of(&joined), vec![(0, 2)]);
    }

    #[rstest]
    #[case(1, 3)]
    #[case(2, 2)]
    #[case(3, 1)]
    fn test_merge_distance_bridges_gaps(#[case] d: u32, #[case] n_clusters: usize) {
        // gaps of 2 and 3
        let set: IntervalSet<u32> = vec![(0, 10), (12, 20), (23, 30)].into();
        let merged = merge_intervals(&set, MergeDistance::Within(d));
        assert_eq!(merged.n_clusters(), n_clusters);
    }

    #[rstest]
    fn test_cluster_ids_follow_input_order() {
        let set: IntervalSet<i64> = vec![(20, 25), (0, 5), (22, 30), (4, 6)].into();
        let merged = merge_intervals(&set, MergeDistance::OverlapOnly);
        assert_eq!(merged.cluster_ids, vec![1, 0, 1, 0]);
        assert_eq!(spans_of(&merged), vec![(0, 6), (20, 30)]);
    }

    #[rstest]
    fn test_contained_interval_does_not_shrink_span() {
        let set: IntervalSet<i64> = vec![(0, 100), (10, 20), (50, 60), (99, 150)].into();
        let merged = merge_intervals(&set, MergeDistance::OverlapOnly);
        assert_eq!(merged.cluster_ids, vec![0, 0, 0, 0]);
        assert_eq!(spans_of(&merged), vec![(0, 150)]);
    }

    #[rstest]
    fn test_merge_empty() {
        let set: IntervalSet<i64> = IntervalSet::new();
        let merged = merge_intervals(&set, MergeDistance::Within(0));
        assert!(merged.cluster_ids.is_empty());
        assert!(merged.spans.is_empty());
    }

    #[rstest]
    fn test_merge_distance_near_type_max() {
        let set: IntervalSet<u8> = vec![(0, 250), (252, 255)].into();
        let merged = merge_intervals(&set, MergeDistance::Within(10));
        assert_eq!(spans_of(&merged), vec![(0, 255)]);
    }

    #[rstest]
    #[case(MergeDistance::OverlapOnly)]
    #[case(MergeDistance::Within(0))]
    #[case(MergeDistance::Within(4))]
    fn test_merge_random_sets(#[case] min_dist: MergeDistance<i64>) {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.gen_range(0..60);
            let set: IntervalSet<i64> = (0..n)
                .map(|_| {
                    let start = rng.gen_range(-50..200);
                    (start, start + rng.gen_range(0..15))
                })
                .collect();
            let merged = merge_intervals(&set, min_dist);
            let spans = spans_of(&merged);

            // every member lies inside its cluster span
            for (i, (start, end)) in set.iter().enumerate() {
                let (lo, hi) = spans[merged.cluster_ids[i]];
                assert!(lo <= start && end <= hi);
            }

            // consecutive spans are separated beyond the merge distance
            for w in spans.windows(2) {
                let separated = match min_dist {
                    MergeDistance::OverlapOnly => w[1].0 >= w[0].1,
                    MergeDistance::Within(d) => w[1].0 > w[0].1 + d,
                };
                assert!(separated, "spans {:?} should not merge", w);
            }

            // merging the spans again changes nothing
            let again = merge_intervals(&merged.spans, min_dist);
            assert_eq!(again.cluster_ids, (0..spans.len()).collect::<Vec<_>>());
            assert_eq!(spans_of(&again), spans);
        }
    }
}
