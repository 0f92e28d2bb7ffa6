//! All overlapping pairs between two interval collections.

use log::debug;
use num_traits::PrimInt;

use arrops_core::models::{IntervalSet, OverlapPair};

use crate::arange::{expand, repeat_owners};
use crate::par;

///
/// Find every pair of overlapping intervals between two collections.
///
/// Two intervals overlap when `start1 < end2` and `start2 < end1`, so intervals that only
/// touch are not reported. Pairs within one collection are never reported. The result is
/// sorted by `(id1, id2)`.
///
/// Both collections are sorted together by `(start, end)`. For the interval at sorted
/// position `p`, every later interval whose start lies before `end_p` overlaps it, and a
/// binary search over the sorted starts finds where those end. Each overlapping pair is
/// therefore seen exactly once, from its earlier member.
///
/// # Arguments
/// - set1: first collection; its positions become `id1`
/// - set2: second collection; its positions become `id2`
///
/// # Example
/// ```
/// use arrops::overlap_intervals;
/// use arrops_core::models::{IntervalSet, OverlapPair};
///
/// let set1: IntervalSet<i64> = vec![(1, 5)].into();
/// let set2: IntervalSet<i64> = vec![(0, 2), (4, 6), (6, 8)].into();
/// let pairs = overlap_intervals(&set1, &set2);
/// assert_eq!(pairs, vec![OverlapPair::new(0, 0), OverlapPair::new(0, 1)]);
/// ```
pub fn overlap_intervals<I>(set1: &IntervalSet<I>, set2: &IntervalSet<I>) -> Vec<OverlapPair>
where
    I: PrimInt + Send + Sync,
{
    let n1 = set1.len();
    let n2 = set2.len();
    if n1 == 0 || n2 == 0 {
        return Vec::new();
    }
    let n = n1 + n2;

    let starts: Vec<I> = set1.starts().iter().chain(set2.starts()).copied().collect();
    let ends: Vec<I> = set1.ends().iter().chain(set2.ends()).copied().collect();

    // 1-based, negative for set 1 and positive for set 2
    let ids: Vec<isize> = (1..=n1 as isize)
        .map(|i| -i)
        .chain(1..=n2 as isize)
        .collect();

    let order = par::argsort_by(n, |a, b| {
        starts[a]
            .cmp(&starts[b])
            .then(ends[a].cmp(&ends[b]))
            .then(a.cmp(&b))
    });
    let sorted_starts: Vec<I> = order.iter().map(|i| starts[*i]).collect();
    let sorted_ends: Vec<I> = order.iter().map(|i| ends[*i]).collect();
    let sorted_ids: Vec<isize> = order.iter().map(|i| ids[*i]).collect();

    // first sorted position whose start is at or past this interval's end
    let match_ends: Vec<usize> = par::map_indices(n, |p| {
        sorted_starts.partition_point(|start| *start < sorted_ends[p])
    });

    let mut anchors = Vec::new();
    let mut window_starts = Vec::new();
    let mut window_lengths = Vec::new();
    for (p, match_end) in match_ends.iter().enumerate() {
        if *match_end > p + 1 {
            anchors.push(p);
            window_starts.push(p + 1);
            window_lengths.push(match_end - p - 1);
        }
    }

    let partners = expand(&window_starts, &window_lengths);
    let owners = repeat_owners(&window_lengths);

    let mut pairs: Vec<OverlapPair> = owners
        .iter()
        .zip(&partners)
        .filter_map(|(window, partner)| {
            let a = sorted_ids[anchors[*window]];
            let b = sorted_ids[*partner];
            if (a < 0) == (b < 0) {
                return None;
            }
            let (first, second) = if a < b { (a, b) } else { (b, a) };
            Some(OverlapPair::new((-first - 1) as usize, (second - 1) as usize))
        })
        .collect();

    par::sort_unstable_by(&mut pairs, |a, b| a.cmp(b));

    debug!(
        "Found {} overlapping pairs between {} and {} intervals",
        pairs.len(),
        n1,
        n2
    );

    pairs
}
