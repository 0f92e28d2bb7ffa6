use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::*;

use arrops::{
    closest_intervals, complement_intervals, merge_intervals, overlap_intervals,
};
use arrops_core::adapter::ContigPartition;
use arrops_core::models::{
    ClosestOptions, Direction, IntervalSet, MergeDistance, OverlapPair,
};
use arrops_core::utils::read_bedlike_records;

#[fixture]
fn path_to_peaks() -> &'static str {
    "tests/data/peaks.bed"
}

#[fixture]
fn path_to_genes() -> &'static str {
    "tests/data/genes.bed"
}

fn random_set(rng: &mut StdRng, n: usize, max_len: i64) -> IntervalSet<i64> {
    (0..n)
        .map(|_| {
            let start = rng.gen_range(0..500);
            (start, start + rng.gen_range(0..max_len))
        })
        .collect()
}

mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_documented_examples() {
        let set1: IntervalSet<i64> = vec![(1, 5)].into();
        let set2: IntervalSet<i64> = vec![(0, 2), (4, 6), (6, 8)].into();
        assert_eq!(
            overlap_intervals(&set1, &set2),
            vec![OverlapPair::new(0, 0), OverlapPair::new(0, 1)]
        );

        let set: IntervalSet<i64> = vec![(1, 5), (3, 8), (10, 12)].into();
        let merged = merge_intervals(&set, MergeDistance::Within(0));
        assert_eq!(merged.cluster_ids, vec![0, 0, 1]);
        assert_eq!(merged.spans.iter().collect::<Vec<_>>(), vec![(1, 8), (10, 12)]);

        let set: IntervalSet<i64> = vec![(1, 5), (10, 12)].into();
        let gaps = complement_intervals(&set, 0, 15);
        assert_eq!(gaps.iter().collect::<Vec<_>>(), vec![(0, 1), (5, 10), (12, 15)]);

        let set: IntervalSet<i64> = vec![(0, 1), (1, 2)].into();
        assert_eq!(merge_intervals(&set, MergeDistance::OverlapOnly).n_clusters(), 2);
        assert_eq!(merge_intervals(&set, MergeDistance::from(Some(0))).n_clusters(), 1);

        let queries: IntervalSet<i64> = vec![(5, 6)].into();
        let targets: IntervalSet<i64> = vec![(0, 1), (2, 3), (8, 9)].into();
        let hits = closest_intervals(&queries, &targets, &ClosestOptions::default()).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id2, 1);
    }

    #[rstest]
    fn test_overlaps_per_contig_map_back_to_rows(path_to_peaks: &str, path_to_genes: &str) {
        let peaks = read_bedlike_records(path_to_peaks).unwrap();
        let genes = read_bedlike_records(path_to_genes).unwrap();
        let peaks = ContigPartition::from_records(&peaks);
        let genes = ContigPartition::from_records(&genes);

        let mut rows = Vec::new();
        for group in peaks.groups() {
            let Some(other) = genes.get(&group.contig) else {
                continue;
            };
            for pair in overlap_intervals(&group.intervals, &other.intervals) {
                rows.push((group.row(pair.id1), other.row(pair.id2)));
            }
        }

        assert_eq!(rows, vec![(0, 0), (0, 2), (1, 2), (1, 3), (2, 4)]);
    }

    #[rstest]
    fn test_overlaps_are_included_as_nearest() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let set1 = random_set(&mut rng, 30, 40);
            let set2 = random_set(&mut rng, 30, 40);
            let k = 50;
            let hits =
                closest_intervals(&set1, &set2, &ClosestOptions::default().with_k(k)).unwrap();

            for pair in overlap_intervals(&set1, &set2) {
                let position = hits
                    .iter()
                    .position(|h| h.id1 == pair.id1 && h.id2 == pair.id2)
                    .expect("overlap missing from nearest neighbors");
                assert_eq!(hits[position].distance, 0);
                assert_eq!(hits[position].direction, Direction::Overlap);

                // nothing further away precedes it for the same query
                let earlier_positive = hits[..position]
                    .iter()
                    .any(|h| h.id1 == pair.id1 && h.distance > 0);
                assert!(!earlier_positive);
            }
        }
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    fn test_at_most_k_neighbors_per_query(#[case] k: usize) {
        let mut rng = StdRng::seed_from_u64(k as u64);
        let set1 = random_set(&mut rng, 100, 30);
        let set2 = random_set(&mut rng, 100, 30);
        let hits = closest_intervals(&set1, &set2, &ClosestOptions::default().with_k(k)).unwrap();

        let mut counts = vec![0usize; set1.len()];
        for hit in &hits {
            counts[hit.id1] += 1;
        }
        assert!(counts.iter().all(|c| *c <= k));
        assert!(hits.windows(2).all(|w| w[0].id1 <= w[1].id1));
        assert!(
            hits.windows(2)
                .filter(|w| w[0].id1 == w[1].id1)
                .all(|w| w[0].distance <= w[1].distance)
        );
    }

    #[rstest]
    fn test_complement_and_merged_spans_tile_the_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let set = random_set(&mut rng, 40, 25);
            let (lo, hi) = (100i64, 400i64);

            let merged = merge_intervals(&set, MergeDistance::Within(0));
            let gaps = complement_intervals(&set, lo, hi);

            let covered: i64 = merged
                .spans
                .iter()
                .map(|(s, e)| (e.min(hi) - s.max(lo)).max(0))
                .sum();
            let uncovered: i64 = gaps.iter().map(|(s, e)| e - s).sum();
            assert_eq!(covered + uncovered, hi - lo);

            // gaps and spans never share a coordinate
            let pairs = overlap_intervals(&gaps, &merged.spans);
            assert!(pairs.is_empty());
        }
    }

    #[rstest]
    fn test_merge_is_idempotent_on_its_spans() {
        let mut rng = StdRng::seed_from_u64(5);
        let set = random_set(&mut rng, 200, 10);
        for min_dist in [MergeDistance::OverlapOnly, MergeDistance::Within(0), MergeDistance::Within(3)] {
            let merged = merge_intervals(&set, min_dist);
            let again = merge_intervals(&merged.spans, min_dist);
            assert_eq!(again.spans, merged.spans);
            assert_eq!(again.n_clusters(), merged.n_clusters());
        }
    }
}
