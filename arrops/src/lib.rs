//! Batch interval algebra over half-open integer intervals.
//!
//! This crate provides stateless, single-batch operations on collections of `[start, end)`
//! intervals, the kind of ranges found in genomic annotations:
//!
//! - [`overlap_intervals`]: every overlapping pair between two collections
//! - [`merge_intervals`]: clusters of overlapping or nearby intervals and their spans
//! - [`complement_intervals`]: the gaps a collection leaves inside given bounds
//! - [`closest_intervals`]: the k nearest neighbors of each interval in another collection
//! - [`arange_multi`]: concatenated integer ranges, the building block of the others
//!
//! Intervals are identified by their position in the input, and every output refers back
//! to those positions. Coordinates from different contigs must not be mixed in one call;
//! split the input per contig first (see `arrops_core::adapter::ContigPartition`).
//!
//! ## Quick Start
//!
//! ```rust
//! use arrops::{closest_intervals, merge_intervals, overlap_intervals};
//! use arrops_core::models::{ClosestOptions, IntervalSet, MergeDistance, OverlapPair};
//!
//! let peaks: IntervalSet<i64> = vec![(100, 200), (150, 300), (400, 500)].into();
//! let genes: IntervalSet<i64> = vec![(180, 250), (600, 700)].into();
//!
//! let merged = merge_intervals(&peaks, MergeDistance::Within(0));
//! assert_eq!(merged.spans.iter().collect::<Vec<_>>(), vec![(100, 300), (400, 500)]);
//!
//! let overlaps = overlap_intervals(&peaks, &genes);
//! assert_eq!(overlaps, vec![OverlapPair::new(0, 0), OverlapPair::new(1, 0)]);
//!
//! let nearest = closest_intervals(&peaks, &genes, &ClosestOptions::default()).unwrap();
//! assert_eq!(nearest[2].id2, 1);
//! assert_eq!(nearest[2].distance, 101);
//! ```

/// Concatenated integer ranges.
///
/// See [`arange_multi`] for details.
pub mod arange;

/// Gaps between intervals.
///
/// See [`complement_intervals`] for details.
pub mod complement;

/// Nearest-neighbor search.
///
/// See [`closest_intervals`] for details.
pub mod closest;

/// Interval clustering.
///
/// See [`merge_intervals`] for details.
pub mod merge;

/// Overlap join.
///
/// See [`overlap_intervals`] for details.
pub mod overlap;

mod par;

// re-exports
pub use self::arange::{arange_multi, arange_multi_from};
pub use self::closest::{
    DirectionalNeighbors, closest_intervals, closest_intervals_with_ties, directional_neighbors,
};
pub use self::complement::{complement_intervals, complement_unbounded};
pub use self::merge::{MergedIntervals, merge_intervals};
pub use self::overlap::overlap_intervals;
