//! Order-preserving parallel helpers.
//!
//! Every comparator handed to these functions must be a total order on distinct elements
//! (ties end in a unique position), so sequential and parallel runs produce identical output.

use std::cmp::Ordering;

use rayon::prelude::*;

/// Below this many elements the sequential path is used.
pub(crate) const MIN_PARALLEL_LEN: usize = 1 << 14;

pub(crate) fn sort_unstable_by<T, F>(v: &mut [T], cmp: F)
where
    T: Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if v.len() >= MIN_PARALLEL_LEN {
        v.par_sort_unstable_by(cmp);
    } else {
        v.sort_unstable_by(cmp);
    }
}

/// Positions `0..n` sorted by `cmp`.
pub(crate) fn argsort_by<F>(n: usize, cmp: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> Ordering + Sync,
{
    let mut order: Vec<usize> = (0..n).collect();
    sort_unstable_by(&mut order, |a, b| cmp(*a, *b));
    order
}

/// `(0..n).map(f).collect()`, spread over the rayon pool for large `n`.
pub(crate) fn map_indices<T, F>(n: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    if n >= MIN_PARALLEL_LEN {
        (0..n).into_par_iter().map(f).collect()
    } else {
        (0..n).map(f).collect()
    }
}
