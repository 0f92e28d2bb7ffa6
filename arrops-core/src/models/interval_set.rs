use num_traits::PrimInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ArropsError;

/// An ordered collection of half-open intervals `[start, end)`.
///
/// Intervals are stored as two parallel columns. The position of an interval in the
/// collection is its identity: every id reported by the interval algebra refers back to
/// it. `end >= start` is expected of the caller and is not checked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntervalSet<I> {
    starts: Vec<I>,
    ends: Vec<I>,
}

impl<I> IntervalSet<I>
where
    I: PrimInt,
{
    pub fn new() -> Self {
        IntervalSet {
            starts: Vec::new(),
            ends: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        IntervalSet {
            starts: Vec::with_capacity(capacity),
            ends: Vec::with_capacity(capacity),
        }
    }

    ///
    /// Build a collection from separate start and end columns.
    ///
    /// # Arguments
    /// - starts: interval starts, one per interval
    /// - ends: interval ends, aligned with `starts`
    pub fn from_columns(starts: Vec<I>, ends: Vec<I>) -> Result<Self, ArropsError> {
        if starts.len() != ends.len() {
            return Err(ArropsError::LengthMismatch {
                what: "interval ends",
                expected: starts.len(),
                found: ends.len(),
            });
        }
        Ok(IntervalSet { starts, ends })
    }

    pub fn push(&mut self, start: I, end: I) {
        self.starts.push(start);
        self.ends.push(end);
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    pub fn starts(&self) -> &[I] {
        &self.starts
    }

    pub fn ends(&self) -> &[I] {
        &self.ends
    }

    /// The interval at position `id`, if any.
    pub fn get(&self, id: usize) -> Option<(I, I)> {
        Some((*self.starts.get(id)?, *self.ends.get(id)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (I, I)> + '_ {
        self.starts.iter().copied().zip(self.ends.iter().copied())
    }

    /// Strict half-open overlap test between interval `id` and `[start, end)`.
    #[inline]
    pub fn overlaps(&self, id: usize, start: I, end: I) -> bool {
        self.starts[id] < end && start < self.ends[id]
    }
}

impl<I> FromIterator<(I, I)> for IntervalSet<I>
where
    I: PrimInt,
{
    fn from_iter<T: IntoIterator<Item = (I, I)>>(iter: T) -> Self {
        let (starts, ends) = iter.into_iter().unzip();
        IntervalSet { starts, ends }
    }
}

impl<I> From<Vec<(I, I)>> for IntervalSet<I>
where
    I: PrimInt,
{
    fn from(intervals: Vec<(I, I)>) -> Self {
        intervals.into_iter().collect()
    }
}

impl<I> From<&[(I, I)]> for IntervalSet<I>
where
    I: PrimInt,
{
    fn from(intervals: &[(I, I)]) -> Self {
        intervals.iter().copied().collect()
    }
}
