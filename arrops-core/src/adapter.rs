//! Conversions from caller-facing input into the positional sequences the algebra works on.
//!
//! The interval algebra identifies every interval by its position in the input. Callers
//! often hold data that carries its own row labels (a filtered table column, the rows of one
//! contig pulled out of a whole file). Those labels are dropped on the way in, and this
//! module is where that is made explicit: [`IndexedColumn::into_positional`] reports a
//! non-trivial index according to an [`IndexPolicy`], and [`ContigPartition`] keeps the
//! source row numbers so positional results can be mapped back.

use fxhash::FxHashMap as HashMap;

use log::warn;
use num_traits::PrimInt;

use crate::errors::AdapterError;
use crate::models::{BedRecord, IntervalSet};

/// What to do when a column's labels are about to be discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Drop the index silently.
    Ignore,
    /// Drop the index and log a warning.
    #[default]
    Warn,
    /// Refuse to drop a non-trivial index.
    Strict,
}

/// A column of values carrying one row label per value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedColumn<V> {
    index: Vec<usize>,
    values: Vec<V>,
}

impl<V> IndexedColumn<V> {
    pub fn new(index: Vec<usize>, values: Vec<V>) -> Result<Self, AdapterError> {
        if index.len() != values.len() {
            return Err(AdapterError::LengthMismatch {
                index: index.len(),
                values: values.len(),
            });
        }
        Ok(IndexedColumn { index, values })
    }

    /// A column labeled `0..n`.
    pub fn positional(values: Vec<V>) -> Self {
        IndexedColumn {
            index: (0..values.len()).collect(),
            values,
        }
    }

    /// The first position whose label is not the position itself.
    pub fn first_divergence(&self) -> Option<(usize, usize)> {
        self.index
            .iter()
            .enumerate()
            .find(|(position, label)| *position != **label)
            .map(|(position, label)| (position, *label))
    }

    ///
    /// Drop the index and keep the values in their current order.
    ///
    /// # Arguments
    /// - policy: how to report an index that differs from `0..n`
    pub fn into_positional(self, policy: IndexPolicy) -> Result<Vec<V>, AdapterError> {
        if let Some((position, label)) = self.first_divergence() {
            match policy {
                IndexPolicy::Ignore => {}
                IndexPolicy::Warn => {
                    warn!(
                        "Column index is not positional (label {} at position {}); it will be ignored",
                        label, position
                    );
                }
                IndexPolicy::Strict => {
                    return Err(AdapterError::NonTrivialIndex { position, label });
                }
            }
        }
        Ok(self.values)
    }
}

///
/// Build an [`IntervalSet`] from labeled start and end columns.
///
/// # Arguments
/// - starts: labeled interval starts
/// - ends: labeled interval ends
/// - policy: how to report labels that are about to be discarded
pub fn interval_set_from_indexed<I>(
    starts: IndexedColumn<I>,
    ends: IndexedColumn<I>,
    policy: IndexPolicy,
) -> Result<IntervalSet<I>, AdapterError>
where
    I: PrimInt,
{
    let starts = starts.into_positional(policy)?;
    let ends = ends.into_positional(policy)?;
    Ok(IntervalSet::from_columns(starts, ends)?)
}

/// The records of one contig, in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContigGroup {
    pub contig: String,
    /// Row number in the source of each interval, aligned with `intervals`.
    pub rows: Vec<usize>,
    pub intervals: IntervalSet<i64>,
}

impl ContigGroup {
    /// Map a positional id inside this group back to its source row.
    pub fn row(&self, id: usize) -> usize {
        self.rows[id]
    }
}

///
/// Records split by contig, contigs kept in order of first appearance.
///
/// The interval algebra compares coordinates only, so records on different contigs must
/// never meet in one call. Partitioning is the caller's job; this type does it and keeps
/// enough bookkeeping to translate per-contig ids back to source rows.
///
#[derive(Clone, Debug, Default)]
pub struct ContigPartition {
    groups: Vec<ContigGroup>,
    lookup: HashMap<String, usize>,
}

impl ContigPartition {
    pub fn from_records(records: &[BedRecord]) -> Self {
        let mut partition = ContigPartition::default();
        for (row, record) in records.iter().enumerate() {
            let slot = match partition.lookup.get(&record.chr) {
                Some(slot) => *slot,
                None => {
                    partition.groups.push(ContigGroup {
                        contig: record.chr.clone(),
                        rows: Vec::new(),
                        intervals: IntervalSet::new(),
                    });
                    let slot = partition.groups.len() - 1;
                    partition.lookup.insert(record.chr.clone(), slot);
                    slot
                }
            };
            let group = &mut partition.groups[slot];
            group.rows.push(row);
            group.intervals.push(record.start, record.end);
        }
        partition
    }

    pub fn get(&self, contig: &str) -> Option<&ContigGroup> {
        self.lookup.get(contig).map(|slot| &self.groups[*slot])
    }

    pub fn groups(&self) -> &[ContigGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ArropsError;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn make_record(chr: &str, start: i64, end: i64) -> BedRecord {
        BedRecord {
            chr: chr.to_string(),
            start,
            end,
            rest: None,
        }
    }

    #[rstest]
    #[case(IndexPolicy::Ignore)]
    #[case(IndexPolicy::Warn)]
    #[case(IndexPolicy::Strict)]
    fn test_trivial_index_passes_every_policy(#[case] policy: IndexPolicy) {
        let column = IndexedColumn::positional(vec![10i64, 20, 30]);
        assert_eq!(column.first_divergence(), None);
        assert_eq!(column.into_positional(policy).unwrap(), vec![10, 20, 30]);
    }

    #[rstest]
    fn test_strict_policy_rejects_relabeled_column() {
        let column = IndexedColumn::new(vec![0, 5, 6], vec![1i64, 2, 3]).unwrap();
        assert_eq!(column.first_divergence(), Some((1, 5)));
        assert_eq!(
            column.into_positional(IndexPolicy::Strict),
            Err(AdapterError::NonTrivialIndex {
                position: 1,
                label: 5
            })
        );
    }

    #[rstest]
    fn test_warn_policy_keeps_values_in_order() {
        let column = IndexedColumn::new(vec![7, 3], vec![1i64, 2]).unwrap();
        assert_eq!(column.into_positional(IndexPolicy::Warn).unwrap(), vec![1, 2]);
    }

    #[rstest]
    fn test_new_rejects_ragged_column() {
        assert_eq!(
            IndexedColumn::new(vec![0, 1], vec![1i64]),
            Err(AdapterError::LengthMismatch {
                index: 2,
                values: 1
            })
        );
    }

    #[rstest]
    fn test_interval_set_from_indexed_checks_lengths() {
        let starts = IndexedColumn::positional(vec![1i64, 2]);
        let ends = IndexedColumn::positional(vec![3i64]);
        let result = interval_set_from_indexed(starts, ends, IndexPolicy::Ignore);
        assert_eq!(
            result,
            Err(AdapterError::Interval(ArropsError::LengthMismatch {
                what: "interval ends",
                expected: 2,
                found: 1
            }))
        );
    }

    #[rstest]
    fn test_partition_keeps_first_seen_order_and_rows() {
        let records = vec![
            make_record("chr2", 0, 10),
            make_record("chr1", 5, 8),
            make_record("chr2", 20, 30),
        ];
        let partition = ContigPartition::from_records(&records);

        assert_eq!(partition.len(), 2);
        assert_eq!(partition.groups()[0].contig, "chr2");
        assert_eq!(partition.groups()[1].contig, "chr1");

        let chr2 = partition.get("chr2").unwrap();
        assert_eq!(chr2.rows, vec![0, 2]);
        assert_eq!(chr2.intervals.iter().collect::<Vec<_>>(), vec![(0, 10), (20, 30)]);
        assert_eq!(chr2.row(1), 2);
        assert!(partition.get("chrX").is_none());
    }
}
