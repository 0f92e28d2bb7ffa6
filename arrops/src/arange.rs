//! Concatenated integer ranges.
//!
//! [`arange_multi`] turns per-group `(start, stop)` or `(start, length)` pairs into one flat
//! vector `[start_0, start_0 + 1, .., start_1, start_1 + 1, ..]`. Every ragged expansion in
//! this crate (overlap candidate windows, nearest-neighbor windows, per-query truncation) goes
//! through it.
//!
//! The expansion never loops per group. Each output position `j` is mapped to its owning
//! group `g` (a repeated index array) and the within-group counter is `j - offset[g]`, where
//! `offset` is the exclusive prefix sum of the group lengths. The value is then
//! `start[g] + counter`, which makes every output element independent of the others.

use num_traits::PrimInt;

use arrops_core::errors::ArropsError;

use crate::par;

///
/// Create concatenated ranges of integers for multiple starts.
///
/// Exactly one of `stops` or `lengths` must be given. Groups with a length of zero (or a
/// stop at or before their start) contribute nothing.
///
/// # Arguments
/// - starts: start of each range
/// - stops: exclusive stop of each range
/// - lengths: length of each range
///
/// # Example
/// ```
/// use arrops::arange_multi;
///
/// let starts = [1i64, 3, 4, 6];
/// let stops = [1i64, 5, 7, 6];
/// let ranges = arange_multi(&starts, Some(&stops), None).unwrap();
/// assert_eq!(ranges, vec![3, 4, 4, 5, 6]);
/// ```
pub fn arange_multi<I>(
    starts: &[I],
    stops: Option<&[I]>,
    lengths: Option<&[I]>,
) -> Result<Vec<I>, ArropsError>
where
    I: PrimInt + Send + Sync,
{
    let lengths = match (stops, lengths) {
        (Some(stops), None) => {
            check_len("stops", starts.len(), stops.len())?;
            starts
                .iter()
                .zip(stops)
                .enumerate()
                .map(|(group, (start, stop))| {
                    if stop <= start {
                        return Ok(0);
                    }
                    let length = stop.checked_sub(start).ok_or_else(|| too_long(group))?;
                    group_len(group, length)
                })
                .collect::<Result<Vec<_>, _>>()?
        }
        (None, Some(lengths)) => {
            check_len("lengths", starts.len(), lengths.len())?;
            lengths
                .iter()
                .enumerate()
                .map(|(group, length)| group_len(group, *length))
                .collect::<Result<Vec<_>, _>>()?
        }
        _ => {
            return Err(ArropsError::InvalidArgument(
                "Either stops or lengths must be provided!".to_string(),
            ));
        }
    };

    Ok(expand(starts, &lengths))
}

///
/// Create concatenated ranges that all begin at the same `start`.
///
/// # Arguments
/// - start: shared start of every range
/// - lengths: length of each range
pub fn arange_multi_from<I>(start: I, lengths: &[I]) -> Result<Vec<I>, ArropsError>
where
    I: PrimInt + Send + Sync,
{
    let starts = vec![start; lengths.len()];
    arange_multi(&starts, None, Some(lengths))
}

/// Group index of every output position: group `g` repeated `lengths[g]` times.
pub fn repeat_owners(lengths: &[usize]) -> Vec<usize> {
    let total = lengths.iter().sum();
    let mut owners = Vec::with_capacity(total);
    for (group, length) in lengths.iter().enumerate() {
        owners.extend(std::iter::repeat_n(group, *length));
    }
    owners
}

/// Expand validated lengths. Every length must be representable in `I`.
pub(crate) fn expand<I>(starts: &[I], lengths: &[usize]) -> Vec<I>
where
    I: PrimInt + Send + Sync,
{
    let owners = repeat_owners(lengths);

    let mut offsets = Vec::with_capacity(lengths.len());
    let mut running = 0usize;
    for length in lengths {
        offsets.push(running);
        running += *length;
    }

    par::map_indices(owners.len(), |j| {
        let group = owners[j];
        // counter < lengths[group], which fits in I
        let counter = I::from(j - offsets[group]).unwrap_or_else(I::zero);
        starts[group] + counter
    })
}

fn group_len<I>(group: usize, length: I) -> Result<usize, ArropsError>
where
    I: PrimInt,
{
    if length <= I::zero() {
        return Ok(0);
    }
    length.to_usize().ok_or_else(|| too_long(group))
}

fn too_long(group: usize) -> ArropsError {
    ArropsError::InvalidArgument(format!(
        "Range {} is longer than the coordinate type can represent",
        group
    ))
}

fn check_len(what: &'static str, expected: usize, found: usize) -> Result<(), ArropsError> {
    if expected != found {
        return Err(ArropsError::LengthMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}
