//! Alignment of frame sequences onto a shared axis.
//!
//! Each sequence is placed at the start of its normalized interval and
//! padded with `None` wherever it has no frame, so two or more cache jobs can
//! be played back position by position.

use crate::config::AlignConfig;
use crate::error::{AlignError, Result};
use crate::interval::Interval;
use crate::normalize::{normalize_all, normalize_ranges};

/// Aligns two sequences recorded over `range_a` and `range_b`.
///
/// Uses the observed output span: the aligned sequences have
/// `max(normalized ends)` positions, so a value mapped to the very last
/// merged coordinate is cut. Use
/// [`RangeAligner`](crate::RangeAligner) with
/// [`OutputSpan::Inclusive`](crate::OutputSpan::Inclusive) to keep it.
///
/// # Example
/// ```
/// use ncache_ranges::{overlap_lists_from_ranges, Interval};
///
/// let (a, b) = overlap_lists_from_ranges(
///     vec!['a', 'b', 'c'],
///     vec!['x', 'y'],
///     Interval::new(10, 12)?,
///     Interval::new(12, 13)?,
/// )?;
/// assert_eq!(a, vec![Some('a'), Some('b'), Some('c')]);
/// assert_eq!(b, vec![None, None, Some('x')]);
/// # Ok::<(), ncache_ranges::AlignError>(())
/// ```
///
/// # Errors
/// Returns [`AlignError::LengthMismatch`] when a sequence does not fill its
/// interval exactly.
pub fn overlap_lists_from_ranges<T>(
    elements_a: Vec<T>,
    elements_b: Vec<T>,
    range_a: Interval,
    range_b: Interval,
) -> Result<(Vec<Option<T>>, Vec<Option<T>>)> {
    overlap_pair(elements_a, elements_b, range_a, range_b, &AlignConfig::default())
}

/// Aligns any number of sequences with their recording intervals.
///
/// Returns one aligned sequence per input, all of the same length.
///
/// # Errors
/// Returns [`AlignError::CountMismatch`] when `arrays` and `ranges` differ in
/// length, and [`AlignError::LengthMismatch`] when a sequence does not fill
/// its interval.
pub fn overlap_arrays_from_ranges<T>(
    arrays: Vec<Vec<T>>,
    ranges: &[Interval],
) -> Result<Vec<Vec<Option<T>>>> {
    overlap_many(arrays, ranges, &AlignConfig::default())
}

pub(crate) fn overlap_pair<T>(
    elements_a: Vec<T>,
    elements_b: Vec<T>,
    range_a: Interval,
    range_b: Interval,
    config: &AlignConfig,
) -> Result<(Vec<Option<T>>, Vec<Option<T>>)> {
    range_a.check_len(elements_a.len())?;
    range_b.check_len(elements_b.len())?;

    let (norm_a, norm_b) = normalize_ranges(range_a, range_b)?;
    let len = output_len(config, norm_a.end().max(norm_b.end()))?;

    Ok((
        place(elements_a, norm_a, len),
        place(elements_b, norm_b, len),
    ))
}

pub(crate) fn overlap_many<T>(
    arrays: Vec<Vec<T>>,
    ranges: &[Interval],
    config: &AlignConfig,
) -> Result<Vec<Vec<Option<T>>>> {
    if arrays.len() != ranges.len() {
        return Err(AlignError::CountMismatch {
            arrays: arrays.len(),
            ranges: ranges.len(),
        });
    }
    for (array, range) in arrays.iter().zip(ranges) {
        range.check_len(array.len())?;
    }

    let normalized = normalize_all(ranges)?;
    let Some(max_end) = normalized.iter().map(Interval::end).max() else {
        return Ok(Vec::new());
    };
    let len = output_len(config, max_end)?;

    Ok(arrays
        .into_iter()
        .zip(normalized)
        .map(|(array, range)| place(array, range, len))
        .collect())
}

fn output_len(config: &AlignConfig, max_end: i64) -> Result<usize> {
    let len = config.output_span.len_for(max_end);
    config.check_output_len(len)?;
    usize::try_from(len).map_err(|_| {
        AlignError::CoordinateOverflow(format!("aligned output of {len} positions"))
    })
}

/// Places `elements` at `range.start()` in a buffer of `len` positions.
fn place<T>(elements: Vec<T>, range: Interval, len: usize) -> Vec<Option<T>> {
    let mut aligned: Vec<Option<T>> = std::iter::repeat_with(|| None).take(len).collect();
    let base = range.start() as usize;
    let total = elements.len();
    let mut kept = 0;

    for (slot, value) in aligned.iter_mut().skip(base).zip(elements) {
        *slot = Some(value);
        kept += 1;
    }

    if kept < total {
        log::debug!(
            "aligned output of {len} positions cuts {} of {total} values from {range}",
            total - kept
        );
    }
    aligned
}
