//! Frame numbers covered by several intervals.
//!
//! These are the labels shown under a side-by-side comparison: every frame
//! recorded by at least one job, with frames inside a gap left out.

use crate::config::AlignConfig;
use crate::error::{AlignError, Result};
use crate::interval::Interval;

/// Lists every frame covered by `range_a` or `range_b`, in ascending order.
///
/// Overlapping or touching intervals produce one continuous run. Otherwise
/// the two runs are listed back to back and no frame of the gap between
/// them is emitted.
///
/// # Example
/// ```
/// use ncache_ranges::{range_ranges, Interval};
///
/// let frames = range_ranges(Interval::new(10, 12)?, Interval::new(0, 2)?);
/// assert_eq!(frames, vec![0, 1, 2, 10, 11, 12]);
/// # Ok::<(), ncache_ranges::AlignError>(())
/// ```
pub fn range_ranges(range_a: Interval, range_b: Interval) -> Vec<i64> {
    let (first, second) = if range_a <= range_b {
        (range_a, range_b)
    } else {
        (range_b, range_a)
    };

    if first.end() >= second.start() {
        (first.start()..=first.end().max(second.end())).collect()
    } else {
        first.frames().chain(second.frames()).collect()
    }
}

/// Lists every frame covered by any of `ranges`, sorted and without
/// duplicates.
pub fn covered_coordinates(ranges: &[Interval]) -> Vec<i64> {
    merged_runs(ranges).iter().flat_map(Interval::frames).collect()
}

/// Same as [`covered_coordinates`], refusing outputs above the configured
/// maximum length before anything is allocated.
pub(crate) fn covered_coordinates_limited(
    ranges: &[Interval],
    config: &AlignConfig,
) -> Result<Vec<i64>> {
    let runs = merged_runs(ranges);
    let total = runs
        .iter()
        .try_fold(0u64, |acc, run| acc.checked_add(run.extent()))
        .ok_or_else(|| AlignError::CoordinateOverflow("covered frame count".to_string()))?;
    config.check_output_len(total)?;
    Ok(runs.iter().flat_map(Interval::frames).collect())
}

/// Merges overlapping intervals into disjoint runs sorted by start.
fn merged_runs(ranges: &[Interval]) -> Vec<Interval> {
    let mut sorted = ranges.to_vec();
    sorted.sort();

    let mut runs: Vec<Interval> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match runs.last_mut() {
            Some(last) if last.end() >= range.start() => *last = last.hull(&range),
            _ => runs.push(range),
        }
    }
    runs
}
