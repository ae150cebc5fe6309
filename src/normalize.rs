//! Normalization of frame intervals onto a shared zero-based axis.
//!
//! Two cache jobs rarely record the same frames. Normalizing moves the
//! earliest interval to start at frame 0 and pulls any interval separated by
//! a gap back against the frames before it, so the recorded data of both
//! jobs can be laid side by side without empty stretches in between.

use crate::error::{AlignError, Result};
use crate::interval::Interval;

/// Normalizes two intervals onto a zero-based axis and closes any gap.
///
/// The interval that sorts first (by start, then end) is moved to start at
/// 0 and the other one is moved by the same offset. If the two then neither
/// overlap nor touch, the second is pulled left so it starts one frame after
/// the first ends. Results come back in argument order.
///
/// # Example
/// ```
/// use ncache_ranges::{normalize_ranges, Interval};
///
/// let a = Interval::new(50, 90)?;
/// let b = Interval::new(100, 110)?;
/// let (a, b) = normalize_ranges(a, b)?;
/// assert_eq!((a.start(), a.end()), (0, 40));
/// assert_eq!((b.start(), b.end()), (41, 51));
/// # Ok::<(), ncache_ranges::AlignError>(())
/// ```
///
/// # Errors
/// Returns [`AlignError::CoordinateOverflow`](crate::AlignError) when the
/// offset pushes a coordinate out of the `i64` domain.
pub fn normalize_ranges(range_a: Interval, range_b: Interval) -> Result<(Interval, Interval)> {
    let in_order = range_a <= range_b;
    let (first, second) = if in_order {
        (range_a, range_b)
    } else {
        (range_b, range_a)
    };

    let offset = first.start();
    let first = first.moved_to(0)?;
    let mut second = second.moved_to(relative_start(&second, offset)?)?;

    if first.end() < second.start() {
        let closed = second.moved_to(first.end() + 1)?;
        if closed != second {
            log::debug!(
                "closing gap of {} frames between {} and {}",
                second.start() - first.end() - 1,
                first,
                second
            );
        }
        second = closed;
    }

    if in_order {
        Ok((first, second))
    } else {
        Ok((second, first))
    }
}

/// Normalizes any number of intervals onto a zero-based axis.
///
/// Intervals are swept in sorted order after the common offset. Whenever an
/// interval starts past the furthest end seen so far, it is pulled left to
/// start right after that end, and the pull carries over to every interval
/// that follows. Output keeps the input order; for two intervals the result
/// is the same as [`normalize_ranges`].
pub fn normalize_all(ranges: &[Interval]) -> Result<Vec<Interval>> {
    let mut order: Vec<usize> = (0..ranges.len()).collect();
    order.sort_by_key(|&i| (ranges[i], i));

    let Some(&leader) = order.first() else {
        return Ok(Vec::new());
    };
    let offset = ranges[leader].start();

    let mut normalized = ranges.to_vec();
    let mut pulled: i64 = 0;
    let mut reach: Option<i64> = None;

    for &i in &order {
        let range = ranges[i];
        let mut placed = range.moved_to(relative_start(&range, offset)? - pulled)?;
        if let Some(reach) = reach {
            if placed.start() > reach.saturating_add(1) {
                let gap = placed.start() - reach - 1;
                log::debug!("closing gap of {gap} frames before {range}");
                pulled += gap;
                placed = placed.moved_to(reach + 1)?;
            }
        }
        reach = Some(reach.map_or(placed.end(), |r| r.max(placed.end())));
        normalized[i] = placed;
    }

    log::trace!("normalized {} ranges, {} frames pulled", ranges.len(), pulled);
    Ok(normalized)
}

fn relative_start(range: &Interval, offset: i64) -> Result<i64> {
    range.start().checked_sub(offset).ok_or_else(|| {
        AlignError::CoordinateOverflow(format!("offsetting {range} by {offset}"))
    })
}
