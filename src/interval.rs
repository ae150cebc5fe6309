//! Closed integer frame intervals.

use crate::error::{AlignError, Result};
use std::fmt;
use std::ops::RangeInclusive;

/// A closed frame interval `[start, end]`, inclusive of both ends.
///
/// Intervals can only be built through validating constructors, so
/// `start <= end` always holds. Ordering compares `start` first, then `end`,
/// which is the tie-break used to decide which of two intervals comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    /// Creates a new interval.
    ///
    /// # Errors
    /// Returns [`AlignError::InvalidInterval`] when `start > end`.
    ///
    /// # Example
    /// ```
    /// use ncache_ranges::Interval;
    ///
    /// let range = Interval::new(1001, 1100).unwrap();
    /// assert_eq!(range.extent(), 100);
    /// assert!(Interval::new(10, 5).is_err());
    /// ```
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(AlignError::InvalidInterval { start, end });
        }
        Ok(Interval { start, end })
    }

    /// First frame of the interval.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last frame of the interval.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of frames covered, `end - start + 1`.
    pub fn extent(&self) -> u64 {
        ((self.end as i128 - self.start as i128) as u64).saturating_add(1)
    }

    /// Returns true if the frame lies inside the interval.
    pub fn contains(&self, frame: i64) -> bool {
        self.start <= frame && frame <= self.end
    }

    /// Returns true if the two intervals share at least one frame.
    ///
    /// Intervals meeting on a single frame (`a.end == b.start`) overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start.max(other.start) <= self.end.min(other.end)
    }

    /// Iterates over every frame of the interval in ascending order.
    pub fn frames(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }

    /// Smallest interval covering both `self` and `other`.
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Moves the interval by `delta` frames.
    pub(crate) fn shifted(&self, delta: i64) -> Result<Self> {
        let overflow = || {
            AlignError::CoordinateOverflow(format!("shifting {self} by {delta}"))
        };
        Ok(Interval {
            start: self.start.checked_add(delta).ok_or_else(overflow)?,
            end: self.end.checked_add(delta).ok_or_else(overflow)?,
        })
    }

    /// Moves the interval so it starts at `start`, keeping its extent.
    pub(crate) fn moved_to(&self, start: i64) -> Result<Self> {
        let delta = start.checked_sub(self.start).ok_or_else(|| {
            AlignError::CoordinateOverflow(format!("moving {self} to {start}"))
        })?;
        self.shifted(delta)
    }

    /// Checks that a sequence of `len` elements fills the interval exactly.
    pub(crate) fn check_len(&self, len: usize) -> Result<()> {
        if len as u64 != self.extent() {
            return Err(AlignError::LengthMismatch {
                expected: self.extent(),
                actual: len,
            });
        }
        Ok(())
    }
}

impl TryFrom<(i64, i64)> for Interval {
    type Error = AlignError;

    fn try_from((start, end): (i64, i64)) -> Result<Self> {
        Interval::new(start, end)
    }
}

impl TryFrom<[i64; 2]> for Interval {
    type Error = AlignError;

    fn try_from([start, end]: [i64; 2]) -> Result<Self> {
        Interval::new(start, end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
