//! Frame buffers filled while a cache job records.

use crate::error::{AlignError, Result};
use crate::interval::Interval;

/// Frames recorded so far by one cache job.
///
/// The job declares the range it will simulate up front and frames arrive
/// one at a time, in order, starting at the first frame of that range.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSequence<T> {
    range: Interval,
    values: Vec<T>,
}

impl<T> FrameSequence<T> {
    /// Creates an empty sequence expecting every frame of `range`.
    pub fn new(range: Interval) -> Self {
        FrameSequence {
            range,
            values: Vec::new(),
        }
    }

    /// Records the next frame and returns its frame number.
    ///
    /// # Errors
    /// Returns [`AlignError::SequenceFull`] once every frame of the declared
    /// range has been recorded.
    pub fn push(&mut self, value: T) -> Result<i64> {
        let frame = self
            .next_frame()
            .ok_or(AlignError::SequenceFull { range: self.range })?;
        self.values.push(value);
        Ok(frame)
    }

    /// Frame number the next pushed value will get, if any is left.
    pub fn next_frame(&self) -> Option<i64> {
        if self.is_full() {
            return None;
        }
        Some(self.range.start() + self.values.len() as i64)
    }

    /// Returns true once every frame of the declared range is recorded.
    pub fn is_full(&self) -> bool {
        self.values.len() as u64 >= self.range.extent()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The range the job was started with.
    pub fn declared_range(&self) -> Interval {
        self.range
    }

    /// The frames actually recorded, `None` before the first one.
    pub fn recorded_range(&self) -> Option<Interval> {
        let last = self.values.len().checked_sub(1)?;
        Interval::new(self.range.start(), self.range.start() + last as i64).ok()
    }

    /// Value recorded for `frame`, if that frame has been recorded.
    pub fn get(&self, frame: i64) -> Option<&T> {
        let offset = frame.checked_sub(self.range.start())?;
        self.values.get(usize::try_from(offset).ok()?)
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Splits into the recorded values and the range they cover.
    pub fn into_parts(self) -> Option<(Vec<T>, Interval)> {
        let range = self.recorded_range()?;
        Some((self.values, range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(start: i64, end: i64) -> FrameSequence<&'static str> {
        FrameSequence::new(Interval::new(start, end).unwrap())
    }

    #[test]
    fn test_push_assigns_frames_in_order() {
        let mut seq = sequence(1001, 1003);
        assert_eq!(seq.push("a").unwrap(), 1001);
        assert_eq!(seq.push("b").unwrap(), 1002);
        assert_eq!(seq.next_frame(), Some(1003));
        assert_eq!(seq.push("c").unwrap(), 1003);
        assert!(seq.is_full());
        assert_eq!(seq.next_frame(), None);
    }

    #[test]
    fn test_push_past_declared_range_fails() {
        let mut seq = sequence(5, 5);
        seq.push("only").unwrap();
        assert_eq!(
            seq.push("extra"),
            Err(AlignError::SequenceFull {
                range: Interval::new(5, 5).unwrap()
            })
        );
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_recorded_range_tracks_progress() {
        let mut seq = sequence(-2, 10);
        assert!(seq.is_empty());
        assert_eq!(seq.recorded_range(), None);
        seq.push("a").unwrap();
        seq.push("b").unwrap();
        assert_eq!(seq.recorded_range(), Some(Interval::new(-2, -1).unwrap()));
        assert_eq!(seq.declared_range(), Interval::new(-2, 10).unwrap());
    }

    #[test]
    fn test_get_by_frame() {
        let mut seq = sequence(10, 20);
        seq.push("a").unwrap();
        seq.push("b").unwrap();
        assert_eq!(seq.get(11), Some(&"b"));
        assert_eq!(seq.get(12), None);
        assert_eq!(seq.get(9), None);
        assert_eq!(seq.get(i64::MIN), None);
    }

    #[test]
    fn test_into_parts() {
        let mut seq = sequence(3, 8);
        assert!(seq.clone().into_parts().is_none());
        seq.push("a").unwrap();
        let (values, range) = seq.into_parts().unwrap();
        assert_eq!(values, vec!["a"]);
        assert_eq!(range, Interval::new(3, 3).unwrap());
    }
}
