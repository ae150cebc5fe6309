//! Side-by-side playback of two cache jobs.
//!
//! A [`Comparison`] holds the aligned frames of two jobs plus the frame
//! numbers to display under them, and a cursor that loops over the
//! positions the way the comparison viewer plays them back.

use crate::error::{AlignError, Result};
use crate::interval::Interval;
use crate::sequence::FrameSequence;

/// One job's frames as handed to [`RangeAligner::compare`](crate::RangeAligner::compare).
#[derive(Debug, Clone, PartialEq)]
pub struct Labelled<T> {
    /// Name shown above the job's frames
    pub name: String,
    /// One element per frame of `range`
    pub elements: Vec<T>,
    /// Frames the elements were recorded over
    pub range: Interval,
}

impl<T> Labelled<T> {
    pub fn new(name: impl Into<String>, elements: Vec<T>, range: Interval) -> Self {
        Labelled {
            name: name.into(),
            elements,
            range,
        }
    }

    /// Takes the recorded part of a frame sequence.
    ///
    /// # Errors
    /// Returns [`AlignError::EmptySequence`] if nothing was recorded yet.
    pub fn from_sequence(name: impl Into<String>, sequence: FrameSequence<T>) -> Result<Self> {
        let name = name.into();
        match sequence.into_parts() {
            Some((elements, range)) => Ok(Labelled::new(name, elements, range)),
            None => Err(AlignError::EmptySequence(name)),
        }
    }
}

/// The content of one playback position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonFrame<'a, T> {
    pub position: usize,
    /// Frame number label, absent past the end of the label list
    pub frame: Option<i64>,
    pub left: Option<&'a T>,
    pub right: Option<&'a T>,
}

/// Two aligned jobs with frame labels and a looping cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<T> {
    names: (String, String),
    frames: Vec<i64>,
    left: Vec<Option<T>>,
    right: Vec<Option<T>>,
    position: usize,
}

impl<T> Comparison<T> {
    pub(crate) fn new(
        names: (String, String),
        frames: Vec<i64>,
        left: Vec<Option<T>>,
        right: Vec<Option<T>>,
    ) -> Self {
        debug_assert_eq!(left.len(), right.len());
        Comparison {
            names,
            frames,
            left,
            right,
            position: 0,
        }
    }

    /// Number of playback positions.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn names(&self) -> (&str, &str) {
        (&self.names.0, &self.names.1)
    }

    /// Frame number labels, every frame covered by either job.
    pub fn frames(&self) -> &[i64] {
        &self.frames
    }

    pub fn left(&self) -> &[Option<T>] {
        &self.left
    }

    pub fn right(&self) -> &[Option<T>] {
        &self.right
    }

    pub fn get(&self, position: usize) -> Option<ComparisonFrame<'_, T>> {
        if position >= self.len() {
            return None;
        }
        Some(ComparisonFrame {
            position,
            frame: self.frames.get(position).copied(),
            left: self.left[position].as_ref(),
            right: self.right[position].as_ref(),
        })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Frame under the cursor, `None` for an empty comparison.
    pub fn current(&self) -> Option<ComparisonFrame<'_, T>> {
        self.get(self.position)
    }

    /// Moves the cursor to `position`.
    ///
    /// # Errors
    /// Returns [`AlignError::PositionOutOfBounds`] if there is no such
    /// position.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position >= self.len() {
            return Err(AlignError::PositionOutOfBounds {
                position,
                len: self.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Steps the cursor forward, looping back to the first position after
    /// the last one, and returns the new current frame.
    pub fn advance(&mut self) -> Option<ComparisonFrame<'_, T>> {
        if self.is_empty() {
            return None;
        }
        self.position = (self.position + 1) % self.len();
        self.current()
    }

    /// Iterates over every position from the first, ignoring the cursor.
    pub fn iter(&self) -> impl Iterator<Item = ComparisonFrame<'_, T>> + '_ {
        (0..self.len()).filter_map(move |position| self.get(position))
    }
}
