//! Error types for the ncache-ranges library.

use thiserror::Error;

use crate::interval::Interval;

/// Result type alias for range operations.
pub type Result<T> = std::result::Result<T, AlignError>;

/// Errors that can occur while aligning frame ranges.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlignError {
    /// Interval whose start lies after its end
    #[error("Invalid interval: start {start} is greater than end {end}")]
    InvalidInterval { start: i64, end: i64 },

    /// Sequence length differs from the extent of its interval
    #[error("Sequence has {actual} elements but its interval covers {expected} frames")]
    LengthMismatch { expected: u64, actual: usize },

    /// Different number of sequences and intervals
    #[error("Got {arrays} sequences for {ranges} intervals")]
    CountMismatch { arrays: usize, ranges: usize },

    /// Arithmetic on frame coordinates left the i64 domain
    #[error("Coordinate overflow: {0}")]
    CoordinateOverflow(String),

    /// Wedging bound is NaN or infinite
    #[error("Invalid wedging bound: {0}")]
    InvalidWedgingBound(f64),

    /// Output would exceed the configured maximum length
    #[error("Output of {len} positions exceeds the configured maximum of {max}")]
    OutputTooLarge { len: u64, max: usize },

    /// Every frame of the declared range is already recorded
    #[error("Frame sequence over {range} is already full")]
    SequenceFull { range: Interval },

    /// Nothing recorded yet for the named job
    #[error("No frames recorded for {0}")]
    EmptySequence(String),

    /// Playback cursor moved outside the comparison
    #[error("Position {position} is out of bounds for a comparison of {len} frames")]
    PositionOutOfBounds { position: usize, len: usize },

    /// Invalid configuration parameter
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
