//! # ncache-ranges: Frame Range Alignment for Simulation Cache Comparison
//!
//! This library holds the frame-range logic behind comparing simulation
//! cache versions (nCloth and hairSystem "ncache" jobs) side by side.
//!
//! ## Overview
//!
//! ncache-ranges allows you to:
//! - Normalize the frame ranges of two or more cache jobs onto a shared
//!   zero-based axis, closing any gap between them
//! - Align the recorded frames of those jobs, padding missing frames with `None`
//! - List the frame numbers covered by the jobs for labelling
//! - Build the linear attribute values used for wedging runs
//! - Record frames as a job progresses and play two jobs back together
//!
//! ## Example Usage
//!
//! ```
//! # use anyhow::Result;
//! # fn main() -> Result<()> {
//! use ncache_ranges::{Interval, Labelled, RangeAligner};
//!
//! let aligner = RangeAligner::default();
//!
//! let v001 = Labelled::new("cloth_v001", vec!["a"; 21], Interval::new(20, 40)?);
//! let v002 = Labelled::new("cloth_v002", vec!["b"; 16], Interval::new(50, 65)?);
//! let mut comparison = aligner.compare(v001, v002)?;
//!
//! assert_eq!(comparison.len(), 36);
//! let first = comparison.current().unwrap();
//! assert_eq!(first.frame, Some(20));
//! assert_eq!((first.left, first.right), (Some(&"a"), None));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `interval`: validated closed frame intervals
//! - `normalize`: offset and gap closing onto a zero-based axis
//! - `overlap`: alignment of frame sequences
//! - `coverage`: covered frame numbers
//! - `wedging`: wedging value lists
//! - `sequence` and `comparison`: recording buffers and side-by-side playback
//! - `config`: alignment options
//! - `error`: error types for the library
//!
//! ## Thread Safety
//!
//! Every operation is pure. A [`RangeAligner`] can be shared freely between
//! threads; a [`Comparison`] owns its playback cursor.

pub mod comparison;
pub mod config;
pub mod coverage;
pub mod error;
pub mod interval;
pub mod normalize;
pub mod overlap;
pub mod sequence;
pub mod wedging;

use error::Result;

pub use comparison::{Comparison, ComparisonFrame, Labelled};
pub use config::{AlignConfig, AlignConfigBuilder, OutputSpan};
pub use coverage::{covered_coordinates, range_ranges};
pub use error::AlignError;
pub use interval::Interval;
pub use normalize::{normalize_all, normalize_ranges};
pub use overlap::{overlap_arrays_from_ranges, overlap_lists_from_ranges};
pub use sequence::FrameSequence;
pub use wedging::{compute_wedging_values, MIN_WEDGING_ITERATIONS};

/// Main interface to the range alignment operations.
///
/// The free functions of this crate use the default contract. A
/// `RangeAligner` applies an [`AlignConfig`] instead, which can switch to
/// inclusive output lengths, change the wedging threshold, or cap output
/// sizes.
#[derive(Debug, Clone, Default)]
pub struct RangeAligner {
    config: AlignConfig,
}

impl RangeAligner {
    /// Creates a new aligner with the given configuration.
    ///
    /// # Example
    /// ```
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// use ncache_ranges::{AlignConfig, OutputSpan, RangeAligner};
    ///
    /// let config = AlignConfig::builder()
    ///     .output_span(OutputSpan::Inclusive)
    ///     .max_output_len(100_000)
    ///     .build();
    ///
    /// let aligner = RangeAligner::new(config)?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns [`AlignError::InvalidConfig`] for a configuration that fails
    /// [`AlignConfig::validate`].
    pub fn new(config: AlignConfig) -> Result<Self> {
        config.validate()?;
        Ok(RangeAligner { config })
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Normalizes two intervals, see [`normalize_ranges`].
    pub fn normalize(&self, range_a: Interval, range_b: Interval) -> Result<(Interval, Interval)> {
        normalize_ranges(range_a, range_b)
    }

    /// Normalizes any number of intervals, see [`normalize_all`].
    pub fn normalize_all(&self, ranges: &[Interval]) -> Result<Vec<Interval>> {
        normalize_all(ranges)
    }

    /// Aligns two sequences with their recording intervals.
    ///
    /// Same as [`overlap_lists_from_ranges`] with the configured output
    /// span and size limit.
    pub fn overlap<T>(
        &self,
        elements_a: Vec<T>,
        elements_b: Vec<T>,
        range_a: Interval,
        range_b: Interval,
    ) -> Result<(Vec<Option<T>>, Vec<Option<T>>)> {
        overlap::overlap_pair(elements_a, elements_b, range_a, range_b, &self.config)
    }

    /// Aligns any number of sequences, see [`overlap_arrays_from_ranges`].
    pub fn overlap_many<T>(
        &self,
        arrays: Vec<Vec<T>>,
        ranges: &[Interval],
    ) -> Result<Vec<Vec<Option<T>>>> {
        overlap::overlap_many(arrays, ranges, &self.config)
    }

    /// Frame numbers covered by two intervals, see [`range_ranges`].
    pub fn coordinates(&self, range_a: Interval, range_b: Interval) -> Result<Vec<i64>> {
        coverage::covered_coordinates_limited(&[range_a, range_b], &self.config)
    }

    /// Frame numbers covered by any of `ranges`, see [`covered_coordinates`].
    pub fn coordinates_of(&self, ranges: &[Interval]) -> Result<Vec<i64>> {
        coverage::covered_coordinates_limited(ranges, &self.config)
    }

    /// Wedging values using the configured iteration threshold.
    pub fn wedging_values(
        &self,
        start_value: f64,
        end_value: f64,
        iteration_count: usize,
    ) -> Result<Vec<f64>> {
        self.config.check_output_len(iteration_count as u64)?;
        wedging::wedging_values(
            start_value,
            end_value,
            iteration_count,
            self.config.min_wedging_iterations,
        )
    }

    /// Aligns two jobs for side-by-side playback.
    ///
    /// Frame labels come from the original, un-normalized ranges.
    pub fn compare<T>(&self, left: Labelled<T>, right: Labelled<T>) -> Result<Comparison<T>> {
        let (aligned_left, aligned_right) =
            self.overlap(left.elements, right.elements, left.range, right.range)?;
        let frames = self.coordinates(left.range, right.range)?;
        log::trace!(
            "comparing {} {} with {} {}: {} positions, {} frame labels",
            left.name,
            left.range,
            right.name,
            right.range,
            aligned_left.len(),
            frames.len()
        );
        Ok(Comparison::new(
            (left.name, right.name),
            frames,
            aligned_left,
            aligned_right,
        ))
    }

    /// Aligns the recorded part of two frame sequences for playback.
    ///
    /// # Errors
    /// Returns [`AlignError::EmptySequence`] if either sequence has no frame
    /// recorded yet.
    pub fn compare_sequences<T>(
        &self,
        left_name: impl Into<String>,
        left: FrameSequence<T>,
        right_name: impl Into<String>,
        right: FrameSequence<T>,
    ) -> Result<Comparison<T>> {
        self.compare(
            Labelled::from_sequence(left_name, left)?,
            Labelled::from_sequence(right_name, right)?,
        )
    }
}
