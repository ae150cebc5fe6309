//! Configuration options for range alignment.
//!
//! This module provides a builder pattern for configuring how aligned
//! sequences are sized and how wedging value lists are produced.

use crate::error::{AlignError, Result};

/// Configuration for [`RangeAligner`](crate::RangeAligner) operations.
///
/// # Default Values
/// - `output_span`: [`OutputSpan::Observed`]
/// - `min_wedging_iterations`: 3
/// - `max_output_len`: None (no limit)
#[derive(Debug, Clone, PartialEq)]
pub struct AlignConfig {
    /// How many positions aligned sequences contain
    pub output_span: OutputSpan,

    /// Iteration counts below this collapse to the two endpoints
    pub min_wedging_iterations: usize,

    /// Upper bound on the length of any produced sequence
    pub max_output_len: Option<usize>,
}

/// Length contract for aligned sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputSpan {
    /// Positions `0..max_end`. The last merged coordinate is not emitted, so
    /// the value mapped there is cut. This is the behavior the comparison
    /// tools have always had.
    #[default]
    Observed,
    /// Positions `0..=max_end`. Every input value is kept.
    Inclusive,
}

impl OutputSpan {
    /// Output length for a merged axis ending at `max_end`.
    pub(crate) fn len_for(self, max_end: i64) -> u64 {
        match self {
            OutputSpan::Observed => max_end as u64,
            OutputSpan::Inclusive => max_end as u64 + 1,
        }
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        AlignConfig {
            output_span: OutputSpan::Observed,
            min_wedging_iterations: 3,
            max_output_len: None,
        }
    }
}

impl AlignConfig {
    /// Creates a new configuration builder.
    ///
    /// # Example
    /// ```
    /// use ncache_ranges::{AlignConfig, OutputSpan};
    ///
    /// let config = AlignConfig::builder()
    ///     .output_span(OutputSpan::Inclusive)
    ///     .max_output_len(10_000)
    ///     .build();
    /// assert_eq!(config.min_wedging_iterations, 3);
    /// ```
    pub fn builder() -> AlignConfigBuilder {
        AlignConfigBuilder::default()
    }

    /// Configuration that keeps every input value in aligned output.
    pub fn inclusive() -> Self {
        AlignConfig {
            output_span: OutputSpan::Inclusive,
            ..Default::default()
        }
    }

    /// Checks the configuration for values no operation can honour.
    pub fn validate(&self) -> Result<()> {
        if self.min_wedging_iterations < 2 {
            return Err(AlignError::InvalidConfig(format!(
                "min_wedging_iterations must be at least 2, got {}",
                self.min_wedging_iterations
            )));
        }
        if self.max_output_len == Some(0) {
            return Err(AlignError::InvalidConfig(
                "max_output_len must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Fails with [`AlignError::OutputTooLarge`] if `len` exceeds the limit.
    pub(crate) fn check_output_len(&self, len: u64) -> Result<()> {
        match self.max_output_len {
            Some(max) if len > max as u64 => Err(AlignError::OutputTooLarge { len, max }),
            _ => Ok(()),
        }
    }
}

/// Builder for constructing AlignConfig instances.
#[derive(Debug, Default)]
pub struct AlignConfigBuilder {
    config: AlignConfig,
}

impl AlignConfigBuilder {
    /// Sets the length contract for aligned sequences.
    ///
    /// Default: Observed
    pub fn output_span(mut self, span: OutputSpan) -> Self {
        self.config.output_span = span;
        self
    }

    /// Sets the iteration count below which wedging returns only endpoints.
    ///
    /// Default: 3
    pub fn min_wedging_iterations(mut self, iterations: usize) -> Self {
        assert!(
            iterations >= 2,
            "Minimum wedging iterations must be at least 2"
        );
        self.config.min_wedging_iterations = iterations;
        self
    }

    /// Limits the length of any produced sequence.
    ///
    /// Default: None
    pub fn max_output_len(mut self, len: usize) -> Self {
        assert!(len > 0, "Maximum output length must be positive");
        self.config.max_output_len = Some(len);
        self
    }

    /// Builds the final AlignConfig instance.
    pub fn build(self) -> AlignConfig {
        self.config
    }

    /// Builds the configuration, validating it first.
    pub fn try_build(self) -> Result<AlignConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
