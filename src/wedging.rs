//! Attribute values for wedging runs.
//!
//! A wedge runs the same simulation several times while one attribute walks
//! from a start value to an end value.

use crate::error::{AlignError, Result};

/// Iteration counts below this return just the two bounds.
pub const MIN_WEDGING_ITERATIONS: usize = 3;

/// Builds `iteration_count` evenly spaced values from `start_value` to
/// `end_value`, both included exactly.
///
/// Fewer than three iterations collapse to `[start_value, end_value]`.
/// Descending bounds give a descending list.
///
/// # Example
/// ```
/// use ncache_ranges::compute_wedging_values;
///
/// assert_eq!(compute_wedging_values(0.0, 10.0, 2)?, vec![0.0, 10.0]);
/// assert_eq!(
///     compute_wedging_values(0.0, 10.0, 5)?,
///     vec![0.0, 2.5, 5.0, 7.5, 10.0]
/// );
/// # Ok::<(), ncache_ranges::AlignError>(())
/// ```
///
/// # Errors
/// Returns [`AlignError::InvalidWedgingBound`] if a bound is NaN or infinite.
pub fn compute_wedging_values(
    start_value: f64,
    end_value: f64,
    iteration_count: usize,
) -> Result<Vec<f64>> {
    wedging_values(start_value, end_value, iteration_count, MIN_WEDGING_ITERATIONS)
}

pub(crate) fn wedging_values(
    start_value: f64,
    end_value: f64,
    iteration_count: usize,
    min_iterations: usize,
) -> Result<Vec<f64>> {
    for bound in [start_value, end_value] {
        if !bound.is_finite() {
            return Err(AlignError::InvalidWedgingBound(bound));
        }
    }

    if iteration_count < min_iterations || iteration_count < 2 {
        return Ok(vec![start_value, end_value]);
    }

    let last = iteration_count - 1;
    let step = (end_value - start_value) / last as f64;
    Ok((0..iteration_count)
        .map(|i| {
            if i == last {
                end_value
            } else {
                start_value + step * i as f64
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_few_iterations_collapse_to_bounds() {
        assert_eq!(compute_wedging_values(0.0, 10.0, 0).unwrap(), vec![0.0, 10.0]);
        assert_eq!(compute_wedging_values(0.0, 10.0, 2).unwrap(), vec![0.0, 10.0]);
    }

    #[test]
    fn test_three_iterations_include_midpoint() {
        assert_eq!(
            compute_wedging_values(0.0, 10.0, 3).unwrap(),
            vec![0.0, 5.0, 10.0]
        );
    }

    #[test]
    fn test_evenly_spaced() {
        assert_eq!(
            compute_wedging_values(0.0, 10.0, 5).unwrap(),
            vec![0.0, 2.5, 5.0, 7.5, 10.0]
        );
    }

    #[test]
    fn test_descending_bounds() {
        assert_eq!(
            compute_wedging_values(1.0, -1.0, 5).unwrap(),
            vec![1.0, 0.5, 0.0, -0.5, -1.0]
        );
    }

    #[test]
    fn test_end_value_is_exact() {
        let values = compute_wedging_values(0.1, 0.7, 7).unwrap();
        assert_eq!(values.len(), 7);
        assert_eq!(values[0], 0.1);
        assert_eq!(values[6], 0.7);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_non_finite_bounds_are_rejected() {
        assert!(matches!(
            compute_wedging_values(f64::NAN, 1.0, 4),
            Err(AlignError::InvalidWedgingBound(_))
        ));
        assert_eq!(
            compute_wedging_values(0.0, f64::INFINITY, 4),
            Err(AlignError::InvalidWedgingBound(f64::INFINITY))
        );
    }

    #[test]
    fn test_custom_minimum() {
        assert_eq!(wedging_values(0.0, 1.0, 4, 5).unwrap(), vec![0.0, 1.0]);
        assert_eq!(wedging_values(0.0, 1.0, 2, 2).unwrap(), vec![0.0, 1.0]);
        assert_eq!(
            wedging_values(0.0, 3.0, 4, 2).unwrap(),
            vec![0.0, 1.0, 2.0, 3.0]
        );
    }
}
