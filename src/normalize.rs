//! Curve rescaling primitives.
//!
//! Two stages feed the knee search: [`to_span`] maps a raw sequence into the
//! numeric span of the cluster-count axis, and [`weight_by_counts`] divides
//! the result by cluster count so the curve's shape stops depending on the
//! absolute magnitude of the criterion.
//!
//! # The affine form
//!
//! [`to_span`] computes, per element:
//!
//! ```text
//! (target_max - target_min) * (v - min(values)) / (max(values) - min(values))
//! ```
//!
//! Note what it does *not* do: the result is never shifted by `target_min`,
//! so output lands in `[0, target_max - target_min]`, not
//! `[target_min, target_max]`, and it is never clamped. This is intentional.
//! The knee search compares two curves produced by this exact map, and the
//! crossing it looks for only exists in this output range. Anyone adapting
//! these curves to another criterion should treat the missing `target_min`
//! shift as a known quirk rather than silently "correcting" it.

use crate::error::{Error, Result};

/// Min and max of a sequence in one pass.
fn min_max(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}

/// Rescale `values` into the span `target_max - target_min`.
///
/// Each element `v` maps to
/// `(target_max - target_min) * (v - min) / (max - min)` where `min` and
/// `max` are taken over `values` itself. The element equal to `min` maps to
/// exactly `0.0`; the element equal to `max` maps to exactly
/// `target_max - target_min`.
///
/// # Errors
///
/// - [`Error::EmptyInput`] if `values` is empty.
/// - [`Error::DegenerateRange`] if all values are equal (`max == min`), named
///   by the `what` label so callers can tell which stage rejected its input.
pub fn to_span(
    values: &[f64],
    target_min: f64,
    target_max: f64,
    what: &'static str,
) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }

    let (min, max) = min_max(values);
    if max == min {
        return Err(Error::DegenerateRange { what });
    }

    let span = target_max - target_min;
    let range = max - min;
    Ok(values.iter().map(|&v| span * (v - min) / range).collect())
}

/// Divide a normalized curve elementwise by its cluster counts.
///
/// The result reveals the curve's global shape independent of the criterion's
/// absolute magnitude: a score that merely grows with cluster count is
/// flattened, while a genuine jump in quality survives the division.
///
/// # Errors
///
/// [`Error::ZeroClusterCount`] if any count is zero; checked before dividing.
pub fn weight_by_counts(c1: &[f64], counts: &[f64]) -> Result<Vec<f64>> {
    debug_assert_eq!(c1.len(), counts.len());

    if let Some(index) = counts.iter().position(|&c| c == 0.0) {
        return Err(Error::ZeroClusterCount { index });
    }

    Ok(c1.iter().zip(counts).map(|(&v, &c)| v / c).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn endpoints_map_exactly() {
        let normalized = to_span(&[10.0, 30.0, 20.0], 2.0, 8.0, "scores").unwrap();
        // min -> 0, max -> span, regardless of target_min.
        assert_eq!(normalized[0], 0.0);
        assert_eq!(normalized[1], 6.0);
        assert_eq!(normalized[2], 3.0);
    }

    #[test]
    fn output_is_span_relative_not_target_relative() {
        // The affine form drops the target_min shift on purpose.
        let normalized = to_span(&[0.0, 1.0], 5.0, 7.0, "scores").unwrap();
        assert_eq!(normalized, vec![0.0, 2.0]);
    }

    #[test]
    fn flat_input_is_rejected() {
        let err = to_span(&[4.0, 4.0, 4.0], 1.0, 3.0, "scores").unwrap_err();
        assert_eq!(err, Error::DegenerateRange { what: "scores" });
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(to_span(&[], 0.0, 1.0, "scores").unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn weighting_divides_elementwise() {
        let weighted = weight_by_counts(&[2.0, 6.0, 12.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(weighted, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn zero_count_is_rejected_with_index() {
        let err = weight_by_counts(&[1.0, 2.0], &[1.0, 0.0]).unwrap_err();
        assert_eq!(err, Error::ZeroClusterCount { index: 1 });
    }

    proptest! {
        #[test]
        fn normalized_values_stay_in_span(
            values in proptest::collection::vec(-1e6..1e6f64, 2..40),
            span in 1e-3..1e3f64,
        ) {
            prop_assume!(values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
                != values.iter().cloned().fold(f64::INFINITY, f64::min));

            let normalized = to_span(&values, 0.0, span, "scores").unwrap();
            prop_assert_eq!(normalized.len(), values.len());
            for v in normalized {
                // Upper bound allows a couple of ulps of rounding from the
                // multiply-then-divide order of the affine map.
                prop_assert!(v >= 0.0 && v <= span * (1.0 + 1e-12));
            }
        }
    }
}
