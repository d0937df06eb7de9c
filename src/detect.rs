//! End-to-end knee detection pipeline.
//!
//! Raw `(score, cluster_count)` pairs flow strictly downstream:
//!
//! ```text
//! scores ──► c1 = normalize(scores)        ┐
//!            cm = c1 / counts              │
//!            c2 = normalize(cm)            ├──► diff ──► knee scan ──► Detection
//!            trend = sign of correlation   ┘
//! ```
//!
//! Each derived curve is produced once and never mutated; the whole run is a
//! pure function of its inputs. Presentation (plotting, warning text) is the
//! caller's business: [`Detection`] hands back the four curves, the trend and
//! correlation, and any advisories, and gets out of the way.

use crate::advisory::Advisory;
use crate::combine;
use crate::error::{Error, Result};
use crate::locate;
use crate::normalize;
use crate::trend::{pearson, Trend, TrendMode};

/// The four derived curves, index-aligned with the inputs.
///
/// Returned for inspection and plotting; the numeric result never depends on
/// the caller touching these.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curves {
    /// Scores normalized into the cluster-count span.
    pub c1: Vec<f64>,
    /// `c1` divided elementwise by cluster count.
    pub cm: Vec<f64>,
    /// `cm` normalized into the cluster-count span.
    pub c2: Vec<f64>,
    /// Combination of `c1` and `c2`, halved.
    pub diff: Vec<f64>,
}

/// Result of a knee-detection run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Detection {
    /// Cluster count at the optimal operating point.
    pub optimal_count: f64,
    /// 0-based index of the optimal operating point.
    pub optimal_index: usize,
    /// Diff-curve value at the optimal index.
    pub optimal_value: f64,
    /// Cluster count at the knee, when one was found.
    pub knee_count: Option<f64>,
    /// 0-based index of the knee, when one was found.
    pub knee_index: Option<usize>,
    /// Trend the combiner ran with.
    pub trend: Trend,
    /// Pearson correlation between the raw scores and their positions.
    ///
    /// Reported even when the trend was forced, so presentation layers can
    /// annotate charts with it.
    pub correlation: f64,
    /// The derived curves, for inspection and plotting.
    pub curves: Curves,
    /// Non-fatal signals about the run; empty on a clean detection.
    pub advisories: Vec<Advisory>,
}

impl Detection {
    /// Whether a knee was actually found (as opposed to the fallback result).
    pub fn has_knee(&self) -> bool {
        self.knee_index.is_some()
    }
}

/// Knee detector over `(score, cluster_count)` pairs.
///
/// Scores must be pre-oriented so that larger values are preferred. When the
/// criterion's convention differs, either transform the scores or force the
/// combination rule with [`TrendMode`].
///
/// # Example
///
/// ```rust
/// use kneepoint::{KneeDetector, Trend};
///
/// let scores = [-100.0, -80.0, -60.0, -50.0, -48.0, -47.0, -46.5];
/// let counts = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
///
/// let detection = KneeDetector::new().detect(&scores, &counts)?;
/// assert_eq!(detection.trend, Trend::Increasing);
/// assert_eq!(detection.optimal_count, 4.0);
/// # Ok::<(), kneepoint::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct KneeDetector {
    trend_mode: TrendMode,
}

impl KneeDetector {
    /// Create a detector with automatic trend classification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how the combination rule is chosen.
    pub fn with_trend_mode(mut self, mode: TrendMode) -> Self {
        self.trend_mode = mode;
        self
    }

    /// Run the pipeline over index-aligned scores and cluster counts.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] for empty sequences.
    /// - [`Error::LengthMismatch`] when the sequences disagree in length.
    /// - [`Error::DegenerateRange`] when the scores, the cluster counts, or
    ///   the weighted curve are flat (`max == min`).
    /// - [`Error::ZeroClusterCount`] when any cluster count is zero.
    pub fn detect(&self, scores: &[f64], counts: &[f64]) -> Result<Detection> {
        if scores.is_empty() || counts.is_empty() {
            return Err(Error::EmptyInput);
        }
        if scores.len() != counts.len() {
            return Err(Error::LengthMismatch {
                scores: scores.len(),
                counts: counts.len(),
            });
        }

        let (count_min, count_max) = counts
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &c| {
                (lo.min(c), hi.max(c))
            });
        if count_max == count_min {
            return Err(Error::DegenerateRange {
                what: "cluster counts",
            });
        }

        let c1 = normalize::to_span(scores, count_min, count_max, "scores")?;
        let cm = normalize::weight_by_counts(&c1, counts)?;
        let c2 = normalize::to_span(&cm, count_min, count_max, "weighted curve")?;

        let positions: Vec<f64> = (1..=scores.len()).map(|i| i as f64).collect();
        let correlation = pearson(scores, &positions);
        let trend = self.trend_mode.resolve(scores);

        let diff = combine::curves(&c1, &c2, trend);
        let scan = locate::knee(&c1, &diff);

        let mut advisories = Vec::new();
        if scan.boundary {
            // Unreachable with the current scan bounds; kept as the guard on
            // the reported index.
            if let Some(index) = scan.knee {
                advisories.push(Advisory::BoundaryKnee { index });
            }
        }
        if scan.knee.is_none() {
            advisories.push(Advisory::NoKneeDetected);
        }

        Ok(Detection {
            optimal_count: counts[scan.optimal],
            optimal_index: scan.optimal,
            optimal_value: scan.value,
            knee_count: scan.knee.map(|k| counts[k]),
            knee_index: scan.knee,
            trend,
            correlation,
            curves: Curves { c1, cm, c2, diff },
            advisories,
        })
    }
}

/// Detect the knee with automatic trend classification.
///
/// Shorthand for `KneeDetector::new().detect(scores, counts)`.
pub fn detect(scores: &[f64], counts: &[f64]) -> Result<Detection> {
    KneeDetector::new().detect(scores, counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIC: [f64; 7] = [-100.0, -80.0, -60.0, -50.0, -48.0, -47.0, -46.5];
    const COUNTS: [f64; 7] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];

    #[test]
    fn bic_curve_end_to_end() {
        let detection = detect(&BIC, &COUNTS).unwrap();

        // Monotone rising scores: sum rule, strongly positive correlation.
        assert_eq!(detection.trend, Trend::Increasing);
        assert!(detection.correlation > 0.9);

        // The crossing sits strictly inside the scanned range.
        let knee = detection.knee_index.unwrap();
        assert!(knee > 1 && knee < BIC.len() - 1);
        assert_eq!(detection.knee_count, Some(5.0));

        // Optimal point is the diff maximum up to the knee.
        assert_eq!(detection.optimal_count, 4.0);
        assert_eq!(detection.optimal_index, 3);
        assert!((detection.optimal_value - 5.616_238_317_757_009).abs() < 1e-12);

        assert!(detection.advisories.is_empty());
        assert!(detection.has_knee());
    }

    #[test]
    fn derived_curves_are_index_aligned() {
        let detection = detect(&BIC, &COUNTS).unwrap();
        let n = BIC.len();
        assert_eq!(detection.curves.c1.len(), n);
        assert_eq!(detection.curves.cm.len(), n);
        assert_eq!(detection.curves.c2.len(), n);
        assert_eq!(detection.curves.diff.len(), n);

        // Normalization endpoints: min score -> 0, max score -> count span.
        assert_eq!(detection.curves.c1[0], 0.0);
        assert_eq!(detection.curves.c1[6], 6.0);
    }

    #[test]
    fn detection_is_deterministic() {
        let a = detect(&BIC, &COUNTS).unwrap();
        let b = detect(&BIC, &COUNTS).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn negated_scores_flip_the_trend() {
        let negated: Vec<f64> = BIC.iter().map(|v| -v).collect();
        let detection = detect(&negated, &COUNTS).unwrap();
        assert_eq!(detection.trend, Trend::Decreasing);
        assert!(detection.correlation < 0.0);
    }

    #[test]
    fn forced_sum_overrides_a_falling_curve() {
        let falling: Vec<f64> = BIC.iter().rev().copied().collect();
        let auto = detect(&falling, &COUNTS).unwrap();
        assert_eq!(auto.trend, Trend::Decreasing);

        let forced = KneeDetector::new()
            .with_trend_mode(TrendMode::ForceSum)
            .detect(&falling, &COUNTS)
            .unwrap();
        assert_eq!(forced.trend, Trend::Increasing);
        // Correlation is still reported from the data, not the override.
        assert!(forced.correlation < 0.0);
    }

    #[test]
    fn flat_scores_are_rejected() {
        let err = detect(&[3.0; 5], &COUNTS[..5]).unwrap_err();
        assert_eq!(err, Error::DegenerateRange { what: "scores" });
    }

    #[test]
    fn flat_counts_are_rejected() {
        let err = detect(&BIC[..5], &[4.0; 5]).unwrap_err();
        assert_eq!(
            err,
            Error::DegenerateRange {
                what: "cluster counts"
            }
        );
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = detect(&BIC[..3], &[0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(err, Error::ZeroClusterCount { index: 0 });
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = detect(&BIC, &COUNTS[..5]).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { scores: 7, counts: 5 });
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(detect(&[], &[]).unwrap_err(), Error::EmptyInput);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn detection_serializes_for_external_consumers() {
        let detection = detect(&BIC, &COUNTS).unwrap();
        let json = serde_json::to_string(&detection).unwrap();
        assert!(json.contains("\"optimal_count\":4.0"));
        assert!(json.contains("\"trend\":\"Increasing\""));
    }

    #[test]
    fn no_knee_falls_back_with_an_advisory() {
        // With these inputs c2 = 5 * cm stays strictly above c1 on every
        // interior index (c2/c1 = 5/count), so the scanned range never
        // crosses; the only order flip sits on the unscanned last element.
        let scores = [0.0, 1.0, 2.0, 3.0, 100.0];
        let counts = [1.0, 2.0, 3.0, 4.0, 5.0];
        let detection = detect(&scores, &counts).unwrap();

        assert_eq!(detection.trend, Trend::Increasing);
        assert!(!detection.has_knee());
        assert_eq!(detection.knee_count, None);
        assert_eq!(detection.advisories, vec![Advisory::NoKneeDetected]);

        // Fallback: maximum over the full diff range, which here is the
        // final element.
        assert_eq!(detection.optimal_index, 4);
        assert_eq!(detection.optimal_count, 5.0);
        assert_eq!(detection.optimal_value, 4.0);
    }
}
