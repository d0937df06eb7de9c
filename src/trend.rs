//! Global trend classification.
//!
//! The combiner needs to know whether the criterion curve rises or falls
//! overall: a rising curve rewards combined evidence (sum rule), a falling
//! one rewards divergence between the normalized curves (absolute-difference
//! rule). The trend is read once per run from the Pearson correlation between
//! the raw scores and their 1-based positions, or forced by the caller
//! through [`TrendMode`] when the criterion's orientation is already known.

/// Overall direction of the raw score curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trend {
    /// Scores rise with position; the combiner sums the curves.
    Increasing,
    /// Scores fall with position; the combiner takes their absolute difference.
    Decreasing,
}

impl Trend {
    /// Classify the trend of `scores` from their correlation with position.
    ///
    /// A strictly positive coefficient means [`Trend::Increasing`]; zero or
    /// negative means [`Trend::Decreasing`]. Zero correlation carries no
    /// directional evidence, so it falls to the decreasing branch; callers
    /// that want the sum rule anyway should use [`TrendMode::ForceSum`].
    pub fn classify(scores: &[f64]) -> Trend {
        let positions: Vec<f64> = (1..=scores.len()).map(|i| i as f64).collect();
        if pearson(scores, &positions) > 0.0 {
            Trend::Increasing
        } else {
            Trend::Decreasing
        }
    }
}

/// How the combination rule is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrendMode {
    /// Read the trend from the correlation sign.
    #[default]
    Auto,
    /// Always combine with the sum rule, as if the trend were increasing.
    ForceSum,
    /// Always combine with the absolute-difference rule, as if decreasing.
    ForceAbsDiff,
}

impl TrendMode {
    /// Resolve this mode into a concrete trend for the given scores.
    pub(crate) fn resolve(self, scores: &[f64]) -> Trend {
        match self {
            TrendMode::Auto => Trend::classify(scores),
            TrendMode::ForceSum => Trend::Increasing,
            TrendMode::ForceAbsDiff => Trend::Decreasing,
        }
    }
}

/// Pearson correlation coefficient between two equal-length sequences.
///
/// Returns `0.0` for empty input or when either sequence has zero variance.
/// The result is clamped to `[-1, 1]` against rounding.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return 0.0;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut num = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        num += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (num / denom).clamp(-1.0, 1.0)
    }
}
