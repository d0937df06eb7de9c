//! Combination of the two normalized curves into the diff curve.

use crate::trend::Trend;

/// Merge `c1` and `c2` into the halved "diff" curve.
///
/// Under an increasing trend the best operating point maximizes combined
/// evidence, so the curves are averaged: `(c1[i] + c2[i]) / 2`. Under a
/// decreasing trend the inflection shows up where the curves diverge most,
/// so the magnitude of their difference is taken instead:
/// `|c1[i] - c2[i]| / 2`. Halving keeps the result comparable with `c1`,
/// which the knee scan compares it against.
pub fn curves(c1: &[f64], c2: &[f64], trend: Trend) -> Vec<f64> {
    debug_assert_eq!(c1.len(), c2.len());

    match trend {
        Trend::Increasing => c1.iter().zip(c2).map(|(&a, &b)| (a + b) / 2.0).collect(),
        Trend::Decreasing => c1
            .iter()
            .zip(c2)
            .map(|(&a, &b)| (a - b).abs() / 2.0)
            .collect(),
    }
}
