//! First-crossing knee search.
//!
//! The diff curve starts on one side of the once-normalized curve and, at the
//! point of diminishing returns, crosses to the other. The search fixes the
//! relative order of the two curves near the start, then walks forward until
//! that order first flips. Everything before the flip is still "worth it";
//! the best index is wherever the diff curve peaks inside that prefix.

/// Which flip the scan is waiting for, fixed by the initial relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crossing {
    /// `diff` started above `c1`; stop where `diff <= c1`.
    BelowOrEqual,
    /// `diff` started at or below `c1`; stop where `diff >= c1`.
    AboveOrEqual,
}

impl Crossing {
    fn matches(self, diff: f64, c1: f64) -> bool {
        match self {
            Crossing::BelowOrEqual => diff <= c1,
            Crossing::AboveOrEqual => diff >= c1,
        }
    }
}

/// Outcome of the knee scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    /// First index (0-based) where the curves' relative order flipped, if any.
    pub knee: Option<usize>,
    /// Index of the diff curve's maximum: over `..=knee` when a knee was
    /// found, over the full range otherwise. Ties go to the first occurrence.
    pub optimal: usize,
    /// Diff-curve value at `optimal`.
    pub value: f64,
    /// The knee landed on the first or last element of the sequence.
    ///
    /// The scan range excludes both endpoints, so this cannot fire today; it
    /// is kept as a guard on the reported index itself, which is what
    /// downstream consumers treat as suspect.
    pub boundary: bool,
}

/// Scan `diff` against `c1` for the first crossing.
///
/// The initial order is read at the second element; the scan then covers the
/// interior indices only (second element through second-to-last, inclusive),
/// stopping at the first match. The fallback search when no crossing exists
/// deliberately covers the *full* range instead; that asymmetry is part of
/// the algorithm's contract.
///
/// Sequences shorter than two elements skip the scan and take the fallback
/// path. Both inputs must be non-empty and of equal length.
pub fn knee(c1: &[f64], diff: &[f64]) -> Scan {
    debug_assert_eq!(c1.len(), diff.len());
    debug_assert!(!diff.is_empty());

    let n = diff.len();
    let found = if n < 2 {
        None
    } else {
        let crossing = if diff[1] > c1[1] {
            Crossing::BelowOrEqual
        } else {
            Crossing::AboveOrEqual
        };
        (1..n - 1).find(|&i| crossing.matches(diff[i], c1[i]))
    };

    match found {
        Some(k) => {
            let optimal = argmax(&diff[..=k]);
            Scan {
                knee: Some(k),
                optimal,
                value: diff[optimal],
                boundary: k == 0 || k == n - 1,
            }
        }
        None => {
            let optimal = argmax(diff);
            Scan {
                knee: None,
                optimal,
                value: diff[optimal],
                boundary: false,
            }
        }
    }
}

/// Index of the maximum value; first occurrence wins on ties.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}
