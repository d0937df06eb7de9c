use core::fmt;

/// Result alias for `kneepoint`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the knee-detection pipeline.
///
/// All variants are precondition failures: they are detected eagerly, before
/// the arithmetic that would otherwise divide by zero, never discovered via
/// NaN or infinity propagation. A run that finds no knee is *not* an error;
/// see [`crate::Advisory::NoKneeDetected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input sequences were empty.
    EmptyInput,

    /// Score and cluster-count sequences have different lengths.
    LengthMismatch {
        /// Number of scores supplied.
        scores: usize,
        /// Number of cluster counts supplied.
        counts: usize,
    },

    /// A normalization denominator (`max - min`) was zero.
    ///
    /// Raised when the scores, the cluster counts, or the weighted curve
    /// contain fewer than two distinct values. Such an input cannot be
    /// rescaled and the run cannot proceed.
    DegenerateRange {
        /// Which sequence was flat.
        what: &'static str,
    },

    /// A cluster count of zero was supplied.
    ///
    /// The weighting stage divides by each count, so zero is invalid.
    ZeroClusterCount {
        /// Index of the offending count.
        index: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::LengthMismatch { scores, counts } => {
                write!(
                    f,
                    "length mismatch: {scores} scores but {counts} cluster counts"
                )
            }
            Error::DegenerateRange { what } => {
                write!(f, "degenerate range: {what} has no spread (max == min)")
            }
            Error::ZeroClusterCount { index } => {
                write!(f, "cluster count at index {index} is zero")
            }
        }
    }
}

impl std::error::Error for Error {}
