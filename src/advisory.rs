//! Advisory signals emitted alongside a detection result.
//!
//! Some outcomes deserve the caller's attention without being errors: a run
//! that found no knee still returns a best-effort result, and a knee sitting
//! on the edge of the sequence is valid but suspect. These travel as plain
//! data next to the [`crate::Detection`] so a caller can log them, render
//! them, or ignore them; they never influence the numeric result.
//!
//! # Example
//!
//! ```rust
//! use kneepoint::detect;
//!
//! let scores = [10.0, 8.0, 7.9, 7.8, 7.7];
//! let counts = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let detection = detect(&scores, &counts)?;
//! for advisory in &detection.advisories {
//!     eprintln!("[{}] {}", advisory.severity(), advisory);
//! }
//! # Ok::<(), kneepoint::Error>(())
//! ```

use core::fmt;

/// Severity level for an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Informational, not a problem.
    Info,
    /// Something unusual but not necessarily wrong.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARN"),
        }
    }
}

/// A non-fatal signal about the quality of a detection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Advisory {
    /// The knee landed on the first or last element of the sequence.
    ///
    /// Edge knees usually mean the tried cluster-count range did not bracket
    /// the true operating point.
    BoundaryKnee {
        /// 0-based index of the boundary knee.
        index: usize,
    },

    /// No crossing was found; the result is the full-range diff maximum.
    NoKneeDetected,
}

impl Advisory {
    /// Severity of this advisory.
    pub fn severity(&self) -> Severity {
        match self {
            Advisory::BoundaryKnee { .. } => Severity::Warning,
            Advisory::NoKneeDetected => Severity::Warning,
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::BoundaryKnee { index } => {
                write!(
                    f,
                    "knee found at edge of range (index {index}); result may be unreliable"
                )
            }
            Advisory::NoKneeDetected => {
                write!(f, "no knee detected; falling back to the diff-curve maximum")
            }
        }
    }
}
