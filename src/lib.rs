//! # kneepoint
//!
//! Knee-point detection for clustering model-selection curves.
//!
//! Given a series of clustering solutions, each scored by a model-selection
//! criterion (BIC, or anything pre-oriented so larger is better) and indexed
//! by the number of clusters tried, `kneepoint` locates the point of
//! diminishing returns and reports the corresponding cluster count.
//!
//! Picking the first local maximum of the raw curve is unreliable: clustering
//! is noisy and the criterion often plateaus after it starts overfitting.
//! Instead the raw scores are rescaled into the cluster-count span, divided
//! by cluster count to expose the curve's shape independent of the
//! criterion's magnitude, renormalized, and combined into a "diff" curve
//! whose first crossing against the rescaled scores marks the knee.
//!
//! # Example
//!
//! ```rust
//! use kneepoint::{detect, Trend};
//!
//! // BIC for k = 1..=7 clusters: steep gains early, then a plateau.
//! let scores = [-100.0, -80.0, -60.0, -50.0, -48.0, -47.0, -46.5];
//! let counts = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//!
//! let detection = detect(&scores, &counts)?;
//! assert_eq!(detection.trend, Trend::Increasing);
//! assert_eq!(detection.optimal_count, 4.0);
//! # Ok::<(), kneepoint::Error>(())
//! ```
//!
//! This crate runs no clustering itself (it consumes precomputed
//! `(score, cluster_count)` pairs) and it draws nothing: [`Detection`]
//! carries the derived curves, trend, correlation, and advisory signals as
//! plain data for whatever presentation layer the caller prefers.

pub mod advisory;
pub mod combine;
pub mod detect;
/// Error types used across `kneepoint`.
pub mod error;
pub mod locate;
pub mod normalize;
pub mod trend;

pub use advisory::{Advisory, Severity};
pub use detect::{detect, Curves, Detection, KneeDetector};
pub use error::{Error, Result};
pub use locate::Scan;
pub use trend::{pearson, Trend, TrendMode};
