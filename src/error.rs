//! Error types for worldview-plot operations.

use thiserror::Error;

/// Result type alias for worldview-plot operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing or rendering a plot scene.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Score triple sums to zero, so no barycentric weights exist.
    ///
    /// The plot point is undefined for a degenerate simplex; callers must
    /// supply at least one positive component.
    #[error("Degenerate score triple: components sum to {sum} (expected > 0)")]
    DegenerateInput {
        /// The offending sum.
        sum: f64,
    },

    /// A score component is negative.
    #[error("Negative score component: {component} = {value}")]
    NegativeScore {
        /// Which component was negative (`pre`, `mod` or `post`).
        component: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Scores handed to perspective classification must sum to ~100.
    #[error("Invalid score sum for analysis: {sum} (expected 100 ± 0.1)")]
    InvalidScoreSum {
        /// The offending sum.
        sum: f64,
    },

    /// Error writing report files.
    #[error("Report error: {0}")]
    Report(String),

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
