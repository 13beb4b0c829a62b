use thiserror::Error;

/// Errors returned by the clustering entry points in this crate.
///
/// Every variant is a caller-input problem detected before any work starts;
/// a clustering pass that has begun always runs to completion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A labeling does not line up with the point set it is applied to.
    #[error("length mismatch: {points} points but {labels} labels")]
    LengthMismatch {
        /// Number of points supplied.
        points: usize,
        /// Number of labels supplied.
        labels: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
