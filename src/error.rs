//! Error types.
//!
//! The conflict checks themselves never fail: unparsable records evaluate
//! as "no conflict". These errors surface from the lower-level helpers
//! (interval computation, configuration loading) for callers that want
//! to know why.

use thiserror::Error;

/// Why an exam's time interval could not be computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExamTimeError {
    /// `date` is not a `YYYY-MM-DD` calendar date.
    #[error("invalid exam date '{0}'")]
    InvalidDate(String),

    /// `start_time` is not `HH:MM` or `HH:MM:SS`.
    #[error("invalid exam start time '{0}'")]
    InvalidStartTime(String),

    /// Duration is NaN or infinite.
    #[error("invalid exam duration {0} hours")]
    InvalidDuration(f64),
}

/// Configuration loading failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
