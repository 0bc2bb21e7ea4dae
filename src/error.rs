use thiserror::Error;

/// Rejected estimator configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The stillness window must not be negative.
    #[error("stillness window must not be negative, got {0} ms")]
    NegativeStillnessWindow(i64),
    /// The significance threshold must be a non-negative number.
    #[error("significant rate must be a non-negative number")]
    InvalidSignificantRate,
    /// The raised threshold must be a number.
    #[error("raised rotation threshold must be a number")]
    InvalidRaisedRotation,
}
