//! Error type for metric computations.

/// Result alias for metric computations.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Errors raised when a computation's precondition is violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// Empty sequence, zero denominator or out-of-range measurement
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl MetricsError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        MetricsError::InvalidInput(reason.into())
    }
}
