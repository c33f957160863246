//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Every failure crossing the HTTP boundary is one of these kinds; the
/// first three are deterministic caller errors, `Storage` is the only
/// transient (retryable) kind.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed or out-of-range request fields.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Valid request rejected by a business rule.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),

    /// Storage unavailable or timed out; safe to retry.
    #[error("Storage unavailable: {0}")]
    Storage(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) | Self::LimitExceeded(_) => 422,
            Self::Storage(_) => 503,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "invalid_input",
            Self::LimitExceeded(_) => "limit_exceeded",
            Self::Storage(_) => "storage_unavailable",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Whether the caller may retry the exact same request and expect a
    /// different outcome.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
