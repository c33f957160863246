//! Validation errors for transaction submissions.

use thiserror::Error;

/// Errors for request fields that fail validation before storage is touched.
///
/// These are deterministic caller errors: the same input always produces the
/// same rejection, and no state changes on any of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Amount must be a strictly positive magnitude; zero is invalid input,
    /// not a no-op.
    #[error("amount must be a positive integer")]
    InvalidAmount,

    /// Description must be 1 to 10 characters.
    #[error("description must be 1 to 10 characters, got {chars}")]
    InvalidDescription {
        /// Character count of the rejected description.
        chars: usize,
    },
}
