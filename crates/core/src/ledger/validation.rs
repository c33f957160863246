//! Submission validation and credit-limit arithmetic.

use super::error::ValidationError;
use super::kind::TransactionKind;

/// Strict upper bound on description length, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 10;

/// Validates the fields of a transaction submission.
///
/// # Errors
///
/// Returns an error if the amount is not strictly positive or the
/// description is empty or longer than [`MAX_DESCRIPTION_CHARS`].
pub fn validate_submission(amount: i64, description: &str) -> Result<(), ValidationError> {
    if amount <= 0 {
        return Err(ValidationError::InvalidAmount);
    }

    let chars = description.chars().count();
    if chars == 0 || chars > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::InvalidDescription { chars });
    }

    Ok(())
}

/// Computes the balance a transaction would leave behind.
#[must_use]
pub const fn candidate_balance(balance: i64, amount: i64, kind: TransactionKind) -> i64 {
    match kind {
        TransactionKind::Debit => balance.saturating_sub(amount),
        TransactionKind::Credit => balance.saturating_add(amount),
    }
}

/// The admission rule: a candidate balance is acceptable iff it stays at or
/// above `-limit`. The balance may go negative, but never below the limit.
#[must_use]
pub const fn within_limit(candidate: i64, limit: i64) -> bool {
    (candidate as i128) + (limit as i128) >= 0
}
