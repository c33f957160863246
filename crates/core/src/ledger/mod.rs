//! Credit-limited ledger logic.
//!
//! A client has a non-negative credit limit and a running balance. Debits
//! decrease the balance, credits increase it, and no committed state may
//! ever leave `balance + limit < 0`. Everything in this module is pure;
//! the atomic read-modify-write against storage lives in `tally-db`.

mod kind;
mod validation;

pub mod error;

pub use error::ValidationError;
pub use kind::TransactionKind;
pub use validation::{
    MAX_DESCRIPTION_CHARS, candidate_balance, validate_submission, within_limit,
};
