//! Repository abstractions for data access.

pub mod ledger;

pub use ledger::{
    BalanceSnapshot, LedgerError, LedgerRepository, Statement, SubmitTransactionInput,
};
