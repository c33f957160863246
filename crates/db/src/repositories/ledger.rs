//! Ledger repository: atomic balance updates and statement reads.
//!
//! `submit` is the only writer in the system. It holds a per-row exclusive
//! lock (`SELECT ... FOR UPDATE`) for the whole read-modify-write, so
//! concurrent submissions against the same client serialize at the balance
//! mutation while different clients proceed in parallel. Either the
//! transaction row and the balance update both commit, or neither does.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::debug;

use tally_core::ledger::{
    TransactionKind, ValidationError, candidate_balance, validate_submission, within_limit,
};

use crate::entities::{clients, transactions};

/// Number of transactions returned by a statement.
pub const STATEMENT_TRANSACTIONS: u64 = 10;

/// Error types for ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Request fields failed validation; storage was not touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Client not found.
    #[error("client not found: {0}")]
    ClientNotFound(i32),

    /// The transaction would take the balance below `-credit_limit`.
    #[error("transaction of {amount} would exceed the limit of {limit}")]
    LimitExceeded {
        /// Rejected amount.
        amount: i64,
        /// The client's credit limit.
        limit: i64,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for submitting a transaction.
#[derive(Debug, Clone)]
pub struct SubmitTransactionInput {
    /// Positive magnitude.
    pub amount: i64,
    /// Debit or credit.
    pub kind: TransactionKind,
    /// 1 to 10 characters.
    pub description: String,
}

/// Post-commit view of a client's balance.
#[derive(Debug, Clone, Copy)]
pub struct BalanceSnapshot {
    /// The client's credit limit.
    pub limit: i64,
    /// The committed balance.
    pub balance: i64,
}

/// A client's balance snapshot plus its most recent transactions.
#[derive(Debug, Clone)]
pub struct Statement {
    /// The client's credit limit.
    pub limit: i64,
    /// The committed balance at read time.
    pub balance: i64,
    /// Read-time timestamp, generated fresh per call.
    pub as_of: chrono::DateTime<chrono::FixedOffset>,
    /// Newest first, at most [`STATEMENT_TRANSACTIONS`] entries.
    pub last_transactions: Vec<transactions::Model>,
}

/// Ledger repository over a pooled connection.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a transaction against a client's balance.
    ///
    /// Validates the input, then performs the read-modify-write as one
    /// database transaction with the client row locked: fetch balance,
    /// compute the candidate, check it against the limit, and on success
    /// insert the transaction row and update the balance together.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid, the client does not exist,
    /// the limit would be exceeded, or the database fails. No rejection
    /// path leaves any persisted state behind.
    pub async fn submit(
        &self,
        client_id: i32,
        input: SubmitTransactionInput,
    ) -> Result<BalanceSnapshot, LedgerError> {
        validate_submission(input.amount, &input.description)?;

        let txn = self.db.begin().await?;

        let client = clients::Entity::find_by_id(client_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(LedgerError::ClientNotFound(client_id))?;

        let candidate = candidate_balance(client.balance, input.amount, input.kind);
        if !within_limit(candidate, client.credit_limit) {
            // Dropping the open transaction rolls it back; nothing persists.
            return Err(LedgerError::LimitExceeded {
                amount: input.amount,
                limit: client.credit_limit,
            });
        }

        let limit = client.credit_limit;
        let completed_at = Utc::now();

        transactions::ActiveModel {
            amount: Set(input.amount),
            kind: Set(input.kind.into()),
            description: Set(input.description),
            completed_at: Set(completed_at.into()),
            client_id: Set(client_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut active: clients::ActiveModel = client.into();
        active.balance = Set(candidate);
        active.update(&txn).await?;

        txn.commit().await?;

        debug!(client_id, kind = %input.kind, balance = candidate, "transaction committed");

        Ok(BalanceSnapshot {
            limit,
            balance: candidate,
        })
    }

    /// Reads a client's balance snapshot and most recent transactions,
    /// newest first, capped at [`STATEMENT_TRANSACTIONS`].
    ///
    /// Pure read; under concurrent writes it may observe state slightly
    /// older than the latest commit, which is acceptable.
    ///
    /// # Errors
    ///
    /// Returns an error if the client does not exist or the database fails.
    pub async fn statement(&self, client_id: i32) -> Result<Statement, LedgerError> {
        let client = clients::Entity::find_by_id(client_id)
            .one(&self.db)
            .await?
            .ok_or(LedgerError::ClientNotFound(client_id))?;

        let last_transactions = transactions::Entity::find()
            .filter(transactions::Column::ClientId.eq(client_id))
            .order_by_desc(transactions::Column::CompletedAt)
            .order_by_desc(transactions::Column::Id)
            .limit(STATEMENT_TRANSACTIONS)
            .all(&self.db)
            .await?;

        Ok(Statement {
            limit: client.credit_limit,
            balance: client.balance,
            // Read-time timestamp, deliberately not the newest transaction's.
            as_of: Utc::now().into(),
            last_transactions,
        })
    }
}
