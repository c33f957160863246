//! Client ledger routes: submit a transaction, read a statement.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::AppState;
use tally_core::ledger::TransactionKind;
use tally_db::repositories::ledger::{
    LedgerError, LedgerRepository, Statement, SubmitTransactionInput,
};
use tally_shared::AppError;

/// Creates the client ledger routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clients/{client_id}/transactions", post(submit_transaction))
        .route("/clients/{client_id}/statement", get(get_statement))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for submitting a transaction.
#[derive(Debug, Deserialize)]
pub struct SubmitTransactionRequest {
    /// Positive integer magnitude.
    pub amount: i64,
    /// `"debit"` or `"credit"`.
    pub kind: String,
    /// 1 to 10 characters.
    pub description: String,
}

/// Response for a committed transaction.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// The client's credit limit.
    pub limit: i64,
    /// The post-commit balance.
    pub balance: i64,
}

/// Response for a statement read.
#[derive(Debug, Serialize)]
pub struct StatementResponse {
    /// Balance snapshot at read time.
    pub balance: StatementBalance,
    /// Newest first, at most 10 entries.
    pub last_transactions: Vec<StatementTransaction>,
}

/// Balance snapshot inside a statement.
#[derive(Debug, Serialize)]
pub struct StatementBalance {
    /// Current balance.
    pub total: i64,
    /// Read-time timestamp (RFC 3339).
    pub as_of: String,
    /// The client's credit limit.
    pub limit: i64,
}

/// A single statement entry.
#[derive(Debug, Serialize)]
pub struct StatementTransaction {
    /// Positive magnitude.
    pub amount: i64,
    /// `"debit"` or `"credit"`.
    pub kind: &'static str,
    /// Caller-supplied description.
    pub description: String,
    /// Commit-time timestamp (RFC 3339).
    pub completed_at: String,
}

impl From<Statement> for StatementResponse {
    fn from(statement: Statement) -> Self {
        Self {
            balance: StatementBalance {
                total: statement.balance,
                as_of: statement.as_of.to_rfc3339(),
                limit: statement.limit,
            },
            last_transactions: statement
                .last_transactions
                .into_iter()
                .map(|t| StatementTransaction {
                    amount: t.amount,
                    kind: TransactionKind::from(t.kind).as_str(),
                    description: t.description,
                    completed_at: t.completed_at.to_rfc3339(),
                })
                .collect(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/clients/{client_id}/transactions` - Submit a debit or credit.
async fn submit_transaction(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
    Json(payload): Json<SubmitTransactionRequest>,
) -> Response {
    let Some(kind) = TransactionKind::parse(&payload.kind) else {
        return error_response(&AppError::Validation(format!(
            "kind must be 'debit' or 'credit', got '{}'",
            payload.kind
        )));
    };

    let repo = LedgerRepository::new((*state.db).clone());

    let input = SubmitTransactionInput {
        amount: payload.amount,
        kind,
        description: payload.description,
    };

    match repo.submit(client_id, input).await {
        Ok(snapshot) => (
            StatusCode::OK,
            Json(BalanceResponse {
                limit: snapshot.limit,
                balance: snapshot.balance,
            }),
        )
            .into_response(),
        Err(e) => ledger_error_response(e, "submit"),
    }
}

/// GET `/clients/{client_id}/statement` - Balance snapshot plus the most
/// recent transactions.
async fn get_statement(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
) -> Response {
    let repo = LedgerRepository::new((*state.db).clone());

    match repo.statement(client_id).await {
        Ok(statement) => {
            (StatusCode::OK, Json(StatementResponse::from(statement))).into_response()
        }
        Err(e) => ledger_error_response(e, "statement"),
    }
}

// ============================================================================
// Error translation
// ============================================================================

/// Maps a typed ledger error onto the workspace error taxonomy.
///
/// Storage faults are deliberately reduced to a generic retry hint; the
/// details go to the log, not the caller.
fn map_ledger_error(err: LedgerError) -> AppError {
    match err {
        LedgerError::Validation(e) => AppError::Validation(e.to_string()),
        LedgerError::ClientNotFound(id) => AppError::NotFound(format!("client {id}")),
        e @ LedgerError::LimitExceeded { .. } => AppError::LimitExceeded(e.to_string()),
        LedgerError::Database(_) => AppError::Storage("retry shortly".to_string()),
    }
}

fn ledger_error_response(err: LedgerError, operation: &str) -> Response {
    if let LedgerError::Database(ref db_err) = err {
        error!(error = %db_err, operation, "storage failure");
    }
    error_response(&map_ledger_error(err))
}

fn error_response(err: &AppError) -> Response {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tally_core::ledger::ValidationError;

    #[rstest]
    #[case(LedgerError::Validation(ValidationError::InvalidAmount), 422, "invalid_input")]
    #[case(LedgerError::ClientNotFound(7), 404, "not_found")]
    #[case(LedgerError::LimitExceeded { amount: 1, limit: 1000 }, 422, "limit_exceeded")]
    fn test_ledger_error_mapping(
        #[case] err: LedgerError,
        #[case] status: u16,
        #[case] code: &str,
    ) {
        let app_err = map_ledger_error(err);
        assert_eq!(app_err.status_code(), status);
        assert_eq!(app_err.error_code(), code);
    }

    #[test]
    fn test_storage_errors_do_not_leak_details() {
        let err = LedgerError::Database(sea_orm::DbErr::Custom(
            "connection refused on 10.0.0.3".to_string(),
        ));
        let app_err = map_ledger_error(err);
        assert_eq!(app_err.status_code(), 503);
        assert!(!app_err.to_string().contains("10.0.0.3"));
    }

    #[test]
    fn test_statement_response_shape() {
        let statement = Statement {
            limit: 1000,
            balance: -500,
            as_of: chrono::Utc::now().into(),
            last_transactions: vec![],
        };

        let value = serde_json::to_value(StatementResponse::from(statement)).unwrap();
        assert_eq!(value["balance"]["total"], -500);
        assert_eq!(value["balance"]["limit"], 1000);
        assert!(value["balance"]["as_of"].is_string());
        assert!(value["last_transactions"].as_array().unwrap().is_empty());
    }
}
