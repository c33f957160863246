//! `SeaORM` active enums mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use tally_core::ledger::TransactionKind as CoreKind;

/// Direction of a persisted transaction, backed by the Postgres
/// `transaction_kind` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_kind")]
pub enum TransactionKind {
    /// Decreases the client balance.
    #[sea_orm(string_value = "debit")]
    Debit,
    /// Increases the client balance.
    #[sea_orm(string_value = "credit")]
    Credit,
}

impl From<CoreKind> for TransactionKind {
    fn from(kind: CoreKind) -> Self {
        match kind {
            CoreKind::Debit => Self::Debit,
            CoreKind::Credit => Self::Credit,
        }
    }
}

impl From<TransactionKind> for CoreKind {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Debit => Self::Debit,
            TransactionKind::Credit => Self::Credit,
        }
    }
}
