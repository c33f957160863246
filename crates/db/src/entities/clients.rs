//! `SeaORM` Entity for the clients table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A client row. `id` is externally supplied at provisioning time and
/// `credit_limit` is immutable; only `balance` is ever updated, and only by
/// the ledger repository.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    /// Externally supplied identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    /// Magnitude of overdraft allowed; non-negative.
    pub credit_limit: i64,
    /// Balance seeded at creation.
    pub initial_balance: i64,
    /// Current balance. Invariant: `balance + credit_limit >= 0`.
    pub balance: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
