//! `SeaORM` Entity for the transactions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::TransactionKind;

/// A committed transaction. Rows are append-only: there is no update or
/// delete path once a row exists.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// System-generated, monotonically assigned at insert time.
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Positive magnitude; direction is carried by `kind`.
    pub amount: i64,
    /// Debit or credit.
    pub kind: TransactionKind,
    /// 1 to 10 characters.
    pub description: String,
    /// Assigned by the repository at commit time, never by the caller.
    pub completed_at: DateTimeWithTimeZone,
    /// Owning client.
    pub client_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clients::Entity",
        from = "Column::ClientId",
        to = "super::clients::Column::Id"
    )]
    Clients,
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
