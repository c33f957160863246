//! Initial migration: clients and transactions.
//!
//! The CHECK constraints are a backstop; the admission rule is enforced in
//! the ledger repository under a row lock.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS transactions CASCADE;
             DROP TABLE IF EXISTS clients CASCADE;
             DROP TYPE IF EXISTS transaction_kind;",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
CREATE TYPE transaction_kind AS ENUM ('debit', 'credit');

-- Clients: one row per provisioned client
CREATE TABLE clients (
    id INT PRIMARY KEY,
    credit_limit BIGINT NOT NULL CHECK (credit_limit >= 0),
    initial_balance BIGINT NOT NULL,
    balance BIGINT NOT NULL,
    CONSTRAINT chk_balance_within_limit CHECK (balance + credit_limit >= 0)
);

-- Transactions: append-only, one row per committed balance change
CREATE TABLE transactions (
    id BIGSERIAL PRIMARY KEY,
    amount BIGINT NOT NULL CHECK (amount > 0),
    kind transaction_kind NOT NULL,
    description VARCHAR(10) NOT NULL CHECK (length(description) >= 1),
    completed_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    client_id INT NOT NULL REFERENCES clients(id)
);

-- Index for the statement query (newest first, id breaks timestamp ties)
CREATE INDEX idx_transactions_client_recent
    ON transactions(client_id, completed_at DESC, id DESC);
";
