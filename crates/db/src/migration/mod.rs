//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration. The server runs them
//! idempotently at startup; the migration ledger table makes concurrent
//! startups harmless.

pub use sea_orm_migration::prelude::*;

mod m20260830_000001_initial;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260830_000001_initial::Migration)]
    }
}
