//! Client provisioning seeder for Tally development and testing.
//!
//! Clients are created out-of-band, never through the API; this binary is
//! that band. Seeds the five canonical test clients with their credit
//! limits and zero balances, skipping any that already exist.
//!
//! Usage: cargo run --bin seeder

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tally_db::entities::clients;
use tally_shared::config::DatabaseConfig;

/// Canonical test clients: (id, credit limit in cents).
const SEED_CLIENTS: [(i32, i64); 5] = [
    (1, 100_000),
    (2, 80_000),
    (3, 1_000_000),
    (4, 10_000_000),
    (5, 500_000),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = tally_db::connect(&DatabaseConfig {
        url: database_url,
        max_connections: 5,
        min_connections: 1,
    })
    .await
    .expect("Failed to connect to database");

    println!("Seeding clients...");
    seed_clients(&db).await;

    println!("Seeding complete!");
}

/// Seeds the canonical clients, skipping existing rows.
async fn seed_clients(db: &DatabaseConnection) {
    let mut inserted = 0;

    for (id, credit_limit) in SEED_CLIENTS {
        if clients::Entity::find_by_id(id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Client {id} already exists, skipping...");
            continue;
        }

        let client = clients::ActiveModel {
            id: Set(id),
            credit_limit: Set(credit_limit),
            initial_balance: Set(0),
            balance: Set(0),
        };

        if let Err(e) = client.insert(db).await {
            eprintln!("Failed to insert client {id}: {e}");
        } else {
            println!("  Created client {id} with limit {credit_limit}");
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} clients");
}
