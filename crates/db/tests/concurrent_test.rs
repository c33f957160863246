//! Concurrent access tests for the transaction submission path.
//!
//! These verify that the per-row lock serializes submissions against one
//! client: when N concurrent debits are each individually within the limit
//! but collectively past it, exactly as many commit as the limit admits,
//! the rest come back `LimitExceeded`, and the final balance matches the
//! serialized result.

mod common;

use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Barrier;

use common::{cleanup_test_client, connect_or_skip, count_transactions, create_test_client, fetch_balance};
use tally_core::ledger::TransactionKind;
use tally_db::repositories::ledger::{LedgerError, LedgerRepository, SubmitTransactionInput};

#[tokio::test]
async fn test_concurrent_debits_respect_limit() {
    let Some(db) = connect_or_skip().await else {
        return;
    };

    const NUM_TASKS: usize = 20;
    const AMOUNT: i64 = 100;
    const LIMIT: i64 = 1_000; // admits exactly 10 of the 20 debits

    let client_id = create_test_client(&db, LIMIT).await.expect("setup failed");

    let repo = Arc::new(LedgerRepository::new(db.clone()));
    let barrier = Arc::new(Barrier::new(NUM_TASKS));

    let mut handles = Vec::with_capacity(NUM_TASKS);
    for i in 0..NUM_TASKS {
        let repo = Arc::clone(&repo);
        let barrier = Arc::clone(&barrier);

        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            repo.submit(
                client_id,
                SubmitTransactionInput {
                    amount: AMOUNT,
                    kind: TransactionKind::Debit,
                    description: format!("d{i}"),
                },
            )
            .await
        }));
    }

    let results = join_all(handles).await;

    let mut successes = 0usize;
    let mut limit_rejections = 0usize;
    for result in results {
        match result.expect("task panicked") {
            Ok(snapshot) => {
                successes += 1;
                assert!(snapshot.balance + snapshot.limit >= 0);
            }
            Err(LedgerError::LimitExceeded { .. }) => limit_rejections += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    // The limit admits exactly LIMIT / AMOUNT debits in any serialization
    assert_eq!(successes, (LIMIT / AMOUNT) as usize);
    assert_eq!(limit_rejections, NUM_TASKS - successes);

    let balance = fetch_balance(&db, client_id).await.unwrap();
    assert_eq!(balance, -LIMIT);
    assert!(balance + LIMIT >= 0);

    // Exactly one persisted row per success, none for rejections
    assert_eq!(
        count_transactions(&db, client_id).await.unwrap(),
        successes as u64
    );

    cleanup_test_client(&db, client_id).await.expect("cleanup failed");
}

#[tokio::test]
async fn test_concurrent_mixed_submissions_no_drift() {
    let Some(db) = connect_or_skip().await else {
        return;
    };

    const NUM_TASKS: usize = 40;
    const AMOUNT: i64 = 50;

    // Limit large enough that nothing is rejected; the point here is that
    // no update is lost under interleaving.
    let client_id = create_test_client(&db, 1_000_000).await.expect("setup failed");

    let repo = Arc::new(LedgerRepository::new(db.clone()));
    let barrier = Arc::new(Barrier::new(NUM_TASKS));

    let mut handles = Vec::with_capacity(NUM_TASKS);
    for i in 0..NUM_TASKS {
        let repo = Arc::clone(&repo);
        let barrier = Arc::clone(&barrier);
        let kind = if i % 2 == 0 {
            TransactionKind::Debit
        } else {
            TransactionKind::Credit
        };

        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            repo.submit(
                client_id,
                SubmitTransactionInput {
                    amount: AMOUNT,
                    kind,
                    description: format!("m{i}"),
                },
            )
            .await
        }));
    }

    let results = join_all(handles).await;
    for result in results {
        result.expect("task panicked").expect("submission failed");
    }

    // Debits and credits pair off exactly
    assert_eq!(fetch_balance(&db, client_id).await.unwrap(), 0);
    assert_eq!(
        count_transactions(&db, client_id).await.unwrap(),
        NUM_TASKS as u64
    );

    cleanup_test_client(&db, client_id).await.expect("cleanup failed");
}

#[tokio::test]
async fn test_concurrent_clients_are_independent() {
    let Some(db) = connect_or_skip().await else {
        return;
    };

    const DEBITS_PER_CLIENT: usize = 10;
    const AMOUNT: i64 = 10;

    let client_a = create_test_client(&db, 1_000).await.expect("setup failed");
    let client_b = create_test_client(&db, 1_000).await.expect("setup failed");

    let repo = Arc::new(LedgerRepository::new(db.clone()));
    let barrier = Arc::new(Barrier::new(DEBITS_PER_CLIENT * 2));

    let mut handles = Vec::new();
    for client_id in [client_a, client_b] {
        for i in 0..DEBITS_PER_CLIENT {
            let repo = Arc::clone(&repo);
            let barrier = Arc::clone(&barrier);

            handles.push(tokio::spawn(async move {
                barrier.wait().await;
                repo.submit(
                    client_id,
                    SubmitTransactionInput {
                        amount: AMOUNT,
                        kind: TransactionKind::Debit,
                        description: format!("d{i}"),
                    },
                )
                .await
            }));
        }
    }

    for result in join_all(handles).await {
        result.expect("task panicked").expect("submission failed");
    }

    let expected = -AMOUNT * DEBITS_PER_CLIENT as i64;
    assert_eq!(fetch_balance(&db, client_a).await.unwrap(), expected);
    assert_eq!(fetch_balance(&db, client_b).await.unwrap(), expected);

    cleanup_test_client(&db, client_a).await.expect("cleanup failed");
    cleanup_test_client(&db, client_b).await.expect("cleanup failed");
}
