//! Concurrency tests for the in-memory stores
//!
//! Runs many operations at once on the multi-threaded runtime and checks
//! that uniqueness and ordering hold.

use std::collections::HashSet;
use std::sync::Arc;

use assert_matches::assert_matches;
use echosignal::backend::auth::{AccountStore, CredentialHasher, InMemoryAccountStore};
use echosignal::backend::chat::{InMemoryMessageLog, MessageLog};
use echosignal::shared::config::MIN_PASSWORD_COST;
use echosignal::shared::{MessageId, StoreError};
use tokio::task::JoinSet;

const CONCURRENCY: usize = 32;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_registration_has_one_winner() {
    let store = InMemoryAccountStore::new(CredentialHasher::new(MIN_PASSWORD_COST))
        .await
        .unwrap();
    let store = Arc::new(store);

    let mut tasks = JoinSet::new();
    for i in 0..CONCURRENCY {
        let store = store.clone();
        tasks.spawn(async move { store.register("race@x.com", &format!("pw{}", i)).await });
    }

    let mut successes = 0;
    let mut already_exists = 0;
    while let Some(result) = tasks.join_next().await {
        match result.unwrap() {
            Ok(()) => successes += 1,
            Err(err) => {
                assert_matches!(err, StoreError::AlreadyExists);
                already_exists += 1;
            }
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(already_exists, CONCURRENCY - 1);
    assert_eq!(store.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_appends_get_unique_contiguous_ids() {
    let log = Arc::new(InMemoryMessageLog::new());

    let mut tasks = JoinSet::new();
    for i in 0..CONCURRENCY {
        let log = log.clone();
        tasks.spawn(async move { log.append("alice", "bob", &format!("message {}", i)).await });
    }

    let mut ids = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        let id = result.unwrap().unwrap();
        assert!(ids.insert(id), "duplicate id {}", id);
    }

    let expected: HashSet<MessageId> = (1..=CONCURRENCY as u64).map(MessageId::new).collect();
    assert_eq!(ids, expected);

    let listed = log.list(None).await;
    assert_eq!(listed.len(), CONCURRENCY);
    assert!(listed.windows(2).all(|w| w[0].id < w[1].id));
    assert!(listed.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_readers_never_see_partial_appends() {
    let log = Arc::new(InMemoryMessageLog::new());

    let mut tasks = JoinSet::new();
    for i in 0..CONCURRENCY {
        let writer = log.clone();
        tasks.spawn(async move {
            writer.append("alice", "bob", &format!("m{}", i)).await.unwrap();
        });
        let reader = log.clone();
        tasks.spawn(async move {
            let snapshot = reader.list(None).await;
            for (index, message) in snapshot.iter().enumerate() {
                assert_eq!(message.id, MessageId::new(index as u64 + 1));
                assert!(!message.content.is_empty());
            }
        });
    }

    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }
    assert_eq!(log.len().await, CONCURRENCY);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_http_registration() {
    let (state, app) = crate::common::test_app().await;

    let mut tasks = JoinSet::new();
    for _ in 0..CONCURRENCY {
        let app = app.clone();
        tasks.spawn(async move {
            crate::common::post_json(
                &app,
                "/register",
                serde_json::json!({ "email": "race@x.com", "password": "pw" }),
            )
            .await
            .0
        });
    }

    let mut ok = 0;
    while let Some(status) = tasks.join_next().await {
        if status.unwrap() == axum::http::StatusCode::OK {
            ok += 1;
        }
    }

    assert_eq!(ok, 1);
    assert_eq!(state.accounts.len().await, 1);
}
