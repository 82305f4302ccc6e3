//! Tests for fetch tasks

use super::*;
use crate::test_utils::test_helpers::FakeSource;
use std::time::Duration;
use tokio::sync::mpsc;

fn request(request_id: u64, query: &str) -> FetchRequest {
    FetchRequest {
        request_id,
        query: query.to_string(),
        limit: 5,
    }
}

#[tokio::test(start_paused = true)]
async fn test_fetch_reports_outcome_with_request_id() {
    let source = FakeSource::new();
    source.respond("app", &["apple", "application"]);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let handle = spawn_fetch(
        &Handle::current(),
        Arc::new(source.clone()),
        request(7, "app"),
        CancellationToken::new(),
        tx,
    );
    handle.await.unwrap();

    let outcome = rx.try_recv().unwrap();
    assert_eq!(outcome.request_id, 7);
    assert_eq!(outcome.query, "app");
    assert_eq!(
        outcome.result,
        Ok(vec!["apple".to_string(), "application".to_string()])
    );
    assert_eq!(source.calls(), vec![("app".to_string(), 5)]);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_reports_failure() {
    let source = FakeSource::new();
    source.fail("app", SourceError::Status { code: 503 });
    let (tx, mut rx) = mpsc::unbounded_channel();

    spawn_fetch(
        &Handle::current(),
        Arc::new(source),
        request(1, "app"),
        CancellationToken::new(),
        tx,
    )
    .await
    .unwrap();

    let outcome = rx.try_recv().unwrap();
    assert_eq!(outcome.result, Err(SourceError::Status { code: 503 }));
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_fetch_reports_nothing() {
    let source = FakeSource::new();
    source.respond_after("app", Duration::from_secs(1), &["apple"]);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let token = CancellationToken::new();

    let handle = spawn_fetch(
        &Handle::current(),
        Arc::new(source),
        request(1, "app"),
        token.clone(),
        tx,
    );
    tokio::task::yield_now().await;
    token.cancel();
    handle.await.unwrap();

    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_pre_cancelled_fetch_never_calls_source() {
    let source = FakeSource::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let token = CancellationToken::new();
    token.cancel();

    spawn_fetch(
        &Handle::current(),
        Arc::new(source.clone()),
        request(1, "app"),
        token,
        tx,
    )
    .await
    .unwrap();

    assert!(rx.try_recv().is_err());
    assert_eq!(source.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_closed_channel_is_not_a_panic() {
    let source = FakeSource::new();
    source.respond("app", &["apple"]);
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);

    let handle = spawn_fetch(
        &Handle::current(),
        Arc::new(source),
        request(1, "app"),
        CancellationToken::new(),
        tx,
    );

    assert!(handle.await.is_ok());
}
