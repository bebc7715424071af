//! Result submission flows
//!
//! Submission is pure forwarding: the pool translates the task into its
//! wire reference, attaches the outcome, and surfaces transport failures
//! untouched.

use crate::fixtures::*;
use pool_core::{FetchedBatch, TaskOutcome, TransportError};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_submission_reaches_origin_gateway() {
    let pool = TestPool::new(1);
    pool.transport.push_fetch(Ok(FetchedBatch {
        tasks: vec![task("t-42", "https://gw-a")],
        gateways: vec![gateway("https://gw-a", 2.0)],
    }));
    let tasks = pool
        .manager
        .fetch_tasks("https://gw-a", &credential(), 1)
        .await;
    let fetched = &tasks[0];

    let outcome = TaskOutcome::success()
        .with_score(0.95)
        .with_worker_id("worker-3")
        .with_worker_rank(1)
        .with_worker_rating(0.9);
    pool.manager
        .submit_result(&credential(), fetched, outcome.clone())
        .await
        .expect("submission succeeds");

    let submissions = pool.transport.submissions.lock();
    assert_eq!(submissions.len(), 1);
    let (task_ref, sent) = &submissions[0];
    assert_eq!(task_ref.id, "t-42");
    assert_eq!(task_ref.prompt, fetched.prompt);
    assert_eq!(task_ref.gateway_host, "https://gw-a");
    assert_eq!(sent, &outcome);
}

#[tokio::test]
async fn test_failed_task_submission_carries_error() {
    let pool = TestPool::new(1);
    let failed = task("t-43", "https://gw-a");

    pool.manager
        .submit_result(
            &credential(),
            &failed,
            TaskOutcome::failure("worker crashed"),
        )
        .await
        .expect("submission succeeds");

    let submissions = pool.transport.submissions.lock();
    let (_, sent) = &submissions[0];
    assert_eq!(sent.error.as_deref(), Some("worker crashed"));
    assert_eq!(sent.score, None);
}

#[tokio::test]
async fn test_submission_failure_surfaces_to_caller() {
    let pool = TestPool::new(1);
    pool.transport.push_submit(Err(TransportError::status(
        "https://gw-a",
        503,
        "unavailable",
    )));

    let result = pool
        .manager
        .submit_result(
            &credential(),
            &task("t-44", "https://gw-a"),
            TaskOutcome::success().with_score(0.5),
        )
        .await;

    let error = result.expect_err("submission fails");
    assert!(matches!(error, TransportError::Status { code: 503, .. }));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn test_submission_leaves_pool_state_untouched() {
    let pool = TestPool::new(1);
    pool.seed_gateways(vec![
        gateway("https://gw-a", 2.0),
        gateway("https://gw-b", 1.0),
    ])
    .await;
    let before = pool.manager.gateways();
    let events_before = pool.observer.kinds().len();
    let scorer_before = pool.scorer.calls();

    pool.manager
        .submit_result(
            &credential(),
            &task("t-45", "https://gw-a"),
            TaskOutcome::success(),
        )
        .await
        .expect("submission succeeds");

    assert_eq!(pool.manager.gateways(), before);
    assert_eq!(pool.observer.kinds().len(), events_before);
    assert_eq!(pool.scorer.calls(), scorer_before);
}
