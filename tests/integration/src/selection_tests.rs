//! Best-gateway selection flows
//!
//! Selection over pools seeded through real fetch cycles, including the
//! uniform-random exploration branch for fully unproven pools.

use crate::fixtures::*;
use pool_core::Gateway;

#[tokio::test]
async fn test_empty_pool_has_no_best_gateway() {
    let pool = TestPool::new(1);
    assert!(pool.manager.best_gateway().is_none());
    assert!(pool.manager.gateways().is_empty());
}

#[tokio::test]
async fn test_single_proven_gateway_always_wins() {
    let pool = TestPool::new(1);
    pool.seed_gateways(vec![
        gateway("https://gw-a", 3.0),
        gateway("https://gw-b", Gateway::MIN_SCORE),
        gateway("https://gw-c", Gateway::MIN_SCORE),
    ])
    .await;

    for _ in 0..500 {
        let best = pool.manager.best_gateway().expect("pool is non-empty");
        assert_eq!(best.url, "https://gw-a");
    }
}

#[tokio::test]
async fn test_highest_of_several_proven_gateways_wins() {
    let pool = TestPool::new(1);
    pool.seed_gateways(vec![
        gateway("https://gw-a", 1.5),
        gateway("https://gw-b", 4.0),
        gateway("https://gw-c", 2.5),
    ])
    .await;

    let best = pool.manager.best_gateway().expect("pool is non-empty");
    assert_eq!(best.url, "https://gw-b");
    assert_eq!(best.score, 4.0);
}

#[tokio::test]
async fn test_unproven_pool_spreads_selection_uniformly() {
    let pool = TestPool::new(42);
    pool.seed_gateways(vec![
        gateway("https://gw-a", Gateway::MIN_SCORE),
        gateway("https://gw-b", Gateway::MIN_SCORE),
        gateway("https://gw-c", Gateway::MIN_SCORE),
    ])
    .await;

    let mut counts = [0_usize; 3];
    for _ in 0..10_000 {
        let best = pool.manager.best_gateway().expect("pool is non-empty");
        match best.url.as_str() {
            "https://gw-a" => counts[0] += 1,
            "https://gw-b" => counts[1] += 1,
            "https://gw-c" => counts[2] += 1,
            other => panic!("unknown gateway {other}"),
        }
    }

    // 3333 expected per gateway; 5 percentage points of slack.
    for count in counts {
        assert!(
            (2833..=3833).contains(&count),
            "selection skewed: {counts:?}"
        );
    }
}

#[tokio::test]
async fn test_selection_has_no_side_effects() {
    let pool = TestPool::new(1);
    pool.seed_gateways(vec![
        gateway("https://gw-a", 2.0),
        gateway("https://gw-b", 1.0),
    ])
    .await;

    let before = pool.manager.gateways();
    let scorer_calls = pool.scorer.calls();
    for _ in 0..50 {
        let _ = pool.manager.best_gateway();
    }
    assert_eq!(pool.manager.gateways(), before);
    assert_eq!(pool.scorer.calls(), scorer_calls);
}
