use super::*;

use std::sync::Arc;
use tokio::time::{timeout, Duration};
use waitgroup::WaitGroup;

#[test]
fn test_gate_close_once() {
    let gate = Gate::new();
    assert!(!gate.is_closed());
    assert!(gate.close(), "first close should report closing");
    assert!(gate.is_closed());
    assert!(!gate.close(), "second close should be a no-op");
    assert!(gate.is_closed());
}

#[tokio::test]
async fn test_gate_wait_after_close() {
    let gate = Gate::new();
    gate.close();

    let result = timeout(Duration::from_millis(100), gate.wait()).await;
    assert!(result.is_ok(), "wait on a closed gate should not block");
}

#[tokio::test]
async fn test_gate_wait_blocks_while_open() {
    let gate = Gate::new();

    let result = timeout(Duration::from_millis(50), gate.wait()).await;
    assert!(result.is_err(), "wait on an open gate should block");
}

#[tokio::test]
async fn test_gate_releases_all_waiters() {
    let gate = Arc::new(Gate::new());
    let wg = WaitGroup::new();

    for _ in 0..8 {
        let gate2 = Arc::clone(&gate);
        let w = wg.worker();
        tokio::spawn(async move {
            let _d = w;
            gate2.wait().await;
        });
    }

    tokio::time::sleep(Duration::from_millis(20)).await;
    gate.close();

    let result = timeout(Duration::from_secs(1), wg.wait()).await;
    assert!(result.is_ok(), "every waiter should be released by close");
}
