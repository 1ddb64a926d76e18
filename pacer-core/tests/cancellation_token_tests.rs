// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use pacer_core::CancellationToken;

#[test]
fn test_token_starts_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_is_idempotent() {
    let token = CancellationToken::new();

    token.cancel();
    token.cancel();

    assert!(token.is_cancelled());
}

#[test]
fn test_clones_share_state() {
    let token = CancellationToken::new();
    let clone = token.clone();

    token.cancel();

    assert!(clone.is_cancelled());
}

#[tokio::test]
async fn test_cancelled_resolves_immediately_when_already_cancelled() {
    let token = CancellationToken::new();
    token.cancel();

    // Must not hang.
    token.cancelled().await;
}

#[tokio::test]
async fn test_cancelled_wakes_waiter() -> anyhow::Result<()> {
    let token = CancellationToken::new();
    let waiter = token.clone();

    let handle = tokio::spawn(async move {
        waiter.cancelled().await;
        true
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    token.cancel();

    let woken = tokio::time::timeout(Duration::from_secs(1), handle).await??;
    assert!(woken);

    Ok(())
}
