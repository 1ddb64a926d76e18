// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use pacer::ScheduledAction;
use pacer_test_utils::helpers::{advance_past, settle};
use pacer_test_utils::Counter;
use tokio::time::pause;

const DELAY: Duration = Duration::from_millis(100);

#[test]
fn test_zero_delay_is_rejected_at_construction() {
    let result = ScheduledAction::new(Duration::ZERO);
    assert!(result.is_err_and(|e| e.is_configuration()));
}

#[tokio::test]
async fn test_schedule_fires_once_after_delay() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let mut scheduled = ScheduledAction::new(DELAY)?;

    // Act
    scheduled.schedule(counter.hook());
    settle().await;

    // Assert
    assert!(scheduled.is_pending());
    assert_eq!(counter.get(), 0);

    advance_past(DELAY).await;
    assert_eq!(counter.get(), 1);
    assert!(!scheduled.is_pending());

    Ok(())
}

#[tokio::test]
async fn test_schedule_replaces_the_armed_execution() -> anyhow::Result<()> {
    // Arrange
    pause();
    let first = Counter::new();
    let second = Counter::new();
    let mut scheduled = ScheduledAction::new(DELAY)?;

    // Act
    scheduled.schedule(first.hook());
    settle().await;
    scheduled.schedule(second.hook());
    settle().await;
    advance_past(DELAY).await;

    // Assert
    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);

    Ok(())
}

#[tokio::test]
async fn test_cancel_clears_without_running() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let mut scheduled = ScheduledAction::new(DELAY)?;

    scheduled.schedule(counter.hook());
    settle().await;

    // Act
    scheduled.cancel();
    advance_past(DELAY).await;

    // Assert
    assert_eq!(counter.get(), 0);
    assert!(!scheduled.is_pending());

    Ok(())
}

#[tokio::test]
async fn test_cancel_on_idle_slot_is_a_noop() -> anyhow::Result<()> {
    let mut scheduled = ScheduledAction::new(DELAY)?;

    scheduled.cancel();
    scheduled.cancel();

    assert!(!scheduled.is_pending());
    assert_eq!(scheduled.call_count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_run_now_bypasses_the_delay() -> anyhow::Result<()> {
    // Arrange
    pause();
    let deferred = Counter::new();
    let immediate = Counter::new();
    let mut scheduled = ScheduledAction::new(DELAY)?;

    scheduled.schedule(deferred.hook());
    settle().await;

    // Act
    scheduled.run_now(immediate.hook());

    // Assert
    assert_eq!(immediate.get(), 1);
    assert!(!scheduled.is_pending());

    advance_past(DELAY).await;
    assert_eq!(deferred.get(), 0);

    Ok(())
}

#[tokio::test]
async fn test_call_count_resets_on_fire_and_cancel() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let mut scheduled = ScheduledAction::new(DELAY)?;

    // Act & Assert
    scheduled.schedule(counter.hook());
    settle().await;
    scheduled.schedule(counter.hook());
    settle().await;
    assert_eq!(scheduled.call_count(), 2);

    advance_past(DELAY).await;
    assert_eq!(scheduled.call_count(), 0);

    scheduled.schedule(counter.hook());
    settle().await;
    assert_eq!(scheduled.call_count(), 1);
    scheduled.cancel();
    assert_eq!(scheduled.call_count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_delay_is_fixed_at_construction() -> anyhow::Result<()> {
    let scheduled = ScheduledAction::new(DELAY)?;
    assert_eq!(scheduled.delay(), DELAY);
    Ok(())
}
