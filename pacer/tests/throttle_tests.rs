// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use pacer::Throttler;
use pacer_test_utils::helpers::{advance_by, advance_past, settle};
use pacer_test_utils::{Counter, Recorder};
use tokio::time::pause;

const WINDOW: Duration = Duration::from_millis(100);

#[test]
fn test_zero_duration_is_rejected_at_construction() {
    let result = Throttler::new(Duration::ZERO);
    assert!(result.is_err_and(|e| e.is_configuration()));
}

#[tokio::test]
async fn test_first_call_executes_synchronously() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let throttler = Throttler::new(WINDOW)?;

    // Act
    throttler.call(counter.hook());

    // Assert: leading edge, no clock movement needed.
    assert_eq!(counter.get(), 1);
    assert!(!throttler.is_pending());

    Ok(())
}

#[tokio::test]
async fn test_three_rapid_calls_yield_leading_plus_one_trailing() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = Recorder::new();
    let throttler = Throttler::new(WINDOW)?;

    // Act
    for value in ["a", "b", "c"] {
        let log = recorder.clone();
        throttler.call(move || log.record(value));
    }
    settle().await;

    // Assert: the leading call ran; the two others collapsed into one
    // armed trailing run.
    assert_eq!(recorder.entries(), vec!["a"]);
    assert!(throttler.is_pending());

    advance_past(WINDOW).await;
    assert_eq!(recorder.entries(), vec!["a", "c"]);
    assert!(!throttler.is_pending());

    Ok(())
}

#[tokio::test]
async fn test_coalescing_does_not_extend_the_trailing_deadline() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = Recorder::new();
    let throttler = Throttler::new(WINDOW)?;

    let log = recorder.clone();
    throttler.call(move || log.record("lead"));

    let log = recorder.clone();
    throttler.call(move || log.record("early"));
    settle().await;

    // Act: a call midway through the window replaces the stored action
    // without re-arming the timer.
    advance_by(Duration::from_millis(50)).await;
    let log = recorder.clone();
    throttler.call(move || log.record("late"));
    settle().await;

    advance_past(Duration::from_millis(50)).await;

    // Assert: fired at the original window close, with the last action.
    assert_eq!(recorder.entries(), vec!["lead", "late"]);

    Ok(())
}

#[tokio::test]
async fn test_call_after_window_elapsed_is_leading_edge() -> anyhow::Result<()> {
    // Arrange
    pause();
    let recorder = Recorder::new();
    let throttler = Throttler::new(WINDOW)?;

    let log = recorder.clone();
    throttler.call(move || log.record("first"));

    // Act
    advance_past(WINDOW).await;
    let log = recorder.clone();
    throttler.call(move || log.record("second"));

    // Assert
    assert_eq!(recorder.entries(), vec!["first", "second"]);
    assert!(!throttler.is_pending());

    Ok(())
}

#[tokio::test]
async fn test_trailing_fire_opens_the_next_window() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let throttler = Throttler::new(WINDOW)?;

    throttler.call(counter.hook()); // leading at t=0
    throttler.call(counter.hook()); // trailing armed for t=100
    settle().await;
    advance_past(WINDOW).await;
    assert_eq!(counter.get(), 2);

    // Act: a call right after the trailing fire is inside the new window.
    throttler.call(counter.hook());
    settle().await;
    assert_eq!(counter.get(), 2);
    assert!(throttler.is_pending());

    advance_past(WINDOW).await;

    // Assert
    assert_eq!(counter.get(), 3);

    Ok(())
}

#[tokio::test]
async fn test_time_until_next_tracks_the_window() -> anyhow::Result<()> {
    // Arrange
    pause();
    let throttler = Throttler::new(WINDOW)?;
    assert_eq!(throttler.time_until_next(), None);

    // Act & Assert
    throttler.call(|| {});
    assert_eq!(throttler.time_until_next(), Some(WINDOW));

    advance_by(Duration::from_millis(30)).await;
    assert_eq!(
        throttler.time_until_next(),
        Some(Duration::from_millis(70))
    );

    advance_by(Duration::from_millis(100)).await;
    assert_eq!(throttler.time_until_next(), Some(Duration::ZERO));

    Ok(())
}

#[tokio::test]
async fn test_reset_makes_the_next_call_leading_edge() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let throttler = Throttler::new(WINDOW)?;

    throttler.call(counter.hook()); // leading
    throttler.call(counter.hook()); // trailing armed
    settle().await;

    // Act
    throttler.reset();
    assert_eq!(throttler.time_until_next(), None);

    throttler.call(counter.hook());

    // Assert: leading again, and the old trailing run never fires.
    assert_eq!(counter.get(), 2);
    advance_past(WINDOW).await;
    assert_eq!(counter.get(), 2);

    Ok(())
}

#[tokio::test]
async fn test_cancel_drops_the_trailing_run_but_keeps_the_window() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let throttler = Throttler::new(WINDOW)?;

    throttler.call(counter.hook()); // leading
    throttler.call(counter.hook()); // trailing armed
    settle().await;

    // Act
    throttler.cancel();

    // Assert: no trailing fire, but the window timestamp survives.
    assert!(!throttler.is_pending());
    assert!(throttler.time_until_next().is_some());

    advance_past(WINDOW).await;
    assert_eq!(counter.get(), 1);

    Ok(())
}

#[tokio::test]
async fn test_trace_hook_runs_after_each_execution() -> anyhow::Result<()> {
    // Arrange
    pause();
    let trace = Counter::new();
    let throttler = Throttler::new(WINDOW)?.with_trace(trace.hook());

    // Act & Assert
    throttler.call(|| {}); // leading
    assert_eq!(trace.get(), 1);

    throttler.call(|| {}); // trailing armed
    settle().await;
    advance_past(WINDOW).await;
    assert_eq!(trace.get(), 2);

    Ok(())
}

#[tokio::test]
async fn test_cancel_on_idle_throttler_is_a_noop() -> anyhow::Result<()> {
    let throttler = Throttler::new(WINDOW)?;

    throttler.cancel();
    throttler.cancel();

    assert!(!throttler.is_pending());

    Ok(())
}

#[tokio::test]
async fn test_dispose_is_idempotent_and_silences_calls() -> anyhow::Result<()> {
    // Arrange
    pause();
    let counter = Counter::new();
    let throttler = Throttler::new(WINDOW)?;

    throttler.call(counter.hook()); // leading
    throttler.call(counter.hook()); // trailing armed
    settle().await;

    // Act
    throttler.dispose();
    throttler.dispose();

    throttler.call(counter.hook());
    advance_past(WINDOW).await;

    // Assert: the armed trailing run was cancelled and the later call
    // ignored.
    assert_eq!(counter.get(), 1);

    Ok(())
}
