// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-slot deferred execution.
//!
//! `ScheduledAction` is the building block under every debounce and
//! throttle component: one fixed delay, one owned pending slot. Arming an
//! action cancels and replaces whatever was armed before, so at most one
//! deferred execution exists per instance at any time.

use core::sync::atomic::{AtomicU32, Ordering};
use core::time::Duration;
use std::sync::Arc;

use pacer_core::{PacerError, Result};
use pacer_runtime::{Timer, TimerTask, TokioTimer};
use tracing::trace;

/// One-shot deferred execution with cancel/replace semantics.
///
/// The delay is fixed at construction. The call counter is diagnostic
/// only: it counts `schedule` calls since the slot last fired or was
/// cancelled.
#[derive(Debug)]
pub struct ScheduledAction<T: Timer = TokioTimer> {
    delay: Duration,
    timer: T,
    slot: Option<TimerTask>,
    call_count: Arc<AtomicU32>,
}

impl ScheduledAction<TokioTimer> {
    /// Create a slot firing `delay` after each arm, on the tokio clock.
    ///
    /// # Errors
    /// Returns [`PacerError::Configuration`] if `delay` is zero.
    pub fn new(delay: Duration) -> Result<Self> {
        Self::with_timer(delay, TokioTimer)
    }
}

impl<T: Timer> ScheduledAction<T> {
    /// Create a slot on an explicit [`Timer`].
    ///
    /// # Errors
    /// Returns [`PacerError::Configuration`] if `delay` is zero.
    pub fn with_timer(delay: Duration, timer: T) -> Result<Self> {
        if delay.is_zero() {
            return Err(PacerError::configuration("delay must be non-zero"));
        }
        Ok(Self {
            delay,
            timer,
            slot: None,
            call_count: Arc::new(AtomicU32::new(0)),
        })
    }

    /// Arm `action` to run `delay` from now, cancelling any armed one.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let calls = self.call_count.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(slot) = self.slot.take() {
            slot.cancel();
        }

        let count = Arc::clone(&self.call_count);
        let task = TimerTask::spawn_after(&self.timer, self.delay, move || {
            count.store(0, Ordering::SeqCst);
            action();
        });
        self.slot = Some(task);
        trace!(delay = ?self.delay, calls, "deferred slot re-armed");
    }

    /// Cancel any armed execution and run `action` synchronously.
    pub fn run_now<F>(&mut self, action: F)
    where
        F: FnOnce(),
    {
        self.cancel();
        action();
    }

    /// Clear the armed execution without running it. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(slot) = self.slot.take() {
            slot.cancel();
            trace!("deferred slot cancelled");
        }
        self.call_count.store(0, Ordering::SeqCst);
    }

    /// Check whether an execution is currently armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.slot.as_ref().is_some_and(TimerTask::is_pending)
    }

    /// Number of `schedule` calls since the slot last fired or was
    /// cancelled.
    #[must_use]
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}
