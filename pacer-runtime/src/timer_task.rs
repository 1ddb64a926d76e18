// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-shot deferred execution handle.
//!
//! A `TimerTask` is the "pending execution" every scheduling component
//! owns: a spawned task that races the clock against a cancellation token
//! and runs its action at most once. The handle is always
//! replaced-and-cancelled on re-arm, never stacked, and cancels itself on
//! drop so an abandoned slot cannot fire later.

use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;
use std::sync::Arc;

use pacer_core::CancellationToken;
use tracing::trace;

use crate::timer::Timer;

/// Handle to a single armed one-shot execution.
///
/// The action runs exactly once after the delay, unless [`cancel`] is
/// called (or the handle is dropped) before the timer fires. A cancel that
/// lands after the fire has begun does not interrupt the running action.
///
/// [`cancel`]: TimerTask::cancel
#[derive(Debug)]
pub struct TimerTask {
    cancel: CancellationToken,
    fired: Arc<AtomicBool>,
}

impl TimerTask {
    /// Arm a one-shot execution of `action`, `delay` from now.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime context.
    pub fn spawn_after<T, F>(timer: &T, delay: Duration, action: F) -> Self
    where
        T: Timer,
        F: FnOnce() + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let fired = Arc::new(AtomicBool::new(false));

        let token = cancel.clone();
        let fired_flag = Arc::clone(&fired);
        let sleep = timer.sleep_future(delay);

        tokio::spawn(async move {
            tokio::select! {
                () = sleep => {
                    // The cancel may have raced the timer; the token is
                    // the source of truth.
                    if token.is_cancelled() {
                        trace!(?delay, "one-shot cancelled at fire time");
                        return;
                    }
                    fired_flag.store(true, Ordering::Release);
                    trace!(?delay, "one-shot fired");
                    action();
                }
                () = token.cancelled() => {
                    trace!(?delay, "one-shot cancelled");
                }
            }
        });

        Self { cancel, fired }
    }

    /// Cancel the armed execution.
    ///
    /// Idempotent; a no-op once the action has fired.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Check whether the execution was cancelled before firing.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Check whether the action has started running.
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Check whether the execution is still armed: neither fired nor
    /// cancelled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.has_fired() && !self.is_cancelled()
    }
}

impl Drop for TimerTask {
    fn drop(&mut self) {
        // An abandoned slot must never fire.
        self.cancel.cancel();
    }
}
