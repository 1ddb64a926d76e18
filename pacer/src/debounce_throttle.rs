// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttled debounce: a [`Throttler`] deciding when a [`Debouncer`] may
//! (re)arm.
//!
//! The throttle's innermost action is "arm the debounce", not "run the
//! action". Bursts faster than the throttle window collapse into the
//! throttle's own coalescing before debounce timing even begins, so the
//! debounce window re-arms at most once per throttle window.

use core::time::Duration;

use pacer_runtime::{Timer, TokioTimer};

use crate::debounce::Debouncer;
use crate::throttle::Throttler;
use pacer_core::Result;

/// Debounce gated behind a throttle; a policy pipeline with no state of
/// its own.
pub struct DebounceThrottle<T: Timer = TokioTimer> {
    debouncer: Debouncer<T>,
    throttler: Throttler<T>,
}

impl<T: Timer> Clone for DebounceThrottle<T> {
    fn clone(&self) -> Self {
        Self {
            debouncer: self.debouncer.clone(),
            throttler: self.throttler.clone(),
        }
    }
}

impl DebounceThrottle<TokioTimer> {
    /// Create the composed policy on the tokio clock.
    ///
    /// # Errors
    /// Returns [`PacerError::Configuration`](pacer_core::PacerError) if
    /// either duration is zero.
    pub fn new(debounce_delay: Duration, throttle_duration: Duration) -> Result<Self> {
        Self::with_timer(debounce_delay, throttle_duration, TokioTimer)
    }
}

impl<T: Timer> DebounceThrottle<T> {
    /// Create the composed policy on an explicit [`Timer`].
    ///
    /// # Errors
    /// Returns [`PacerError::Configuration`](pacer_core::PacerError) if
    /// either duration is zero.
    pub fn with_timer(
        debounce_delay: Duration,
        throttle_duration: Duration,
        timer: T,
    ) -> Result<Self> {
        Ok(Self {
            debouncer: Debouncer::with_timer(debounce_delay, timer.clone())?,
            throttler: Throttler::with_timer(throttle_duration, timer)?,
        })
    }

    /// Pass `action` through the throttle; when the throttle executes, it
    /// (re)arms the debounce with `action`.
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let debouncer = self.debouncer.clone();
        self.throttler.call(move || debouncer.call(action));
    }

    /// Cancel both pending states and run `action` directly.
    pub fn call_now<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        self.throttler.cancel();
        self.debouncer.call_now(action);
    }

    /// Cancel pending work on both sides without running anything.
    /// Idempotent.
    pub fn cancel(&self) {
        self.throttler.cancel();
        self.debouncer.cancel();
    }

    /// Dispose both sides; never invokes the wrapped action. Safe to call
    /// repeatedly.
    pub fn dispose(&self) {
        self.throttler.dispose();
        self.debouncer.dispose();
    }

    /// Check whether either side has pending work.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.throttler.is_pending() || self.debouncer.is_pending()
    }

    /// The debounce delay.
    #[must_use]
    pub fn debounce_delay(&self) -> Duration {
        self.debouncer.delay()
    }

    /// The throttle window duration.
    #[must_use]
    pub fn throttle_duration(&self) -> Duration {
        self.throttler.duration()
    }
}
