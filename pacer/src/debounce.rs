// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debounce over synchronous actions.
//!
//! Of N calls made within one delay window, exactly the action from the
//! last call executes, exactly once, `delay` after that last call. Every
//! new call cancels and replaces the armed execution.

use core::time::Duration;
use std::sync::Arc;

use pacer_runtime::{Timer, TokioTimer};
use parking_lot::Mutex;
use tracing::debug;

use crate::scheduled::ScheduledAction;
use pacer_core::Result;

type TraceHook = Arc<dyn Fn() + Send + Sync>;

/// Trailing-edge debouncer.
///
/// Clones share the same pending slot, so a debouncer can be handed to a
/// deferred context (see [`DebounceThrottle`](crate::DebounceThrottle))
/// while the original keeps control of cancellation.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use pacer::Debouncer;
///
/// # fn main() -> pacer_core::Result<()> {
/// let debouncer = Debouncer::new(Duration::from_millis(300))?;
/// debouncer.call(|| println!("only the last call within 300ms runs"));
/// # Ok(())
/// # }
/// ```
pub struct Debouncer<T: Timer = TokioTimer> {
    inner: Arc<Mutex<Inner<T>>>,
}

struct Inner<T: Timer> {
    scheduled: ScheduledAction<T>,
    trace: Option<TraceHook>,
    disposed: bool,
}

impl<T: Timer> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Debouncer<TokioTimer> {
    /// Create a debouncer on the tokio clock.
    ///
    /// # Errors
    /// Returns [`PacerError::Configuration`](pacer_core::PacerError) if
    /// `delay` is zero.
    pub fn new(delay: Duration) -> Result<Self> {
        Self::with_timer(delay, TokioTimer)
    }
}

impl<T: Timer> Debouncer<T> {
    /// Create a debouncer on an explicit [`Timer`].
    ///
    /// # Errors
    /// Returns [`PacerError::Configuration`](pacer_core::PacerError) if
    /// `delay` is zero.
    pub fn with_timer(delay: Duration, timer: T) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                scheduled: ScheduledAction::with_timer(delay, timer)?,
                trace: None,
                disposed: false,
            })),
        })
    }

    /// Install an observer invoked after each fire.
    ///
    /// Instrumentation only; the hook sees no arguments and its result is
    /// ignored.
    #[must_use]
    pub fn with_trace(self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.inner.lock().trace = Some(Arc::new(hook));
        self
    }

    /// Record a call: cancel the armed execution and arm `action` to run
    /// `delay` from now.
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut inner = self.inner.lock();
        if inner.disposed {
            debug!("call on disposed debouncer ignored");
            return;
        }
        let trace = inner.trace.clone();
        inner.scheduled.schedule(move || {
            action();
            if let Some(hook) = trace {
                hook();
            }
        });
    }

    /// Cancel any armed execution and run `action` synchronously,
    /// bypassing the delay.
    pub fn call_now<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        let trace = {
            let mut inner = self.inner.lock();
            if inner.disposed {
                debug!("call_now on disposed debouncer ignored");
                return;
            }
            inner.scheduled.cancel();
            inner.trace.clone()
        };
        // Run outside the lock so the action may re-enter this debouncer.
        action();
        if let Some(hook) = trace {
            hook();
        }
    }

    /// Clear any armed execution without running it. Idempotent.
    pub fn cancel(&self) {
        self.inner.lock().scheduled.cancel();
    }

    /// Cancel pending work and ignore all further `call`s.
    ///
    /// Safe to call repeatedly; never invokes the wrapped action.
    pub fn dispose(&self) {
        let mut inner = self.inner.lock();
        inner.scheduled.cancel();
        inner.disposed = true;
    }

    /// Check whether a deferred execution is currently armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.lock().scheduled.is_pending()
    }

    /// Number of calls recorded since the last fire or cancellation.
    #[must_use]
    pub fn call_count(&self) -> u32 {
        self.inner.lock().scheduled.call_count()
    }

    /// The configured delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.inner.lock().scheduled.delay()
    }

    /// Check whether [`dispose`](Debouncer::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.lock().disposed
    }
}
