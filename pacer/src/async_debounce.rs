// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debounce over asynchronous actions.
//!
//! Same window semantics as [`Debouncer`](crate::Debouncer), but the
//! wrapped action completes later and the caller holds a future for its
//! result. The correctness property is supersession: once a newer call
//! arrives, the older caller's future fails with a cancellation-kind
//! error. It never hangs and it never resolves with stale data.
//!
//! Every call bumps a generation counter and replaces the window's
//! cancellation token. A completion only surfaces its result if its
//! generation is still current when the result is ready; stale
//! completions are discarded with [`PacerError::Cancelled`].

use core::future::Future;
use core::time::Duration;
use std::sync::Arc;

use pacer_core::{CancellationToken, PacerError, Result};
use pacer_runtime::{Timer, TokioTimer};
use parking_lot::Mutex;
use tracing::{debug, trace};

/// Debouncer for actions that resolve asynchronously.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use pacer::AsyncDebouncer;
///
/// # async fn example() -> pacer_core::Result<()> {
/// let debouncer = AsyncDebouncer::new(Duration::from_millis(300))?;
///
/// // Only the latest of a burst of calls reaches the backend; the
/// // superseded ones fail with a cancellation error.
/// let result = debouncer.call(|| async { Ok("fetched") }).await?;
/// # Ok(())
/// # }
/// ```
pub struct AsyncDebouncer<T: Timer = TokioTimer> {
    delay: Duration,
    timer: T,
    state: Arc<Mutex<WindowState>>,
}

type TraceHook = Arc<dyn Fn() + Send + Sync>;

struct WindowState {
    /// Bumped on every call; a completion is only surfaced while its
    /// generation is still current.
    generation: u64,
    /// Token of the in-flight window; exactly one live at a time.
    window: Option<CancellationToken>,
    trace: Option<TraceHook>,
    disposed: bool,
}

impl<T: Timer> Clone for AsyncDebouncer<T> {
    fn clone(&self) -> Self {
        Self {
            delay: self.delay,
            timer: self.timer.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl AsyncDebouncer<TokioTimer> {
    /// Create an async debouncer on the tokio clock.
    ///
    /// # Errors
    /// Returns [`PacerError::Configuration`] if `delay` is zero.
    pub fn new(delay: Duration) -> Result<Self> {
        Self::with_timer(delay, TokioTimer)
    }
}

impl<T: Timer> AsyncDebouncer<T> {
    /// Create an async debouncer on an explicit [`Timer`].
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
            state: Arc::new(Mutex::new(WindowState {
                generation: 0,
                window: None,
                trace: None,
                disposed: false,
            })),
        })
    }

    /// Install an observer invoked after each surfaced action run.
    ///
    /// Instrumentation only; superseded calls never reach it.
    #[must_use]
    pub fn with_trace(self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.state.lock().trace = Some(Arc::new(hook));
        self
    }

    /// Debounce `action`: wait out the delay window, then run it and
    /// surface its result - unless a newer call supersedes this one
    /// first, in which case the future fails with
    /// [`PacerError::Cancelled`].
    ///
    /// # Errors
    /// [`PacerError::Cancelled`] when superseded or disposed; whatever
    /// error `action` itself returns otherwise.
    pub async fn call<F, Fut, R>(&self, action: F) -> Result<R>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        let (generation, token) = self.arm()?;
        let sleep = self.timer.sleep_future(self.delay);

        tokio::select! {
            () = sleep => {}
            () = token.cancelled() => {
                trace!(generation, "debounce window superseded before firing");
                return Err(PacerError::cancelled("superseded by a newer call"));
            }
        }
        if !self.is_current(generation) {
            return Err(PacerError::cancelled("superseded by a newer call"));
        }

        trace!(generation, "debounce window elapsed, invoking action");
        let result = tokio::select! {
            result = action() => result,
            () = token.cancelled() => {
                trace!(generation, "action superseded mid-flight");
                return Err(PacerError::cancelled("superseded while the action was in flight"));
            }
        };

        let mut state = self.state.lock();
        if state.generation != generation || token.is_cancelled() {
            // A newer call won the race against the action's completion.
            return Err(PacerError::cancelled("completed for a superseded call"));
        }
        state.window = None;
        let hook = state.trace.clone();
        drop(state);

        if let Some(hook) = hook {
            hook();
        }
        result
    }

    /// Cancel pending work and run `action` immediately, surfacing its
    /// result without delay.
    ///
    /// # Errors
    /// [`PacerError::Cancelled`] if the debouncer is disposed; whatever
    /// error `action` itself returns otherwise.
    pub async fn call_now<F, Fut, R>(&self, action: F) -> Result<R>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        self.supersede()?;
        let result = action().await;
        let hook = self.state.lock().trace.clone();
        if let Some(hook) = hook {
            hook();
        }
        result
    }

    /// Clear any pending window without running its action.
    ///
    /// The superseded caller's future fails with a cancellation error.
    /// Idempotent.
    pub fn cancel(&self) {
        let mut state = self.state.lock();
        if let Some(window) = state.window.take() {
            window.cancel();
        }
        state.generation = state.generation.wrapping_add(1);
    }

    /// Fail any outstanding caller with a cancellation error and reject
    /// all further calls.
    ///
    /// Safe to call repeatedly; never invokes the wrapped action.
    pub fn dispose(&self) {
        let mut state = self.state.lock();
        if let Some(window) = state.window.take() {
            window.cancel();
        }
        state.generation = state.generation.wrapping_add(1);
        if !state.disposed {
            debug!("async debouncer disposed");
        }
        state.disposed = true;
    }

    /// Check whether a debounce window is currently open.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state
            .lock()
            .window
            .as_ref()
            .is_some_and(|window| !window.is_cancelled())
    }

    /// The configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Open a new window: supersede the previous one and hand back the
    /// new generation and its token.
    fn arm(&self) -> Result<(u64, CancellationToken)> {
        let mut state = self.state.lock();
        if state.disposed {
            return Err(PacerError::cancelled("debouncer disposed"));
        }
        if let Some(previous) = state.window.take() {
            previous.cancel();
        }
        state.generation = state.generation.wrapping_add(1);
        let token = CancellationToken::new();
        state.window = Some(token.clone());
        Ok((state.generation, token))
    }

    /// Cancel the previous window and advance the generation without
    /// opening a new window.
    fn supersede(&self) -> Result<()> {
        let mut state = self.state.lock();
        if state.disposed {
            return Err(PacerError::cancelled("debouncer disposed"));
        }
        if let Some(previous) = state.window.take() {
            previous.cancel();
        }
        state.generation = state.generation.wrapping_add(1);
        Ok(())
    }

    fn is_current(&self, generation: u64) -> bool {
        self.state.lock().generation == generation
    }
}
