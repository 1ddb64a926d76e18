// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leading-edge throttle with one coalesced trailing execution.
//!
//! The first call in a window runs synchronously. Calls arriving inside
//! the window arm at most one trailing execution for the *remaining*
//! window time; further calls while armed overwrite the stored action
//! (last-writer-wins) without creating new timers. The trailing fire
//! counts as an execution and opens the next window.

use core::time::Duration;
use std::sync::Arc;

use pacer_core::{PacerError, Result};
use pacer_runtime::{Timer, TimerTask, TokioTimer};
use parking_lot::Mutex;
use tracing::{debug, trace};

type BoxedAction = Box<dyn FnOnce() + Send>;
type TraceHook = Arc<dyn Fn() + Send + Sync>;

/// Leading-edge rate limiter.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use pacer::Throttler;
///
/// # fn main() -> pacer_core::Result<()> {
/// let throttler = Throttler::new(Duration::from_millis(200))?;
/// throttler.call(|| println!("runs immediately"));
/// throttler.call(|| println!("coalesced into one trailing run"));
/// # Ok(())
/// # }
/// ```
pub struct Throttler<T: Timer = TokioTimer> {
    duration: Duration,
    timer: T,
    state: Arc<Mutex<ThrottleState<T>>>,
}

struct ThrottleState<T: Timer> {
    /// Instant of the most recent actual execution, leading or trailing.
    last_execution: Option<T::Instant>,
    /// At most one armed trailing execution.
    trailing: Option<TrailingSlot>,
    trace: Option<TraceHook>,
    disposed: bool,
}

struct TrailingSlot {
    task: TimerTask,
    /// Last-writer-wins cell consumed at fire time.
    action: Arc<Mutex<Option<BoxedAction>>>,
}

impl<T: Timer> Clone for Throttler<T> {
    fn clone(&self) -> Self {
        Self {
            duration: self.duration,
            timer: self.timer.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl Throttler<TokioTimer> {
    /// Create a throttler on the tokio clock.
    ///
    /// # Errors
    /// Returns [`PacerError::Configuration`] if `duration` is zero.
    pub fn new(duration: Duration) -> Result<Self> {
        Self::with_timer(duration, TokioTimer)
    }
}

impl<T: Timer> Throttler<T> {
    /// Create a throttler on an explicit [`Timer`].
    ///
    /// # Errors
    /// Returns [`PacerError::Configuration`] if `duration` is zero.
    pub fn with_timer(duration: Duration, timer: T) -> Result<Self> {
        if duration.is_zero() {
            return Err(PacerError::configuration("duration must be non-zero"));
        }
        Ok(Self {
            duration,
            timer,
            state: Arc::new(Mutex::new(ThrottleState {
                last_execution: None,
                trailing: None,
                trace: None,
                disposed: false,
            })),
        })
    }

    /// Install an observer invoked after each execution, leading or
    /// trailing.
    ///
    /// Instrumentation only; the hook sees no arguments and its result is
    /// ignored.
    #[must_use]
    pub fn with_trace(self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.state.lock().trace = Some(Arc::new(hook));
        self
    }

    /// Run `action` now if the window is open, otherwise coalesce it into
    /// the single trailing execution at the window's close.
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.state.lock();
        if state.disposed {
            debug!("call on disposed throttler ignored");
            return;
        }

        // Coalesce into an armed trailing run, if one is live.
        if let Some(slot) = &state.trailing {
            if slot.task.is_pending() {
                *slot.action.lock() = Some(Box::new(action));
                trace!("coalesced into armed trailing execution");
                return;
            }
        }
        state.trailing = None;

        let now = self.timer.now();
        match state.last_execution {
            Some(last) if now - last < self.duration => {
                // Inside the window: arm one trailing run for the rest of it.
                let remaining = self.duration - (now - last);
                let cell: Arc<Mutex<Option<BoxedAction>>> =
                    Arc::new(Mutex::new(Some(Box::new(action))));

                let shared = Arc::clone(&self.state);
                let consumed = Arc::clone(&cell);
                let timer = self.timer.clone();
                let task = TimerTask::spawn_after(&self.timer, remaining, move || {
                    let hook = {
                        let mut state = shared.lock();
                        state.last_execution = Some(timer.now());
                        state.trailing = None;
                        state.trace.clone()
                    };
                    // The state lock must be released before taking the
                    // cell lock; call() nests them the other way around.
                    if let Some(run) = consumed.lock().take() {
                        trace!("trailing execution fired");
                        run();
                        if let Some(hook) = hook {
                            hook();
                        }
                    }
                });
                state.trailing = Some(TrailingSlot { task, action: cell });
                trace!(?remaining, "trailing execution armed");
            }
            _ => {
                // Window open (or first call ever): leading edge.
                state.last_execution = Some(now);
                let hook = state.trace.clone();
                drop(state);
                trace!("leading-edge execution");
                action();
                if let Some(hook) = hook {
                    hook();
                }
            }
        }
    }

    /// Clear the execution timestamp and cancel any armed trailing run,
    /// so the next call is treated as leading-edge.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.last_execution = None;
        if let Some(slot) = state.trailing.take() {
            slot.task.cancel();
        }
    }

    /// Cancel the armed trailing run, keeping the window timestamp.
    /// Idempotent.
    pub fn cancel(&self) {
        let mut state = self.state.lock();
        if let Some(slot) = state.trailing.take() {
            slot.task.cancel();
            trace!("trailing execution cancelled");
        }
    }

    /// Cancel pending work and ignore all further `call`s.
    ///
    /// Safe to call repeatedly; never invokes the wrapped action.
    pub fn dispose(&self) {
        let mut state = self.state.lock();
        if let Some(slot) = state.trailing.take() {
            slot.task.cancel();
        }
        state.disposed = true;
    }

    /// Time until the current window closes.
    ///
    /// `None` if no execution has ever occurred; zero once the window has
    /// elapsed.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        let state = self.state.lock();
        state.last_execution.map(|last| {
            let deadline = last + self.duration;
            let now = self.timer.now();
            if now >= deadline {
                Duration::ZERO
            } else {
                deadline - now
            }
        })
    }

    /// Check whether a trailing execution is currently armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state
            .lock()
            .trailing
            .as_ref()
            .is_some_and(|slot| slot.task.is_pending())
    }

    /// The configured window duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}
