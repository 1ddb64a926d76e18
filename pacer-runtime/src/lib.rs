// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Clock abstraction for the pacer scheduling toolkit.
//!
//! The scheduling components have exactly one environmental dependency: a
//! monotonic clock that can sleep for a duration and report the current
//! instant. This crate provides that seam:
//!
//! - [`Timer`] - the clock trait (`sleep_future`, `now`).
//! - [`TokioTimer`] - the default implementation over `tokio::time`. It
//!   reports `tokio::time::Instant`, so the paused-clock test facilities
//!   govern both sleeping and elapsed-time arithmetic.
//! - [`TimerTask`] - a cancel-on-drop handle over a one-shot deferred
//!   execution: sleep, then run the action unless cancelled first.

pub mod timer;
pub mod timer_task;
pub mod tokio_timer;

pub use self::timer::Timer;
pub use self::timer_task::TimerTask;
pub use self::tokio_timer::TokioTimer;
