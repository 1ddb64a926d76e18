// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce and throttle primitives for rate-limiting callbacks.
//!
//! Each component owns exactly one pending deferred slot; every call
//! either arms, re-arms, or (for throttles) immediately fires it, and
//! `cancel`/`dispose` release it deterministically.
//!
//! # Overview
//!
//! - [`ScheduledAction`] - single-slot one-shot deferred execution with
//!   cancel/replace semantics; the building block for everything else.
//! - [`Debouncer`] - trailing-edge debounce: of N calls within one delay
//!   window, exactly the last one's action runs, once.
//! - [`AsyncDebouncer`] - the same window semantics over actions that
//!   complete asynchronously; superseded callers get a cancellation
//!   error, never stale data.
//! - [`Throttler`] - leading-edge rate limiting with at most one
//!   coalesced trailing execution per window.
//! - [`SearchDebouncer`] - a [`Debouncer`] with trim, minimum-length,
//!   and duplicate-suppression policy for search input.
//! - [`DebounceThrottle`] - a [`Throttler`] deciding when a
//!   [`Debouncer`] may (re)arm.
//! - [`factory`] - preconfigured constructors with named default delays.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use pacer::Debouncer;
//!
//! # fn main() -> pacer_core::Result<()> {
//! let debouncer = Debouncer::new(Duration::from_millis(300))?;
//!
//! // Three rapid edits; only the last one is saved, 300ms after it.
//! debouncer.call(|| save("d"));
//! debouncer.call(|| save("dr"));
//! debouncer.call(|| save("dra"));
//! # Ok(())
//! # }
//! # fn save(_draft: &str) {}
//! ```

pub mod async_debounce;
pub mod debounce;
pub mod debounce_throttle;
pub mod factory;
pub mod scheduled;
pub mod search;
pub mod throttle;

pub mod prelude;

pub use self::async_debounce::AsyncDebouncer;
pub use self::debounce::Debouncer;
pub use self::debounce_throttle::DebounceThrottle;
pub use self::scheduled::ScheduledAction;
pub use self::search::SearchDebouncer;
pub use self::throttle::Throttler;

pub use pacer_core::{CancellationToken, PacerError, Result};
pub use pacer_runtime::{Timer, TokioTimer};
