// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Preconfigured constructors for the common call sites.

use core::time::Duration;

use crate::debounce::Debouncer;
use crate::debounce_throttle::DebounceThrottle;
use crate::search::SearchDebouncer;
use crate::throttle::Throttler;
use pacer_core::Result;

/// Default debounce delay for free-form text input.
pub const INPUT_DELAY: Duration = Duration::from_millis(300);

/// Default debounce delay for search fields.
pub const SEARCH_DELAY: Duration = Duration::from_millis(300);

/// Default minimum query length for search fields.
pub const SEARCH_MIN_LENGTH: usize = 2;

/// Default throttle window for tap/click handlers.
pub const TAP_WINDOW: Duration = Duration::from_millis(500);

/// Default throttle window for scroll handlers.
pub const SCROLL_WINDOW: Duration = Duration::from_millis(200);

/// Debouncer tuned for text-input change events.
///
/// # Errors
/// Propagates construction errors from [`Debouncer::new`].
pub fn input_debouncer() -> Result<Debouncer> {
    Debouncer::new(INPUT_DELAY)
}

/// Search debouncer with the default delay and minimum length.
///
/// # Errors
/// Propagates construction errors from [`SearchDebouncer::new`].
pub fn search_debouncer(
    on_search: impl Fn(&str) + Send + Sync + 'static,
    on_clear: impl Fn() + Send + Sync + 'static,
) -> Result<SearchDebouncer> {
    SearchDebouncer::new(SEARCH_DELAY, SEARCH_MIN_LENGTH, on_search, on_clear)
}

/// Throttler tuned for button tap handlers.
///
/// # Errors
/// Propagates construction errors from [`Throttler::new`].
pub fn tap_throttler() -> Result<Throttler> {
    Throttler::new(TAP_WINDOW)
}

/// Throttler tuned for scroll handlers.
///
/// # Errors
/// Propagates construction errors from [`Throttler::new`].
pub fn scroll_throttler() -> Result<Throttler> {
    Throttler::new(SCROLL_WINDOW)
}

/// Throttled input debouncer for bursty change events.
///
/// # Errors
/// Propagates construction errors from [`DebounceThrottle::new`].
pub fn throttled_input_debouncer() -> Result<DebounceThrottle> {
    DebounceThrottle::new(INPUT_DELAY, SCROLL_WINDOW)
}
