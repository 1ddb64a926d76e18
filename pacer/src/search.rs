// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounced text-search input policy.
//!
//! Wraps a [`Debouncer`] with the policy a search field needs: input is
//! trimmed, queries shorter than the minimum length clear the results
//! instead of searching, and a query identical to the previous one is
//! suppressed entirely.

use core::time::Duration;
use std::sync::Arc;

use pacer_runtime::{Timer, TokioTimer};
use parking_lot::Mutex;
use tracing::trace;

use crate::debounce::Debouncer;
use pacer_core::Result;

type SearchHook = Arc<dyn Fn(&str) + Send + Sync>;
type ClearHook = Arc<dyn Fn() + Send + Sync>;

/// Debouncer specialized for search-input fields.
///
/// `on_search` receives the trimmed query after the debounce delay;
/// `on_clear` is invoked - possibly repeatedly - whenever the input is
/// empty or below the minimum length, so it must tolerate redundant
/// invocations.
pub struct SearchDebouncer<T: Timer = TokioTimer> {
    debouncer: Debouncer<T>,
    min_length: usize,
    last_query: Arc<Mutex<String>>,
    on_search: SearchHook,
    on_clear: ClearHook,
}

impl SearchDebouncer<TokioTimer> {
    /// Create a search debouncer on the tokio clock.
    ///
    /// # Errors
    /// Returns [`PacerError::Configuration`](pacer_core::PacerError) if
    /// `delay` is zero.
    pub fn new(
        delay: Duration,
        min_length: usize,
        on_search: impl Fn(&str) + Send + Sync + 'static,
        on_clear: impl Fn() + Send + Sync + 'static,
    ) -> Result<Self> {
        Self::with_timer(delay, min_length, TokioTimer, on_search, on_clear)
    }
}

impl<T: Timer> SearchDebouncer<T> {
    /// Create a search debouncer on an explicit [`Timer`].
    ///
    /// # Errors
    /// Returns [`PacerError::Configuration`](pacer_core::PacerError) if
    /// `delay` is zero.
    pub fn with_timer(
        delay: Duration,
        min_length: usize,
        timer: T,
        on_search: impl Fn(&str) + Send + Sync + 'static,
        on_clear: impl Fn() + Send + Sync + 'static,
    ) -> Result<Self> {
        Ok(Self {
            debouncer: Debouncer::with_timer(delay, timer)?,
            min_length,
            last_query: Arc::new(Mutex::new(String::new())),
            on_search: Arc::new(on_search),
            on_clear: Arc::new(on_clear),
        })
    }

    /// Record a query edit: clear, suppress, or debounce a search.
    pub fn search(&self, query: &str) {
        if self.debouncer.is_disposed() {
            return;
        }
        match self.accept(query) {
            Acceptance::Clear => (self.on_clear)(),
            Acceptance::Duplicate => {}
            Acceptance::Search(query) => {
                let hook = Arc::clone(&self.on_search);
                self.debouncer.call(move || hook(&query));
            }
        }
    }

    /// Same policy as [`search`](SearchDebouncer::search), bypassing the
    /// debounce delay.
    pub fn search_now(&self, query: &str) {
        if self.debouncer.is_disposed() {
            return;
        }
        match self.accept(query) {
            Acceptance::Clear => (self.on_clear)(),
            Acceptance::Duplicate => {}
            Acceptance::Search(query) => {
                let hook = Arc::clone(&self.on_search);
                self.debouncer.call_now(move || hook(&query));
            }
        }
    }

    /// Clear any pending search without running it. Idempotent.
    pub fn cancel(&self) {
        self.debouncer.cancel();
    }

    /// Cancel pending work and ignore all further queries.
    pub fn dispose(&self) {
        self.debouncer.dispose();
    }

    /// Check whether a search is currently pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// The last query accepted for search; empty after a clear.
    #[must_use]
    pub fn last_query(&self) -> String {
        self.last_query.lock().clone()
    }

    /// The configured minimum query length, in `char`s.
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Apply trim, minimum-length, and duplicate-suppression policy.
    fn accept(&self, query: &str) -> Acceptance {
        let trimmed = query.trim();

        // Length in chars: the minimum is about what the user typed, not
        // about encoded bytes.
        if trimmed.is_empty() || trimmed.chars().count() < self.min_length {
            self.debouncer.cancel();
            self.last_query.lock().clear();
            return Acceptance::Clear;
        }

        let mut last = self.last_query.lock();
        if *last == trimmed {
            trace!(query = trimmed, "duplicate query suppressed");
            return Acceptance::Duplicate;
        }
        *last = trimmed.to_owned();
        Acceptance::Search(trimmed.to_owned())
    }
}

enum Acceptance {
    Clear,
    Duplicate,
    Search(String),
}
