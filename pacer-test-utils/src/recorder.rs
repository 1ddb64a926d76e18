// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Shared log of invocation values.
///
/// Clones record into the same log; hand [`hook`](Recorder::hook) to a
/// component callback and assert on [`entries`](Recorder::entries)
/// afterwards.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, value: impl Into<String>) {
        self.entries.lock().push(value.into());
    }

    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.entries.lock().last().cloned()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.lock().len()
    }

    /// A callback that records its argument into this log.
    #[must_use]
    pub fn hook(&self) -> impl Fn(&str) + Send + Sync + 'static {
        let recorder = self.clone();
        move |value: &str| recorder.record(value)
    }
}

/// Shared invocation counter.
#[derive(Clone, Debug, Default)]
pub struct Counter {
    count: Arc<AtomicU32>,
}

impl Counter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    #[must_use]
    pub fn get(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }

    /// A callback that increments this counter.
    #[must_use]
    pub fn hook(&self) -> impl Fn() + Send + Sync + 'static {
        let counter = self.clone();
        move || counter.increment()
    }
}
