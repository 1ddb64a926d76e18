// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cloneable cancel-once token.
//!
//! Every pending one-shot execution in this workspace is owned through a
//! `CancellationToken`: arming stores a token, re-arming cancels the old
//! token before storing a new one, so at most one live deferred execution
//! exists per instance and none is ever leaked.

use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use event_listener::Event;

/// Cloneable cancellation token.
///
/// All clones share the same cancellation state. Once [`cancel`] is called
/// on any clone, [`is_cancelled`] reports `true` on every clone and all
/// waiters on [`cancelled`] are woken. A token can never be un-cancelled.
///
/// [`cancel`]: CancellationToken::cancel
/// [`is_cancelled`]: CancellationToken::is_cancelled
/// [`cancelled`]: CancellationToken::cancelled
///
/// # Example
///
/// ```
/// use pacer_core::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    cancelled: AtomicBool,
    event: Event,
}

impl CancellationToken {
    /// Create a new token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                cancelled: AtomicBool::new(false),
                event: Event::new(),
            }),
        }
    }

    /// Cancel the token, waking all waiters.
    ///
    /// Idempotent: cancelling an already-cancelled token is a no-op.
    pub fn cancel(&self) {
        // Release so waiters observing the flag see everything written
        // before the cancel.
        self.shared.cancelled.store(true, Ordering::Release);
        self.shared.event.notify(usize::MAX);
    }

    /// Check whether the token has been cancelled (non-blocking).
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::Acquire)
    }

    /// Wait until the token is cancelled.
    ///
    /// Resolves immediately if the token is already cancelled.
    pub async fn cancelled(&self) {
        loop {
            if self.is_cancelled() {
                return;
            }
            let listener = self.shared.event.listen();
            // Re-check after registering: a cancel between the check above
            // and listen() would otherwise be missed.
            if self.is_cancelled() {
                return;
            }
            listener.await;
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
