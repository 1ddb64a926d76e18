// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the pacer scheduling toolkit.
//!
//! The root [`PacerError`] type separates the three failure modes a caller
//! of a scheduling component can observe: a pending or in-flight call was
//! cancelled, the wrapped action itself failed, or the component was
//! constructed with invalid arguments.
//!
//! Cancellations are ordinary control flow for rate-limited call sites, so
//! [`PacerError::is_cancellation`] lets callers drop them while still
//! surfacing real action failures.
//!
//! # Examples
//!
//! ```
//! use pacer_core::{PacerError, Result};
//!
//! fn lookup() -> Result<()> {
//!     Err(PacerError::cancelled("superseded by a newer call"))
//! }
//!
//! match lookup() {
//!     Err(e) if e.is_cancellation() => {} // ignore
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

/// Root error type for all pacer operations.
#[derive(Debug, thiserror::Error)]
pub enum PacerError {
    /// A pending or in-flight call was cancelled.
    ///
    /// Raised when a newer call supersedes an outstanding one, or when
    /// `cancel`/`dispose` is invoked while work is outstanding.
    #[error("cancelled: {context}")]
    Cancelled {
        /// What was cancelled and why.
        context: String,
    },

    /// The wrapped action failed.
    ///
    /// Errors produced by user-supplied actions are propagated unchanged;
    /// the scheduling core does not catch, retry, or suppress them.
    #[error("action failed: {0}")]
    Action(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Invalid constructor arguments.
    ///
    /// Reported at construction time, never deferred to the first call.
    #[error("invalid configuration: {context}")]
    Configuration {
        /// Which argument was rejected and why.
        context: String,
    },
}

impl PacerError {
    /// Create a cancellation error with the given context.
    pub fn cancelled(context: impl Into<String>) -> Self {
        Self::Cancelled {
            context: context.into(),
        }
    }

    /// Wrap an error produced by a user-supplied action.
    pub fn action(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Action(Box::new(error))
    }

    /// Create a configuration error with the given context.
    pub fn configuration(context: impl Into<String>) -> Self {
        Self::Configuration {
            context: context.into(),
        }
    }

    /// Check whether this error is a cancellation.
    ///
    /// Callers typically ignore cancellations (they are the normal fate of
    /// superseded calls) and only surface the other kinds.
    #[must_use]
    pub const fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Check whether this error came from the wrapped action.
    #[must_use]
    pub const fn is_action_failure(&self) -> bool {
        matches!(self, Self::Action(_))
    }

    /// Check whether this error was raised at construction time.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Specialized Result type for pacer operations.
pub type Result<T> = std::result::Result<T, PacerError>;
