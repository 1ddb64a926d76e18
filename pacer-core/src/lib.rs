// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for the pacer scheduling toolkit.
//!
//! This crate carries the pieces every scheduling component builds on:
//!
//! - [`PacerError`] / [`Result`] - the error taxonomy shared by all
//!   components, distinguishing cancellations from real action failures
//!   and from construction-time configuration mistakes.
//! - [`CancellationToken`] - a cloneable cancel-once flag with an async
//!   wait, used to own and invalidate pending one-shot executions.

pub mod cancellation_token;
pub mod error;

pub use self::cancellation_token::CancellationToken;
pub use self::error::{PacerError, Result};
