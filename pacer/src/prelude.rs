// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the commonly used types.
//!
//! ```ignore
//! use pacer::prelude::*;
//!
//! let debouncer = Debouncer::new(Duration::from_millis(300))?;
//! let throttler = Throttler::new(Duration::from_millis(200))?;
//! ```

pub use crate::async_debounce::AsyncDebouncer;
pub use crate::debounce::Debouncer;
pub use crate::debounce_throttle::DebounceThrottle;
pub use crate::scheduled::ScheduledAction;
pub use crate::search::SearchDebouncer;
pub use crate::throttle::Throttler;

pub use pacer_core::{PacerError, Result};
pub use pacer_runtime::{Timer, TokioTimer};
