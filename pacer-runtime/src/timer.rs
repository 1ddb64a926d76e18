// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::ops::{Add, Sub};
use core::time::Duration;

/// Monotonic clock abstraction.
///
/// Implementations must be cheap to clone; components clone their timer
/// into every deferred execution they arm.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    /// Future returned by [`sleep_future`](Timer::sleep_future).
    type Sleep: Future<Output = ()> + Send + 'static;

    /// Instant type reported by [`now`](Timer::now).
    ///
    /// Subtraction of an earlier instant must saturate to zero rather
    /// than panic.
    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// A future that completes `duration` from now.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    /// The current instant.
    fn now(&self) -> Self::Instant;
}
