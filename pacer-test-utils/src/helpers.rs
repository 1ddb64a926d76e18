// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use tokio::time::advance;

/// Yield repeatedly so spawned timer tasks run to their next await point.
///
/// With the clock paused, `advance` makes expired sleeps ready but the
/// current task keeps the thread until it yields.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Advance the paused clock just past `duration` and let timer tasks run.
pub async fn advance_past(duration: Duration) {
    advance(duration + Duration::from_millis(1)).await;
    settle().await;
}

/// Advance the paused clock by exactly `duration` and let timer tasks
/// run.
pub async fn advance_by(duration: Duration) {
    advance(duration).await;
    settle().await;
}
