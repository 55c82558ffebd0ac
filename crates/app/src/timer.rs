//! Clock and delay helpers that work on both wasm and native targets.

use std::time::Duration;

use chrono::{Local, NaiveDateTime, NaiveTime, Timelike};

/// Suspend the current task for `duration`. Zero returns immediately.
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Local time truncated to the minute, used to stamp calls and log entries.
pub fn stamp() -> NaiveTime {
    truncate_to_minute(now().time())
}

pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}
