//! Timestamp source for event timing.

use std::sync::OnceLock;
use std::time::Instant;

/// Source of monotonic nanosecond timestamps.
pub trait Clock: Send + Sync {
    fn now_nanos(&self) -> i64;
}

/// Nanoseconds elapsed since a process-wide anchor taken on first use.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

fn anchor() -> Instant {
    static ANCHOR: OnceLock<Instant> = OnceLock::new();
    *ANCHOR.get_or_init(Instant::now)
}

impl Clock for MonotonicClock {
    fn now_nanos(&self) -> i64 {
        // Saturates after ~292 years of uptime.
        i64::try_from(anchor().elapsed().as_nanos()).unwrap_or(i64::MAX)
    }
}
