//! Wall-clock seam for receipt timestamps.
//!
//! Fresh construction stamps the local receipt time; tests substitute a
//! fixed clock so receipt times are deterministic.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the local wall-clock time, in milliseconds since the Unix epoch.
pub trait Clock {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before Unix epoch")
            .as_millis() as u64
    }
}
