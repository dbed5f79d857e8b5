//! System clock handler
//!
//! Delegates to system time APIs and `tokio::time`. This handler is
//! stateless; controllable clocks for tests belong in `seettu-testkit`.

use async_trait::async_trait;
use seettu_core::effects::ClockEffects;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::time;

/// Real clock for production use.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock handler.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClockEffects for SystemClock {
    async fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_millis() as u64
    }

    async fn sleep_ms(&self, ms: u64) {
        time::sleep(Duration::from_millis(ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn now_ms_is_monotonic_enough() {
        let clock = SystemClock::new();
        let first = clock.now_ms().await;
        time::sleep(Duration::from_millis(10)).await;
        let second = clock.now_ms().await;
        assert!(second >= first);
    }

    #[tokio::test]
    async fn sleep_ms_waits() {
        let clock = SystemClock::new();
        let start = Instant::now();
        clock.sleep_ms(50).await;
        // Allow some variance
        assert!(start.elapsed() >= Duration::from_millis(40));
    }
}
