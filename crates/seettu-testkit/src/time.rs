//! Controllable clock for deterministic tests
//!
//! Sleeping advances the clock instead of waiting, then yields once so
//! concurrently spawned tasks interleave at tick boundaries. A full draw
//! (countdown, shuffle, settle delay) completes in microseconds of real
//! time while the virtual clock records the elapsed milliseconds.

use async_trait::async_trait;
use parking_lot::Mutex;
use seettu_core::effects::ClockEffects;

/// Clock whose time only moves when a test (or a sleep) advances it.
#[derive(Debug)]
pub struct ControllableClock {
    now_ms: Mutex<u64>,
}

impl ControllableClock {
    /// Create a clock at the given Unix timestamp in milliseconds.
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Mutex::new(start_ms),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        *self.now_ms.lock()
    }

    /// Advance virtual time.
    pub fn advance_ms(&self, ms: u64) {
        *self.now_ms.lock() += ms;
    }

    /// Set absolute virtual time.
    pub fn set_ms(&self, ms: u64) {
        *self.now_ms.lock() = ms;
    }
}

#[async_trait]
impl ClockEffects for ControllableClock {
    async fn now_ms(&self) -> u64 {
        self.now()
    }

    async fn sleep_ms(&self, ms: u64) {
        self.advance_ms(ms);
        tokio::task::yield_now().await;
    }
}
