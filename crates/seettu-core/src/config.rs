//! Pool configuration
//!
//! All amounts and timings the app core consumes flow from this struct
//! rather than from scattered literals, so tests and alternative frontends
//! can tune the draw cadence without touching engine code.

use serde::{Deserialize, Serialize};

/// Configuration for a seettu pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Fixed per-member contribution, in currency units.
    pub contribution: u64,
    /// Maximum roster size.
    pub roster_capacity: usize,
    /// Countdown length in seconds before the shuffle starts.
    pub countdown_secs: u32,
    /// Cadence of the countdown, in milliseconds.
    pub countdown_tick_ms: u64,
    /// Number of highlight ticks in the shuffle phase.
    pub shuffle_ticks: u32,
    /// Cadence of the shuffle, in milliseconds.
    pub shuffle_tick_ms: u64,
    /// Delay between settlement and the completion report, in milliseconds.
    pub settle_delay_ms: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            contribution: 1000,
            roster_capacity: 10,
            countdown_secs: 3,
            countdown_tick_ms: 1000,
            shuffle_ticks: 20,
            shuffle_tick_ms: 150,
            settle_delay_ms: 5000,
        }
    }
}

impl PoolConfig {
    /// Pool amount for a given number of paid members.
    pub fn pool_amount(&self, paid_count: usize) -> u64 {
        paid_count as u64 * self.contribution
    }
}
