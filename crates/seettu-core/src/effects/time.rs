//! Clock effect interface
//!
//! The draw engine's countdown, shuffle, and settle delays all suspend
//! through this trait, so tests can drive a whole draw by advancing a
//! controllable clock instead of waiting on real timers.

use async_trait::async_trait;
use time::{Date, OffsetDateTime};

/// Wall-clock time and sleeping.
#[async_trait]
pub trait ClockEffects: Send + Sync {
    /// Current Unix timestamp in milliseconds.
    async fn now_ms(&self) -> u64;

    /// Suspend for `ms` milliseconds.
    async fn sleep_ms(&self, ms: u64);

    /// Current calendar day, derived from [`now_ms`](Self::now_ms).
    ///
    /// History entries store dates at day granularity; timestamps before the
    /// Unix epoch clamp to it.
    async fn today(&self) -> Date {
        let secs = (self.now_ms().await / 1000) as i64;
        OffsetDateTime::from_unix_timestamp(secs)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
            .date()
    }
}

#[async_trait]
impl<T: ClockEffects + ?Sized> ClockEffects for std::sync::Arc<T> {
    async fn now_ms(&self) -> u64 {
        (**self).now_ms().await
    }

    async fn sleep_ms(&self, ms: u64) {
        (**self).sleep_ms(ms).await;
    }
}
