//! Recording dialer for call assertions

use async_trait::async_trait;
use parking_lot::Mutex;
use seettu_core::effects::{TelephonyEffects, TelephonyError};

/// Dialer that records every target instead of placing calls.
#[derive(Debug, Default)]
pub struct RecordingDialer {
    calls: Mutex<Vec<String>>,
}

impl RecordingDialer {
    /// Create a dialer with an empty call log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets dialed so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl TelephonyEffects for RecordingDialer {
    async fn dial(&self, target: &str) -> Result<(), TelephonyError> {
        self.calls.lock().push(target.to_string());
        Ok(())
    }
}
