//! Telephony handler
//!
//! The pool only constructs the target address and delegates; there is no
//! call-state feedback to consume. This handler records the launch in the
//! log and reports success, which is all a headless host can do.

use async_trait::async_trait;
use seettu_core::effects::{TelephonyEffects, TelephonyError};
use tracing::info;

/// Dialer that logs call launches.
#[derive(Debug, Clone, Default)]
pub struct LoggingDialer;

impl LoggingDialer {
    /// Create a new logging dialer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TelephonyEffects for LoggingDialer {
    async fn dial(&self, target: &str) -> Result<(), TelephonyError> {
        info!(%target, "launching call");
        Ok(())
    }
}
