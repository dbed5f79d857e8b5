//! Telephony effect interface
//!
//! The pool never consumes call-state feedback: it constructs a `tel:`
//! target from the stored number and delegates, fire-and-forget.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the telephony collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TelephonyError {
    /// The platform could not launch the call.
    #[error("failed to launch call: {reason}")]
    LaunchFailed {
        /// Platform-reported reason.
        reason: String,
    },
}

/// Call initiation.
#[async_trait]
pub trait TelephonyEffects: Send + Sync {
    /// Initiate a call to a `tel:` target.
    async fn dial(&self, target: &str) -> Result<(), TelephonyError>;
}

#[async_trait]
impl<T: TelephonyEffects + ?Sized> TelephonyEffects for std::sync::Arc<T> {
    async fn dial(&self, target: &str) -> Result<(), TelephonyError> {
        (**self).dial(target).await
    }
}

/// Build a `tel:` target from a stored phone number.
///
/// Strips all whitespace; no other validation, the dialer owns that.
pub fn tel_target(phone: &str) -> String {
    let number: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{number}")
}
