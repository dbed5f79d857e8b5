//! Dispatch error types
//!
//! Every failure here is soft: dispatch surfaces it to the caller (and
//! usually as a toast), the app keeps running, and nothing panics.

use crate::engine::DrawError;
use seettu_core::effects::TelephonyError;
use seettu_core::MemberId;
use thiserror::Error;

/// Errors from dispatching an intent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The intent named a member id absent from the roster.
    #[error("unknown member {id}")]
    UnknownMember {
        /// The identifier that matched nothing.
        id: MemberId,
    },

    /// The draw engine rejected or abandoned the draw.
    #[error(transparent)]
    Draw(#[from] DrawError),

    /// The telephony collaborator failed to launch a call.
    #[error(transparent)]
    Telephony(#[from] TelephonyError),
}
