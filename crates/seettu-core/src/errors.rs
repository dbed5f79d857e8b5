//! Core error types
//!
//! Everything here is a soft failure: the pool has no I/O and no fatal
//! conditions, so errors are typed values the caller surfaces to the user.

use thiserror::Error;

/// Errors from core domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Roster construction exceeded the configured capacity.
    #[error("roster holds {count} members but capacity is {capacity}")]
    RosterFull {
        /// Members supplied.
        count: usize,
        /// Configured bound.
        capacity: usize,
    },

    /// Two roster members share the same identifier.
    #[error("duplicate member id {id}")]
    DuplicateMemberId {
        /// The colliding identifier value.
        id: u32,
    },
}
