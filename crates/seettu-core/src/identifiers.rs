//! Identifier types used across the Seettu workspace
//!
//! Roster members and history records carry small integer identifiers that
//! are stable for the lifetime of the pool. Newtypes keep the two spaces
//! from being mixed up at call sites.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Member identifier.
///
/// Unique within a roster; assigned at roster construction and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(pub u32);

impl MemberId {
    /// Create from a raw integer.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "member-{}", self.0)
    }
}

impl From<u32> for MemberId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Draw-record identifier.
///
/// Assigned at append time as history length + 1, so it always equals the
/// record's round number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u32);

impl RecordId {
    /// Create from a raw integer.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record-{}", self.0)
    }
}

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
