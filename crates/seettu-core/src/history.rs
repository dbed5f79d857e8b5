//! Draw history records

use crate::identifiers::{MemberId, RecordId};
use serde::{Deserialize, Serialize};
use time::Date;

/// A completed draw.
///
/// Appended exactly once per settled draw and never mutated or removed.
/// The winner is keyed by [`MemberId`]; `winner_name` is a denormalized copy
/// kept for display so history renders without a roster join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    /// Record identifier; equals the round number by construction.
    pub id: RecordId,
    /// Winner's roster identifier. Eligibility joins against this.
    pub winner_id: MemberId,
    /// Winner's display name at draw time.
    pub winner_name: String,
    /// Amount awarded: the pool total at draw time.
    pub amount: u64,
    /// Calendar day the draw settled.
    pub date: Date,
    /// 1-based round number, equal to insertion order.
    pub round: u32,
}
