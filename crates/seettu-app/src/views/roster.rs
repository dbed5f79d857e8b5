//! # Roster View State

use crate::state::PoolState;
use seettu_core::{Member, PoolConfig};
use serde::{Deserialize, Serialize};

/// Aggregate counters and the member list for the roster screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterView {
    /// Members with a paid contribution.
    pub paid_count: usize,
    /// Members with a pending contribution.
    pub pending_count: usize,
    /// Total collected: paid count times the contribution.
    pub total_collected: u64,
    /// Configured roster capacity, for the `n/capacity` header.
    pub capacity: usize,
    /// Members in roster order.
    pub members: Vec<Member>,
}

impl RosterView {
    /// Project the roster screen from a pool snapshot.
    pub fn project(state: &PoolState, config: &PoolConfig) -> Self {
        let paid_count = state.paid_count();
        Self {
            paid_count,
            pending_count: state.pending_count(),
            total_collected: config.pool_amount(paid_count),
            capacity: config.roster_capacity,
            members: state.members().to_vec(),
        }
    }
}
