//! # Dashboard View State

use crate::state::PoolState;
use seettu_core::PoolConfig;
use serde::{Deserialize, Serialize};

/// Headline counters and the greeting for the dashboard screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Current roster size.
    pub member_count: usize,
    /// Configured roster capacity.
    pub capacity: usize,
    /// Current pool total.
    pub pool_amount: u64,
    /// Members with a paid contribution.
    pub paid_count: usize,
    /// Members eligible for the next draw.
    pub eligible_count: usize,
    /// Upcoming round number.
    pub current_round: u32,
    /// Fixed per-member contribution.
    pub contribution: u64,
    /// Current user's display name for the greeting.
    pub greeting_name: String,
    /// Whether the admin badge is shown.
    pub is_admin: bool,
}

impl DashboardView {
    /// Project the dashboard from a pool snapshot.
    pub fn project(state: &PoolState, config: &PoolConfig) -> Self {
        let user = state.current_user();
        Self {
            member_count: state.members().len(),
            capacity: config.roster_capacity,
            pool_amount: state.pool_amount(config),
            paid_count: state.paid_count(),
            eligible_count: state.eligible_members().len(),
            current_round: state.current_round(),
            contribution: config.contribution,
            greeting_name: user.name.clone(),
            is_admin: user.is_admin,
        }
    }
}
