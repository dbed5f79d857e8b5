//! # Draw View State

use crate::engine::DrawPhase;
use crate::state::PoolState;
use seettu_core::{Member, PoolConfig};
use serde::{Deserialize, Serialize};

/// Everything the draw screen renders: the prize, the eligible set, the
/// engine phase, and the cosmetic group-call flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawView {
    /// Prize money: the current pool total.
    pub pool_amount: u64,
    /// Members eligible for the draw, in roster order.
    pub eligible: Vec<Member>,
    /// Per-member win chance, floor of `100 / eligible`; 0 when nobody is
    /// eligible.
    pub win_chance_pct: u64,
    /// Whether the group call is active. Display only; gates nothing.
    pub group_call_active: bool,
    /// Current engine phase snapshot.
    pub phase: DrawPhase,
}

impl DrawView {
    /// Project the draw screen from a pool snapshot and engine state.
    pub fn project(
        state: &PoolState,
        config: &PoolConfig,
        phase: DrawPhase,
        group_call_active: bool,
    ) -> Self {
        let eligible: Vec<Member> = state.eligible_members().into_iter().cloned().collect();
        let win_chance_pct = if eligible.is_empty() {
            0
        } else {
            100 / eligible.len() as u64
        };
        Self {
            pool_amount: state.pool_amount(config),
            eligible,
            win_chance_pct,
            group_call_active,
            phase,
        }
    }
}
