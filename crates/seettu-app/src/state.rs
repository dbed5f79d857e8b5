//! # Pool State
//!
//! The single owner of all mutable pool data: the member roster and the
//! draw history. Mutation happens through two commands, `toggle_payment`
//! and `record_draw_winner`; everything else is a snapshot read.
//!
//! Derived values (counts, pool amount, eligibility) are recomputed on
//! every call. At roster scale (capacity 10) an incremental-update path
//! would buy nothing.

use seettu_core::{CoreError, CurrentUser, DrawRecord, Member, MemberId, PoolConfig, RecordId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use time::Date;

/// All mutable pool state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolState {
    members: Vec<Member>,
    history: Vec<DrawRecord>,
    current_user: CurrentUser,
}

impl PoolState {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create pool state from a roster, prior history, and the current user.
    ///
    /// Enforces the configured roster capacity and id uniqueness.
    pub fn new(
        members: Vec<Member>,
        history: Vec<DrawRecord>,
        current_user: CurrentUser,
        config: &PoolConfig,
    ) -> Result<Self, CoreError> {
        if members.len() > config.roster_capacity {
            return Err(CoreError::RosterFull {
                count: members.len(),
                capacity: config.roster_capacity,
            });
        }
        let mut seen = HashSet::new();
        for member in &members {
            if !seen.insert(member.id) {
                return Err(CoreError::DuplicateMemberId {
                    id: member.id.value(),
                });
            }
        }
        Ok(Self {
            members,
            history,
            current_user,
        })
    }

    // =========================================================================
    // Query Methods
    // =========================================================================

    /// The roster, in construction order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Get a member by id.
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// The draw history, in append order (oldest first).
    pub fn history(&self) -> &[DrawRecord] {
        &self.history
    }

    /// The hardcoded current user.
    pub fn current_user(&self) -> &CurrentUser {
        &self.current_user
    }

    /// Number of members with a paid contribution.
    pub fn paid_count(&self) -> usize {
        self.members.iter().filter(|m| m.paid).count()
    }

    /// Number of members with a pending contribution.
    pub fn pending_count(&self) -> usize {
        self.members.len() - self.paid_count()
    }

    /// Pool total: paid count times the configured contribution.
    pub fn pool_amount(&self, config: &PoolConfig) -> u64 {
        config.pool_amount(self.paid_count())
    }

    /// Members eligible for the next draw: paid, and not a past winner.
    ///
    /// The join is by member id, so duplicate display names cannot
    /// cross-exclude members. Recomputed on every call.
    pub fn eligible_members(&self) -> Vec<&Member> {
        self.members
            .iter()
            .filter(|m| m.paid && !self.history.iter().any(|h| h.winner_id == m.id))
            .collect()
    }

    /// The upcoming round number: history length + 1, 1-based.
    pub fn current_round(&self) -> u32 {
        self.history.len() as u32 + 1
    }

    // =========================================================================
    // Mutation Commands
    // =========================================================================

    /// Flip a member's payment flag.
    ///
    /// Returns the new flag value, or `None` if the id matches nothing.
    pub fn toggle_payment(&mut self, id: MemberId) -> Option<bool> {
        let member = self.members.iter_mut().find(|m| m.id == id)?;
        member.paid = !member.paid;
        Some(member.paid)
    }

    /// Append a draw record for the given winner.
    ///
    /// Round and record id are both assigned as history length + 1. The
    /// winner stays in the roster; future exclusion happens purely through
    /// the eligibility join. Returns `None` if the id matches nothing.
    pub fn record_draw_winner(
        &mut self,
        winner_id: MemberId,
        amount: u64,
        date: Date,
    ) -> Option<&DrawRecord> {
        let winner_name = self.member(winner_id)?.name.clone();
        let round = self.history.len() as u32 + 1;
        self.history.push(DrawRecord {
            id: RecordId::new(round),
            winner_id,
            winner_name,
            amount,
            date,
            round,
        });
        self.history.last()
    }
}
