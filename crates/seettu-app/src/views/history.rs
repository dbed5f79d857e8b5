//! # History View State

use crate::state::PoolState;
use seettu_core::DrawRecord;
use serde::{Deserialize, Serialize};

/// Past draws and their aggregates for the history screen.
///
/// Entries keep append order, which is oldest-first by construction; no
/// re-sorting happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryView {
    /// Completed draws, oldest first.
    pub entries: Vec<DrawRecord>,
    /// Number of completed draws.
    pub total_draws: usize,
    /// Sum of all awarded amounts.
    pub total_distributed: u64,
    /// Floor of the mean awarded amount; 0 with no draws.
    pub average_win_amount: u64,
}

impl HistoryView {
    /// Project the history screen from a pool snapshot.
    pub fn project(state: &PoolState) -> Self {
        let entries = state.history().to_vec();
        let total_distributed: u64 = entries.iter().map(|e| e.amount).sum();
        let average_win_amount = if entries.is_empty() {
            0
        } else {
            total_distributed / entries.len() as u64
        };
        Self {
            total_draws: entries.len(),
            total_distributed,
            average_win_amount,
            entries,
        }
    }
}
