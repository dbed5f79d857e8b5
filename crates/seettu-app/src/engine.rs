//! # Draw Engine
//!
//! The randomized-selection state machine:
//!
//! ```text
//! Idle → Countdown → Shuffling → Settled → Idle
//! ```
//!
//! The countdown decrements once per second; the shuffle re-highlights a
//! uniformly random eligible member every tick for visual churn, then one
//! final independent pick commits the winner. After the settle delay the
//! winner is reported exactly once and the engine resets to `Idle`.
//!
//! Every suspension goes through the injected clock effect, so tests drive
//! a complete draw by advancing a controllable clock. `cancel` aborts
//! between ticks and suppresses the completion report; a cancelled draw
//! leaves no trace.
//!
//! The selection is uniform pseudo-randomness over the eligible set:
//! non-cryptographic, non-auditable, adequate for a casual family draw.

use parking_lot::Mutex;
use seettu_core::effects::{ClockEffects, RandomEffects};
use seettu_core::{Member, MemberId, PoolConfig};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from the draw engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No member is paid and un-won; the draw cannot start.
    #[error("no members are eligible for the draw")]
    NoEligibleMembers,

    /// A draw sequence is already past `Idle`.
    #[error("a draw is already in progress")]
    DrawInProgress,

    /// The sequence was cancelled between ticks; nothing was reported.
    #[error("the draw was cancelled")]
    Cancelled,
}

/// Ephemeral engine state, reset on every draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawPhase {
    /// No draw in progress.
    Idle,
    /// Counting down before the shuffle.
    Countdown {
        /// Seconds left on the counter.
        remaining: u32,
    },
    /// Visual churn over the eligible set. No selection commitment yet.
    Shuffling {
        /// Ticks completed so far.
        ticks_done: u32,
        /// The currently highlighted candidate.
        highlighted: MemberId,
    },
    /// A winner is committed but not yet reported.
    Settled {
        /// The committed winner.
        winner: MemberId,
    },
}

/// The draw-selection state machine.
pub struct DrawEngine {
    config: PoolConfig,
    clock: Arc<dyn ClockEffects>,
    random: Arc<dyn RandomEffects>,
    phase: Mutex<DrawPhase>,
    cancelled: AtomicBool,
}

impl DrawEngine {
    /// Create an idle engine with injected clock and randomness.
    pub fn new(
        config: PoolConfig,
        clock: Arc<dyn ClockEffects>,
        random: Arc<dyn RandomEffects>,
    ) -> Self {
        Self {
            config,
            clock,
            random,
            phase: Mutex::new(DrawPhase::Idle),
            cancelled: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current phase.
    pub fn phase(&self) -> DrawPhase {
        *self.phase.lock()
    }

    /// Whether a draw sequence is past `Idle`.
    pub fn is_running(&self) -> bool {
        !matches!(self.phase(), DrawPhase::Idle)
    }

    /// Request cancellation of an in-flight draw.
    ///
    /// Takes effect at the next tick boundary; a no-op while `Idle`.
    pub fn cancel(&self) {
        if self.is_running() {
            debug!("draw cancellation requested");
            self.cancelled.store(true, Ordering::Relaxed);
        }
    }

    /// Run one complete draw over a snapshot of the eligible set.
    ///
    /// `on_settle` fires at settlement, when the winner is committed but not
    /// yet reported; the returned winner is the completion report, issued
    /// after the settle delay. Each fires at most once per call.
    pub async fn run<F>(&self, eligible: Vec<Member>, on_settle: F) -> Result<Member, DrawError>
    where
        F: FnOnce(&Member),
    {
        self.begin(&eligible)?;

        // Countdown: decrement on a fixed cadence until zero.
        let mut remaining = self.config.countdown_secs;
        while remaining > 0 {
            self.clock.sleep_ms(self.config.countdown_tick_ms).await;
            self.ensure_live()?;
            remaining -= 1;
            if remaining > 0 {
                self.set_phase(DrawPhase::Countdown { remaining });
            }
        }

        // Shuffle: re-highlight a random candidate each tick.
        for tick in 1..=self.config.shuffle_ticks {
            self.clock.sleep_ms(self.config.shuffle_tick_ms).await;
            self.ensure_live()?;
            let index = self.random.random_index(eligible.len()).await;
            self.set_phase(DrawPhase::Shuffling {
                ticks_done: tick,
                highlighted: eligible[index].id,
            });
        }

        // One final independent pick commits the winner.
        let index = self.random.random_index(eligible.len()).await;
        let winner = eligible[index].clone();
        self.set_phase(DrawPhase::Settled { winner: winner.id });
        info!(winner = %winner.id, "draw settled");
        on_settle(&winner);

        self.clock.sleep_ms(self.config.settle_delay_ms).await;
        self.ensure_live()?;
        self.set_phase(DrawPhase::Idle);
        Ok(winner)
    }

    /// Atomically claim the engine for a new draw.
    fn begin(&self, eligible: &[Member]) -> Result<(), DrawError> {
        let mut phase = self.phase.lock();
        if !matches!(*phase, DrawPhase::Idle) {
            return Err(DrawError::DrawInProgress);
        }
        if eligible.is_empty() {
            return Err(DrawError::NoEligibleMembers);
        }
        self.cancelled.store(false, Ordering::Relaxed);
        *phase = DrawPhase::Countdown {
            remaining: self.config.countdown_secs,
        };
        debug!(eligible = eligible.len(), "draw started");
        Ok(())
    }

    /// Bail out and reset if cancellation was requested since the last tick.
    fn ensure_live(&self) -> Result<(), DrawError> {
        if self.cancelled.swap(false, Ordering::Relaxed) {
            *self.phase.lock() = DrawPhase::Idle;
            info!("draw cancelled");
            return Err(DrawError::Cancelled);
        }
        Ok(())
    }

    fn set_phase(&self, next: DrawPhase) {
        debug!(phase = ?next, "draw phase");
        *self.phase.lock() = next;
    }
}
