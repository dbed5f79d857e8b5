//! # Seettu App - Headless Application Core
//!
//! The state-owning core of the lucky-draw pool. Frontends dispatch
//! [`Intent`]s and read typed view-state snapshots; they never mutate pool
//! state directly.
//!
//! ## Flow
//!
//! ```text
//! Intent → Dispatch → PoolState → View
//! ```
//!
//! All mutation goes through [`AppCore::dispatch`]. Views
//! ([`views::DashboardView`], [`views::RosterView`], [`views::DrawView`],
//! [`views::HistoryView`]) are pure projections of the current snapshot and
//! are recomputed on every read; nothing derived is cached.
//!
//! The draw itself is a small state machine ([`engine::DrawEngine`]) whose
//! countdown, shuffle, and settle delays suspend through the clock effect
//! injected at construction, so tests drive complete draws on a
//! controllable clock.

#![forbid(unsafe_code)]

pub mod app;
pub mod engine;
pub mod errors;
pub mod intent;
pub mod state;
pub mod views;

pub use app::AppCore;
pub use engine::{DrawEngine, DrawError, DrawPhase};
pub use errors::DispatchError;
pub use intent::{Intent, Screen};
pub use state::PoolState;
