//! Seettu Core - Domain Foundation
//!
//! This crate provides the domain types and effect interfaces shared by the
//! rest of the workspace. It contains only pure data and trait signatures:
//! no handler implementations, no runtime coupling, no view logic.
//!
//! # Contents
//!
//! - Identifiers (`MemberId`, `RecordId`)
//! - Roster and history types (`Member`, `DrawRecord`)
//! - Pool configuration (`PoolConfig`)
//! - Effect interfaces (`ClockEffects`, `RandomEffects`, `TelephonyEffects`)
//!
//! Effect handlers live in `seettu-effects` (production) and
//! `seettu-testkit` (deterministic test doubles).

#![forbid(unsafe_code)]

pub mod config;
pub mod effects;
pub mod errors;
pub mod history;
pub mod identifiers;
pub mod member;

pub use config::PoolConfig;
pub use errors::CoreError;
pub use history::DrawRecord;
pub use identifiers::{MemberId, RecordId};
pub use member::{CurrentUser, Member};
