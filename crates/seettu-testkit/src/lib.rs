//! Deterministic test doubles and fixtures
//!
//! Implementations of the `seettu-core` effect interfaces that tests can
//! control: a clock that advances instead of waiting, a seeded RNG, and a
//! dialer that records calls. Plus roster/history fixtures mirroring the
//! product's sample family pool.

#![forbid(unsafe_code)]

pub mod fixtures;
pub mod random;
pub mod telephony;
pub mod time;

pub use self::fixtures::{family_roster, past_winners, pool_admin};
pub use self::random::SeededRandom;
pub use self::telephony::RecordingDialer;
pub use self::time::ControllableClock;
