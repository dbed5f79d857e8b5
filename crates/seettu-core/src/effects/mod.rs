//! Pure effect interfaces (no implementations)
//!
//! These traits are the seams between the app core and the outside world:
//! wall-clock time, randomness, and the telephony collaborator. Production
//! handlers live in `seettu-effects`; deterministic doubles in
//! `seettu-testkit`.

pub mod random;
pub mod telephony;
pub mod time;

pub use random::RandomEffects;
pub use telephony::{tel_target, TelephonyEffects, TelephonyError};
pub use time::ClockEffects;
