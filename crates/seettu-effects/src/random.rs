//! System randomness handler
//!
//! Note: this module legitimately uses `rand::thread_rng()` as it implements
//! the `RandomEffects` trait - this is the handler layer where actual system
//! randomness is provided.

use async_trait::async_trait;
use rand::Rng;
use seettu_core::effects::RandomEffects;

/// Real random handler backed by the thread-local generator.
#[derive(Debug, Clone, Default)]
pub struct SystemRandom;

impl SystemRandom {
    /// Create a new system random handler.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RandomEffects for SystemRandom {
    async fn random_u64(&self) -> u64 {
        rand::thread_rng().gen()
    }
}
