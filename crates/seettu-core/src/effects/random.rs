//! Random effect interface
//!
//! The draw only needs uniform indexing into the eligible set. This is
//! explicitly non-cryptographic and non-auditable randomness; the pool is a
//! casual family draw, not a verifiable lottery.

use async_trait::async_trait;

/// Uniform pseudo-randomness.
#[async_trait]
pub trait RandomEffects: Send + Sync {
    /// A uniformly distributed `u64`.
    async fn random_u64(&self) -> u64;

    /// A uniformly distributed index in `[0, bound)`.
    ///
    /// `bound` must be non-zero; callers index into non-empty slices.
    async fn random_index(&self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        // Widening multiply maps the u64 range onto [0, bound).
        ((self.random_u64().await as u128 * bound as u128) >> 64) as usize
    }
}

#[async_trait]
impl<T: RandomEffects + ?Sized> RandomEffects for std::sync::Arc<T> {
    async fn random_u64(&self) -> u64 {
        (**self).random_u64().await
    }

    async fn random_index(&self, bound: usize) -> usize {
        (**self).random_index(bound).await
    }
}
