//! Single-slot memoization of packing results.
//!
//! A flow is typically queried several times per layout pass with the same
//! proposal (measure, then place). The cache keeps the most recent
//! [`Arrangement`] and hands it back when the proposal and every measured
//! size are unchanged.
//!
//! # Hash Collisions
//!
//! By default the key is a 64-bit FxHash of the inputs and a hit is a hash
//! match, nothing more. A collision silently reuses a stale arrangement. With
//! [`FlowCache::with_strict_keys`] the slot also keeps the raw key values and a
//! hit requires exact equality.

use std::hash::Hasher;

use rustc_hash::FxHasher;
use wrapflow_core::{Proposal, Size};

use crate::arrangement::Arrangement;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses (packing passes).
    pub misses: u64,
}

impl CacheStats {
    /// Calculate hit rate (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Cache key for one packing input.
///
/// Order sensitive: swapping two sizes yields a different key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowCacheKey(u64);

impl FlowCacheKey {
    /// Hash a proposal and the measured sizes, in order.
    pub fn new(proposal: Proposal, sizes: &[Size]) -> Self {
        let mut hasher = FxHasher::default();
        for bits in key_bits(proposal, sizes) {
            hasher.write_u64(bits);
        }
        Self(hasher.finish())
    }

    /// Raw hash value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Bit patterns fed to the hasher: resolved width, resolved height, then each
/// size's width and height.
fn key_bits(proposal: Proposal, sizes: &[Size]) -> impl Iterator<Item = u64> + '_ {
    let resolved = proposal.resolved();
    [resolved.width, resolved.height]
        .into_iter()
        .chain(sizes.iter().flat_map(|s| [s.width, s.height]))
        .map(canonical_bits)
}

/// `-0.0` and `0.0` compare equal, so they must hash equal.
#[inline]
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

#[derive(Debug)]
struct Slot {
    key: FlowCacheKey,
    raw: Option<Vec<u64>>,
    arrangement: Arrangement,
}

/// Capacity-one arrangement cache.
///
/// Not thread-safe; a flow and its cache belong to a single layout pass.
#[derive(Debug, Default)]
pub struct FlowCache {
    slot: Option<Slot>,
    strict: bool,
    hits: u64,
    misses: u64,
}

impl FlowCache {
    /// Create an empty cache with hash-only keys.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache that verifies keys by full equality.
    #[must_use]
    pub fn with_strict_keys(strict: bool) -> Self {
        Self {
            strict,
            ..Self::default()
        }
    }

    /// Whether hits are verified by full key equality.
    #[inline]
    pub fn strict_keys(&self) -> bool {
        self.strict
    }

    /// Return the cached arrangement for these inputs, or compute and store it.
    ///
    /// `compute` runs only on a miss. The previous entry, if any, is dropped.
    pub fn get_or_compute<F>(&mut self, proposal: Proposal, sizes: &[Size], compute: F) -> &Arrangement
    where
        F: FnOnce() -> Arrangement,
    {
        let key = FlowCacheKey::new(proposal, sizes);
        let raw = self
            .strict
            .then(|| key_bits(proposal, sizes).collect::<Vec<_>>());

        let hit = self
            .slot
            .as_ref()
            .is_some_and(|slot| slot.key == key && (raw.is_none() || slot.raw == raw));

        if hit {
            self.hits += 1;
            tracing::trace!(key = key.get(), "flow cache hit");
        } else {
            self.misses += 1;
            tracing::trace!(key = key.get(), "flow cache miss");
            self.slot = None;
        }

        let slot = self.slot.get_or_insert_with(|| Slot {
            key,
            raw,
            arrangement: compute(),
        });
        &slot.arrangement
    }

    /// The cached arrangement, if any.
    pub fn peek(&self) -> Option<&Arrangement> {
        self.slot.as_ref().map(|slot| &slot.arrangement)
    }

    /// Drop the cached entry.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Get cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
        }
    }
}
