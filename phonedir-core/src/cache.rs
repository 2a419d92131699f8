//! Bounded top-K cache with an explicit valid/invalidated lifecycle.
//!
//! The cache keeps the K highest-ranked values inserted since its last
//! rebuild. Insertions and in-place updates are O(K); removals from the
//! backing source are not representable incrementally — evicting the
//! K-th ranked value says nothing about the next-best candidate without a
//! full rescan — so affected callers [`invalidate`](TopKCache::invalidate)
//! the cache and recover through [`rebuild`](TopKCache::rebuild) with a
//! fresh scan of the source.
//!
//! Not safe for concurrent access. Sharing a cache across writers needs
//! external mutual exclusion covering the cache and its backing source as
//! one unit.

use std::cmp::Ordering;
use thiserror::Error;

/// Ranking comparator: a total order where `Greater` means better-ranked.
pub type RankFn<T> = fn(&T, &T) -> Ordering;

/// Error returned when reading an invalidated cache.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The cache was invalidated and holds nothing; rebuild it from the
    /// backing source before reading.
    #[error("cache is invalidated; rebuild required")]
    Invalidated,
}

/// Bounded cache of the K highest-ranked values.
///
/// Containment uses the value's own equality (identity), never the
/// ranking comparator, so a value whose rank changed since it was cached
/// still counts as present.
#[derive(Debug, Clone)]
pub struct TopKCache<T> {
    values: Vec<T>,
    capacity: usize,
    rank: RankFn<T>,
    invalidated: bool,
}

impl<T: Clone + PartialEq> TopKCache<T> {
    /// A valid, empty cache holding at most `capacity` values.
    pub fn new(capacity: usize, rank: RankFn<T>) -> Self {
        Self {
            values: Vec::with_capacity(capacity + 1),
            capacity,
            rank,
            invalidated: false,
        }
    }

    /// Admit `value`, then evict the single lowest-ranked value if the
    /// cache now exceeds its capacity.
    pub fn insert(&mut self, value: T) {
        self.values.push(value);
        if self.values.len() > self.capacity {
            let worst = self
                .position_of_worst()
                .expect("cache exceeds capacity, so it is non-empty");
            self.values.swap_remove(worst);
        }
    }

    /// The cached values ranked best-first.
    ///
    /// # Errors
    ///
    /// [`CacheError::Invalidated`] once [`invalidate`](Self::invalidate)
    /// has been called and until the next rebuild.
    pub fn ordered(&self) -> Result<Vec<T>, CacheError> {
        if self.invalidated {
            return Err(CacheError::Invalidated);
        }
        Ok(self.sorted_values())
    }

    /// True if a value identity-equal to `value` is currently cached,
    /// whatever rank its cached copy carries.
    pub fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }

    /// Clear the cache and mark it invalidated. One-way: only
    /// [`rebuild`](Self::rebuild) returns the cache to the valid state.
    pub fn invalidate(&mut self) {
        self.values.clear();
        self.invalidated = true;
    }

    /// True until [`invalidate`](Self::invalidate) is called, then false
    /// until the next rebuild.
    pub fn is_valid(&self) -> bool {
        !self.invalidated
    }

    /// Recreate the cache from a full scan of the backing source and mark
    /// it valid. Every value goes through the same admit/evict logic as
    /// [`insert`](Self::insert). Returns the resulting ranking, best
    /// first.
    pub fn rebuild(&mut self, values: impl IntoIterator<Item = T>) -> Vec<T> {
        self.values.clear();
        for value in values {
            self.insert(value);
        }
        self.invalidated = false;
        self.sorted_values()
    }

    /// If a value identity-equal to `value` is cached, replace the stale
    /// cached copy with `value`. Its rank position may change; the cache
    /// size does not. Attempted regardless of validity — an invalidated
    /// cache is empty, so the update is a no-op there.
    pub fn update_if_present(&mut self, value: &T) {
        if let Some(idx) = self.values.iter().position(|v| v == value) {
            self.values[idx] = value.clone();
        }
    }

    /// Admit `values` only when the cache is valid at the start of the
    /// call; on an invalidated cache they are silently dropped.
    pub fn insert_if_valid(&mut self, values: impl IntoIterator<Item = T>) {
        if !self.is_valid() {
            return;
        }
        for value in values {
            self.insert(value);
        }
    }

    /// Number of cached values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn position_of_worst(&self) -> Option<usize> {
        let rank = self.rank;
        self.values
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| rank(a, b))
            .map(|(idx, _)| idx)
    }

    fn sorted_values(&self) -> Vec<T> {
        let rank = self.rank;
        let mut out = self.values.clone();
        out.sort_by(|a, b| rank(b, a));
        out
    }
}
