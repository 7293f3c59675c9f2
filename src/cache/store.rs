//! Cache Store Module
//!
//! Unsynchronized cache engine combining HashMap storage with lazy expiration
//! and the rate-limited sweep policy. Thread safety is layered on top by
//! `ExpiringCache`, which guards a store with a mutex.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats, SWEEP_COOLDOWN};

// == Cache Store ==
/// Key-value storage with optional per-entry expiration and a rate-limited
/// full sweep of expired entries.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// When the last sweep actually ran; starts at construction time, so the
    /// first sweep does work no earlier than one cooldown after construction
    last_sweep: Instant,
    /// Minimum interval between sweeps
    sweep_cooldown: Duration,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the default one-hour sweep cooldown.
    pub fn new() -> Self {
        Self::with_cooldown(SWEEP_COOLDOWN)
    }

    /// Creates a new CacheStore with a custom sweep cooldown.
    ///
    /// # Arguments
    /// * `sweep_cooldown` - Minimum interval enforced between sweeps
    pub fn with_cooldown(sweep_cooldown: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            last_sweep: Instant::now(),
            sweep_cooldown,
        }
    }

    // == Get ==
    /// Looks up a value by key, treating expired entries as absent.
    ///
    /// An expired entry is NOT removed here: the read path stays
    /// non-mutating with respect to the map, and reclamation is left to the
    /// sweep or an explicit delete/overwrite. Absent and expired both count
    /// as misses.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<&V> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.stats.record_hit();
                Some(&entry.value)
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a key-value pair with an optional absolute expiration.
    ///
    /// If the key already exists, the entry is overwritten, stale or not.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `expires_at` - Optional expiration timestamp in Unix milliseconds
    pub fn set(&mut self, key: String, value: V, expires_at: Option<u64>) {
        self.entries.insert(key, CacheEntry::new(value, expires_at));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Delete ==
    /// Removes an entry by key. Idempotent no-op when the key is absent.
    ///
    /// # Arguments
    /// * `key` - The key to delete
    ///
    /// # Returns
    /// `true` if an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Clean Expired ==
    /// The rate-limited full sweep.
    ///
    /// Returns immediately without touching the store when less than the
    /// cooldown has elapsed since the last sweep that ran. Otherwise stamps
    /// the sweep time and removes every entry whose expiration is in the
    /// past. This is the only O(n) path in the store.
    ///
    /// # Returns
    /// - `None` if the sweep was skipped under cooldown
    /// - `Some(removed)` if the sweep ran and removed `removed` entries
    pub fn clean_expired(&mut self) -> Option<usize> {
        if self.last_sweep.elapsed() < self.sweep_cooldown {
            return None;
        }
        self.last_sweep = Instant::now();

        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        self.stats.record_swept(removed);
        self.stats.set_total_entries(self.entries.len());

        Some(removed)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, stale entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
