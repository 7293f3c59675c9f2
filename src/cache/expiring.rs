//! Expiring Cache Module
//!
//! Public thread-safe facade over a mutex-guarded store, plus the wiring to
//! a per-instance background sweep worker.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, SystemTime};

use tokio::sync::mpsc;

use crate::cache::entry::{current_timestamp_ms, deadline_ms};
use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::tasks::spawn_sweeper;

// == Expiring Cache ==
/// Thread-safe key/value cache with optional per-entry expiration and
/// self-triggered, rate-limited background cleanup.
///
/// Every read and write path funnels through a single mutex over the whole
/// store; critical sections are a map operation, except the sweep which
/// scans the full store while holding the lock. Reads and writes hand a
/// sweep trigger to a dedicated worker thread and return without waiting
/// for it.
///
/// A `get` that finds nothing conflates three cases the caller cannot tell
/// apart: the key was never set, it was deleted, or it expired. Expired
/// entries read as absent but are only physically removed by a sweep, a
/// `delete`, or an overwrite.
///
/// Cloning the handle is cheap; clones share the same underlying store.
/// Dropping the last handle releases the store and stops the worker thread.
#[derive(Debug, Clone)]
pub struct ExpiringCache<V> {
    /// Opaque name for the background worker thread, diagnostics only
    label: String,
    /// Shared store; the sweep worker holds a weak reference to it
    store: Arc<Mutex<CacheStore<V>>>,
    /// Trigger channel to the sweep worker
    sweep_tx: mpsc::Sender<()>,
}

impl<V: Send + 'static> ExpiringCache<V> {
    // == Constructor ==
    /// Creates a cache with the default one-hour sweep cooldown.
    ///
    /// # Arguments
    /// * `label` - Name given to the background worker thread. Carries no
    ///   semantic weight; label collisions across instances only make traces
    ///   harder to read.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_config(label, CacheConfig::default())
    }

    /// Creates a cache with explicit configuration.
    ///
    /// Construction is infallible: if the OS refuses to spawn the worker
    /// thread, the failure is logged and sweep triggers become no-ops while
    /// the cache itself keeps working.
    pub fn with_config(label: impl Into<String>, config: CacheConfig) -> Self {
        let label = label.into();
        let store = Arc::new(Mutex::new(CacheStore::with_cooldown(config.sweep_cooldown)));
        let sweep_tx = spawn_sweeper(&label, Arc::downgrade(&store));

        Self {
            label,
            store,
            sweep_tx,
        }
    }
}

impl<V: Clone> ExpiringCache<V> {
    // == Get ==
    /// Retrieves a clone of the value stored under `key`.
    ///
    /// Returns `None` when the key is absent or its entry has expired; the
    /// expiration check runs against the live clock at call time. An expired
    /// entry is left in place for the next sweep. After the read decision a
    /// sweep trigger is handed to the worker, hit or miss.
    pub fn get(&self, key: &str) -> Option<V> {
        let value = self.lock_store().get(key).cloned();
        self.clean_expired_async();
        value
    }
}

impl<V> ExpiringCache<V> {
    // == Set ==
    /// Stores a value that never expires, overwriting any existing entry.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_entry(key.into(), value, None);
    }

    /// Stores a value expiring at an absolute wall-clock deadline.
    pub fn set_expiring_at(&self, key: impl Into<String>, value: V, deadline: SystemTime) {
        self.set_entry(key.into(), value, Some(deadline_ms(deadline)));
    }

    /// Stores a value expiring `ttl` from now.
    ///
    /// The deadline is computed once at call time and not re-evaluated
    /// later.
    pub fn set_expiring_in(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let expires_at = current_timestamp_ms().saturating_add(ttl.as_millis() as u64);
        self.set_entry(key.into(), value, Some(expires_at));
    }

    /// Inserts the entry under the lock, then triggers a sweep.
    fn set_entry(&self, key: String, value: V, expires_at: Option<u64>) {
        self.lock_store().set(key, value, expires_at);
        self.clean_expired_async();
    }

    // == Delete ==
    /// Removes the entry under `key`, if any. Idempotent.
    ///
    /// A targeted O(1) removal; unlike `get` and `set`, this does not
    /// trigger a sweep.
    pub fn delete(&self, key: &str) {
        self.lock_store().delete(key);
    }

    // == Clean Expired (async) ==
    /// Requests a sweep on the worker thread without blocking.
    ///
    /// The trigger channel is bounded; a trigger arriving while one is
    /// already queued is dropped. Sweeps are idempotent, so coalescing
    /// redundant triggers changes nothing beyond saving a scan.
    pub fn clean_expired_async(&self) {
        let _ = self.sweep_tx.try_send(());
    }

    // == Clean Expired ==
    /// Runs the rate-limited sweep on the calling thread.
    ///
    /// This is the same path the worker takes: a no-op inside the cooldown
    /// window, a full scan-and-remove of expired entries past it.
    ///
    /// # Returns
    /// - `None` if the sweep was skipped under cooldown
    /// - `Some(removed)` if the sweep ran and removed `removed` entries
    pub fn clean_expired(&self) -> Option<usize> {
        self.lock_store().clean_expired()
    }

    // == Accessors ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.lock_store().stats()
    }

    /// Returns the number of stored entries. Stale entries that have not
    /// been swept yet are counted, so this may exceed the number of readable
    /// keys.
    pub fn len(&self) -> usize {
        self.lock_store().len()
    }

    /// Returns true if the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.lock_store().is_empty()
    }

    /// Returns the label naming this cache's worker thread.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Acquires the store lock, absorbing poisoning: no operation on this
    /// cache has a user-visible failure mode.
    fn lock_store(&self) -> MutexGuard<'_, CacheStore<V>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
