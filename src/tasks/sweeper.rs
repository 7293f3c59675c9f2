//! Expiration Sweep Worker
//!
//! Dedicated per-cache thread that runs the rate-limited expiration sweep
//! whenever a cache operation hands it a trigger.

use std::sync::{Mutex, PoisonError, Weak};
use std::thread;

use tokio::sync::mpsc;
use tracing::{debug, error, info, trace};

use crate::cache::CacheStore;

/// Capacity of the trigger channel. One queued trigger is enough: sweeps are
/// idempotent, so extra triggers arriving while one is pending add nothing.
const TRIGGER_QUEUE_CAPACITY: usize = 1;

/// Spawns the sweep worker thread for a cache instance and returns the
/// sending side of its trigger channel.
///
/// The thread is named after the cache label and services triggers until
/// every sender has been dropped (channel closed) or the store itself is
/// gone. It holds only a weak reference to the store, so a cache that is
/// dropped mid-trigger is simply not swept.
///
/// Spawning is infallible from the caller's point of view: if the OS rejects
/// the thread, the failure is logged and the returned sender has no
/// receiver, turning every trigger into a no-op.
pub(crate) fn spawn_sweeper<V: Send + 'static>(
    label: &str,
    store: Weak<Mutex<CacheStore<V>>>,
) -> mpsc::Sender<()> {
    let (tx, rx) = mpsc::channel(TRIGGER_QUEUE_CAPACITY);

    let builder = thread::Builder::new().name(label.to_string());
    match builder.spawn(move || run_sweeper(store, rx)) {
        // Detached on purpose: the thread exits once the channel closes
        Ok(_handle) => info!("Sweep worker started: {}", label),
        Err(err) => error!("Failed to spawn sweep worker {}: {}", label, err),
    }

    tx
}

/// Trigger-servicing loop. One rate-limited sweep attempt per trigger.
fn run_sweeper<V>(store: Weak<Mutex<CacheStore<V>>>, mut rx: mpsc::Receiver<()>) {
    while rx.blocking_recv().is_some() {
        let Some(store) = store.upgrade() else {
            break;
        };
        let mut store = store.lock().unwrap_or_else(PoisonError::into_inner);
        match store.clean_expired() {
            Some(removed) if removed > 0 => {
                debug!("Sweep worker removed {} expired entries", removed)
            }
            Some(_) => trace!("Sweep worker found no expired entries"),
            None => trace!("Sweep skipped, cooldown window still open"),
        }
    }
    debug!("Sweep worker exiting");
}
