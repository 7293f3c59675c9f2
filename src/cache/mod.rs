//! Cache Module
//!
//! Provides a thread-safe in-memory cache with optional per-entry expiration
//! and rate-limited background sweeps of stale entries.

use std::time::Duration;

pub(crate) mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Minimum wall-clock interval enforced between two expiration sweeps
pub const SWEEP_COOLDOWN: Duration = Duration::from_secs(60 * 60);
