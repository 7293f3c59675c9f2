//! Expiring Cache - a thread-safe in-memory cache with lazy expiration
//!
//! Provides per-entry optional expiration and self-triggered, rate-limited
//! background cleanup of expired entries. Expiration is checked lazily at
//! read time; reclamation rides on normal cache traffic instead of a
//! periodic timer.

pub mod cache;
pub mod config;

mod tasks;

pub use cache::{CacheEntry, CacheStats, CacheStore, ExpiringCache, SWEEP_COOLDOWN};
pub use config::CacheConfig;
