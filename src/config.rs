//! Configuration Module
//!
//! Tuning knobs for cache instances, loadable from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::SWEEP_COOLDOWN;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Minimum interval between expiration sweeps
    pub sweep_cooldown: Duration,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SWEEP_COOLDOWN_SECS` - Minimum seconds between sweeps (default: 3600)
    pub fn from_env() -> Self {
        Self {
            sweep_cooldown: env::var("SWEEP_COOLDOWN_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(SWEEP_COOLDOWN),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_cooldown: SWEEP_COOLDOWN,
        }
    }
}
