//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with optional expiration.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry with value and expiration metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds), None = never expires
    pub expires_at: Option<u64>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry with an optional absolute expiration.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `expires_at` - Optional expiration timestamp in Unix milliseconds
    pub fn new(value: V, expires_at: Option<u64>) -> Self {
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at the instant of the call.
    ///
    /// An entry without an expiration never expires. Otherwise the entry is
    /// expired once the current time is strictly past the expiration time;
    /// the check is evaluated against the live clock on every call, never
    /// pre-computed.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() > expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns remaining time before expiration in milliseconds, or None if
    /// no expiration is set. Useful for diagnostics.
    ///
    /// # Returns
    /// - `Some(0)` if the entry has expired
    /// - `Some(remaining_ms)` if the entry expires in the future
    /// - `None` if the entry never expires
    pub fn ttl_remaining_ms(&self) -> Option<u64> {
        self.expires_at.map(|expires| {
            let now = current_timestamp_ms();
            expires.saturating_sub(now)
        })
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

/// Converts a wall-clock deadline to a Unix-millisecond timestamp.
///
/// Deadlines before the epoch collapse to 0, which is always in the past.
pub fn deadline_ms(deadline: SystemTime) -> u64 {
    deadline
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_entry_no_expiration_never_expires() {
        let entry = CacheEntry::new("test_value".to_string(), None);

        assert_eq!(entry.value, "test_value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_future_expiration_not_expired() {
        let expires_at = current_timestamp_ms() + 60_000;
        let entry = CacheEntry::new("test_value".to_string(), Some(expires_at));

        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_past_expiration_expired() {
        let expires_at = current_timestamp_ms() - 1_000;
        let entry = CacheEntry::new("test_value".to_string(), Some(expires_at));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_expires_across_deadline() {
        let entry = CacheEntry::new("test_value".to_string(), Some(current_timestamp_ms() + 50));

        assert!(!entry.is_expired());
        std::thread::sleep(Duration::from_millis(100));
        assert!(entry.is_expired());
    }

    #[test]
    fn test_ttl_remaining_future() {
        let entry =
            CacheEntry::new("test_value".to_string(), Some(current_timestamp_ms() + 10_000));

        let remaining = entry.ttl_remaining_ms().unwrap();
        assert!(remaining <= 10_000);
        assert!(remaining >= 9_000);
    }

    #[test]
    fn test_ttl_remaining_expired_is_zero() {
        let entry =
            CacheEntry::new("test_value".to_string(), Some(current_timestamp_ms() - 1_000));

        assert_eq!(entry.ttl_remaining_ms().unwrap(), 0);
    }

    #[test]
    fn test_ttl_remaining_no_expiration() {
        let entry = CacheEntry::new("test_value".to_string(), None);

        assert!(entry.ttl_remaining_ms().is_none());
    }

    #[test]
    fn test_deadline_ms_before_epoch_collapses_to_zero() {
        let before_epoch = UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(deadline_ms(before_epoch), 0);
    }

    #[test]
    fn test_deadline_ms_roundtrip() {
        let deadline = UNIX_EPOCH + Duration::from_millis(1_700_000_000_000);
        assert_eq!(deadline_ms(deadline), 1_700_000_000_000);
    }
}
