//! Cache Entry Module
//!
//! Defines the record stored for every cached key, with its expiry deadline.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached record.
///
/// The key is kept alongside the value so an entry picked off the back of the
/// recency order can be dropped from the key map without a reverse scan.
#[derive(Debug, Clone)]
pub struct CacheEntry<K, V> {
    /// The lookup key
    pub key: K,
    /// The stored value
    pub value: V,
    /// Absolute expiry deadline, None = never expires
    pub expires_at: Option<Instant>,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl` from now, or never if `ttl` is None.
    pub fn new(key: K, value: V, ttl: Option<Duration>) -> Self {
        Self {
            key,
            value,
            expires_at: deadline(ttl),
        }
    }

    // == Refresh ==
    /// Replaces the value and restarts the TTL clock.
    pub fn refresh(&mut self, value: V, ttl: Option<Duration>) {
        self.value = value;
        self.expires_at = deadline(ttl);
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is at or
    /// past its deadline, so a fully elapsed TTL is never a hit.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Checks expiry against a caller-supplied instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}

/// A deadline too far out to represent counts as never expiring.
fn deadline(ttl: Option<Duration>) -> Option<Instant> {
    ttl.and_then(|ttl| Instant::now().checked_add(ttl))
}
