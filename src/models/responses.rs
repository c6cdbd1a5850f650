//! Response DTOs for the cache server API
//!
//! JSON bodies returned by the cache endpoints. Error bodies come from
//! [`CacheError`](crate::error::CacheError) instead.

use std::time::Duration;

use serde::Serialize;

/// A cache hit: the key echoed back with its value.
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub key: String,
    pub value: String,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Acknowledges a write or removal of a single key.
///
/// Removing an absent key is acknowledged the same way as a real removal.
#[derive(Debug, Clone, Serialize)]
pub struct KeyResponse {
    pub message: String,
    pub key: String,
}

impl KeyResponse {
    /// The key now holds the submitted value with a fresh TTL.
    pub fn stored(key: impl Into<String>) -> Self {
        Self::with_message(key.into(), "stored")
    }

    /// The key is no longer in the cache.
    pub fn removed(key: impl Into<String>) -> Self {
        Self::with_message(key.into(), "removed")
    }

    fn with_message(key: String, action: &str) -> Self {
        Self {
            message: format!("Key '{}' {}", key, action),
            key,
        }
    }
}

/// Result of a whole-cache operation (POST /remove-oldest, POST /clear)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
    /// Entry count after the operation
    pub len: usize,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>, len: usize) -> Self {
        Self {
            message: message.into(),
            len,
        }
    }
}

/// Entry count and limits (GET /len)
#[derive(Debug, Clone, Serialize)]
pub struct LenResponse {
    /// Stored entries, including expired ones not yet purged
    pub len: usize,
    /// Capacity, 0 = unbounded
    pub max_entries: usize,
    /// Entry TTL in milliseconds, null = never expires
    pub ttl_ms: Option<u64>,
}

impl LenResponse {
    /// TTLs longer than `u64::MAX` milliseconds are reported as `u64::MAX`.
    pub fn new(len: usize, max_entries: usize, ttl: Option<Duration>) -> Self {
        Self {
            len,
            max_entries,
            ttl_ms: ttl.map(|ttl| u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX)),
        }
    }
}

/// Liveness probe body (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 time the response was built
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
