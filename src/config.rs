//! Configuration Module
//!
//! Handles loading and managing cache and server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Cache and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold, 0 = unbounded
    pub max_entries: usize,
    /// Entry lifetime in milliseconds after its last write, 0 = never expires
    pub ttl_ms: u64,
    /// Expiry sweep interval in milliseconds, 0 = lazy expiry only
    pub sweep_interval_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `TTL_MS` - Entry TTL in milliseconds (default: 300000)
    /// - `SWEEP_INTERVAL_MS` - Expiry sweep interval in milliseconds (default: 0, disabled)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// Unset variables fall back to their default; set but malformed ones are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            max_entries: parse_var(&lookup, "MAX_ENTRIES", defaults.max_entries)?,
            ttl_ms: parse_var(&lookup, "TTL_MS", defaults.ttl_ms)?,
            sweep_interval_ms: parse_var(&lookup, "SWEEP_INTERVAL_MS", defaults.sweep_interval_ms)?,
            server_port: parse_var(&lookup, "SERVER_PORT", defaults.server_port)?,
        })
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    /// Sweep interval, or None when the sweep task is disabled.
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_ms > 0).then(|| Duration::from_millis(self.sweep_interval_ms))
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| CacheError::InvalidConfig { var, value: raw }),
        None => Ok(default),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            ttl_ms: 300_000,
            sweep_interval_ms: 0,
            server_port: 3000,
        }
    }
}
