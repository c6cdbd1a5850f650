//! LRU TTL - A bounded in-memory key/value cache
//!
//! Entries are evicted least-recently-used first once a count limit is
//! exceeded, and expire a fixed time after their last write. Expiry is lazy
//! unless the optional sweep task is running.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{LruTtlCache, SharedCache};
pub use config::Config;
pub use error::CacheError;
pub use tasks::spawn_sweep_task;
