//! Cache Module
//!
//! Provides the in-memory LRU cache with TTL expiration and its shared handle.

mod entry;
mod lru;
mod shared;
mod store;

#[cfg(test)]
mod property_tests;

pub(crate) use entry::CacheEntry;
pub(crate) use lru::{NodeId, RecencyList};
pub use shared::SharedCache;
pub use store::LruTtlCache;
