//! Shared Cache Module
//!
//! Cloneable, task-safe handle around a single [`LruTtlCache`].

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard};

use crate::cache::LruTtlCache;

// == Shared Cache ==
/// Thread-safe cache handle.
///
/// Every operation takes one exclusive lock. A read lock is not enough since
/// `get` promotes entries and purges expired ones.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<LruTtlCache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a shared cache with the given limits.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self::from_cache(LruTtlCache::new(max_entries, ttl))
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: LruTtlCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Acquires the lock for a compound operation.
    pub async fn lock(&self) -> MutexGuard<'_, LruTtlCache<K, V>> {
        self.inner.lock().await
    }

    /// Inserts or overwrites `key`, restarting its TTL.
    pub async fn add(&self, key: K, value: V) {
        self.inner.lock().await.add(key, value);
    }

    /// Looks up `key` and returns a copy of the value on a hit.
    pub async fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().await.get(key).cloned()
    }

    /// Removes `key` if present.
    pub async fn remove<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().await.remove(key);
    }

    /// Evicts the least recently used entry, if any.
    pub async fn remove_oldest(&self) {
        self.inner.lock().await.remove_oldest();
    }

    /// Drops every entry.
    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }

    /// Removes expired entries and returns how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        self.inner.lock().await.purge_expired()
    }

    /// Stored entry count, including expired entries not yet purged.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}
