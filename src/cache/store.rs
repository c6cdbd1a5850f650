//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with the recency list and TTL expiration.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::cache::{CacheEntry, NodeId, RecencyList};

// == LRU TTL Cache ==
/// Bounded key/value cache with LRU eviction and a cache-wide TTL.
///
/// Every key in `index` points at exactly one node in `order` and every node
/// carries the key it is indexed under. Both structures are only ever mutated
/// together.
///
/// Expiry is lazy: an expired entry stays in place until a [`get`](Self::get)
/// observes it, capacity pressure evicts it, or [`purge_expired`](Self::purge_expired)
/// is called.
#[derive(Debug)]
pub struct LruTtlCache<K, V> {
    /// Key to node handle
    index: HashMap<K, NodeId>,
    /// Entries ordered most to least recently used
    order: RecencyList<K, V>,
    /// Maximum number of entries, 0 = unbounded
    max_entries: usize,
    /// Time to live applied on every write, None = entries never expire
    ttl: Option<Duration>,
}

impl<K, V> LruTtlCache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries, 0 disables count-based eviction
    /// * `ttl` - Lifetime of an entry after its last write, zero disables expiry
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            index: HashMap::new(),
            order: RecencyList::new(),
            max_entries,
            ttl: (!ttl.is_zero()).then_some(ttl),
        }
    }

    // == Add ==
    /// Inserts or overwrites the value for `key`.
    ///
    /// An existing key gets the new value, a fresh TTL and becomes the most
    /// recently used entry. A new key that pushes the cache over `max_entries`
    /// evicts the single least recently used entry.
    pub fn add(&mut self, key: K, value: V) {
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(id) {
                entry.refresh(value, self.ttl);
            }
            self.order.move_to_front(id);
            return;
        }

        let id = self
            .order
            .push_front(CacheEntry::new(key.clone(), value, self.ttl));
        self.index.insert(key, id);
        debug_assert_eq!(self.index.len(), self.order.len());

        if self.max_entries > 0 && self.index.len() > self.max_entries {
            self.remove_oldest();
            trace!(
                max_entries = self.max_entries,
                "evicted least recently used entry"
            );
        }
    }

    // == Get ==
    /// Looks up `key`, promoting it to most recently used on a hit.
    ///
    /// An entry found past its deadline is purged and reported as a miss.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(key)?;

        let expired = self.order.get(id).map_or(true, |entry| entry.is_expired());
        if expired {
            self.remove_node(id);
            trace!("purged expired entry on access");
            return None;
        }

        self.order.move_to_front(id);
        self.order.get(id).map(|entry| &entry.value)
    }

    // == Remove ==
    /// Removes `key` if present.
    pub fn remove<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(id) = self.index.remove(key) {
            self.order.remove(id);
        }
    }

    // == Remove Oldest ==
    /// Removes the least recently used entry, expired or not.
    pub fn remove_oldest(&mut self) {
        if let Some(entry) = self.order.pop_back() {
            self.index.remove(&entry.key);
        }
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired: Vec<NodeId> = self
            .order
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(id, _)| id)
            .collect();

        let count = expired.len();
        for id in expired {
            self.remove_node(id);
        }
        count
    }

    // == Length ==
    /// Returns the number of stored entries.
    ///
    /// Expired entries that have not been purged yet are counted.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter().map(|(_, entry)| &entry.key)
    }

    fn remove_node(&mut self, id: NodeId) -> Option<CacheEntry<K, V>> {
        let entry = self.order.remove(id)?;
        self.index.remove(&entry.key);
        Some(entry)
    }
}
