//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a simple ordered model.

use proptest::prelude::*;
use std::collections::HashSet;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::LruTtlCache;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(3600);

// == Strategies ==
/// Small key space so operations collide often
fn key_strategy() -> impl Strategy<Value = u8> {
    0u8..16
}

fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}".prop_map(|s| s)
}

fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,256}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: u8, value: u32 },
    Get { key: u8 },
    Remove { key: u8 },
    RemoveOldest,
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Add { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Remove { key }),
        1 => Just(CacheOp::RemoveOldest),
        1 => Just(CacheOp::Clear),
    ]
}

// == Reference Model ==
/// Most recently used first.
#[derive(Debug, Default)]
struct Model {
    entries: Vec<(u8, u32)>,
    max_entries: usize,
}

impl Model {
    fn position(&self, key: u8) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    fn add(&mut self, key: u8, value: u32) {
        if let Some(pos) = self.position(key) {
            self.entries.remove(pos);
            self.entries.insert(0, (key, value));
            return;
        }
        self.entries.insert(0, (key, value));
        if self.max_entries > 0 && self.entries.len() > self.max_entries {
            self.entries.pop();
        }
    }

    fn get(&mut self, key: u8) -> Option<u32> {
        let pos = self.position(key)?;
        let entry = self.entries.remove(pos);
        self.entries.insert(0, entry);
        Some(entry.1)
    }

    fn remove(&mut self, key: u8) {
        if let Some(pos) = self.position(key) {
            self.entries.remove(pos);
        }
    }

    fn keys(&self) -> Vec<u8> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Any operation sequence leaves the cache with the same contents and
    // recency order as the model.
    #[test]
    fn prop_matches_reference_model(
        max_entries in 0usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..100)
    ) {
        let mut cache = LruTtlCache::new(max_entries, TEST_TTL);
        let mut model = Model { entries: Vec::new(), max_entries };

        for op in ops {
            match op {
                CacheOp::Add { key, value } => {
                    cache.add(key, value);
                    model.add(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key).copied(), model.get(key));
                }
                CacheOp::Remove { key } => {
                    cache.remove(&key);
                    model.remove(key);
                }
                CacheOp::RemoveOldest => {
                    cache.remove_oldest();
                    model.entries.pop();
                }
                CacheOp::Clear => {
                    cache.clear();
                    model.entries.clear();
                }
            }

            let keys: Vec<u8> = cache.keys().copied().collect();
            prop_assert_eq!(&keys, &model.keys());
            prop_assert_eq!(cache.len(), keys.len(), "index and order out of step");
        }
    }

    // No two nodes in the recency order ever share a key.
    #[test]
    fn prop_order_has_no_duplicate_keys(ops in prop::collection::vec(cache_op_strategy(), 1..100)) {
        let mut cache = LruTtlCache::new(4, TEST_TTL);

        for op in ops {
            match op {
                CacheOp::Add { key, value } => cache.add(key, value),
                CacheOp::Get { key } => { cache.get(&key); }
                CacheOp::Remove { key } => cache.remove(&key),
                CacheOp::RemoveOldest => cache.remove_oldest(),
                CacheOp::Clear => cache.clear(),
            }

            let unique: HashSet<u8> = cache.keys().copied().collect();
            prop_assert_eq!(unique.len(), cache.len());
        }
    }

    #[test]
    fn prop_roundtrip_storage(key in valid_key_strategy(), value in valid_value_strategy()) {
        let mut cache = LruTtlCache::new(100, TEST_TTL);

        cache.add(key.clone(), value.clone());

        prop_assert_eq!(cache.get(key.as_str()), Some(&value));
    }

    #[test]
    fn prop_remove_makes_key_missing(
        keys in prop::collection::vec(valid_key_strategy(), 1..20),
        victim in any::<prop::sample::Index>()
    ) {
        let mut cache = LruTtlCache::new(0, TEST_TTL);
        for key in &keys {
            cache.add(key.clone(), 1);
        }

        let victim = victim.get(&keys);
        cache.remove(victim.as_str());

        prop_assert!(cache.get(victim.as_str()).is_none());
    }

    #[test]
    fn prop_capacity_enforcement(
        max_entries in 1usize..50,
        entries in prop::collection::vec((valid_key_strategy(), valid_value_strategy()), 1..200)
    ) {
        let mut cache = LruTtlCache::new(max_entries, TEST_TTL);

        for (key, value) in entries {
            cache.add(key, value);
            prop_assert!(
                cache.len() <= max_entries,
                "Cache size {} exceeds max {}",
                cache.len(),
                max_entries
            );
        }
    }

    #[test]
    fn prop_unbounded_never_evicts(keys in prop::collection::hash_set(any::<u32>(), 1..500)) {
        let mut cache = LruTtlCache::new(0, Duration::ZERO);

        for key in &keys {
            cache.add(*key, ());
        }

        prop_assert_eq!(cache.len(), keys.len());
        for key in &keys {
            prop_assert!(cache.get(key).is_some());
        }
    }

    // After filling to capacity and touching the oldest key, the next insert
    // evicts the second-oldest instead.
    #[test]
    fn prop_lru_access_tracking(
        keys in prop::collection::hash_set(valid_key_strategy(), 3..8),
        new_key in valid_key_strategy()
    ) {
        prop_assume!(!keys.contains(&new_key));

        let keys: Vec<String> = keys.into_iter().collect();
        let mut cache = LruTtlCache::new(keys.len(), TEST_TTL);
        for key in &keys {
            cache.add(key.clone(), format!("value_{}", key));
        }

        prop_assert!(cache.get(keys[0].as_str()).is_some());
        cache.add(new_key.clone(), "new".to_string());

        prop_assert!(cache.get(keys[0].as_str()).is_some(), "touched key was evicted");
        prop_assert!(cache.get(keys[1].as_str()).is_none(), "oldest key survived");
        prop_assert!(cache.get(new_key.as_str()).is_some());
        prop_assert_eq!(cache.len(), keys.len());
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    #[test]
    fn prop_ttl_expiration_behavior(
        key in valid_key_strategy(),
        value in valid_value_strategy()
    ) {
        let mut cache = LruTtlCache::new(0, Duration::from_millis(50));

        cache.add(key.clone(), value.clone());
        prop_assert_eq!(cache.get(key.as_str()), Some(&value));

        sleep(Duration::from_millis(80));

        prop_assert!(cache.get(key.as_str()).is_none(), "Entry should not be found after TTL expires");
        prop_assert!(cache.is_empty(), "Expired entry should be purged by the lookup");
    }
}
