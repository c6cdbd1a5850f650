//! Expiry Sweep Task
//!
//! Opt-in background task that periodically purges expired cache entries.
//! Without it the cache only drops expired entries when they are looked up.

use std::hash::Hash;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that purges expired entries every `interval`.
///
/// The task runs until aborted through the returned handle. Each pass holds
/// the cache lock for the duration of one [`purge_expired`] call.
///
/// # Example
/// ```ignore
/// let cache = SharedCache::new(1000, Duration::from_secs(300));
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
///
/// [`purge_expired`]: crate::cache::LruTtlCache::purge_expired
pub fn spawn_sweep_task<K, V>(cache: SharedCache<K, V>, interval: Duration) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Send + 'static,
{
    tokio::spawn(async move {
        let interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        info!(interval_ms, "Starting expiry sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired().await;

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
