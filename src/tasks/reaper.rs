//! Reap Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Longest ticker period (about 30 years). Larger periods risk overflowing `Instant`.
pub const MAX_REAP_PERIOD: Duration = Duration::from_secs(30 * 365 * 24 * 60 * 60);

/// Spawns a background task that reaps expired entries once per `interval`.
///
/// Each tick calls [`CacheStore::reap`] with the current UTC time and the
/// same `interval`, under the store's write lock. The first pass runs one
/// full interval after spawning.
///
/// The task only holds a weak reference to the store. It keeps running for
/// as long as any strong handle is alive and exits on the first tick after
/// the last one is dropped. It can also be stopped early through the
/// returned `JoinHandle`.
///
/// The ticker period is capped at [`MAX_REAP_PERIOD`]; the age threshold
/// passed to `reap` is `interval` unchanged.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new()));
/// let handle = spawn_reap_task(Arc::downgrade(&store), Duration::from_secs(300));
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_reap_task(store: Weak<RwLock<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting cache reap task with interval of {:?}", interval);

        let period = interval.min(MAX_REAP_PERIOD);
        let start = Instant::now()
            .checked_add(period)
            .unwrap_or_else(|| Instant::now() + MAX_REAP_PERIOD);
        let mut ticker = interval_at(start, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let Some(store) = store.upgrade() else {
                debug!("Cache dropped, stopping reap task");
                break;
            };

            let removed = {
                let mut guard = store.write().await;
                guard.reap(Utc::now(), interval)
            };

            if removed > 0 {
                info!("Cache reap: removed {} expired entries", removed);
            } else {
                debug!("Cache reap: no expired entries found");
            }
        }
    })
}
