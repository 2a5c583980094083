//! Shared Cache Handle
//!
//! Thread-safe wrapper owning the store, its lock, and the reap task.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::tasks::{spawn_reap_task, MAX_REAP_PERIOD};

/// Smallest interval accepted; tokio's ticker rejects a zero period.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Largest interval accepted; the ticker cannot schedule past it.
const MAX_INTERVAL: Duration = MAX_REAP_PERIOD;

// == Cache ==
/// Process-local, time-expiring key/value cache.
///
/// Cloning is cheap and every clone shares the same store. All access goes
/// through one `RwLock`: reads take it shared, `put` and reaping take it
/// exclusive, and no lock is ever held across an await on I/O.
///
/// Entries expire purely by insertion time: once an entry is `interval` old
/// the next reap pass removes it. Reads do not refresh an entry.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    reaper: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its background reap task.
    ///
    /// Must be called from within a tokio runtime. Does not block.
    pub fn new(interval: Duration) -> Self {
        let interval = if interval < MIN_INTERVAL {
            warn!(
                "Cache interval {:?} is too small, using {:?}",
                interval, MIN_INTERVAL
            );
            MIN_INTERVAL
        } else if interval > MAX_INTERVAL {
            warn!(
                "Cache interval {:?} is too large, using {:?}",
                interval, MAX_INTERVAL
            );
            MAX_INTERVAL
        } else {
            interval
        };

        let store = Arc::new(RwLock::new(CacheStore::new()));
        let handle = spawn_reap_task(Arc::downgrade(&store), interval);

        Self {
            store,
            interval,
            reaper: Arc::new(Mutex::new(Some(handle))),
        }
    }

    // == Put ==
    /// Inserts or replaces the entry for `key`, stamped with the current time.
    pub async fn put(&self, key: impl Into<String>, value: Vec<u8>) {
        let key = key.into();
        debug!(key = %key, bytes = value.len(), "cache put");
        self.store.write().await.put(key, value);
    }

    // == Get ==
    /// Returns a copy of the bytes stored under `key`, or `None` on a miss.
    ///
    /// An empty value is a hit and comes back as `Some(vec![])`.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let value = self.store.read().await.get(key);
        debug!(key = %key, hit = value.is_some(), "cache get");
        value
    }

    // == Reap ==
    /// Runs one reap pass as of `now`, returning how many entries were removed.
    ///
    /// The background task calls this logic once per interval; it is public
    /// so a pass can be driven with a chosen clock.
    pub async fn reap(&self, now: DateTime<Utc>) -> usize {
        self.store.write().await.reap(now, self.interval)
    }

    /// Returns the reap interval, which doubles as the entry time-to-live.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Shutdown ==
    /// Stops the background reap task for every clone of this cache.
    ///
    /// Entries stay readable afterwards but no longer expire. Calling this
    /// more than once is a no-op.
    pub fn shutdown(&self) {
        let handle = match self.reaper.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(handle) = handle {
            handle.abort();
            debug!("Cache reap task aborted");
        }
    }

    /// Returns true while the background reap task is running.
    pub fn is_reaping(&self) -> bool {
        let guard = match self.reaper.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}
