//! Cache Store Module
//!
//! Unsynchronized key/value storage. Locking is the job of [`crate::cache::Cache`].

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::cache::CacheEntry;

// == Cache Store ==
/// Map from key to [`CacheEntry`] with insertion-time expiry.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Stores `value` under `key`, stamped with the current time.
    ///
    /// If the key already exists the entry is replaced and its age resets.
    pub fn put(&mut self, key: String, value: Vec<u8>) {
        self.insert_entry(key, CacheEntry::new(value));
    }

    /// Stores a prebuilt entry, keeping its timestamp.
    pub fn insert_entry(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
    }

    // == Get ==
    /// Returns a copy of the bytes stored under `key`, if any.
    ///
    /// Expiry is only enforced by [`CacheStore::reap`]; reads never touch the entry.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Returns the full entry for `key`, if any.
    pub fn entry(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Reap ==
    /// Removes every entry that is at least `interval` old as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, now: DateTime<Utc>, interval: Duration) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.is_expired_at(now, interval));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
