//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with insertion-time expiry.

use std::time::Duration;

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// Represents a single cache entry with its raw bytes and creation time.
///
/// Entries are immutable once stored. A later `put` for the same key
/// replaces the whole entry, refreshing both value and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// When the entry was stored (UTC wall clock)
    pub created_at: DateTime<Utc>,
    /// The stored bytes, exactly as received
    pub value: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current UTC time.
    pub fn new(value: Vec<u8>) -> Self {
        Self::created_at(value, Utc::now())
    }

    /// Creates a cache entry with an explicit creation time.
    pub fn created_at(value: Vec<u8>, created_at: DateTime<Utc>) -> Self {
        Self { created_at, value }
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `interval` as of `now`.
    ///
    /// Boundary condition: an entry is expired once `now - created_at >= interval`.
    /// Entries stamped after `now` are never expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>, interval: Duration) -> bool {
        // created after `now`
        if self.created_at > now {
            return false;
        }
        self.age_at(now) >= interval
    }

    // == Age ==
    /// Returns how long ago the entry was stored, saturating at zero.
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        (now - self.created_at).to_std().unwrap_or_default()
    }
}
