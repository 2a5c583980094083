//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the life of a cache.
//!
//! # Tasks
//! - Reaper: Removes entries older than the cache interval, once per interval

mod reaper;

pub use reaper::{spawn_reap_task, MAX_REAP_PERIOD};
