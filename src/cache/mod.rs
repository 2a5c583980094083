//! Cache Module
//!
//! Provides a thread-safe in-memory cache whose entries expire a fixed
//! interval after insertion.

mod entry;
mod shared;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::Cache;
pub use store::CacheStore;
