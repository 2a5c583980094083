//! Fetch Module
//!
//! The network side of the read-through cache.
//!
//! # Components
//! - [`Fetch`]: capability producing raw bytes for a URL
//! - [`HttpFetcher`]: `Fetch` over HTTP with a fixed timeout
//! - [`read_through`]: cache lookup, fetch on miss, populate, decode

mod http;
mod read_through;

use async_trait::async_trait;

use crate::error::FetchError;

pub use http::HttpFetcher;
pub use read_through::read_through;

// == Fetch Capability ==
/// Produces the raw response body for a fully-qualified URL.
///
/// Implementations own request construction, status handling and body
/// reading. The cache only ever sees the returned bytes.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
