//! API Client
//!
//! Pairs the shared cache with a fetch capability.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::Result;
use crate::fetch::{read_through, Fetch, HttpFetcher};

/// Client for the PokeAPI with a read-through response cache.
///
/// Cloning shares both the cache and the underlying HTTP connection pool.
#[derive(Clone)]
pub struct PokeApiClient {
    /// Thread-safe response cache
    pub cache: Cache,
    fetcher: Arc<dyn Fetch>,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client from its parts.
    pub fn new(cache: Cache, fetcher: Arc<dyn Fetch>, base_url: impl Into<String>) -> Self {
        Self {
            cache,
            fetcher,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client from configuration.
    ///
    /// Builds an HTTP fetcher with the configured timeout and a cache with
    /// the configured reap interval. Must run inside a tokio runtime.
    pub fn from_config(config: &Config) -> std::result::Result<Self, reqwest::Error> {
        let fetcher = HttpFetcher::new(config.fetch_timeout())?;
        let timeout = fetcher.timeout();
        let client = Self::new(
            Cache::new(config.reap_interval()),
            Arc::new(fetcher),
            config.base_url.clone(),
        );
        info!(
            "PokeAPI client ready: base_url={}, timeout={:?}, reap_interval={:?}",
            client.base_url(),
            timeout,
            client.cache.interval()
        );
        Ok(client)
    }

    /// Root URL every endpoint is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves `path` against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Reads `url` through the cache and decodes it as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        read_through(&self.cache, self.fetcher.as_ref(), url).await
    }

    /// Stops the cache's background reap task.
    pub fn shutdown(&self) {
        self.cache.shutdown();
    }
}

impl std::fmt::Debug for PokeApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokeApiClient")
            .field("cache", &self.cache)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
