//! Read-through lookup: serve from cache, otherwise fetch and populate.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::Fetch;
use crate::cache::Cache;
use crate::error::{Error, Result};

/// Returns the value stored under `key`, fetching it on a miss.
///
/// - Hit: the cached bytes are decoded. A decode failure is returned as
///   [`Error::Decode`]; the entry is trusted and never refetched here.
/// - Miss: `fetcher` is called once. Fetch failures propagate as
///   [`Error::Fetch`] and nothing is cached. Fetched bytes are decoded and,
///   only if they decode, stored raw under `key`.
///
/// Decoding before the `put` is deliberate: bytes that fail to decode are
/// never cached, so one bad response cannot poison later hits.
///
/// Concurrent misses on one key are not coalesced; each performs its own
/// fetch and the last `put` wins.
pub async fn read_through<T, F>(cache: &Cache, fetcher: &F, key: &str) -> Result<T>
where
    T: DeserializeOwned,
    F: Fetch + ?Sized,
{
    if let Some(bytes) = cache.get(key).await {
        debug!(key = %key, "cache hit");
        return decode(key, &bytes);
    }

    debug!(key = %key, "cache miss");
    let bytes = fetcher.fetch(key).await?;

    let value = decode(key, &bytes).inspect_err(|_| {
        warn!(key = %key, "fetched body did not decode, not caching");
    })?;
    cache.put(key, bytes).await;

    Ok(value)
}

fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|source| Error::Decode {
        key: key.to_string(),
        source,
    })
}
