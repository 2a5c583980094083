//! Error types for the read-through client
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; a miss is `None`, not an error.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

// == Fetch Error Enum ==
/// Failure of the network fetch behind the cache.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, protocol or body read failure
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// No complete response within the configured timeout
    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    /// Server answered with a non-success status
    #[error("Request to {url} returned {status}")]
    Status { url: String, status: StatusCode },
}

// == Error Enum ==
/// Unified error type for read-through lookups.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying fetch failed; nothing was cached
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Cached or freshly fetched bytes did not match the expected shape
    #[error("Failed to decode response for {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A resource name that would change the request path or query
    #[error("Invalid resource name: {0:?}")]
    InvalidName(String),
}

impl Error {
    /// Returns true if this error came from the network fetch.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Error::Fetch(_))
    }

    /// Returns true if this error came from decoding.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }
}

// == Result Type Alias ==
/// Convenience Result type for read-through lookups.
pub type Result<T> = std::result::Result<T, Error>;
