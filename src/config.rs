//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// Both durations are fixed once a client is built from them.
#[derive(Debug, Clone)]
pub struct Config {
    /// Timeout in seconds applied to every network fetch
    pub fetch_timeout_secs: u64,
    /// Cache reap interval in seconds, also the entry time-to-live
    pub reap_interval_secs: u64,
    /// Root URL of the API
    pub base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `FETCH_TIMEOUT_SECS` - Network fetch timeout (default: 5)
    /// - `CACHE_REAP_INTERVAL_SECS` - Reap interval and entry lifetime (default: 300)
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.fetch_timeout_secs),
            reap_interval_secs: env::var("CACHE_REAP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.reap_interval_secs),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
        }
    }

    /// Fetch timeout as a `Duration`.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Reap interval as a `Duration`.
    pub fn reap_interval(&self) -> Duration {
        Duration::from_secs(self.reap_interval_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 5,
            reap_interval_secs: 300,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
