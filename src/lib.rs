//! Pokedex Cache - A read-through response cache for PokeAPI
//!
//! Provides a thread-safe, time-expiring key/value cache with background
//! reaping, and a client that serves API responses from it.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{Error, FetchError, Result};
pub use fetch::{read_through, Fetch, HttpFetcher};
