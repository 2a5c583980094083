//! API Module
//!
//! Cached client for the read-only PokeAPI.
//!
//! # Endpoints
//! - `GET /location-area` - Paginated list of location areas
//! - `GET /location-area/{name}` - A single location area
//!
//! Every response body is cached under its fully-qualified request URL, so
//! each page and each area gets its own entry.

pub mod client;
pub mod locations;

pub use client::PokeApiClient;
