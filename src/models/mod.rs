//! Response models for the PokeAPI
//!
//! This module defines the shapes that cached or freshly fetched response
//! bodies are decoded into.

pub mod locations;

// Re-export commonly used types
pub use locations::{Location, LocationPage, NamedResource, PokemonEncounter};
