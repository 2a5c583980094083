//! Location-area models
//!
//! Only the fields the REPL uses are modeled; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name
    pub name: String,
    /// Fully-qualified URL of the resource
    pub url: String,
}

/// One page of `GET /location-area`.
///
/// # Fields
/// - `count`: total number of location areas
/// - `next`: URL of the following page, absent on the last page
/// - `previous`: URL of the preceding page, absent on the first page
/// - `results`: the areas on this page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A single location area from `GET /location-area/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl Location {
    /// Names of every Pokémon that can be encountered here, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}
