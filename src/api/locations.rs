//! Location-area endpoints

use crate::api::PokeApiClient;
use crate::error::{Error, Result};
use crate::models::{Location, LocationPage};

impl PokeApiClient {
    /// Fetches a page of location areas.
    ///
    /// `None` requests the first page. `Some(url)` follows a pagination link
    /// from a previous [`LocationPage`], used verbatim as request and cache key.
    pub async fn list_locations(&self, page_url: Option<&str>) -> Result<LocationPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.endpoint("location-area"),
        };
        self.get_json(&url).await
    }

    /// Fetches one location area by name or id.
    ///
    /// Names that are empty or contain `/`, `?` or `#` are rejected before
    /// any request, so they can never address another resource.
    pub async fn get_location(&self, name: &str) -> Result<Location> {
        if name.is_empty() || name.contains(['/', '?', '#']) {
            return Err(Error::InvalidName(name.to_string()));
        }
        let url = self.endpoint(&format!("location-area/{}", name));
        self.get_json(&url).await
    }
}
