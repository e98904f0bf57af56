use crate::scrapers::types::{DaftListing, Location, PropertyType, SearchType};
use anyhow::Result;
use async_trait::async_trait;

/// Fluent search builder for a listings source.
///
/// Setters only record state; nothing touches the network until `search`.
#[async_trait]
pub trait ListingSearch: Send {
    fn set_search_type(&mut self, search_type: SearchType);

    fn set_location(&mut self, location: Location);

    fn set_min_price(&mut self, price: i64);

    fn set_max_price(&mut self, price: i64);

    fn set_property_type(&mut self, property_type: PropertyType);

    fn set_min_beds(&mut self, beds: i64);

    fn set_max_beds(&mut self, beds: i64);

    /// Run the search, returning listings in the source's own order
    async fn search(&mut self) -> Result<Vec<DaftListing>>;
}

/// Hands out a fresh search client for every request
pub trait SearchProvider: Send + Sync {
    fn new_search(&self) -> Result<Box<dyn ListingSearch>>;

    /// Get the name of the listings source
    fn source_name(&self) -> &'static str;
}
