//! Maps request parameters onto a search client and projects its results.

use crate::models::Listing;
use crate::scrapers::{
    DaftListing, Location, PropertyType, SearchParams, SearchProvider, SearchType,
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid search type: {0}")]
    InvalidSearchType(String),
    #[error("Invalid property type: {0}")]
    InvalidPropertyType(String),
    #[error(transparent)]
    Search(#[from] anyhow::Error),
}

/// A required listing attribute the source did not provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField(pub &'static str);

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listing has no '{}'", self.0)
    }
}

impl TryFrom<DaftListing> for Listing {
    type Error = MissingField;

    fn try_from(raw: DaftListing) -> Result<Self, Self::Error> {
        Ok(Listing {
            title: raw.title.ok_or(MissingField("title"))?,
            price: raw.price.ok_or(MissingField("price"))?,
            url: raw.daft_link.ok_or(MissingField("daft_link"))?,
            bedrooms: raw.bedrooms.ok_or(MissingField("bedrooms"))?,
            property_type: raw.property_type,
            address: raw.address,
        })
    }
}

#[derive(Clone)]
pub struct ListingFetcher {
    provider: Arc<dyn SearchProvider>,
}

impl ListingFetcher {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    pub fn source_name(&self) -> &'static str {
        self.provider.source_name()
    }

    /// Runs one search and returns every listing that carries the required
    /// fields, in the order the source returned them.
    pub async fn fetch(&self, params: &SearchParams) -> Result<Vec<Listing>, FetchError> {
        let mut search = self.provider.new_search()?;

        debug!("Initializing search with type: {}", params.search_type);
        let search_type: SearchType = params
            .search_type
            .parse()
            .map_err(FetchError::InvalidSearchType)?;
        debug!("Setting search type to: {}", search_type);
        search.set_search_type(search_type);

        let location = Location::resolve(&params.location);
        debug!("Setting location: {}", location);
        search.set_location(location);

        debug!("Setting price range: {} - {}", params.min_price, params.max_price);
        search.set_min_price(params.min_price);
        search.set_max_price(params.max_price);

        let property_type: PropertyType = params
            .property_type
            .parse()
            .map_err(FetchError::InvalidPropertyType)?;
        debug!("Setting property type: {}", property_type);
        search.set_property_type(property_type);

        debug!(
            "Setting bedrooms range: {} - {}",
            params.bedrooms_min, params.bedrooms_max
        );
        search.set_min_beds(params.bedrooms_min);
        search.set_max_beds(params.bedrooms_max);

        debug!("Starting search");
        let raw = search.search().await.map_err(|err| {
            error!("Error in fetch_listings: {:#}", err);
            FetchError::Search(err)
        })?;

        let listings: Vec<Listing> = raw
            .into_iter()
            .filter_map(|raw| match Listing::try_from(raw) {
                Ok(listing) => Some(listing),
                Err(missing) => {
                    warn!("Skipping listing due to missing attribute: {}", missing);
                    None
                }
            })
            .collect();

        debug!("Found {} listings", listings.len());
        Ok(listings)
    }
}
