use crate::config::DaftConfig;
use crate::models::Price;
use crate::scrapers::traits::{ListingSearch, SearchProvider};
use crate::scrapers::types::{DaftListing, Location, PropertyType, SearchType};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

const DAFT_BASE_URL: &str = "https://www.daft.ie";

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Deserialize)]
struct GatewayResponse {
    #[serde(default)]
    listings: Vec<GatewayEntry>,
}

#[derive(Debug, Deserialize)]
struct GatewayEntry {
    #[serde(default)]
    listing: GatewayListing,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GatewayListing {
    title: Option<String>,
    price: Option<Price>,
    seo_friendly_path: Option<String>,
    num_bedrooms: Option<String>,
    property_type: Option<String>,
    address: Option<String>,
}

impl From<GatewayListing> for DaftListing {
    fn from(raw: GatewayListing) -> Self {
        Self {
            title: raw.title,
            price: raw.price,
            daft_link: raw
                .seo_friendly_path
                .map(|path| format!("{}{}", DAFT_BASE_URL, path)),
            bedrooms: raw.num_bedrooms.as_deref().and_then(parse_bedrooms),
            property_type: raw.property_type,
            address: raw.address,
        }
    }
}

/// Reads the bedroom count out of labels like "2 Bed" or "Studio".
fn parse_bedrooms(label: &str) -> Option<u32> {
    let label = label.trim();
    if label.eq_ignore_ascii_case("studio") {
        return Some(0);
    }

    let digits: String = label.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Provider that builds a new gateway client for each search
pub struct DaftProvider {
    config: DaftConfig,
}

impl DaftProvider {
    pub fn new(config: DaftConfig) -> Self {
        Self { config }
    }
}

impl SearchProvider for DaftProvider {
    fn new_search(&self) -> Result<Box<dyn ListingSearch>> {
        Ok(Box::new(DaftSearch::with_config(&self.config)?))
    }

    fn source_name(&self) -> &'static str {
        "Daft"
    }
}

/// Search builder backed by one POST to the Daft listings gateway
pub struct DaftSearch {
    client: Client,
    api_url: String,
    page_size: u32,
    search_type: Option<SearchType>,
    location: Option<Location>,
    min_price: Option<i64>,
    max_price: Option<i64>,
    property_type: Option<PropertyType>,
    min_beds: Option<i64>,
    max_beds: Option<i64>,
}

impl DaftSearch {
    pub fn with_config(config: &DaftConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            page_size: config.page_size,
            search_type: None,
            location: None,
            min_price: None,
            max_price: None,
            property_type: None,
            min_beds: None,
            max_beds: None,
        })
    }

    /// Request body for the gateway, built from whatever has been set so far
    fn payload(&self) -> Value {
        let section = self
            .search_type
            .unwrap_or(SearchType::ResidentialRent)
            .section();

        let mut filters = vec![json!({ "name": "adState", "values": ["published"] })];
        if let Some(property_type) = self.property_type {
            filters.push(json!({
                "name": "propertyType",
                "values": [property_type.filter_value()]
            }));
        }

        let mut ranges = Vec::new();
        if let Some(range) = range("rentalPrice", self.min_price, self.max_price) {
            ranges.push(range);
        }
        if let Some(range) = range("numBeds", self.min_beds, self.max_beds) {
            ranges.push(range);
        }

        let mut payload = json!({
            "section": section,
            "filters": filters,
            "andFilters": [],
            "ranges": ranges,
            "paging": { "from": "0", "pageSize": self.page_size.to_string() },
        });

        match &self.location {
            Some(Location::City(city)) => {
                payload["geoFilter"] = json!({
                    "storedShapeIds": [city.stored_shape_id()],
                    "geoSearchType": "STORED_SHAPES"
                });
            }
            Some(Location::Custom(text)) => {
                payload["terms"] = json!(text);
            }
            None => {}
        }

        payload
    }
}

fn range(name: &str, from: Option<i64>, to: Option<i64>) -> Option<Value> {
    if from.is_none() && to.is_none() {
        return None;
    }

    let mut range = json!({ "name": name });
    if let Some(from) = from {
        range["from"] = json!(from.to_string());
    }
    if let Some(to) = to {
        range["to"] = json!(to.to_string());
    }
    Some(range)
}

#[async_trait]
impl ListingSearch for DaftSearch {
    fn set_search_type(&mut self, search_type: SearchType) {
        self.search_type = Some(search_type);
    }

    fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    fn set_min_price(&mut self, price: i64) {
        self.min_price = Some(price);
    }

    fn set_max_price(&mut self, price: i64) {
        self.max_price = Some(price);
    }

    fn set_property_type(&mut self, property_type: PropertyType) {
        self.property_type = Some(property_type);
    }

    fn set_min_beds(&mut self, beds: i64) {
        self.min_beds = Some(beds);
    }

    fn set_max_beds(&mut self, beds: i64) {
        self.max_beds = Some(beds);
    }

    async fn search(&mut self) -> Result<Vec<DaftListing>> {
        let payload = self.payload();
        debug!("Posting search to {}: {}", self.api_url, payload);

        let response = self
            .client
            .post(&self.api_url)
            .header("brand", "daft")
            .header("platform", "web")
            .json(&payload)
            .send()
            .await
            .context("Failed to reach Daft gateway")?;

        if !response.status().is_success() {
            warn!("Daft gateway returned status: {}", response.status());
            anyhow::bail!("Daft gateway returned status: {}", response.status());
        }

        let body: GatewayResponse = response
            .json()
            .await
            .context("Failed to decode Daft gateway response")?;

        info!("Daft gateway returned {} listings", body.listings.len());

        Ok(body
            .listings
            .into_iter()
            .map(|entry| entry.listing.into())
            .collect())
    }
}
