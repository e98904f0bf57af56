//! Query-string types for the HTTP API.

use serde::Deserialize;

use crate::scrapers::SearchParams;

/// Query parameters for `GET /listings`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingsQuery {
    pub location: String,
    #[serde(default = "default_min_price")]
    pub min_price: i64,
    #[serde(default = "default_max_price")]
    pub max_price: i64,
    #[serde(default = "default_property_type")]
    pub property_type: String,
    #[serde(default = "default_bedrooms_min")]
    pub bedrooms_min: i64,
    #[serde(default = "default_bedrooms_max")]
    pub bedrooms_max: i64,
    #[serde(default = "default_search_type")]
    pub search_type: String,
}

fn default_min_price() -> i64 {
    1000
}

fn default_max_price() -> i64 {
    2000
}

fn default_property_type() -> String {
    "apartment".to_string()
}

fn default_bedrooms_min() -> i64 {
    1
}

fn default_bedrooms_max() -> i64 {
    3
}

fn default_search_type() -> String {
    "rent".to_string()
}

impl From<ListingsQuery> for SearchParams {
    fn from(query: ListingsQuery) -> Self {
        SearchParams {
            location: query.location,
            min_price: query.min_price,
            max_price: query.max_price,
            property_type: query.property_type,
            bedrooms_min: query.bedrooms_min,
            bedrooms_max: query.bedrooms_max,
            search_type: query.search_type,
        }
    }
}
