use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Asking price as the source reports it: a plain amount or display text
/// such as "€1,800 per month". Amounts keep whatever precision the source sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Price {
    Amount(Number),
    Text(String),
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Price::Amount(Number::from(amount))
    }
}

impl From<&str> for Price {
    fn from(text: &str) -> Self {
        Price::Text(text.to_string())
    }
}

/// A listing projected into the fixed shape returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub title: String,
    pub price: Price,
    pub url: String,
    pub bedrooms: u32,
    #[serde(rename = "propertyType")]
    pub property_type: Option<String>,
    pub address: Option<String>,
}

/// Uniform `{status, data | message}` envelope for `/listings`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ListingsResponse {
    Success { data: Vec<Listing> },
    Error { message: String },
}

impl ListingsResponse {
    pub fn success(data: Vec<Listing>) -> Self {
        ListingsResponse::Success { data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ListingsResponse::Error {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_listing() -> Listing {
        Listing {
            title: "12 Main Street, Rathmines, Dublin 6".to_string(),
            price: Price::from("€1,800 per month"),
            url: "https://www.daft.ie/for-rent/apartment-12-main-street/123".to_string(),
            bedrooms: 2,
            property_type: None,
            address: None,
        }
    }

    #[test]
    fn success_envelope_shape() {
        let value =
            serde_json::to_value(ListingsResponse::success(vec![sample_listing()])).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["data"][0]["title"], "12 Main Street, Rathmines, Dublin 6");
        assert_eq!(value["data"][0]["price"], "€1,800 per month");
        assert_eq!(value["data"][0]["bedrooms"], 2);
        assert!(value["data"][0]["propertyType"].is_null());
        assert!(value["data"][0]["address"].is_null());
        assert!(value.get("message").is_none());
    }

    #[test]
    fn error_envelope_shape() {
        let value =
            serde_json::to_value(ListingsResponse::error("Invalid search type: buy")).unwrap();

        assert_eq!(
            value,
            json!({ "status": "error", "message": "Invalid search type: buy" })
        );
    }

    #[test]
    fn numeric_price_stays_numeric() {
        let mut listing = sample_listing();
        listing.price = Price::from(1800);

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["price"], 1800);
    }

    #[test]
    fn fractional_price_round_trips_unchanged() {
        let price: Price = serde_json::from_value(json!(1850.5)).unwrap();

        assert!(matches!(price, Price::Amount(_)));
        assert_eq!(serde_json::to_value(&price).unwrap(), json!(1850.5));
    }
}
