use crate::models::Price;
use std::fmt;
use std::str::FromStr;

/// Search parameters for a listings search, exactly as the caller supplied them
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// City or free-text area to search in
    pub location: String,
    /// Minimum monthly price (EUR)
    pub min_price: i64,
    /// Maximum monthly price (EUR)
    pub max_price: i64,
    /// One of `apartment`, `house`, `studio`
    pub property_type: String,
    /// Minimum number of bedrooms
    pub bedrooms_min: i64,
    /// Maximum number of bedrooms
    pub bedrooms_max: i64,
    /// One of `rent`, `sharing`
    pub search_type: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            location: "Dublin".to_string(),
            min_price: 1000,
            max_price: 2000,
            property_type: "apartment".to_string(),
            bedrooms_min: 1,
            bedrooms_max: 3,
            search_type: "rent".to_string(),
        }
    }
}

/// A listing as the source describes it. Any attribute may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaftListing {
    pub title: Option<String>,
    pub price: Option<Price>,
    pub daft_link: Option<String>,
    pub bedrooms: Option<u32>,
    pub property_type: Option<String>,
    pub address: Option<String>,
}

/// Category of listing to search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    ResidentialRent,
    Sharing,
}

impl SearchType {
    /// Section name understood by the Daft gateway
    pub fn section(&self) -> &'static str {
        match self {
            SearchType::ResidentialRent => "residential-to-rent",
            SearchType::Sharing => "sharing",
        }
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rent" => Ok(SearchType::ResidentialRent),
            "sharing" => Ok(SearchType::Sharing),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Apartment,
    House,
    StudioApartment,
}

impl PropertyType {
    /// Filter value understood by the Daft gateway
    pub fn filter_value(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartments",
            PropertyType::House => "houses",
            PropertyType::StudioApartment => "studio-apartments",
        }
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apartment" => Ok(PropertyType::Apartment),
            "house" => Ok(PropertyType::House),
            "studio" => Ok(PropertyType::StudioApartment),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filter_value())
    }
}

/// Cities with a known stored search area on Daft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Galway,
    Dublin,
    Cork,
    Limerick,
    Waterford,
}

impl City {
    pub const ALL: [City; 5] = [
        City::Galway,
        City::Dublin,
        City::Cork,
        City::Limerick,
        City::Waterford,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            City::Galway => "GALWAY",
            City::Dublin => "DUBLIN",
            City::Cork => "CORK",
            City::Limerick => "LIMERICK",
            City::Waterford => "WATERFORD",
        }
    }

    /// Id of the stored geo shape the gateway searches within
    pub fn stored_shape_id(&self) -> &'static str {
        match self {
            City::Dublin => "1",
            City::Cork => "2",
            City::Galway => "4",
            City::Limerick => "5",
            City::Waterford => "6",
        }
    }
}

/// Where to search: a known city or free text handed to the source as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    City(City),
    Custom(String),
}

impl Location {
    /// Resolves case-insensitively to a known city, falling back to free text.
    pub fn resolve(input: &str) -> Self {
        City::ALL
            .into_iter()
            .find(|city| city.name().eq_ignore_ascii_case(input))
            .map(Location::City)
            .unwrap_or_else(|| Location::Custom(input.to_string()))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::City(city) => f.write_str(city.name()),
            Location::Custom(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_type_accepts_only_known_values() {
        assert_eq!("rent".parse::<SearchType>(), Ok(SearchType::ResidentialRent));
        assert_eq!("sharing".parse::<SearchType>(), Ok(SearchType::Sharing));
        assert_eq!("buy".parse::<SearchType>(), Err("buy".to_string()));
        assert!("Rent".parse::<SearchType>().is_err());
    }

    #[test]
    fn property_type_maps_studio_to_studio_apartment() {
        assert_eq!("studio".parse::<PropertyType>(), Ok(PropertyType::StudioApartment));
        assert_eq!("house".parse::<PropertyType>(), Ok(PropertyType::House));
        assert_eq!("apartment".parse::<PropertyType>(), Ok(PropertyType::Apartment));
        assert!("castle".parse::<PropertyType>().is_err());
    }

    #[test]
    fn location_is_case_insensitive() {
        assert_eq!(Location::resolve("dublin"), Location::City(City::Dublin));
        assert_eq!(Location::resolve("Cork"), Location::City(City::Cork));
        assert_eq!(Location::resolve("WATERFORD"), Location::City(City::Waterford));
    }

    #[test]
    fn unknown_location_passes_through_verbatim() {
        assert_eq!(
            Location::resolve("Athlone"),
            Location::Custom("Athlone".to_string())
        );
    }

    #[test]
    fn display_uses_source_names() {
        assert_eq!(SearchType::Sharing.to_string(), "sharing");
        assert_eq!(PropertyType::StudioApartment.to_string(), "studio-apartments");
        assert_eq!(Location::resolve("limerick").to_string(), "LIMERICK");
        assert_eq!(Location::resolve("Athlone").to_string(), "Athlone");
    }

    #[test]
    fn default_params_match_endpoint_defaults() {
        let params = SearchParams::default();
        assert_eq!(params.min_price, 1000);
        assert_eq!(params.max_price, 2000);
        assert_eq!(params.property_type, "apartment");
        assert_eq!(params.bedrooms_min, 1);
        assert_eq!(params.bedrooms_max, 3);
        assert_eq!(params.search_type, "rent");
    }
}
