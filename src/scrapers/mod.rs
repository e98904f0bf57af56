pub mod daft;
pub mod traits;
pub mod types;

pub use daft::{DaftProvider, DaftSearch};
pub use traits::{ListingSearch, SearchProvider};
pub use types::{City, DaftListing, Location, PropertyType, SearchParams, SearchType};
