use crate::fetcher::ListingFetcher;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: ListingFetcher,
}

impl AppState {
    pub fn new(fetcher: ListingFetcher) -> Self {
        Self { fetcher }
    }
}
