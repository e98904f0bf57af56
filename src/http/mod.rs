//! axum front end for the listings service.
//!
//! `GET /listings` decodes the query string, hands it to the
//! [`ListingFetcher`](crate::fetcher::ListingFetcher) and wraps the outcome in
//! the `{status, data | message}` envelope. Fetch failures are reported inside
//! the envelope with HTTP 200; only an undecodable query string gets a 422.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
