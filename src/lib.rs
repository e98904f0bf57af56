//! HTTP service that searches Daft.ie rental listings and returns them as JSON.

pub mod config;
pub mod fetcher;
pub mod http;
pub mod models;
pub mod scrapers;
