use std::sync::Arc;

use anyhow::Context;
use daft_listings::config::Config;
use daft_listings::fetcher::ListingFetcher;
use daft_listings::http::{create_router, AppState};
use daft_listings::scrapers::DaftProvider;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!("🏠 Daft listings service");
    info!("Gateway: {} (page size {})", config.daft.api_url, config.daft.page_size);

    let fetcher = ListingFetcher::new(Arc::new(DaftProvider::new(config.daft.clone())));
    info!("Listings source: {}", fetcher.source_name());

    let app = create_router(AppState::new(fetcher));

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
