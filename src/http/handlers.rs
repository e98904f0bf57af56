//! HTTP handlers for the REST API.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, error, warn};

use super::dto::ListingsQuery;
use super::state::AppState;
use crate::models::{HealthResponse, ListingsResponse};
use crate::scrapers::SearchParams;

/// GET /listings
///
/// Fetch listings from Daft matching the query. Any failure during the fetch,
/// including an unknown `search_type` or `property_type`, still answers 200
/// with `status: "error"`.
pub async fn get_listings(
    State(state): State<AppState>,
    query: Result<Query<ListingsQuery>, QueryRejection>,
) -> (StatusCode, Json<ListingsResponse>) {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!("Rejected listings query: {}", rejection.body_text());
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ListingsResponse::error(rejection.body_text())),
            );
        }
    };

    debug!("Received request with params: {:?}", query);
    let params = SearchParams::from(query);

    match state.fetcher.fetch(&params).await {
        Ok(listings) => (StatusCode::OK, Json(ListingsResponse::success(listings))),
        Err(err) => {
            error!("Error in get_listings: {}", err);
            (StatusCode::OK, Json(ListingsResponse::error(err.to_string())))
        }
    }
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
