//! Route handlers. Each one maps client errors to a JSON `{ "message": ... }` body.

use crate::client::CoinboardClient;
use crate::error::MarketError;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;

/// CDN caching for the coin listing; matches the 30s client-side TTL.
pub const COINS_CACHE_CONTROL: &str = "s-maxage=30, stale-while-revalidate=60";

/// CDN caching for market stats; matches the 60s client-side TTL.
pub const MARKET_STATS_CACHE_CONTROL: &str = "s-maxage=60, stale-while-revalidate=120";

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: &'static str,
}

pub fn create_router(client: CoinboardClient) -> Router {
    Router::new()
        .route("/api/cryptocurrencies", get(list_cryptocurrencies))
        .route("/api/cryptocurrencies/:id", get(get_cryptocurrency))
        .route("/api/market-stats", get(get_market_stats))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(client)
}

async fn list_cryptocurrencies(State(client): State<CoinboardClient>) -> Response {
    match client.coins().list(None).await {
        Ok(coins) => ([(header::CACHE_CONTROL, COINS_CACHE_CONTROL)], Json(coins)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch cryptocurrencies");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch cryptocurrencies")
        }
    }
}

async fn get_cryptocurrency(
    State(client): State<CoinboardClient>,
    Path(id): Path<String>,
) -> Response {
    match client.coins().get(&id).await {
        Ok(coin) => Json(coin).into_response(),
        Err(MarketError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "Cryptocurrency not found")
        }
        Err(e) => {
            tracing::error!(error = %e, id = %id, "Failed to fetch cryptocurrency");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch cryptocurrency")
        }
    }
}

async fn get_market_stats(State(client): State<CoinboardClient>) -> Response {
    match client.market_stats().get().await {
        Ok(stats) => {
            ([(header::CACHE_CONTROL, MARKET_STATS_CACHE_CONTROL)], Json(stats)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch market stats");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch market stats")
        }
    }
}

async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

fn error_response(status: StatusCode, message: &'static str) -> Response {
    (status, Json(ErrorBody { message })).into_response()
}
