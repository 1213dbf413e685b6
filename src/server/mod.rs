//! Read endpoints: axum router over a shared `CoinboardClient`.
//!
//! Routes:
//! - `GET /api/cryptocurrencies`
//! - `GET /api/cryptocurrencies/:id`
//! - `GET /api/market-stats`

pub mod routes;

use crate::client::CoinboardClient;

use axum::http::{header, Method};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with CORS applied.
pub fn router(client: CoinboardClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    routes::create_router(client).layer(cors)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, client: CoinboardClient) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router(client))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal, stopping server...");
}
