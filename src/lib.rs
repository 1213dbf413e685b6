//! # coinboard
//!
//! Backend for a cryptocurrency market dashboard: a cached CoinGecko client and a
//! small read-only HTTP API over it.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Snapshot types, wire types, normalization, TTL cache
//! 2. **HTTP API**: `CoinGeckoHttp`, one method per upstream endpoint, fixed timeout
//! 3. **High-Level Client**: `CoinboardClient` with nested sub-clients and caching
//! 4. **Read Endpoints**: axum router over the client (`server` feature)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinboard::prelude::*;
//!
//! let client = CoinboardClient::builder().build()?;
//!
//! let coins = client.coins().list(Some(10)).await?;
//! let stats = client.market_stats().get().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared display formatting.
pub mod shared;

/// Domain modules (vertical slices): snapshot types, wire types, conversions.
pub mod domain;

/// Time-to-live cache and clocks.
pub mod cache;

/// Unified error types.
pub mod error;

/// Upstream URL constants.
pub mod network;

/// Environment-driven configuration.
pub mod config;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the upstream market-data API.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinboardClient`: the primary entry point.
pub mod client;

// ── Layer 4: Read Endpoints ──────────────────────────────────────────────────

#[cfg(feature = "server")]
pub mod server;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::coin::{CoinSnapshot, DEFAULT_COIN_LIMIT, UNRANKED};
    pub use crate::domain::market_stats::MarketSnapshot;

    // Cache
    pub use crate::cache::{is_expired, CacheEntry, CacheKey, Clock, ManualClock, SystemClock};

    // Errors
    pub use crate::error::{HttpError, MarketError};

    // Configuration
    pub use crate::config::{Config, LogFormat};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT};

    // Client + sub-clients
    pub use crate::client::{
        CoinboardClient, CoinboardClientBuilder, CoinsClient, MarketStatsClient,
    };

    // Formatting
    pub use crate::shared::fmt::{format_market_cap, format_percentage, format_price};
}
