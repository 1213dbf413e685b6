//! High-level client: `CoinboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::cache::{Clock, SystemClock, TtlCache};
use crate::config::Config;
use crate::domain::coin::client::Coins;
use crate::domain::coin::CoinSnapshot;
use crate::domain::market_stats::client::MarketStats;
use crate::domain::market_stats::MarketSnapshot;
use crate::error::MarketError;
use crate::http::CoinGeckoHttp;

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::market_stats::client::MarketStats as MarketStatsClient;

/// Freshness window for coin listings.
pub const DEFAULT_COIN_CACHE_TTL: Duration = Duration::from_millis(30_000);

/// Freshness window for global market statistics.
pub const DEFAULT_MARKET_STATS_TTL: Duration = Duration::from_millis(60_000);

/// The primary entry point: cached access to upstream market data.
///
/// Clones share the HTTP connection pool and both caches, so one instance built
/// at start-up can be handed to every request handler.
#[derive(Clone)]
pub struct CoinboardClient {
    pub(crate) http: CoinGeckoHttp,
    /// Coin listings: `cryptocurrencies:<limit>` → snapshots
    pub(crate) coin_cache: TtlCache<Vec<CoinSnapshot>>,
    /// Global figures: `market-stats` → snapshot
    pub(crate) stats_cache: TtlCache<MarketSnapshot>,
    pub(crate) coin_cache_ttl: Duration,
    pub(crate) market_stats_ttl: Duration,
    pub(crate) clock: Arc<dyn Clock>,
}

impl CoinboardClient {
    pub fn builder() -> CoinboardClientBuilder {
        CoinboardClientBuilder::default()
    }

    /// Build a client from environment-derived configuration.
    pub fn from_config(config: &Config) -> Result<Self, MarketError> {
        let mut builder = Self::builder()
            .base_url(&config.api_url)
            .request_timeout(config.request_timeout);
        if let Some(key) = config.api_key.as_deref() {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn market_stats(&self) -> MarketStats<'_> {
        MarketStats { client: self }
    }

    pub fn http(&self) -> &CoinGeckoHttp {
        &self.http
    }

    /// Clear all caches.
    pub async fn clear_all_caches(&self) {
        self.coin_cache.clear().await;
        self.stats_cache.clear().await;
    }

    pub(crate) fn timestamp(&self, epoch_millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(epoch_millis).unwrap_or_else(Utc::now)
    }
}

impl std::fmt::Debug for CoinboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinboardClient")
            .field("http", &self.http)
            .field("coin_cache_ttl", &self.coin_cache_ttl)
            .field("market_stats_ttl", &self.market_stats_ttl)
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinboardClientBuilder {
    base_url: String,
    api_key: Option<String>,
    request_timeout: Duration,
    coin_cache_ttl: Duration,
    market_stats_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl Default for CoinboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: None,
            request_timeout: crate::network::DEFAULT_REQUEST_TIMEOUT,
            coin_cache_ttl: DEFAULT_COIN_CACHE_TTL,
            market_stats_ttl: DEFAULT_MARKET_STATS_TTL,
            clock: Arc::new(SystemClock),
        }
    }
}

impl CoinboardClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Send this key with every upstream request. Without one the free tier is used.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn coin_cache_ttl(mut self, ttl: Duration) -> Self {
        self.coin_cache_ttl = ttl;
        self
    }

    pub fn market_stats_ttl(mut self, ttl: Duration) -> Self {
        self.market_stats_ttl = ttl;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn build(self) -> Result<CoinboardClient, MarketError> {
        if self.request_timeout.is_zero() {
            return Err(MarketError::Validation(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        let http = CoinGeckoHttp::new(&self.base_url, self.api_key, self.request_timeout)
            .map_err(|e| MarketError::Validation(format!("failed to build HTTP client: {}", e)))?;

        Ok(CoinboardClient {
            http,
            coin_cache: TtlCache::new(),
            stats_cache: TtlCache::new(),
            coin_cache_ttl: self.coin_cache_ttl,
            market_stats_ttl: self.market_stats_ttl,
            clock: self.clock,
        })
    }
}
