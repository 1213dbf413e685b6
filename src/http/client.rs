//! Low-level HTTP client: `CoinGeckoHttp`.
//!
//! One method per upstream endpoint. Returns wire types (normalization to
//! snapshots happens in the sub-clients). Every request carries a fixed timeout
//! and is never retried.

use crate::domain::coin::wire::CoinMarketResponse;
use crate::domain::market_stats::wire::GlobalResponse;
use crate::error::HttpError;
use crate::network::API_KEY_HEADER;

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the CoinGecko REST API.
#[derive(Clone)]
pub struct CoinGeckoHttp {
    base_url: String,
    client: Client,
    /// Optional API key. NEVER logged.
    api_key: Option<String>,
    timeout: Duration,
}

impl CoinGeckoHttp {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, HttpError> {
        let client = Client::builder().pool_max_idle_per_host(10).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    // ── Coins ────────────────────────────────────────────────────────────

    /// Top `limit` coins by descending market cap, priced in USD, with 24h change.
    pub async fn get_coin_markets(&self, limit: u32) -> Result<Vec<CoinMarketResponse>, HttpError> {
        let url = format!(
            "{}/coins/markets?vs_currency=usd&order=market_cap_desc&per_page={}&page=1&sparkline=false&price_change_percentage=24h",
            self.base_url, limit
        );
        self.get(&url).await
    }

    // ── Global ───────────────────────────────────────────────────────────

    pub async fn get_global(&self) -> Result<GlobalResponse, HttpError> {
        let url = format!("{}/global", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let mut req = self
            .client
            .get(url)
            .timeout(self.timeout)
            .header(ACCEPT, "application/json");

        if let Some(key) = self.api_key.as_ref() {
            req = req.header(API_KEY_HEADER, key);
        }

        let resp = req.send().await.map_err(|e| self.classify(e))?;
        let status = resp.status();

        if status.is_success() {
            return resp.json::<T>().await.map_err(|e| self.classify(e));
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status_code, url, "Upstream returned non-success status");

        match status_code {
            401 | 403 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }

    /// The request future is dropped once the timeout fires, which releases its
    /// connection; report that as `Timeout` rather than a transport failure.
    fn classify(&self, err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(self.timeout)
        } else {
            HttpError::Reqwest(err)
        }
    }
}

impl std::fmt::Debug for CoinGeckoHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoHttp")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}
