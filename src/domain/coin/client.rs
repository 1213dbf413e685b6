//! Coins sub-client: cached market listing and single-coin lookup.

use crate::cache::CacheKey;
use crate::client::CoinboardClient;
use crate::domain::coin::{CoinSnapshot, DEFAULT_COIN_LIMIT};
use crate::error::MarketError;

/// Sub-client for coin listings.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinboardClient,
}

impl<'a> Coins<'a> {
    /// Top `limit` coins by market cap (default 250), in upstream order.
    ///
    /// Served from cache while fresh. On a miss or expiry exactly one upstream
    /// request is made; if it fails the error is returned and nothing is cached.
    pub async fn list(&self, limit: Option<u32>) -> Result<Vec<CoinSnapshot>, MarketError> {
        let limit = limit.unwrap_or(DEFAULT_COIN_LIMIT);
        if limit == 0 {
            return Err(MarketError::Validation(
                "limit must be a positive integer".to_string(),
            ));
        }

        let key = CacheKey::cryptocurrencies(limit);
        if let Some(coins) = self
            .client
            .coin_cache
            .get(&key, self.client.clock.now_millis())
            .await
        {
            tracing::debug!(key = %key, count = coins.len(), "Coin cache hit");
            return Ok(coins);
        }

        tracing::debug!(key = %key, "Coin cache miss, fetching from upstream");
        let raw = self.client.http.get_coin_markets(limit).await.map_err(|e| {
            tracing::warn!(error = %e, limit, "Failed to fetch cryptocurrencies from upstream");
            MarketError::from(e)
        })?;

        let fetched_at = self.client.clock.now_millis();
        let updated_at = self.client.timestamp(fetched_at);
        let coins: Vec<CoinSnapshot> = raw
            .into_iter()
            .map(|coin| CoinSnapshot::from((coin, updated_at)))
            .collect();

        self.client
            .coin_cache
            .insert(key, coins.clone(), fetched_at, self.client.coin_cache_ttl)
            .await;
        Ok(coins)
    }

    /// Look up one coin by its upstream id within the default listing.
    pub async fn get(&self, id: &str) -> Result<CoinSnapshot, MarketError> {
        self.list(None)
            .await?
            .into_iter()
            .find(|coin| coin.id == id)
            .ok_or_else(|| MarketError::NotFound(format!("Cryptocurrency not found: {}", id)))
    }

    /// Drop the cached listing for `limit` (default 250).
    pub async fn invalidate(&self, limit: Option<u32>) {
        let key = CacheKey::cryptocurrencies(limit.unwrap_or(DEFAULT_COIN_LIMIT));
        self.client.coin_cache.remove(&key).await;
    }

    /// Clear every cached listing.
    pub async fn clear_cache(&self) {
        self.client.coin_cache.clear().await;
    }
}
