//! Market stats sub-client: cached global figures.

use crate::cache::CacheKey;
use crate::client::CoinboardClient;
use crate::domain::market_stats::MarketSnapshot;
use crate::error::MarketError;

/// Sub-client for global market statistics.
pub struct MarketStats<'a> {
    pub(crate) client: &'a CoinboardClient,
}

impl<'a> MarketStats<'a> {
    /// Global market figures. Uses TTL cache.
    pub async fn get(&self) -> Result<MarketSnapshot, MarketError> {
        let key = CacheKey::market_stats();
        if let Some(stats) = self
            .client
            .stats_cache
            .get(&key, self.client.clock.now_millis())
            .await
        {
            tracing::debug!(key = %key, "Market stats cache hit");
            return Ok(stats);
        }

        tracing::debug!(key = %key, "Market stats cache miss, fetching from upstream");
        let raw = self.client.http.get_global().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to fetch market stats from upstream");
            MarketError::from(e)
        })?;

        let fetched_at = self.client.clock.now_millis();
        let stats = MarketSnapshot::from((raw, self.client.timestamp(fetched_at)));

        self.client
            .stats_cache
            .insert(key, stats.clone(), fetched_at, self.client.market_stats_ttl)
            .await;
        Ok(stats)
    }

    pub async fn invalidate(&self) {
        self.client.stats_cache.remove(&CacheKey::market_stats()).await;
    }
}
