//! Coin domain: per-asset market snapshot, wire types, normalization.

pub mod client;
pub mod color;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of coins fetched when the caller does not ask for a specific limit.
pub const DEFAULT_COIN_LIMIT: u32 = 250;

/// Rank assigned to coins upstream reports without a market-cap rank.
pub const UNRANKED: u32 = 999;

/// A normalized market snapshot for a single coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinSnapshot {
    pub id: String,
    pub name: String,
    /// Ticker, always uppercase.
    pub symbol: String,
    /// Price in USD.
    pub price: f64,
    pub price_change_24h: f64,
    pub price_change_percentage_24h: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub rank: u32,
    /// Brand color as a `#rrggbb` hex string.
    pub logo_color: String,
    pub updated_at: DateTime<Utc>,
}

impl CoinSnapshot {
    pub fn is_ranked(&self) -> bool {
        self.rank != UNRANKED
    }
}
