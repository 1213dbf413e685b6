//! Market stats domain: global market snapshot.

pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate market figures, all in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub total_market_cap: f64,
    pub total_volume_24h: f64,
    /// Bitcoin's share of total market cap, in percent.
    pub btc_dominance: f64,
    pub active_cryptos: u64,
    /// 24h change of total market cap, in percent.
    pub market_cap_change_24h: f64,
    pub updated_at: DateTime<Utc>,
}
