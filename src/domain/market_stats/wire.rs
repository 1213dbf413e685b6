//! Wire types for the `/global` response.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Envelope returned by `/global`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalResponse {
    pub data: GlobalData,
}

/// Global figures. Per-currency maps are keyed by lowercase currency or ticker
/// (`"usd"`, `"btc"`, ...). Upstream sends `null` for currencies it has no
/// figure for, so values are optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GlobalData {
    #[serde(default)]
    pub total_market_cap: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub total_volume: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub market_cap_percentage: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub active_cryptocurrencies: Option<u64>,
    #[serde(default)]
    pub market_cap_change_percentage_24h_usd: Option<f64>,
}
