//! Wire types for `/coins/markets` responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Raw coin record from the markets listing.
///
/// Numeric fields are optional because upstream sends `null` for coins it has
/// no data for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CoinMarketResponse {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient_rank")]
    pub market_cap_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Accepts integral ranks sent as floats (`1.0`). Anything that is not a
/// positive whole number reads as no rank.
fn lenient_rank<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.and_then(|rank| {
        let usable = rank.is_finite() && rank >= 1.0 && rank.fract() == 0.0 && rank <= u32::MAX as f64;
        if !usable {
            tracing::debug!(rank, "Upstream sent unusable rank");
        }
        usable.then_some(rank as u32)
    }))
}
