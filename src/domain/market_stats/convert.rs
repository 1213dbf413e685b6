//! Conversion: GlobalResponse → MarketSnapshot.

use super::wire;
use super::MarketSnapshot;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

impl From<(wire::GlobalResponse, DateTime<Utc>)> for MarketSnapshot {
    fn from((source, updated_at): (wire::GlobalResponse, DateTime<Utc>)) -> Self {
        let data = source.data;
        let active_cryptos = data.active_cryptocurrencies.unwrap_or_else(|| {
            tracing::debug!(field = "active_cryptocurrencies", "Upstream omitted field, defaulting to 0");
            0
        });
        let market_cap_change_24h = data.market_cap_change_percentage_24h_usd.unwrap_or_else(|| {
            tracing::debug!(
                field = "market_cap_change_percentage_24h_usd",
                "Upstream omitted field, defaulting to 0"
            );
            0.0
        });

        MarketSnapshot {
            total_market_cap: entry(&data.total_market_cap, "usd", "total_market_cap"),
            total_volume_24h: entry(&data.total_volume, "usd", "total_volume"),
            btc_dominance: entry(&data.market_cap_percentage, "btc", "market_cap_percentage"),
            active_cryptos,
            market_cap_change_24h,
            updated_at,
        }
    }
}

fn entry(map: &HashMap<String, Option<f64>>, key: &str, field: &'static str) -> f64 {
    map.get(key).copied().flatten().unwrap_or_else(|| {
        tracing::debug!(field, key, "Upstream omitted field, defaulting to 0");
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOBAL_JSON: &str = r#"{
        "data": {
            "active_cryptocurrencies": 13205,
            "markets": 1043,
            "total_market_cap": {"usd": 2310000000000.0, "eur": 2100000000000.0},
            "total_volume": {"usd": 89200000000.0},
            "market_cap_percentage": {"btc": 52.3, "eth": 16.1},
            "market_cap_change_percentage_24h_usd": 2.4,
            "updated_at": 1700000000
        }
    }"#;

    #[test]
    fn test_extracts_usd_and_btc_figures() {
        let raw: wire::GlobalResponse = serde_json::from_str(GLOBAL_JSON).unwrap();
        let now = Utc::now();
        let stats = MarketSnapshot::from((raw, now));

        assert_eq!(stats.total_market_cap, 2_310_000_000_000.0);
        assert_eq!(stats.total_volume_24h, 89_200_000_000.0);
        assert_eq!(stats.btc_dominance, 52.3);
        assert_eq!(stats.active_cryptos, 13_205);
        assert_eq!(stats.market_cap_change_24h, 2.4);
        assert_eq!(stats.updated_at, now);
    }

    #[test]
    fn test_missing_figures_default_to_zero() {
        let raw: wire::GlobalResponse = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        let stats = MarketSnapshot::from((raw, Utc::now()));

        assert_eq!(stats.total_market_cap, 0.0);
        assert_eq!(stats.total_volume_24h, 0.0);
        assert_eq!(stats.btc_dominance, 0.0);
        assert_eq!(stats.active_cryptos, 0);
        assert_eq!(stats.market_cap_change_24h, 0.0);
    }

    #[test]
    fn test_null_entries_are_tolerated() {
        let raw: wire::GlobalResponse = serde_json::from_str(
            r#"{"data":{
                "total_market_cap": {"usd": 5.0, "vef": null},
                "total_volume": {"usd": null, "eur": 3.0},
                "market_cap_percentage": {"btc": 50.1, "xyz": null}
            }}"#,
        )
        .unwrap();
        let stats = MarketSnapshot::from((raw, Utc::now()));

        assert_eq!(stats.total_market_cap, 5.0);
        assert_eq!(stats.total_volume_24h, 0.0);
        assert_eq!(stats.btc_dominance, 50.1);
    }

    #[test]
    fn test_serializes_camel_case() {
        let raw: wire::GlobalResponse = serde_json::from_str(GLOBAL_JSON).unwrap();
        let json = serde_json::to_value(MarketSnapshot::from((raw, Utc::now()))).unwrap();

        assert_eq!(json["totalMarketCap"], 2_310_000_000_000.0);
        assert_eq!(json["totalVolume24h"], 89_200_000_000.0);
        assert_eq!(json["btcDominance"], 52.3);
        assert_eq!(json["activeCryptos"], 13_205);
        assert_eq!(json["marketCapChange24h"], 2.4);
    }
}
