//! Conversion: CoinMarketResponse → CoinSnapshot.
//!
//! Missing numeric fields are zeroed and a missing rank becomes [`UNRANKED`]. Each
//! default is logged at debug level; none of them is an error.

use super::color::logo_color;
use super::wire;
use super::{CoinSnapshot, UNRANKED};
use chrono::{DateTime, Utc};

impl From<(wire::CoinMarketResponse, DateTime<Utc>)> for CoinSnapshot {
    fn from((source, updated_at): (wire::CoinMarketResponse, DateTime<Utc>)) -> Self {
        let id = source.id;
        let rank = source.market_cap_rank.unwrap_or_else(|| {
            tracing::debug!(coin = %id, field = "market_cap_rank", "Upstream omitted rank, defaulting to {}", UNRANKED);
            UNRANKED
        });

        CoinSnapshot {
            price: zeroed(source.current_price, &id, "current_price"),
            price_change_24h: zeroed(source.price_change_24h, &id, "price_change_24h"),
            price_change_percentage_24h: zeroed(
                source.price_change_percentage_24h,
                &id,
                "price_change_percentage_24h",
            ),
            market_cap: zeroed(source.market_cap, &id, "market_cap"),
            volume_24h: zeroed(source.total_volume, &id, "total_volume"),
            rank,
            logo_color: logo_color(&source.symbol).to_string(),
            symbol: source.symbol.to_uppercase(),
            name: source.name,
            id,
            updated_at,
        }
    }
}

fn zeroed(value: Option<f64>, coin: &str, field: &'static str) -> f64 {
    value.unwrap_or_else(|| {
        tracing::debug!(coin, field, "Upstream omitted field, defaulting to 0");
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitcoin() -> wire::CoinMarketResponse {
        wire::CoinMarketResponse {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "btc".to_string(),
            current_price: Some(43_782.45),
            price_change_24h: Some(1_356.78),
            price_change_percentage_24h: Some(3.21),
            market_cap: Some(892_100_000_000.0),
            total_volume: Some(28_400_000_000.0),
            market_cap_rank: Some(1),
            image: None,
        }
    }

    #[test]
    fn test_full_record_maps_every_field() {
        let now = Utc::now();
        let coin = CoinSnapshot::from((bitcoin(), now));

        assert_eq!(coin.id, "bitcoin");
        assert_eq!(coin.name, "Bitcoin");
        assert_eq!(coin.symbol, "BTC");
        assert_eq!(coin.price, 43_782.45);
        assert_eq!(coin.price_change_24h, 1_356.78);
        assert_eq!(coin.price_change_percentage_24h, 3.21);
        assert_eq!(coin.market_cap, 892_100_000_000.0);
        assert_eq!(coin.volume_24h, 28_400_000_000.0);
        assert_eq!(coin.rank, 1);
        assert_eq!(coin.logo_color, "#f7931a");
        assert_eq!(coin.updated_at, now);
        assert!(coin.is_ranked());
    }

    #[test]
    fn test_missing_rank_defaults_to_unranked() {
        let mut raw = bitcoin();
        raw.market_cap_rank = None;
        let coin = CoinSnapshot::from((raw, Utc::now()));
        assert_eq!(coin.rank, 999);
        assert!(!coin.is_ranked());
    }

    #[test]
    fn test_missing_numbers_default_to_zero() {
        let raw = wire::CoinMarketResponse {
            id: "mystery".to_string(),
            symbol: "mys".to_string(),
            ..Default::default()
        };
        let coin = CoinSnapshot::from((raw, Utc::now()));
        assert_eq!(coin.price, 0.0);
        assert_eq!(coin.price_change_24h, 0.0);
        assert_eq!(coin.price_change_percentage_24h, 0.0);
        assert_eq!(coin.market_cap, 0.0);
        assert_eq!(coin.volume_24h, 0.0);
        assert_eq!(coin.symbol, "MYS");
        assert_eq!(coin.logo_color, "#6366f1");
    }

    #[test]
    fn test_nulls_in_json_are_zeroed() {
        let raw: wire::CoinMarketResponse = serde_json::from_str(
            r#"{"id":"bitcoin","symbol":"btc","current_price":100,"market_cap":null,"market_cap_rank":1}"#,
        )
        .unwrap();
        let coin = CoinSnapshot::from((raw, Utc::now()));

        assert_eq!(coin.price, 100.0);
        assert_eq!(coin.market_cap, 0.0);
        assert_eq!(coin.name, "");
        assert_eq!(coin.rank, 1);
    }

    #[test]
    fn test_serializes_camel_case() {
        let coin = CoinSnapshot::from((bitcoin(), Utc::now()));
        let json = serde_json::to_value(&coin).unwrap();

        assert_eq!(json["priceChange24h"], 1_356.78);
        assert_eq!(json["priceChangePercentage24h"], 3.21);
        assert_eq!(json["volume24h"], 28_400_000_000.0);
        assert_eq!(json["marketCap"], 892_100_000_000.0);
        assert_eq!(json["logoColor"], "#f7931a");
        assert!(json.get("updatedAt").is_some());
    }
}
