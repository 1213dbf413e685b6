//! Upstream URL and request constants.

use std::time::Duration;

/// Default CoinGecko REST API base URL (free tier).
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Header carrying the optional CoinGecko API key.
pub const API_KEY_HEADER: &str = "x-cg-pro-api-key";

/// Bound on every upstream request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);
