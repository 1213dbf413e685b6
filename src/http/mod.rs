//! HTTP client layer: `CoinGeckoHttp`, one method per upstream endpoint.

pub mod client;

pub use client::CoinGeckoHttp;
