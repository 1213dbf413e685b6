//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Normalized snapshot types served to callers
//! - `wire.rs`: Raw serde structs matching upstream responses
//! - `convert.rs`: Normalization from wire to snapshot types
//! - `client.rs`: Sub-client with the cached fetch operations

pub mod coin;
pub mod market_stats;
