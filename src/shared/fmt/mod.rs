//! Display formatting for dashboard figures.

pub mod market;
pub mod num;

pub use market::{format_market_cap, format_percentage, format_price};
