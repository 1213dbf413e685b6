//! Dashboard formatting for prices, market caps and percentage changes.

use super::num::{display_trimmed, display_with_decimals};

const TRILLION: f64 = 1e12;
const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;

/// `$0.4821` below one dollar, `$98.42` below a thousand, `$43,782.45` above.
pub fn format_price(price: f64) -> String {
    if price < 1.0 {
        format!("${:.4}", price)
    } else if price < 1000.0 {
        format!("${:.2}", price)
    } else {
        format!("${}", display_with_decimals(price, 2))
    }
}

/// Abbreviates with T/B/M suffixes to one decimal place.
pub fn format_market_cap(market_cap: f64) -> String {
    if market_cap >= TRILLION {
        format!("${:.1}T", market_cap / TRILLION)
    } else if market_cap >= BILLION {
        format!("${:.1}B", market_cap / BILLION)
    } else if market_cap >= MILLION {
        format!("${:.1}M", market_cap / MILLION)
    } else {
        format!("${}", display_trimmed(market_cap, 3))
    }
}

/// `▲ 3.21%` for gains (and zero), `▼ 0.95%` for losses.
pub fn format_percentage(percentage: f64) -> String {
    let sign = if percentage >= 0.0 { '▲' } else { '▼' };
    format!("{} {:.2}%", sign, percentage.abs())
}
