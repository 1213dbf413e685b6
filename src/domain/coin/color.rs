//! Brand colors for well-known tickers.

/// Color used for any ticker not in the table.
pub const DEFAULT_LOGO_COLOR: &str = "#6366f1";

/// Look up the display color for a ticker. Case-insensitive.
pub fn logo_color(symbol: &str) -> &'static str {
    match symbol.to_ascii_lowercase().as_str() {
        "btc" => "#f7931a",
        "eth" => "#627eea",
        "bnb" => "#f3ba2f",
        "sol" => "#9945ff",
        "ada" => "#0033ad",
        "matic" => "#8247e5",
        "avax" => "#e84142",
        "link" => "#375bd2",
        "dot" => "#e6007a",
        "uni" => "#ff007a",
        "ltc" => "#bfbbbb",
        "bch" => "#8dc351",
        "xlm" => "#7d00ff",
        "xrp" => "#23292f",
        "doge" => "#c2a633",
        _ => DEFAULT_LOGO_COLOR,
    }
}
