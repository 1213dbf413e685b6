//! Number formatting utilities for human-readable display.

/// Adds thousands separators to the integer part of an already formatted number.
pub fn with_separators(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer_part, fraction) = match unsigned.split_once('.') {
        Some((integer_part, fraction)) => (integer_part, Some(fraction)),
        None => (unsigned, None),
    };

    let grouped = integer_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// Trims trailing fractional zeros (and a dangling `.`).
pub fn trim_trailing_zeros(formatted: &str) -> &str {
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    }
}

/// Format an f64 with exactly `decimals` places and thousands separators.
pub fn display_with_decimals(amount: f64, decimals: usize) -> String {
    with_separators(&format!("{:.1$}", amount, decimals))
}

/// Format an f64 with at most `max_decimals` places, trailing zeros trimmed.
pub fn display_trimmed(amount: f64, max_decimals: usize) -> String {
    with_separators(trim_trailing_zeros(&format!("{:.1$}", amount, max_decimals)))
}
