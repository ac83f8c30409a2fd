//! Display formatting for currency, percentage and plain numbers.
//!
//! Pure presentation helpers used by UI consumers; the calculators never
//! format. Unknown currency codes fall back to a dollar sign rather than
//! erroring, matching the dashboard's display behavior.

use std::collections::HashMap;
use std::sync::OnceLock;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

static CURRENCY_SYMBOLS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn symbols() -> &'static HashMap<&'static str, &'static str> {
    CURRENCY_SYMBOLS.get_or_init(|| {
        let mut map = HashMap::new();
        map.insert("USD", "$");
        map.insert("EUR", "\u{20ac}");
        map.insert("GBP", "\u{a3}");
        map.insert("INR", "\u{20b9}");
        map.insert("JPY", "\u{a5}");
        map.insert("BTC", "\u{20bf}");
        map.insert("ETH", "\u{39e}");
        map
    })
}

/// Returns the display symbol for a currency code, '$' for unknown codes.
pub fn currency_symbol(currency: &str) -> &'static str {
    symbols().get(currency).copied().unwrap_or("$")
}

fn is_crypto(currency: &str) -> bool {
    currency == "BTC" || currency == "ETH"
}

/// Formatting options for [`format_currency`].
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    pub min_fraction_digits: u32,
    pub max_fraction_digits: u32,
    /// Abbreviate large values with K/M/B/T suffixes
    pub compact: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            min_fraction_digits: DISPLAY_DECIMAL_PRECISION,
            max_fraction_digits: DISPLAY_DECIMAL_PRECISION,
            compact: false,
        }
    }
}

/// Formats a currency value for display.
pub fn format_currency(value: Decimal, currency: &str, options: FormatOptions) -> String {
    let symbol = currency_symbol(currency);
    let magnitude = value.abs();
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };

    if options.compact {
        // Crypto symbols abbreviate K through B, fiat up to T
        let suffixes: &[(Decimal, &str)] = if is_crypto(currency) {
            &[
                (dec!(1_000_000_000), "B"),
                (dec!(1_000_000), "M"),
                (dec!(1_000), "K"),
            ]
        } else {
            &[
                (dec!(1_000_000_000_000), "T"),
                (dec!(1_000_000_000), "B"),
                (dec!(1_000_000), "M"),
                (dec!(1_000), "K"),
            ]
        };
        for (threshold, suffix) in suffixes {
            if magnitude >= *threshold {
                return format!(
                    "{}{}{}{}",
                    sign,
                    symbol,
                    to_fixed(magnitude / threshold, 2),
                    suffix
                );
            }
        }
    }

    if is_crypto(currency) {
        return format!(
            "{}{}{}",
            sign,
            symbol,
            to_fixed(magnitude, options.max_fraction_digits)
        );
    }

    format!(
        "{}{}{}",
        sign,
        symbol,
        grouped(
            magnitude,
            options.min_fraction_digits,
            options.max_fraction_digits
        )
    )
}

/// Formats a price with precision based on its magnitude: six decimals
/// under a cent, four under one unit, two otherwise.
pub fn format_price(price: Decimal, currency: &str) -> String {
    let max_fraction_digits = if price.abs() < dec!(0.01) {
        6
    } else if price.abs() < Decimal::ONE {
        4
    } else {
        2
    };
    format_currency(
        price,
        currency,
        FormatOptions {
            min_fraction_digits: DISPLAY_DECIMAL_PRECISION.min(max_fraction_digits),
            max_fraction_digits,
            compact: false,
        },
    )
}

/// Formats a large value with compact K/M/B/T notation.
pub fn format_compact_currency(value: Decimal, currency: &str) -> String {
    format_currency(
        value,
        currency,
        FormatOptions {
            compact: true,
            ..Default::default()
        },
    )
}

/// Formats a percentage with two decimals and an explicit leading `+`
/// for positive values.
pub fn format_percent(value: Decimal) -> String {
    let sign = if value > Decimal::ZERO { "+" } else { "" };
    format!("{}{}%", sign, to_fixed(value, 2))
}

/// Formats a plain number with thousands separators, trimming trailing
/// fraction zeros up to `decimals` places.
pub fn format_number(value: Decimal, decimals: u32) -> String {
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}", sign, grouped(value.abs(), 0, decimals))
}

/// Rounds half away from zero to exactly `decimals` places.
fn to_fixed(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let raw = rounded.abs().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (raw, String::new()),
    };
    if decimals == 0 {
        return format!("{}{}", sign, int_part);
    }
    let mut frac = frac_part;
    frac.truncate(decimals as usize);
    while frac.len() < decimals as usize {
        frac.push('0');
    }
    format!("{}{}.{}", sign, int_part, frac)
}

/// Non-negative value with thousands grouping and a min/max fraction
/// window.
fn grouped(value: Decimal, min_fraction: u32, max_fraction: u32) -> String {
    let fixed = to_fixed(value, max_fraction);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (fixed.as_str(), ""),
    };

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while (frac.len() as u32) < min_fraction {
        frac.push('0');
    }

    let grouped_int = group_thousands(int_part);
    if frac.is_empty() {
        grouped_int
    } else {
        format!("{}.{}", grouped_int, frac)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_fiat_with_grouping() {
        assert_eq!(
            format_currency(dec!(1234567.891), "USD", FormatOptions::default()),
            "$1,234,567.89"
        );
        assert_eq!(
            format_currency(dec!(0.5), "EUR", FormatOptions::default()),
            "\u{20ac}0.50"
        );
        assert_eq!(
            format_currency(dec!(-42), "GBP", FormatOptions::default()),
            "-\u{a3}42.00"
        );
    }

    #[test]
    fn unknown_currency_falls_back_to_dollar() {
        assert_eq!(
            format_currency(dec!(10), "XYZ", FormatOptions::default()),
            "$10.00"
        );
        assert_eq!(currency_symbol("XYZ"), "$");
    }

    #[test]
    fn formats_crypto_without_grouping() {
        assert_eq!(
            format_currency(dec!(1234.5), "BTC", FormatOptions::default()),
            "\u{20bf}1234.50"
        );
        assert_eq!(currency_symbol("ETH"), "\u{39e}");
    }

    #[test]
    fn compact_notation_picks_the_largest_suffix() {
        assert_eq!(format_compact_currency(dec!(1500), "USD"), "$1.50K");
        assert_eq!(format_compact_currency(dec!(2_500_000), "USD"), "$2.50M");
        assert_eq!(
            format_compact_currency(dec!(3_120_000_000), "USD"),
            "$3.12B"
        );
        assert_eq!(
            format_compact_currency(dec!(1_200_000_000_000), "USD"),
            "$1.20T"
        );
        // Below the first threshold values format normally
        assert_eq!(format_compact_currency(dec!(999), "USD"), "$999.00");
    }

    #[test]
    fn crypto_compact_stops_at_billions() {
        assert_eq!(
            format_compact_currency(dec!(2_000_000_000_000), "BTC"),
            "\u{20bf}2000.00B"
        );
    }

    #[test]
    fn price_precision_follows_magnitude() {
        assert_eq!(format_price(dec!(0.004521), "USD"), "$0.004521");
        assert_eq!(format_price(dec!(0.4521), "USD"), "$0.4521");
        assert_eq!(format_price(dec!(43000.129), "USD"), "$43,000.13");
    }

    #[test]
    fn percent_carries_an_explicit_sign() {
        assert_eq!(format_percent(dec!(22.283)), "+22.28%");
        assert_eq!(format_percent(dec!(-5.5)), "-5.50%");
        assert_eq!(format_percent(Decimal::ZERO), "0.00%");
    }

    #[test]
    fn numbers_trim_trailing_zeros() {
        assert_eq!(format_number(dec!(1234.5000), 4), "1,234.5");
        assert_eq!(format_number(dec!(1234), 4), "1,234");
        assert_eq!(format_number(dec!(0.12345), 4), "0.1235");
        assert_eq!(format_number(dec!(-9876.5), 2), "-9,876.5");
    }
}
