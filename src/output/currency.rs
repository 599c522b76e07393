//! Currency formatting for report values.
//!
//! `1234567.891` renders as `$1,234,567.89`.

use crate::utils::config::{CURRENCY_DECIMAL_PLACES, CURRENCY_SYMBOL};
use rust_decimal::{Decimal, RoundingStrategy};

/// Format a money value with symbol, thousands separators and two decimals
///
/// **Public** - midpoints round to even (`0.125` -> `$0.12`)
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointNearestEven,
    );

    let fixed = format!("{:.*}", CURRENCY_DECIMAL_PLACES as usize, rounded.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    if fraction.is_empty() {
        format!("{}{}{}", sign, CURRENCY_SYMBOL, group_thousands(integer))
    } else {
        format!(
            "{}{}{}.{}",
            sign,
            CURRENCY_SYMBOL,
            group_thousands(integer),
            fraction
        )
    }
}

/// Insert a comma every three digits from the right
///
/// **Private** - expects ASCII digits only
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
