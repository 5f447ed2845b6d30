//! Display formatting and form-input coercion.
//!
//! Rounding goes through [`Decimal`] so that amounts are rounded half away
//! from zero on their exact binary value, not on a lossy string form.

use rust_decimal::prelude::*;

use crate::error::{CostError, CostResult};
use crate::guard::nonzero_divisor;
use crate::types::Currency;

/// Placeholder shown for amounts that cannot be formatted (NaN, infinity,
/// or beyond the decimal range).
pub const NOT_AVAILABLE: &str = "n/a";

/// Converts a native amount into `currency`.
///
/// Amounts are divided by the exchange rate when the target currency is not
/// the native one. A zero rate is treated as 1.
#[must_use]
pub fn convert_amount(amount: f64, currency: Currency, exchange_rate: f64) -> f64 {
    if currency.is_native() {
        amount
    } else {
        amount / nonzero_divisor(exchange_rate)
    }
}

/// Formats a native amount for display in `currency`.
///
/// ```
/// use printcost_core::format::format_currency;
/// use printcost_core::Currency;
///
/// assert_eq!(format_currency(5250.0, Currency::COP, 4100.0), "COP 5,250");
/// assert_eq!(format_currency(8200.0, Currency::USD, 4100.0), "$ 2.00 USD");
/// ```
#[must_use]
pub fn format_currency(amount: f64, currency: Currency, exchange_rate: f64) -> String {
    let value = convert_amount(amount, currency, exchange_rate);
    let Some((negative, body)) = fixed_decimal(value, currency.decimal_places()) else {
        return NOT_AVAILABLE.to_string();
    };
    let sign = if negative { "-" } else { "" };
    match currency {
        Currency::COP => format!("{sign}{} {body}", currency.symbol()),
        Currency::USD => format!("{sign}{} {body} {}", currency.symbol(), currency.code()),
    }
}

/// Formats a plain number with thousands separators and up to two decimals.
#[must_use]
pub fn format_number(value: f64) -> String {
    let Some(decimal) = to_decimal(value) else {
        return NOT_AVAILABLE.to_string();
    };
    let rounded = decimal
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let body = group_thousands(&rounded.abs().to_string());
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// Formats a percentage with one decimal place, e.g. `12.3%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    match fixed_decimal(value, 1) {
        Some((negative, body)) => format!("{}{body}%", if negative { "-" } else { "" }),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Coerces free-form numeric text to a number.
///
/// Every character other than digits and `.` is dropped (so separators,
/// currency symbols and signs disappear). Empty input, more than one
/// decimal point, a digit string too long for a finite `f64`, or anything
/// else unparseable yields 0.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    let raw = numeric_chars(text);
    if raw.matches('.').count() > 1 {
        return 0.0;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Like [`parse_amount`], but rejects text with more than one decimal point
/// instead of coercing it.
///
/// Used for edits to an existing value, where a stray `.` should leave the
/// previous value in place.
pub fn parse_edit_amount(text: &str) -> CostResult<f64> {
    if numeric_chars(text).matches('.').count() > 1 {
        return Err(CostError::malformed_number(text));
    }
    Ok(parse_amount(text))
}

fn numeric_chars(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64_retain(value)
}

/// Rounds to `dp` places and renders the absolute value with grouping.
fn fixed_decimal(value: f64, dp: u32) -> Option<(bool, String)> {
    let mut rounded =
        to_decimal(value)?.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    Some((negative, group_thousands(&rounded.abs().to_string())))
}

fn group_thousands(plain: &str) -> String {
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_cop() {
        assert_eq!(format_currency(5250.0, Currency::COP, 4100.0), "COP 5,250");
        assert_eq!(format_currency(0.0, Currency::COP, 4100.0), "COP 0");
        assert_eq!(
            format_currency(1_234_567.5, Currency::COP, 4100.0),
            "COP 1,234,568"
        );
    }

    #[test]
    fn test_format_usd_converts() {
        assert_eq!(format_currency(32840.0, Currency::USD, 4100.0), "$ 8.01 USD");
        assert_eq!(format_currency(410.0, Currency::USD, 4100.0), "$ 0.10 USD");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(-2.5, Currency::COP, 1.0), "-COP 3");
        assert_eq!(format_currency(-4100.0, Currency::USD, 4100.0), "-$ 1.00 USD");
        // Rounds to zero, so no sign.
        assert_eq!(format_currency(-0.2, Currency::COP, 1.0), "COP 0");
    }

    #[test]
    fn test_zero_exchange_rate() {
        assert_eq!(format_currency(12.0, Currency::USD, 0.0), "$ 12.00 USD");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_currency(f64::NAN, Currency::COP, 1.0), NOT_AVAILABLE);
        assert_eq!(format_currency(f64::INFINITY, Currency::USD, 1.0), NOT_AVAILABLE);
        assert_eq!(format_number(f64::NAN), NOT_AVAILABLE);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(604.166666), "604.17");
        assert_eq!(format_number(-1500.0), "-1,500");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(11.33), "11.3%");
        assert_eq!(format_percent(100.0), "100.0%");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567.89"), "1,234,567.89");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("105,000"), 105000.0);
        assert_eq!(parse_amount("$ 2.5"), 2.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("1.2.3"), 0.0);
        assert_eq!(parse_amount("-5"), 5.0);
        assert_eq!(parse_amount(".5"), 0.5);
    }

    #[test]
    fn test_parse_amount_overflow_is_zero() {
        assert_eq!(parse_amount(&"9".repeat(400)), 0.0);
        assert_eq!(parse_amount("1e400"), 1400.0);
    }

    #[test]
    fn test_parse_edit_amount() {
        assert_eq!(parse_edit_amount("1,500"), Ok(1500.0));
        assert_eq!(parse_edit_amount(""), Ok(0.0));
        assert_eq!(parse_edit_amount("abc"), Ok(0.0));
        assert!(matches!(
            parse_edit_amount("1.2.3"),
            Err(CostError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn test_rounds_exact_binary_value() {
        assert_eq!(to_decimal(1.5), Some(dec!(1.5)));
        assert_eq!(to_decimal(f64::NAN), None);
        // 2.675 is stored as 2.67499999...
        assert_eq!(fixed_decimal(2.675, 2), Some((false, "2.67".to_string())));
        assert_eq!(fixed_decimal(0.125, 2), Some((false, "0.13".to_string())));
    }

    #[test]
    fn test_convert_amount() {
        assert_eq!(convert_amount(8200.0, Currency::COP, 4100.0), 8200.0);
        assert_eq!(convert_amount(8200.0, Currency::USD, 4100.0), 2.0);
    }
}
