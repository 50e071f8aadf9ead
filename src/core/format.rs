//! Field formatters shared by every section of the printout.
//!
//! All of these are total: absent values degrade to zero or an empty string
//! instead of leaking into the layout as placeholder text.

use std::fmt::Display;

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

/// Width used to wrap signatures and the fiscal chain in the stamp block.
pub const SIGNATURE_LINE_WIDTH: usize = 86;

/// Timestamp layout used by CFDI attributes (`Fecha`, `FechaTimbrado`, `FechaPago`).
pub const CFDI_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format a monetary amount with two decimals and `,` thousands grouping.
///
/// `None` is treated as zero. Rounding is half away from zero.
///
/// ```
/// use cfdi_layout::core::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(1234567.5)), "1,234,567.50");
/// assert_eq!(format_currency(None), "0.00");
/// ```
pub fn format_currency(amount: impl Into<Option<Decimal>>) -> String {
    let amount = amount
        .into()
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if amount.is_sign_negative() && !amount.is_zero() {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('.');
    out.push_str(frac_part);
    out
}

/// Insert a `'\n'` after every `n` characters of `value`.
///
/// Strings of at most `n` characters come back unchanged and no break is
/// appended after the last chunk. `n == 0` disables wrapping.
pub fn break_every_n(value: &str, n: usize) -> String {
    if n == 0 {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len() + value.len() / n);
    for (i, ch) in value.chars().enumerate() {
        if i > 0 && i % n == 0 {
            out.push('\n');
        }
        out.push(ch);
    }
    out
}

/// `value`, or `fallback` when absent.
pub fn or_default<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.unwrap_or(fallback)
}

/// `value`, or an empty string when absent.
pub fn or_empty(value: Option<&str>) -> &str {
    or_default(value, "")
}

/// Display an optional value, empty when absent.
pub fn optional_display<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Render a timestamp the way it appears in the CFDI XML.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(CFDI_DATETIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(dec!(0)), "0.00");
        assert_eq!(format_currency(dec!(5)), "5.00");
        assert_eq!(format_currency(dec!(999.999)), "1,000.00");
        assert_eq!(format_currency(dec!(1000)), "1,000.00");
        assert_eq!(format_currency(dec!(123456.78)), "123,456.78");
        assert_eq!(format_currency(dec!(1234567.5)), "1,234,567.50");
    }

    #[test]
    fn currency_negative_and_absent() {
        assert_eq!(format_currency(dec!(-1234.5)), "-1,234.50");
        assert_eq!(format_currency(dec!(-0.001)), "0.00");
        assert_eq!(format_currency(None), "0.00");
        assert_eq!(format_currency(Some(dec!(16))), "16.00");
    }

    #[test]
    fn currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec!(0.005)), "0.01");
        assert_eq!(format_currency(dec!(-0.005)), "-0.01");
        assert_eq!(format_currency(dec!(2.344)), "2.34");
    }

    #[test]
    fn break_short_strings_untouched() {
        assert_eq!(break_every_n("", 86), "");
        assert_eq!(break_every_n("abc", 86), "abc");
        let exact = "x".repeat(86);
        assert_eq!(break_every_n(&exact, 86), exact);
    }

    #[test]
    fn break_long_strings() {
        let s = "a".repeat(86) + &"b".repeat(86);
        let broken = break_every_n(&s, 86);
        assert_eq!(broken.matches('\n').count(), 1);
        assert_eq!(broken.find('\n'), Some(86));
        assert_eq!(break_every_n("abcdefg", 3), "abc\ndef\ng");
        assert_eq!(break_every_n("abc", 0), "abc");
    }

    #[test]
    fn break_counts_chars_not_bytes() {
        assert_eq!(break_every_n("ñañaña", 2), "ña\nña\nña");
    }

    #[test]
    fn defaults() {
        assert_eq!(or_default(None, "N/A"), "N/A");
        assert_eq!(or_default(Some("x"), "N/A"), "x");
        assert_eq!(or_empty(None), "");
        assert_eq!(optional_display::<u32>(None), "");
        assert_eq!(optional_display(Some(dec!(17.5))), "17.5");
    }

    #[test]
    fn datetime_layout() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 7, 0)
            .unwrap();
        assert_eq!(format_datetime(&dt), "2024-03-05T09:07:00");
    }
}
