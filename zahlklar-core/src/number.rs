//! German number parsing and formatting
//!
//! Numerals use `.` as thousands separator and `,` as decimal separator
//! ("1.234.567,89"). Parsing strips the grouping dots, swaps the decimal
//! comma and records the sign separately from the magnitude.

use crate::error::{ParseError, ParseResult};

/// A parsed numeral: absolute magnitude plus sign
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedNumber {
    /// Absolute value of the numeral
    pub value: f64,
    /// Whether the numeral carried a leading `-`
    pub is_negative: bool,
}

/// Convert German numeral text into the canonical `f64` notation
///
/// Removes every `.` and replaces `,` with `.`; nothing is validated here.
pub fn to_canonical(raw: &str) -> String {
    raw.replace('.', "").replace(',', ".")
}

/// Parse a German-formatted numeral
pub fn parse(raw: &str) -> ParseResult<ParsedNumber> {
    let canonical = to_canonical(raw.trim());
    let is_negative = canonical.starts_with('-');
    let digits = canonical.trim_start_matches('-');

    let invalid = || ParseError::InvalidNumeral {
        raw: raw.to_string(),
    };

    if digits.is_empty() || !digits.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let value: f64 = digits.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(ParsedNumber { value, is_negative })
}

/// Whether the numeral text has a decimal part
pub fn has_decimal_comma(raw: &str) -> bool {
    raw.contains(',')
}

/// Round to a power of ten, ties to even
///
/// `exponent` 3 rounds to the nearest 1,000, 0 to the nearest integer and
/// -1 to one decimal place. 12,500 becomes 12,000 and 2.5 becomes 2.
pub fn round_to_granularity(value: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        let factor = 10f64.powi(exponent);
        (value / factor).round_ties_even() * factor
    } else {
        let factor = 10f64.powi(-exponent);
        (value * factor).round_ties_even() / factor
    }
}

/// Format an integral value with `.` thousands grouping ("325.000")
pub fn format_grouped(value: f64) -> String {
    let rendered = format!("{:.0}", value.round_ties_even());
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}")
}

/// Format with a fixed number of decimals and a decimal comma ("1,2")
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}").replace('.', ",")
}

/// Format a value rounded to `exponent`, picking the matching notation
pub fn format_rounded(value: f64, exponent: i32) -> String {
    let rounded = round_to_granularity(value, exponent);
    if exponent < 0 {
        format_decimal(rounded, exponent.unsigned_abs() as usize)
    } else {
        format_grouped(rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_grouped_decimal() {
        let parsed = parse("324.620,22").unwrap();
        assert!((parsed.value - 324_620.22).abs() < 1e-9);
        assert!(!parsed.is_negative);
    }

    #[test]
    fn test_parse_negative_keeps_magnitude() {
        let parsed = parse("-15,5").unwrap();
        assert_eq!(parsed.value, 15.5);
        assert!(parsed.is_negative);
    }

    #[test]
    fn test_parse_rejects_non_numerals() {
        assert!(parse("-").is_err());
        assert!(parse("").is_err());
        assert!(parse("12a").is_err());
        assert!(parse(",5").is_err());
    }

    #[test]
    fn test_parse_multiple_groups() {
        assert_eq!(parse("1.000.000").unwrap().value, 1_000_000.0);
    }

    #[test]
    fn test_round_to_granularity() {
        assert_eq!(round_to_granularity(324_620.22, 3), 325_000.0);
        assert_eq!(round_to_granularity(1_897.0, 3), 2_000.0);
        assert_eq!(round_to_granularity(15.5, 0), 16.0);
        assert!((round_to_granularity(1.234_567_89, -1) - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_ties_round_to_even() {
        assert_eq!(round_to_granularity(12_500.0, 3), 12_000.0);
        assert_eq!(round_to_granularity(13_500.0, 3), 14_000.0);
        assert_eq!(round_to_granularity(500.0, 3), 0.0);
        assert_eq!(round_to_granularity(0.5, 0), 0.0);
        assert_eq!(round_to_granularity(2.5, 0), 2.0);
        assert_eq!(format_rounded(1.25, -1), "1,2");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(2_000.0), "2.000");
        assert_eq!(format_grouped(1_234_567.0), "1.234.567");
        assert_eq!(format_grouped(-10_000.0), "-10.000");
    }

    #[test]
    fn test_format_decimal_uses_comma() {
        assert_eq!(format_decimal(1.0, 1), "1,0");
        assert_eq!(format_decimal(1.25, 2), "1,25");
    }

    #[test]
    fn test_format_rounded_picks_notation() {
        assert_eq!(format_rounded(1.234_567, -1), "1,2");
        assert_eq!(format_rounded(10_321.0, 3), "10.000");
        assert_eq!(format_rounded(38.7, 0), "39");
    }

    proptest! {
        #[test]
        fn grouped_integers_parse_back(n in 0u64..10_000_000_000u64) {
            let formatted = format_grouped(n as f64);
            let parsed = parse(&formatted).unwrap();
            prop_assert_eq!(parsed.value, n as f64);
            prop_assert!(!parsed.is_negative);
        }

        #[test]
        fn rounding_stays_on_the_grid(v in 0.0f64..1e9, exp in 0i32..7) {
            let rounded = round_to_granularity(v, exp);
            let step = 10f64.powi(exp);
            prop_assert!((rounded / step).fract() == 0.0);
            prop_assert!((rounded - v).abs() <= step / 2.0 + 1e-6);
        }
    }
}
