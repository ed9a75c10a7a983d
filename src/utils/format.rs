//! Display formatting for listing values.
//!
//! Numbers are rendered the way the Polish locale writes them: non-breaking
//! space as the thousands separator, comma as the decimal mark. Parsing
//! accepts the same shapes back, plus the unit suffixes users paste in.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{AREA_SUFFIX, CURRENCY_SUFFIX, PLACEHOLDER_TEXT};

/// Thousands separator (non-breaking space).
const GROUP_SEPARATOR: char = '\u{00A0}';

static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)zł|pln|m²|m2").unwrap());

static NUMBER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)").unwrap());

/// Parse a number out of user- or document-supplied text.
///
/// Strips whitespace (including non-breaking spaces), currency and area
/// unit suffixes, accepts a decimal comma, and reads the longest numeric
/// prefix of what remains.
pub fn parse_number_from_text(value: &str) -> Option<f64> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let without_units = UNIT_RE.replace_all(&compact, "");
    let cleaned: String = without_units
        .chars()
        .map(|c| if c == ',' { '.' } else { c })
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let number = NUMBER_PREFIX_RE.find(&cleaned)?;
    number.as_str().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Format a number with locale grouping; up to three fraction digits,
/// trailing zeros dropped. `None` for non-finite values.
pub fn format_number(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let fixed = format!("{:.3}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(integer));
    if !fraction.is_empty() {
        out.push(',');
        out.push_str(fraction);
    }
    Some(out)
}

/// Format a number with a fixed count of fraction digits.
pub fn format_number_fixed(value: f64, fraction_digits: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let fixed = format!("{:.*}", fraction_digits, value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut out = String::new();
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(integer));
    if !fraction.is_empty() {
        out.push(',');
        out.push_str(fraction);
    }
    Some(out)
}

/// Format an asking price, e.g. `250 000 zł`.
pub fn format_currency(value: f64) -> Option<String> {
    format_number(value).map(|formatted| format!("{} {}", formatted, CURRENCY_SUFFIX))
}

/// Format a plot area with one fraction digit, e.g. `1 500,0 m²`.
pub fn format_area(value: f64) -> Option<String> {
    format_number_fixed(value, 1).map(|formatted| format!("{} {}", formatted, AREA_SUFFIX))
}

/// Trimmed text, or the placeholder when there is nothing to show.
pub fn text_or_fallback(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER_TEXT.to_string(),
    }
}

/// Normalize line endings of multi-line field content to `\n`.
pub fn normalize_multiline(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\r', "\n")
}

fn group_digits(digits: &str) -> String {
    let count = digits.len();
    let mut out = String::with_capacity(count + count / 3);
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (count - index).is_multiple_of(3) {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_grouped() {
        assert_eq!(parse_number_from_text("1234"), Some(1234.0));
        assert_eq!(parse_number_from_text("1\u{00A0}234,5"), Some(1234.5));
        assert_eq!(parse_number_from_text("1 234 567"), Some(1234567.0));
    }

    #[test]
    fn test_parse_strips_units() {
        assert_eq!(parse_number_from_text("250 000 zł"), Some(250000.0));
        assert_eq!(parse_number_from_text("1500 m²"), Some(1500.0));
        assert_eq!(parse_number_from_text("1500m2"), Some(1500.0));
        assert_eq!(parse_number_from_text("99 PLN"), Some(99.0));
    }

    #[test]
    fn test_parse_signs_and_decimals() {
        assert_eq!(parse_number_from_text("-12,5"), Some(-12.5));
        assert_eq!(parse_number_from_text("+7"), Some(7.0));
        assert_eq!(parse_number_from_text(",5"), Some(0.5));
    }

    #[test]
    fn test_parse_rejects_nonsense() {
        assert_eq!(parse_number_from_text(""), None);
        assert_eq!(parse_number_from_text("abc"), None);
        assert_eq!(parse_number_from_text("zł"), None);
    }

    #[test]
    fn test_format_number_groups_and_trims() {
        assert_eq!(format_number(1234567.5), Some("1\u{00A0}234\u{00A0}567,5".to_string()));
        assert_eq!(format_number(1000.0), Some("1\u{00A0}000".to_string()));
        assert_eq!(format_number(12.25), Some("12,25".to_string()));
        assert_eq!(format_number(f64::NAN), None);
    }

    #[test]
    fn test_format_number_fixed() {
        assert_eq!(format_number_fixed(1500.0, 1), Some("1\u{00A0}500,0".to_string()));
        assert_eq!(format_number_fixed(1234.5, 2), Some("1\u{00A0}234,50".to_string()));
        assert_eq!(format_number_fixed(7.0, 0), Some("7".to_string()));
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_number(-1234.5), Some("-1\u{00A0}234,5".to_string()));
    }

    #[test]
    fn test_format_currency_and_area() {
        assert_eq!(format_currency(250000.0), Some("250\u{00A0}000 zł".to_string()));
        assert_eq!(format_area(1500.0), Some("1\u{00A0}500,0 m²".to_string()));
    }

    #[test]
    fn test_parse_format_roundtrip() {
        let formatted = format_currency(123456.0).unwrap();
        assert_eq!(parse_number_from_text(&formatted), Some(123456.0));
    }

    #[test]
    fn test_text_or_fallback() {
        assert_eq!(text_or_fallback(Some("  x  ")), "x");
        assert_eq!(text_or_fallback(Some("   ")), "—");
        assert_eq!(text_or_fallback(None), "—");
    }

    #[test]
    fn test_normalize_multiline() {
        assert_eq!(normalize_multiline("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }
}
