//! Locale-tolerant decimal normalization shared by the price extractor and
//! the coupon classifier.

use once_cell::sync::Lazy;
use regex::Regex;

// First digit run, optionally comma-grouped, with at most one fractional part.
static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d[\d,]*(?:\.\d+)?").expect("digit-run pattern compiles"));

/// Parse a decimal amount out of locale-formatted text.
///
/// Locates the first digit run, strips thousands separators, keeps the
/// single decimal point and parses the remainder. Returns `None` when the
/// text contains no digit run or the result is not a finite number; callers
/// map that to a `MalformedValue` diagnostic.
pub fn parse_decimal_text(text: &str) -> Option<f64> {
    let run = DIGIT_RUN.find(text)?;
    let normalized = run.as_str().replace(',', "");
    let value: f64 = normalized.parse().ok()?;
    value.is_finite().then_some(value)
}
