use crate::types::NumericValue;
use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that can not be part of a number
static NON_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9.,\-]").expect("valid non-numeric pattern"));

/// Strip every character that is not a digit, `.`, `,` or `-`, then turn the
/// first `,` into `.`.
///
/// Only one comma is rewritten. `"1,234.56"` becomes `"1.234.56"`, which
/// then fails to convert.
pub fn clean_numeric(s: &str) -> String {
    NON_NUMERIC.replace_all(s, "").replacen(',', ".", 1)
}

/// Normalize a display string into a number.
///
/// Absent or empty input, and anything whose cleaned form is not a plain
/// decimal number, gives `NotANumber`.
pub fn parse_number(s: Option<&str>) -> NumericValue {
    let s = match s {
        Some(s) if !s.is_empty() => s,
        _ => return NumericValue::NotANumber,
    };

    let cleaned = clean_numeric(s);
    let value = cleaned.parse::<f64>().ok();
    if value.is_none() {
        tracing::trace!("\"{}\" (cleaned \"{}\") is not a number", s, cleaned);
    }
    NumericValue::from(value)
}
