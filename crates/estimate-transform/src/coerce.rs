//! Pure coercion functions from raw cell text to canonical types.
//!
//! These are permissive on purpose: validation has already rejected malformed
//! required values, so optional fields degrade to `None` instead of failing.
//! Both the validator and the transformer call through here so the two stages
//! can never disagree about what parses.

use chrono::NaiveDate;

/// Tokens treated as an affirmative boolean, case-insensitively.
const TRUE_TOKENS: [&str; 5] = ["true", "yes", "1", "y", "x"];

/// Date formats accepted in source cells, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%d.%m.%Y"];

/// Coerce to boolean: any affirmative token is `true`, everything else
/// (including empty) is `false`.
pub fn parse_bool(value: &str) -> bool {
    let trimmed = value.trim();
    TRUE_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
}

/// Locale-neutral decimal parse; `None` for empty or non-numeric input.
pub fn parse_float(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok().filter(|f: &f64| f.is_finite())
}

/// Integer parse; integral floats ("12.0") are accepted, fractions are not.
pub fn parse_int(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(int);
    }
    match parse_float(trimmed) {
        Some(float) if float.fract() == 0.0 && float.abs() <= i64::MAX as f64 => {
            Some(float as i64)
        }
        _ => None,
    }
}

/// Parse to a calendar date, discarding any time-of-day component.
///
/// `None` for empty or unparseable input. The canonical rendering of the
/// result is ISO `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Datetime forms: keep the date part only
    let date_part = trimmed
        .split_once('T')
        .or_else(|| trimmed.split_once(' '))
        .map_or(trimmed, |(date, _)| date);

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}

/// Trim; empty becomes `None`, never an empty string, so downstream
/// consumers treat "missing" uniformly.
pub fn parse_string(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
