use chrono::{DateTime, NaiveDate};

/// Largest absolute integer accepted as a calendar year by the year heuristic.
pub const MAX_ABS_YEAR: i64 = 9_999;

/// Parses text as a number, preferring an exact integer.
///
/// Returns `None` for non-numeric text and for `NaN`/infinite spellings,
/// which cannot be represented in the exported JSON.
#[must_use]
pub fn parse_number(text: &str) -> Option<ParsedNumber> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(ParsedNumber::Integer(value));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(ParsedNumber::Float(value)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    Integer(i64),
    Float(f64),
}

/// Parses `YYYY-MM-DD` or an RFC 3339 timestamp into a calendar date.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

#[must_use]
pub fn is_plausible_year(value: i64) -> bool {
    (-MAX_ABS_YEAR..=MAX_ABS_YEAR).contains(&value)
}

/// Formats a date the way the hosted grapher expects day-resolution times.
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
