use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::primitives::{ParsedNumber, is_plausible_year, parse_date, parse_number};
use crate::core::{Column, ColumnType, TimeGranularity, Value};

/// Result of classifying one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub column_type: ColumnType,
    pub granularity: Option<TimeGranularity>,
    pub null_count: usize,
}

impl ColumnProfile {
    #[must_use]
    pub fn is_year(self) -> bool {
        self.granularity == Some(TimeGranularity::Year)
    }
}

/// Classifies a column as numeric, temporal or categorical.
///
/// Rules, in order:
/// 1. every non-null value is a number (or numeric text): numeric. An empty or
///    all-null column is numeric.
/// 2. a non-empty numeric column of whole numbers in `-9999..=9999` is
///    temporal at year granularity, but only if its name matches one of
///    `temporal_name_hints`. Integers, floats without a fractional part
///    (`2000.0`) and integer text (`"1990"`) all count as whole numbers.
/// 3. every non-null value is a date (or ISO date text): temporal at day
///    granularity.
/// 4. anything else, including mixed data, is categorical.
///
/// Non-finite floats count as missing values.
#[must_use]
pub fn infer_column_profile(column: &Column, temporal_name_hints: &[String]) -> ColumnProfile {
    let null_count = column.values.iter().filter(|value| is_missing(value)).count();
    let present: Vec<&Value> = column.values.iter().filter(|v| !is_missing(v)).collect();

    let profile = if let Some(all_years) = numeric_year_shape(&present) {
        if all_years && !present.is_empty() && name_has_temporal_hint(&column.name, temporal_name_hints)
        {
            ColumnProfile {
                column_type: ColumnType::Temporal,
                granularity: Some(TimeGranularity::Year),
                null_count,
            }
        } else {
            ColumnProfile {
                column_type: ColumnType::Numeric,
                granularity: None,
                null_count,
            }
        }
    } else if present.iter().all(|value| is_date_like(value)) {
        ColumnProfile {
            column_type: ColumnType::Temporal,
            granularity: Some(TimeGranularity::Day),
            null_count,
        }
    } else {
        ColumnProfile {
            column_type: ColumnType::Categorical,
            granularity: None,
            null_count,
        }
    };

    trace!(
        column = %column.name,
        column_type = %profile.column_type,
        granularity = ?profile.granularity,
        null_count,
        "inferred column profile"
    );
    profile
}

/// Whether `value` is treated as missing during inference and serialization.
#[must_use]
pub fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Float(value) => !value.is_finite(),
        _ => false,
    }
}

/// Matches the lowercase column name, or any of its `_`/`-`/space separated
/// tokens, against the hints.
#[must_use]
pub fn name_has_temporal_hint(name: &str, temporal_name_hints: &[String]) -> bool {
    let lower = name.to_lowercase();
    temporal_name_hints.iter().any(|hint| {
        let hint = hint.to_lowercase();
        lower == hint
            || lower
                .split(|ch: char| ch == '_' || ch == '-' || ch.is_whitespace())
                .any(|token| token == hint)
    })
}

/// Returns `None` when some value is not numeric, otherwise whether every
/// value is a whole number inside the plausible year range.
fn numeric_year_shape(values: &[&Value]) -> Option<bool> {
    let mut all_years = true;
    for value in values {
        let year_like = match value {
            Value::Integer(number) => is_plausible_year(*number),
            Value::Float(number) => {
                number.fract() == 0.0 && is_plausible_year(*number as i64)
            }
            Value::Text(text) => match parse_number(text)? {
                ParsedNumber::Integer(number) => is_plausible_year(number),
                ParsedNumber::Float(_) => false,
            },
            Value::Date(_) | Value::Null => return None,
        };
        all_years &= year_like;
    }
    Some(all_years)
}

fn is_date_like(value: &Value) -> bool {
    match value {
        Value::Date(_) => true,
        Value::Text(text) => parse_date(text).is_some(),
        _ => false,
    }
}
