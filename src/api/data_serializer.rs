use indexmap::IndexMap;
use serde_json::{Number, Value as JsonValue};
use tracing::debug;

use crate::core::primitives::{ParsedNumber, format_iso_date, parse_date, parse_number};
use crate::core::{Column, ColumnType, DataTable, TimeGranularity, Value, is_missing};
use crate::error::{ChartError, ChartResult};

use super::{ColumnBinding, NullPolicy};

/// One exported observation keyed by original column name.
pub type DataRow = IndexMap<String, JsonValue>;

/// Converts the bound columns of `table` into row records.
///
/// Each bound column appears once per row, in binding order, even when it backs
/// several roles. Cell encoding follows the column's inferred type:
/// numbers stay numbers (numeric text is coerced), year-granularity times become
/// integers, day-granularity times become `YYYY-MM-DD` strings and categorical
/// cells become strings. Missing cells are `null` under
/// [`NullPolicy::KeepNull`]; rows containing one are skipped under
/// [`NullPolicy::DropRow`].
pub fn serialize_rows(
    table: &DataTable,
    bindings: &[ColumnBinding],
    null_policy: NullPolicy,
) -> ChartResult<Vec<DataRow>> {
    let mut columns: Vec<(&str, &Column, &ColumnBinding)> = Vec::with_capacity(bindings.len());
    for binding in bindings {
        if columns.iter().any(|(name, _, _)| *name == binding.column) {
            continue;
        }
        let column = table
            .column(&binding.column)
            .ok_or_else(|| ChartError::UnknownColumn {
                column: binding.column.clone(),
            })?;
        columns.push((binding.column.as_str(), column, binding));
    }

    let mut rows = Vec::with_capacity(table.row_count());
    let mut dropped = 0usize;
    for row_index in 0..table.row_count() {
        if null_policy == NullPolicy::DropRow
            && columns
                .iter()
                .any(|(_, column, _)| is_missing(&column.values[row_index]))
        {
            dropped += 1;
            continue;
        }

        let mut row = DataRow::with_capacity(columns.len());
        for (name, column, binding) in &columns {
            let cell = encode_cell(&column.values[row_index], binding);
            row.insert((*name).to_owned(), cell);
        }
        rows.push(row);
    }

    if dropped > 0 {
        debug!(dropped, kept = rows.len(), "dropped rows with missing values");
    }
    Ok(rows)
}

/// Encodes one cell according to the binding's inferred type.
#[must_use]
pub fn encode_cell(value: &Value, binding: &ColumnBinding) -> JsonValue {
    if is_missing(value) {
        return JsonValue::Null;
    }
    match (binding.column_type, binding.granularity) {
        (ColumnType::Numeric, _) => encode_number(value),
        (ColumnType::Temporal, Some(TimeGranularity::Year)) => encode_year(value),
        (ColumnType::Temporal, _) => encode_date(value),
        (ColumnType::Categorical, _) => match value {
            Value::Text(text) => JsonValue::String(text.clone()),
            other => JsonValue::String(other.to_string()),
        },
    }
}

fn encode_number(value: &Value) -> JsonValue {
    match value {
        Value::Integer(number) => JsonValue::from(*number),
        Value::Float(number) => float_to_json(*number),
        Value::Text(text) => match parse_number(text) {
            Some(ParsedNumber::Integer(number)) => JsonValue::from(number),
            Some(ParsedNumber::Float(number)) => float_to_json(number),
            None => JsonValue::Null,
        },
        Value::Date(_) | Value::Null => JsonValue::Null,
    }
}

fn encode_year(value: &Value) -> JsonValue {
    match value {
        Value::Integer(year) => JsonValue::from(*year),
        Value::Float(year) if year.fract() == 0.0 => JsonValue::from(*year as i64),
        Value::Text(text) => match parse_number(text) {
            Some(ParsedNumber::Integer(year)) => JsonValue::from(year),
            _ => JsonValue::Null,
        },
        _ => JsonValue::Null,
    }
}

fn encode_date(value: &Value) -> JsonValue {
    let date = match value {
        Value::Date(date) => Some(*date),
        Value::Text(text) => parse_date(text),
        _ => None,
    };
    date.map_or(JsonValue::Null, |date| JsonValue::String(format_iso_date(date)))
}

fn float_to_json(number: f64) -> JsonValue {
    Number::from_f64(number).map_or(JsonValue::Null, JsonValue::Number)
}
