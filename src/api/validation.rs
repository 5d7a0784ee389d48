use crate::core::{DataTable, MarkKind, Role, TimeGranularity, Value};
use crate::error::{ChartError, ChartResult};

use super::{ColumnBinding, InteractionOptions, MarkOptions, Selection, TimeBound};

pub(super) fn validate_mark_options(kind: MarkKind, options: MarkOptions) -> ChartResult<MarkOptions> {
    if options.stacked && kind != MarkKind::Bar {
        return Err(ChartError::InvalidOption(format!(
            "`stacked` is only supported by bar marks, not {kind}"
        )));
    }
    Ok(options)
}

/// Parses named interaction flags, rejecting names the viewer does not know.
pub(super) fn parse_interaction_flags<'a>(
    flags: impl IntoIterator<Item = (&'a str, bool)>,
) -> ChartResult<InteractionOptions> {
    let mut options = InteractionOptions::default();
    for (name, enabled) in flags {
        match name {
            "relative" | "allow_relative" => options.allow_relative = Some(enabled),
            "scale_control" => options.scale_control = Some(enabled),
            "entity_control" => options.entity_control = Some(enabled),
            "enable_map" => options.enable_map = Some(enabled),
            other => {
                return Err(ChartError::InvalidOption(format!(
                    "unknown interaction flag `{other}` (expected one of {})",
                    InteractionOptions::FLAG_NAMES.join(", ")
                )));
            }
        }
    }
    Ok(options)
}

pub(super) fn validate_selection_timespan(selection: &Selection) -> ChartResult<()> {
    match (selection.min_time, selection.max_time) {
        (Some(TimeBound::Year(min)), Some(TimeBound::Year(max))) if min > max => Err(
            ChartError::InvalidOption(format!("timespan start {min} is after end {max}")),
        ),
        (Some(TimeBound::Date(min)), Some(TimeBound::Date(max))) if min > max => Err(
            ChartError::InvalidOption(format!("timespan start {min} is after end {max}")),
        ),
        (Some(TimeBound::Year(_)), Some(TimeBound::Date(_)))
        | (Some(TimeBound::Date(_)), Some(TimeBound::Year(_))) => Err(ChartError::InvalidOption(
            "timespan bounds must both be years or both be dates".to_owned(),
        )),
        _ => Ok(()),
    }
}

/// Checks a selection against the resolved bindings at export time.
pub(super) fn validate_selection(
    selection: &Selection,
    bindings: &[ColumnBinding],
    table: &DataTable,
) -> ChartResult<()> {
    validate_selection_timespan(selection)?;

    if let Some(entities) = &selection.entities {
        let color = bindings
            .iter()
            .find(|binding| binding.role == Role::Color)
            .ok_or_else(|| {
                ChartError::InvalidOption(
                    "entity selection requires a color encoding".to_owned(),
                )
            })?;
        let column = table
            .column(&color.column)
            .ok_or_else(|| ChartError::UnknownColumn {
                column: color.column.clone(),
            })?;
        for entity in entities {
            let present = column.values.iter().any(|value| match value {
                Value::Text(text) => text == entity,
                Value::Null => false,
                other => other.to_string() == *entity,
            });
            if !present {
                return Err(ChartError::InvalidOption(format!(
                    "selected entity `{entity}` does not appear in column `{}`",
                    color.column
                )));
            }
        }
    }

    let bounds = [selection.min_time, selection.max_time];
    if bounds.iter().all(Option::is_none) {
        return Ok(());
    }
    let x_granularity = bindings
        .iter()
        .find(|binding| binding.role == Role::X)
        .and_then(|binding| binding.granularity);
    for bound in bounds.into_iter().flatten() {
        let matches_axis = matches!(
            (bound, x_granularity),
            (TimeBound::Year(_), Some(TimeGranularity::Year))
                | (TimeBound::Date(_), Some(TimeGranularity::Day))
        );
        if !matches_axis {
            return Err(ChartError::InvalidOption(format!(
                "timespan bound {bound:?} does not match the x axis time granularity {x_granularity:?}"
            )));
        }
    }
    Ok(())
}
