use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{
    ColumnType, DataTable, MarkKind, Role, TimeGranularity, infer_column_profile,
};
use crate::error::{ChartError, ChartResult};

/// A role resolved against the table: which column it reads and how that
/// column was classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBinding {
    pub role: Role,
    pub column: String,
    pub column_type: ColumnType,
    pub granularity: Option<TimeGranularity>,
}

/// Resolved bindings, always ordered x, y, color.
pub type ColumnBindings = SmallVec<[ColumnBinding; 3]>;

/// Roles every mark needs before it can be exported.
#[must_use]
pub fn required_roles(mark: MarkKind) -> &'static [Role] {
    match mark {
        MarkKind::Line | MarkKind::Bar => &[Role::X, Role::Y],
    }
}

/// Compatibility table between roles and inferred column types.
///
/// Bar marks accept any type on either axis; the extra "one axis must be
/// numeric" rule is checked across both bindings in `resolve_encodings`.
#[must_use]
pub fn role_accepts(mark: MarkKind, role: Role, column_type: ColumnType) -> bool {
    match (mark, role) {
        (MarkKind::Line, Role::X) => {
            matches!(column_type, ColumnType::Temporal | ColumnType::Numeric)
        }
        (MarkKind::Line, Role::Y) => column_type == ColumnType::Numeric,
        (MarkKind::Bar, Role::X | Role::Y) => true,
        (_, Role::Color) => {
            matches!(column_type, ColumnType::Categorical | ColumnType::Numeric)
        }
    }
}

/// Validates `encoding` for `mark` against `table` and returns the finalized
/// bindings.
///
/// A line mark with no `x` binding defaults to the first temporal column of the
/// table. Errors are reported in phase order: missing roles first, then
/// unknown columns, then type mismatches.
pub fn resolve_encodings(
    mark: MarkKind,
    encoding: &IndexMap<Role, String>,
    table: &DataTable,
    temporal_name_hints: &[String],
) -> ChartResult<ColumnBindings> {
    let mut encoding = encoding.clone();
    if mark == MarkKind::Line && !encoding.contains_key(&Role::X) {
        if let Some(column) = default_time_column(table, temporal_name_hints) {
            debug!(column = %column, "defaulting line x role to temporal column");
            encoding.insert(Role::X, column);
        }
    }

    for &role in required_roles(mark) {
        if !encoding.contains_key(&role) {
            return Err(ChartError::MissingEncoding { role });
        }
    }

    for role in Role::ALL {
        if let Some(column) = encoding.get(&role) {
            if !table.contains_column(column) {
                return Err(ChartError::UnknownColumn {
                    column: column.clone(),
                });
            }
        }
    }

    let mut bindings = ColumnBindings::new();
    for role in Role::ALL {
        let Some(column_name) = encoding.get(&role) else {
            continue;
        };
        let Some(column) = table.column(column_name) else {
            return Err(ChartError::UnknownColumn {
                column: column_name.clone(),
            });
        };
        let profile = infer_column_profile(column, temporal_name_hints);
        if !role_accepts(mark, role, profile.column_type) {
            return Err(ChartError::IncompatibleEncoding {
                role,
                column: column_name.clone(),
                column_type: profile.column_type,
                mark,
            });
        }
        bindings.push(ColumnBinding {
            role,
            column: column_name.clone(),
            column_type: profile.column_type,
            granularity: profile.granularity,
        });
    }

    if mark == MarkKind::Bar {
        ensure_bar_value_axis(&bindings)?;
    }

    Ok(bindings)
}

fn ensure_bar_value_axis(bindings: &[ColumnBinding]) -> ChartResult<()> {
    let axis_is_numeric = |role: Role| {
        bindings
            .iter()
            .any(|binding| binding.role == role && binding.column_type == ColumnType::Numeric)
    };
    if axis_is_numeric(Role::X) || axis_is_numeric(Role::Y) {
        return Ok(());
    }
    match bindings.iter().find(|binding| binding.role == Role::Y) {
        Some(y) => Err(ChartError::IncompatibleEncoding {
            role: Role::Y,
            column: y.column.clone(),
            column_type: y.column_type,
            mark: MarkKind::Bar,
        }),
        None => Err(ChartError::MissingEncoding { role: Role::Y }),
    }
}

fn default_time_column(table: &DataTable, temporal_name_hints: &[String]) -> Option<String> {
    table
        .columns()
        .find(|column| {
            infer_column_profile(column, temporal_name_hints).column_type == ColumnType::Temporal
        })
        .map(|column| column.name.clone())
}
