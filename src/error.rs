use thiserror::Error;

use crate::core::{ColumnType, MarkKind, Role};

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("missing encoding: role `{role}` must be bound to a column")]
    MissingEncoding { role: Role },

    #[error("unknown column: `{column}` does not exist in the data table")]
    UnknownColumn { column: String },

    #[error(
        "incompatible encoding: {mark} mark cannot bind role `{role}` to {column_type} column `{column}`"
    )]
    IncompatibleEncoding {
        role: Role,
        column: String,
        column_type: ColumnType,
        mark: MarkKind,
    },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
