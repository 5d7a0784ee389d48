use indexmap::IndexMap;

use crate::core::Value;
use crate::error::{ChartError, ChartResult};

/// Named column of scalar values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    #[must_use]
    pub fn new<V: Into<Value>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Tidy input table: one row per observation, one column per variable.
///
/// Columns keep insertion order and are looked up case-sensitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    columns: IndexMap<String, Column>,
    row_count: usize,
}

impl DataTable {
    pub fn new(columns: impl IntoIterator<Item = Column>) -> ChartResult<Self> {
        columns
            .into_iter()
            .try_fold(Self::default(), |table, column| table.with_column(column))
    }

    /// Adds a column, rejecting duplicate names and ragged lengths.
    pub fn with_column(mut self, column: Column) -> ChartResult<Self> {
        if self.columns.contains_key(&column.name) {
            return Err(ChartError::InvalidData(format!(
                "duplicate column name `{}`",
                column.name
            )));
        }
        if self.columns.is_empty() {
            self.row_count = column.len();
        } else if column.len() != self.row_count {
            return Err(ChartError::InvalidData(format!(
                "column `{}` has {} values, expected {}",
                column.name,
                column.len(),
                self.row_count
            )));
        }
        self.columns.insert(column.name.clone(), column);
        Ok(self)
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    #[must_use]
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}
