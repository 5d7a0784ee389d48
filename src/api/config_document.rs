use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ColumnType, MarkKind, Role, TimeGranularity};

use super::{DataRow, StackMode, TimeBound};

/// Inferred type of one exported column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldType {
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<TimeGranularity>,
}

/// Selection section of the exported document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_time: Option<TimeBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_time: Option<TimeBound>,
}

impl SelectionConfig {
    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Exported, self-contained chart configuration consumed by the hosted viewer.
///
/// Each export produces a fresh document; nothing links it back to the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    pub schema_version: u32,
    pub mark: MarkKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(default)]
    pub stack_mode: StackMode,
    pub encoding: IndexMap<Role, String>,
    pub field_types: IndexMap<String, FieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_type: Option<TimeGranularity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub interaction: IndexMap<String, bool>,
    #[serde(default, skip_serializing_if = "SelectionConfig::is_empty")]
    pub selection: SelectionConfig,
    pub data: Vec<DataRow>,
}

impl ConfigDocument {
    #[must_use]
    pub fn column_for(&self, role: Role) -> Option<&str> {
        self.encoding.get(&role).map(String::as_str)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }
}
