use serde::Deserialize;

use crate::error::{ChartError, ChartResult};

use super::ConfigDocument;

pub const CONFIG_DOCUMENT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaVersionProbe {
    schema_version: Option<u32>,
}

impl ConfigDocument {
    /// Compact JSON, byte-identical for identical documents.
    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config document v1: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config document v1: {e}"))
        })
    }

    pub fn to_json_value(&self) -> ChartResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to convert config document to json: {e}"))
        })
    }

    /// Parses a previously exported document, rejecting unknown schema versions.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let probe: SchemaVersionProbe = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse config document json: {e}"))
        })?;
        match probe.schema_version {
            Some(CONFIG_DOCUMENT_JSON_SCHEMA_V1) => {}
            Some(other) => {
                return Err(ChartError::InvalidData(format!(
                    "unsupported config document schema version: {other}"
                )));
            }
            None => {
                return Err(ChartError::InvalidData(
                    "config document json is missing `schemaVersion`".to_owned(),
                ));
            }
        }
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse config document json: {e}"))
        })
    }
}
