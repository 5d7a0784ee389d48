mod chart;
pub mod chart_source;
mod chart_spec;
mod config_document;
mod data_serializer;
mod encoding_resolver;
mod grapher_config;
mod json_contract;
mod validation;

pub use chart::Chart;
pub use chart_source::spec_to_source;
pub use chart_spec::{
    ChartSpec, InteractionOptions, Labels, MarkOptions, Selection, StackMode, TimeBound,
};
pub use config_document::{ConfigDocument, FieldType, SelectionConfig};
pub use data_serializer::{DataRow, encode_cell, serialize_rows};
pub use encoding_resolver::{
    ColumnBinding, ColumnBindings, required_roles, resolve_encodings, role_accepts,
};
pub use grapher_config::{
    DEFAULT_EMBED_HEIGHT_PX, DEFAULT_SITE_URL, EmbedConfig, GrapherConfig, NullPolicy,
};
pub use json_contract::CONFIG_DOCUMENT_JSON_SCHEMA_V1;
