pub mod column_inference;
pub mod data_table;
pub mod primitives;
pub mod types;

pub use column_inference::{ColumnProfile, infer_column_profile, is_missing};
pub use data_table::{Column, DataTable};
pub use types::{ColumnType, MarkKind, Role, TimeGranularity, Value};
