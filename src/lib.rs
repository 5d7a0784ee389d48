//! grapher-rs: fluent chart configs for a hosted grapher viewer.
//!
//! Build a chart over a tidy [`core::DataTable`] with [`api::Chart`]
//! (`mark_line`, `mark_bar`, `encode`, `label`, `interact`, `select`), export
//! it as a self-contained [`api::ConfigDocument`], and embed it in a notebook
//! through [`render::IframeRenderer`]. Rendering itself happens in the hosted
//! viewer; this crate validates, infers column types and serializes.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ConfigDocument, GrapherConfig};
pub use error::{ChartError, ChartResult};
