mod iframe_renderer;
mod notebook;
mod null_renderer;

pub use iframe_renderer::{IframeRenderer, escape_script_payload};
pub use notebook::{EVCXR_BEGIN_CONTENT, EVCXR_END_CONTENT, evcxr_envelope};
pub use null_renderer::NullRenderer;

use crate::api::ConfigDocument;
use crate::error::ChartResult;

/// Contract implemented by anything that turns an exported document into a
/// displayable artifact.
///
/// Renderers only see the finished, immutable [`ConfigDocument`], so they stay
/// independent of tables, inference and builder state.
pub trait EmbedRenderer {
    fn render(&mut self, document: &ConfigDocument) -> ChartResult<String>;
}
