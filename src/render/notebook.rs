//! Notebook display integration.
//!
//! The evcxr Jupyter kernel renders any value with an `evcxr_display` method by
//! reading a MIME envelope from stdout. `Chart` implements that method, plus a
//! plain `to_html` for other hosts.

use tracing::warn;

use crate::api::Chart;
use crate::error::ChartResult;
use crate::render::{EmbedRenderer, IframeRenderer};

pub const EVCXR_BEGIN_CONTENT: &str = "EVCXR_BEGIN_CONTENT";
pub const EVCXR_END_CONTENT: &str = "EVCXR_END_CONTENT";

/// Wraps `content` in the evcxr MIME envelope.
#[must_use]
pub fn evcxr_envelope(mime_type: &str, content: &str) -> String {
    format!("{EVCXR_BEGIN_CONTENT} {mime_type}\n{content}\n{EVCXR_END_CONTENT}")
}

impl Chart<'_> {
    /// Exports the chart and renders it with an [`IframeRenderer`] built from
    /// the chart's embed configuration.
    pub fn to_html(&self) -> ChartResult<String> {
        let document = self.export()?;
        IframeRenderer::new(self.config().embed.clone()).render(&document)
    }

    /// Envelope shown by a notebook: HTML on success, the error text otherwise.
    #[must_use]
    pub fn display_envelope(&self) -> String {
        match self.to_html() {
            Ok(html) => evcxr_envelope("text/html", &html),
            Err(err) => {
                warn!(error = %err, "chart could not be displayed");
                evcxr_envelope("text/plain", &format!("chart error: {err}"))
            }
        }
    }

    /// Display hook picked up by the evcxr Jupyter kernel.
    pub fn evcxr_display(&self) {
        println!("{}", self.display_envelope());
    }
}
