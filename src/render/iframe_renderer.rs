use tracing::trace;

use crate::api::{ConfigDocument, EmbedConfig};
use crate::error::{ChartError, ChartResult};
use crate::render::EmbedRenderer;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Renders a document as an `<iframe>` plus a script that writes a viewer page
/// into it. The viewer page loads the hosted grapher assets from
/// `EmbedConfig::site_url` and hands the document to
/// `window.Grapher.renderSingleGrapherOnGrapherPage`.
///
/// Output is deterministic: the element id defaults to a hash of the document
/// JSON unless one is set explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IframeRenderer {
    config: EmbedConfig,
    element_id: Option<String>,
}

impl Default for IframeRenderer {
    fn default() -> Self {
        Self::new(EmbedConfig::default())
    }
}

impl IframeRenderer {
    #[must_use]
    pub fn new(config: EmbedConfig) -> Self {
        Self {
            config,
            element_id: None,
        }
    }

    /// Pins the iframe element id, e.g. when a page hosts several embeds of the
    /// same document.
    #[must_use]
    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    #[must_use]
    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Full HTML page loaded inside the iframe.
    #[must_use]
    pub fn viewer_page(&self, document_json: &str) -> String {
        let site = escape_attribute(self.config.site_url.trim_end_matches('/'));
        let payload = escape_script_payload(document_json);
        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <link rel="stylesheet" href="{site}/assets/commons.css" />
    <link rel="stylesheet" href="{site}/assets/owid.css" />
  </head>
  <body class="StandaloneGrapherOrExplorerPage">
    <main>
      <figure data-grapher-src></figure>
    </main>
    <script src="{site}/assets/commons.js"></script>
    <script src="{site}/assets/owid.js"></script>
    <script>
      const jsonConfig = {payload};
      window.Grapher.renderSingleGrapherOnGrapherPage(jsonConfig);
    </script>
  </body>
</html>
"#
        )
    }

    fn resolve_element_id(&self, document_json: &str) -> ChartResult<String> {
        match &self.element_id {
            Some(id) => {
                let valid = !id.is_empty()
                    && id
                        .chars()
                        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
                if !valid {
                    return Err(ChartError::InvalidOption(format!(
                        "embed element id `{id}` must be non-empty ASCII letters, digits, `-` or `_`"
                    )));
                }
                Ok(id.clone())
            }
            None => Ok(format!("grapher-{:016x}", fnv1a_64(document_json.as_bytes()))),
        }
    }
}

impl EmbedRenderer for IframeRenderer {
    fn render(&mut self, document: &ConfigDocument) -> ChartResult<String> {
        if self.config.height_px == 0 {
            return Err(ChartError::InvalidOption(
                "embed height_px must be > 0".to_owned(),
            ));
        }
        let document_json = document.to_json_string()?;
        let element_id = self.resolve_element_id(&document_json)?;
        let page = self.viewer_page(&document_json);
        let page_literal = serde_json::to_string(&page).map_err(|e| {
            ChartError::InvalidData(format!("failed to encode viewer page: {e}"))
        })?;
        let page_literal = escape_script_payload(&page_literal);
        trace!(
            element_id = %element_id,
            document_bytes = document_json.len(),
            "rendered iframe embed"
        );

        Ok(format!(
            r#"<iframe id="{element_id}" style="width: 100%; height: {height}px; border: 0px none;" src="about:blank"></iframe>
<script>
  (function () {{
    const doc = document.getElementById("{element_id}").contentDocument;
    doc.open();
    doc.write({page_literal});
    doc.close();
  }})();
</script>
"#,
            height = self.config.height_px,
        ))
    }
}

/// Makes JSON/JS text safe to inline inside a `<script>` element.
///
/// `</` can only occur inside string literals of the payload, where `<\/` is an
/// equivalent escape, so the browser never sees a closing tag early.
#[must_use]
pub fn escape_script_payload(payload: &str) -> String {
    payload.replace("</", "<\\/")
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}
