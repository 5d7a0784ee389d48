use crate::api::ConfigDocument;
use crate::core::MarkKind;
use crate::error::ChartResult;
use crate::render::EmbedRenderer;

/// Headless renderer used by tests and non-notebook hosts.
///
/// It still serializes the document so JSON failures surface before a real
/// embed is produced, and remembers what it last saw.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_mark: Option<MarkKind>,
    pub last_row_count: usize,
    pub last_json_len: usize,
}

impl EmbedRenderer for NullRenderer {
    fn render(&mut self, document: &ConfigDocument) -> ChartResult<String> {
        let json = document.to_json_string()?;
        self.render_count += 1;
        self.last_mark = Some(document.mark);
        self.last_row_count = document.row_count();
        self.last_json_len = json.len();
        Ok(String::new())
    }
}
