//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the document list directly; every field is always present.

use crate::error::DocError;
use crate::model::SourceDocument;
use crate::render::Renderer;

pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, docs: &[SourceDocument]) -> Result<String, DocError> {
        let out = if self.pretty {
            serde_json::to_string_pretty(docs)?
        } else {
            serde_json::to_string(docs)?
        };
        Ok(out)
    }
}
