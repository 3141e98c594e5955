//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::error::DocError;
use crate::model::SourceDocument;

/// Output format of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Json,
    Markdown,
}

/// Rendering options resolved from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub mode: OutputMode,
    /// Indent JSON output; has no effect on markdown.
    pub pretty: bool,
}

/// Trait for rendering parsed documents into a specific output format.
pub trait Renderer {
    fn render(&self, docs: &[SourceDocument]) -> Result<String, DocError>;
}

/// Create the renderer selected by `config`.
pub fn create_renderer(config: &RenderConfig) -> Box<dyn Renderer> {
    match config.mode {
        OutputMode::Json => Box::new(json::JsonRenderer {
            pretty: config.pretty,
        }),
        OutputMode::Markdown => Box::new(markdown::MarkdownRenderer),
    }
}
