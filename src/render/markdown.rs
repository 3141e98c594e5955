//! Markdown renderer.
//!
//! Layout per document:
//!
//! ```text
//! # <document>
//!
//! ## <@name>
//!
//! <description>
//!
//! @params
//!
//! * **key**: value
//!
//! @methods
//!
//! * **signature**: value
//!
//! @return <text>
//! ```
//!
//! Sections are omitted when empty and each one is followed by exactly one
//! blank line.

use crate::error::DocError;
use crate::model::*;
use crate::render::Renderer;
use std::collections::BTreeMap;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, docs: &[SourceDocument]) -> Result<String, DocError> {
        let mut lines: Vec<String> = Vec::new();

        for doc in docs {
            lines.push(format!("# {}", doc.name));
            lines.push(String::new());

            for func in &doc.functions {
                render_function(&mut lines, func);
            }
        }

        Ok(lines.join("\n"))
    }
}

/// Append one record's blocks to `lines`.
fn render_function(lines: &mut Vec<String>, func: &FunctionRecord) {
    if func.is_empty() {
        return;
    }

    if !func.name.is_empty() {
        lines.push(format!("## {}", func.name));
        lines.push(String::new());
    }

    // Stored descriptions keep their line terminators and trailing blank
    // separators; the block itself ends at its last text line. Keeps the
    // single blank line before `@params` that jsonnetdoc markdown always had.
    let description = func.description.trim_end_matches('\n');
    if !description.is_empty() {
        lines.push(description.to_string());
        lines.push(String::new());
    }

    render_entries(lines, "@params", &func.params);
    render_entries(lines, "@methods", &func.methods);

    if !func.returns.is_empty() {
        lines.push(format!("@return {}", func.returns));
        lines.push(String::new());
    }
}

/// Render a keyed section as a bullet list in ascending key order.
fn render_entries(lines: &mut Vec<String>, title: &str, entries: &BTreeMap<String, String>) {
    if entries.is_empty() {
        return;
    }
    lines.push(title.to_string());
    lines.push(String::new());
    for (key, value) in entries {
        lines.push(format!("* **{}**: {}", key, value));
    }
    lines.push(String::new());
}
