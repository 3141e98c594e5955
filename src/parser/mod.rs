//! Parser module — Jsonnet source file to [`SourceDocument`].

pub mod extract;
pub mod tags;

use crate::error::DocError;
use crate::model::SourceDocument;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, trace};

/// Read and parse one Jsonnet file.
pub fn parse_file(path: &Path) -> Result<SourceDocument, DocError> {
    let bytes = fs::read(path).map_err(|err| DocError::read(path, err))?;
    let content = String::from_utf8(bytes).map_err(|err| {
        let reason = format!("source is not valid UTF-8 ({})", err.utf8_error());
        DocError::read(path, io::Error::new(io::ErrorKind::InvalidData, reason))
    })?;
    let doc = parse_source(path, &content);
    debug!(
        path = %path.display(),
        functions = doc.functions.len(),
        "parsed source file"
    );
    Ok(doc)
}

/// Parse already-loaded file content. `path` only provides the document name.
pub fn parse_source(path: &Path, content: &str) -> SourceDocument {
    let functions = extract::extract_blocks(content)
        .into_iter()
        .map(|block| {
            trace!(len = block.len(), "parsing doc block");
            tags::parse_block(block)
        })
        .collect();

    SourceDocument {
        name: document_name(path),
        functions,
    }
}

/// Derive the document name from a source path.
/// "lib/foo.libsonnet" → "foo", "a.b.jsonnet" → "a.b"
pub fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
