//! Source file discovery.
//!
//! Turns the command-line path into the ordered list of Jsonnet files to
//! document. Directories are walked recursively with entries sorted by file
//! name, so the same tree always yields the same order.

use crate::error::DocError;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// File name suffixes recognized as Jsonnet sources (primary and library).
pub const SOURCE_SUFFIXES: &[&str] = &[".jsonnet", ".libsonnet"];

/// Whether `path` names a Jsonnet source by its file name.
pub fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

/// Collect every Jsonnet source at or below `root`.
///
/// A file root is returned as-is when it has a recognized suffix and
/// dropped otherwise. Files with other suffixes are skipped silently.
/// Symlinks to files are collected under their link path.
pub fn collect(root: &Path) -> Result<Vec<PathBuf>, DocError> {
    if !root.exists() {
        return Err(DocError::NotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            DocError::read(path, io::Error::from(err))
        })?;
        // Symlinked files count; symlinked directories are not descended.
        if !entry.path().is_file() {
            continue;
        }
        if is_source_file(entry.path()) {
            debug!(path = %entry.path().display(), "collected source file");
            files.push(entry.into_path());
        } else {
            trace!(path = %entry.path().display(), "skipping non-jsonnet file");
        }
    }
    Ok(files)
}
