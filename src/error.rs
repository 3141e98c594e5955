//! Error taxonomy shared by collection, parsing and rendering.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode documentation: {0}")]
    EncodeFailure(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DocError::ReadFailure {
            path: path.into(),
            source,
        }
    }
}
