//! Store error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON on line {line}: {source}")]
    Decode {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Missing or invalid field on line {line}: {source}")]
    Field {
        line: usize,
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
