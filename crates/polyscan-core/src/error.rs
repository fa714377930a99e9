//! Error types for polyscan-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid decimal in {field}: {text:?}")]
    InvalidDecimal { field: &'static str, text: String },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
