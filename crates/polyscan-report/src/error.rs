//! Report error types.

use polyscan_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Record #{ordinal}: {source}")]
    BadRecord {
        ordinal: usize,
        source: CoreError,
    },
}

pub type ReportResult<T> = Result<T, ReportError>;
