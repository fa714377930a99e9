//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data directory '{0}' does not exist (run the collector first to generate data)")]
    MissingDataDir(String),

    #[error("Store error: {0}")]
    Store(#[from] polyscan_store::StoreError),

    #[error("Report error: {0}")]
    Report(#[from] polyscan_report::ReportError),

    #[error("Record error: {0}")]
    Record(#[from] polyscan_core::CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
