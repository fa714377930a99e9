//! Command-line inspector for Polymarket collector datasets.
//!
//! Ties the pieces together:
//! - clap argument surface and dataset selection
//! - TOML configuration with defaults
//! - per-dataset report drivers over the store and report crates

pub mod app;
pub mod config;
pub mod error;
pub mod logging;

pub use app::{App, Selection};
pub use config::AppConfig;
pub use error::{CliError, CliResult};
pub use logging::init_logging;
