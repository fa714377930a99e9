//! JSON Lines dataset access for the Polymarket collector inspector.
//!
//! Read-only counterpart of the collector's append-only writer:
//! - `Dataset`: the known dataset files and their paths
//! - `RecordReader`: lazy line-by-line record streaming with an optional cap
//! - `scan_stats`: line count and on-disk size without decoding

pub mod dataset;
pub mod error;
pub mod reader;
pub mod stats;

pub use dataset::Dataset;
pub use error::{StoreError, StoreResult};
pub use reader::RecordReader;
pub use stats::{scan_stats, DatasetStats};
