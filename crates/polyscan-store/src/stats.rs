//! Dataset statistics scan.
//!
//! Counts lines over raw bytes without decoding, so the count covers every
//! line a dataset holds, including ones that would fail to decode.

use crate::error::StoreResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// On-disk statistics for one dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStats {
    /// Number of lines, decodable or not.
    pub lines: u64,
    pub size_bytes: u64,
}

impl DatasetStats {
    /// File size in mebibytes.
    pub fn size_mib(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }
}

/// Scan a dataset file for its line count and size.
///
/// A full sequential read counting line terminators; a final line without
/// a terminator still counts. Returns `None` when the file does not exist,
/// which reports as "no data yet" rather than an error.
pub fn scan_stats(path: &Path) -> StoreResult<Option<DatasetStats>> {
    if !path.exists() {
        return Ok(None);
    }
    let mut file = File::open(path)?;
    let mut lines = 0u64;
    let mut size_bytes = 0u64;
    let mut ends_with_newline = true;
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        size_bytes += n as u64;
        lines += buf[..n].iter().filter(|b| **b == b'\n').count() as u64;
        ends_with_newline = buf[n - 1] == b'\n';
    }
    if size_bytes > 0 && !ends_with_newline {
        lines += 1;
    }
    debug!(path = %path.display(), lines, size_bytes, "Scanned dataset stats");
    Ok(Some(DatasetStats { lines, size_bytes }))
}
