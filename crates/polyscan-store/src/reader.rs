//! JSON Lines stream reader.
//!
//! Reads one JSON object per non-blank line, lazily, in file order. An
//! optional cap stops the read early, so a very large file costs no more
//! than its capped prefix. The file handle is owned by the reader and
//! released on drop on every exit path, including decode failures.

use crate::error::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::Path;
use tracing::debug;

/// Lazy reader over one dataset file.
///
/// Yields `Ok(record)` per decoded line. A line that is not valid JSON
/// yields `StoreError::Decode`; a valid object missing a required field
/// yields `StoreError::Field`. Either ends the useful stream: records
/// already yielded stand, the rest of the file is not trusted.
pub struct RecordReader<T> {
    lines: Lines<BufReader<File>>,
    limit: Option<usize>,
    yielded: usize,
    line_no: usize,
    _record: PhantomData<T>,
}

impl<T: DeserializeOwned> RecordReader<T> {
    /// Open a dataset file for streaming.
    ///
    /// `limit` caps the number of records yielded; lines past the cap are
    /// never read or decoded.
    pub fn open(path: &Path, limit: Option<usize>) -> StoreResult<Self> {
        if !path.exists() {
            return Err(StoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path)?;
        debug!(path = %path.display(), ?limit, "Opened dataset for streaming");
        Ok(Self {
            lines: BufReader::new(file).lines(),
            limit,
            yielded: 0,
            line_no: 0,
            _record: PhantomData,
        })
    }

    fn decode(&self, line: &str) -> StoreResult<T> {
        serde_json::from_str(line).map_err(|e| match e.classify() {
            serde_json::error::Category::Data => StoreError::Field {
                line: self.line_no,
                source: e,
            },
            _ => StoreError::Decode {
                line: self.line_no,
                source: e,
            },
        })
    }
}

impl<T: DeserializeOwned> Iterator for RecordReader<T> {
    type Item = StoreResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(limit) = self.limit {
            if self.yielded >= limit {
                return None;
            }
        }
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(StoreError::Io(e))),
            };
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            self.yielded += 1;
            return Some(self.decode(&line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyscan_core::Trade;
    use std::io::Write;
    use tempfile::TempDir;

    fn trade_line(side: &str, price: &str, size: &str) -> String {
        format!(
            r#"{{"timestamp":"1700000000000","asset_id":"abc","side":"{side}","price":"{price}","size":"{size}","fee_rate_bps":"50"}}"#
        )
    }

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_reads_records_in_file_order() {
        let dir = TempDir::new().unwrap();
        let content = format!(
            "{}\n{}\n",
            trade_line("BUY", "0.55", "10"),
            trade_line("SELL", "0.60", "5")
        );
        let path = write_file(&dir, "trades.json", &content);

        let trades: Vec<Trade> = RecordReader::open(&path, None)
            .unwrap()
            .collect::<StoreResult<_>>()
            .unwrap();
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].side, "BUY");
        assert_eq!(trades[1].side, "SELL");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let content = format!("\n{}\n\n  \n{}\n", trade_line("BUY", "0.5", "1"), trade_line("SELL", "0.5", "1"));
        let path = write_file(&dir, "trades.json", &content);

        let trades: Vec<Trade> = RecordReader::open(&path, None)
            .unwrap()
            .collect::<StoreResult<_>>()
            .unwrap();
        assert_eq!(trades.len(), 2);
    }

    #[test]
    fn test_limit_stops_before_later_lines_are_decoded() {
        let dir = TempDir::new().unwrap();
        // Garbage after the cap must never be touched.
        let content = format!(
            "{}\n{}\nthis is not json\n",
            trade_line("BUY", "0.5", "1"),
            trade_line("SELL", "0.5", "1")
        );
        let path = write_file(&dir, "trades.json", &content);

        let trades: Vec<Trade> = RecordReader::open(&path, Some(2))
            .unwrap()
            .collect::<StoreResult<_>>()
            .unwrap();
        assert_eq!(trades.len(), 2);
    }

    #[test]
    fn test_limit_larger_than_file_yields_all() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "trades.json", &format!("{}\n", trade_line("BUY", "0.5", "1")));

        let trades: Vec<Trade> = RecordReader::open(&path, Some(10))
            .unwrap()
            .collect::<StoreResult<_>>()
            .unwrap();
        assert_eq!(trades.len(), 1);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = RecordReader::<Trade>::open(&dir.path().join("trades.json"), None);
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_malformed_line_yields_decode_error_after_valid_prefix() {
        let dir = TempDir::new().unwrap();
        let content = format!("{}\n{{broken\n", trade_line("BUY", "0.5", "1"));
        let path = write_file(&dir, "trades.json", &content);

        let mut reader = RecordReader::<Trade>::open(&path, None).unwrap();
        assert!(reader.next().unwrap().is_ok());
        match reader.next().unwrap() {
            Err(StoreError::Decode { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_yields_field_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "trades.json",
            "{\"timestamp\":\"1700000000000\",\"asset_id\":\"abc\"}\n",
        );

        let mut reader = RecordReader::<Trade>::open(&path, None).unwrap();
        match reader.next().unwrap() {
            Err(StoreError::Field { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected field error, got {other:?}"),
        }
    }
}
