//! Known collector datasets.

use std::path::{Path, PathBuf};

/// A dataset file maintained by the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Snapshots,
    Trades,
    TickChanges,
}

impl Dataset {
    /// All datasets, in report order.
    pub const ALL: [Dataset; 3] = [Dataset::Snapshots, Dataset::Trades, Dataset::TickChanges];

    /// File name under the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Snapshots => "orderbook_snapshots.json",
            Self::Trades => "trades.json",
            Self::TickChanges => "tick_size_changes.json",
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Snapshots => "Orderbook Snapshots",
            Self::Trades => "Trades",
            Self::TickChanges => "Tick Size Changes",
        }
    }

    /// Resolve the backing file path under `data_dir`.
    pub fn path_in(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}
