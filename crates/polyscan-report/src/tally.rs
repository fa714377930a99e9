//! Running trade aggregation.

use polyscan_core::{Result, Trade};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Running totals over one pass of a trade stream.
///
/// Side labels are open-ended: any string key gets its own count on first
/// occurrence, and unseen labels read as zero.
#[derive(Debug, Clone, Default)]
pub struct TradeTally {
    count: u64,
    volume: Decimal,
    side_counts: HashMap<String, u64>,
}

impl TradeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trade into the totals.
    pub fn record(&mut self, trade: &Trade) -> Result<()> {
        let notional = trade.notional()?;
        self.count += 1;
        self.volume += notional;
        *self.side_counts.entry(trade.side.clone()).or_insert(0) += 1;
        Ok(())
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Total notional volume, summed in stream order.
    pub fn volume(&self) -> Decimal {
        self.volume
    }

    /// Count for one side label; zero when never seen.
    pub fn side_count(&self, side: &str) -> u64 {
        self.side_counts.get(side).copied().unwrap_or(0)
    }

    /// Sum of all per-side counts.
    pub fn side_total(&self) -> u64 {
        self.side_counts.values().sum()
    }

    /// Terminal summary block.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Total trades: {}", self.count),
            format!("Total volume: ${:.2}", self.volume),
            format!("Buy trades: {}", self.side_count("BUY")),
            format!("Sell trades: {}", self.side_count("SELL")),
        ]
    }
}
