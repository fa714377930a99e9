//! Record types decoded from the collector's datasets.
//!
//! One type per dataset file, one value per line. The collector writes
//! prices and sizes as decimal text; those fields stay text here and are
//! parsed only where a computation needs a numeric value.

use crate::error::{CoreError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

/// One resting level of an order book side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookLevel {
    pub price: String,
    pub size: String,
}

/// Order book snapshot record from `orderbook_snapshots.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderbookSnapshot {
    /// Milliseconds since epoch, as text.
    pub timestamp: String,
    pub asset_id: String,
    pub market: String,
    /// Best-first by producer convention; never re-sorted here.
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
    #[serde(default)]
    pub btc_price_current: Option<f64>,
    #[serde(default)]
    pub btc_price_hourly_open: Option<f64>,
    /// Legacy name for the hourly open, written by older collector builds.
    #[serde(default)]
    pub btc_price_hourly: Option<f64>,
}

/// BTC reference prices attached to a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BtcReference {
    pub current: f64,
    /// Hourly candle open, when a positive value is present.
    pub hourly_open: Option<f64>,
}

impl OrderbookSnapshot {
    /// Resolve the BTC reference prices, if any.
    ///
    /// A current price that is absent or non-positive means no reference at
    /// all. The hourly open prefers `btc_price_hourly_open` and falls back
    /// to the legacy `btc_price_hourly`; non-positive opens are dropped.
    pub fn btc_reference(&self) -> Option<BtcReference> {
        let current = self.btc_price_current.filter(|px| *px > 0.0)?;
        let hourly_open = self
            .btc_price_hourly_open
            .or(self.btc_price_hourly)
            .filter(|px| *px > 0.0);
        Some(BtcReference {
            current,
            hourly_open,
        })
    }
}

/// Direction of a current price relative to an hourly open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Up,
    Down,
}

impl Movement {
    /// Classify the move. Equal prices count as up.
    pub fn classify(current: f64, open: f64) -> Self {
        if current >= open {
            Self::Up
        } else {
            Self::Down
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "UP"),
            Self::Down => write!(f, "DOWN"),
        }
    }
}

/// Executed trade record from `trades.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    /// Milliseconds since epoch, as text.
    pub timestamp: String,
    pub asset_id: String,
    /// Free-form side label. `BUY`/`SELL` are conventional; anything else
    /// passes through uncategorized.
    pub side: String,
    pub price: String,
    pub size: String,
    pub fee_rate_bps: String,
}

impl Trade {
    /// Cash value of the trade: price x size.
    pub fn notional(&self) -> Result<Decimal> {
        Ok(parse_decimal(&self.price, "price")? * parse_decimal(&self.size, "size")?)
    }

    /// Fee rate as a percentage (bps / 100).
    pub fn fee_rate_pct(&self) -> Result<Decimal> {
        Ok(parse_decimal(&self.fee_rate_bps, "fee_rate_bps")? / Decimal::from(100))
    }
}

fn parse_decimal(text: &str, field: &'static str) -> Result<Decimal> {
    text.parse().map_err(|_| CoreError::InvalidDecimal {
        field,
        text: text.to_string(),
    })
}

/// Tick size token.
///
/// The collector writes tick sizes as either JSON strings or bare numbers;
/// both are echoed exactly as given, with no numeric interpretation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TickSize {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for TickSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Tick size change record from `tick_size_changes.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct TickSizeChange {
    /// Milliseconds since epoch, as text.
    pub timestamp: String,
    pub asset_id: String,
    pub market: String,
    pub old_tick_size: TickSize,
    pub new_tick_size: TickSize,
}
