//! Core record types for the Polymarket collector inspector.
//!
//! This crate provides the typed views over the collector's JSON Lines
//! datasets:
//! - `OrderbookSnapshot`, `Trade`, `TickSizeChange`: one record per line
//! - `TimestampDisplay`: millisecond timestamp rendering with raw fallback
//! - `Movement`: price direction against an hourly open

pub mod display;
pub mod error;
pub mod record;
pub mod timefmt;

pub use display::{truncate_id, ID_DISPLAY_WIDTH};
pub use error::{CoreError, Result};
pub use record::{
    BookLevel, BtcReference, Movement, OrderbookSnapshot, TickSize, TickSizeChange, Trade,
};
pub use timefmt::TimestampDisplay;
