//! Per-record display rendering.

use crate::error::{ReportError, ReportResult};
use polyscan_core::{
    truncate_id, BookLevel, Movement, OrderbookSnapshot, TickSizeChange, TimestampDisplay, Trade,
};

/// Display tuning for the renderers.
#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    /// Book levels shown per snapshot side.
    pub book_depth: usize,
    /// Identifier characters shown before truncation.
    pub id_width: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            book_depth: 5,
            id_width: 20,
        }
    }
}

/// Renders decoded records into display lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    settings: RenderSettings,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Render one order book snapshot.
    ///
    /// An empty side is omitted; the other side still renders.
    pub fn snapshot_lines(&self, snapshot: &OrderbookSnapshot, ordinal: usize) -> Vec<String> {
        let mut lines = vec![
            format!("Snapshot #{ordinal}"),
            format!(
                "Time: {}",
                TimestampDisplay::from_millis_text(&snapshot.timestamp)
            ),
            format!(
                "Asset ID: {}",
                truncate_id(&snapshot.asset_id, self.settings.id_width)
            ),
            format!("Market: {}", snapshot.market),
        ];

        if let Some(reference) = snapshot.btc_reference() {
            match reference.hourly_open {
                Some(open) => {
                    let current = reference.current;
                    let change = current - open;
                    let change_pct = change / open * 100.0;
                    let movement = Movement::classify(current, open);
                    lines.push(format!(
                        "BTC 1H Candle: Open=${open:.2} Current=${current:.2} ({change:+.2} / {change_pct:+.2}%) {movement}"
                    ));
                }
                None => lines.push(format!("BTC Price: ${:.2}", reference.current)),
            }
        }

        self.push_book_side(&mut lines, "Bids", &snapshot.bids);
        self.push_book_side(&mut lines, "Asks", &snapshot.asks);
        lines
    }

    fn push_book_side(&self, lines: &mut Vec<String>, side: &str, levels: &[BookLevel]) {
        if levels.is_empty() {
            return;
        }
        lines.push(format!("Top {} {side}:", self.settings.book_depth));
        for (i, level) in levels.iter().take(self.settings.book_depth).enumerate() {
            lines.push(format!(
                "  {}. Price: {:>6}  Size: {}",
                i + 1,
                level.price,
                level.size
            ));
        }
    }

    /// Render one trade.
    pub fn trade_lines(&self, trade: &Trade, ordinal: usize) -> ReportResult<Vec<String>> {
        let notional = trade
            .notional()
            .map_err(|source| ReportError::BadRecord { ordinal, source })?;
        let fee_pct = trade
            .fee_rate_pct()
            .map_err(|source| ReportError::BadRecord { ordinal, source })?;
        Ok(vec![
            format!("Trade #{ordinal}"),
            format!(
                "Time: {}",
                TimestampDisplay::from_millis_text(&trade.timestamp)
            ),
            format!(
                "Asset ID: {}",
                truncate_id(&trade.asset_id, self.settings.id_width)
            ),
            format!(
                "Side: {:>4}  Price: {:>6}  Size: {}",
                trade.side, trade.price, trade.size
            ),
            format!("Fee Rate: {} bps ({}%)", trade.fee_rate_bps, fee_pct),
            format!("Notional Value: ${notional:.2}"),
        ])
    }

    /// Render one tick size change; the transition is echoed verbatim.
    pub fn tick_change_lines(&self, change: &TickSizeChange, ordinal: usize) -> Vec<String> {
        vec![
            format!("Change #{ordinal}"),
            format!(
                "Time: {}",
                TimestampDisplay::from_millis_text(&change.timestamp)
            ),
            format!(
                "Asset ID: {}",
                truncate_id(&change.asset_id, self.settings.id_width)
            ),
            format!("Market: {}", change.market),
            format!(
                "Old Tick Size: {} -> New Tick Size: {}",
                change.old_tick_size, change.new_tick_size
            ),
        ]
    }
}
