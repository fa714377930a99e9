//! Polymarket collector dataset inspector - Entry Point

use anyhow::Result;
use clap::Parser;
use polyscan_cli::{App, AppConfig, Selection};
use std::path::PathBuf;
use tracing::debug;

/// Read and analyze Polymarket order book collector data
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Show stored data statistics
    #[arg(long)]
    stats: bool,

    /// Show order book snapshots
    #[arg(long)]
    snapshots: bool,

    /// Show trades
    #[arg(long)]
    trades: bool,

    /// Show tick size changes
    #[arg(long)]
    tick_changes: bool,

    /// Show price changes (storage disabled)
    #[arg(long)]
    price_changes: bool,

    /// Show everything
    #[arg(long)]
    all: bool,

    /// Limit number of records to display per dataset
    #[arg(short, long)]
    limit: Option<usize>,

    /// Data directory (overrides the configured default)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Configuration file path (can also be set via POLYSCAN_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

impl Args {
    fn selection(&self) -> Selection {
        let mut selection = Selection {
            stats: self.stats || self.all,
            snapshots: self.snapshots || self.all,
            trades: self.trades || self.all,
            tick_changes: self.tick_changes || self.all,
            price_changes: self.price_changes,
        };
        // With no dataset selected, fall back to statistics.
        if !(self.stats || self.snapshots || self.trades || self.tick_changes || self.all) {
            selection.stats = true;
        }
        selection
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    polyscan_cli::init_logging();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(data_dir) = args.data_dir.clone() {
        config.data_dir = data_dir;
    }
    debug!(data_dir = %config.data_dir.display(), ?args.limit, "Configuration loaded");

    let app = App::new(config, args.limit);
    app.run(args.selection())?;

    Ok(())
}
