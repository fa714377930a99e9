//! Per-dataset report drivers.
//!
//! Each driver opens its dataset, streams it to completion or to the record
//! cap, prints display lines as it goes, and returns its summary value.
//! Faults stay local: one dataset's error never aborts its siblings in the
//! same invocation, and output already printed stands.

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use polyscan_core::{OrderbookSnapshot, TickSizeChange, Trade};
use polyscan_report::{RenderSettings, Renderer, TradeTally};
use polyscan_store::{scan_stats, Dataset, RecordReader};
use std::path::PathBuf;
use tracing::error;

const RULE: &str = "======================================================================";

/// Datasets selected for one invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection {
    pub stats: bool,
    pub snapshots: bool,
    pub trades: bool,
    pub tick_changes: bool,
    pub price_changes: bool,
}

/// Main application.
pub struct App {
    config: AppConfig,
    renderer: Renderer,
    limit: Option<usize>,
}

impl App {
    pub fn new(config: AppConfig, limit: Option<usize>) -> Self {
        let renderer = Renderer::new(RenderSettings {
            book_depth: config.display.book_depth,
            id_width: config.display.id_width,
        });
        Self {
            config,
            renderer,
            limit,
        }
    }

    /// Run the selected reports.
    ///
    /// Fails up front when the data directory is missing; after that, each
    /// dataset report runs and fails independently.
    pub fn run(&self, selection: Selection) -> CliResult<()> {
        if !self.config.data_dir.exists() {
            return Err(CliError::MissingDataDir(
                self.config.data_dir.display().to_string(),
            ));
        }

        if selection.stats {
            self.show_statistics();
        }
        if selection.snapshots {
            if let Err(e) = self.show_snapshots() {
                report_dataset_fault(Dataset::Snapshots, &e);
            }
        }
        if selection.price_changes {
            // Retained from older collector builds; nothing is stored.
            println!("price_changes.json storage is disabled.");
        }
        if selection.trades {
            if let Err(e) = self.show_trades() {
                report_dataset_fault(Dataset::Trades, &e);
            }
        }
        if selection.tick_changes {
            if let Err(e) = self.show_tick_changes() {
                report_dataset_fault(Dataset::TickChanges, &e);
            }
        }
        Ok(())
    }

    fn dataset_path(&self, dataset: Dataset) -> PathBuf {
        dataset.path_in(&self.config.data_dir)
    }

    /// Report line counts and on-disk sizes for every known dataset.
    ///
    /// A missing file reports as "no data yet"; a scan fault on one file
    /// leaves the others' reports intact.
    pub fn show_statistics(&self) {
        print_banner("DATA STATISTICS");
        for dataset in Dataset::ALL {
            let path = self.dataset_path(dataset);
            match scan_stats(&path) {
                Ok(Some(stats)) => {
                    println!("\n{}:", dataset.label());
                    println!("  File: {}", path.display());
                    println!("  Messages: {}", stats.lines);
                    println!("  Size: {:.2} MB", stats.size_mib());
                }
                Ok(None) => println!("\n{}: No data yet", dataset.label()),
                Err(e) => {
                    error!(dataset = dataset.label(), %e, "Stats scan failed");
                    println!("\n{}: {e}", dataset.label());
                }
            }
        }
    }

    /// Stream and print order book snapshots.
    pub fn show_snapshots(&self) -> CliResult<u64> {
        print_banner("ORDERBOOK SNAPSHOTS");
        let reader = RecordReader::<OrderbookSnapshot>::open(
            &self.dataset_path(Dataset::Snapshots),
            self.limit,
        )?;

        let mut count: u64 = 0;
        for record in reader {
            let snapshot = record?;
            count += 1;
            println!();
            for line in self.renderer.snapshot_lines(&snapshot, count as usize) {
                println!("{line}");
            }
        }
        println!("\nTotal snapshots: {count}");
        Ok(count)
    }

    /// Stream and print trades, folding the running tally as a side effect.
    pub fn show_trades(&self) -> CliResult<TradeTally> {
        print_banner("TRADES");
        let reader =
            RecordReader::<Trade>::open(&self.dataset_path(Dataset::Trades), self.limit)?;

        let mut tally = TradeTally::new();
        for record in reader {
            let trade = record?;
            let ordinal = tally.count() as usize + 1;
            let lines = self.renderer.trade_lines(&trade, ordinal)?;
            tally.record(&trade)?;
            println!();
            for line in lines {
                println!("{line}");
            }
        }

        println!("\n{RULE}");
        for line in tally.summary_lines() {
            println!("{line}");
        }
        Ok(tally)
    }

    /// Stream and print tick size changes.
    pub fn show_tick_changes(&self) -> CliResult<u64> {
        print_banner("TICK SIZE CHANGES");
        let reader = RecordReader::<TickSizeChange>::open(
            &self.dataset_path(Dataset::TickChanges),
            self.limit,
        )?;

        let mut count: u64 = 0;
        for record in reader {
            let change = record?;
            count += 1;
            println!();
            for line in self.renderer.tick_change_lines(&change, count as usize) {
                println!("{line}");
            }
        }
        println!("\nTotal tick size changes: {count}");
        Ok(count)
    }
}

fn print_banner(title: &str) {
    println!("\n{RULE}");
    println!("{title}");
    println!("{RULE}");
}

fn report_dataset_fault(dataset: Dataset, err: &CliError) {
    error!(dataset = dataset.label(), %err, "Dataset report aborted");
    println!("{}: {err}", dataset.label());
}
