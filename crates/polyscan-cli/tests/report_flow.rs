//! End-to-end report flow over a temporary data directory.

use polyscan_cli::{App, AppConfig, CliError, Selection};
use polyscan_store::StoreError;
use rust_decimal_macros::dec;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_dataset(dir: &Path, name: &str, lines: &[&str]) {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(dir.join(name), content).unwrap();
}

fn app_for(dir: &TempDir, limit: Option<usize>) -> App {
    let config = AppConfig {
        data_dir: dir.path().to_path_buf(),
        ..AppConfig::default()
    };
    App::new(config, limit)
}

fn trade_line(side: &str, price: &str, size: &str) -> String {
    format!(
        r#"{{"timestamp":"1700000000000","asset_id":"abc123","side":"{side}","price":"{price}","size":"{size}","fee_rate_bps":"50"}}"#
    )
}

#[test]
fn test_trades_report_totals() {
    let dir = TempDir::new().unwrap();
    write_dataset(
        dir.path(),
        "trades.json",
        &[
            &trade_line("BUY", "0.55", "10"),
            &trade_line("SELL", "0.60", "5"),
        ],
    );

    let tally = app_for(&dir, None).show_trades().unwrap();
    assert_eq!(tally.count(), 2);
    assert_eq!(tally.volume(), dec!(8.50));
    assert_eq!(tally.side_count("BUY"), 1);
    assert_eq!(tally.side_count("SELL"), 1);
}

#[test]
fn test_limit_caps_each_dataset() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = (0..5).map(|_| trade_line("BUY", "0.5", "1")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    write_dataset(dir.path(), "trades.json", &refs);

    let tally = app_for(&dir, Some(2)).show_trades().unwrap();
    assert_eq!(tally.count(), 2);
    assert_eq!(tally.volume(), dec!(1.0));
}

#[test]
fn test_missing_dataset_surfaces_not_found() {
    let dir = TempDir::new().unwrap();
    let result = app_for(&dir, None).show_snapshots();
    assert!(matches!(
        result,
        Err(CliError::Store(StoreError::NotFound { .. }))
    ));
}

#[test]
fn test_decode_fault_in_one_dataset_leaves_siblings_alone() {
    let dir = TempDir::new().unwrap();
    write_dataset(
        dir.path(),
        "trades.json",
        &[&trade_line("BUY", "0.55", "10"), "this is not json"],
    );
    write_dataset(
        dir.path(),
        "tick_size_changes.json",
        &[r#"{"timestamp":"1700000000000","asset_id":"abc","market":"m","old_tick_size":"0.01","new_tick_size":"0.001"}"#],
    );

    let app = app_for(&dir, None);
    assert!(matches!(
        app.show_trades(),
        Err(CliError::Store(StoreError::Decode { line: 2, .. }))
    ));
    // The sibling dataset still reports in the same invocation.
    assert_eq!(app.show_tick_changes().unwrap(), 1);
    // And run() with everything selected does not abort.
    app.run(Selection {
        stats: true,
        snapshots: true,
        trades: true,
        tick_changes: true,
        price_changes: false,
    })
    .unwrap();
}

#[test]
fn test_snapshot_count_over_mixed_lines() {
    let dir = TempDir::new().unwrap();
    write_dataset(
        dir.path(),
        "orderbook_snapshots.json",
        &[
            r#"{"timestamp":"1700000000000","asset_id":"abc","market":"m","bids":[{"price":"0.55","size":"10"}],"asks":[]}"#,
            "",
            r#"{"timestamp":"not-a-time","asset_id":"abc","market":"m","bids":[],"asks":[{"price":"0.56","size":"4"}],"btc_price_current":50100.0,"btc_price_hourly":50000.0}"#,
        ],
    );

    // Blank lines do not count as records.
    assert_eq!(app_for(&dir, None).show_snapshots().unwrap(), 2);
}

#[test]
fn test_missing_data_dir_is_a_top_level_error() {
    let config = AppConfig {
        data_dir: "/definitely/not/a/dir".into(),
        ..AppConfig::default()
    };
    let app = App::new(config, None);
    assert!(matches!(
        app.run(Selection {
            stats: true,
            ..Selection::default()
        }),
        Err(CliError::MissingDataDir(_))
    ));
}
