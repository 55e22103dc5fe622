//! CSV-based rate snapshot loader
//!
//! Expects a header row `benchmark,savings,inflation` followed by one row of
//! annual percentages. Extra rows are ignored; the first one wins.

use super::RateSnapshot;
use crate::error::{Result, SimError};
use std::fs::File;
use std::path::Path;

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    benchmark: f64,
    savings: f64,
    inflation: f64,
}

/// Load a snapshot from a CSV file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<RateSnapshot> {
    let file = File::open(path)?;
    load_snapshot_from_reader(file)
}

/// Load a snapshot from any reader (e.g., string buffer, network stream)
pub fn load_snapshot_from_reader<R: std::io::Read>(reader: R) -> Result<RateSnapshot> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let row: CsvRow = match csv_reader.deserialize().next() {
        Some(result) => result?,
        None => return Err(SimError::MissingRateData("rate file has no data row".into())),
    };

    let snapshot = RateSnapshot::new(row.benchmark, row.savings, row.inflation);
    snapshot.validate()?;
    Ok(snapshot)
}
