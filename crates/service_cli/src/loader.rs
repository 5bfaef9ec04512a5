//! Price history loading from CSV.
//!
//! The header row must contain a `Date` column (`YYYY-MM-DD`, optionally
//! followed by a time component) and a `Close` column. Header names are
//! matched case-insensitively; other columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use pathcast_core::types::{Date, PricePoint, PriceSeries};
use tracing::debug;

use crate::{CliError, Result};

const DATE_COLUMN: &str = "date";
const CLOSE_COLUMN: &str = "close";

fn find_column(headers: &csv::StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or(CliError::MissingColumn(name))
}

/// Reads a price series from CSV data.
pub fn read_series<R: Read>(reader: R) -> Result<PriceSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let date_idx = find_column(&headers, DATE_COLUMN)?;
    let close_idx = find_column(&headers, CLOSE_COLUMN)?;

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        let raw_date = record.get(date_idx).unwrap_or_default();
        // Exports often carry a time component: "2024-01-02 00:00:00-05:00".
        let day = raw_date
            .split(|c: char| c == ' ' || c == 'T')
            .next()
            .unwrap_or_default();
        let date = Date::parse(day).map_err(|e| CliError::InvalidRecord {
            line,
            message: e.to_string(),
        })?;

        let raw_close = record.get(close_idx).unwrap_or_default();
        let price: f64 = raw_close.parse().map_err(|_| CliError::InvalidRecord {
            line,
            message: format!("cannot parse close price '{}'", raw_close),
        })?;

        points.push(PricePoint::new(date, price));
    }

    debug!(rows = points.len(), "Loaded price history");
    Ok(PriceSeries::new(points)?)
}

/// Loads a price series from a CSV file.
pub fn load_series(path: &Path) -> Result<PriceSeries> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    read_series(File::open(path)?)
}
