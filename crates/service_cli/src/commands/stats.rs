//! Stats command implementation
//!
//! Prints return statistics and the latest moving average of the history.

use std::io::{self, Write};
use std::path::Path;

use pathcast_core::types::PriceSeries;
use pathcast_engine::stats::{estimate, moving_average};
use tracing::info;

use crate::config::{CliConfig, ConfigError};
use crate::loader::load_series;
use crate::report::write_statistics;
use crate::Result;

/// Writes the statistics report for `series` to `out`.
pub fn write_report<W: Write>(series: &PriceSeries, window: usize, out: &mut W) -> Result<()> {
    let stats = estimate(series)?;
    let averages = moving_average(series, window).map_err(ConfigError::from)?;

    // Range of the history is known non-empty once estimate succeeded.
    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        writeln!(
            out,
            "History: {} prices from {} to {}",
            series.len(),
            first.date,
            last.date
        )?;
        writeln!(out, "Last close: {:.4}", last.price)?;
    }
    write_statistics(&stats, out)?;

    match averages.last().copied().flatten() {
        Some(ma) => writeln!(out, "{}-day moving average: {:.4}", window, ma)?,
        None => writeln!(
            out,
            "{}-day moving average: n/a (only {} prices)",
            window,
            series.len()
        )?,
    }
    Ok(())
}

/// Run the stats command
pub fn run(input: &Path, config: &CliConfig) -> Result<()> {
    info!("Computing statistics...");
    info!("  Input: {}", input.display());
    info!("  Window: {}", config.window);

    let series = load_series(input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&series, config.window, &mut out)?;
    out.flush()?;
    Ok(())
}
