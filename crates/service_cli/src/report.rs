//! Output renderers for projections and statistics.

use std::io::Write;
use std::str::FromStr;

use pathcast_engine::stats::ReturnStatistics;
use pathcast_engine::table::{ProjectionTable, TerminalSummary};
use pathcast_engine::Projection;
use serde::Serialize;

use crate::{CliError, Result};

/// Output format for `pathcast project`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Comma-separated values, one row per date
    Csv,
    /// JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// Writes `projection` to `out` in the requested format.
pub fn render<W: Write>(projection: &Projection, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(projection, out),
        OutputFormat::Csv => render_csv(&projection.table, out),
        OutputFormat::Json => render_json(projection, out),
    }
}

fn column_header(index: usize) -> String {
    format!("sim_{}", index)
}

/// Writes the statistics block shared by `project` and `stats`.
pub fn write_statistics<W: Write>(stats: &ReturnStatistics, out: &mut W) -> Result<()> {
    writeln!(out, "Return statistics")?;
    writeln!(out, "  mean return : {:>14.8}", stats.mean_return)?;
    writeln!(out, "  variance    : {:>14.8}", stats.variance)?;
    writeln!(out, "  volatility  : {:>14.8}", stats.volatility)?;
    writeln!(out, "  drift       : {:>14.8}", stats.drift)?;
    Ok(())
}

fn write_terminal<W: Write>(summary: &TerminalSummary, out: &mut W) -> Result<()> {
    writeln!(out, "Terminal prices on {}", summary.date)?;
    writeln!(out, "  mean : {:>12.4}", summary.mean)?;
    writeln!(out, "  min  : {:>12.4}", summary.min)?;
    writeln!(out, "  max  : {:>12.4}", summary.max)?;
    Ok(())
}

/// Text report: statistics, the projection table and the terminal summary.
pub fn render_table<W: Write>(projection: &Projection, out: &mut W) -> Result<()> {
    let table = &projection.table;

    writeln!(out, "Seed: {}", projection.seed)?;
    write_statistics(&projection.statistics, out)?;
    writeln!(out)?;

    write!(out, "{:<10}", "Date")?;
    for i in 0..table.n_columns() {
        write!(out, " {:>12}", column_header(i))?;
    }
    writeln!(out)?;

    for row in table.rows() {
        write!(out, "{:<10}", row.date)?;
        for value in &row.values {
            write!(out, " {:>12.4}", value)?;
        }
        writeln!(out)?;
    }

    if let Some(summary) = table.terminal_summary() {
        writeln!(out)?;
        write_terminal(&summary, out)?;
    }
    Ok(())
}

/// CSV with a `Date` column followed by one column per simulation.
pub fn render_csv<W: Write>(table: &ProjectionTable, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    let mut header = vec!["Date".to_string()];
    header.extend((0..table.n_columns()).map(column_header));
    writer.write_record(&header)?;

    for row in table.rows() {
        let mut record = vec![row.date.to_string()];
        record.extend(row.values.iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    seed: u64,
    statistics: &'a ReturnStatistics,
    terminal: Option<TerminalSummary>,
    table: &'a ProjectionTable,
}

/// Pretty-printed JSON document.
pub fn render_json<W: Write>(projection: &Projection, out: &mut W) -> Result<()> {
    let report = JsonReport {
        seed: projection.seed,
        statistics: &projection.statistics,
        terminal: projection.table.terminal_summary(),
        table: &projection.table,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathcast_core::types::{Date, PricePoint, PriceSeries};
    use pathcast_engine::mc::{NoProgress, SimulationConfig};
    use pathcast_engine::project;

    fn projection() -> Projection {
        let series = PriceSeries::new(vec![
            PricePoint::new(Date::from_ymd(2024, 1, 2).unwrap(), 100.0),
            PricePoint::new(Date::from_ymd(2024, 1, 3).unwrap(), 102.0),
            PricePoint::new(Date::from_ymd(2024, 1, 4).unwrap(), 101.0),
            PricePoint::new(Date::from_ymd(2024, 1, 5).unwrap(), 103.0),
        ])
        .unwrap();
        let config = SimulationConfig::builder()
            .horizon_days(3)
            .simulation_count(2)
            .seed(11)
            .build()
            .unwrap();
        project(&series, &config, &NoProgress).unwrap()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_csv_layout() {
        let mut buf = Vec::new();
        render_csv(&projection().table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Date,sim_0,sim_1");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("2024-01-05,103,103"));
        assert!(lines[2].starts_with("2024-01-08,"));
    }

    #[test]
    fn test_table_lists_every_date() {
        let mut buf = Vec::new();
        render_table(&projection(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Seed: 11"));
        for date in ["2024-01-05", "2024-01-08", "2024-01-09", "2024-01-10"] {
            assert!(text.contains(date), "missing {date}");
        }
        assert!(text.contains("Terminal prices on 2024-01-10"));
    }

    #[test]
    fn test_json_document() {
        let mut buf = Vec::new();
        render_json(&projection(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["seed"], 11);
        assert_eq!(value["table"]["dates"][0], "2024-01-05");
        assert_eq!(value["table"]["columns"].as_array().unwrap().len(), 2);
        assert!(value["statistics"]["drift"].is_number());
        assert!(value["terminal"]["mean"].is_number());
    }
}
