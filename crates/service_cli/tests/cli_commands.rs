//! Integration tests for the CLI commands, driven through files on disk.

use std::io::Write;
use std::path::Path;

use approx::assert_relative_eq;
use service_cli::commands;
use service_cli::config::{build_config_with, CliArgs, CliConfig};
use service_cli::loader::load_series;
use service_cli::report::OutputFormat;
use service_cli::CliError;
use tempfile::{tempdir, NamedTempFile};

/// Ten weekdays of closes ending Friday 2024-03-15.
fn write_history() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Open,High,Low,Close,Volume").unwrap();
    let rows = [
        ("2024-03-04", 180.1),
        ("2024-03-05", 178.4),
        ("2024-03-06", 179.9),
        ("2024-03-07", 181.2),
        ("2024-03-08", 180.6),
        ("2024-03-11", 182.3),
        ("2024-03-12", 183.0),
        ("2024-03-13", 181.7),
        ("2024-03-14", 184.2),
        ("2024-03-15", 185.0),
    ];
    for (date, close) in rows {
        writeln!(file, "{date},0,0,0,{close},1000").unwrap();
    }
    file
}

fn seeded_config(seed: u64) -> CliConfig {
    CliConfig {
        seed: Some(seed),
        ..Default::default()
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_project_csv_output() {
    let history = write_history();
    let dir = tempdir().unwrap();
    let out = dir.path().join("projection.csv");

    commands::project::run(history.path(), OutputFormat::Csv, Some(&out), &seeded_config(42)).unwrap();

    let text = read(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 52);
    assert_eq!(lines[0], "Date,sim_0,sim_1,sim_2,sim_3,sim_4");
    assert!(lines[1].starts_with("2024-03-15,185,"));
    assert!(lines[2].starts_with("2024-03-18,"));
}

#[test]
fn test_project_json_output() {
    let history = write_history();
    let dir = tempdir().unwrap();
    let out = dir.path().join("projection.json");

    commands::project::run(history.path(), OutputFormat::Json, Some(&out), &seeded_config(7)).unwrap();

    let value: serde_json::Value = serde_json::from_str(&read(&out)).unwrap();
    assert_eq!(value["seed"], 7);
    assert_eq!(value["table"]["dates"].as_array().unwrap().len(), 51);
    let columns = value["table"]["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 5);
    assert_relative_eq!(columns[0][0].as_f64().unwrap(), 185.0);
}

#[test]
fn test_project_is_reproducible_with_seed() {
    let history = write_history();
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");

    commands::project::run(history.path(), OutputFormat::Csv, Some(&a), &seeded_config(5)).unwrap();
    commands::project::run(history.path(), OutputFormat::Csv, Some(&b), &seeded_config(5)).unwrap();

    assert_eq!(read(&a), read(&b));
}

#[test]
fn test_project_missing_input() {
    let err = commands::project::run(
        Path::new("/nonexistent/history.csv"),
        OutputFormat::Table,
        None,
        &CliConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CliError::FileNotFound(_)));
}

#[test]
fn test_project_rejects_weekend_history() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Close\n2024-03-15,10\n2024-03-16,11").unwrap();

    let err = commands::project::run(file.path(), OutputFormat::Table, None, &seeded_config(1))
        .unwrap_err();
    assert!(matches!(err, CliError::Projection(_)));
}

#[test]
fn test_failed_projection_leaves_existing_output_untouched() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Date,Close\n2024-03-15,10\n2024-03-16,11").unwrap();
    let dir = tempdir().unwrap();
    let out = dir.path().join("previous.csv");
    std::fs::write(&out, "previous run\n").unwrap();

    let result = commands::project::run(file.path(), OutputFormat::Csv, Some(&out), &seeded_config(1));

    assert!(result.is_err());
    assert_eq!(read(&out), "previous run\n");
}

#[test]
fn test_write_output_replaces_file_contents() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("report.txt");
    std::fs::write(&out, "a much longer previous report\n").unwrap();

    commands::project::write_output(Some(&out), b"short\n").unwrap();
    assert_eq!(read(&out), "short\n");
}

#[test]
fn test_write_output_to_missing_directory_fails() {
    let err = commands::project::write_output(Some(Path::new("/nonexistent/dir/out.csv")), b"x")
        .unwrap_err();
    assert!(matches!(err, CliError::Io(_)));
}

#[test]
fn test_config_file_drives_projection() {
    let history = write_history();
    let mut toml = NamedTempFile::new().unwrap();
    writeln!(toml, "horizon_days = 5\nsimulations = 3\nseed = 99").unwrap();

    let args = CliArgs {
        config_file: Some(toml.path().to_path_buf()),
        ..Default::default()
    };
    let config = build_config_with(&args, |_| None).unwrap();

    let dir = tempdir().unwrap();
    let out = dir.path().join("small.csv");
    commands::project::run(history.path(), OutputFormat::Csv, Some(&out), &config).unwrap();

    let text = read(&out);
    assert_eq!(text.lines().count(), 7);
    assert_eq!(text.lines().next().unwrap(), "Date,sim_0,sim_1,sim_2");
}

#[test]
fn test_stats_report() {
    let history = write_history();
    let series = load_series(history.path()).unwrap();

    let mut buf = Vec::new();
    commands::stats::write_report(&series, 5, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.contains("History: 10 prices from 2024-03-04 to 2024-03-15"));
    assert!(text.contains("Last close: 185.0000"));
    // (182.3 + 183.0 + 181.7 + 184.2 + 185.0) / 5
    assert!(text.contains("5-day moving average: 183.2400"));
}
