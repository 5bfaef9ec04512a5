//! pathcast CLI - Monte Carlo price-path projection
//!
//! # Commands
//!
//! - `pathcast project --input <csv>` - Project future price paths
//! - `pathcast stats --input <csv>` - Print return statistics of the history

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use service_cli::commands;
use service_cli::config::{build_config, CliArgs};
use service_cli::report::OutputFormat;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Monte Carlo price-path projection
#[derive(Parser)]
#[command(name = "pathcast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project future price paths from a price history
    Project {
        /// Path to price history CSV (Date, Close columns)
        #[arg(short, long)]
        input: PathBuf,

        /// Number of trading days to project
        #[arg(long)]
        horizon: Option<usize>,

        /// Number of simulated paths
        #[arg(short = 'n', long)]
        simulations: Option<usize>,

        /// Base seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print return statistics and moving average of a price history
    Stats {
        /// Path to price history CSV (Date, Close columns)
        #[arg(short, long)]
        input: PathBuf,

        /// Moving-average window in observations
        #[arg(short, long)]
        window: Option<usize>,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut args = CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
        ..Default::default()
    };
    match &cli.command {
        Commands::Project {
            horizon,
            simulations,
            seed,
            ..
        } => {
            args.horizon_days = *horizon;
            args.simulations = *simulations;
            args.seed = *seed;
        }
        Commands::Stats { window, .. } => {
            args.window = *window;
        }
    }

    let config = build_config(&args).context("Failed to resolve configuration")?;

    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "Configuration loaded");

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Project {
            input,
            format,
            output,
            ..
        } => {
            let format: OutputFormat = format.parse()?;
            commands::project::run(&input, format, output.as_deref(), &config)
                .with_context(|| format!("Projection from {} failed", input.display()))?;
        }
        Commands::Stats { input, .. } => {
            commands::stats::run(&input, &config)
                .with_context(|| format!("Statistics for {} failed", input.display()))?;
        }
    }

    Ok(())
}
