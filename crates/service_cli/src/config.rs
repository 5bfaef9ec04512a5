//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use pathcast_engine::mc::{self, SimulationConfig};
use pathcast_engine::stats::DEFAULT_WINDOW;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable for the projection horizon.
pub const ENV_HORIZON_DAYS: &str = "PATHCAST_HORIZON_DAYS";
/// Environment variable for the number of simulations.
pub const ENV_SIMULATIONS: &str = "PATHCAST_SIMULATIONS";
/// Environment variable for the base seed.
pub const ENV_SEED: &str = "PATHCAST_SEED";
/// Environment variable for the moving-average window.
pub const ENV_WINDOW: &str = "PATHCAST_WINDOW";
/// Environment variable for the log level.
pub const ENV_LOG_LEVEL: &str = "PATHCAST_LOG_LEVEL";

/// Errors raised while resolving the CLI configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Log level name not recognised.
    #[error("Unknown log level '{0}' (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),

    /// Environment value that does not parse.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },

    /// Config file unreadable or malformed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Values rejected by the simulation engine.
    #[error(transparent)]
    Simulation(#[from] mc::ConfigError),
}

/// Verbosity of `pathcast` log output, quietest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const ALL: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// `EnvFilter` directive for this level.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_filter_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::InvalidLogLevel(wanted.to_string()))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, ConfigError> {
        value.parse()
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Trading days to project
    pub horizon_days: usize,
    /// Number of independent paths
    pub simulations: usize,
    /// Base seed; entropy when absent
    pub seed: Option<u64>,
    /// Moving-average window for `stats`
    pub window: usize,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            horizon_days: 50,
            simulations: 5,
            seed: None,
            window: DEFAULT_WINDOW,
            log_level: LogLevel::Info,
        }
    }
}

fn parse_var<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { name, value })
}

impl CliConfig {
    /// Overrides fields from `PATHCAST_*` variables; absent ones are kept.
    fn apply_lookup<F>(&mut self, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_HORIZON_DAYS) {
            self.horizon_days = parse_var(ENV_HORIZON_DAYS, v)?;
        }
        if let Some(v) = lookup(ENV_SIMULATIONS) {
            self.simulations = parse_var(ENV_SIMULATIONS, v)?;
        }
        if let Some(v) = lookup(ENV_SEED) {
            self.seed = Some(parse_var(ENV_SEED, v)?);
        }
        if let Some(v) = lookup(ENV_WINDOW) {
            self.window = parse_var(ENV_WINDOW, v)?;
        }
        if let Some(v) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&v)?;
        }
        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(horizon) = cli.horizon_days {
            self.horizon_days = horizon;
        }
        if let Some(simulations) = cli.simulations {
            self.simulations = simulations;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(window) = cli.window {
            self.window = window;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        } else if cli.verbose {
            self.log_level = self.log_level.max(LogLevel::Debug);
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation_config()?;
        if self.window == 0 {
            return Err(ConfigError::InvalidValue {
                name: "window",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    /// Engine configuration for the `project` command
    pub fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        Ok(SimulationConfig::builder()
            .horizon_days(self.horizon_days)
            .simulation_count(self.simulations)
            .maybe_seed(self.seed)
            .build()?)
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Horizon override
    pub horizon_days: Option<usize>,
    /// Simulation count override
    pub simulations: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Moving-average window override
    pub window: Option<usize>,
    /// Log level override
    pub log_level: Option<String>,
    /// Verbose flag; raises the log level to debug unless one is given
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |name| std::env::var(name).ok())
}

/// [`build_config`] with an injectable environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.apply_lookup(&lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
