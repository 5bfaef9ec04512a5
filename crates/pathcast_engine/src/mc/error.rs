//! Error types for simulation configuration.
//!
//! These errors occur when a configuration is built with out-of-range
//! parameters; they are raised before any path is simulated.

use thiserror::Error;

use super::config::{MAX_HORIZON_DAYS, MAX_SIMULATIONS};

/// Configuration error for the simulation engine.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Horizon outside valid range [1, MAX_HORIZON_DAYS].
    #[error("Invalid horizon {0} days: must be in range [1, {max}]", max = MAX_HORIZON_DAYS)]
    InvalidHorizon(usize),

    /// Simulation count outside valid range [1, MAX_SIMULATIONS].
    #[error("Invalid simulation count {0}: must be in range [1, {max}]", max = MAX_SIMULATIONS)]
    InvalidSimulationCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
