//! Simulation configuration.
//!
//! This module provides the immutable [`SimulationConfig`] and its builder.
//! All values are caller-supplied; there is no process-wide configuration.

use super::error::ConfigError;

/// Maximum number of simulated paths allowed.
pub const MAX_SIMULATIONS: usize = 10_000_000;

/// Maximum projection horizon, in trading days.
pub const MAX_HORIZON_DAYS: usize = 10_000;

/// Monte Carlo projection configuration.
///
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pathcast_engine::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .horizon_days(50)
///     .simulation_count(5)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.horizon_days(), 50);
/// assert_eq!(config.simulation_count(), 5);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of future steps per path.
    horizon_days: usize,
    /// Number of independent paths.
    simulation_count: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the projection horizon in trading days.
    #[inline]
    pub fn horizon_days(&self) -> usize {
        self.horizon_days
    }

    /// Returns the number of simulated paths.
    #[inline]
    pub fn simulation_count(&self) -> usize {
        self.simulation_count
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `horizon_days` is 0 or greater than [`MAX_HORIZON_DAYS`]
    /// - `simulation_count` is 0 or greater than [`MAX_SIMULATIONS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon_days == 0 || self.horizon_days > MAX_HORIZON_DAYS {
            return Err(ConfigError::InvalidHorizon(self.horizon_days));
        }
        if self.simulation_count == 0 || self.simulation_count > MAX_SIMULATIONS {
            return Err(ConfigError::InvalidSimulationCount(self.simulation_count));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Both `horizon_days` and `simulation_count` must be set; `seed` is
/// optional.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    horizon_days: Option<usize>,
    simulation_count: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the projection horizon, in trading days.
    #[inline]
    pub fn horizon_days(mut self, horizon_days: usize) -> Self {
        self.horizon_days = Some(horizon_days);
        self
    }

    /// Sets the number of simulated paths.
    #[inline]
    pub fn simulation_count(mut self, simulation_count: usize) -> Self {
        self.simulation_count = Some(simulation_count);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either count is missing or out of range.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let horizon_days = self.horizon_days.ok_or(ConfigError::InvalidParameter {
            name: "horizon_days",
            value: "must be specified".to_string(),
        })?;

        let simulation_count = self.simulation_count.ok_or(ConfigError::InvalidParameter {
            name: "simulation_count",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            horizon_days,
            simulation_count,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
