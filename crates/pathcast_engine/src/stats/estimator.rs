//! Return statistics derived from a historical price series.
//!
//! # Drift formula
//!
//! The per-step drift applied by the path simulator is
//!
//! ```text
//! drift = (mean_return - variance / 2) - 0.5 * volatility^2
//! ```
//!
//! Since `volatility^2 == variance`, the Itô adjustment is subtracted
//! twice. Existing projections depend on this exact formula; see DESIGN.md
//! before changing it.

use pathcast_core::types::PriceSeries;
use tracing::debug;

use crate::error::ProjectionError;

/// Minimum number of prices needed to form at least one return.
pub const MIN_OBSERVATIONS: usize = 2;

/// Per-period return statistics driving the simulated walk.
///
/// # Invariants
///
/// - `variance >= 0`
/// - `volatility == variance.sqrt()`
/// - `drift == mean_return - variance / 2 - 0.5 * volatility^2`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReturnStatistics {
    /// Arithmetic mean of period returns.
    pub mean_return: f64,
    /// Unbiased sample variance of period returns.
    pub variance: f64,
    /// Standard deviation of period returns.
    pub volatility: f64,
    /// Deterministic per-step log-growth rate.
    pub drift: f64,
}

impl ReturnStatistics {
    /// Derives volatility and drift from the first two moments.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathcast_engine::stats::ReturnStatistics;
    ///
    /// let stats = ReturnStatistics::from_moments(0.001, 0.0004);
    /// assert!((stats.volatility - 0.02).abs() < 1e-15);
    /// assert!((stats.drift - (0.001 - 0.0004)).abs() < 1e-15);
    /// ```
    pub fn from_moments(mean_return: f64, variance: f64) -> Self {
        let volatility = variance.sqrt();
        let drift = (mean_return - variance / 2.0) - 0.5 * volatility * volatility;
        Self {
            mean_return,
            variance,
            volatility,
            drift,
        }
    }

    /// Checks that drift and volatility can drive a simulation.
    ///
    /// # Errors
    ///
    /// `ProjectionError::InvalidStatistics` naming the first non-finite value.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if !self.volatility.is_finite() {
            return Err(ProjectionError::InvalidStatistics {
                name: "volatility",
                value: self.volatility,
            });
        }
        if !self.drift.is_finite() {
            return Err(ProjectionError::InvalidStatistics {
                name: "drift",
                value: self.drift,
            });
        }
        Ok(())
    }
}

/// Estimates return statistics from a price series.
///
/// Returns are fractional period-over-period changes. The variance uses the
/// unbiased `n - 1` divisor; with a single return there is no dispersion to
/// measure and the variance is taken as zero.
///
/// # Errors
///
/// `ProjectionError::InsufficientData` for fewer than two prices.
///
/// # Examples
///
/// ```
/// use pathcast_core::types::{Date, PricePoint, PriceSeries};
/// use pathcast_engine::stats::estimate;
///
/// let series = PriceSeries::new(vec![
///     PricePoint::new(Date::from_ymd(2024, 1, 2).unwrap(), 100.0),
///     PricePoint::new(Date::from_ymd(2024, 1, 3).unwrap(), 110.0),
///     PricePoint::new(Date::from_ymd(2024, 1, 4).unwrap(), 99.0),
/// ])
/// .unwrap();
///
/// let stats = estimate(&series).unwrap();
/// assert!(stats.mean_return.abs() < 1e-12);
/// assert!((stats.variance - 0.02).abs() < 1e-12);
/// ```
pub fn estimate(series: &PriceSeries) -> Result<ReturnStatistics, ProjectionError> {
    if series.len() < MIN_OBSERVATIONS {
        return Err(ProjectionError::InsufficientData {
            required: MIN_OBSERVATIONS,
            provided: series.len(),
        });
    }

    let returns = series.returns();
    let n = returns.len() as f64;
    let mean_return = returns.iter().sum::<f64>() / n;
    let variance = if returns.len() > 1 {
        returns
            .iter()
            .map(|r| (r - mean_return) * (r - mean_return))
            .sum::<f64>()
            / (n - 1.0)
    } else {
        0.0
    };

    let stats = ReturnStatistics::from_moments(mean_return, variance);
    debug!(
        observations = series.len(),
        mean_return = stats.mean_return,
        variance = stats.variance,
        volatility = stats.volatility,
        drift = stats.drift,
        "Estimated return statistics"
    );
    Ok(stats)
}
