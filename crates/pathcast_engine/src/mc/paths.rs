//! Single-path simulation.
//!
//! Generates one price path as a first-order multiplicative walk in log
//! space:
//!
//! ```text
//! S[0] = seed
//! S[d] = S[d-1] × exp(drift + volatility × Z_d),   Z_d ~ N(0, 1)
//! ```
//!
//! Each step consumes exactly one standard normal draw, so a path over
//! `horizon_days` steps consumes `horizon_days` draws.

use crate::error::ProjectionError;
use crate::rng::RandomSource;
use crate::stats::ReturnStatistics;

use super::config::MAX_HORIZON_DAYS;
use super::error::ConfigError;

/// A simulated price path of `horizon_days + 1` prices.
///
/// Element 0 is the seed price (the last known close).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SimulatedPath {
    prices: Vec<f64>,
}

impl SimulatedPath {
    /// Number of prices, including the seed.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if the path holds no prices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Number of simulated steps (`len() - 1`).
    #[inline]
    pub fn steps(&self) -> usize {
        self.prices.len().saturating_sub(1)
    }

    /// Prices in step order.
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// The seed price.
    #[inline]
    pub fn initial(&self) -> f64 {
        self.prices[0]
    }

    /// The final simulated price.
    #[inline]
    pub fn terminal(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    /// Consumes the path, returning its prices.
    #[inline]
    pub fn into_prices(self) -> Vec<f64> {
        self.prices
    }
}

/// Checks that a seed price can start a path.
pub(crate) fn validate_seed_price(seed_price: f64) -> Result<(), ProjectionError> {
    if seed_price.is_finite() && seed_price > 0.0 {
        Ok(())
    } else {
        Err(ProjectionError::InvalidSeedPrice(seed_price))
    }
}

/// Checks that a horizon is within [1, MAX_HORIZON_DAYS].
pub(crate) fn validate_horizon(horizon_days: usize) -> Result<(), ProjectionError> {
    if horizon_days == 0 || horizon_days > MAX_HORIZON_DAYS {
        return Err(ConfigError::InvalidHorizon(horizon_days).into());
    }
    Ok(())
}

/// Simulates one price path.
///
/// # Arguments
///
/// * `seed_price` - Starting price, must be finite and positive
/// * `stats` - Return statistics supplying drift and volatility
/// * `horizon_days` - Number of steps, at least 1
/// * `rng` - Source of standard normal shocks
///
/// # Errors
///
/// - `ProjectionError::InvalidSeedPrice` for a non-positive or non-finite seed
/// - `ProjectionError::Config` for a zero or oversized horizon
/// - `ProjectionError::InvalidStatistics` for non-finite drift or volatility
///
/// Validation happens before any draw, so a failed call leaves `rng`
/// untouched.
///
/// # Examples
///
/// ```rust
/// use pathcast_engine::mc::simulate_path;
/// use pathcast_engine::rng::ConstantSource;
/// use pathcast_engine::stats::ReturnStatistics;
///
/// let stats = ReturnStatistics::from_moments(0.001, 0.0004);
/// let path = simulate_path(100.0, &stats, 3, &mut ConstantSource::zero()).unwrap();
///
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.initial(), 100.0);
/// ```
pub fn simulate_path<R: RandomSource>(
    seed_price: f64,
    stats: &ReturnStatistics,
    horizon_days: usize,
    rng: &mut R,
) -> Result<SimulatedPath, ProjectionError> {
    validate_seed_price(seed_price)?;
    validate_horizon(horizon_days)?;
    stats.validate()?;

    let drift = stats.drift;
    let volatility = stats.volatility;

    let mut prices = Vec::with_capacity(horizon_days + 1);
    prices.push(seed_price);

    let mut current = seed_price;
    for _ in 0..horizon_days {
        let z = rng.next_standard_normal();
        let shock = drift + volatility * z;
        current *= shock.exp();
        prices.push(current);
    }

    Ok(SimulatedPath { prices })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ConstantSource, ProjectionRng};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    /// Counts draws so tests can assert consumption.
    struct CountingSource {
        inner: ProjectionRng,
        draws: usize,
    }

    impl RandomSource for CountingSource {
        fn next_standard_normal(&mut self) -> f64 {
            self.draws += 1;
            self.inner.gen_normal()
        }
    }

    fn sample_stats() -> ReturnStatistics {
        ReturnStatistics::from_moments(0.0015, 0.0009)
    }

    #[test]
    fn test_path_length_and_seed() {
        let mut rng = ProjectionRng::from_seed(42);
        let path = simulate_path(250.0, &sample_stats(), 50, &mut rng).unwrap();

        assert_eq!(path.len(), 51);
        assert_eq!(path.steps(), 50);
        assert_eq!(path.initial(), 250.0);
        assert!(path.prices().iter().all(|&p| p > 0.0));
    }

    #[test]
    fn test_pure_drift_with_zero_shocks() {
        let stats = sample_stats();
        let path = simulate_path(100.0, &stats, 20, &mut ConstantSource::zero()).unwrap();

        let growth = stats.drift.exp();
        for d in 1..path.len() {
            assert_eq!(path.prices()[d], path.prices()[d - 1] * growth);
        }
        assert_relative_eq!(
            path.terminal(),
            100.0 * (20.0 * stats.drift).exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_constant_shock_scales_by_volatility() {
        let stats = sample_stats();
        let path = simulate_path(100.0, &stats, 1, &mut ConstantSource::new(1.0)).unwrap();
        assert_relative_eq!(
            path.terminal(),
            100.0 * (stats.drift + stats.volatility).exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_consumes_exactly_horizon_draws() {
        let mut source = CountingSource {
            inner: ProjectionRng::from_seed(7),
            draws: 0,
        };
        simulate_path(10.0, &sample_stats(), 37, &mut source).unwrap();
        assert_eq!(source.draws, 37);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let stats = sample_stats();
        let a = simulate_path(10.0, &stats, 30, &mut ProjectionRng::from_seed(11)).unwrap();
        let b = simulate_path(10.0, &stats, 30, &mut ProjectionRng::from_seed(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let err = simulate_path(10.0, &sample_stats(), 0, &mut ConstantSource::zero()).unwrap_err();
        assert_eq!(err, ProjectionError::Config(ConfigError::InvalidHorizon(0)));
    }

    #[test]
    fn test_invalid_seed_rejected() {
        for seed in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = simulate_path(seed, &sample_stats(), 5, &mut ConstantSource::zero());
            assert!(matches!(result, Err(ProjectionError::InvalidSeedPrice(_))));
        }
    }

    #[test]
    fn test_non_finite_statistics_rejected_before_drawing() {
        let stats = ReturnStatistics::from_moments(f64::NAN, 0.0004);
        let mut source = CountingSource {
            inner: ProjectionRng::from_seed(1),
            draws: 0,
        };
        let err = simulate_path(10.0, &stats, 5, &mut source).unwrap_err();

        assert!(matches!(
            err,
            ProjectionError::InvalidStatistics { name: "drift", .. }
        ));
        assert_eq!(source.draws, 0);
    }

    proptest! {
        #[test]
        fn prop_length_and_seed(horizon in 1usize..400, seed_price in 0.01f64..1e6, seed in any::<u64>()) {
            let mut rng = ProjectionRng::from_seed(seed);
            let path = simulate_path(seed_price, &sample_stats(), horizon, &mut rng).unwrap();
            prop_assert_eq!(path.len(), horizon + 1);
            prop_assert_eq!(path.initial(), seed_price);
        }
    }
}
