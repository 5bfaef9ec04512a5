//! Parallel orchestration of independent path simulations.
//!
//! # Overview
//!
//! The [`SimulationEngine`] coordinates:
//! 1. Input validation (seed price, horizon, statistics, simulation count)
//! 2. One random stream per simulation (via [`RandomSourceFactory`])
//! 3. Path generation on the Rayon pool (via [`simulate_path`])
//! 4. Collection in simulation-index order
//!
//! Simulations share only read-only inputs. Because every stream is keyed
//! by simulation index, the result does not depend on how Rayon schedules
//! the work.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::ProjectionError;
use crate::rng::{RandomSourceFactory, SeededStreams};
use crate::stats::ReturnStatistics;

use super::config::{SimulationConfig, MAX_SIMULATIONS};
use super::error::ConfigError;
use super::paths::{simulate_path, validate_horizon, validate_seed_price, SimulatedPath};
use super::progress::{CompletionCounter, NoProgress, ProgressObserver};

/// The paths of one simulation run, indexed by simulation number.
///
/// All paths share the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    paths: Vec<SimulatedPath>,
    base_seed: Option<u64>,
}

impl SimulationResult {
    /// Number of simulated paths.
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if no paths were simulated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Path for simulation `index`.
    #[inline]
    pub fn path(&self, index: usize) -> Option<&SimulatedPath> {
        self.paths.get(index)
    }

    /// All paths in simulation order.
    #[inline]
    pub fn paths(&self) -> &[SimulatedPath] {
        &self.paths
    }

    /// Common path length (`horizon_days + 1`).
    pub fn path_len(&self) -> usize {
        self.paths.first().map_or(0, SimulatedPath::len)
    }

    /// Base seed the streams were derived from, when known.
    #[inline]
    pub fn base_seed(&self) -> Option<u64> {
        self.base_seed
    }

    /// Consumes the result, returning the paths.
    #[inline]
    pub fn into_paths(self) -> Vec<SimulatedPath> {
        self.paths
    }

    /// Builds a result from already simulated paths.
    ///
    /// Path lengths are not checked here; the assembler rejects ragged input.
    pub fn from_paths(paths: Vec<SimulatedPath>) -> Self {
        Self {
            paths,
            base_seed: None,
        }
    }
}

/// Runs `simulation_count` independent path simulations.
///
/// Simulation `i` draws exclusively from `factory.stream(i)`, and the
/// returned paths are ordered by `i`. The observer is notified once per
/// finished simulation from whichever worker thread ran it.
///
/// # Errors
///
/// Input errors are reported before any simulation starts:
/// - `ProjectionError::InvalidSeedPrice`
/// - `ProjectionError::Config` for an invalid horizon or simulation count
/// - `ProjectionError::InvalidStatistics`
///
/// # Examples
///
/// ```rust
/// use pathcast_engine::mc::{run_simulations, NoProgress};
/// use pathcast_engine::rng::SeededStreams;
/// use pathcast_engine::stats::ReturnStatistics;
///
/// let stats = ReturnStatistics::from_moments(0.001, 0.0004);
/// let result = run_simulations(100.0, &stats, 50, 5, &SeededStreams::new(42), &NoProgress).unwrap();
///
/// assert_eq!(result.len(), 5);
/// assert_eq!(result.path_len(), 51);
/// ```
pub fn run_simulations<F, P>(
    seed_price: f64,
    stats: &ReturnStatistics,
    horizon_days: usize,
    simulation_count: usize,
    factory: &F,
    observer: &P,
) -> Result<SimulationResult, ProjectionError>
where
    F: RandomSourceFactory,
    P: ProgressObserver + ?Sized,
{
    validate_seed_price(seed_price)?;
    validate_horizon(horizon_days)?;
    if simulation_count == 0 || simulation_count > MAX_SIMULATIONS {
        return Err(ConfigError::InvalidSimulationCount(simulation_count).into());
    }
    stats.validate()?;

    let counter = CompletionCounter::new(simulation_count);

    let paths = (0..simulation_count)
        .into_par_iter()
        .map(|index| {
            let mut rng = factory.stream(index);
            let path = simulate_path(seed_price, stats, horizon_days, &mut rng)?;
            trace!(index, terminal = path.terminal(), "Simulation complete");
            counter.record(index, observer);
            Ok(path)
        })
        .collect::<Result<Vec<_>, ProjectionError>>()?;

    debug!(
        simulations = paths.len(),
        horizon_days,
        completed = counter.completed(),
        "Simulation run finished"
    );

    Ok(SimulationResult::from_paths(paths))
}

/// Simulation engine bound to a validated configuration.
///
/// # Examples
///
/// ```rust
/// use pathcast_engine::mc::{SimulationConfig, SimulationEngine};
/// use pathcast_engine::stats::ReturnStatistics;
///
/// let config = SimulationConfig::builder()
///     .horizon_days(10)
///     .simulation_count(3)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let engine = SimulationEngine::new(config);
/// let stats = ReturnStatistics::from_moments(0.0005, 0.0001);
/// let result = engine.run(42.0, &stats).unwrap();
///
/// assert_eq!(result.len(), 3);
/// assert_eq!(result.base_seed(), Some(7));
/// ```
#[derive(Clone, Debug)]
pub struct SimulationEngine {
    config: SimulationConfig,
}

impl SimulationEngine {
    /// Creates an engine from a validated configuration.
    #[inline]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Random streams for this run: seeded from the configuration, or from
    /// entropy when no seed is configured.
    pub fn streams(&self) -> SeededStreams {
        match self.config.seed() {
            Some(seed) => SeededStreams::new(seed),
            None => SeededStreams::from_entropy(),
        }
    }

    /// Runs the configured simulations without progress reporting.
    pub fn run(
        &self,
        seed_price: f64,
        stats: &ReturnStatistics,
    ) -> Result<SimulationResult, ProjectionError> {
        self.run_observed(seed_price, stats, &NoProgress)
    }

    /// Runs the configured simulations, reporting completions to `observer`.
    ///
    /// The base seed actually used is recorded on the result.
    pub fn run_observed<P: ProgressObserver + ?Sized>(
        &self,
        seed_price: f64,
        stats: &ReturnStatistics,
        observer: &P,
    ) -> Result<SimulationResult, ProjectionError> {
        let streams = self.streams();
        debug!(base_seed = streams.base_seed(), "Using random streams");

        let mut result = run_simulations(
            seed_price,
            stats,
            self.config.horizon_days(),
            self.config.simulation_count(),
            &streams,
            observer,
        )?;
        result.base_seed = Some(streams.base_seed());
        Ok(result)
    }

    /// Runs the configured simulations with a caller-supplied stream factory.
    pub fn run_with<F, P>(
        &self,
        seed_price: f64,
        stats: &ReturnStatistics,
        factory: &F,
        observer: &P,
    ) -> Result<SimulationResult, ProjectionError>
    where
        F: RandomSourceFactory,
        P: ProgressObserver + ?Sized,
    {
        run_simulations(
            seed_price,
            stats,
            self.config.horizon_days(),
            self.config.simulation_count(),
            factory,
            observer,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ConstantSource, ProjectionRng};
    use std::collections::HashSet;
    use std::sync::Mutex;

    fn stats() -> ReturnStatistics {
        ReturnStatistics::from_moments(0.002, 0.0009)
    }

    fn config(seed: Option<u64>) -> SimulationConfig {
        SimulationConfig::builder()
            .horizon_days(50)
            .simulation_count(5)
            .maybe_seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn test_five_paths_of_equal_length() {
        let result =
            run_simulations(100.0, &stats(), 50, 5, &SeededStreams::new(1), &NoProgress).unwrap();

        assert_eq!(result.len(), 5);
        for path in result.paths() {
            assert_eq!(path.len(), 51);
            assert_eq!(path.initial(), 100.0);
        }
    }

    #[test]
    fn test_paths_are_independent() {
        let result =
            run_simulations(100.0, &stats(), 50, 5, &SeededStreams::new(1), &NoProgress).unwrap();

        let terminals: HashSet<u64> = result
            .paths()
            .iter()
            .map(|p| p.terminal().to_bits())
            .collect();
        assert_eq!(terminals.len(), 5);
    }

    #[test]
    fn test_path_i_uses_stream_i() {
        let streams = SeededStreams::new(99);
        let result = run_simulations(50.0, &stats(), 20, 8, &streams, &NoProgress).unwrap();

        for (i, path) in result.paths().iter().enumerate() {
            let expected = simulate_path(50.0, &stats(), 20, &mut streams.stream(i)).unwrap();
            assert_eq!(path, &expected);
        }
    }

    #[test]
    fn test_reproducible_with_seed() {
        let engine = SimulationEngine::new(config(Some(2024)));
        let a = engine.run(10.0, &stats()).unwrap();
        let b = engine.run(10.0, &stats()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.base_seed(), Some(2024));
    }

    #[test]
    fn test_unseeded_run_records_replayable_seed() {
        let engine = SimulationEngine::new(config(None));
        let first = engine.run(10.0, &stats()).unwrap();
        let seed = first.base_seed().unwrap();

        let replay = SimulationEngine::new(config(Some(seed)))
            .run(10.0, &stats())
            .unwrap();
        assert_eq!(first.paths(), replay.paths());
    }

    #[test]
    fn test_progress_reports_every_simulation() {
        let seen = Mutex::new(Vec::new());
        let observer = |index: usize, completed: usize, total: usize| {
            seen.lock().unwrap().push((index, completed, total));
        };

        let engine = SimulationEngine::new(config(Some(3)));
        engine.run_observed(10.0, &stats(), &observer).unwrap();

        let events = seen.into_inner().unwrap();
        assert_eq!(events.len(), 5);
        let indices: HashSet<usize> = events.iter().map(|e| e.0).collect();
        assert_eq!(indices, (0..5).collect());
        let mut counts: Vec<usize> = events.iter().map(|e| e.1).collect();
        counts.sort_unstable();
        assert_eq!(counts, vec![1, 2, 3, 4, 5]);
        assert!(events.iter().all(|e| e.2 == 5));
    }

    #[test]
    fn test_custom_factory() {
        let engine = SimulationEngine::new(config(None));
        let factory = |_: usize| ConstantSource::zero();
        let result = engine.run_with(100.0, &stats(), &factory, &NoProgress).unwrap();

        let first = result.path(0).unwrap();
        assert!(result.paths().iter().all(|p| p == first));
        assert_eq!(result.base_seed(), None);
    }

    #[test]
    fn test_zero_simulations_rejected() {
        let err = run_simulations(100.0, &stats(), 5, 0, &SeededStreams::new(1), &NoProgress)
            .unwrap_err();
        assert_eq!(
            err,
            ProjectionError::Config(ConfigError::InvalidSimulationCount(0))
        );
    }

    #[test]
    fn test_invalid_statistics_rejected() {
        let bad = ReturnStatistics::from_moments(0.0, f64::INFINITY);
        let err = run_simulations(100.0, &bad, 5, 2, &SeededStreams::new(1), &NoProgress)
            .unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidStatistics { .. }));
    }

    #[test]
    fn test_closure_factory_of_generators() {
        let factory = |i: usize| ProjectionRng::from_seed(i as u64 + 1);
        let result = run_simulations(1.0, &stats(), 3, 4, &factory, &NoProgress).unwrap();
        assert_eq!(result.len(), 4);
    }
}
