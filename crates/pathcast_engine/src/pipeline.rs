//! End-to-end projection: history in, dated projection table out.

use pathcast_core::types::PriceSeries;
use tracing::info;

use crate::calendar::align;
use crate::error::ProjectionError;
use crate::mc::{ProgressObserver, SimulationConfig, SimulationEngine};
use crate::stats::{estimate, ReturnStatistics, MIN_OBSERVATIONS};
use crate::table::{assemble, ProjectionTable};

/// Output of a successful projection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Projection {
    /// Statistics the paths were driven by.
    pub statistics: ReturnStatistics,
    /// Simulated prices indexed by trading date.
    pub table: ProjectionTable,
    /// Base seed of the random streams; pass it back to reproduce the run.
    pub seed: u64,
}

/// Projects future price paths from a historical series.
///
/// Steps: estimate statistics, simulate paths seeded with the last close,
/// align dates starting at the last observation date, assemble the table.
/// Either a complete projection is returned or an error; nothing partial.
///
/// # Errors
///
/// Any [`ProjectionError`] raised by the individual stages.
///
/// # Examples
///
/// ```rust
/// use pathcast_core::types::{Date, PricePoint, PriceSeries};
/// use pathcast_engine::mc::{NoProgress, SimulationConfig};
/// use pathcast_engine::pipeline::project;
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let points = [100.0, 101.5, 100.8, 102.2, 103.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &p)| PricePoint::new(start.add_days(i as u64).unwrap(), p))
///     .collect();
/// let series = PriceSeries::new(points).unwrap();
///
/// let config = SimulationConfig::builder()
///     .horizon_days(10)
///     .simulation_count(4)
///     .seed(1)
///     .build()
///     .unwrap();
///
/// let projection = project(&series, &config, &NoProgress).unwrap();
/// assert_eq!(projection.table.n_rows(), 11);
/// assert_eq!(projection.table.n_columns(), 4);
/// assert_eq!(projection.seed, 1);
/// ```
pub fn project<P: ProgressObserver + ?Sized>(
    series: &PriceSeries,
    config: &SimulationConfig,
    observer: &P,
) -> Result<Projection, ProjectionError> {
    let statistics = estimate(series)?;
    let last = series.last().ok_or(ProjectionError::InsufficientData {
        required: MIN_OBSERVATIONS,
        provided: 0,
    })?;

    // Reject a weekend seed date before spending time on simulation.
    let dates = align(last.date, config.horizon_days())?;

    let engine = SimulationEngine::new(config.clone());
    let result = engine.run_observed(last.price, &statistics, observer)?;
    let seed = result.base_seed().unwrap_or_default();

    let table = assemble(result, dates)?;

    info!(
        seed_price = last.price,
        seed_date = %last.date,
        horizon_days = config.horizon_days(),
        simulations = table.n_columns(),
        base_seed = seed,
        "Projection complete"
    );

    Ok(Projection {
        statistics,
        table,
        seed,
    })
}
