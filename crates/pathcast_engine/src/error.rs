//! Error type for the projection pipeline.
//!
//! Every variant is terminal for the current request: failures stem from
//! invalid input or a broken invariant, never from transient conditions,
//! so nothing is retried and no partial output is produced.

use chrono::Weekday;
use pathcast_core::types::{Date, DateError, SeriesError};
use thiserror::Error;

use crate::mc::ConfigError;

/// Errors raised while estimating statistics, simulating paths, aligning
/// the calendar or assembling the projection table.
///
/// # Examples
///
/// ```
/// use pathcast_engine::ProjectionError;
///
/// let err = ProjectionError::InvalidStatistics { name: "volatility", value: f64::NAN };
/// assert!(err.to_string().contains("volatility"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// Fewer historical prices than needed to compute a return variance.
    #[error("Insufficient data: need at least {required} prices, got {provided}")]
    InsufficientData {
        /// Minimum number of prices
        required: usize,
        /// Number of prices supplied
        provided: usize,
    },

    /// Drift or volatility is NaN or infinite.
    #[error("Invalid statistics: {name} = {value} is not finite")]
    InvalidStatistics {
        /// Name of the offending statistic
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Calendar seed date falls on a weekend.
    #[error("Non-market day: {date} falls on a {weekday}")]
    NonMarketDay {
        /// The rejected date
        date: Date,
        /// Its day of the week
        weekday: Weekday,
    },

    /// A simulated path and the date sequence disagree in length.
    #[error("Shape mismatch: simulation {column} has {actual} rows, expected {expected}")]
    ShapeMismatch {
        /// Simulation index of the offending path
        column: usize,
        /// Number of dates
        expected: usize,
        /// Length of the offending path
        actual: usize,
    },

    /// Seed price is non-finite or not strictly positive.
    #[error("Invalid seed price {0}: must be finite and positive")]
    InvalidSeedPrice(f64),

    /// Invalid simulation configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid historical series.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Date arithmetic failure.
    #[error(transparent)]
    Date(#[from] DateError),
}
