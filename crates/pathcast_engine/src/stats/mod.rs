//! Historical return statistics.
//!
//! - [`estimate`] turns a [`PriceSeries`](pathcast_core::types::PriceSeries)
//!   into [`ReturnStatistics`] (mean, variance, volatility, drift)
//! - [`moving_average`] computes the trailing mean shown alongside the history

mod estimator;
mod rolling;

pub use estimator::{estimate, ReturnStatistics, MIN_OBSERVATIONS};
pub use rolling::{moving_average, DEFAULT_WINDOW};
