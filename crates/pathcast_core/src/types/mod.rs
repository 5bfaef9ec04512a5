//! Foundation types for price-path projection.
//!
//! This module provides:
//! - `time`: `Date` with the weekday helpers used by the trading calendar
//! - `series`: `PricePoint` and the validated `PriceSeries`
//! - `error`: Structured error types for dates and series
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod error;
pub mod series;
pub mod time;

pub use error::{DateError, SeriesError};
pub use series::{PricePoint, PriceSeries};
pub use time::Date;
