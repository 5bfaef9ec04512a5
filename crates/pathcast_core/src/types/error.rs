//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction, parsing and arithmetic
//! - `SeriesError`: Errors from price series validation

use chrono::NaiveDate;
use thiserror::Error;

use super::time::Date;

/// Date-related errors.
///
/// # Examples
/// ```
/// use pathcast_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Date arithmetic left chrono's supported range.
    #[error("Date out of range: {date} + {days} days")]
    OutOfRange {
        /// Starting date
        date: NaiveDate,
        /// Number of days added
        days: u64,
    },
}

/// Price series validation errors.
///
/// A series is rejected as a whole; no partially-valid series is built.
///
/// # Examples
/// ```
/// use pathcast_core::types::{Date, SeriesError};
///
/// let day = Date::from_ymd(2024, 1, 2).unwrap();
/// let err = SeriesError::NonIncreasingDates { index: 1, previous: day, current: day };
/// assert!(err.to_string().contains("strictly increasing"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// Dates are duplicated or out of order.
    #[error("Dates must be strictly increasing: {current} at index {index} follows {previous}")]
    NonIncreasingDates {
        /// Index of the offending observation
        index: usize,
        /// Date of the preceding observation
        previous: Date,
        /// Date of the offending observation
        current: Date,
    },

    /// Price is non-finite or not strictly positive.
    #[error("Invalid price {price} on {date} at index {index}: must be finite and positive")]
    InvalidPrice {
        /// Index of the offending observation
        index: usize,
        /// Date of the offending observation
        date: Date,
        /// The rejected price
        price: f64,
    },
}
