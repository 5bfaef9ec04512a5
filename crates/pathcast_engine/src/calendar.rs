//! Alignment of simulated steps to future trading days.
//!
//! Trading days are Monday to Friday; holidays are not modelled.
//!
//! # Stepping rule
//!
//! From the current date, advance 3 calendar days when its weekday index
//! (Monday = 0) is 4 or more, otherwise advance 1 day. Starting from a
//! weekday this visits Monday to Friday only.

use pathcast_core::types::{Date, DateError};

use crate::error::ProjectionError;
use crate::mc::{ConfigError, MAX_HORIZON_DAYS};

/// Weekday index at and after which the next step jumps 3 days.
const WEEKEND_JUMP_FROM: u32 = 4;

/// Returns the trading day following `date` under the stepping rule.
///
/// # Examples
///
/// ```
/// use pathcast_core::types::Date;
/// use pathcast_engine::calendar::next_trading_day;
///
/// let friday = Date::from_ymd(2024, 1, 5).unwrap();
/// assert_eq!(next_trading_day(friday).unwrap(), Date::from_ymd(2024, 1, 8).unwrap());
/// ```
pub fn next_trading_day(date: Date) -> Result<Date, DateError> {
    if date.weekday_index() >= WEEKEND_JUMP_FROM {
        date.add_days(3)
    } else {
        date.add_days(1)
    }
}

/// Builds the date index for a projection.
///
/// Returns `horizon_days + 1` dates: `last_market_date` followed by
/// `horizon_days` successive trading days.
///
/// # Errors
///
/// - `ProjectionError::Config` if `horizon_days` exceeds [`MAX_HORIZON_DAYS`]
/// - `ProjectionError::NonMarketDay` if `last_market_date` is a Saturday or Sunday
/// - `ProjectionError::Date` if the walk leaves the supported date range
///
/// # Examples
///
/// ```
/// use pathcast_core::types::Date;
/// use pathcast_engine::calendar::align;
///
/// let monday = Date::from_ymd(2024, 1, 1).unwrap();
/// let dates = align(monday, 5).unwrap();
///
/// let days: Vec<u32> = dates.iter().map(|d| d.day()).collect();
/// assert_eq!(days, vec![1, 2, 3, 4, 5, 8]);
/// ```
pub fn align(last_market_date: Date, horizon_days: usize) -> Result<Vec<Date>, ProjectionError> {
    if horizon_days > MAX_HORIZON_DAYS {
        return Err(ConfigError::InvalidHorizon(horizon_days).into());
    }
    if last_market_date.is_weekend() {
        return Err(ProjectionError::NonMarketDay {
            date: last_market_date,
            weekday: last_market_date.weekday(),
        });
    }

    let mut dates = Vec::with_capacity(horizon_days + 1);
    let mut current = last_market_date;
    dates.push(current);

    for _ in 0..horizon_days {
        current = next_trading_day(current)?;
        dates.push(current);
    }

    Ok(dates)
}
