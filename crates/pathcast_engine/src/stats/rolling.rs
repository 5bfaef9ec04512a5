//! Rolling-window moving average of closing prices.

use pathcast_core::types::PriceSeries;

use crate::mc::ConfigError;

/// Default moving-average window, in observations.
pub const DEFAULT_WINDOW: usize = 20;

/// Computes a trailing moving average over `window` observations.
///
/// Returns one entry per observation. Entries are `None` until a full
/// window is available, so the first `window - 1` values are always `None`.
///
/// # Errors
///
/// `ConfigError::InvalidParameter` if `window` is zero.
///
/// # Examples
///
/// ```
/// use pathcast_core::types::{Date, PricePoint, PriceSeries};
/// use pathcast_engine::stats::moving_average;
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let points = [1.0, 2.0, 3.0, 4.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &p)| PricePoint::new(start.add_days(i as u64).unwrap(), p))
///     .collect();
/// let series = PriceSeries::new(points).unwrap();
///
/// let ma = moving_average(&series, 2).unwrap();
/// assert_eq!(ma, vec![None, Some(1.5), Some(2.5), Some(3.5)]);
/// ```
pub fn moving_average(series: &PriceSeries, window: usize) -> Result<Vec<Option<f64>>, ConfigError> {
    if window == 0 {
        return Err(ConfigError::InvalidParameter {
            name: "window",
            value: "must be at least 1".to_string(),
        });
    }

    let prices: Vec<f64> = series.prices().collect();
    let mut averages: Vec<Option<f64>> = vec![None; prices.len().min(window - 1)];
    // Sum each window from its own slice so large values cannot linger.
    averages.extend(
        prices
            .windows(window)
            .map(|w| Some(w.iter().sum::<f64>() / window as f64)),
    );

    Ok(averages)
}
