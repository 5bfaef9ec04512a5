//! Historical price series.
//!
//! A [`PriceSeries`] is an ordered, validated sequence of dated closing
//! prices. It is immutable once built and borrowed read-only by the
//! simulation engine.

use super::error::SeriesError;
use super::time::Date;

/// A single dated price observation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// Observation date.
    pub date: Date,
    /// Closing price.
    pub price: f64,
}

impl PricePoint {
    /// Creates a new observation.
    #[inline]
    pub fn new(date: Date, price: f64) -> Self {
        Self { date, price }
    }
}

/// Ordered sequence of (date, price) observations.
///
/// # Invariants
///
/// - Dates are strictly increasing (no duplicates)
/// - Every price is finite and strictly positive
///
/// An empty series is allowed; operations that need a minimum number of
/// observations check for it themselves.
///
/// # Examples
///
/// ```
/// use pathcast_core::types::{Date, PricePoint, PriceSeries};
///
/// let series = PriceSeries::new(vec![
///     PricePoint::new(Date::from_ymd(2024, 1, 2).unwrap(), 100.0),
///     PricePoint::new(Date::from_ymd(2024, 1, 3).unwrap(), 102.0),
/// ])
/// .unwrap();
///
/// assert_eq!(series.len(), 2);
/// assert!((series.returns()[0] - 0.02).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series, validating ordering and prices.
    ///
    /// # Errors
    ///
    /// - `SeriesError::NonIncreasingDates` on a duplicate or out-of-order date
    /// - `SeriesError::InvalidPrice` on a non-finite or non-positive price
    pub fn new(points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        for (index, point) in points.iter().enumerate() {
            if !point.price.is_finite() || point.price <= 0.0 {
                return Err(SeriesError::InvalidPrice {
                    index,
                    date: point.date,
                    price: point.price,
                });
            }
            if index > 0 {
                let previous = points[index - 1].date;
                if point.date <= previous {
                    return Err(SeriesError::NonIncreasingDates {
                        index,
                        previous,
                        current: point.date,
                    });
                }
            }
        }
        Ok(Self { points })
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series holds no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All observations in date order.
    #[inline]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Earliest observation.
    #[inline]
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Latest observation (the last known market close).
    #[inline]
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Iterator over observation dates.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.points.iter().map(|p| p.date)
    }

    /// Iterator over prices.
    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.price)
    }

    /// Period-over-period fractional returns, `p[i] / p[i-1] - 1`.
    ///
    /// Returns `len() - 1` values (empty for fewer than two points).
    pub fn returns(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|w| w[1].price / w[0].price - 1.0)
            .collect()
    }
}
