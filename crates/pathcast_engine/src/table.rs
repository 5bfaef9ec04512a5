//! Projection table: simulated paths indexed by trading date.
//!
//! Rows are dates, columns are simulation indices. The table is built once
//! by [`assemble`] and never mutated.

use pathcast_core::types::Date;

use crate::error::ProjectionError;
use crate::mc::SimulationResult;

/// Final projection output.
///
/// # Invariants
///
/// Every column has exactly `dates().len()` values.
///
/// # Examples
///
/// ```
/// use pathcast_core::types::Date;
/// use pathcast_engine::calendar::align;
/// use pathcast_engine::mc::{run_simulations, NoProgress};
/// use pathcast_engine::rng::SeededStreams;
/// use pathcast_engine::stats::ReturnStatistics;
/// use pathcast_engine::table::assemble;
///
/// let stats = ReturnStatistics::from_moments(0.001, 0.0004);
/// let result = run_simulations(100.0, &stats, 5, 3, &SeededStreams::new(1), &NoProgress).unwrap();
/// let dates = align(Date::from_ymd(2024, 1, 1).unwrap(), 5).unwrap();
///
/// let table = assemble(result, dates).unwrap();
/// assert_eq!(table.n_rows(), 6);
/// assert_eq!(table.n_columns(), 3);
/// assert_eq!(table.row(0).unwrap().values, vec![100.0; 3]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProjectionTable {
    dates: Vec<Date>,
    columns: Vec<Vec<f64>>,
}

/// One table row: a date and the value of every simulation on that date.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProjectionRow {
    /// Trading date.
    pub date: Date,
    /// Simulated prices, in simulation order.
    pub values: Vec<f64>,
}

/// Summary of the last row across simulations.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TerminalSummary {
    /// Date of the last row.
    pub date: Date,
    /// Mean terminal price.
    pub mean: f64,
    /// Lowest terminal price.
    pub min: f64,
    /// Highest terminal price.
    pub max: f64,
}

impl ProjectionTable {
    /// Number of rows (dates).
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.dates.len()
    }

    /// Number of columns (simulations).
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Row index.
    #[inline]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Prices of simulation `index`, one per row.
    #[inline]
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// All columns in simulation order.
    #[inline]
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    /// Row `index`, gathering one value per simulation.
    pub fn row(&self, index: usize) -> Option<ProjectionRow> {
        let date = *self.dates.get(index)?;
        Some(ProjectionRow {
            date,
            values: self.columns.iter().map(|c| c[index]).collect(),
        })
    }

    /// Iterator over rows in date order.
    pub fn rows(&self) -> impl Iterator<Item = ProjectionRow> + '_ {
        (0..self.n_rows()).filter_map(move |i| self.row(i))
    }

    /// Mean, minimum and maximum of the final row.
    ///
    /// `None` for a table without rows or columns.
    pub fn terminal_summary(&self) -> Option<TerminalSummary> {
        let last = self.row(self.n_rows().checked_sub(1)?)?;
        if last.values.is_empty() {
            return None;
        }

        let n = last.values.len() as f64;
        let mean = last.values.iter().sum::<f64>() / n;
        let min = last.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = last.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(TerminalSummary {
            date: last.date,
            mean,
            min,
            max,
        })
    }
}

/// Joins simulated paths with their trading dates.
///
/// # Errors
///
/// `ProjectionError::ShapeMismatch` naming the first path whose length
/// differs from the number of dates.
pub fn assemble(result: SimulationResult, dates: Vec<Date>) -> Result<ProjectionTable, ProjectionError> {
    let expected = dates.len();
    for (column, path) in result.paths().iter().enumerate() {
        if path.len() != expected {
            return Err(ProjectionError::ShapeMismatch {
                column,
                expected,
                actual: path.len(),
            });
        }
    }

    let columns = result
        .into_paths()
        .into_iter()
        .map(|p| p.into_prices())
        .collect();

    Ok(ProjectionTable { dates, columns })
}
