//! # pathcast_engine: Monte Carlo Price-Path Projection
//!
//! ## Layer 2 (Engine) Role
//!
//! pathcast_engine turns a historical [`PriceSeries`](pathcast_core::types::PriceSeries)
//! into a dated table of simulated future prices:
//!
//! ```text
//! PriceSeries ──► stats::estimate ──► ReturnStatistics
//!                                          │
//!          last close ──► mc::SimulationEngine (Rayon, one stream per path)
//!                                          │
//!          last date  ──► calendar::align ─┤
//!                                          ▼
//!                               table::assemble ──► ProjectionTable
//! ```
//!
//! - [`stats`]: mean, variance, volatility and drift of daily returns
//! - [`rng`]: seeded generators and per-simulation streams
//! - [`mc`]: single-path simulation and parallel orchestration
//! - [`calendar`]: trading-day alignment (weekends skipped)
//! - [`table`]: date-indexed projection table
//! - [`pipeline`]: the stages above run in order by [`project`]
//!
//! ## Usage Examples
//!
//! ```rust
//! use pathcast_core::types::{Date, PricePoint, PriceSeries};
//! use pathcast_engine::mc::{NoProgress, SimulationConfig};
//! use pathcast_engine::project;
//!
//! let series = PriceSeries::new(vec![
//!     PricePoint::new(Date::from_ymd(2024, 1, 2).unwrap(), 250.0),
//!     PricePoint::new(Date::from_ymd(2024, 1, 3).unwrap(), 245.0),
//!     PricePoint::new(Date::from_ymd(2024, 1, 4).unwrap(), 251.5),
//! ])
//! .unwrap();
//!
//! let config = SimulationConfig::builder()
//!     .horizon_days(50)
//!     .simulation_count(5)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let projection = project(&series, &config, &NoProgress).unwrap();
//! assert_eq!(projection.table.n_rows(), 51);
//! assert_eq!(projection.table.n_columns(), 5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for statistics and projection output

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calendar;
pub mod error;
pub mod mc;
pub mod pipeline;
pub mod rng;
pub mod stats;
pub mod table;

pub use error::ProjectionError;
pub use pipeline::{project, Projection};
