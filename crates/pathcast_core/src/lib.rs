//! # pathcast_core: Foundation Types for Price-Path Projection
//!
//! ## Layer 1 (Foundation) Role
//!
//! pathcast_core is the bottom layer of the workspace, providing:
//! - Time types: `Date` (`types::time`)
//! - Historical data: `PricePoint`, `PriceSeries` (`types::series`)
//! - Error types: `DateError`, `SeriesError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pathcast_* crates, with minimal external dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pathcast_core::types::{Date, PricePoint, PriceSeries};
//!
//! let series = PriceSeries::new(vec![
//!     PricePoint::new(Date::from_ymd(2024, 1, 2).unwrap(), 250.0),
//!     PricePoint::new(Date::from_ymd(2024, 1, 3).unwrap(), 245.0),
//!     PricePoint::new(Date::from_ymd(2024, 1, 4).unwrap(), 251.5),
//! ])
//! .unwrap();
//!
//! assert_eq!(series.returns().len(), 2);
//! assert_eq!(series.last().unwrap().price, 251.5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, PricePoint, PriceSeries

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
