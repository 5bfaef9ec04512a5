//! # service_cli: pathcast command-line front end
//!
//! Reads a closing-price history from CSV, runs the projection pipeline and
//! renders the result as a text table, CSV or JSON.
//!
//! ## Modules
//!
//! - [`config`]: layered configuration (CLI > environment > TOML > defaults)
//! - [`loader`]: CSV to `PriceSeries`
//! - [`report`]: output renderers
//! - [`commands`]: `project` and `stats`

pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod report;

pub use error::{CliError, Result};
