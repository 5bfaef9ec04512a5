//! # Random Number Generation Infrastructure
//!
//! This module provides random number generation for Monte Carlo path
//! simulation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators support seeding for deterministic sequences
//! - **Injection**: The simulator draws through the [`RandomSource`] trait, so tests
//!   can substitute deterministic sources
//! - **Independence**: [`SeededStreams`] hands each simulation its own stream
//!
//! ## Module Structure
//!
//! - [`prng`]: Pseudo-random number generator wrapper with seed management
//! - [`source`]: `RandomSource` / `RandomSourceFactory` traits and stock implementations
//!
//! ## Usage Example
//!
//! ```rust
//! use pathcast_engine::rng::{ProjectionRng, RandomSource};
//!
//! let mut rng = ProjectionRng::from_seed(12345);
//! let z = rng.next_standard_normal();
//! assert!(z.is_finite());
//! ```

mod prng;
mod source;

pub use prng::ProjectionRng;
pub use source::{ConstantSource, RandomSource, RandomSourceFactory, SeededStreams};

#[cfg(test)]
mod tests;
