//! Pseudo-random number generator wrapper for path simulation.
//!
//! This module provides [`ProjectionRng`], a seeded PRNG wrapper that offers
//! reproducible standard normal draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use super::source::RandomSource;

/// Seeded random number generator for Monte Carlo path simulation.
///
/// # Examples
///
/// ```rust
/// use pathcast_engine::rng::ProjectionRng;
///
/// let mut rng = ProjectionRng::from_seed(42);
/// let z: f64 = rng.gen_normal();
/// assert!(z.is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct ProjectionRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl ProjectionRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of random numbers.
    ///
    /// ```rust
    /// use pathcast_engine::rng::ProjectionRng;
    ///
    /// let mut rng1 = ProjectionRng::from_seed(12345);
    /// let mut rng2 = ProjectionRng::from_seed(12345);
    /// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an RNG seeded from the thread-local entropy source.
    ///
    /// The chosen seed is still recorded and available via [`seed`](Self::seed),
    /// so an unseeded run can be replayed.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::thread_rng().gen())
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Generates a raw 64-bit value, used to derive child seeds.
    #[inline]
    pub fn gen_u64(&mut self) -> u64 {
        self.inner.gen()
    }
}

impl RandomSource for ProjectionRng {
    #[inline]
    fn next_standard_normal(&mut self) -> f64 {
        self.gen_normal()
    }
}
