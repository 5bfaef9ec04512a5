//! Injectable random-number capability.
//!
//! The path simulator never talks to a concrete generator. It draws from a
//! [`RandomSource`], and the simulation engine obtains one independent
//! source per simulation from a [`RandomSourceFactory`]. Tests substitute
//! [`ConstantSource`] to remove the stochastic component entirely.

use super::prng::ProjectionRng;

/// A stream of standard normal draws.
pub trait RandomSource {
    /// Returns the next standard normal variate (mean=0, std=1).
    fn next_standard_normal(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_standard_normal(&mut self) -> f64 {
        (**self).next_standard_normal()
    }
}

/// Produces one random stream per simulation index.
///
/// Implementations must be deterministic in `simulation_index`: asking for
/// the same index twice yields identical streams, while distinct indices
/// yield independent ones. This keeps parallel runs reproducible regardless
/// of the order in which worker threads pick up simulations.
pub trait RandomSourceFactory: Sync {
    /// Stream type handed to the path simulator.
    type Source: RandomSource;

    /// Returns the stream for the given simulation.
    fn stream(&self, simulation_index: usize) -> Self::Source;
}

impl<F, S> RandomSourceFactory for F
where
    F: Fn(usize) -> S + Sync,
    S: RandomSource,
{
    type Source = S;

    #[inline]
    fn stream(&self, simulation_index: usize) -> S {
        self(simulation_index)
    }
}

/// Factory deriving independent [`ProjectionRng`] streams from one base seed.
///
/// Each simulation index is mixed with the base seed through SplitMix64
/// before seeding, so neighbouring indices do not share correlated seeds.
///
/// # Examples
///
/// ```rust
/// use pathcast_engine::rng::{RandomSource, RandomSourceFactory, SeededStreams};
///
/// let streams = SeededStreams::new(7);
/// let a = streams.stream(0).next_standard_normal();
/// let b = streams.stream(0).next_standard_normal();
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeededStreams {
    base_seed: u64,
}

impl SeededStreams {
    /// Creates a factory from an explicit base seed.
    #[inline]
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Creates a factory with a base seed drawn from OS-backed entropy.
    pub fn from_entropy() -> Self {
        Self::new(ProjectionRng::from_entropy().gen_u64())
    }

    /// Returns the base seed, for logging and replay.
    #[inline]
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Seed used for the stream of `simulation_index`.
    #[inline]
    pub fn stream_seed(&self, simulation_index: usize) -> u64 {
        splitmix64(
            self.base_seed
                .wrapping_add((simulation_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        )
    }
}

impl RandomSourceFactory for SeededStreams {
    type Source = ProjectionRng;

    #[inline]
    fn stream(&self, simulation_index: usize) -> ProjectionRng {
        ProjectionRng::from_seed(self.stream_seed(simulation_index))
    }
}

/// A degenerate source returning the same value on every draw.
///
/// `ConstantSource::zero()` turns every shock into pure drift.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConstantSource {
    value: f64,
}

impl ConstantSource {
    /// Creates a source that always yields `value`.
    #[inline]
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Creates a source that always yields 0.0.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0)
    }
}

impl RandomSource for ConstantSource {
    #[inline]
    fn next_standard_normal(&mut self) -> f64 {
        self.value
    }
}

// SplitMix64 finaliser (Steele, Lea & Flood, 2014).
#[inline]
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
