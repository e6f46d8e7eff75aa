//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`EngineRng`], a seeded PRNG wrapper with efficient
//! batch operations, and [`split_seed`], the substream seed derivation used
//! to give every pricing call and every worker its own independent stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Golden-ratio increment used to spread stream indices across the seed space.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derives an independent substream seed from a base seed and a stream index.
///
/// Applies the SplitMix64 finaliser to `base + index · φ` (with `φ` the
/// 64-bit golden-ratio constant), so consecutive indices land far apart in
/// seed space and the resulting generators are statistically unrelated even
/// for adjacent bases and indices.
///
/// The mapping is pure: the same `(base, index)` pair always yields the same
/// seed, which is what makes parallel runs replayable.
///
/// # Examples
///
/// ```rust
/// use mcpricer_engine::rng::split_seed;
///
/// let a = split_seed(42, 0);
/// let b = split_seed(42, 1);
/// assert_ne!(a, b);
/// assert_eq!(a, split_seed(42, 0));
/// ```
#[inline]
pub fn split_seed(base: u64, index: u64) -> u64 {
    let mut z = base.wrapping_add(index.wrapping_mul(GOLDEN_GAMMA));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Monte Carlo simulation random number generator.
///
/// Wraps a seeded `StdRng` and exposes reproducible single-value and
/// zero-allocation batch generation for uniform and standard normal
/// variates.
///
/// # Examples
///
/// ```rust
/// use mcpricer_engine::rng::EngineRng;
///
/// let mut rng = EngineRng::from_seed(42);
///
/// // Single value generation
/// let u: f64 = rng.gen_uniform();
/// let z: f64 = rng.gen_normal();
///
/// // Batch generation (zero allocation)
/// let mut buffer = vec![0.0; 100];
/// rng.fill_normal(&mut buffer);
/// ```
pub struct EngineRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl EngineRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of random numbers,
    /// enabling reproducible Monte Carlo simulations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mcpricer_engine::rng::EngineRng;
    ///
    /// let mut rng1 = EngineRng::from_seed(12345);
    /// let mut rng2 = EngineRng::from_seed(12345);
    ///
    /// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    ///
    /// Useful for logging and debugging reproducibility issues.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform random value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a single standard normal variate (mean = 0, std = 1).
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with uniform random values in [0, 1).
    ///
    /// Zero-allocation: the buffer must be pre-allocated by the caller.
    /// Empty buffers are handled gracefully (no operation).
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }

    /// Fills the buffer with standard normal (mean = 0, std = 1) variates.
    ///
    /// Zero-allocation: the buffer must be pre-allocated by the caller.
    /// Empty buffers are handled gracefully (no operation).
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
