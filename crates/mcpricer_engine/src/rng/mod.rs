//! # Random Number Generation Infrastructure
//!
//! Seeded random number generation for Monte Carlo pricing, with
//! deterministic substream derivation for parallel workers.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every stream is fully determined by a 64-bit seed;
//!   a fixed (seed, call index, worker count) replays bit-for-bit.
//! - **Substream independence**: [`split_seed`] maps a base seed and a
//!   stream index through a SplitMix64-style finaliser, so adjacent indices
//!   yield statistically unrelated generators. Workers never share a stream.
//! - **Efficiency**: zero-allocation batch operations via `&mut [f64]`
//!   slices; normal variates use the Ziggurat sampler from `rand_distr`.
//!
//! ## Stream Layout
//!
//! The pricing facade derives one seed per pricing call from its base seed
//! and a monotone call counter, then worker `w` of that call draws from
//! `split_seed(call_seed, w)`. Overlapping calls on one facade therefore
//! never observe the same draws.
//!
//! ## Usage Example
//!
//! ```rust
//! use mcpricer_engine::rng::{split_seed, EngineRng};
//!
//! let call_seed = split_seed(42, 0);
//! let mut rng = EngineRng::from_seed(split_seed(call_seed, 0));
//!
//! let z = rng.gen_normal();
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//! ```

mod prng;

pub use prng::{split_seed, EngineRng};

#[cfg(test)]
mod tests;
