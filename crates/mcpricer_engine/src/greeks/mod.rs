//! # Greeks Estimation
//!
//! Central finite-difference Greeks on top of the Monte Carlo pricing
//! pipeline. Every bumped revaluation reuses the pricing call's random
//! stream (common random numbers), so the simulation noise is strongly
//! correlated across bumps and largely cancels in the differences.
//!
//! The closed-form Greeks in `mcpricer_models` serve as the ground truth
//! these estimates are tested against.

mod engine;
mod result;

pub(crate) use engine::estimate_greeks;
pub use result::GreeksResult;
