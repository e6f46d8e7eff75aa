//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions under lognormal dynamics:
//! - Black-Scholes prices for calls and puts
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Standard normal distribution helpers

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
