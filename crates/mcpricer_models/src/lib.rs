//! # MCPricer Models
//!
//! Closed-form analytics for European options under lognormal dynamics.
//!
//! This crate provides:
//! - Black-Scholes pricing for calls and puts
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Standard normal distribution helpers (CDF, PDF)
//!
//! The Monte Carlo engine uses these formulas both as ground truth in its
//! test suite and as the known expectation of a control variate, so the
//! drift/volatility conventions here (risk-neutral drift `r`, no dividend
//! yield) must match the simulation kernel exactly.
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: works with `f32` and `f64`
//! - **Numerical Stability**: erfc-based CDF, explicit expiry guards

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;

pub use analytical::{norm_cdf, norm_pdf, AnalyticalError, BlackScholes, Greeks};
