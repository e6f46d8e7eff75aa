//! # Monte Carlo Pricing Kernel
//!
//! European option pricing by direct terminal-price sampling under
//! geometric Brownian motion, with antithetic sampling, a closed-form
//! control variate and deterministic parallel aggregation.
//!
//! ## Module Structure
//!
//! - [`config`]: pricing configuration, builder and validation
//! - [`error`]: configuration error type
//! - [`paths`]: GBM parameters and the terminal-price sampler
//! - [`payoff`]: European payoff evaluation
//! - [`stats`]: running-sum accumulator and merged statistics
//! - [`control`]: control-variate regression and degeneracy handling
//! - [`result`]: pricing result with confidence interval and diagnostics
//! - [`pricer`]: the [`MonteCarloPricer`] facade
//!
//! ## Estimator Conventions
//!
//! Every sample is discounted by `exp(-r·T)` before accumulation, so all
//! reported statistics are in price units. Antithetic pairs are folded into
//! one combined sample each; `samples == n_paths` in both sampling modes.
//!
//! ## Usage Example
//!
//! ```rust
//! use mcpricer_engine::mc::{MonteCarloPricer, PricingConfig};
//!
//! let pricer = MonteCarloPricer::with_seed(42);
//! let config = PricingConfig::builder()
//!     .n_paths(50_000)
//!     .use_control_variate(true)
//!     .control_strike(90.0)
//!     .build()
//!     .unwrap();
//!
//! let result = pricer.price_parallel(&config).unwrap();
//! assert!(result.control_variate_used);
//! ```

pub mod config;
pub mod control;
pub mod error;
pub mod paths;
pub mod payoff;
pub mod pricer;
pub mod result;
pub mod stats;

pub(crate) mod worker;

pub use config::{
    ControlType, OptionType, PricingConfig, PricingConfigBuilder, MAX_PATHS, MAX_WORKERS,
};
pub use control::{apply_control_variate, ControlAdjustment, MIN_CONTROL_VARIANCE};
pub use error::ConfigError;
pub use paths::{GbmParams, TerminalSimulator};
pub use payoff::PayoffParams;
pub use pricer::MonteCarloPricer;
pub use result::PricingResult;
pub use stats::PathSums;
