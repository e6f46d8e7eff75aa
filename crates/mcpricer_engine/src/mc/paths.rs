//! Terminal-price simulation under geometric Brownian motion.
//!
//! European payoffs depend only on the terminal price, so the kernel samples
//! `S_T` directly in one exact step instead of walking a discretised path:
//!
//! ```text
//! S_T = S_0 · exp((r − σ²/2)·T + σ·√T·Z),   Z ~ N(0, 1)
//! ```
//!
//! The drift convention is risk-neutral `r` with no dividend yield, matching
//! the closed-form pricer in `mcpricer_models`.

use super::config::PricingConfig;

/// GBM model parameters for terminal-price simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price.
    pub spot: f64,
    /// Risk-free rate (annualised).
    pub rate: f64,
    /// Volatility (annualised).
    pub volatility: f64,
    /// Time to maturity in years.
    pub maturity: f64,
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

impl GbmParams {
    /// Extracts the GBM parameters from a validated pricing configuration.
    #[inline]
    pub fn from_config(config: &PricingConfig) -> Self {
        Self {
            spot: config.s0(),
            rate: config.rate(),
            volatility: config.sigma(),
            maturity: config.maturity(),
        }
    }
}

/// Terminal-price sampler with the deterministic drift terms precomputed.
///
/// Construction folds `(r − σ²/2)·T` and `σ√T` into two constants, so each
/// sample costs one multiply-add and one `exp`.
///
/// # Examples
///
/// ```rust
/// use mcpricer_engine::mc::{GbmParams, TerminalSimulator};
///
/// let sim = TerminalSimulator::new(GbmParams::default());
///
/// // Z = 0 lands on the median of the lognormal terminal distribution
/// let median = sim.terminal_price(0.0);
/// assert!((median - 100.0 * (0.05_f64 - 0.02).exp()).abs() < 1e-10);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TerminalSimulator {
    spot: f64,
    /// Precomputed `(r − σ²/2)·T`.
    log_drift: f64,
    /// Precomputed `σ·√T`.
    vol_sqrt_t: f64,
}

impl TerminalSimulator {
    /// Creates a simulator for the given GBM parameters.
    #[inline]
    pub fn new(params: GbmParams) -> Self {
        let vol_sqrt_t = params.volatility * params.maturity.sqrt();
        let log_drift =
            (params.rate - 0.5 * params.volatility * params.volatility) * params.maturity;

        Self {
            spot: params.spot,
            log_drift,
            vol_sqrt_t,
        }
    }

    /// Maps a standard normal draw to a terminal price.
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        self.spot * (self.log_drift + self.vol_sqrt_t * z).exp()
    }
}
