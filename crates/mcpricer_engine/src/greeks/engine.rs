//! Central finite-difference Greeks estimation.
//!
//! The estimator is generic over the pricing function so the facade can
//! inject a closure that pins the call seed and worker count; the bumps
//! themselves are fixed engine constants.

use crate::mc::config::PricingConfig;
use crate::mc::error::ConfigError;

use super::result::GreeksResult;

/// Relative spot bump: 1% of S0.
const SPOT_BUMP_FRACTION: f64 = 0.01;
/// Absolute floor for the spot bump.
const MIN_SPOT_BUMP: f64 = 1e-8;
/// Absolute volatility bump cap: one vol point.
const VOL_BUMP: f64 = 0.01;
/// Absolute maturity bump cap: one trading day.
const MATURITY_BUMP: f64 = 1.0 / 252.0;
/// Absolute rate bump: one percentage point.
const RATE_BUMP: f64 = 0.01;

/// Estimates all five Greeks by central differences around `config`.
///
/// `price` evaluates one bumped configuration; the caller guarantees every
/// evaluation draws from the same random stream. Bumps near a domain
/// boundary are shrunk (σ/2, T/2) so both sides of each difference stay
/// inside the validated parameter domain.
///
/// Nine evaluations: base, S±h, σ±k, T±u, r±m.
pub(crate) fn estimate_greeks<F>(
    config: &PricingConfig,
    mut price: F,
) -> Result<GreeksResult, ConfigError>
where
    F: FnMut(&PricingConfig) -> Result<f64, ConfigError>,
{
    let spot_bump = (SPOT_BUMP_FRACTION * config.s0()).max(MIN_SPOT_BUMP);
    let vol_bump = VOL_BUMP.min(config.sigma() / 2.0);
    let maturity_bump = MATURITY_BUMP.min(config.maturity() / 2.0);

    let base = price(config)?;

    let spot_up = price(&config.with_s0(config.s0() + spot_bump))?;
    let spot_down = price(&config.with_s0(config.s0() - spot_bump))?;

    let vol_up = price(&config.with_sigma(config.sigma() + vol_bump))?;
    let vol_down = price(&config.with_sigma(config.sigma() - vol_bump))?;

    let maturity_up = price(&config.with_maturity(config.maturity() + maturity_bump))?;
    let maturity_down = price(&config.with_maturity(config.maturity() - maturity_bump))?;

    let rate_up = price(&config.with_rate(config.rate() + RATE_BUMP))?;
    let rate_down = price(&config.with_rate(config.rate() - RATE_BUMP))?;

    Ok(GreeksResult {
        delta: (spot_up - spot_down) / (2.0 * spot_bump),
        gamma: (spot_up - 2.0 * base + spot_down) / (spot_bump * spot_bump),
        vega: (vol_up - vol_down) / (2.0 * vol_bump),
        // Decay convention: negative of the forward-maturity derivative
        theta: -(maturity_up - maturity_down) / (2.0 * maturity_bump),
        rho: (rate_up - rate_down) / (2.0 * RATE_BUMP),
    })
}
