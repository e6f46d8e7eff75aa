//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The drift convention is risk-neutral `r` with no dividend yield, which
//! is exactly the convention of the Monte Carlo terminal-price kernel that
//! uses these prices as control-variate expectations.

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and Greeks for European options under
/// lognormal dynamics.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g. `f64`)
///
/// # Examples
/// ```
/// use mcpricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

/// Closed-form sensitivities of an option price.
///
/// Bundles the five first- and second-order Greeks computed by
/// [`BlackScholes::greeks`]. Field conventions match the finite-difference
/// estimates of the Monte Carlo engine: `theta` is the decay with respect
/// to the passage of time (usually negative).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T> {
    /// ∂V/∂S: sensitivity to the spot price.
    pub delta: T,
    /// ∂²V/∂S²: convexity in the spot price.
    pub gamma: T,
    /// ∂V/∂σ: sensitivity to volatility.
    pub vega: T,
    /// Time decay (negative of the forward-maturity derivative).
    pub theta: T,
    /// ∂V/∂r: sensitivity to the risk-free rate.
    pub rho: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, any sign)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Returns large positive/negative sentinels as expiry approaches zero
    /// so the CDF saturates to the correct intrinsic-value limit.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            let large = T::from(100.0).unwrap();
            return if self.spot > strike {
                large
            } else if self.spot < strike {
                -large
            } else {
                zero
            };
        }

        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return self.d1(strike, expiry);
        }

        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// At expiry (T ≈ 0) this returns the intrinsic value max(S - K, 0).
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            let intrinsic = self.spot - strike;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes the European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// At expiry (T ≈ 0) this returns the intrinsic value max(K - S, 0).
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            let intrinsic = strike - self.spot;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, is_call: bool) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            let one = T::one();
            let zero = T::zero();
            return if is_call {
                if self.spot > strike {
                    one
                } else {
                    zero
                }
            } else if self.spot < strike {
                -one
            } else {
                zero
            };
        }

        let n_d1 = norm_cdf(self.d1(strike, expiry));

        if is_call {
            n_d1
        } else {
            n_d1 - T::one()
        }
    }

    /// Computes Gamma (∂²V/∂S²), identical for calls and puts.
    ///
    /// Gamma = φ(d₁) / (S·σ·√T)
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        norm_pdf(d1) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Computes Vega (∂V/∂σ), identical for calls and puts.
    ///
    /// Vega = S·√T·φ(d₁)
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        self.spot * expiry.sqrt() * norm_pdf(d1)
    }

    /// Computes Theta, the time decay (usually negative).
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    #[inline]
    pub fn theta(&self, strike: T, expiry: T, is_call: bool) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let discount = (-self.rate * expiry).exp();
        let two = T::from(2.0).unwrap();

        let term1 = -(self.spot * self.volatility * norm_pdf(d1)) / (two * sqrt_t);

        if is_call {
            term1 - self.rate * strike * discount * norm_cdf(d2)
        } else {
            term1 + self.rate * strike * discount * norm_cdf(-d2)
        }
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, strike: T, expiry: T, is_call: bool) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        if is_call {
            strike * expiry * discount * norm_cdf(d2)
        } else {
            -strike * expiry * discount * norm_cdf(-d2)
        }
    }

    /// Computes all five Greeks in one bundle.
    ///
    /// # Examples
    /// ```
    /// use mcpricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let greeks = bs.greeks(100.0, 1.0, true);
    ///
    /// assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
    /// assert!(greeks.gamma > 0.0);
    /// ```
    pub fn greeks(&self, strike: T, expiry: T, is_call: bool) -> Greeks<T> {
        Greeks {
            delta: self.delta(strike, expiry, is_call),
            gamma: self.gamma(strike, expiry),
            vega: self.vega(strike, expiry),
            theta: self.theta(strike, expiry, is_call),
            rho: self.rho(strike, expiry, is_call),
        }
    }
}
