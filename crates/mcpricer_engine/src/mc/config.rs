//! Monte Carlo pricing configuration.
//!
//! This module provides the immutable per-call configuration for the pricing
//! engine, with builder-pattern construction and fail-fast validation.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 100_000_000;

/// Maximum number of worker threads allowed.
///
/// Requests above this limit are not an error: the engine falls back to
/// single-threaded execution and logs a warning.
pub const MAX_WORKERS: usize = 512;

/// European option kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Call option: pays max(S_T - K, 0).
    #[default]
    Call,
    /// Put option: pays max(K - S_T, 0).
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(Self::Call),
            "put" | "p" => Ok(Self::Put),
            _ => Err(ConfigError::UnknownOptionType(s.to_string())),
        }
    }
}

/// Control-variate option kind.
///
/// `Auto` defers to the target option type at resolution time, so a plain
/// control-variate run prices its own instrument family by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlType {
    /// Use a call option as the control.
    Call,
    /// Use a put option as the control.
    Put,
    /// Use the same kind as the target option.
    #[default]
    Auto,
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for ControlType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(Self::Call),
            "put" | "p" => Ok(Self::Put),
            "auto" => Ok(Self::Auto),
            _ => Err(ConfigError::UnknownOptionType(s.to_string())),
        }
    }
}

/// Monte Carlo pricing configuration.
///
/// Immutable per pricing call. Use [`PricingConfig::builder`] to construct
/// instances, or start from [`PricingConfig::default`] for the standard ATM
/// scenario (S0 = K = 100, r = 5%, σ = 20%, T = 1y, 100k paths, antithetic
/// sampling on).
///
/// # Examples
///
/// ```rust
/// use mcpricer_engine::mc::{OptionType, PricingConfig};
///
/// let config = PricingConfig::builder()
///     .s0(105.0)
///     .strike(100.0)
///     .n_paths(50_000)
///     .option_type(OptionType::Put)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 50_000);
/// assert_eq!(config.option_type(), OptionType::Put);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingConfig {
    /// Initial spot price (must be positive).
    s0: f64,
    /// Strike price (must be positive).
    strike: f64,
    /// Risk-free rate (annualised, any sign).
    rate: f64,
    /// Volatility (annualised, must be positive).
    sigma: f64,
    /// Time to maturity in years (must be positive).
    maturity: f64,
    /// Number of simulation paths.
    n_paths: usize,
    /// Option kind priced by the run.
    option_type: OptionType,
    /// Antithetic sampling: each draw Z also evaluates -Z, pair-averaged.
    use_antithetic: bool,
    /// Control-variate correction against a closed-form control option.
    use_control_variate: bool,
    /// Control strike; 0.0 selects the target strike.
    control_strike: f64,
    /// Control option kind; `Auto` selects the target kind.
    control_type: ControlType,
    /// Worker-thread count for parallel pricing; 0 selects all hardware threads.
    n_threads: usize,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            s0: 100.0,
            strike: 100.0,
            rate: 0.05,
            sigma: 0.2,
            maturity: 1.0,
            n_paths: 100_000,
            option_type: OptionType::Call,
            use_antithetic: true,
            use_control_variate: false,
            control_strike: 0.0,
            control_type: ControlType::Auto,
            n_threads: 0,
        }
    }
}

impl PricingConfig {
    /// Creates a new configuration builder seeded with the defaults.
    #[inline]
    pub fn builder() -> PricingConfigBuilder {
        PricingConfigBuilder::default()
    }

    /// Returns the initial spot price.
    #[inline]
    pub fn s0(&self) -> f64 {
        self.s0
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the option kind priced by the run.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns whether antithetic sampling is enabled.
    #[inline]
    pub fn use_antithetic(&self) -> bool {
        self.use_antithetic
    }

    /// Returns whether the control-variate correction is enabled.
    #[inline]
    pub fn use_control_variate(&self) -> bool {
        self.use_control_variate
    }

    /// Returns the raw control strike (0.0 meaning "use the target strike").
    #[inline]
    pub fn control_strike(&self) -> f64 {
        self.control_strike
    }

    /// Returns the raw control kind (`Auto` meaning "use the target kind").
    #[inline]
    pub fn control_type(&self) -> ControlType {
        self.control_type
    }

    /// Returns the requested worker-thread count (0 meaning "all hardware threads").
    #[inline]
    pub fn n_threads(&self) -> usize {
        self.n_threads
    }

    /// Resolves the effective control strike.
    ///
    /// The sentinel `0.0` selects the target strike, which together with
    /// `ControlType::Auto` turns the control into an exact copy of the
    /// target: the self-consistency sanity mode.
    #[inline]
    pub fn resolved_control_strike(&self) -> f64 {
        if self.control_strike == 0.0 {
            self.strike
        } else {
            self.control_strike
        }
    }

    /// Resolves the effective control option kind.
    #[inline]
    pub fn resolved_control_type(&self) -> OptionType {
        match self.control_type {
            ControlType::Call => OptionType::Call,
            ControlType::Put => OptionType::Put,
            ControlType::Auto => self.option_type,
        }
    }

    /// Returns the discount factor `exp(-r·T)` applied to every sample.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `s0`, `strike`, `sigma` or `maturity` is not a positive finite number
    /// - `control_strike` is negative or non-finite
    /// - `n_paths` is 0 or greater than [`MAX_PATHS`]
    ///
    /// The rate is deliberately unrestricted: negative rates are valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("s0", self.s0),
            ("strike", self.strike),
            ("sigma", self.sigma),
            ("maturity", self.maturity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidParameter {
                    name,
                    value: format!("must be a positive finite number, got {}", value),
                });
            }
        }

        if !self.rate.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "rate",
                value: format!("must be finite, got {}", self.rate),
            });
        }

        if !self.control_strike.is_finite() || self.control_strike < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "control_strike",
                value: format!(
                    "must be non-negative (0 selects the target strike), got {}",
                    self.control_strike
                ),
            });
        }

        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }

        Ok(())
    }

    /// Returns a copy with a replaced spot price, skipping revalidation.
    ///
    /// Used by the finite-difference Greeks engine, whose bump sizes keep
    /// every bumped value inside the validated domain.
    #[inline]
    pub(crate) fn with_s0(&self, s0: f64) -> Self {
        Self { s0, ..self.clone() }
    }

    /// Returns a copy with a replaced volatility, skipping revalidation.
    #[inline]
    pub(crate) fn with_sigma(&self, sigma: f64) -> Self {
        Self {
            sigma,
            ..self.clone()
        }
    }

    /// Returns a copy with a replaced maturity, skipping revalidation.
    #[inline]
    pub(crate) fn with_maturity(&self, maturity: f64) -> Self {
        Self {
            maturity,
            ..self.clone()
        }
    }

    /// Returns a copy with a replaced rate, skipping revalidation.
    #[inline]
    pub(crate) fn with_rate(&self, rate: f64) -> Self {
        Self {
            rate,
            ..self.clone()
        }
    }
}

/// Builder for [`PricingConfig`].
///
/// Starts from the default configuration; every setter overrides one field
/// and `build()` validates the assembled whole.
///
/// # Examples
///
/// ```rust
/// use mcpricer_engine::mc::PricingConfig;
///
/// let config = PricingConfig::builder()
///     .sigma(0.35)
///     .maturity(0.5)
///     .use_control_variate(true)
///     .control_strike(95.0)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.resolved_control_strike(), 95.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PricingConfigBuilder {
    config: PricingConfig,
}

impl PricingConfigBuilder {
    /// Sets the initial spot price.
    #[inline]
    pub fn s0(mut self, s0: f64) -> Self {
        self.config.s0 = s0;
        self
    }

    /// Sets the strike price.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.config.strike = strike;
        self
    }

    /// Sets the risk-free rate (any sign).
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.config.rate = rate;
        self
    }

    /// Sets the volatility.
    #[inline]
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.config.sigma = sigma;
        self
    }

    /// Sets the time to maturity in years.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.config.maturity = maturity;
        self
    }

    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.config.n_paths = n_paths;
        self
    }

    /// Sets the option kind.
    #[inline]
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.config.option_type = option_type;
        self
    }

    /// Enables or disables antithetic sampling.
    #[inline]
    pub fn use_antithetic(mut self, enabled: bool) -> Self {
        self.config.use_antithetic = enabled;
        self
    }

    /// Enables or disables the control-variate correction.
    #[inline]
    pub fn use_control_variate(mut self, enabled: bool) -> Self {
        self.config.use_control_variate = enabled;
        self
    }

    /// Sets the control strike (0.0 selects the target strike).
    #[inline]
    pub fn control_strike(mut self, control_strike: f64) -> Self {
        self.config.control_strike = control_strike;
        self
    }

    /// Sets the control option kind.
    #[inline]
    pub fn control_type(mut self, control_type: ControlType) -> Self {
        self.config.control_type = control_type;
        self
    }

    /// Sets the worker-thread count (0 selects all hardware threads).
    #[inline]
    pub fn n_threads(mut self, n_threads: usize) -> Self {
        self.config.n_threads = n_threads;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first offending field.
    pub fn build(self) -> Result<PricingConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PricingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.s0(), 100.0);
        assert_eq!(config.strike(), 100.0);
        assert_eq!(config.rate(), 0.05);
        assert_eq!(config.sigma(), 0.2);
        assert_eq!(config.maturity(), 1.0);
        assert_eq!(config.n_paths(), 100_000);
        assert_eq!(config.option_type(), OptionType::Call);
        assert!(config.use_antithetic());
        assert!(!config.use_control_variate());
        assert_eq!(config.n_threads(), 0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = PricingConfig::builder()
            .s0(110.0)
            .strike(95.0)
            .rate(-0.01)
            .sigma(0.3)
            .maturity(2.0)
            .n_paths(10_000)
            .option_type(OptionType::Put)
            .use_antithetic(false)
            .n_threads(4)
            .build()
            .unwrap();

        assert_eq!(config.s0(), 110.0);
        assert_eq!(config.strike(), 95.0);
        assert_eq!(config.rate(), -0.01);
        assert_eq!(config.option_type(), OptionType::Put);
        assert!(!config.use_antithetic());
        assert_eq!(config.n_threads(), 4);
    }

    #[test]
    fn test_validate_rejects_non_positive_market_params() {
        for (name, builder) in [
            ("s0", PricingConfig::builder().s0(0.0)),
            ("s0", PricingConfig::builder().s0(-100.0)),
            ("strike", PricingConfig::builder().strike(-1.0)),
            ("sigma", PricingConfig::builder().sigma(0.0)),
            ("maturity", PricingConfig::builder().maturity(-0.5)),
        ] {
            match builder.build() {
                Err(ConfigError::InvalidParameter { name: field, .. }) => {
                    assert_eq!(field, name);
                }
                other => panic!("Expected InvalidParameter for {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_nan() {
        assert!(PricingConfig::builder().sigma(f64::NAN).build().is_err());
        assert!(PricingConfig::builder().s0(f64::INFINITY).build().is_err());
        assert!(PricingConfig::builder().rate(f64::NAN).build().is_err());
    }

    #[test]
    fn test_validate_allows_negative_rate() {
        assert!(PricingConfig::builder().rate(-0.02).build().is_ok());
    }

    #[test]
    fn test_validate_path_count_bounds() {
        assert!(matches!(
            PricingConfig::builder().n_paths(0).build(),
            Err(ConfigError::InvalidPathCount(0))
        ));
        assert!(matches!(
            PricingConfig::builder().n_paths(MAX_PATHS + 1).build(),
            Err(ConfigError::InvalidPathCount(_))
        ));
        assert!(PricingConfig::builder().n_paths(1).build().is_ok());
        assert!(PricingConfig::builder().n_paths(MAX_PATHS).build().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_control_strike() {
        let result = PricingConfig::builder().control_strike(-5.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "control_strike",
                ..
            })
        ));
    }

    #[test]
    fn test_control_resolution_sentinels() {
        let config = PricingConfig::builder()
            .strike(120.0)
            .option_type(OptionType::Put)
            .build()
            .unwrap();

        // 0.0 strike sentinel and Auto kind resolve to the target
        assert_eq!(config.resolved_control_strike(), 120.0);
        assert_eq!(config.resolved_control_type(), OptionType::Put);
    }

    #[test]
    fn test_control_resolution_explicit() {
        let config = PricingConfig::builder()
            .strike(120.0)
            .control_strike(110.0)
            .control_type(ControlType::Call)
            .build()
            .unwrap();

        assert_eq!(config.resolved_control_strike(), 110.0);
        assert_eq!(config.resolved_control_type(), OptionType::Call);
    }

    #[test]
    fn test_discount_factor() {
        let config = PricingConfig::default();
        approx::assert_relative_eq!(
            config.discount_factor(),
            (-0.05_f64).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_option_type_from_str() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("c".parse::<OptionType>().unwrap(), OptionType::Call);
        assert!(matches!(
            "straddle".parse::<OptionType>(),
            Err(ConfigError::UnknownOptionType(_))
        ));
    }

    #[test]
    fn test_control_type_from_str() {
        assert_eq!("auto".parse::<ControlType>().unwrap(), ControlType::Auto);
        assert_eq!("Call".parse::<ControlType>().unwrap(), ControlType::Call);
        assert!("digital".parse::<ControlType>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in [OptionType::Call, OptionType::Put] {
            assert_eq!(kind.to_string().parse::<OptionType>().unwrap(), kind);
        }
        for kind in [ControlType::Call, ControlType::Put, ControlType::Auto] {
            assert_eq!(kind.to_string().parse::<ControlType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_bump_copies_preserve_other_fields() {
        let config = PricingConfig::builder()
            .n_paths(5_000)
            .use_control_variate(true)
            .build()
            .unwrap();

        let bumped = config.with_s0(101.0);
        assert_eq!(bumped.s0(), 101.0);
        assert_eq!(bumped.n_paths(), 5_000);
        assert!(bumped.use_control_variate());

        assert_eq!(config.with_sigma(0.25).sigma(), 0.25);
        assert_eq!(config.with_maturity(0.75).maturity(), 0.75);
        assert_eq!(config.with_rate(0.01).rate(), 0.01);
    }

    proptest! {
        #[test]
        fn prop_valid_market_params_always_build(
            s0 in 0.01_f64..1e6,
            strike in 0.01_f64..1e6,
            rate in -0.2_f64..0.2,
            sigma in 0.001_f64..3.0,
            maturity in 0.001_f64..30.0,
            n_paths in 1_usize..1_000_000,
        ) {
            let config = PricingConfig::builder()
                .s0(s0)
                .strike(strike)
                .rate(rate)
                .sigma(sigma)
                .maturity(maturity)
                .n_paths(n_paths)
                .build();
            prop_assert!(config.is_ok());
        }

        #[test]
        fn prop_non_positive_sigma_never_builds(sigma in -10.0_f64..=0.0) {
            prop_assert!(PricingConfig::builder().sigma(sigma).build().is_err());
        }
    }
}
