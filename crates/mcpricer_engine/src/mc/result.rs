//! Pricing result types.

/// Normal quantile for the symmetric 95% confidence interval.
const Z_95: f64 = 1.96;

/// Result of a Monte Carlo pricing run.
///
/// All statistics are in discounted price units. `samples` counts combined
/// samples: with antithetic sampling each (Z, −Z) pair is folded into one
/// sample before entering the statistics, so `samples == n_paths` whether
/// pairing is on or off.
///
/// The control diagnostics are populated only when the run used a control
/// variate; otherwise they are `None` and `control_variate_used` is false.
///
/// # Examples
///
/// ```rust
/// use mcpricer_engine::mc::{MonteCarloPricer, PricingConfig};
///
/// let pricer = MonteCarloPricer::with_seed(42);
/// let result = pricer.price(&PricingConfig::default()).unwrap();
///
/// assert!(result.ci_lower <= result.price && result.price <= result.ci_upper);
/// assert_eq!(result.samples, 100_000);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Discounted price estimate.
    pub price: f64,
    /// Standard error of the estimate (`+∞` with fewer than two samples).
    pub std_error: f64,
    /// Lower bound of the 95% confidence interval.
    pub ci_lower: f64,
    /// Upper bound of the 95% confidence interval.
    pub ci_upper: f64,
    /// Number of combined samples entering the statistics.
    pub samples: usize,
    /// Whether a control-variate correction was applied.
    pub control_variate_used: bool,
    /// Regression coefficient β of the control-variate correction.
    pub control_beta: Option<f64>,
    /// Discounted Monte Carlo mean of the control payoff.
    pub control_payoff_mc: Option<f64>,
    /// Closed-form price of the control option.
    pub control_payoff_analytical: Option<f64>,
    /// `se_without_cv / se_with_cv` (1.0 when degenerate).
    pub variance_reduction_factor: Option<f64>,
}

impl PricingResult {
    /// Assembles a plain (no control variate) result.
    pub(crate) fn plain(price: f64, std_error: f64, samples: usize) -> Self {
        Self {
            price,
            std_error,
            ci_lower: price - Z_95 * std_error,
            ci_upper: price + Z_95 * std_error,
            samples,
            control_variate_used: false,
            control_beta: None,
            control_payoff_mc: None,
            control_payoff_analytical: None,
            variance_reduction_factor: None,
        }
    }

    /// Assembles a control-variate-corrected result.
    pub(crate) fn with_control(
        price: f64,
        std_error: f64,
        samples: usize,
        beta: f64,
        control_payoff_mc: f64,
        control_payoff_analytical: f64,
        variance_reduction_factor: f64,
    ) -> Self {
        Self {
            price,
            std_error,
            ci_lower: price - Z_95 * std_error,
            ci_upper: price + Z_95 * std_error,
            samples,
            control_variate_used: true,
            control_beta: Some(beta),
            control_payoff_mc: Some(control_payoff_mc),
            control_payoff_analytical: Some(control_payoff_analytical),
            variance_reduction_factor: Some(variance_reduction_factor),
        }
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        Z_95 * self.std_error
    }
}
