//! European payoff evaluation.
//!
//! Exact hockey-stick payoffs; the engine has no smoothing layer because no
//! gradient flows through the payoff (Greeks use finite differences with
//! common random numbers).

use super::config::OptionType;

/// Payoff parameters for a European option.
///
/// # Examples
///
/// ```rust
/// use mcpricer_engine::mc::PayoffParams;
///
/// let call = PayoffParams::call(100.0);
/// assert_eq!(call.evaluate(110.0), 10.0);
/// assert_eq!(call.evaluate(90.0), 0.0);
///
/// let put = PayoffParams::put(100.0);
/// assert_eq!(put.evaluate(90.0), 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PayoffParams {
    /// Strike price.
    pub strike: f64,
    /// Option kind.
    pub kind: OptionType,
}

impl PayoffParams {
    /// Creates payoff parameters for the given kind and strike.
    #[inline]
    pub fn new(kind: OptionType, strike: f64) -> Self {
        Self { strike, kind }
    }

    /// Creates call payoff parameters.
    #[inline]
    pub fn call(strike: f64) -> Self {
        Self::new(OptionType::Call, strike)
    }

    /// Creates put payoff parameters.
    #[inline]
    pub fn put(strike: f64) -> Self {
        Self::new(OptionType::Put, strike)
    }

    /// Evaluates the undiscounted payoff at a terminal price.
    #[inline]
    pub fn evaluate(&self, terminal: f64) -> f64 {
        match self.kind {
            OptionType::Call => (terminal - self.strike).max(0.0),
            OptionType::Put => (self.strike - terminal).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_call_payoff() {
        let payoff = PayoffParams::call(100.0);
        assert_eq!(payoff.evaluate(120.0), 20.0);
        assert_eq!(payoff.evaluate(100.0), 0.0);
        assert_eq!(payoff.evaluate(80.0), 0.0);
    }

    #[test]
    fn test_put_payoff() {
        let payoff = PayoffParams::put(100.0);
        assert_eq!(payoff.evaluate(80.0), 20.0);
        assert_eq!(payoff.evaluate(100.0), 0.0);
        assert_eq!(payoff.evaluate(120.0), 0.0);
    }

    #[test]
    fn test_constructors_agree() {
        assert_eq!(
            PayoffParams::call(95.0),
            PayoffParams::new(OptionType::Call, 95.0)
        );
        assert_eq!(
            PayoffParams::put(95.0),
            PayoffParams::new(OptionType::Put, 95.0)
        );
    }

    proptest! {
        #[test]
        fn prop_payoff_never_negative(
            strike in 0.01_f64..1e4,
            terminal in 0.0_f64..1e5,
        ) {
            prop_assert!(PayoffParams::call(strike).evaluate(terminal) >= 0.0);
            prop_assert!(PayoffParams::put(strike).evaluate(terminal) >= 0.0);
        }

        #[test]
        fn prop_call_put_decomposition(
            strike in 0.01_f64..1e4,
            terminal in 0.0_f64..1e5,
        ) {
            // max(S-K,0) - max(K-S,0) == S - K
            let call = PayoffParams::call(strike).evaluate(terminal);
            let put = PayoffParams::put(strike).evaluate(terminal);
            prop_assert!((call - put - (terminal - strike)).abs() < 1e-9);
        }
    }
}
