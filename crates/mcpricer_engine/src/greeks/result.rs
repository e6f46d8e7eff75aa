//! Greeks result type.

/// Finite-difference estimates of the five first- and second-order Greeks.
///
/// Sign conventions match the closed-form Greeks: `theta` is the time
/// decay, the negative of the forward-maturity derivative, and is usually
/// negative for vanilla options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    /// ∂V/∂S: sensitivity to the spot price.
    pub delta: f64,
    /// ∂²V/∂S²: convexity in the spot price.
    pub gamma: f64,
    /// ∂V/∂σ: sensitivity to volatility.
    pub vega: f64,
    /// Time decay (negative of the forward-maturity derivative).
    pub theta: f64,
    /// ∂V/∂r: sensitivity to the risk-free rate.
    pub rho: f64,
}
