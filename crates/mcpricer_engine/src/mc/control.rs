//! Control-variate correction.
//!
//! The control variate is a second option priced on the same terminal
//! prices as the target, with a known closed-form expectation. Regressing
//! the target on the control and re-centring at the analytic value removes
//! the variance explained by the control:
//!
//! ```text
//! β      = Cov(target, control) / Var(control)
//! price  = mean_target + β·(E[control] − mean_control)
//! var'   = max(var_target − β²·var_control, 0)
//! ```
//!
//! Degeneracies are absorbed, never raised: a flat control (variance below
//! [`MIN_CONTROL_VARIANCE`]) or fewer than two samples clamp `β` to zero,
//! and a perfectly collinear control (adjusted variance exactly zero, as in
//! the self-control sanity mode) reports a variance-reduction factor of 1.0.

use super::stats::PathSums;

/// Control variances at or below this threshold are treated as degenerate.
pub const MIN_CONTROL_VARIANCE: f64 = 1e-16;

/// Outcome of the control-variate regression on merged sums.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlAdjustment {
    /// Regression coefficient β (0.0 when the control is degenerate).
    pub beta: f64,
    /// Corrected price estimate.
    pub price: f64,
    /// Standard error of the corrected estimate.
    pub std_error: f64,
    /// `se_raw / se_adjusted`; 1.0 whenever the ratio is undefined.
    pub variance_reduction_factor: f64,
    /// Discounted Monte Carlo mean of the control payoff.
    pub control_mean: f64,
}

/// Applies the control-variate correction to merged simulation sums.
///
/// `analytic_control` is the closed-form price of the control option under
/// the same market parameters and discounting as the simulation.
pub fn apply_control_variate(sums: &PathSums, analytic_control: f64) -> ControlAdjustment {
    let n = sums.count();
    let mean_target = sums.mean_target();
    let mean_control = sums.mean_control();
    let var_target = sums.variance_target();
    let var_control = sums.variance_control();

    let beta = if n < 2 || var_control <= MIN_CONTROL_VARIANCE {
        0.0
    } else {
        sums.covariance() / var_control
    };

    let price = mean_target + beta * (analytic_control - mean_control);

    let var_adjusted = (var_target - beta * beta * var_control).max(0.0);
    let std_error = if n == 0 {
        f64::INFINITY
    } else {
        (var_adjusted / n as f64).sqrt()
    };

    // The ratio is meaningless when the adjusted variance collapses to zero
    // (collinear control) or the raw variance is undefined (n < 2)
    let variance_reduction_factor = if var_adjusted > 0.0 && var_target.is_finite() {
        (var_target / var_adjusted).sqrt()
    } else {
        1.0
    };

    ControlAdjustment {
        beta,
        price,
        std_error,
        variance_reduction_factor,
        control_mean: mean_control,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn paired_sums(pairs: &[(f64, f64)]) -> PathSums {
        let mut sums = PathSums::default();
        for &(t, c) in pairs {
            sums.add_paired(t, c);
        }
        sums
    }

    #[test]
    fn test_identical_control_collapses_to_analytic() {
        // Self-control sanity mode: β is exactly 1 and the corrected price
        // is the analytic value
        let values = [3.0, 7.5, 1.2, 9.9, 4.4, 6.1];
        let sums = paired_sums(&values.map(|v| (v, v)));

        let adj = apply_control_variate(&sums, 5.0);
        assert_eq!(adj.beta, 1.0);
        assert_relative_eq!(adj.price, 5.0, epsilon = 1e-12);
        assert_eq!(adj.std_error, 0.0);
        assert_eq!(adj.variance_reduction_factor, 1.0);
    }

    #[test]
    fn test_flat_control_is_degenerate() {
        let sums = paired_sums(&[(1.0, 2.0), (3.0, 2.0), (5.0, 2.0), (7.0, 2.0)]);

        let adj = apply_control_variate(&sums, 2.5);
        assert_eq!(adj.beta, 0.0);
        // β = 0 leaves the plain estimator untouched
        assert_relative_eq!(adj.price, 4.0, epsilon = 1e-12);
        assert_relative_eq!(adj.std_error, sums.std_error(), epsilon = 1e-12);
        assert_eq!(adj.variance_reduction_factor, 1.0);
    }

    #[test]
    fn test_single_sample_is_degenerate() {
        let sums = paired_sums(&[(4.0, 3.0)]);

        let adj = apply_control_variate(&sums, 3.5);
        assert_eq!(adj.beta, 0.0);
        assert_relative_eq!(adj.price, 4.0, epsilon = 1e-12);
        assert!(adj.std_error.is_infinite());
        assert_eq!(adj.variance_reduction_factor, 1.0);
    }

    #[test]
    fn test_correlated_control_reduces_variance() {
        // Control tracks the target with independent wobble
        let pairs = [
            (1.0, 1.1),
            (2.0, 1.9),
            (3.0, 3.2),
            (4.0, 3.8),
            (5.0, 5.1),
            (6.0, 6.0),
        ];
        let sums = paired_sums(&pairs);

        let adj = apply_control_variate(&sums, 3.5);
        assert!(adj.beta > 0.5);
        assert!(adj.std_error < sums.std_error());
        assert!(adj.variance_reduction_factor > 1.0);
    }

    #[test]
    fn test_negatively_correlated_control_also_helps() {
        let pairs = [
            (1.0, 6.2),
            (2.0, 4.8),
            (3.0, 4.1),
            (4.0, 2.9),
            (5.0, 2.2),
            (6.0, 0.8),
        ];
        let sums = paired_sums(&pairs);

        let adj = apply_control_variate(&sums, 3.5);
        assert!(adj.beta < 0.0);
        assert!(adj.std_error < sums.std_error());
        assert!(adj.variance_reduction_factor > 1.0);
    }

    #[test]
    fn test_correction_direction() {
        // If the control underestimates its analytic value, a positive β
        // shifts the target price upward by β times the shortfall
        let pairs = [(10.0, 8.0), (12.0, 10.0), (14.0, 12.0)];
        let sums = paired_sums(&pairs);

        let analytic = 11.0; // control mean is 10.0, shortfall 1.0
        let adj = apply_control_variate(&sums, analytic);
        assert_relative_eq!(adj.beta, 1.0, epsilon = 1e-12);
        assert_relative_eq!(adj.price, 12.0 + 1.0, epsilon = 1e-12);
    }
}
