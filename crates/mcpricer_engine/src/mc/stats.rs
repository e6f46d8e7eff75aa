//! Streaming statistics for Monte Carlo samples.
//!
//! Workers accumulate raw sums only; means, variances and covariances are
//! derived once from the merged totals. Merging is plain addition, so
//! combining per-worker partials in worker order reproduces the exact
//! result of a single sequential pass over the same streams.

/// Running-sum accumulator for paired (target, control) samples.
///
/// Tracks the six quantities needed for both the plain estimator and the
/// control-variate regression: `n`, `Σx`, `Σx²`, `Σy`, `Σy²`, `Σxy`, with
/// `x` the discounted target payoff and `y` the discounted control payoff.
/// Runs without a control variate leave the control sums at zero.
///
/// # Examples
///
/// ```rust
/// use mcpricer_engine::mc::PathSums;
///
/// let mut sums = PathSums::default();
/// sums.add_sample(1.0);
/// sums.add_sample(3.0);
///
/// assert_eq!(sums.count(), 2);
/// assert_eq!(sums.mean_target(), 2.0);
/// assert_eq!(sums.variance_target(), 2.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathSums {
    count: usize,
    sum_target: f64,
    sum_target_sq: f64,
    sum_control: f64,
    sum_control_sq: f64,
    sum_cross: f64,
}

impl PathSums {
    /// Accumulates one target-only sample.
    #[inline]
    pub fn add_sample(&mut self, target: f64) {
        self.count += 1;
        self.sum_target += target;
        self.sum_target_sq += target * target;
    }

    /// Accumulates one paired (target, control) sample.
    #[inline]
    pub fn add_paired(&mut self, target: f64, control: f64) {
        self.count += 1;
        self.sum_target += target;
        self.sum_target_sq += target * target;
        self.sum_control += control;
        self.sum_control_sq += control * control;
        self.sum_cross += target * control;
    }

    /// Merges another accumulator into this one.
    ///
    /// Addition of raw sums; associative up to floating-point rounding,
    /// which is why the engine fixes the merge order.
    #[inline]
    pub fn merge(&mut self, other: &PathSums) {
        self.count += other.count;
        self.sum_target += other.sum_target;
        self.sum_target_sq += other.sum_target_sq;
        self.sum_control += other.sum_control;
        self.sum_control_sq += other.sum_control_sq;
        self.sum_cross += other.sum_cross;
    }

    /// Returns the number of accumulated samples.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the sample mean of the target payoff.
    #[inline]
    pub fn mean_target(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum_target / self.count as f64
    }

    /// Returns the sample mean of the control payoff.
    #[inline]
    pub fn mean_control(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum_control / self.count as f64
    }

    /// Returns the unbiased sample variance of the target payoff.
    ///
    /// With fewer than two samples the variance is undefined and reported
    /// as `+∞`, propagating into an infinite standard error. Tiny negative
    /// values from catastrophic cancellation are clamped to zero.
    #[inline]
    pub fn variance_target(&self) -> f64 {
        variance_from_sums(self.count, self.sum_target, self.sum_target_sq)
    }

    /// Returns the unbiased sample variance of the control payoff.
    #[inline]
    pub fn variance_control(&self) -> f64 {
        variance_from_sums(self.count, self.sum_control, self.sum_control_sq)
    }

    /// Returns the unbiased sample covariance between target and control.
    ///
    /// Zero with fewer than two samples (callers guard the degenerate case
    /// before dividing by a variance).
    #[inline]
    pub fn covariance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let n = self.count as f64;
        let mean_t = self.sum_target / n;
        let mean_c = self.sum_control / n;
        (self.sum_cross - n * mean_t * mean_c) / (n - 1.0)
    }

    /// Returns the standard error of the target mean.
    ///
    /// `sqrt(variance / n)`; `+∞` with fewer than two samples.
    #[inline]
    pub fn std_error(&self) -> f64 {
        if self.count == 0 {
            return f64::INFINITY;
        }
        (self.variance_target() / self.count as f64).sqrt()
    }
}

#[inline]
fn variance_from_sums(count: usize, sum: f64, sum_sq: f64) -> f64 {
    if count < 2 {
        return f64::INFINITY;
    }
    let n = count as f64;
    let mean = sum / n;
    ((sum_sq - n * mean * mean) / (n - 1.0)).max(0.0)
}
