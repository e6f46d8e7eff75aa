//! Worker-level simulation: share planning and the sampling loop.
//!
//! Every worker owns its RNG substream and a private accumulator; the only
//! cross-worker communication is the final merge of partials, performed by
//! the facade in worker order.

use crate::rng::EngineRng;

use super::config::PricingConfig;
use super::paths::{GbmParams, TerminalSimulator};
use super::payoff::PayoffParams;
use super::stats::PathSums;

/// Splits `n_paths` into contiguous per-worker shares.
///
/// Integer division with the remainder handed to the first workers, so the
/// shares differ by at most one and sum to `n_paths` exactly.
pub(crate) fn plan_shares(n_paths: usize, n_workers: usize) -> Vec<usize> {
    let base = n_paths / n_workers;
    let remainder = n_paths % n_workers;
    (0..n_workers)
        .map(|w| base + usize::from(w < remainder))
        .collect()
}

/// Immutable per-call simulation plan shared by all workers.
///
/// Captures everything a worker needs apart from its seed and share size:
/// the terminal-price sampler, the target payoff, the optional control
/// payoff (evaluated on the same terminal prices) and the discount factor
/// applied to every sample.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SimulationPlan {
    simulator: TerminalSimulator,
    target: PayoffParams,
    control: Option<PayoffParams>,
    use_antithetic: bool,
    discount: f64,
}

impl SimulationPlan {
    /// Builds the plan from a validated configuration, resolving the
    /// control parameters once up front.
    pub(crate) fn from_config(config: &PricingConfig) -> Self {
        let control = config.use_control_variate().then(|| {
            PayoffParams::new(
                config.resolved_control_type(),
                config.resolved_control_strike(),
            )
        });

        Self {
            simulator: TerminalSimulator::new(GbmParams::from_config(config)),
            target: PayoffParams::new(config.option_type(), config.strike()),
            control,
            use_antithetic: config.use_antithetic(),
            discount: config.discount_factor(),
        }
    }

    /// Runs one worker share of `n_samples` combined samples.
    ///
    /// In antithetic mode each loop iteration draws one normal `Z`,
    /// evaluates the payoff at both `Z` and `-Z` and folds the pair average
    /// into a single sample, so `n_samples` is the sample count in both
    /// modes. Control payoffs reuse the same terminal prices; the control
    /// consumes no extra draws.
    pub(crate) fn run_share(&self, seed: u64, n_samples: usize) -> PathSums {
        let mut rng = EngineRng::from_seed(seed);
        let mut sums = PathSums::default();

        for _ in 0..n_samples {
            let z = rng.gen_normal();

            if self.use_antithetic {
                let terminal_up = self.simulator.terminal_price(z);
                let terminal_down = self.simulator.terminal_price(-z);
                let target = 0.5
                    * (self.target.evaluate(terminal_up) + self.target.evaluate(terminal_down))
                    * self.discount;

                match self.control {
                    Some(control) => {
                        let control_sample = 0.5
                            * (control.evaluate(terminal_up) + control.evaluate(terminal_down))
                            * self.discount;
                        sums.add_paired(target, control_sample);
                    }
                    None => sums.add_sample(target),
                }
            } else {
                let terminal = self.simulator.terminal_price(z);
                let target = self.target.evaluate(terminal) * self.discount;

                match self.control {
                    Some(control) => {
                        sums.add_paired(target, control.evaluate(terminal) * self.discount);
                    }
                    None => sums.add_sample(target),
                }
            }
        }

        sums
    }
}
