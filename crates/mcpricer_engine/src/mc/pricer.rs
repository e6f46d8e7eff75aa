//! Monte Carlo pricing facade.
//!
//! [`MonteCarloPricer`] coordinates seed derivation, worker planning, the
//! simulation kernel, merging and the control-variate correction. It holds
//! no mutable cross-call state beyond an atomic call counter, so one facade
//! can serve concurrent pricing calls from multiple threads.
//!
//! # Stream Layout
//!
//! Every pricing call reserves a fresh call index from the counter and
//! derives `call_seed = split_seed(base_seed, index)`; worker `w` of that
//! call then draws from `split_seed(call_seed, w)`. Repeating a call on a
//! fresh facade with the same base seed and worker count replays the run
//! bit for bit; changing the worker count changes the stream layout, which
//! is statistically consistent rather than bitwise identical.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::{thread_rng, Rng};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, warn};

use mcpricer_models::BlackScholes;

use crate::greeks::{estimate_greeks, GreeksResult};
use crate::rng::split_seed;

use super::config::{OptionType, PricingConfig, MAX_WORKERS};
use super::control::apply_control_variate;
use super::error::ConfigError;
use super::result::PricingResult;
use super::stats::PathSums;
use super::worker::{plan_shares, SimulationPlan};

/// Monte Carlo pricing engine facade.
///
/// Construct with [`MonteCarloPricer::with_seed`] for reproducible runs or
/// [`MonteCarloPricer::new`] for an entropy-derived base seed. All pricing
/// methods take `&self`; an internal atomic counter gives every call its
/// own independent random stream.
///
/// # Examples
///
/// ```rust
/// use mcpricer_engine::mc::{MonteCarloPricer, PricingConfig};
///
/// let pricer = MonteCarloPricer::with_seed(42);
/// let config = PricingConfig::builder().n_paths(20_000).build().unwrap();
///
/// let result = pricer.price(&config).unwrap();
/// let reference = pricer.analytical_price(&config).unwrap();
/// assert!((result.price - reference).abs() < 5.0 * result.std_error);
/// ```
pub struct MonteCarloPricer {
    /// Base seed all per-call streams are derived from.
    base_seed: u64,
    /// Monotone call counter; each pricing call reserves one index.
    calls: AtomicU64,
}

impl Default for MonteCarloPricer {
    fn default() -> Self {
        Self::new()
    }
}

impl MonteCarloPricer {
    /// Creates a pricer with an entropy-derived base seed.
    ///
    /// Successive runs of the program produce different results; use
    /// [`MonteCarloPricer::with_seed`] when reproducibility matters.
    pub fn new() -> Self {
        Self::with_seed(thread_rng().gen())
    }

    /// Creates a pricer with a fixed base seed for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            base_seed: seed,
            calls: AtomicU64::new(0),
        }
    }

    /// Returns the base seed.
    #[inline]
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Computes the closed-form price for the configured option.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn analytical_price(&self, config: &PricingConfig) -> Result<f64, ConfigError> {
        config.validate()?;
        closed_form_price(config, config.option_type(), config.strike())
    }

    /// Prices the configured option single-threaded.
    ///
    /// One worker simulates every requested path from stream 0 of this
    /// call's seed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid. Validation
    /// runs before any simulation work; there are no partial results.
    pub fn price(&self, config: &PricingConfig) -> Result<PricingResult, ConfigError> {
        config.validate()?;
        self.price_with_seed(config, self.next_call_seed(), 1)
    }

    /// Prices the configured option across worker threads.
    ///
    /// The worker count comes from `config.n_threads()` (0 selects all
    /// hardware threads) and is capped at the path count. Requests above
    /// [`MAX_WORKERS`] and thread-pool construction failures fall back to
    /// single-threaded execution with a warning, never an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn price_parallel(&self, config: &PricingConfig) -> Result<PricingResult, ConfigError> {
        config.validate()?;
        let n_workers = self.resolve_workers(config);
        self.price_with_seed(config, self.next_call_seed(), n_workers)
    }

    /// Estimates all five Greeks by central finite differences.
    ///
    /// Every bumped revaluation reuses this call's seed (common random
    /// numbers), so the sampling noise largely cancels in the differences.
    /// The whole estimation counts as one pricing call.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn compute_greeks(
        &self,
        config: &PricingConfig,
        use_parallel: bool,
    ) -> Result<GreeksResult, ConfigError> {
        config.validate()?;

        let call_seed = self.next_call_seed();
        let n_workers = if use_parallel {
            self.resolve_workers(config)
        } else {
            1
        };

        estimate_greeks(config, |bumped| {
            self.price_with_seed(bumped, call_seed, n_workers)
                .map(|result| result.price)
        })
    }

    /// Reserves the next call index and derives its stream seed.
    fn next_call_seed(&self) -> u64 {
        let index = self.calls.fetch_add(1, Ordering::Relaxed);
        split_seed(self.base_seed, index)
    }

    /// Resolves the effective worker count for a validated configuration.
    fn resolve_workers(&self, config: &PricingConfig) -> usize {
        let requested = config.n_threads();
        let mut workers = if requested == 0 {
            num_cpus::get()
        } else {
            requested
        };

        if workers > MAX_WORKERS {
            warn!(
                requested = workers,
                max = MAX_WORKERS,
                "worker count above limit, falling back to single-threaded execution"
            );
            workers = 1;
        }

        // No worker may receive an empty share
        workers.max(1).min(config.n_paths())
    }

    /// Runs one pricing call with an already-reserved call seed.
    ///
    /// The caller has validated the configuration and resolved the worker
    /// count. Partials are merged in worker order, so a fixed (seed, worker
    /// count) replays bit for bit.
    fn price_with_seed(
        &self,
        config: &PricingConfig,
        call_seed: u64,
        n_workers: usize,
    ) -> Result<PricingResult, ConfigError> {
        let analytic_control = if config.use_control_variate() {
            Some(closed_form_price(
                config,
                config.resolved_control_type(),
                config.resolved_control_strike(),
            )?)
        } else {
            None
        };

        let plan = SimulationPlan::from_config(config);

        debug!(
            n_paths = config.n_paths(),
            n_workers,
            antithetic = config.use_antithetic(),
            control_variate = config.use_control_variate(),
            call_seed,
            "running terminal-price simulation"
        );

        let total = if n_workers == 1 {
            plan.run_share(split_seed(call_seed, 0), config.n_paths())
        } else {
            self.run_parallel(&plan, config.n_paths(), call_seed, n_workers)
        };

        Ok(match analytic_control {
            Some(analytic) => {
                let adjustment = apply_control_variate(&total, analytic);
                PricingResult::with_control(
                    adjustment.price,
                    adjustment.std_error,
                    total.count(),
                    adjustment.beta,
                    adjustment.control_mean,
                    analytic,
                    adjustment.variance_reduction_factor,
                )
            }
            None => PricingResult::plain(total.mean_target(), total.std_error(), total.count()),
        })
    }

    /// Executes worker shares on a dedicated pool and merges in worker order.
    fn run_parallel(
        &self,
        plan: &SimulationPlan,
        n_paths: usize,
        call_seed: u64,
        n_workers: usize,
    ) -> PathSums {
        let shares = plan_shares(n_paths, n_workers);

        let partials: Vec<PathSums> = match ThreadPoolBuilder::new().num_threads(n_workers).build()
        {
            Ok(pool) => pool.install(|| {
                shares
                    .par_iter()
                    .enumerate()
                    .map(|(w, &share)| plan.run_share(split_seed(call_seed, w as u64), share))
                    .collect()
            }),
            Err(err) => {
                warn!(
                    error = %err,
                    "thread pool construction failed, falling back to single-threaded execution"
                );
                return plan.run_share(split_seed(call_seed, 0), n_paths);
            }
        };

        // Indexed collect preserves worker order, keeping the merge
        // deterministic for a fixed (seed, worker count)
        let mut total = PathSums::default();
        for partial in &partials {
            total.merge(partial);
        }
        total
    }
}

/// Closed-form Black-Scholes price under the configuration's market data.
fn closed_form_price(
    config: &PricingConfig,
    kind: OptionType,
    strike: f64,
) -> Result<f64, ConfigError> {
    let bs = BlackScholes::new(config.s0(), config.rate(), config.sigma())?;
    Ok(match kind {
        OptionType::Call => bs.price_call(strike, config.maturity()),
        OptionType::Put => bs.price_put(strike, config.maturity()),
    })
}
