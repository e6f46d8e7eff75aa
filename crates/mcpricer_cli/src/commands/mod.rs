//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The market scenario
//! flags are shared by every subcommand via [`ScenarioArgs`].

pub mod bench;
pub mod greeks;
pub mod price;

use anyhow::Result;
use clap::Args;
use mcpricer_engine::mc::{MonteCarloPricer, PricingConfig, PricingConfigBuilder};

/// Market scenario and simulation size shared by every subcommand.
#[derive(Args, Clone, Debug)]
pub struct ScenarioArgs {
    /// Initial spot price
    #[arg(long, default_value_t = 100.0)]
    pub s0: f64,

    /// Option strike
    #[arg(short = 'k', long, default_value_t = 100.0)]
    pub strike: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, default_value_t = 0.05)]
    pub rate: f64,

    /// Annualised volatility
    #[arg(long, default_value_t = 0.2)]
    pub sigma: f64,

    /// Time to expiry in years
    #[arg(short, long, default_value_t = 1.0)]
    pub maturity: f64,

    /// Option type (call, put)
    #[arg(short = 't', long = "type", default_value = "call")]
    pub option_type: String,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long, default_value_t = 100_000)]
    pub paths: usize,
}

impl ScenarioArgs {
    /// Config builder pre-loaded with the scenario parameters.
    pub fn builder(&self) -> Result<PricingConfigBuilder> {
        Ok(PricingConfig::builder()
            .s0(self.s0)
            .strike(self.strike)
            .rate(self.rate)
            .sigma(self.sigma)
            .maturity(self.maturity)
            .option_type(self.option_type.parse()?)
            .n_paths(self.paths))
    }
}

/// Facade seeded from `--seed`, or from entropy when the flag is omitted.
pub(crate) fn make_pricer(seed: Option<u64>) -> MonteCarloPricer {
    match seed {
        Some(seed) => MonteCarloPricer::with_seed(seed),
        None => MonteCarloPricer::new(),
    }
}
