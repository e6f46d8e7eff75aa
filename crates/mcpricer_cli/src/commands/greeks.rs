//! Greeks command implementation
//!
//! Estimates the full sensitivity set by bumped revaluation on the Monte
//! Carlo engine and prints it next to the closed-form values.

use anyhow::{bail, Result};
use clap::Args;
use tracing::info;

use mcpricer_engine::mc::OptionType;
use mcpricer_models::BlackScholes;

use super::{make_pricer, ScenarioArgs};

/// Arguments for `mcpricer greeks`.
#[derive(Args, Debug)]
pub struct GreeksArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Worker threads (0 = all cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Base seed for reproducible output (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    format: String,
}

/// Run the greeks command
pub fn run(args: &GreeksArgs) -> Result<()> {
    let config = args.scenario.builder()?.n_threads(args.threads).build()?;
    let is_call = config.option_type() == OptionType::Call;

    info!("Estimating Greeks over {} paths", config.n_paths());

    let pricer = make_pricer(args.seed);
    let mc = pricer.compute_greeks(&config, true)?;

    let closed_form = BlackScholes::new(config.s0(), config.rate(), config.sigma())?
        .greeks(config.strike(), config.maturity(), is_call);

    match args.format.as_str() {
        "json" => {
            let payload = serde_json::json!({
                "option_type": config.option_type().to_string(),
                "paths": config.n_paths(),
                "base_seed": pricer.base_seed(),
                "monte_carlo": mc,
                "analytical": closed_form,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        "table" => {
            let rows = [
                ("delta", mc.delta, closed_form.delta),
                ("gamma", mc.gamma, closed_form.gamma),
                ("vega", mc.vega, closed_form.vega),
                ("theta", mc.theta, closed_form.theta),
                ("rho", mc.rho, closed_form.rho),
            ];

            println!();
            println!(
                "European {} Greeks, {} paths",
                config.option_type(),
                config.n_paths()
            );
            println!("-----------------------------------------------------");
            println!(
                "{:<8} {:>14} {:>14} {:>14}",
                "Greek", "Monte Carlo", "Analytical", "Abs diff"
            );
            println!("-----------------------------------------------------");
            for (name, estimate, reference) in rows {
                println!(
                    "{:<8} {:>14.6} {:>14.6} {:>14.6}",
                    name,
                    estimate,
                    reference,
                    (estimate - reference).abs()
                );
            }
            println!("-----------------------------------------------------");
        }
        other => bail!("Unknown format: {}. Supported: table, json", other),
    }

    Ok(())
}
