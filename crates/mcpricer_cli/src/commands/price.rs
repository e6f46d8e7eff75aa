//! Price command implementation
//!
//! Prices a European option through the Monte Carlo engine and reports the
//! estimate next to the closed-form value.

use anyhow::{bail, Result};
use clap::Args;
use tracing::info;

use mcpricer_engine::mc::ControlType;

use super::{make_pricer, ScenarioArgs};

/// Arguments for `mcpricer price`.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Disable antithetic variates
    #[arg(long)]
    no_antithetic: bool,

    /// Enable the control-variate estimator
    #[arg(long)]
    control_variate: bool,

    /// Control strike (0 = reuse the target strike)
    #[arg(long, default_value_t = 0.0)]
    control_strike: f64,

    /// Control option type (call, put, auto)
    #[arg(long, default_value = "auto")]
    control_type: String,

    /// Worker threads (0 = all cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Base seed for reproducible output (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Run on a single thread instead of the worker pool
    #[arg(long)]
    sequential: bool,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    format: String,
}

/// Run the price command
pub fn run(args: &PriceArgs) -> Result<()> {
    let config = args
        .scenario
        .builder()?
        .use_antithetic(!args.no_antithetic)
        .use_control_variate(args.control_variate)
        .control_strike(args.control_strike)
        .control_type(args.control_type.parse::<ControlType>()?)
        .n_threads(args.threads)
        .build()?;

    info!("Starting pricing run");
    info!("  Option: {} @ strike {}", config.option_type(), config.strike());
    info!("  Paths: {}", config.n_paths());
    info!("  Antithetic: {}", config.use_antithetic());
    info!("  Control variate: {}", config.use_control_variate());

    let pricer = make_pricer(args.seed);
    let result = if args.sequential {
        pricer.price(&config)?
    } else {
        pricer.price_parallel(&config)?
    };
    let analytical = pricer.analytical_price(&config)?;

    match args.format.as_str() {
        "json" => {
            let mut payload = serde_json::to_value(&result)?;
            payload["analytical"] = analytical.into();
            payload["base_seed"] = pricer.base_seed().into();
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        "table" => {
            println!();
            println!(
                "European {} | spot {} | strike {} | {} paths",
                config.option_type(),
                config.s0(),
                config.strike(),
                config.n_paths()
            );
            println!("------------------------------------------------");
            println!("{:<26} {:>20.6}", "Monte Carlo price", result.price);
            println!("{:<26} {:>20.6}", "Std error", result.std_error);
            println!(
                "{:<26} [{:.6}, {:.6}]",
                "95% confidence", result.ci_lower, result.ci_upper
            );
            println!("{:<26} {:>20.6}", "Analytical (BS)", analytical);
            println!(
                "{:<26} {:>20.6}",
                "Abs error",
                (result.price - analytical).abs()
            );
            if let Some(beta) = result.control_beta {
                println!("{:<26} {:>20.6}", "Control beta", beta);
                if let Some(vr) = result.variance_reduction_factor {
                    println!("{:<26} {:>19.2}x", "Variance reduction", vr);
                }
            }
            println!("{:<26} {:>20}", "Base seed", pricer.base_seed());
            println!("------------------------------------------------");
        }
        other => bail!("Unknown format: {}. Supported: table, json", other),
    }

    info!("Pricing complete");
    Ok(())
}
