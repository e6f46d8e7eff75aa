//! Bench command implementation
//!
//! Wall-clock benchmarks of the pricing facade: thread-scaling throughput
//! (paths/second and nanoseconds per path) and a four-way comparison of
//! the variance-reduction modes.

use std::time::Instant;

use anyhow::Result;
use clap::Args;
use tracing::info;

use mcpricer_engine::mc::{ControlType, MonteCarloPricer};

use super::ScenarioArgs;

/// Arguments for `mcpricer bench`.
#[derive(Args, Debug)]
pub struct BenchArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Worker counts to sweep (comma separated)
    #[arg(long, value_delimiter = ',', default_value = "1,2,4,8")]
    threads: Vec<usize>,

    /// Base seed for the benchmark runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Compare variance-reduction modes instead of thread scaling
    #[arg(long)]
    variance: bool,

    /// Control strike for the variance comparison (defaults to 95% of strike)
    #[arg(long)]
    control_strike: Option<f64>,
}

/// Run the bench command
pub fn run(args: &BenchArgs) -> Result<()> {
    if args.variance {
        run_variance_comparison(args)
    } else {
        run_thread_scaling(args)
    }
}

/// Paths-per-second sweep over worker counts.
fn run_thread_scaling(args: &BenchArgs) -> Result<()> {
    let n_paths = args.scenario.paths;
    info!("Thread-scaling benchmark over {} paths", n_paths);

    println!();
    println!("Thread scaling, {} paths per run", n_paths);
    println!("---------------------------------------------------------");
    println!(
        "{:>7} {:>14} {:>10} {:>14} {:>8}",
        "threads", "price", "secs", "paths/s", "ns/path"
    );
    println!("---------------------------------------------------------");

    for &n_threads in &args.threads {
        let config = args.scenario.builder()?.n_threads(n_threads).build()?;
        let pricer = MonteCarloPricer::with_seed(args.seed);

        // Unmeasured first call warms the allocator and thread pool
        pricer.price_parallel(&config)?;

        let start = Instant::now();
        let result = pricer.price_parallel(&config)?;
        let secs = start.elapsed().as_secs_f64();

        let paths_per_sec = n_paths as f64 / secs;
        let ns_per_path = secs * 1e9 / n_paths as f64;
        println!(
            "{:>7} {:>14.6} {:>10.4} {:>14.0} {:>8.1}",
            n_threads, result.price, secs, paths_per_sec, ns_per_path
        );
    }
    println!("---------------------------------------------------------");

    Ok(())
}

/// Standard / antithetic / control-variate / combined comparison.
fn run_variance_comparison(args: &BenchArgs) -> Result<()> {
    let control_strike = args.control_strike.unwrap_or(0.95 * args.scenario.strike);
    let n_paths = args.scenario.paths;
    info!("Variance-reduction comparison over {} paths", n_paths);

    let modes = [
        ("standard", false, false),
        ("antithetic", true, false),
        ("control variate", false, true),
        ("antithetic + cv", true, true),
    ];

    println!();
    println!(
        "Variance reduction, {} paths, control strike {:.2}",
        n_paths, control_strike
    );
    println!("----------------------------------------------------------------");
    println!(
        "{:<16} {:>12} {:>12} {:>9} {:>10}",
        "mode", "price", "std error", "se gain", "ms"
    );
    println!("----------------------------------------------------------------");

    let mut baseline_se = None;
    for (name, antithetic, control) in modes {
        let config = args
            .scenario
            .builder()?
            .use_antithetic(antithetic)
            .use_control_variate(control)
            .control_strike(control_strike)
            .control_type(ControlType::Auto)
            .build()?;
        let pricer = MonteCarloPricer::with_seed(args.seed);

        let start = Instant::now();
        let result = pricer.price_parallel(&config)?;
        let millis = start.elapsed().as_secs_f64() * 1e3;

        // Standard mode runs first and anchors the comparison
        let baseline = *baseline_se.get_or_insert(result.std_error);
        let se_gain = if result.std_error > 0.0 {
            baseline / result.std_error
        } else {
            f64::INFINITY
        };
        println!(
            "{:<16} {:>12.6} {:>12.6} {:>8.2}x {:>10.1}",
            name, result.price, result.std_error, se_gain, millis
        );
    }
    println!("----------------------------------------------------------------");

    Ok(())
}
