//! MCPricer CLI - Monte Carlo option pricing from the command line
//!
//! # Commands
//!
//! - `mcpricer price` - Price a European call or put with all engine options
//! - `mcpricer greeks` - Estimate Greeks and compare against closed form
//! - `mcpricer bench` - Throughput and variance-reduction benchmarks
//!
//! All diagnostics flow through `tracing`: set `RUST_LOG` for fine-grained
//! filtering, or pass `--verbose` to surface the engine's simulation logs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::bench::BenchArgs;
use commands::greeks::GreeksArgs;
use commands::price::PriceArgs;

/// Monte Carlo option pricer
#[derive(Parser)]
#[command(name = "mcpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option by Monte Carlo simulation
    Price(PriceArgs),

    /// Estimate Greeks and compare against the closed-form values
    Greeks(GreeksArgs),

    /// Measure pricing throughput and variance-reduction quality
    Bench(BenchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing: RUST_LOG wins, --verbose lowers the default floor
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Price(args) => commands::price::run(&args),
        Commands::Greeks(args) => commands::greeks::run(&args),
        Commands::Bench(args) => commands::bench::run(&args),
    }
}
