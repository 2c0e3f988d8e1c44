//! gbmc - Monte Carlo option pricing from the command line
//!
//! # Commands
//!
//! - `gbmc simulate` - Generate sample GBM price paths, print them, and
//!   export them as CSV for external plotting
//! - `gbmc price` - Estimate the fair value of a European call by
//!   terminal-value Monte Carlo sampling
//!
//! Both commands accept the full model parameter set as flags and
//! default to the canonical textbook scenario (S0=100, K=100, r=5%,
//! sigma=20%, T=1 year). Runs are seeded from entropy unless `--seed`
//! is given; either way the seed in effect is logged so any run can be
//! replayed.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// GBM Monte Carlo simulation and pricing CLI
#[derive(Parser)]
#[command(name = "gbmc")]
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
    /// Simulate sample price paths and export them as CSV
    Simulate(commands::simulate::SimulateArgs),

    /// Price a European call option by Monte Carlo
    Price(commands::price::PriceArgs),
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Simulate(args) => commands::simulate::run(&args),
        Commands::Price(args) => commands::price::run(&args),
    }
}
