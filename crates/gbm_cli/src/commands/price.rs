//! Price command implementation
//!
//! Estimates the fair value of a European call by terminal-value Monte
//! Carlo sampling and reports it alongside the standard error and the
//! closed-form Black-Scholes reference.

use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::info;

use gbm_kernel::{price_european_call, PathRng, PricingResult};
use gbm_models::analytical::BlackScholes;
use gbm_models::GbmParams;

use crate::Result;

/// Output format for the pricing report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed console report
    Table,
    /// Pretty-printed JSON document
    Json,
}

/// Arguments for the price command.
#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Initial spot price (S0)
    #[arg(long, default_value_t = 100.0)]
    pub spot: f64,

    /// Strike price (K)
    #[arg(long, default_value_t = 100.0)]
    pub strike: f64,

    /// Risk-free rate (annualised)
    #[arg(long, default_value_t = 0.05)]
    pub rate: f64,

    /// Volatility (annualised)
    #[arg(long, default_value_t = 0.2)]
    pub sigma: f64,

    /// Time to maturity in years
    #[arg(long, default_value_t = 1.0)]
    pub maturity: f64,

    /// Number of Monte Carlo simulations
    #[arg(long, default_value_t = 100_000)]
    pub num_sims: usize,

    /// Seed for reproducible pricing (entropy if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// JSON payload for `--format json`.
#[derive(Debug, Serialize)]
struct PriceReport {
    params: GbmParams,
    strike: f64,
    num_sims: usize,
    seed: u64,
    result: PricingResult,
    confidence_95: f64,
    black_scholes: Option<f64>,
}

/// Run the price command
pub fn run(args: &PriceArgs) -> Result<()> {
    let params = GbmParams::new(args.spot, args.rate, args.sigma, args.maturity)?;

    let mut rng = match args.seed {
        Some(seed) => PathRng::from_seed(seed),
        None => PathRng::from_entropy(),
    };
    info!(
        "Pricing European call: {} simulations (seed {})",
        args.num_sims,
        rng.seed()
    );

    let result = price_european_call(&mut rng, params, args.strike, args.num_sims)?;

    // Closed-form reference; unavailable at zero volatility
    let reference = BlackScholes::new(args.spot, args.rate, args.sigma)
        .ok()
        .map(|bs| bs.price_call(args.strike, args.maturity));

    match args.format {
        OutputFormat::Table => print_report(&params, args, rng.seed(), result, reference),
        OutputFormat::Json => {
            let report = PriceReport {
                params,
                strike: args.strike,
                num_sims: args.num_sims,
                seed: rng.seed(),
                result,
                confidence_95: result.confidence_95(),
                black_scholes: reference,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    info!("Pricing complete");
    Ok(())
}

fn print_report(
    params: &GbmParams,
    args: &PriceArgs,
    seed: u64,
    result: PricingResult,
    reference: Option<f64>,
) {
    println!("\n==============================");
    println!(" Monte Carlo Option Pricing");
    println!("==============================");
    println!("Stock Price (S0):      {}", params.spot);
    println!("Strike Price (K):      {}", args.strike);
    println!("Risk-Free Rate (r):    {}", params.rate);
    println!("Volatility (sigma):    {}", params.volatility);
    println!("Time to Maturity (T):  {} years", params.maturity);
    println!("Simulations:           {}", args.num_sims);
    println!("Seed:                  {}", seed);
    println!("------------------------------");
    println!("Estimated Call Price:  ${:.4}", result.price);
    println!("Standard Error:        {:.4}", result.std_error);
    println!("95% CI Half-Width:     {:.4}", result.confidence_95());
    if let Some(bs) = reference {
        println!("Black-Scholes Ref:     ${:.4}", bs);
    }
    println!("==============================");
}
