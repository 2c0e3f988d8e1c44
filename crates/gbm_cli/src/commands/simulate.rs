//! Simulate command implementation
//!
//! Generates a batch of GBM trajectories, prints them to the console,
//! and writes them as delimited text for external plotting: one row per
//! time step, one column per path, no header row.

use std::fs::File;

use clap::Args;
use tracing::info;

use gbm_kernel::{generate_paths, PathRng, PathSet, SimConfig};
use gbm_models::GbmParams;

use crate::Result;

/// Arguments for the simulate command.
#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Initial spot price (S0)
    #[arg(long, default_value_t = 100.0)]
    pub spot: f64,

    /// Risk-free rate (annualised)
    #[arg(long, default_value_t = 0.05)]
    pub rate: f64,

    /// Volatility (annualised)
    #[arg(long, default_value_t = 0.2)]
    pub sigma: f64,

    /// Time to maturity in years
    #[arg(long, default_value_t = 1.0)]
    pub maturity: f64,

    /// Number of paths to simulate
    #[arg(long, default_value_t = 5)]
    pub num_paths: usize,

    /// Number of time steps per path
    #[arg(long, default_value_t = 50)]
    pub num_steps: usize,

    /// Seed for reproducible simulation (entropy if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output CSV file
    #[arg(short, long, default_value = "stock_paths.csv")]
    pub output: String,
}

/// Run the simulate command
pub fn run(args: &SimulateArgs) -> Result<()> {
    let params = GbmParams::new(args.spot, args.rate, args.sigma, args.maturity)?;

    let mut builder = SimConfig::builder()
        .n_paths(args.num_paths)
        .n_steps(args.num_steps);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    let mut rng = match config.seed() {
        Some(seed) => PathRng::from_seed(seed),
        None => PathRng::from_entropy(),
    };
    info!(
        "Simulating {} paths over {} steps (seed {})",
        config.n_paths(),
        config.n_steps(),
        rng.seed()
    );

    let paths = generate_paths(&mut rng, params, &config);

    println!("Simulated Stock Price Paths:");
    for (i, path) in paths.iter_paths().enumerate() {
        let line: Vec<String> = path.iter().map(|p| format!("{:.4}", p)).collect();
        println!("Path {}: {}", i + 1, line.join(" "));
    }

    let file = File::create(&args.output)?;
    write_paths_csv(file, &paths)?;
    println!("\nStock paths saved to '{}'.", args.output);

    info!("Simulation complete");
    Ok(())
}

/// Writes the path set as comma-delimited text, one row per time step
/// and one column per path, without a header row.
pub fn write_paths_csv<W: std::io::Write>(writer: W, paths: &PathSet) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for step in 0..paths.points_per_path() {
        let record: Vec<String> = (0..paths.n_paths())
            .map(|i| paths.path(i)[step].to_string())
            .collect();
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_layout() {
        let params = GbmParams::default();
        let config = SimConfig::builder().n_paths(3).n_steps(4).build().unwrap();
        let mut rng = PathRng::from_seed(42);
        let paths = generate_paths(&mut rng, params, &config);

        let mut buffer = Vec::new();
        write_paths_csv(&mut buffer, &paths).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let rows: Vec<&str> = text.lines().collect();

        // One row per time point, one column per path, no header
        assert_eq!(rows.len(), 5);
        for row in &rows {
            assert_eq!(row.split(',').count(), 3);
        }

        // The first row is the spot price for every path
        for field in rows[0].split(',') {
            assert_eq!(field.parse::<f64>().unwrap(), 100.0);
        }
    }

    #[test]
    fn test_csv_values_roundtrip() {
        let params = GbmParams::default();
        let config = SimConfig::builder().n_paths(2).n_steps(3).build().unwrap();
        let mut rng = PathRng::from_seed(7);
        let paths = generate_paths(&mut rng, params, &config);

        let mut buffer = Vec::new();
        write_paths_csv(&mut buffer, &paths).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        for (step, row) in text.lines().enumerate() {
            for (i, field) in row.split(',').enumerate() {
                let value: f64 = field.parse().unwrap();
                assert_eq!(value, paths.path(i)[step]);
            }
        }
    }
}
