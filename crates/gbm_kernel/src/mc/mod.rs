//! Monte Carlo simulation and pricing.
//!
//! The module splits into two independent operations that share only
//! the model parameters:
//! - [`generate_paths`]: full discretised trajectories for export and
//!   visualisation
//! - [`price_european_call`]: terminal-value sampling with discounted
//!   payoff aggregation
//!
//! Simulation settings go through [`SimConfig`], whose builder rejects
//! degenerate values (zero paths or steps) before any simulation runs.

pub mod config;
pub mod error;
pub mod paths;
pub mod payoff;
pub mod pricer;

pub use config::{SimConfig, SimConfigBuilder};
pub use error::{ConfigError, PricerError};
pub use paths::{generate_paths, PathSet};
pub use payoff::call_payoff;
pub use pricer::{price_european_call, PricingResult};
