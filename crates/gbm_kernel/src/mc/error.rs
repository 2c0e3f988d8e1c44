//! Error types for the simulation kernel.
//!
//! This module provides:
//! - `ConfigError`: Errors from simulation configuration validation
//! - `PricerError`: Errors from terminal-value pricing inputs

use thiserror::Error;

/// Simulation configuration errors.
///
/// Raised by [`SimConfigBuilder::build`](super::SimConfigBuilder::build)
/// so that the path generator never observes a zero step or path count
/// (which would otherwise divide by zero in the step size).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count of zero.
    #[error("number of paths must be at least 1")]
    ZeroPaths,

    /// Step count of zero.
    #[error("number of time steps must be at least 1")]
    ZeroSteps,
}

/// Terminal pricer input errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricerError {
    /// Simulation count of zero.
    #[error("number of simulations must be at least 1")]
    ZeroSimulations,

    /// Invalid strike price.
    #[error("invalid strike: K = {strike} (must be positive and finite)")]
    InvalidStrike {
        /// The rejected strike value
        strike: f64,
    },
}
