//! CLI error type and result alias.

use thiserror::Error;

/// Errors surfaced by the command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
    /// Model parameter rejected during validation.
    #[error("model error: {0}")]
    Model(#[from] gbm_models::ModelError),

    /// Simulation configuration rejected during validation.
    #[error("configuration error: {0}")]
    Config(#[from] gbm_kernel::ConfigError),

    /// Pricing input rejected during validation.
    #[error("pricing error: {0}")]
    Pricer(#[from] gbm_kernel::PricerError),

    /// Filesystem failure while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialisation failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used across the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
