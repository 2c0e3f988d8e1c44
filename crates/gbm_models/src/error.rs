//! Error types for model construction.
//!
//! This module provides:
//! - `ModelError`: Errors from parameter validation

use thiserror::Error;

/// Model parameter errors.
///
/// Raised by the validated constructors when a parameter falls outside
/// its admissible range. Each variant carries the offending value.
///
/// # Examples
/// ```
/// use gbm_models::ModelError;
///
/// let err = ModelError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Invalid spot price (must be positive and finite).
    #[error("invalid spot price: S = {spot} (must be positive and finite)")]
    InvalidSpot {
        /// The rejected spot price value
        spot: f64,
    },

    /// Invalid risk-free rate (must be finite).
    #[error("invalid risk-free rate: r = {rate} (must be finite)")]
    InvalidRate {
        /// The rejected rate value
        rate: f64,
    },

    /// Invalid volatility (must be non-negative and finite).
    #[error("invalid volatility: sigma = {volatility} (must be non-negative and finite)")]
    InvalidVolatility {
        /// The rejected volatility value
        volatility: f64,
    },

    /// Invalid maturity (must be positive and finite).
    #[error("invalid maturity: T = {maturity} (must be positive and finite)")]
    InvalidMaturity {
        /// The rejected maturity value
        maturity: f64,
    },
}
