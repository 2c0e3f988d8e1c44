//! # GBM Models
//!
//! Asset price dynamics and closed-form reference prices for the Monte
//! Carlo toolkit.
//!
//! This crate provides:
//! - `GbmParams`: validated Geometric Brownian Motion parameters with the
//!   exact log-space transition and direct terminal-value draw
//! - Analytical Black-Scholes formulas for validating simulation output
//!
//! ## Design Principles
//!
//! - **Fail-fast validation**: malformed parameters are rejected at
//!   construction, so the simulation loops never see degenerate inputs
//! - **Plain `f64` arithmetic**: the simulation kernel works in double
//!   precision end to end

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod error;
pub mod models;

pub use error::ModelError;
pub use models::GbmParams;
