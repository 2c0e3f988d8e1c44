//! # GBM Kernel
//!
//! Monte Carlo simulation kernel for Geometric Brownian Motion.
//!
//! This crate provides:
//! - Seeded random number generation ([`rng::PathRng`])
//! - Batch path generation over a discretised horizon ([`mc::generate_paths`])
//! - Terminal-value pricing of European calls ([`mc::price_european_call`])
//!
//! The two simulation entry points are independent: pricing draws
//! terminal values directly instead of reusing generated paths, which
//! avoids the per-step work when only the maturity value matters.
//!
//! ## Randomness
//!
//! Every entry point takes `&mut PathRng` explicitly. Callers that need
//! reproducibility construct the generator with a seed; callers that
//! want fresh independent estimates per invocation use
//! [`rng::PathRng::from_entropy`].

#![warn(missing_docs)]

pub mod mc;
pub mod rng;

pub use mc::{
    generate_paths, price_european_call, ConfigError, PathSet, PricerError, PricingResult,
    SimConfig,
};
pub use rng::PathRng;
