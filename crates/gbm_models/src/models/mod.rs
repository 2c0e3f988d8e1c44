//! Stochastic dynamics for the simulated asset.
//!
//! The only model carried here is Geometric Brownian Motion, simulated
//! with its exact log-space solution rather than an Euler scheme, so the
//! discretisation introduces no bias at any step count.

pub mod gbm;

pub use gbm::GbmParams;
