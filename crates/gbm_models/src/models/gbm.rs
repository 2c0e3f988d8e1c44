//! Geometric Brownian Motion (GBM) dynamics.
//!
//! The asset price follows the risk-neutral SDE:
//! ```text
//! dS = r * S * dt + sigma * S * dW
//! ```
//! where:
//! - S = asset price
//! - r = risk-free rate
//! - sigma = volatility
//! - dW = Wiener process increment
//!
//! ## Log-space formulation
//!
//! Simulation uses the exact solution rather than an Euler-Maruyama
//! discretisation:
//! ```text
//! S(t+dt) = S(t) * exp((r - 0.5*sigma^2)*dt + sigma*sqrt(dt)*Z)
//! ```
//! with Z ~ N(0, 1). The same solution evaluated at `dt = T` yields the
//! terminal price in a single draw, which is what the terminal-value
//! pricer uses.

use crate::error::ModelError;

/// GBM model parameters.
///
/// Immutable once constructed; shared by path simulation and terminal
/// pricing. The constructor validates every field so downstream loops
/// can assume well-formed inputs.
///
/// # Examples
/// ```
/// use gbm_models::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0).unwrap();
/// assert_eq!(params.spot, 100.0);
///
/// // Non-positive spot is rejected
/// assert!(GbmParams::new(0.0, 0.05, 0.2, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Initial spot price (S0)
    pub spot: f64,
    /// Risk-free rate (annualised)
    pub rate: f64,
    /// Volatility (annualised)
    pub volatility: f64,
    /// Time to maturity in years (T)
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Initial spot price (must be positive and finite)
    /// * `rate` - Risk-free rate (must be finite)
    /// * `volatility` - Volatility (must be non-negative and finite)
    /// * `maturity` - Time horizon in years (must be positive and finite)
    ///
    /// # Errors
    /// Returns the matching [`ModelError`] variant for the first
    /// parameter that fails validation.
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Result<Self, ModelError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(ModelError::InvalidSpot { spot });
        }
        if !rate.is_finite() {
            return Err(ModelError::InvalidRate { rate });
        }
        if !(volatility.is_finite() && volatility >= 0.0) {
            return Err(ModelError::InvalidVolatility { volatility });
        }
        if !(maturity.is_finite() && maturity > 0.0) {
            return Err(ModelError::InvalidMaturity { maturity });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
            maturity,
        })
    }

    /// Advances a price by one step of size `dt` using the exact
    /// log-space transition.
    ///
    /// # Arguments
    /// * `price` - Current price S(t)
    /// * `dt` - Step size in years
    /// * `z` - Standard-normal draw
    ///
    /// # Returns
    /// S(t + dt). Strictly positive for any finite `z` when `price` is
    /// positive.
    #[inline]
    pub fn step(&self, price: f64, dt: f64, z: f64) -> f64 {
        let drift = (self.rate - 0.5 * self.volatility * self.volatility) * dt;
        let diffusion = self.volatility * dt.sqrt() * z;
        price * (drift + diffusion).exp()
    }

    /// Draws the terminal price S(T) directly from one standard-normal
    /// variate, skipping intermediate steps.
    ///
    /// Equivalent to [`step`](Self::step) applied once with `dt = T`,
    /// which is exact under GBM.
    #[inline]
    pub fn terminal(&self, z: f64) -> f64 {
        self.step(self.spot, self.maturity, z)
    }

    /// Discount factor exp(-r*T) converting an expected payoff at
    /// maturity to present value.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}
