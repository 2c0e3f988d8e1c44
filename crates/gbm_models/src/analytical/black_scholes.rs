//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d1) - K·e^(-rT)·N(d2)
//! **Put Price**: P = K·e^(-rT)·N(-d2) - S·N(-d1)
//!
//! Where:
//! - d1 = (ln(S/K) + (r + sigma^2/2)T) / (sigma*sqrt(T))
//! - d2 = d1 - sigma*sqrt(T)

use super::distributions::norm_cdf;
use crate::error::ModelError;

/// Expiries below this threshold are treated as immediate exercise.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form prices under lognormal dynamics, used to
/// validate the Monte Carlo estimator and to report a reference value
/// alongside simulated prices.
///
/// # Examples
/// ```
/// use gbm_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (sigma)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `volatility` - Volatility (must be positive; the formula
    ///   degenerates at sigma = 0)
    ///
    /// # Errors
    /// - [`ModelError::InvalidSpot`] if spot is not positive and finite
    /// - [`ModelError::InvalidRate`] if rate is not finite
    /// - [`ModelError::InvalidVolatility`] if volatility is not positive
    ///   and finite
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, ModelError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(ModelError::InvalidSpot { spot });
        }
        if !rate.is_finite() {
            return Err(ModelError::InvalidRate { rate });
        }
        if !(volatility.is_finite() && volatility > 0.0) {
            return Err(ModelError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d1 = (ln(S/K) + (r + sigma^2/2)T) / (sigma*sqrt(T))
    ///
    /// At expiry the term diverges; a large finite value with the sign
    /// of the moneyness is returned instead.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return if self.spot > strike {
                100.0
            } else if self.spot < strike {
                -100.0
            } else {
                0.0
            };
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term: d2 = d1 - sigma*sqrt(T).
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return self.d1(strike, expiry);
        }
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European call price: C = S·N(d1) - K·e^(-rT)·N(d2).
    ///
    /// At expiry returns the intrinsic value max(S - K, 0).
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return (self.spot - strike).max(0.0);
        }
        let discount = (-self.rate * expiry).exp();
        self.spot * norm_cdf(self.d1(strike, expiry))
            - strike * discount * norm_cdf(self.d2(strike, expiry))
    }

    /// European put price: P = K·e^(-rT)·N(-d2) - S·N(-d1).
    ///
    /// At expiry returns the intrinsic value max(K - S, 0).
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return (strike - self.spot).max(0.0);
        }
        let discount = (-self.rate * expiry).exp();
        strike * discount * norm_cdf(-self.d2(strike, expiry))
            - self.spot * norm_cdf(-self.d1(strike, expiry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_bad_inputs() {
        assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
        assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
        assert!(BlackScholes::new(100.0, 0.05, -0.2).is_err());
        assert!(BlackScholes::new(100.0, f64::NAN, 0.2).is_err());
        assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    }

    #[test]
    fn test_d2_relationship() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        let d1 = bs.d1(110.0, 2.0);
        let d2 = bs.d2(110.0, 2.0);
        assert_relative_eq!(d2, d1 - 0.2 * 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_atm_call_reference_value() {
        // Hull's textbook case: S=100, K=100, r=5%, sigma=20%, T=1
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 1.0), 10.4506, epsilon = 1e-3);
    }

    #[test]
    fn test_put_call_parity() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        for strike in [80.0, 100.0, 120.0] {
            let call = bs.price_call(strike, 1.0);
            let put = bs.price_put(strike, 1.0);
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_call_price_bounds() {
        // max(S - K*e^(-rT), 0) <= C <= S
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        for strike in [50.0, 100.0, 150.0] {
            let call = bs.price_call(strike, 1.0);
            let lower = (100.0 - strike * (-0.05_f64).exp()).max(0.0);
            assert!(call >= lower - 1e-6);
            assert!(call <= 100.0);
        }
    }

    #[test]
    fn test_deep_moneyness_limits() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        // Deep ITM call converges to the discounted forward minus strike
        let deep_itm = bs.price_call(1.0, 1.0);
        assert_relative_eq!(deep_itm, 100.0 - (-0.05_f64).exp(), epsilon = 1e-3);
        // Deep OTM call is nearly worthless
        assert!(bs.price_call(1000.0, 1.0) < 1e-6);
    }

    #[test]
    fn test_expiry_returns_intrinsic() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        assert_eq!(bs.price_call(90.0, 0.0), 10.0);
        assert_eq!(bs.price_call(110.0, 0.0), 0.0);
        assert_eq!(bs.price_put(110.0, 0.0), 10.0);
    }
}
