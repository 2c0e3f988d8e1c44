//! Terminal-value Monte Carlo pricing of European calls.
//!
//! Each trial draws one standard-normal variate and maps it straight to
//! the terminal price through the closed-form GBM solution at maturity,
//! skipping intermediate steps entirely. The estimator is the
//! discounted sample mean of the payoffs, unbiased for the risk-neutral
//! expectation and converging to the Black-Scholes price at rate
//! O(1/sqrt(n)).

use gbm_models::GbmParams;

use super::error::PricerError;
use super::payoff::call_payoff;
use crate::rng::PathRng;

/// Monte Carlo pricing result.
///
/// Contains the discounted price estimate and its standard error.
///
/// # Examples
/// ```
/// use gbm_kernel::PricingResult;
///
/// let result = PricingResult { price: 10.5, std_error: 0.05 };
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the option.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Prices a European call by direct terminal-value sampling.
///
/// For each of `n_sims` trials: draw Z ~ N(0,1), compute
/// `ST = S0 * exp((r - 0.5*sigma^2)*T + sigma*sqrt(T)*Z)`, take
/// payoff max(ST - K, 0). The result is `exp(-r*T)` times the sample
/// mean, with the standard error discounted alongside it.
///
/// Deliberately independent of [`generate_paths`](super::generate_paths):
/// sampling at maturity directly avoids the per-step work full
/// trajectories would spend.
///
/// # Arguments
/// * `rng` - Caller-owned generator (seeded or entropy)
/// * `params` - Validated GBM parameters
/// * `strike` - Strike price K (must be positive and finite)
/// * `n_sims` - Number of independent trials (at least 1)
///
/// # Errors
/// - [`PricerError::InvalidStrike`] for non-positive or non-finite K
/// - [`PricerError::ZeroSimulations`] for `n_sims == 0`
pub fn price_european_call(
    rng: &mut PathRng,
    params: GbmParams,
    strike: f64,
    n_sims: usize,
) -> Result<PricingResult, PricerError> {
    if !(strike.is_finite() && strike > 0.0) {
        return Err(PricerError::InvalidStrike { strike });
    }
    if n_sims == 0 {
        return Err(PricerError::ZeroSimulations);
    }

    let payoffs: Vec<f64> = (0..n_sims)
        .map(|_| call_payoff(params.terminal(rng.gen_normal()), strike))
        .collect();

    let sum: f64 = payoffs.iter().sum();
    let mean = sum / n_sims as f64;

    let std_error = if n_sims > 1 {
        let variance: f64 =
            payoffs.iter().map(|&p| (p - mean).powi(2)).sum::<f64>() / (n_sims - 1) as f64;
        (variance / n_sims as f64).sqrt()
    } else {
        0.0
    };

    let discount = params.discount_factor();
    Ok(PricingResult {
        price: mean * discount,
        std_error: std_error * discount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_price_is_positive_with_sensible_error() {
        let mut rng = PathRng::from_seed(42);
        let result = price_european_call(&mut rng, GbmParams::default(), 100.0, 10_000).unwrap();

        assert!(result.price > 0.0);
        assert!(result.std_error > 0.0);
        assert!(result.std_error < result.price * 0.1);
    }

    #[test]
    fn test_reproducibility() {
        let params = GbmParams::default();

        let mut rng1 = PathRng::from_seed(42);
        let mut rng2 = PathRng::from_seed(42);
        let result1 = price_european_call(&mut rng1, params, 100.0, 1_000).unwrap();
        let result2 = price_european_call(&mut rng2, params, 100.0, 1_000).unwrap();

        assert_eq!(result1, result2);
    }

    #[test]
    fn test_zero_volatility_is_discounted_intrinsic() {
        // sigma = 0 makes every draw identical, so the estimate is exact:
        // exp(-r*T) * max(S0*exp(r*T) - K, 0)
        let params = GbmParams::new(100.0, 0.05, 0.0, 1.0).unwrap();
        let mut rng = PathRng::from_seed(7);
        let result = price_european_call(&mut rng, params, 100.0, 500).unwrap();

        let expected = (-0.05_f64).exp() * (100.0 * (0.05_f64).exp() - 100.0);
        assert_relative_eq!(result.price, expected, epsilon = 1e-10);
        assert_relative_eq!(result.std_error, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_deep_out_of_the_money_is_worthless() {
        // Strike far above any reachable terminal price: every payoff is 0
        let mut rng = PathRng::from_seed(11);
        let result = price_european_call(&mut rng, GbmParams::default(), 1_000.0, 1_000).unwrap();

        assert_eq!(result.price, 0.0);
        assert_eq!(result.std_error, 0.0);
    }

    #[test]
    fn test_lower_strike_is_worth_more() {
        let params = GbmParams::default();
        let mut rng1 = PathRng::from_seed(42);
        let mut rng2 = PathRng::from_seed(42);

        let low = price_european_call(&mut rng1, params, 90.0, 20_000).unwrap();
        let high = price_european_call(&mut rng2, params, 110.0, 20_000).unwrap();
        assert!(low.price > high.price);
    }

    #[test]
    fn test_single_simulation_has_no_error_estimate() {
        let mut rng = PathRng::from_seed(1);
        let result = price_european_call(&mut rng, GbmParams::default(), 100.0, 1).unwrap();
        assert!(result.price >= 0.0);
        assert_eq!(result.std_error, 0.0);
    }

    #[test]
    fn test_invalid_strike_rejected() {
        let mut rng = PathRng::from_seed(1);
        let params = GbmParams::default();

        assert_eq!(
            price_european_call(&mut rng, params, 0.0, 100),
            Err(PricerError::InvalidStrike { strike: 0.0 })
        );
        assert!(price_european_call(&mut rng, params, -5.0, 100).is_err());
        assert!(price_european_call(&mut rng, params, f64::NAN, 100).is_err());
    }

    #[test]
    fn test_zero_simulations_rejected() {
        let mut rng = PathRng::from_seed(1);
        assert_eq!(
            price_european_call(&mut rng, GbmParams::default(), 100.0, 0),
            Err(PricerError::ZeroSimulations)
        );
    }

    #[test]
    fn test_confidence_interval_helpers() {
        let result = PricingResult {
            price: 10.0,
            std_error: 0.1,
        };
        assert_relative_eq!(result.confidence_95(), 0.196, epsilon = 1e-12);
        assert_relative_eq!(result.confidence_99(), 0.2576, epsilon = 1e-12);
    }

    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        /// The estimate is a discounted average of non-negative payoffs,
        /// so it can never go negative for any seed or strike.
        #[test]
        fn prop_price_non_negative(
            seed in any::<u64>(),
            strike in 1.0..300.0f64,
            sigma in 0.0..0.8f64,
        ) {
            let params = GbmParams::new(100.0, 0.05, sigma, 1.0).unwrap();
            let mut rng = PathRng::from_seed(seed);
            let result = price_european_call(&mut rng, params, strike, 200).unwrap();

            prop_assert!(result.price >= 0.0);
            prop_assert!(result.std_error >= 0.0);
            prop_assert!(result.price.is_finite());
        }
    }
}
