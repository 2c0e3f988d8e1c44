//! Payoff functions for terminal-value pricing.

/// European call payoff: max(S - K, 0).
///
/// # Examples
/// ```
/// use gbm_kernel::mc::call_payoff;
///
/// assert_eq!(call_payoff(110.0, 100.0), 10.0);
/// assert_eq!(call_payoff(90.0, 100.0), 0.0);
/// ```
#[inline]
pub fn call_payoff(terminal_price: f64, strike: f64) -> f64 {
    (terminal_price - strike).max(0.0)
}
