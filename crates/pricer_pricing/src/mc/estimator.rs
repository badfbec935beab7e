//! Discounted-payoff estimation from simulated terminal prices.

use pricer_core::types::{MarketParameters, OptionParameters, PricingError, PricingResult};

/// z-score of the two-sided 95% normal interval.
pub const Z_95: f64 = 1.96;

/// z-score of the two-sided 99% normal interval.
pub const Z_99: f64 = 2.576;

/// Monte Carlo price estimate with its sampling error.
///
/// `std_error` is the discounted sample standard deviation of the payoffs
/// divided by √n. With a single sample there is no dispersion to measure
/// and the standard error is reported as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonteCarloResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Number of samples behind the estimate.
    pub n_paths: usize,
}

impl MonteCarloResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        Z_95 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        Z_99 * self.std_error
    }

    /// Returns the interval `price ± z·std_error`.
    #[inline]
    pub fn interval(&self, z: f64) -> (f64, f64) {
        let half_width = z * self.std_error;
        (self.price - half_width, self.price + half_width)
    }

    /// Whether `value` lies inside `price ± z·std_error`.
    #[inline]
    pub fn contains(&self, value: f64, z: f64) -> bool {
        let (lo, hi) = self.interval(z);
        (lo..=hi).contains(&value)
    }
}

/// Estimates the call price as the discounted mean of `max(S - K, 0)`.
///
/// # Errors
///
/// `PricingError::InvalidParameter` on an empty sample.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{MarketParameters, OptionParameters};
/// use pricer_pricing::mc::estimate_call;
///
/// let market = MarketParameters::new(100.0, 0.0, 0.2, 1.0).unwrap();
/// let option = OptionParameters::new(100.0).unwrap();
///
/// let result = estimate_call(&[90.0, 110.0], &option, &market).unwrap();
/// assert_eq!(result.price, 5.0);
/// ```
pub fn estimate_call(
    terminal_prices: &[f64],
    option: &OptionParameters,
    market: &MarketParameters,
) -> PricingResult<MonteCarloResult> {
    let n = terminal_prices.len();
    if n == 0 {
        return Err(PricingError::invalid("n_paths", 0, "must be at least 1"));
    }

    let payoff_sum: f64 = terminal_prices
        .iter()
        .map(|&s| option.call_payoff(s))
        .sum();
    let mean = payoff_sum / n as f64;

    // Two-pass variance; n = 1 has no dispersion
    let variance = if n > 1 {
        terminal_prices
            .iter()
            .map(|&s| (option.call_payoff(s) - mean).powi(2))
            .sum::<f64>()
            / (n - 1) as f64
    } else {
        0.0
    };
    let std_error = (variance / n as f64).sqrt();

    let discount_factor = market.discount_factor();
    let result = MonteCarloResult {
        price: mean * discount_factor,
        std_error: std_error * discount_factor,
        n_paths: n,
    };

    if !result.price.is_finite() {
        return Err(PricingError::domain(
            "Monte Carlo estimate",
            format!("non-finite mean payoff over {n} samples"),
        ));
    }

    Ok(result)
}
