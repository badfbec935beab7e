//! Scalar entry points for European call pricing.
//!
//! Each function validates every argument before computing anything and
//! reports the first offending parameter, in argument order. Monte Carlo
//! entry points draw a fresh seed per call; see [`crate::mc`] for seeded runs.

use pricer_core::types::{
    validate_sample_count, MarketParameters, OptionParameters, PricingResult,
};
use pricer_models::analytical::{norm_cdf, BlackScholes};
use tracing::debug;

use crate::mc::{estimate_call, simulate};
use crate::rng::PricerRng;

fn fresh_seed() -> u64 {
    let seed = PricerRng::entropy_seed();
    debug!(seed, "drew run seed from entropy");
    seed
}

/// Simulates `n` terminal prices `S0·exp((r - σ²/2)t + σ√t·Z)`.
///
/// # Errors
///
/// `PricingError::InvalidParameter` for a non-positive spot, volatility or
/// maturity, a non-finite rate, or `n` outside `1..=MAX_SAMPLE_COUNT`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::simulate_terminal_prices;
///
/// let prices = simulate_terminal_prices(100.0, 0.03, 0.4, 0.25, 1).unwrap();
/// assert_eq!(prices.len(), 1);
/// assert!(prices[0] > 0.0);
///
/// assert!(simulate_terminal_prices(100.0, 0.03, 0.4, 0.25, 0).is_err());
/// ```
pub fn simulate_terminal_prices(
    spot: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    n: usize,
) -> PricingResult<Vec<f64>> {
    let market = MarketParameters::new(spot, rate, volatility, maturity)?;
    validate_sample_count(n)?;

    Ok(simulate(&market, n, fresh_seed(), true)?.into_vec())
}

/// Monte Carlo estimate `e^(-rt)·mean(max(S_i - K, 0))` over `n` samples.
///
/// # Errors
///
/// As [`simulate_terminal_prices`], plus a non-positive strike.
pub fn monte_carlo_call_price(
    spot: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    strike: f64,
    n: usize,
) -> PricingResult<f64> {
    let market = MarketParameters::new(spot, rate, volatility, maturity)?;
    let option = OptionParameters::new(strike)?;
    validate_sample_count(n)?;

    let prices = simulate(&market, n, fresh_seed(), true)?;
    Ok(estimate_call(&prices, &option, &market)?.price)
}

/// Black-Scholes-Merton price of a European call.
///
/// # Errors
///
/// `PricingError::InvalidParameter` on any invalid argument.
/// `PricingError::NumericDomain` when `r·t` or the discount factor
/// overflows; extreme volatility or moneyness alone stays finite.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::closed_form_call_price;
///
/// let price = closed_form_call_price(100.0, 0.05, 0.2, 1.0, 100.0).unwrap();
/// assert!((price - 10.4506).abs() < 1e-4);
///
/// let err = closed_form_call_price(100.0, 0.05, 0.0, 1.0, 100.0).unwrap_err();
/// assert_eq!(err.parameter(), Some("volatility"));
/// ```
pub fn closed_form_call_price(
    spot: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    strike: f64,
) -> PricingResult<f64> {
    let market = MarketParameters::new(spot, rate, volatility, maturity)?;
    let option = OptionParameters::new(strike)?;

    Ok(BlackScholes::from_market(&market).price_call(option.strike(), market.maturity())?)
}

/// Standard normal CDF Φ(x), in [0, 1] for every non-NaN `x`.
#[inline]
pub fn standard_normal_cdf(x: f64) -> f64 {
    norm_cdf(x)
}
