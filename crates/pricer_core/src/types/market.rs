//! Validated market and contract parameters.
//!
//! [`MarketParameters`] carries the four scalars that drive the GBM model
//! and [`OptionParameters`] carries the contract terms. Both are immutable
//! once constructed and can only be built through validating constructors,
//! so every downstream formula may assume its preconditions hold.

use super::error::{PricingError, PricingResult};

const POSITIVE: &str = "must be positive and finite";
const FINITE: &str = "must be finite";

#[inline]
fn require_positive(name: &'static str, value: f64) -> PricingResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PricingError::invalid(name, value, POSITIVE))
    }
}

/// Market state for a single underlying under geometric Brownian motion.
///
/// # Invariants
/// - `spot > 0`
/// - `rate` finite (negative rates are allowed)
/// - `volatility > 0`
/// - `maturity > 0` (in years)
///
/// # Examples
/// ```
/// use pricer_core::types::MarketParameters;
///
/// let market = MarketParameters::new(100.0, -0.01, 0.2, 1.0).unwrap();
/// assert_eq!(market.rate(), -0.01);
/// assert!((market.discount_factor() - 0.01_f64.exp()).abs() < 1e-15);
///
/// assert!(MarketParameters::new(100.0, 0.05, 0.2, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketParameters {
    spot: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
}

impl MarketParameters {
    /// Creates validated market parameters.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (S₀)
    /// * `rate` - Continuously compounded risk-free rate (r), annualised
    /// * `volatility` - Lognormal volatility (σ), annualised
    /// * `maturity` - Time to maturity in years (t)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending field.
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> PricingResult<Self> {
        let spot = require_positive("spot", spot)?;
        if !rate.is_finite() {
            return Err(PricingError::invalid("rate", rate, FINITE));
        }
        let volatility = require_positive("volatility", volatility)?;
        let maturity = require_positive("maturity", maturity)?;

        Ok(Self {
            spot,
            rate,
            volatility,
            maturity,
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

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Risk-neutral discount factor e^(−r·t).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}

/// Contract terms of a European call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionParameters {
    strike: f64,
}

impl OptionParameters {
    /// Creates validated option parameters.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `strike` is not positive and finite.
    pub fn new(strike: f64) -> PricingResult<Self> {
        Ok(Self {
            strike: require_positive("strike", strike)?,
        })
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Call payoff max(S − K, 0) at terminal price `terminal`.
    #[inline]
    pub fn call_payoff(&self, terminal: f64) -> f64 {
        (terminal - self.strike).max(0.0)
    }
}

/// Largest accepted Monte Carlo sample count (2^30).
///
/// Samples are materialised as one `f64` buffer, so this caps a single run
/// at 8 GiB of terminal prices.
pub const MAX_SAMPLE_COUNT: usize = 1 << 30;

/// Validates a Monte Carlo sample count.
///
/// # Errors
/// `PricingError::InvalidParameter` if `n < 1` or `n > MAX_SAMPLE_COUNT`.
pub fn validate_sample_count(n: usize) -> PricingResult<usize> {
    if n == 0 {
        return Err(PricingError::invalid("n_paths", n, "must be at least 1"));
    }
    if n > MAX_SAMPLE_COUNT {
        return Err(PricingError::invalid("n_paths", n, "must be at most 2^30"));
    }
    Ok(n)
}
