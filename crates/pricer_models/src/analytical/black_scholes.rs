//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! calls and puts, with the call Delta and Vega.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Domain
//!
//! d₁ divides by σ√T and takes ln(S/K). A zero or negative expiry and a
//! non-positive strike are reported as [`AnalyticalError::NumericDomain`]
//! rather than producing ±∞ or NaN.

use num_traits::Float;
use pricer_core::traits::CallPricer;
use pricer_core::types::{MarketParameters, OptionParameters, PricingResult};

use super::distributions::{lit, norm_cdf, norm_pdf};
use super::error::AnalyticalError;

#[inline]
fn report<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing for European options under lognormal
/// dynamics.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0).unwrap();
/// let put_price = bs.price_put(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, may be negative)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if !(spot > zero && spot.is_finite()) {
            return Err(AnalyticalError::InvalidSpot { spot: report(spot) });
        }

        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate: report(rate) });
        }

        if !(volatility > zero && volatility.is_finite()) {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: report(volatility),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// σ√T, rejecting a non-positive expiry.
    fn vol_sqrt_t(&self, expiry: T) -> Result<T, AnalyticalError> {
        if !(expiry > T::zero() && expiry.is_finite()) {
            return Err(AnalyticalError::NumericDomain {
                term: "d1",
                message: format!(
                    "σ√T must be positive, got time to maturity T = {}",
                    report(expiry)
                ),
            });
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        if vol_sqrt_t <= T::zero() {
            return Err(AnalyticalError::NumericDomain {
                term: "d1",
                message: "σ√T underflows to zero".to_string(),
            });
        }
        Ok(vol_sqrt_t)
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Evaluated as `(ln S − ln K + rT)/(σ√T) + σ√T/2`, so neither S/K nor σ²
    /// is formed. The only remaining overflow is `rT` itself, reported as a
    /// domain error.
    ///
    /// # Errors
    /// `AnalyticalError::NumericDomain` if `strike <= 0`, `expiry <= 0`, or
    /// the result is not finite.
    pub fn d1(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        if !(strike > T::zero() && strike.is_finite()) {
            return Err(AnalyticalError::NumericDomain {
                term: "ln(S/K)",
                message: format!("strike must be positive, got K = {}", report(strike)),
            });
        }

        let vol_sqrt_t = self.vol_sqrt_t(expiry)?;

        let log_moneyness = self.spot.ln() - strike.ln();
        let d1 = (log_moneyness + self.rate * expiry) / vol_sqrt_t
            + lit::<T>(0.5) * vol_sqrt_t;

        if !d1.is_finite() {
            return Err(AnalyticalError::NumericDomain {
                term: "d1",
                message: format!("d1 is not finite ({})", report(d1)),
            });
        }
        Ok(d1)
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    pub fn d2(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        Ok(self.d1(strike, expiry)? - self.vol_sqrt_t(expiry)?)
    }

    /// Computes the European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// The CDF approximation can leave a residue of order 1e-7·S below zero
    /// for deep out-of-the-money contracts; the result is clamped at zero.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0).unwrap();
    /// assert!((price - 10.4506).abs() < 1e-4);
    ///
    /// // Zero maturity is a domain error, not NaN
    /// assert!(bs.price_call(100.0, 0.0).is_err());
    /// ```
    pub fn price_call(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        let d1 = self.d1(strike, expiry)?;
        let d2 = self.d2(strike, expiry)?;
        let discount = (-self.rate * expiry).exp();

        let price = self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2);
        Self::finite("call price", price).map(|p| p.max(T::zero()))
    }

    /// Computes the European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    pub fn price_put(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        let d1 = self.d1(strike, expiry)?;
        let d2 = self.d2(strike, expiry)?;
        let discount = (-self.rate * expiry).exp();

        let price = strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1);
        Self::finite("put price", price).map(|p| p.max(T::zero()))
    }

    /// Computes the call Delta (∂C/∂S = N(d₁)).
    pub fn delta_call(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        Ok(norm_cdf(self.d1(strike, expiry)?))
    }

    /// Computes Vega (∂V/∂σ = S·√T·φ(d₁)), identical for calls and puts.
    ///
    /// Vega is non-negative, which makes the call price non-decreasing in
    /// volatility.
    pub fn vega(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        let d1 = self.d1(strike, expiry)?;
        Ok(self.spot * expiry.sqrt() * norm_pdf(d1))
    }

    fn finite(term: &'static str, value: T) -> Result<T, AnalyticalError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(AnalyticalError::NumericDomain {
                term,
                message: format!("result is not finite ({})", report(value)),
            })
        }
    }
}

impl BlackScholes<f64> {
    /// Builds the model from already-validated market parameters.
    pub fn from_market(market: &MarketParameters) -> Self {
        Self {
            spot: market.spot(),
            rate: market.rate(),
            volatility: market.volatility(),
        }
    }
}

/// Closed-form call pricer for the [`CallPricer`] seam.
///
/// # Examples
/// ```
/// use pricer_core::traits::CallPricer;
/// use pricer_core::types::{MarketParameters, OptionParameters};
/// use pricer_models::analytical::BlackScholesPricer;
///
/// let market = MarketParameters::new(100.0, 0.03, 0.4, 0.25).unwrap();
/// let option = OptionParameters::new(105.0).unwrap();
///
/// let price = BlackScholesPricer.price_call(&market, &option).unwrap();
/// assert!((price - 6.19785).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesPricer;

impl CallPricer for BlackScholesPricer {
    fn price_call(
        &self,
        market: &MarketParameters,
        option: &OptionParameters,
    ) -> PricingResult<f64> {
        BlackScholes::from_market(market)
            .price_call(option.strike(), market.maturity())
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::PricingError;

    fn atm_model() -> BlackScholes<f64> {
        BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap()
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = atm_model();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot() {
        match BlackScholes::new(-100.0_f64, 0.05, 0.2).unwrap_err() {
            AnalyticalError::InvalidSpot { spot } => assert_eq!(spot, -100.0),
            other => panic!("Expected InvalidSpot error, got {:?}", other),
        }
        assert!(BlackScholes::new(0.0_f64, 0.05, 0.2).is_err());
    }

    #[test]
    fn test_new_invalid_volatility() {
        match BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap_err() {
            AnalyticalError::InvalidVolatility { volatility } => assert_eq!(volatility, 0.0),
            other => panic!("Expected InvalidVolatility error, got {:?}", other),
        }
        assert!(BlackScholes::new(100.0_f64, 0.05, f64::NAN).is_err());
    }

    #[test]
    fn test_new_invalid_rate() {
        assert!(matches!(
            BlackScholes::new(100.0_f64, f64::INFINITY, 0.2),
            Err(AnalyticalError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(BlackScholes::new(100.0_f64, -0.02, 0.2).is_ok());
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T / 2
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.2).unwrap();
        assert_relative_eq!(bs.d1(100.0, 1.0).unwrap(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(bs.d2(100.0, 1.0).unwrap(), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_zero_expiry_is_domain_error() {
        let err = atm_model().d1(100.0, 0.0).unwrap_err();
        assert!(matches!(err, AnalyticalError::NumericDomain { term: "d1", .. }));
    }

    #[test]
    fn test_d1_non_positive_strike_is_domain_error() {
        for strike in [0.0, -5.0] {
            let err = atm_model().d1(strike, 1.0).unwrap_err();
            assert!(matches!(
                err,
                AnalyticalError::NumericDomain {
                    term: "ln(S/K)",
                    ..
                }
            ));
        }
    }

    // ==========================================================
    // Pricing Tests
    // ==========================================================

    #[test]
    fn test_d1_extreme_volatility_is_finite() {
        // σ² alone would overflow f64
        let bs = BlackScholes::new(100.0_f64, 0.05, 1e160).unwrap();
        let d1 = bs.d1(100.0, 1.0).unwrap();
        assert_relative_eq!(d1, 5e159, max_relative = 1e-12);
        assert_relative_eq!(bs.price_call(100.0, 1.0).unwrap(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_d1_extreme_moneyness_is_finite() {
        // S/K alone would overflow f64
        let bs = BlackScholes::new(1e300_f64, 0.0, 0.2).unwrap();
        let d1 = bs.d1(1e-300, 1.0).unwrap();
        assert!(d1.is_finite() && d1 > 0.0);
        assert_relative_eq!(bs.price_call(1e-300, 1.0).unwrap(), 1e300, max_relative = 1e-12);
    }

    #[test]
    fn test_call_reference_value() {
        // Hull, S=K=100, r=5%, σ=20%, T=1
        let price = atm_model().price_call(100.0, 1.0).unwrap();
        assert_relative_eq!(price, 10.450583572185572, epsilon = 1e-5);
    }

    #[test]
    fn test_call_short_dated_out_of_the_money() {
        let bs = BlackScholes::new(100.0_f64, 0.03, 0.4).unwrap();
        let price = bs.price_call(105.0, 0.25).unwrap();
        assert_relative_eq!(price, 6.197850036621901, epsilon = 1e-5);
    }

    #[test]
    fn test_put_reference_value() {
        let price = atm_model().price_put(100.0, 1.0).unwrap();
        assert_relative_eq!(price, 5.573526022256971, epsilon = 1e-5);
    }

    #[test]
    fn test_put_call_parity() {
        let bs = BlackScholes::new(100.0_f64, 0.03, 0.25).unwrap();
        for strike in [80.0, 95.0, 100.0, 110.0, 130.0] {
            let call = bs.price_call(strike, 0.75).unwrap();
            let put = bs.price_put(strike, 0.75).unwrap();
            let forward_value = 100.0 - strike * (-0.03_f64 * 0.75).exp();
            assert_relative_eq!(call - put, forward_value, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_call_zero_expiry_rejected() {
        let err = atm_model().price_call(100.0, 0.0).unwrap_err();
        let pricing: PricingError = err.into();
        assert_eq!(pricing.kind(), "NumericDomainError");
    }

    #[test]
    fn test_call_negative_expiry_rejected() {
        assert!(atm_model().price_call(100.0, -1.0).is_err());
        assert!(atm_model().price_call(100.0, f64::NAN).is_err());
    }

    #[test]
    fn test_call_deep_otm_non_negative() {
        let bs = BlackScholes::new(1.0_f64, 0.0, 0.05).unwrap();
        let price = bs.price_call(1000.0, 0.01).unwrap();
        assert!(price >= 0.0);
        assert!(price < 1e-6);
    }

    #[test]
    fn test_call_deep_itm_approaches_forward() {
        let bs = BlackScholes::new(1000.0_f64, 0.05, 0.1).unwrap();
        let price = bs.price_call(1.0, 1.0).unwrap();
        assert_relative_eq!(price, 1000.0 - (-0.05_f64).exp(), epsilon = 1e-3);
    }

    #[test]
    fn test_call_non_decreasing_in_volatility() {
        let mut previous = 0.0;
        for i in 1..=40 {
            let vol = 0.025 * i as f64;
            let price = BlackScholes::new(100.0_f64, 0.03, vol)
                .unwrap()
                .price_call(105.0, 0.25)
                .unwrap();
            assert!(price >= previous - 1e-4, "price fell at σ = {}", vol);
            previous = price;
        }
    }

    #[test]
    fn test_call_non_decreasing_in_spot() {
        let mut previous = 0.0;
        for i in 1..=60 {
            let spot = 50.0 + 2.0 * i as f64;
            let price = BlackScholes::new(spot, 0.03, 0.4)
                .unwrap()
                .price_call(105.0, 0.25)
                .unwrap();
            assert!(price >= previous - 1e-4, "price fell at S = {}", spot);
            previous = price;
        }
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_delta_call_reference_value() {
        let delta = atm_model().delta_call(100.0, 1.0).unwrap();
        assert_relative_eq!(delta, 0.6368306511756191, epsilon = 1e-6);
    }

    #[test]
    fn test_vega_reference_value() {
        let vega = atm_model().vega(100.0, 1.0).unwrap();
        assert_relative_eq!(vega, 37.52403469169379, epsilon = 1e-4);
    }

    #[test]
    fn test_vega_matches_finite_difference() {
        let h = 1e-3;
        let up = BlackScholes::new(100.0_f64, 0.05, 0.2 + h)
            .unwrap()
            .price_call(100.0, 1.0)
            .unwrap();
        let down = BlackScholes::new(100.0_f64, 0.05, 0.2 - h)
            .unwrap()
            .price_call(100.0, 1.0)
            .unwrap();
        let fd = (up - down) / (2.0 * h);
        assert_relative_eq!(fd, atm_model().vega(100.0, 1.0).unwrap(), epsilon = 1e-2);
    }

    // ==========================================================
    // CallPricer seam
    // ==========================================================

    #[test]
    fn test_pricer_matches_model() {
        let market = MarketParameters::new(100.0, 0.05, 0.2, 1.0).unwrap();
        let option = OptionParameters::new(100.0).unwrap();
        let via_trait = BlackScholesPricer.price_call(&market, &option).unwrap();
        let direct = atm_model().price_call(100.0, 1.0).unwrap();
        assert_eq!(via_trait, direct);
    }

    #[test]
    fn test_f32_pricing() {
        let bs = BlackScholes::new(100.0_f32, 0.05, 0.2).unwrap();
        let price = bs.price_call(100.0, 1.0).unwrap();
        assert!((price - 10.4506).abs() < 1e-2);
    }
}
