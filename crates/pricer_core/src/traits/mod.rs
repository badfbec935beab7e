//! Pricing seam shared by the analytical and Monte Carlo layers.
//!
//! Both evaluators compute the same theoretical quantity, so comparison code
//! can hold either behind [`CallPricer`] without knowing which layer
//! implements it.

use crate::types::{MarketParameters, OptionParameters, PricingResult};

/// A method for pricing a European call.
///
/// # Invariants
/// - The returned price is non-negative
/// - Implementations are pure with respect to their inputs; any randomness
///   is owned by the implementor's configuration
///
/// # Examples
/// ```
/// use pricer_core::traits::CallPricer;
/// use pricer_core::types::{MarketParameters, OptionParameters, PricingResult};
///
/// struct Intrinsic;
///
/// impl CallPricer for Intrinsic {
///     fn price_call(
///         &self,
///         market: &MarketParameters,
///         option: &OptionParameters,
///     ) -> PricingResult<f64> {
///         Ok(option.call_payoff(market.spot()))
///     }
/// }
///
/// let market = MarketParameters::new(110.0, 0.0, 0.2, 1.0).unwrap();
/// let option = OptionParameters::new(100.0).unwrap();
/// assert_eq!(Intrinsic.price_call(&market, &option).unwrap(), 10.0);
/// ```
pub trait CallPricer {
    /// Prices a European call on `market` with terms `option`.
    fn price_call(
        &self,
        market: &MarketParameters,
        option: &OptionParameters,
    ) -> PricingResult<f64>;
}
