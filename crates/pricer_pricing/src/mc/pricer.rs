//! Monte Carlo pricing engine.
//!
//! # Overview
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Seed resolution (configured seed, or fresh entropy per run)
//! 2. Terminal-price simulation (via [`simulate`](super::simulate))
//! 3. Payoff averaging and discounting (via [`estimate_call`](super::estimate_call))
//!
//! The pricer holds no mutable state: every call re-simulates from its seed,
//! so a seeded pricer returns the same estimate on every call.

use pricer_core::traits::CallPricer;
use pricer_core::types::{MarketParameters, OptionParameters, PricingResult};
use tracing::debug;

use super::config::MonteCarloConfig;
use super::estimator::{estimate_call, MonteCarloResult};
use super::simulator::{simulate, SimulatedPriceSet};
use crate::rng::PricerRng;

/// Monte Carlo pricing engine for European calls.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{MarketParameters, OptionParameters};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config);
///
/// let market = MarketParameters::new(100.0, 0.05, 0.2, 1.0).unwrap();
/// let option = OptionParameters::new(100.0).unwrap();
///
/// let result = pricer.price_call_with_stats(&market, &option).unwrap();
/// println!("Price: {} +/- {}", result.price, result.std_error);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    #[inline]
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Resolves the seed for one run.
    fn run_seed(&self) -> u64 {
        match self.config.seed() {
            Some(seed) => seed,
            None => {
                let seed = PricerRng::entropy_seed();
                debug!(seed, "no seed configured; drew run seed from entropy");
                seed
            }
        }
    }

    /// Simulates terminal prices for `market`.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from the simulator.
    pub fn simulate(&self, market: &MarketParameters) -> PricingResult<SimulatedPriceSet> {
        simulate(
            market,
            self.config.n_paths(),
            self.run_seed(),
            self.config.parallel(),
        )
    }

    /// Prices a European call, returning the estimate with its standard error.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::NumericDomain` if the estimate is not finite.
    pub fn price_call_with_stats(
        &self,
        market: &MarketParameters,
        option: &OptionParameters,
    ) -> PricingResult<MonteCarloResult> {
        let prices = self.simulate(market)?;
        let result = estimate_call(&prices, option, market)?;

        debug!(
            seed = prices.seed(),
            n_paths = result.n_paths,
            price = result.price,
            std_error = result.std_error,
            "priced European call"
        );

        Ok(result)
    }
}

impl CallPricer for MonteCarloPricer {
    fn price_call(
        &self,
        market: &MarketParameters,
        option: &OptionParameters,
    ) -> PricingResult<f64> {
        self.price_call_with_stats(market, option)
            .map(|result| result.price)
    }
}
