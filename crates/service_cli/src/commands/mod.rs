//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands return their
//! stdout text; `main` prints it and maps errors to exit codes.

use clap::Args;
use pricer_core::types::{MarketParameters, OptionParameters};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
use pricer_pricing::rng::PricerRng;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

pub mod convergence;
pub mod price;
pub mod simulate;

/// Market inputs shared by every command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct MarketArgs {
    /// Spot price of the underlying
    #[arg(long, allow_negative_numbers = true)]
    pub spot: f64,

    /// Continuously compounded risk-free rate (may be negative)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Annualised volatility
    #[arg(long, visible_alias = "vol", allow_negative_numbers = true)]
    pub volatility: f64,

    /// Time to maturity in years
    #[arg(long, visible_alias = "expiry", allow_negative_numbers = true)]
    pub maturity: f64,
}

impl MarketArgs {
    /// Validate into market parameters
    pub fn to_market(&self) -> Result<MarketParameters> {
        Ok(MarketParameters::new(
            self.spot,
            self.rate,
            self.volatility,
            self.maturity,
        )?)
    }
}

/// Strike input for pricing commands
#[derive(Args, Debug, Clone, PartialEq)]
pub struct StrikeArgs {
    /// Strike price
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub strike: f64,
}

impl StrikeArgs {
    /// Validate into option parameters
    pub fn to_option(&self) -> Result<OptionParameters> {
        Ok(OptionParameters::new(self.strike)?)
    }
}

/// Resolves the run seed, drawing one from entropy when none is configured
pub(crate) fn resolve_seed(config: &CliConfig) -> u64 {
    match config.seed {
        Some(seed) => seed,
        None => {
            let seed = PricerRng::entropy_seed();
            info!(seed, "no seed configured; drew run seed from entropy");
            seed
        }
    }
}

/// Builds a seeded Monte Carlo engine from the resolved configuration
pub(crate) fn seeded_pricer(config: &CliConfig, seed: u64) -> Result<MonteCarloPricer> {
    let mc_config = MonteCarloConfig::builder()
        .n_paths(config.paths)
        .seed(seed)
        .parallel(config.parallel)
        .build()?;
    Ok(MonteCarloPricer::new(mc_config))
}
