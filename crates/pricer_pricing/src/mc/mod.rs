//! Monte Carlo pricing of European calls under GBM.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (n_paths, seed, parallel)
//! └── Orchestration
//!     ├── simulate()       terminal prices, chunked over rayon
//!     └── estimate_call()  discounted mean payoff + standard error
//!
//! convergence_study()      estimates at several n against the closed form
//! ```
//!
//! # Reproducibility
//!
//! Draws are generated in chunks of [`CHUNK_SIZE`]; chunk `i` of a run with
//! seed `s` always uses [`PricerRng::for_stream(s, i)`](crate::rng::PricerRng::for_stream).
//! Output therefore depends only on the seed and the sample count, never on
//! whether the run is serial or parallel.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::{MarketParameters, OptionParameters};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, Z_99};
//!
//! let market = MarketParameters::new(100.0, 0.05, 0.2, 1.0).unwrap();
//! let option = OptionParameters::new(100.0).unwrap();
//!
//! let pricer = MonteCarloPricer::new(
//!     MonteCarloConfig::builder()
//!         .n_paths(100_000)
//!         .seed(42)
//!         .parallel(true)
//!         .build()
//!         .unwrap(),
//! );
//!
//! let result = pricer.price_call_with_stats(&market, &option).unwrap();
//! let (lo, hi) = result.interval(Z_99);
//! assert!(lo <= result.price && result.price <= hi);
//! ```

mod config;
mod convergence;
mod estimator;
mod pricer;
mod simulator;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder};
pub use convergence::{convergence_study, ConvergencePoint, ConvergenceReport};
pub use estimator::{estimate_call, MonteCarloResult, Z_95, Z_99};
pub use pricer::MonteCarloPricer;
pub use simulator::{simulate, SimulatedPriceSet, CHUNK_SIZE};
