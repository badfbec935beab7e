//! # Pricing Engine (Layer 3)
//!
//! Monte Carlo valuation of European calls under geometric Brownian motion,
//! cross-checked against the Black-Scholes closed form from `pricer_models`.
//!
//! ## Modules
//!
//! - [`rng`]: seeded generator with per-chunk streams
//! - [`mc`]: simulator, estimator, seeded engine and convergence study
//! - [`european`]: scalar-argument entry points that validate their inputs
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::{closed_form_call_price, monte_carlo_call_price};
//!
//! let exact = closed_form_call_price(100.0, 0.03, 0.4, 0.25, 105.0).unwrap();
//! let estimate = monte_carlo_call_price(100.0, 0.03, 0.4, 0.25, 105.0, 200_000).unwrap();
//!
//! assert!((exact - 6.19785).abs() < 1e-4);
//! assert!((estimate - exact).abs() < 0.5);
//! ```
//!
//! ## Seeding
//!
//! The scalar entry points seed every call from OS entropy and log the seed
//! at `debug` level. Use [`mc::MonteCarloPricer`] with a configured seed for
//! reproducible runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod european;
pub mod mc;
pub mod rng;

pub use european::{
    closed_form_call_price, monte_carlo_call_price, simulate_terminal_prices,
    standard_normal_cdf,
};
