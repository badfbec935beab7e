//! # Pricer Models (L2: Business Logic)
//!
//! Analytical formulas and the stochastic model behind Monte Carlo pricing.
//!
//! This crate provides:
//! - The standard normal CDF and PDF (`analytical::distributions`)
//! - The closed-form Black-Scholes-Merton evaluator (`analytical::black_scholes`)
//! - The GBM terminal-price transform (`models::gbm`)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** for the analytical formulas
//! - **Pure transforms**: the GBM model takes its randomness as input and
//!   applies the same formula to a scalar or a batch
//! - **Domain errors, not NaN**: every formula reports a typed error instead
//!   of propagating non-finite values

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod models;
