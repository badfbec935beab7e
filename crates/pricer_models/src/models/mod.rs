//! Stochastic process models for Monte Carlo simulation.
//!
//! - `GeometricBrownianMotion`: exact terminal-price transform under
//!   risk-neutral GBM

pub mod gbm;

pub use gbm::GeometricBrownianMotion;
