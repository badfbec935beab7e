//! Core parameter and error types.
//!
//! This module provides:
//! - `market`: Validated market and contract parameters
//! - `error`: Structured error types for pricing operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`MarketParameters`], [`OptionParameters`] from `market`
//! - [`PricingError`], [`PricingResult`] from `error`

pub mod error;
pub mod market;

pub use error::{PricingError, PricingResult};
pub use market::{validate_sample_count, MarketParameters, OptionParameters, MAX_SAMPLE_COUNT};
