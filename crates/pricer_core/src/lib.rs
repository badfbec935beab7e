//! # pricer_core: Parameter Foundation for European Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Market parameter types: [`MarketParameters`], [`OptionParameters`] (`types::market`)
//! - Error types: [`PricingError`] (`types::error`)
//! - The pricing seam shared by the analytical and Monte Carlo layers:
//!   [`CallPricer`] (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{MarketParameters, OptionParameters, PricingError};
//!
//! let market = MarketParameters::new(100.0, 0.03, 0.4, 0.25).unwrap();
//! let option = OptionParameters::new(105.0).unwrap();
//!
//! assert_eq!(market.spot(), 100.0);
//! assert_eq!(option.strike(), 105.0);
//!
//! // Invalid inputs are rejected before any computation
//! let err = MarketParameters::new(100.0, 0.03, 0.0, 0.25).unwrap_err();
//! assert!(matches!(err, PricingError::InvalidParameter { name: "volatility", .. }));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `MarketParameters` and `OptionParameters`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;

pub use traits::CallPricer;
pub use types::{MarketParameters, OptionParameters, PricingError};
