//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to analytical pricing models

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Constructor checks produce the `Invalid*` variants; `NumericDomain` is
/// raised when a formula is evaluated with terms that would divide by zero
/// or take the logarithm of a non-positive number.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive or non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Non-finite risk-free rate.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Formula evaluated outside its mathematical domain.
    #[error("Numeric domain error in {term}: {message}")]
    NumericDomain {
        /// Term of the formula being evaluated
        term: &'static str,
        /// Description of the violation
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        const POSITIVE: &str = "must be positive and finite";
        match err {
            AnalyticalError::InvalidVolatility { volatility } => {
                PricingError::invalid("volatility", volatility, POSITIVE)
            }
            AnalyticalError::InvalidSpot { spot } => PricingError::invalid("spot", spot, POSITIVE),
            AnalyticalError::InvalidRate { rate } => {
                PricingError::invalid("rate", rate, "must be finite")
            }
            AnalyticalError::NumericDomain { term, message } => PricingError::domain(term, message),
        }
    }
}
