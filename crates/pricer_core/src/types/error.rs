//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter validation and pricing formulas
//! - `PricingResult`: Convenience alias for `Result<T, PricingError>`

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every public pricing operation validates its inputs up front, so
/// `InvalidParameter` is the error callers normally see. `NumericDomain`
/// surfaces from inside a formula and is only reachable through the
/// lower-level evaluators that skip the boundary checks.
///
/// # Variants
/// - `InvalidParameter`: A parameter violates its domain constraint
/// - `NumericDomain`: A formula would divide by zero or take the log of a
///   non-positive number
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid("volatility", 0.0, "must be positive");
/// assert_eq!(err.kind(), "InvalidParameter");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'volatility' = 0: must be positive"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A parameter failed validation at an operation boundary.
    #[error("Invalid parameter '{name}' = {value}: {constraint}")]
    InvalidParameter {
        /// Parameter name as it appears in the public API
        name: &'static str,
        /// Offending value, formatted for display
        value: String,
        /// The constraint that was violated
        constraint: &'static str,
    },

    /// A formula was evaluated outside its mathematical domain.
    #[error("Numeric domain error in {context}: {message}")]
    NumericDomain {
        /// Formula or term being evaluated (e.g. "d1")
        context: &'static str,
        /// Description of the violation
        message: String,
    },
}

impl PricingError {
    /// Builds an `InvalidParameter` error from any displayable value.
    pub fn invalid(
        name: &'static str,
        value: impl std::fmt::Display,
        constraint: &'static str,
    ) -> Self {
        PricingError::InvalidParameter {
            name,
            value: value.to_string(),
            constraint,
        }
    }

    /// Builds a `NumericDomain` error.
    pub fn domain(context: &'static str, message: impl Into<String>) -> Self {
        PricingError::NumericDomain {
            context,
            message: message.into(),
        }
    }

    /// Returns the error kind as reported to users.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::InvalidParameter { .. } => "InvalidParameter",
            PricingError::NumericDomain { .. } => "NumericDomainError",
        }
    }

    /// Returns the offending parameter name, if the error names one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            PricingError::InvalidParameter { name, .. } => Some(name),
            PricingError::NumericDomain { .. } => None,
        }
    }
}

/// Result alias for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = PricingError::invalid("spot", -100.0, "must be positive");
        assert_eq!(
            format!("{}", err),
            "Invalid parameter 'spot' = -100: must be positive"
        );
    }

    #[test]
    fn test_invalid_parameter_integer_value() {
        let err = PricingError::invalid("n_paths", 0usize, "must be at least 1");
        assert!(err.to_string().contains("'n_paths' = 0"));
    }

    #[test]
    fn test_numeric_domain_display() {
        let err = PricingError::domain("d1", "σ√t is zero");
        assert_eq!(
            format!("{}", err),
            "Numeric domain error in d1: σ√t is zero"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            PricingError::invalid("strike", 0.0, "must be positive").kind(),
            "InvalidParameter"
        );
        assert_eq!(
            PricingError::domain("ln(S/K)", "non-positive argument").kind(),
            "NumericDomainError"
        );
    }

    #[test]
    fn test_parameter_name() {
        let err = PricingError::invalid("maturity", 0.0, "must be positive");
        assert_eq!(err.parameter(), Some("maturity"));
        assert_eq!(PricingError::domain("d1", "x").parameter(), None);
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::invalid("volatility", 0.0, "must be positive");
        let _: &dyn std::error::Error = &err;
    }
}
