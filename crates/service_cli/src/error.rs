//! Error types for the bsmc CLI

use std::process::ExitCode;

use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid market or option parameters, or a numeric domain failure
    #[error("{kind}: {0}", kind = .0.kind())]
    Pricing(#[from] PricingError),

    /// Configuration could not be resolved
    #[error("Configuration error: {0}")]
    Config(ConfigError),

    /// Output could not be serialised
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process status for this error
    pub fn status(&self) -> u8 {
        match self {
            Self::Pricing(PricingError::InvalidParameter { .. }) => 3,
            Self::Pricing(PricingError::NumericDomain { .. }) => 4,
            Self::Config(_) => 5,
            Self::Json(_) => 6,
        }
    }

    /// Get exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        match e {
            // A sample count is a pricing input wherever it comes from
            ConfigError::InvalidPaths(n) => {
                Self::Pricing(PricingError::invalid("n_paths", n, "must be at least 1"))
            }
            other => Self::Config(other),
        }
    }
}

impl From<AnalyticalError> for CliError {
    fn from(e: AnalyticalError) -> Self {
        Self::Pricing(e.into())
    }
}
