//! CLI configuration management
//!
//! Resolves run settings from CLI arguments, environment variables and an
//! optional TOML file.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`BSMC_*`, read by clap)
//! 3. Config file (`--config <FILE>`)
//! 4. Default values

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid path count: {0}. Must be at least 1")]
    InvalidPaths(usize),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare numbers, one per line
    #[default]
    Plain,
    /// Pretty-printed JSON
    Json,
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Monte Carlo sample count
    pub paths: usize,
    /// Run seed; drawn from entropy per run when absent
    pub seed: Option<u64>,
    /// Simulate chunks on the rayon pool
    pub parallel: bool,
    /// Log level
    pub log_level: LogLevel,
    /// Output format
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            paths: 100_000,
            seed: None,
            parallel: true,
            log_level: LogLevel::Warn,
            format: OutputFormat::Plain,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths == 0 {
            return Err(ConfigError::InvalidPaths(self.paths));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(paths) = cli.paths {
            self.paths = paths;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(parallel) = cli.parallel {
            self.parallel = parallel;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
    }
}

/// Overrides collected from the command line and `BSMC_*` variables
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Sample count override
    pub paths: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Parallel override
    pub parallel: Option<bool>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Raise the log level to debug unless one is given
    pub verbose: bool,
    /// Output format override
    pub format: Option<OutputFormat>,
}

/// Build configuration from all sources
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.paths, 100_000);
        assert_eq!(config.seed, None);
        assert!(config.parallel);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Plain);
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            paths = 250000
            seed = 42
            parallel = false
            log_level = "debug"
            format = "json"
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.paths, 250_000);
        assert_eq!(config.seed, Some(42));
        assert!(!config.parallel);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("seed = 7").unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.paths, 100_000);
        assert!(config.parallel);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<CliConfig>("n_paths = 10").is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(toml::from_str::<CliConfig>(r#"log_level = "loud""#).is_err());
    }

    #[test]
    fn test_validate_paths() {
        let mut config = CliConfig::default();
        config.paths = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPaths(0))));

        config.paths = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig {
            seed: Some(1),
            ..Default::default()
        };
        let cli = CliArgs {
            paths: Some(5_000),
            parallel: Some(false),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };

        config.merge_with_cli(&cli);

        assert_eq!(config.paths, 5_000);
        // Unset overrides keep the file value
        assert_eq!(config.seed, Some(1));
        assert!(!config.parallel);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_verbose_yields_to_explicit_level() {
        let mut config = CliConfig::default();
        config.merge_with_cli(&CliArgs {
            verbose: true,
            ..Default::default()
        });
        assert_eq!(config.log_level, LogLevel::Debug);

        let mut config = CliConfig::default();
        config.merge_with_cli(&CliArgs {
            verbose: true,
            log_level: Some(LogLevel::Error),
            ..Default::default()
        });
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_build_config_from_file() {
        let path = std::env::temp_dir().join(format!("bsmc-config-{}.toml", std::process::id()));
        std::fs::write(&path, "paths = 1000\nseed = 9\n").unwrap();

        let cli = CliArgs {
            config_file: Some(path.clone()),
            paths: Some(2_000),
            ..Default::default()
        };
        let config = build_config(&cli).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.paths, 2_000);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_build_config_missing_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/bsmc.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config(&cli),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_build_config_rejects_zero_paths_override() {
        let cli = CliArgs {
            paths: Some(0),
            ..Default::default()
        };
        assert!(matches!(build_config(&cli), Err(ConfigError::InvalidPaths(0))));
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Warn), "warn");
        assert_eq!(LogLevel::Error.as_filter_str(), "error");
    }
}
