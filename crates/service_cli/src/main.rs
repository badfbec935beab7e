//! bsmc - European call pricing from the command line
//!
//! # Commands
//!
//! - `bsmc price` - Monte Carlo and/or closed-form call price
//! - `bsmc simulate` - Simulated terminal prices under GBM
//! - `bsmc convergence` - Monte Carlo error against the closed form as n grows
//!
//! Results go to stdout; logs go to stderr. Invalid parameters exit with a
//! non-zero status and a message naming the error kind and the parameter.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only parses arguments,
//! resolves configuration and formats output; all numerics live in the
//! pricer crates.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::convergence::ConvergenceArgs;
use commands::price::PriceArgs;
use commands::simulate::SimulateArgs;
use config::{build_config, CliArgs, CliConfig, LogLevel, OutputFormat};
pub use error::{CliError, Result};

/// European call pricing: Monte Carlo vs Black-Scholes-Merton
#[derive(Parser, Debug)]
#[command(name = "bsmc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "BSMC_CONFIG")]
    config: Option<PathBuf>,

    /// Number of Monte Carlo samples
    #[arg(short = 'n', long, global = true, env = "BSMC_PATHS")]
    paths: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long, global = true, env = "BSMC_SEED")]
    seed: Option<u64>,

    /// Simulate on the rayon pool (`--parallel=false` to run serially)
    #[arg(
        long,
        global = true,
        env = "BSMC_PARALLEL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    parallel: Option<bool>,

    /// Log level
    #[arg(long, global = true, value_enum, env = "BSMC_LOG_LEVEL")]
    log_level: Option<LogLevel>,

    /// Output format
    #[arg(short, long, global = true, value_enum, env = "BSMC_FORMAT")]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a European call
    Price(PriceArgs),

    /// Simulate terminal prices
    Simulate(SimulateArgs),

    /// Compare Monte Carlo estimates with the closed form across sample counts
    Convergence(ConvergenceArgs),
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            paths: cli.paths,
            seed: cli.seed,
            parallel: cli.parallel,
            log_level: cli.log_level,
            verbose: cli.verbose,
            format: cli.format,
        }
    }
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: &Commands, config: &CliConfig) -> Result<String> {
    match command {
        Commands::Price(args) => commands::price::run(args, config),
        Commands::Simulate(args) => commands::simulate::run(args, config),
        Commands::Convergence(args) => commands::convergence::run(args, config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&CliArgs::from(&cli)) {
        Ok(config) => config,
        Err(e) => {
            let e = CliError::from(e);
            eprintln!("error: {e}");
            return e.exit_code();
        }
    };

    init_tracing(config.log_level);
    debug!(?config, "Configuration loaded");

    match run(&cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(status = e.status(), "command failed");
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
