//! Convergence command implementation
//!
//! Compares Monte Carlo estimates at several sample counts with the
//! closed-form price.

use std::fmt::Write as _;

use clap::Args;
use pricer_pricing::mc::{convergence_study, ConvergenceReport};
use tracing::info;

use super::{resolve_seed, MarketArgs, StrikeArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Arguments of `bsmc convergence`
#[derive(Args, Debug, Clone)]
pub struct ConvergenceArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    #[command(flatten)]
    pub strike: StrikeArgs,

    /// Comma-separated sample counts
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [1_000_usize, 10_000, 100_000, 1_000_000]
    )]
    pub counts: Vec<usize>,
}

/// Run the convergence command
pub fn run(args: &ConvergenceArgs, config: &CliConfig) -> Result<String> {
    let market = args.market.to_market()?;
    let option = args.strike.to_option()?;
    let seed = resolve_seed(config);

    let report = convergence_study(&market, &option, &args.counts, seed, config.parallel)?;

    if let Some(slope) = report.std_error_slope() {
        info!(slope, "standard error slope against n (log-log)");
    }

    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => Ok(render_plain(&report)),
    }
}

fn render_plain(report: &ConvergenceReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "closed_form {}", report.closed_form);
    for point in &report.points {
        let _ = writeln!(
            out,
            "{} {} {} {} {}",
            point.n_paths, point.estimate, point.std_error, point.abs_error, point.within_99
        );
    }
    out.trim_end().to_string()
}
