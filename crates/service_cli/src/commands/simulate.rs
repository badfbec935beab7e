//! Simulate command implementation
//!
//! Prints simulated terminal prices, or a summary of them.

use std::fmt::Write as _;

use clap::Args;
use pricer_models::models::GeometricBrownianMotion;
use serde::Serialize;
use tracing::info;

use super::{resolve_seed, seeded_pricer, MarketArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Arguments of `bsmc simulate`
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Print summary statistics instead of every price
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, PartialEq, Serialize)]
struct Summary {
    count: usize,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
    forward: f64,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    seed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prices: Option<Vec<f64>>,
}

fn summarise(prices: &[f64], forward: f64) -> Summary {
    let count = prices.len();
    let mean = prices.iter().sum::<f64>() / count as f64;
    let variance = if count > 1 {
        prices.iter().map(|&s| (s - mean).powi(2)).sum::<f64>() / (count - 1) as f64
    } else {
        0.0
    };

    Summary {
        count,
        mean,
        std_dev: variance.sqrt(),
        min: prices.iter().copied().fold(f64::INFINITY, f64::min),
        max: prices.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        forward,
    }
}

/// Run the simulate command
pub fn run(args: &SimulateArgs, config: &CliConfig) -> Result<String> {
    let market = args.market.to_market()?;
    let seed = resolve_seed(config);
    let prices = seeded_pricer(config, seed)?.simulate(&market)?;

    info!(n_paths = prices.len(), seed, "Simulation complete");

    let report = if args.summary {
        let forward = GeometricBrownianMotion::new(&market).forward();
        SimulationReport {
            seed,
            summary: Some(summarise(&prices, forward)),
            prices: None,
        }
    } else {
        SimulationReport {
            seed,
            summary: None,
            prices: Some(prices.into_vec()),
        }
    };

    match config.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => Ok(render_plain(&report)),
    }
}

fn render_plain(report: &SimulationReport) -> String {
    let mut out = String::new();
    if let Some(summary) = &report.summary {
        let _ = writeln!(out, "count {}", summary.count);
        let _ = writeln!(out, "mean {}", summary.mean);
        let _ = writeln!(out, "std_dev {}", summary.std_dev);
        let _ = writeln!(out, "min {}", summary.min);
        let _ = writeln!(out, "max {}", summary.max);
        let _ = writeln!(out, "forward {}", summary.forward);
    }
    if let Some(prices) = &report.prices {
        for price in prices {
            let _ = writeln!(out, "{}", price);
        }
    }
    out.trim_end().to_string()
}
