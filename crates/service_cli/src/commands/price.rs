//! Price command implementation
//!
//! Prices a European call by Monte Carlo, by the closed form, or both.

use std::fmt::Write as _;

use clap::{Args, ValueEnum};
use pricer_core::types::MarketParameters;
use pricer_models::analytical::BlackScholes;
use pricer_pricing::mc::MonteCarloResult;
use serde::Serialize;
use tracing::info;

use super::{resolve_seed, seeded_pricer, MarketArgs, StrikeArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Pricing method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Method {
    /// Monte Carlo estimate only
    Mc,
    /// Black-Scholes-Merton formula only
    ClosedForm,
    /// Both, for comparison
    #[default]
    Both,
}

/// Arguments of `bsmc price`
#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    #[command(flatten)]
    pub strike: StrikeArgs,

    /// Pricing method
    #[arg(short, long, value_enum, default_value_t = Method::Both)]
    pub method: Method,

    /// Also report closed-form delta, vega and the put price
    #[arg(long)]
    pub greeks: bool,
}

#[derive(Debug, Serialize)]
struct MonteCarloRun {
    seed: u64,
    parallel: bool,
    #[serde(flatten)]
    result: MonteCarloResult,
}

#[derive(Debug, Serialize)]
struct Greeks {
    delta: f64,
    vega: f64,
    put: f64,
}

#[derive(Debug, Serialize)]
struct PriceReport {
    market: MarketParameters,
    strike: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    monte_carlo: Option<MonteCarloRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    closed_form: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    greeks: Option<Greeks>,
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<String> {
    // Validate everything before any simulation
    let market = args.market.to_market()?;
    let option = args.strike.to_option()?;

    info!(
        spot = market.spot(),
        rate = market.rate(),
        volatility = market.volatility(),
        maturity = market.maturity(),
        strike = option.strike(),
        method = ?args.method,
        "Starting pricing"
    );

    let monte_carlo = match args.method {
        Method::Mc | Method::Both => {
            let seed = resolve_seed(config);
            let result = seeded_pricer(config, seed)?.price_call_with_stats(&market, &option)?;
            Some(MonteCarloRun {
                seed,
                parallel: config.parallel,
                result,
            })
        }
        Method::ClosedForm => None,
    };

    let bs = BlackScholes::from_market(&market);
    let closed_form = match args.method {
        Method::ClosedForm | Method::Both => {
            Some(bs.price_call(option.strike(), market.maturity())?)
        }
        Method::Mc => None,
    };

    let greeks = if args.greeks {
        Some(Greeks {
            delta: bs.delta_call(option.strike(), market.maturity())?,
            vega: bs.vega(option.strike(), market.maturity())?,
            put: bs.price_put(option.strike(), market.maturity())?,
        })
    } else {
        None
    };

    let report = PriceReport {
        market,
        strike: option.strike(),
        monte_carlo,
        closed_form,
        greeks,
    };

    info!("Pricing complete");
    render(&report, config.format)
}

fn render(report: &PriceReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Plain => Ok(render_plain(report)),
    }
}

/// A single price prints as a bare number; anything more is labelled.
fn render_plain(report: &PriceReport) -> String {
    match (&report.monte_carlo, report.closed_form, &report.greeks) {
        (Some(mc), None, None) => return mc.result.price.to_string(),
        (None, Some(price), None) => return price.to_string(),
        _ => {}
    }

    let mut out = String::new();
    if let Some(mc) = &report.monte_carlo {
        let _ = writeln!(out, "monte_carlo {}", mc.result.price);
        let _ = writeln!(out, "std_error {}", mc.result.std_error);
    }
    if let Some(price) = report.closed_form {
        let _ = writeln!(out, "closed_form {}", price);
    }
    if let Some(greeks) = &report.greeks {
        let _ = writeln!(out, "delta {}", greeks.delta);
        let _ = writeln!(out, "vega {}", greeks.vega);
        let _ = writeln!(out, "put {}", greeks.put);
    }
    out.trim_end().to_string()
}
