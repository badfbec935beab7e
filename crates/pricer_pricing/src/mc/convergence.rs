//! Monte Carlo convergence against the closed form.
//!
//! A study prices the same call at several sample counts with one seed and
//! records, for each count, the estimate, its standard error, the absolute
//! error against Black-Scholes and whether the closed form falls inside the
//! 99% interval. Because chunk streams are keyed by (seed, chunk index), a
//! larger run reuses every chunk of a smaller one, so the estimates are nested.

use pricer_core::types::{MarketParameters, OptionParameters, PricingError, PricingResult};
use pricer_models::analytical::BlackScholes;
use tracing::debug;

use super::estimator::{estimate_call, Z_99};
use super::simulator::simulate;

/// One sample count of a convergence study.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConvergencePoint {
    /// Number of samples.
    pub n_paths: usize,
    /// Monte Carlo estimate.
    pub estimate: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// `|estimate - closed_form|`.
    pub abs_error: f64,
    /// Whether the closed form lies inside the 99% interval.
    pub within_99: bool,
}

/// Result of [`convergence_study`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConvergenceReport {
    /// Black-Scholes reference price.
    pub closed_form: f64,
    /// Seed shared by every point.
    pub seed: u64,
    /// One entry per requested sample count, in request order.
    pub points: Vec<ConvergencePoint>,
}

impl ConvergenceReport {
    /// Least-squares slope of `ln(std_error)` against `ln(n)`.
    ///
    /// Close to -0.5 for a correctly scaled estimator. `None` with fewer than
    /// two usable points (distinct n, positive standard error).
    pub fn std_error_slope(&self) -> Option<f64> {
        let logs: Vec<(f64, f64)> = self
            .points
            .iter()
            .filter(|p| p.std_error > 0.0)
            .map(|p| ((p.n_paths as f64).ln(), p.std_error.ln()))
            .collect();
        if logs.len() < 2 {
            return None;
        }

        let k = logs.len() as f64;
        let mean_x = logs.iter().map(|&(x, _)| x).sum::<f64>() / k;
        let mean_y = logs.iter().map(|&(_, y)| y).sum::<f64>() / k;
        let sxx: f64 = logs.iter().map(|&(x, _)| (x - mean_x).powi(2)).sum();
        let sxy: f64 = logs
            .iter()
            .map(|&(x, y)| (x - mean_x) * (y - mean_y))
            .sum();

        (sxx > 0.0).then(|| sxy / sxx)
    }
}

/// Prices `option` at each count in `path_counts` and compares with the
/// closed form.
///
/// # Errors
///
/// - `PricingError::InvalidParameter` if `path_counts` is empty or holds a 0
/// - `PricingError::NumericDomain` if the closed form cannot be evaluated
pub fn convergence_study(
    market: &MarketParameters,
    option: &OptionParameters,
    path_counts: &[usize],
    seed: u64,
    parallel: bool,
) -> PricingResult<ConvergenceReport> {
    if path_counts.is_empty() {
        return Err(PricingError::invalid(
            "path_counts",
            "[]",
            "must list at least one sample count",
        ));
    }

    let closed_form = BlackScholes::from_market(market)
        .price_call(option.strike(), market.maturity())?;

    let points = path_counts
        .iter()
        .map(|&n_paths| {
            let prices = simulate(market, n_paths, seed, parallel)?;
            let result = estimate_call(&prices, option, market)?;
            let point = ConvergencePoint {
                n_paths,
                estimate: result.price,
                std_error: result.std_error,
                abs_error: (result.price - closed_form).abs(),
                within_99: result.contains(closed_form, Z_99),
            };
            debug!(
                n_paths,
                estimate = point.estimate,
                abs_error = point.abs_error,
                "convergence point"
            );
            Ok(point)
        })
        .collect::<PricingResult<Vec<_>>>()?;

    Ok(ConvergenceReport {
        closed_form,
        seed,
        points,
    })
}
