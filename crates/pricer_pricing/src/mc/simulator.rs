//! Terminal-price simulation under GBM.
//!
//! The simulator draws one standard normal per sample and maps it through
//! [`GeometricBrownianMotion`]. Draws are produced in fixed-size chunks and
//! chunk `i` always uses stream `i` of the run seed, so the output depends
//! only on (seed, n) and never on thread scheduling: a serial and a parallel
//! run with the same seed yield identical sequences.
//!
//! # Memory Layout
//!
//! Samples are written in place into one pre-allocated buffer: each chunk is
//! first filled with normals and then overwritten with terminal prices.

use std::ops::Deref;

use pricer_core::types::{validate_sample_count, MarketParameters, PricingResult};
use pricer_models::models::GeometricBrownianMotion;
use rayon::prelude::*;
use tracing::debug;

use crate::rng::PricerRng;

/// Number of samples drawn from one RNG stream.
pub const CHUNK_SIZE: usize = 16_384;

/// Simulated terminal prices from one simulation run.
///
/// Produced fresh by every call to [`simulate`]; the set owns its samples
/// and records the seed that generated them.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::MarketParameters;
/// use pricer_pricing::mc::simulate;
///
/// let market = MarketParameters::new(100.0, 0.03, 0.4, 0.25).unwrap();
/// let prices = simulate(&market, 1_000, 42, false).unwrap();
///
/// assert_eq!(prices.len(), 1_000);
/// assert_eq!(prices.seed(), 42);
/// assert!(prices.iter().all(|&s| s > 0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedPriceSet {
    prices: Vec<f64>,
    seed: u64,
}

impl SimulatedPriceSet {
    /// Returns the seed that generated this set.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the samples as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    /// Consumes the set, returning the samples.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.prices
    }

    /// Sample mean of the terminal prices.
    pub fn mean(&self) -> f64 {
        self.prices.iter().sum::<f64>() / self.prices.len() as f64
    }
}

impl Deref for SimulatedPriceSet {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.prices
    }
}

impl AsRef<[f64]> for SimulatedPriceSet {
    fn as_ref(&self) -> &[f64] {
        &self.prices
    }
}

/// Simulates `n_paths` terminal prices for `market`.
///
/// # Arguments
///
/// * `market` - Validated market parameters
/// * `n_paths` - Number of samples, in `1..=MAX_SAMPLE_COUNT`
/// * `seed` - Run seed; chunk `i` draws from stream `i`
/// * `parallel` - Simulate chunks on the rayon pool
///
/// # Errors
///
/// `PricingError::InvalidParameter` if `n_paths` is 0 or above
/// [`MAX_SAMPLE_COUNT`](pricer_core::types::MAX_SAMPLE_COUNT), checked
/// before the buffer is allocated.
pub fn simulate(
    market: &MarketParameters,
    n_paths: usize,
    seed: u64,
    parallel: bool,
) -> PricingResult<SimulatedPriceSet> {
    validate_sample_count(n_paths)?;

    let gbm = GeometricBrownianMotion::new(market);
    let mut prices = vec![0.0; n_paths];

    let fill_chunk = |(index, chunk): (usize, &mut [f64])| {
        let mut rng = PricerRng::for_stream(seed, index as u64);
        rng.fill_normal(chunk);
        gbm.transform_in_place(chunk);
    };

    if parallel {
        prices
            .par_chunks_mut(CHUNK_SIZE)
            .enumerate()
            .for_each(fill_chunk);
    } else {
        prices.chunks_mut(CHUNK_SIZE).enumerate().for_each(fill_chunk);
    }

    debug!(
        n_paths,
        seed,
        parallel,
        chunks = n_paths.div_ceil(CHUNK_SIZE),
        "simulated terminal prices"
    );

    Ok(SimulatedPriceSet { prices, seed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::{PricingError, MAX_SAMPLE_COUNT};

    fn market() -> MarketParameters {
        MarketParameters::new(100.0, 0.03, 0.4, 0.25).unwrap()
    }

    #[test]
    fn test_single_sample() {
        let prices = simulate(&market(), 1, 42, false).unwrap();
        assert_eq!(prices.len(), 1);
        assert!(prices[0] > 0.0);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let err = simulate(&market(), 0, 42, false).unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidParameter {
                name: "n_paths",
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_sample_count_rejected() {
        let err = simulate(&market(), MAX_SAMPLE_COUNT + 1, 42, true).unwrap_err();
        assert_eq!(err.parameter(), Some("n_paths"));
        assert!(simulate(&market(), usize::MAX, 42, false).is_err());
    }

    #[test]
    fn test_seed_reproducibility() {
        let a = simulate(&market(), 50_000, 7, false).unwrap();
        let b = simulate(&market(), 50_000, 7, false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = simulate(&market(), 100, 7, false).unwrap();
        let b = simulate(&market(), 100, 8, false).unwrap();
        assert_ne!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_parallel_matches_serial() {
        // Spans several chunks plus a partial one
        let n = 3 * CHUNK_SIZE + 123;
        let serial = simulate(&market(), n, 11, false).unwrap();
        let parallel = simulate(&market(), n, 11, true).unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_prefix_stable_across_sizes() {
        // Growing n appends samples; earlier chunks are unchanged
        let small = simulate(&market(), CHUNK_SIZE + 10, 5, false).unwrap();
        let large = simulate(&market(), 2 * CHUNK_SIZE, 5, false).unwrap();
        assert_eq!(&large[..CHUNK_SIZE], &small[..CHUNK_SIZE]);
    }

    #[test]
    fn test_matches_manual_transform() {
        let market = market();
        let n = 1000;
        let prices = simulate(&market, n, 99, false).unwrap();

        let mut rng = PricerRng::for_stream(99, 0);
        let gbm = GeometricBrownianMotion::new(&market);
        for &price in prices.iter() {
            assert_eq!(price, gbm.terminal_price(rng.gen_normal()));
        }
    }

    #[test]
    fn test_risk_neutral_mean() {
        // E[S_T] = S0·e^(rt); std of S_T is ~20.3 here
        let market = market();
        let prices = simulate(&market, 400_000, 2024, true).unwrap();
        let forward = 100.0 * (0.03_f64 * 0.25).exp();
        assert_relative_eq!(prices.mean(), forward, epsilon = 0.2);
    }

    #[test]
    fn test_into_vec_and_as_ref() {
        let prices = simulate(&market(), 10, 1, false).unwrap();
        let slice_len = prices.as_ref().len();
        let seed = prices.seed();
        let vec = prices.into_vec();
        assert_eq!(vec.len(), slice_len);
        assert_eq!(seed, 1);
    }
}
