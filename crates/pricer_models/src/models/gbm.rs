//! Geometric Brownian Motion (GBM) terminal-price model.
//!
//! Under the risk-neutral measure the asset follows
//! ```text
//! dS = r * S * dt + sigma * S * dW
//! ```
//! whose exact solution at maturity t is
//! ```text
//! S(t) = S0 * exp((r - 0.5*sigma^2)*t + sigma*sqrt(t)*Z),   Z ~ N(0, 1)
//! ```
//!
//! European payoffs only depend on S(t), so the model maps each standard
//! normal draw straight to a terminal price without time stepping. The
//! transform is pure: randomness is supplied by the caller.
//!
//! ## Scalar and batch paths
//!
//! [`GeometricBrownianMotion::terminal_price`] is the single source of the
//! formula. The batch methods call it element by element with the same
//! precomputed drift and diffusion, so a price computed alone and the same
//! draw computed inside a batch are bit-for-bit identical.

use pricer_core::types::MarketParameters;

/// Exact GBM terminal-price transform for one set of market parameters.
///
/// # Examples
///
/// ```
/// use pricer_core::types::MarketParameters;
/// use pricer_models::models::GeometricBrownianMotion;
///
/// let market = MarketParameters::new(100.0, 0.03, 0.4, 0.25).unwrap();
/// let gbm = GeometricBrownianMotion::new(&market);
///
/// let draws = [-1.0, 0.0, 1.5];
/// let batch = gbm.terminal_prices(&draws);
///
/// for (z, s) in draws.iter().zip(&batch) {
///     assert_eq!(gbm.terminal_price(*z), *s);
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometricBrownianMotion {
    /// Initial spot price (S₀).
    spot: f64,
    /// Log-drift over the horizon: (r − σ²/2)·t.
    drift: f64,
    /// Log-diffusion scale over the horizon: σ·√t.
    diffusion: f64,
    /// Risk-neutral growth r·t, kept for the forward.
    growth: f64,
}

impl GeometricBrownianMotion {
    /// Precomputes the drift and diffusion terms for `market`.
    pub fn new(market: &MarketParameters) -> Self {
        let vol = market.volatility();
        let t = market.maturity();

        Self {
            spot: market.spot(),
            drift: (market.rate() - 0.5 * vol * vol) * t,
            diffusion: vol * t.sqrt(),
            growth: market.rate() * t,
        }
    }

    /// Returns the initial spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the log-drift (r − σ²/2)·t.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Returns the log-diffusion σ·√t.
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.diffusion
    }

    /// Risk-neutral forward E[S(t)] = S₀·e^(r·t).
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * self.growth.exp()
    }

    /// Maps one standard normal draw to a terminal price.
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        self.spot * (self.drift + self.diffusion * z).exp()
    }

    /// Maps a batch of draws to a freshly allocated vector of terminal prices.
    pub fn terminal_prices(&self, normals: &[f64]) -> Vec<f64> {
        normals.iter().map(|&z| self.terminal_price(z)).collect()
    }

    /// Overwrites each draw in `buffer` with its terminal price.
    ///
    /// Used by the simulator to avoid a second allocation per batch.
    #[inline]
    pub fn transform_in_place(&self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.terminal_price(*value);
        }
    }
}
