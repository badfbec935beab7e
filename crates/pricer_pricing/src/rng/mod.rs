//! # Random Number Generation Infrastructure
//!
//! This module provides the seeded pseudo-random number generator used by
//! the Monte Carlo simulator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators support seeding for deterministic sequences
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//! - **Independent streams**: [`PricerRng::for_stream`] derives a separate
//!   generator per simulation chunk, so parallel workers never share or
//!   overlap state
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//!
//! // Chunk 3 of a run seeded with 12345
//! let chunk_rng = PricerRng::for_stream(12345, 3);
//! assert_eq!(chunk_rng.seed(), 12345);
//! assert_eq!(chunk_rng.stream(), 3);
//! ```

mod prng;

// Public re-exports
pub use prng::PricerRng;
