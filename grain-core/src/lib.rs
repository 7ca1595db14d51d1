//! Seedable lattice gradient noise for procedural textures.
//!
//! The crate-level functions ([`noise1`], [`noise2`], [`turbulence2`], ...)
//! evaluate a process-wide [`NoiseContext`] that is seeded from the clock on
//! first use and can be reseeded at any time with [`reseed`] or
//! [`reseed_with`]. Callers that need an isolated or reproducible field create
//! their own context, or hold a [`LatticeTable`] directly.

pub mod config;
pub mod context;
pub mod function;
pub mod grid;
pub mod noise;
pub mod range;

pub use config::{ConfigError, ProbeConfig};
pub use context::{
    DefaultNoise, NoiseContext, default_context, fractional_turbulence3, noise1, noise2, noise3,
    reseed, reseed_with, sin_like_noise1, turbulence2, turbulence2_signed, turbulence3,
};
pub use function::{Function1D, Function2D, Function3D};
pub use grid::sample_grid;
pub use noise::{LatticeTable, nan_substitutions};
pub use range::{ProbeTarget, ValueRange, find_range, find_range_2d};
