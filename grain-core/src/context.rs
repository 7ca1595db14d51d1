//! Shared ownership of the current lattice table.
//!
//! A [`NoiseContext`] publishes immutable [`LatticeTable`]s through an
//! [`ArcSwap`]. Every evaluation loads the table current at call start, so a
//! concurrent reseed is never observed half-written: readers see either the
//! old table or the new one. Reseeding builds the replacement first and swaps
//! the pointer once it is complete.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use grain_utils::random::time_seed;

use crate::noise::LatticeTable;

/// Owner of the lattice table used for noise evaluation.
pub struct NoiseContext {
    table: ArcSwap<LatticeTable>,
}

impl NoiseContext {
    /// Creates a context seeded from the clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(time_seed())
    }

    /// Creates a context whose table is built from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        tracing::debug!(seed, "building lattice table");
        Self::from_table(LatticeTable::from_seed(seed))
    }

    /// Creates a context around an already built table.
    #[must_use]
    pub fn from_table(table: LatticeTable) -> Self {
        Self {
            table: ArcSwap::from_pointee(table),
        }
    }

    /// Returns the current table.
    ///
    /// The snapshot stays valid, and unchanged, across later reseeds. Use it to
    /// run many evaluations against one stable table.
    #[must_use]
    pub fn snapshot(&self) -> Arc<LatticeTable> {
        self.table.load_full()
    }

    /// Replaces the table with one built from a clock-derived seed.
    ///
    /// Returns the seed used so the field can be reproduced later.
    pub fn reseed(&self) -> u64 {
        let seed = time_seed();
        self.reseed_with(seed);
        seed
    }

    /// Replaces the table with one built from `seed`.
    pub fn reseed_with(&self, seed: u64) {
        let table = LatticeTable::from_seed(seed);
        self.publish(table);
        tracing::debug!(seed, "published reseeded lattice table");
    }

    /// Makes `table` the current table for all subsequent evaluations.
    pub fn publish(&self, table: LatticeTable) {
        self.table.store(Arc::new(table));
    }

    /// See [`LatticeTable::noise1`].
    #[must_use]
    pub fn noise1(&self, x: f32) -> f32 {
        self.table.load().noise1(x)
    }

    /// See [`LatticeTable::noise2`].
    #[must_use]
    pub fn noise2(&self, x: f32, y: f32) -> f32 {
        self.table.load().noise2(x, y)
    }

    /// See [`LatticeTable::noise3`].
    #[must_use]
    pub fn noise3(&self, x: f32, y: f32, z: f32) -> f32 {
        self.table.load().noise3(x, y, z)
    }

    /// See [`LatticeTable::sin_like_noise1`].
    #[must_use]
    pub fn sin_like_noise1(&self, x: f32) -> f32 {
        self.table.load().sin_like_noise1(x)
    }

    /// See [`LatticeTable::turbulence2`].
    #[must_use]
    pub fn turbulence2(&self, x: f32, y: f32, octaves: f32) -> f32 {
        self.table.load().turbulence2(x, y, octaves)
    }

    /// See [`LatticeTable::turbulence2_signed`].
    #[must_use]
    pub fn turbulence2_signed(&self, x: f32, y: f32, octaves: f32) -> f32 {
        self.table.load().turbulence2_signed(x, y, octaves)
    }

    /// See [`LatticeTable::turbulence3`].
    #[must_use]
    pub fn turbulence3(&self, x: f32, y: f32, z: f32, octaves: f32) -> f32 {
        self.table.load().turbulence3(x, y, z, octaves)
    }

    /// See [`LatticeTable::fractional_turbulence3`].
    #[must_use]
    pub fn fractional_turbulence3(&self, x: f32, y: f32, z: f32, octaves: f32) -> f32 {
        self.table.load().fractional_turbulence3(x, y, z, octaves)
    }
}

impl Default for NoiseContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide context behind the free functions of this crate.
///
/// Built on first use with a clock-derived seed.
static DEFAULT_CONTEXT: LazyLock<NoiseContext> = LazyLock::new(NoiseContext::new);

/// Returns the process-wide context.
#[must_use]
pub fn default_context() -> &'static NoiseContext {
    &DEFAULT_CONTEXT
}

/// Handle evaluating the process-wide context through the function traits.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNoise;

/// 1D noise from the process-wide context.
#[must_use]
pub fn noise1(x: f32) -> f32 {
    DEFAULT_CONTEXT.noise1(x)
}

/// 2D noise from the process-wide context.
#[must_use]
pub fn noise2(x: f32, y: f32) -> f32 {
    DEFAULT_CONTEXT.noise2(x, y)
}

/// 3D noise from the process-wide context.
#[must_use]
pub fn noise3(x: f32, y: f32, z: f32) -> f32 {
    DEFAULT_CONTEXT.noise3(x, y, z)
}

/// `2 * noise1(x / π)` from the process-wide context.
#[must_use]
pub fn sin_like_noise1(x: f32) -> f32 {
    DEFAULT_CONTEXT.sin_like_noise1(x)
}

/// 2D turbulence from the process-wide context.
#[must_use]
pub fn turbulence2(x: f32, y: f32, octaves: f32) -> f32 {
    DEFAULT_CONTEXT.turbulence2(x, y, octaves)
}

/// Signed 2D turbulence from the process-wide context.
#[must_use]
pub fn turbulence2_signed(x: f32, y: f32, octaves: f32) -> f32 {
    DEFAULT_CONTEXT.turbulence2_signed(x, y, octaves)
}

/// 3D turbulence from the process-wide context.
#[must_use]
pub fn turbulence3(x: f32, y: f32, z: f32, octaves: f32) -> f32 {
    DEFAULT_CONTEXT.turbulence3(x, y, z, octaves)
}

/// Fractional-octave 3D turbulence from the process-wide context.
#[must_use]
pub fn fractional_turbulence3(x: f32, y: f32, z: f32, octaves: f32) -> f32 {
    DEFAULT_CONTEXT.fractional_turbulence3(x, y, z, octaves)
}

/// Reseeds the process-wide context from the clock and returns the seed.
pub fn reseed() -> u64 {
    DEFAULT_CONTEXT.reseed()
}

/// Reseeds the process-wide context with `seed`.
pub fn reseed_with(seed: u64) {
    DEFAULT_CONTEXT.reseed_with(seed);
}
