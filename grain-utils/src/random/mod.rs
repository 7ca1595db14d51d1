//! Random sources used to build lattice tables.

pub mod legacy_random;

use std::sync::OnceLock;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// A seedable source of uniformly distributed integers.
pub trait Random {
    /// Returns the next uniformly distributed `i32`.
    fn next_i32(&mut self) -> i32;

    /// Returns a uniformly distributed `i32` in `[0, bound)`.
    ///
    /// `bound` must be positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Returns a uniformly distributed `f64` in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Resets the generator to the state produced by `seed`.
    fn set_seed(&mut self, seed: u64);

    /// Returns the next `i32` with its sign bit cleared, in `[0, 2^31)`.
    #[inline]
    fn next_nonneg_i32(&mut self) -> i32 {
        self.next_i32() & 0x7fff_ffff
    }

    /// Advances the generator by `count` draws.
    fn consume_count(&mut self, count: u32) {
        for _ in 0..count {
            self.next_i32();
        }
    }
}

/// Derives a seed from a monotonic high-resolution clock.
///
/// Nanoseconds elapsed since the first call are mixed with the wall clock so
/// that two processes started at once still diverge.
#[must_use]
pub fn time_seed() -> u64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    let epoch = EPOCH.get_or_init(Instant::now);
    let monotonic = epoch.elapsed().as_nanos() as u64;
    let wall = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64);
    let seed = wall ^ monotonic.rotate_left(32);
    tracing::trace!(seed, "derived clock seed");
    seed
}
