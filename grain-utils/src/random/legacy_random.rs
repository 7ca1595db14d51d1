//! Linear congruential generator matching `java.util.Random`.
//!
//! Lattice tables built from a [`LegacyRandom`] seed are identical to the ones
//! the Java image filters produce for the same seed, which keeps textures
//! rendered by either side interchangeable.

use crate::random::Random;

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// 48-bit LCG with the constants of `java.util.Random`.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    seed: u64,
}

impl LegacyRandom {
    /// Creates a generator in the state `new Random(seed)` would have.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Advances the state and returns its top `bits` bits.
    #[inline]
    const fn next(&mut self, bits: u32) -> i32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.seed >> (48 - bits)) as i32
    }
}

impl Random for LegacyRandom {
    #[inline]
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive");
        let m = bound - 1;
        let r = self.next(31);
        if bound & m == 0 {
            return ((i64::from(bound) * i64::from(r)) >> 31) as i32;
        }

        // Rejection sampling; the check relies on i32 overflow exactly like Java.
        let mut u = r;
        loop {
            let r = u % bound;
            if u.wrapping_sub(r).wrapping_add(m) >= 0 {
                return r;
            }
            u = self.next(31);
        }
    }

    fn next_f64(&mut self) -> f64 {
        let hi = i64::from(self.next(26)) << 27;
        let lo = i64::from(self.next(27));
        (hi + lo) as f64 * DOUBLE_UNIT
    }

    fn set_seed(&mut self, seed: u64) {
        *self = Self::from_seed(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_i32_matches_java() {
        let mut rng = LegacyRandom::from_seed(42);
        assert_eq!(rng.next_i32(), -1_170_105_035);
        assert_eq!(rng.next_i32(), 234_785_527);
        assert_eq!(rng.next_i32(), -1_360_544_799);
        assert_eq!(rng.next_i32(), 205_897_768);

        let mut rng = LegacyRandom::from_seed(0);
        assert_eq!(rng.next_i32(), -1_155_484_576);
    }

    #[test]
    fn next_i32_bounded_matches_java() {
        let mut rng = LegacyRandom::from_seed(42);
        let values: Vec<i32> = (0..5).map(|_| rng.next_i32_bounded(10)).collect();
        assert_eq!(values, [0, 3, 8, 4, 0]);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn next_f64_matches_java() {
        let mut rng = LegacyRandom::from_seed(42);
        assert_eq!(rng.next_f64(), 0.727_563_680_032_868_1);
    }

    #[test]
    fn nonneg_draws_clear_the_sign_bit() {
        let mut rng = LegacyRandom::from_seed(7);
        for _ in 0..1000 {
            assert!(rng.next_nonneg_i32() >= 0);
        }
    }

    #[test]
    fn set_seed_restarts_the_sequence() {
        let mut rng = LegacyRandom::from_seed(99);
        let first: Vec<i32> = (0..8).map(|_| rng.next_i32()).collect();
        rng.set_seed(99);
        let second: Vec<i32> = (0..8).map(|_| rng.next_i32()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn consume_count_skips_draws() {
        let mut a = LegacyRandom::from_seed(5);
        a.consume_count(3);
        let mut b = LegacyRandom::from_seed(5);
        b.next_i32();
        b.next_i32();
        b.next_i32();
        assert_eq!(a.next_i32(), b.next_i32());
    }
}
