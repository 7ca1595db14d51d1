//! Lattice table for classic gradient noise.
//!
//! Holds the shuffled permutation and the per-lattice-point gradients for the
//! 1D, 2D and 3D evaluators. Every array is `2B + 2` long: the tail mirrors the
//! head so that the nested `P[P[x] + y]` lookups never need a modulo.

use glam::{Vec2, Vec3};
use grain_utils::random::Random;
use grain_utils::random::legacy_random::LegacyRandom;

/// Number of distinct lattice points along an axis.
pub const B: usize = 0x100;
/// Mask wrapping a lattice coordinate into `[0, B)`.
pub(crate) const BM: i32 = 0xff;
/// Length of every table array.
pub const TABLE_LEN: usize = B + B + 2;

/// Permutation and gradient tables for one seed.
///
/// Immutable once built. Publish a new table to change the noise field.
#[derive(Debug, Clone)]
pub struct LatticeTable {
    pub(crate) p: [u8; TABLE_LEN],
    pub(crate) g1: [f32; TABLE_LEN],
    pub(crate) g2: [Vec2; TABLE_LEN],
    pub(crate) g3: [Vec3; TABLE_LEN],
}

impl LatticeTable {
    /// Builds a table from a random source.
    ///
    /// Gradients are drawn first (for each lattice point: the 1D gradient, then
    /// the 2D components, then the 3D components), the permutation is shuffled
    /// afterwards with the same source, and finally the head of every array is
    /// mirrored into its tail.
    pub fn new<R: Random>(random: &mut R) -> Self {
        let mut p = [0u8; TABLE_LEN];
        let mut g1 = [0.0f32; TABLE_LEN];
        let mut g2 = [Vec2::ZERO; TABLE_LEN];
        let mut g3 = [Vec3::ZERO; TABLE_LEN];

        for i in 0..B {
            p[i] = i as u8;
            g1[i] = gradient_component(random);
            g2[i] = unit_gradient2(random);
            g3[i] = unit_gradient3(random);
        }

        for i in (0..B).rev() {
            let j = random.next_nonneg_i32() as usize % B;
            p.swap(i, j);
        }

        // Slots 2B and 2B+1 copy from B and B+1, which this loop fills first.
        for i in 0..B + 2 {
            p[B + i] = p[i];
            g1[B + i] = g1[i];
            g2[B + i] = g2[i];
            g3[B + i] = g3[i];
        }

        Self { p, g1, g2, g3 }
    }

    /// Builds the table `java.util.Random` seeded with `seed` would produce.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = LegacyRandom::from_seed(seed);
        Self::new(&mut rng)
    }

    /// Assembles a table from raw arrays without drawing anything.
    ///
    /// No invariant beyond the array lengths is checked, so this can hold
    /// degenerate gradients. Every `u8` is a valid lattice index, which keeps
    /// lookups in bounds whatever the permutation contains.
    #[must_use]
    pub const fn from_raw_parts(
        p: [u8; TABLE_LEN],
        g1: [f32; TABLE_LEN],
        g2: [Vec2; TABLE_LEN],
        g3: [Vec3; TABLE_LEN],
    ) -> Self {
        Self { p, g1, g2, g3 }
    }

    /// The permutation array.
    #[must_use]
    pub const fn permutation(&self) -> &[u8; TABLE_LEN] {
        &self.p
    }

    /// The scalar gradients used by 1D noise.
    #[must_use]
    pub const fn gradients1(&self) -> &[f32; TABLE_LEN] {
        &self.g1
    }

    /// The unit gradients used by 2D noise.
    #[must_use]
    pub const fn gradients2(&self) -> &[Vec2; TABLE_LEN] {
        &self.g2
    }

    /// The unit gradients used by 3D noise.
    #[must_use]
    pub const fn gradients3(&self) -> &[Vec3; TABLE_LEN] {
        &self.g3
    }
}

/// Draws a multiple of `1/B` in `[-1, 1)`.
#[inline]
fn gradient_component<R: Random>(random: &mut R) -> f32 {
    let r = random.next_nonneg_i32() % (2 * B as i32);
    (r - B as i32) as f32 / B as f32
}

// Components are multiples of 1/B, so a zero length means an exactly zero
// vector. Those are re-drawn instead of normalised.
fn unit_gradient2<R: Random>(random: &mut R) -> Vec2 {
    loop {
        let v = Vec2::new(gradient_component(random), gradient_component(random));
        let length = v.length();
        if length > 0.0 {
            return v / length;
        }
        tracing::debug!("re-drawing zero-length 2D gradient");
    }
}

fn unit_gradient3<R: Random>(random: &mut R) -> Vec3 {
    loop {
        let v = Vec3::new(
            gradient_component(random),
            gradient_component(random),
            gradient_component(random),
        );
        let length = v.length();
        if length > 0.0 {
            return v / length;
        }
        tracing::debug!("re-drawing zero-length 3D gradient");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A source that yields a fixed prefix, then counts upwards.
    struct Scripted {
        values: Vec<i32>,
        next: usize,
    }

    impl Random for Scripted {
        fn next_i32(&mut self) -> i32 {
            let v = self
                .values
                .get(self.next)
                .copied()
                .unwrap_or(self.next as i32 * 7919);
            self.next += 1;
            v
        }

        fn next_i32_bounded(&mut self, bound: i32) -> i32 {
            self.next_nonneg_i32() % bound
        }

        fn next_f64(&mut self) -> f64 {
            0.5
        }

        fn set_seed(&mut self, _seed: u64) {
            self.next = 0;
        }
    }

    #[test]
    fn head_is_a_permutation() {
        let table = LatticeTable::from_seed(42);
        let mut seen = [false; B];
        for &v in &table.p[..B] {
            assert!(!seen[usize::from(v)], "value {v} appears twice");
            seen[usize::from(v)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn tail_mirrors_head() {
        let table = LatticeTable::from_seed(1234);
        for i in 0..B + 2 {
            assert_eq!(table.p[B + i], table.p[i]);
            assert_eq!(table.g1[B + i], table.g1[i]);
            assert_eq!(table.g2[B + i], table.g2[i]);
            assert_eq!(table.g3[B + i], table.g3[i]);
        }
    }

    #[test]
    fn gradients_are_in_range_and_normalised() {
        let table = LatticeTable::from_seed(7);
        for i in 0..B {
            assert!((-1.0..1.0).contains(&table.g1[i]));
            assert!((table.g2[i].length() - 1.0).abs() < 1e-5);
            assert!((table.g3[i].length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn same_seed_same_table() {
        let a = LatticeTable::from_seed(99);
        let b = LatticeTable::from_seed(99);
        assert_eq!(a.p, b.p);
        assert!(a.g1.iter().zip(&b.g1).all(|(x, y)| x.to_bits() == y.to_bits()));
        assert_eq!(a.g2, b.g2);
        assert_eq!(a.g3, b.g3);
    }

    #[test]
    fn different_seeds_differ() {
        let a = LatticeTable::from_seed(1);
        let b = LatticeTable::from_seed(2);
        assert_ne!(a.p, b.p);
    }

    #[test]
    fn zero_length_gradients_are_redrawn() {
        // Draw 0 is g1[0]; draws 1-2 are g2[0]. A draw of B yields component 0,
        // so g2[0] starts as the zero vector and must be re-drawn from 3-4.
        let b = B as i32;
        let mut rng = Scripted {
            values: vec![0, b, b, b + 10, b],
            next: 0,
        };
        let table = LatticeTable::new(&mut rng);
        let g = table.g2[0];
        assert!((g.length() - 1.0).abs() < 1e-6);
        assert!(g.x > 0.99, "expected the re-drawn (+x) gradient, got {g:?}");
    }
}
