//! Octave sums of 2D and 3D noise.
//!
//! Each octave doubles the frequency `f` and weights its term by `1/f`. The
//! sums run for `f = 1, 2, 4, ...` while `f <= octaves`, so `octaves` below
//! one yields `0.0` and a power of two includes its own octave.

use crate::noise::lattice::LatticeTable;

/// Frequency multiplier between successive octaves of
/// [`LatticeTable::fractional_turbulence3`].
const LACUNARITY: f32 = 2.0;

/// Sums `term(f) / f` over the octaves admitted by `octaves`.
#[inline]
fn octave_sum(octaves: f32, mut term: impl FnMut(f32) -> f32) -> f32 {
    let mut total = 0.0f32;
    let mut f = 1.0f32;
    // An infinite octave count stops once the frequency overflows.
    while f <= octaves && f.is_finite() {
        total += term(f) / f;
        f *= 2.0;
    }
    total
}

impl LatticeTable {
    /// Turbulence: `Σ |noise2(f·x, f·y)| / f`.
    #[must_use]
    pub fn turbulence2(&self, x: f32, y: f32, octaves: f32) -> f32 {
        octave_sum(octaves, |f| self.noise2(f * x, f * y).abs())
    }

    /// Turbulence without the absolute value: `Σ noise2(f·x, f·y) / f`.
    ///
    /// Smoother than [`turbulence2`](Self::turbulence2) and can be negative.
    #[must_use]
    pub fn turbulence2_signed(&self, x: f32, y: f32, octaves: f32) -> f32 {
        octave_sum(octaves, |f| self.noise2(f * x, f * y))
    }

    /// 3D turbulence: `Σ |noise3(f·x, f·y, f·z)| / f`.
    #[must_use]
    pub fn turbulence3(&self, x: f32, y: f32, z: f32, octaves: f32) -> f32 {
        octave_sum(octaves, |f| self.noise3(f * x, f * y, f * z).abs())
    }

    /// Signed 3D octave sum that honours a fractional octave count.
    ///
    /// Only `x` and `y` are scaled per octave; `z` is held, which makes it a
    /// time axis for animated effects. The whole octaves are summed first and
    /// the fractional part of `octaves` weights one last, partial octave.
    #[must_use]
    pub fn fractional_turbulence3(&self, x: f32, y: f32, z: f32, octaves: f32) -> f32 {
        if octaves.is_nan() || octaves <= 0.0 {
            return 0.0;
        }

        let mut x = x;
        let mut y = y;
        let mut f = 1.0f32;
        let mut value = 0.0f32;

        let whole = octaves.trunc();
        let mut remaining = whole;
        while remaining >= 1.0 && f.is_finite() {
            value += self.noise3(x, y, z) / f;
            x *= LACUNARITY;
            y *= LACUNARITY;
            f *= 2.0;
            remaining -= 1.0;
        }

        let remainder = octaves - whole;
        if remainder > 0.0 && f.is_finite() {
            value += remainder * self.noise3(x, y, z) / f;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LatticeTable {
        LatticeTable::from_seed(1_234_567)
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn fewer_than_one_octave_is_zero() {
        let table = table();
        for octaves in [0.0, 0.5, 0.999, -3.0, f32::NAN] {
            assert_eq!(table.turbulence2(0.3, 0.4, octaves), 0.0);
            assert_eq!(table.turbulence2_signed(0.3, 0.4, octaves), 0.0);
            assert_eq!(table.turbulence3(0.3, 0.4, 0.5, octaves), 0.0);
        }
        for octaves in [0.0, -3.0, f32::NAN] {
            assert_eq!(table.fractional_turbulence3(0.3, 0.4, 0.5, octaves), 0.0);
        }
    }

    #[test]
    fn first_octave_is_plain_noise() {
        let table = table();
        for i in 0..50 {
            let x = i as f32 * 0.37 - 5.0;
            let y = i as f32 * -0.21 + 2.0;
            assert_eq!(
                table.turbulence2(x, y, 1.0).to_bits(),
                table.noise2(x, y).abs().to_bits()
            );
            assert_eq!(
                table.turbulence2_signed(x, y, 1.0).to_bits(),
                table.noise2(x, y).to_bits()
            );
            assert_eq!(
                table.turbulence3(x, y, 0.5, 1.0).to_bits(),
                table.noise3(x, y, 0.5).abs().to_bits()
            );
        }
    }

    #[test]
    fn octaves_accumulate_incrementally() {
        let table = table();
        let (x, y) = (1.37, -2.61);
        let one = table.turbulence2(x, y, 1.0);
        let two = table.turbulence2(x, y, 2.0);
        let expected = one + table.noise2(2.0 * x, 2.0 * y).abs() / 2.0;
        assert_eq!(two.to_bits(), expected.to_bits());

        let mut last = 0.0;
        for octaves in 1..=8 {
            let t = table.turbulence2(x, y, octaves as f32);
            assert!(t >= last, "turbulence2 shrank at {octaves} octaves");
            last = t;
        }
    }

    #[test]
    fn power_of_two_includes_its_own_octave() {
        let table = table();
        let (x, y) = (0.83, 0.29);
        assert_eq!(
            table.turbulence2(x, y, 4.0).to_bits(),
            table.turbulence2(x, y, 7.99).to_bits()
        );
        assert_ne!(
            table.turbulence2(x, y, 4.0).to_bits(),
            table.turbulence2(x, y, 3.99).to_bits()
        );
    }

    #[test]
    fn infinite_octaves_terminate() {
        let table = table();
        let _ = table.turbulence2(0.1, 0.2, f32::INFINITY);
        let _ = table.turbulence3(0.1, 0.2, 0.3, f32::INFINITY);
        let _ = table.fractional_turbulence3(0.1, 0.2, 0.3, f32::INFINITY);
    }

    #[test]
    fn fractional_octave_blends_linearly() {
        let table = table();
        let (x, y, z) = (0.71, 1.13, 0.25);
        let two = table.fractional_turbulence3(x, y, z, 2.0);
        let half = table.fractional_turbulence3(x, y, z, 2.5);
        let third = table.noise3(x * 4.0, y * 4.0, z) / 4.0;
        assert!((half - (two + 0.5 * third)).abs() < 1e-6);
    }
}
