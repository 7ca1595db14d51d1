//! 1D, 2D and 3D gradient noise over a [`LatticeTable`].

use std::sync::atomic::{AtomicU64, Ordering};

use glam::{Vec2, Vec3};
use grain_utils::math::{PI, lerp, smoothstep01};

use crate::noise::lattice::{BM, LatticeTable};

/// Offset added to every coordinate so that lattice indices stay non-negative
/// for inputs above `-N`.
const N: f32 = 4096.0;

static NAN_SUBSTITUTIONS: AtomicU64 = AtomicU64::new(0);

/// Number of `noise2` results replaced with `0.0` because they were NaN,
/// counted across every table in the process.
#[must_use]
pub fn nan_substitutions() -> u64 {
    NAN_SUBSTITUTIONS.load(Ordering::Relaxed)
}

/// Lattice cell and offsets along one axis.
#[derive(Clone, Copy)]
struct Axis {
    /// Lower lattice index.
    b0: usize,
    /// Upper lattice index, wrapped.
    b1: usize,
    /// Offset from the lower lattice point.
    r0: f32,
    /// Offset from the upper lattice point (`r0 - 1`).
    r1: f32,
}

impl Axis {
    #[inline]
    fn new(v: f32) -> Self {
        let t = v + N;
        // Truncation, not floor: coordinates below -N land in the wrong cell,
        // but the mask keeps the index in range.
        let whole = t as i32;
        let b0 = whole & BM;
        let b1 = (b0 + 1) & BM;
        let r0 = t - whole as f32;
        Self {
            b0: b0 as usize,
            b1: b1 as usize,
            r0,
            r1: r0 - 1.0,
        }
    }
}

impl LatticeTable {
    #[inline]
    fn perm(&self, index: usize) -> usize {
        usize::from(self.p[index])
    }

    /// 1D gradient noise, roughly in `[-1, 1]`.
    ///
    /// The output is scaled by `2.3`, so rare excursions slightly past the unit
    /// range are expected.
    #[must_use]
    pub fn noise1(&self, x: f32) -> f32 {
        let ax = Axis::new(x);
        let sx = smoothstep01(ax.r0);

        let u = ax.r0 * self.g1[self.perm(ax.b0)];
        let v = ax.r1 * self.g1[self.perm(ax.b1)];
        2.3 * lerp(sx, u, v)
    }

    /// 2D gradient noise, roughly in `[-1, 1]`.
    ///
    /// A NaN result is replaced by `0.0`; each replacement is counted (see
    /// [`nan_substitutions`]) and logged.
    #[must_use]
    pub fn noise2(&self, x: f32, y: f32) -> f32 {
        let ax = Axis::new(x);
        let ay = Axis::new(y);

        let i = self.perm(ax.b0);
        let j = self.perm(ax.b1);

        let b00 = self.perm(i + ay.b0);
        let b10 = self.perm(j + ay.b0);
        let b01 = self.perm(i + ay.b1);
        let b11 = self.perm(j + ay.b1);

        let sx = smoothstep01(ax.r0);
        let sy = smoothstep01(ay.r0);

        let u = Vec2::new(ax.r0, ay.r0).dot(self.g2[b00]);
        let v = Vec2::new(ax.r1, ay.r0).dot(self.g2[b10]);
        let a = lerp(sx, u, v);

        let u = Vec2::new(ax.r0, ay.r1).dot(self.g2[b01]);
        let v = Vec2::new(ax.r1, ay.r1).dot(self.g2[b11]);
        let b = lerp(sx, u, v);

        let value = 1.5 * lerp(sy, a, b);
        if value.is_nan() {
            NAN_SUBSTITUTIONS.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(x, y, "noise2 produced NaN, substituting 0");
            return 0.0;
        }
        value
    }

    /// 3D gradient noise, roughly in `[-1, 1]`.
    ///
    /// Interpolates over x, then y, then z.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn noise3(&self, x: f32, y: f32, z: f32) -> f32 {
        let ax = Axis::new(x);
        let ay = Axis::new(y);
        let az = Axis::new(z);

        let i = self.perm(ax.b0);
        let j = self.perm(ax.b1);

        let b00 = self.perm(i + ay.b0);
        let b10 = self.perm(j + ay.b0);
        let b01 = self.perm(i + ay.b1);
        let b11 = self.perm(j + ay.b1);

        let sx = smoothstep01(ax.r0);
        let sy = smoothstep01(ay.r0);
        let sz = smoothstep01(az.r0);

        let near = self.bilerp3(ax, ay, az.r0, az.b0, [b00, b10, b01, b11], sx, sy);
        let far = self.bilerp3(ax, ay, az.r1, az.b1, [b00, b10, b01, b11], sx, sy);

        1.5 * lerp(sz, near, far)
    }

    /// Blends the four gradients of one z-slice of a 3D cell.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    fn bilerp3(
        &self,
        ax: Axis,
        ay: Axis,
        rz: f32,
        bz: usize,
        [b00, b10, b01, b11]: [usize; 4],
        sx: f32,
        sy: f32,
    ) -> f32 {
        let u = Vec3::new(ax.r0, ay.r0, rz).dot(self.g3[b00 + bz]);
        let v = Vec3::new(ax.r1, ay.r0, rz).dot(self.g3[b10 + bz]);
        let a = lerp(sx, u, v);

        let u = Vec3::new(ax.r0, ay.r1, rz).dot(self.g3[b01 + bz]);
        let v = Vec3::new(ax.r1, ay.r1, rz).dot(self.g3[b11 + bz]);
        let b = lerp(sx, u, v);

        lerp(sy, a, b)
    }

    /// `2 * noise1(x / π)`: a wavy 1D signal with a rough period of `2π`.
    #[must_use]
    pub fn sin_like_noise1(&self, x: f32) -> f32 {
        2.0 * self.noise1(x / PI)
    }
}
