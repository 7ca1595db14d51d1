//! Interpolation kernel shared by the 1D, 2D and 3D noise evaluators.

/// Single-precision pi, the constant image filters scale angles with.
pub const PI: f32 = std::f32::consts::PI;

/// Cubic ease curve `t² (3 - 2t)`.
///
/// Monotonic on `[0, 1]` with `smoothstep01(0) == 0` and `smoothstep01(1) == 1`.
/// Inputs outside the unit interval are not clamped.
#[inline]
#[must_use]
pub fn smoothstep01(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation `a + t * (b - a)`.
///
/// `t` is not clamped; values slightly outside `[0, 1]` extrapolate.
#[inline]
#[must_use]
pub fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}
