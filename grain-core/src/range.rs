//! Empirical output range of a function, for amplitude calibration.
//!
//! The probe walks a fixed, irregularly spaced grid over `[-100, 100)` so the
//! same call always samples the same points. Both bounds start at `0.0`, so
//! the reported range always contains zero.

use serde::{Deserialize, Serialize};

use crate::context::NoiseContext;
use crate::function::{Function1D, Function2D};

const LOWER: f32 = -100.0;
const UPPER: f32 = 100.0;
const STEP_1D: f64 = 1.27139;
const STEP_X: f64 = 10.77139;
const STEP_Y: f64 = 10.35173;

/// Observed minimum and maximum of a function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Smallest value seen.
    pub min: f32,
    /// Largest value seen.
    pub max: f32,
}

impl ValueRange {
    const ZERO: Self = Self { min: 0.0, max: 0.0 };

    #[inline]
    fn include(&mut self, value: f32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// `max - min`.
    #[must_use]
    pub const fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Whether `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Maps `value` linearly so that `min -> 0` and `max -> 1`.
    ///
    /// An empty span maps everything to `0.0`.
    #[must_use]
    pub fn normalize(&self, value: f32) -> f32 {
        let span = self.span();
        if span > 0.0 {
            (value - self.min) / span
        } else {
            0.0
        }
    }
}

/// Advances a probe coordinate by a double-precision step.
#[inline]
fn step(v: f32, by: f64) -> f32 {
    (f64::from(v) + by) as f32
}

/// Samples `f` along `[-100, 100)` and returns the observed range.
pub fn find_range<F: Function1D + ?Sized>(f: &F) -> ValueRange {
    let mut range = ValueRange::ZERO;
    let mut x = LOWER;
    while x < UPPER {
        range.include(f.evaluate(x));
        x = step(x, STEP_1D);
    }
    range
}

/// Samples `f` over `[-100, 100)²` and returns the observed range.
pub fn find_range_2d<F: Function2D + ?Sized>(f: &F) -> ValueRange {
    let mut range = ValueRange::ZERO;
    let mut y = LOWER;
    while y < UPPER {
        let mut x = LOWER;
        while x < UPPER {
            range.include(f.evaluate(x, y));
            x = step(x, STEP_X);
        }
        y = step(y, STEP_Y);
    }
    range
}

/// A noise function the range probe can calibrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeTarget {
    /// [`NoiseContext::noise1`].
    Noise1,
    /// [`NoiseContext::sin_like_noise1`].
    SinLikeNoise1,
    /// [`NoiseContext::noise2`].
    Noise2,
    /// [`NoiseContext::turbulence2`].
    Turbulence2,
    /// [`NoiseContext::turbulence2_signed`].
    Turbulence2Signed,
    /// [`NoiseContext::turbulence3`], sampled on the `z = 0` plane.
    Turbulence3,
}

impl ProbeTarget {
    /// Every target, in report order.
    pub const ALL: [Self; 6] = [
        Self::Noise1,
        Self::SinLikeNoise1,
        Self::Noise2,
        Self::Turbulence2,
        Self::Turbulence2Signed,
        Self::Turbulence3,
    ];

    /// Name used in configuration files and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Noise1 => "noise1",
            Self::SinLikeNoise1 => "sin_like_noise1",
            Self::Noise2 => "noise2",
            Self::Turbulence2 => "turbulence2",
            Self::Turbulence2Signed => "turbulence2_signed",
            Self::Turbulence3 => "turbulence3",
        }
    }

    /// Runs the range probe for this target against one snapshot of `context`.
    ///
    /// `octaves` only affects the turbulence targets.
    #[must_use]
    pub fn probe(self, context: &NoiseContext, octaves: f32) -> ValueRange {
        let table = context.snapshot();
        match self {
            Self::Noise1 => find_range(&|x: f32| table.noise1(x)),
            Self::SinLikeNoise1 => find_range(&|x: f32| table.sin_like_noise1(x)),
            Self::Noise2 => find_range_2d(&|x: f32, y: f32| table.noise2(x, y)),
            Self::Turbulence2 => {
                find_range_2d(&|x: f32, y: f32| table.turbulence2(x, y, octaves))
            }
            Self::Turbulence2Signed => {
                find_range_2d(&|x: f32, y: f32| table.turbulence2_signed(x, y, octaves))
            }
            Self::Turbulence3 => {
                find_range_2d(&|x: f32, y: f32| table.turbulence3(x, y, 0.0, octaves))
            }
        }
    }
}
