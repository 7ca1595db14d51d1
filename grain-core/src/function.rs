//! Scalar functions of one, two or three coordinates.
//!
//! Implemented by the noise sources and by plain closures, so the range probe
//! and the grid sampler accept either.

use crate::context::{DefaultNoise, NoiseContext, default_context};
use crate::noise::LatticeTable;

/// A function `f32 -> f32`.
pub trait Function1D {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: f32) -> f32;
}

/// A function `(f32, f32) -> f32`.
pub trait Function2D {
    /// Evaluates the function at `(x, y)`.
    fn evaluate(&self, x: f32, y: f32) -> f32;
}

/// A function `(f32, f32, f32) -> f32`.
pub trait Function3D {
    /// Evaluates the function at `(x, y, z)`.
    fn evaluate(&self, x: f32, y: f32, z: f32) -> f32;
}

impl<F: Fn(f32) -> f32> Function1D for F {
    #[inline]
    fn evaluate(&self, x: f32) -> f32 {
        self(x)
    }
}

impl<F: Fn(f32, f32) -> f32> Function2D for F {
    #[inline]
    fn evaluate(&self, x: f32, y: f32) -> f32 {
        self(x, y)
    }
}

impl<F: Fn(f32, f32, f32) -> f32> Function3D for F {
    #[inline]
    fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
        self(x, y, z)
    }
}

macro_rules! impl_noise_functions {
    ($ty:ty, $this:ident => $source:expr) => {
        impl Function1D for $ty {
            #[inline]
            fn evaluate(&self, x: f32) -> f32 {
                let $this = self;
                $source.noise1(x)
            }
        }

        impl Function2D for $ty {
            #[inline]
            fn evaluate(&self, x: f32, y: f32) -> f32 {
                let $this = self;
                $source.noise2(x, y)
            }
        }

        impl Function3D for $ty {
            #[inline]
            fn evaluate(&self, x: f32, y: f32, z: f32) -> f32 {
                let $this = self;
                $source.noise3(x, y, z)
            }
        }
    };
}

impl_noise_functions!(LatticeTable, this => this);
impl_noise_functions!(NoiseContext, this => this);
impl_noise_functions!(DefaultNoise, _this => default_context());
