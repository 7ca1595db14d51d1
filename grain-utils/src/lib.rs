//! Leaf primitives shared by the grain crates.
//!
//! - [`random`] - seedable random sources, bit-compatible with `java.util.Random`
//! - [`math`] - the interpolation kernel used by every noise dimension

pub mod math;
pub mod random;
