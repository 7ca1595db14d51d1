//! Classic lattice gradient noise.
//!
//! - [`LatticeTable`] - permutation and gradient arrays built from one seed
//! - `noise1` / `noise2` / `noise3` - gradient noise evaluated against a table
//! - `turbulence2` / `turbulence2_signed` / `turbulence3` - octave sums
//!
//! All evaluation methods live on [`LatticeTable`] and only read it, so a table
//! can be shared between threads freely.

mod evaluator;
mod lattice;
mod turbulence;

pub use evaluator::nan_substitutions;
pub use lattice::{B, LatticeTable, TABLE_LEN};
