//! Safe, user-facing operation traits, implemented for [crate::layouts::Engine].
//!
//! Traits are organized by operation family:
//! - **vector\_ops** -- bitwise logic, comparisons, max/min, shifts,
//!   arithmetic, permutations and horizontal reductions.
//! - **elementary** -- square roots, reciprocals, trigonometry and
//!   fixed/float conversions.
//!
//! Matrix tiles and FFT stages are value types of [crate::layouts]
//! ([crate::layouts::Mmul], [crate::layouts::FftDit]) and need no trait here.
//!
//! Kernel authors program against these traits; every call is decomposed by
//! [crate::dispatch] onto the [crate::oep] primitives of the generation.

mod elementary;
mod vector_ops;

pub use elementary::*;
pub use vector_ops::*;
