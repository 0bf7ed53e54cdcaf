//! Open Extension Points (OEP) for generation crates.
//!
//! This module defines the `unsafe` trait layer through which a vector engine
//! generation exposes its native primitives. Every trait works on exactly one
//! native register worth of lanes (or on one fixed tile or FFT stage shape);
//! the [`crate::delegates`] layer decomposes the logical operations of
//! [`crate::api`] onto these calls.
//!
//! All traits in this module are `unsafe` because implementations must uphold
//! the backend safety contract.

mod elementary;
mod fft;
mod mmul;
mod sliding_mul;
mod vector_ops;

pub use elementary::*;
pub use fft::*;
pub use mmul::*;
pub use sliding_mul::*;
pub use vector_ops::*;
