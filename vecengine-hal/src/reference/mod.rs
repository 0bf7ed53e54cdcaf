//! Pure-Rust reference implementations of every native primitive.
//!
//! Each function works on one native register (plain slices whose length is
//! the native lane count) or on one tile or stage tuple. Generation crates
//! implement the [`crate::oep`] traits on top of these functions, and the
//! [`crate::test_suite`] module uses them as a correctness oracle.

pub mod arith;
pub mod bitwise;
pub mod compare;
pub mod elementary;
pub mod fft;
pub mod mmul;
pub mod pack;
pub mod permute;
pub mod reduce;
pub mod sliding_mul;
