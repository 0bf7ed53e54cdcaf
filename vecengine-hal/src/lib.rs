//! # vecengine-hal
//!
//! A width-dispatching SIMD abstraction layer over the vector units of a
//! family of VLIW DSP engine generations.
//!
//! Kernels are written once against fixed-size [`layouts::Vector`] values and
//! the [`api`] traits; every logical operation is decomposed at compile time
//! into calls to the native primitives of the selected generation, which
//! implements the [`oep`] (Open Extension Point) traits.
//!
//! ## Core Concepts
//!
//! **Generation:** A [`layouts::Generation`] type fixes the native register
//! width and the set of native primitives. Operations are invoked through the
//! zero-sized [`layouts::Engine`] handle of a generation.
//!
//! **Compute lanes:** 4-bit lanes are unpacked to 8 bits in chunks before they
//! reach a native primitive and packed back afterwards. All other lane types
//! are processed as they are.
//!
//! **Modes:** Narrowing conversions round and saturate according to the
//! per-thread [`layouts::RoundingMode`] and [`layouts::SaturationMode`], which
//! are changed for a scope with [`layouts::ModeGuard`].
//!
//! **Layout types** ([`layouts`]):
//! - [`layouts::Vector`] -- `N` lanes of an element type, at most 2048 bits.
//! - [`layouts::Mask`] -- one bit per lane.
//! - [`layouts::Accum`] -- high-precision lanes for multiply-accumulate.
//! - [`layouts::Mmul`] -- matrix tile product in the generation's register layout.
//! - [`layouts::FftDit`] -- one decimation-in-time FFT stage.
//!
//! ## Architecture
//!
//! 1. **[`api`]** -- Safe, user-facing operation traits (e.g. [`api::VecArith`],
//!    [`api::VecInvSqrt`]).
//! 2. **[`oep`]** -- Unsafe traits, one per native primitive family (e.g.
//!    [`oep::NativeArithImpl`]). Generation crates implement these.
//! 3. **[`delegates`]** -- Blanket `impl` glue connecting [`api`] to [`oep`] on
//!    [`layouts::Engine`].
//! 4. **[`dispatch`]** -- The width recursion: narrow vectors are grown into a
//!    native register, wide vectors are split in halves.
//! 5. **[`mod@reference`]** -- Pure-Rust implementations of every native
//!    primitive, used by generation crates and as a correctness oracle.
//!
//! ## Testing and Benchmarking
//!
//! The [`test_suite`] module provides generation-parametric test functions,
//! instantiated by generation crates through [`backend_test_suite!`]. The
//! [`bench_suite`] module provides Criterion harnesses.
//!
//! ## Safety Contract
//!
//! All [`oep`] traits are `unsafe` to implement. Implementors must uphold the
//! contract documented in [`doc::backend_safety`].
//!
//! ## Non-Goals
//!
//! - No memory allocation inside vector operations and no I/O.
//! - Unsupported type, shape and generation combinations are compile errors,
//!   never runtime errors.

#![deny(rustdoc::broken_intra_doc_links)]

/// Safe, user-facing operation traits.
pub mod api;

/// Criterion-based benchmark harnesses, generic over any generation.
pub mod bench_suite;

/// Blanket implementations connecting [`api`] traits to [`oep`] traits on
/// [`layouts::Engine`].
pub mod delegates;

/// Decomposition of logical vectors onto native registers.
pub mod dispatch;

/// Errors of the checked entry points.
pub mod error;

/// Lane types, vectors, masks, accumulators, tiles, FFT stages and modes.
pub mod layouts;

/// Open Extension Points: `unsafe` traits that generation crates implement.
///
/// See [`doc::backend_safety`] for the safety contract.
pub mod oep;

/// Pure-Rust reference implementations of every native primitive.
pub mod reference;

/// Deterministic pseudorandom number generation based on ChaCha8.
pub mod source;

/// Generation-parametric test functions.
///
/// Generation crates instantiate these via [`backend_test_suite!`].
pub mod test_suite;

/// Embedded safety contract documentation for generation implementors.
pub mod doc {
    /// Safety contract that all [`crate::oep`] trait implementations must uphold.
    #[doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/docs/backend_safety_contract.md"))]
    pub mod backend_safety {
        pub const _PLACEHOLDER: () = ();
    }
}
