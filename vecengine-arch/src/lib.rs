//! Vector engine generations for [`vecengine_hal`].
//!
//! This crate provides the three generation types [`Gen1`], [`Gen2`] and
//! [`Gen2p`]. Each implements the _open extension point_ (OEP) traits of
//! [`vecengine_hal::oep`]: the native register primitives that the width
//! dispatch of `vecengine_hal` decomposes every logical operation onto,
//! the elementary functions the generation has in hardware or emulates,
//! its matrix-multiply tile modes and its FFT stage support tables.
//!
//! The internal modules are organized by generation, then by domain:
//!
//! | Module           | Domain                                                       |
//! |------------------|--------------------------------------------------------------|
//! | `macros`         | Shared implementation macros for vector families and tables  |
//! | `gen*`           | Generation type, native widths, vector family primitives     |
//! | `gen*::elementary` | Square root, reciprocals, sine/cosine, fixed/float conversions |
//! | `gen*::mmul`     | Tile modes, result layouts, default accumulators             |
//! | `gen*::fft`      | Stage support, output vector sizes, default twiddles         |
//!
//! # Generations
//!
//! | Generation | Register | Lanes                         | Reductions | Elementary                            |
//! |------------|----------|-------------------------------|------------|---------------------------------------|
//! | [`Gen1`]   | 256 bits | 8/16/32-bit, `f32`, complex   | halving    | native `f32`                          |
//! | [`Gen2`]   | 512 bits | adds 4-bit and bfloat16       | halving    | emulated reciprocals and conversions  |
//! | [`Gen2p`]  | 512 bits | as [`Gen2`]                   | native     | native `f32`, `tanh`, `exp2`          |
//!
//! An operation, tile shape or FFT stage that a generation does not support
//! has no trait implementation (or a negative stage code) and fails to
//! compile at the point of use.
//!
//! # Build-wide generation
//!
//! The cargo features `gen1`, `gen2` (default) and `gen2p` select
//! [`DefaultGen`] and [`ARCH`]. When several are enabled, `gen2p` wins over
//! `gen1`, which wins over `gen2`.
//!
//! ```
//! use vecengine_arch::{DefaultGen, default_engine};
//! use vecengine_hal::{api::VecArith, layouts::{Engine, Vector}};
//!
//! let engine: Engine<DefaultGen> = default_engine();
//! let a: Vector<i16, 64> = Vector::from_fn(|i| i as i16);
//! let b: Vector<i16, 64> = engine.add(a, 1i16);
//! assert_eq!(b.get(63), 64);
//! ```

mod macros;

mod gen1;
mod gen2;
mod gen2p;

#[cfg(test)]
mod tests;

pub use gen1::Gen1;
pub use gen2::Gen2;
pub use gen2p::Gen2p;

use vecengine_hal::layouts::{Arch, Engine, Generation};

#[cfg(feature = "gen2p")]
pub type DefaultGen = Gen2p;

#[cfg(all(feature = "gen1", not(feature = "gen2p")))]
pub type DefaultGen = Gen1;

#[cfg(not(any(feature = "gen1", feature = "gen2p")))]
pub type DefaultGen = Gen2;

/// Generation selected for the build.
pub const ARCH: Arch = <DefaultGen as Generation>::ARCH;

/// Engine of the build-wide generation.
pub fn default_engine() -> Engine<DefaultGen> {
    Engine::new()
}
