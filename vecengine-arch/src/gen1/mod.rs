//! First generation vector engine.
//!
//! 256-bit native vectors, hardware floating point elementary functions
//! (square root, reciprocals, sine/cosine, fixed/float conversions), no
//! 4-bit or bfloat16 lanes. Accumulators of up to 48 bits are stored in 48
//! bits, wider ones in 80 bits.

mod elementary;
mod fft;
pub(crate) mod mmul;
pub(crate) mod sliding_mul;

use vecengine_hal::layouts::{Arch, CFloat, CInt16, CInt32, Generation};

use crate::macros::{impl_additive_ops, impl_integer_ops, impl_lane_ops, impl_ordered_ops};

#[derive(Clone, Copy, Debug, Default)]
pub struct Gen1;

impl Generation for Gen1 {
    const ARCH: Arch = Arch::Gen1;
    const NATIVE_VECTOR_BITS: usize = 256;
    const NATIVE_REDUCE: bool = false;

    fn accum_storage_bits(bits: u32) -> u32 {
        if bits <= 48 { 48 } else { 80 }
    }
}

impl_integer_ops!(Gen1: i8, u8, i16, u16, i32, u32);
impl_ordered_ops!(Gen1: i8, u8, i16, u16, i32, u32, f32);
impl_additive_ops!(Gen1: i8, u8, i16, u16, i32, u32, f32, CInt16, CInt32, CFloat);
impl_lane_ops!(Gen1: i8, u8, i16, u16, i32, u32, f32, CInt16, CInt32, CFloat);
