//! Second generation vector engine.
//!
//! 512-bit native vectors, 4-bit integer and bfloat16 lanes. Reciprocals
//! and fixed/float conversions have no native instruction and run the
//! emulated sequences; there is no square root or sine/cosine.

mod elementary;
mod fft;
pub(crate) mod mmul;
pub(crate) mod sliding_mul;

use vecengine_hal::layouts::{Arch, Bf16, CBf16, CFloat, CInt16, CInt32, Generation, I4, U4};

use crate::macros::{impl_additive_ops, impl_integer_ops, impl_lane_ops, impl_nibble_unpack, impl_ordered_ops};

#[derive(Clone, Copy, Debug, Default)]
pub struct Gen2;

impl Generation for Gen2 {
    const ARCH: Arch = Arch::Gen2;
    const NATIVE_VECTOR_BITS: usize = 512;
    const NATIVE_REDUCE: bool = false;
}

impl_integer_ops!(Gen2: i8, u8, i16, u16, i32, u32);
impl_ordered_ops!(Gen2: i8, u8, i16, u16, i32, u32, f32, Bf16);
impl_additive_ops!(Gen2: i8, u8, i16, u16, i32, u32, f32, Bf16, CInt16, CInt32, CFloat, CBf16);
impl_lane_ops!(Gen2: i8, u8, i16, u16, i32, u32, f32, Bf16, CInt16, CInt32, CFloat, CBf16);
impl_nibble_unpack!(Gen2: I4 => i8, U4 => u8);
