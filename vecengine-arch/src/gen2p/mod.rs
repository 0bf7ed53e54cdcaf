//! Second generation refresh.
//!
//! Same lane types and 512-bit registers as [crate::Gen2], with native
//! horizontal reductions, hardware square root and reciprocals in `f32`,
//! and `tanh`/`exp2` producing bfloat16. FFT stages are radix 2 and 4 only.

mod elementary;
mod fft;
pub(crate) mod mmul;
pub(crate) mod sliding_mul;

use vecengine_hal::layouts::{Arch, Bf16, CBf16, CFloat, CInt16, CInt32, Generation, I4, U4};

use crate::macros::{impl_additive_ops, impl_integer_ops, impl_lane_ops, impl_nibble_unpack, impl_ordered_ops};

#[derive(Clone, Copy, Debug, Default)]
pub struct Gen2p;

impl Generation for Gen2p {
    const ARCH: Arch = Arch::Gen2p;
    const NATIVE_VECTOR_BITS: usize = 512;
    const NATIVE_REDUCE: bool = true;
}

impl_integer_ops!(Gen2p: i8, u8, i16, u16, i32, u32);
impl_ordered_ops!(Gen2p: i8, u8, i16, u16, i32, u32, f32, Bf16);
impl_additive_ops!(Gen2p: i8, u8, i16, u16, i32, u32, f32, Bf16, CInt16, CInt32, CFloat, CBf16);
impl_lane_ops!(Gen2p: i8, u8, i16, u16, i32, u32, f32, Bf16, CInt16, CInt32, CFloat, CBf16);
impl_nibble_unpack!(Gen2p: I4 => i8, U4 => u8);
