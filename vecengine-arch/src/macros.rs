//! Implementation macros shared by the three generations.
//!
//! Every native primitive of the vector families is the reference function
//! of `vecengine_hal::reference` applied to one register; the macros stamp
//! those implementations for the lane types a generation supports.

/// Bitwise and shift primitives for integer compute lanes.
macro_rules! impl_integer_ops {
    ($gen:ty: $($t:ty),+ $(,)?) => {
        $(
            unsafe impl vecengine_hal::oep::NativeBitwiseImpl<$t> for $gen {
                fn bitwise_impl(op: vecengine_hal::layouts::BitwiseOp, a: &[$t], b: &[$t], res: &mut [$t]) {
                    vecengine_hal::reference::bitwise::bitwise_ref(op, a, b, res);
                }

                fn not_impl(a: &[$t], res: &mut [$t]) {
                    vecengine_hal::reference::bitwise::not_ref(a, res);
                }
            }

            unsafe impl vecengine_hal::oep::NativeShiftImpl<$t> for $gen {
                fn shift_impl(a: &[$t], up: u32, down: u32, res: &mut [$t]) {
                    vecengine_hal::reference::arith::shift_ref(
                        a,
                        up,
                        down,
                        vecengine_hal::layouts::rounding(),
                        vecengine_hal::layouts::saturation(),
                        res,
                    );
                }
            }
        )+
    };
}

/// Compare, max/min and max/min reduction primitives for ordered lanes.
///
/// Generations without a native horizontal reduction fold the register in
/// halves with their binary max/min.
macro_rules! impl_ordered_ops {
    ($gen:ty: $($t:ty),+ $(,)?) => {
        $(
            unsafe impl vecengine_hal::oep::NativeCmpImpl<$t> for $gen {
                fn cmp_impl(op: vecengine_hal::layouts::CmpOp, a: &[$t], b: &[$t]) -> u64 {
                    vecengine_hal::reference::compare::cmp_ref(op, a, b)
                }
            }

            unsafe impl vecengine_hal::oep::NativeMaxMinImpl<$t> for $gen {
                fn max_min_impl(op: vecengine_hal::layouts::MaxMinOp, a: &[$t], b: &[$t], res: &mut [$t]) {
                    vecengine_hal::reference::compare::max_min_ref(op, a, b, res);
                }

                fn max_min_cmp_impl(op: vecengine_hal::layouts::MaxMinOp, a: &[$t], b: &[$t], res: &mut [$t]) -> u64 {
                    vecengine_hal::reference::compare::max_min_cmp_ref(op, a, b, res)
                }
            }

            unsafe impl vecengine_hal::oep::NativeReduceImpl<$t> for $gen {
                fn reduce_max_min_impl(op: vecengine_hal::layouts::MaxMinOp, a: &[$t], len: usize) -> $t {
                    if <$gen as vecengine_hal::layouts::Generation>::NATIVE_REDUCE {
                        vecengine_hal::reference::reduce::reduce_max_min_ref(op, a, len)
                    } else {
                        vecengine_hal::reference::reduce::reduce_halving_ref(a, len, |x, y, r| {
                            vecengine_hal::reference::compare::max_min_ref(op, x, y, r)
                        })
                    }
                }
            }
        )+
    };
}

/// Add, sub, neg and sum reduction primitives.
macro_rules! impl_additive_ops {
    ($gen:ty: $($t:ty),+ $(,)?) => {
        $(
            unsafe impl vecengine_hal::oep::NativeArithImpl<$t> for $gen {
                fn arith_impl(op: vecengine_hal::layouts::ArithOp, a: &[$t], b: &[$t], res: &mut [$t]) {
                    vecengine_hal::reference::arith::arith_ref(op, a, b, res);
                }

                fn neg_impl(a: &[$t], res: &mut [$t]) {
                    vecengine_hal::reference::arith::neg_ref(a, res);
                }
            }

            unsafe impl vecengine_hal::oep::NativeReduceAddImpl<$t> for $gen {
                fn reduce_add_impl(a: &[$t], len: usize) -> $t {
                    if <$gen as vecengine_hal::layouts::Generation>::NATIVE_REDUCE {
                        vecengine_hal::reference::reduce::reduce_add_ref(a, len)
                    } else {
                        vecengine_hal::reference::reduce::reduce_halving_ref(a, len, |x, y, r| {
                            vecengine_hal::reference::arith::arith_ref(vecengine_hal::layouts::ArithOp::Add, x, y, r)
                        })
                    }
                }
            }
        )+
    };
}

/// Equality, permutations and the identity unpack for every full-width
/// lane type.
macro_rules! impl_lane_ops {
    ($gen:ty: $($t:ty),+ $(,)?) => {
        $(
            unsafe impl vecengine_hal::oep::NativeEqImpl<$t> for $gen {
                fn eq_impl(op: vecengine_hal::layouts::EqOp, a: &[$t], b: &[$t]) -> u64 {
                    vecengine_hal::reference::compare::eq_ref(op, a, b)
                }
            }

            unsafe impl vecengine_hal::oep::NativePermuteImpl<$t> for $gen {
                fn reverse_impl(a: &[$t], res: &mut [$t]) {
                    vecengine_hal::reference::permute::reverse_ref(a, res);
                }

                fn broadcast_impl(value: $t, res: &mut [$t]) {
                    vecengine_hal::reference::permute::broadcast_ref(value, res);
                }

                fn select_impl(a: &[$t], b: &[$t], mask: u64, res: &mut [$t]) {
                    vecengine_hal::reference::permute::select_ref(a, b, mask, res);
                }

                fn interleave_zip_impl(a: &[$t], b: &[$t], step: usize, lo: &mut [$t], hi: &mut [$t]) {
                    vecengine_hal::reference::permute::interleave_zip_ref(a, b, step, lo, hi);
                }

                fn interleave_unzip_impl(lo: &[$t], hi: &[$t], step: usize, a: &mut [$t], b: &mut [$t]) {
                    vecengine_hal::reference::permute::interleave_unzip_ref(lo, hi, step, a, b);
                }
            }

            unsafe impl vecengine_hal::oep::UnpackImpl<$t> for $gen {
                fn unpack_impl(a: &[$t], res: &mut [$t]) {
                    vecengine_hal::reference::pack::copy_ref(a, res);
                }

                fn pack_impl(a: &[$t], res: &mut [$t]) {
                    vecengine_hal::reference::pack::copy_back_ref(a, res);
                }
            }
        )+
    };
}

/// Native 4-bit unpack to 8 bits and saturating pack back.
macro_rules! impl_nibble_unpack {
    ($gen:ty: $($t:ty => $compute:ty),+ $(,)?) => {
        $(
            unsafe impl vecengine_hal::oep::UnpackImpl<$t> for $gen {
                fn unpack_impl(a: &[$t], res: &mut [$compute]) {
                    vecengine_hal::reference::pack::unpack_ref(a, res);
                }

                fn pack_impl(a: &[$compute], res: &mut [$t]) {
                    vecengine_hal::reference::pack::pack_ref(a, vecengine_hal::layouts::saturation(), res);
                }
            }
        )+
    };
}

/// Declares the native tile modes of a generation, one line per operand
/// types and accumulator.
macro_rules! mmul_modes {
    (@layout Single) => { vecengine_hal::layouts::CBlockLayout::Single };
    (@layout Array2) => { vecengine_hal::layouts::CBlockLayout::Array { regs: 2 } };
    (@layout Array4) => { vecengine_hal::layouts::CBlockLayout::Array { regs: 4 } };
    (@layout Wide2) => { vecengine_hal::layouts::CBlockLayout::Wide { factor: 2 } };
    (@layout Wide4) => { vecengine_hal::layouts::CBlockLayout::Wide { factor: 4 } };
    (@layout Interleaved) => { vecengine_hal::layouts::CBlockLayout::Interleaved };
    ($gen:ty; $($ta:ty, $tb:ty, $acc:ty: $(($m:literal, $k:literal, $n:literal) $layout:ident),+);+ $(;)?) => {
        $(
            $(
                unsafe impl vecengine_hal::oep::MmulImpl<$ta, $tb, $acc, $m, $k, $n> for $gen {
                    const LAYOUT: vecengine_hal::layouts::CBlockLayout = $crate::macros::mmul_modes!(@layout $layout);

                    fn mac_impl(
                        a: &[$ta],
                        b: &[$tb],
                        accumulate: bool,
                        reg: &mut [<$acc as vecengine_hal::layouts::AccumTag>::Lane],
                        stride: usize,
                    ) {
                        let bits: u32 = <$gen as vecengine_hal::layouts::Generation>::accum_storage_bits(
                            <$acc as vecengine_hal::layouts::AccumTag>::BITS,
                        );
                        vecengine_hal::reference::mmul::mmul_block_ref($k, a, b, accumulate, bits, reg, stride);
                    }
                }
            )+
        )+
    };
}

/// Declares the native sliding multiplies of a generation: output lanes and
/// products per lane handled by one call, per coefficient, data and
/// accumulator types.
macro_rules! sliding_mul_modes {
    ($gen:ty; $($tc:ty, $td:ty, $acc:ty: ($lanes:literal, $points:literal));+ $(;)?) => {
        $(
            unsafe impl vecengine_hal::oep::SlidingMulImpl<$tc, $td, $acc> for $gen {
                const NATIVE_LANES: usize = $lanes;
                const NATIVE_POINTS: usize = $points;

                fn sliding_mac_impl(
                    pattern: &vecengine_hal::layouts::SlidingPattern,
                    coeff: &[$tc],
                    data: &[$td],
                    accumulate: bool,
                    res: &mut [<$acc as vecengine_hal::layouts::AccumTag>::Lane],
                ) {
                    let bits: u32 = <$gen as vecengine_hal::layouts::Generation>::accum_storage_bits(
                        <$acc as vecengine_hal::layouts::AccumTag>::BITS,
                    );
                    vecengine_hal::reference::sliding_mul::sliding_mul_ref(pattern, coeff, data, accumulate, bits, res);
                }
            }
        )+
    };
}

/// Default accumulator of each operand pair.
macro_rules! default_accum {
    ($gen:ty: $(($ta:ty, $tb:ty) => $acc:ty),+ $(,)?) => {
        $(
            impl vecengine_hal::layouts::DefaultAccum<$ta, $tb> for $gen {
                type Tag = $acc;
            }
        )+
    };
}

/// Accumulator tag chosen for each requested width: the narrowest tag of
/// at least that many bits that the operand pair has tile modes for.
macro_rules! accum_for {
    (@pair $gen:ty, $ta:ty, $tb:ty, { $($b:literal => $acc:ty),+ $(,)? }) => {
        $(
            impl vecengine_hal::layouts::AccumFor<$ta, $tb, $b> for $gen {
                type Tag = $acc;
            }
        )+
    };
    ($gen:ty: [$(($ta:ty, $tb:ty)),+ $(,)?] $bits:tt) => {
        $(
            $crate::macros::accum_for!(@pair $gen, $ta, $tb, $bits);
        )+
    };
}

/// Complex lane types of the FFT support tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FftLane {
    CInt16,
    CInt32,
    CFloat,
    CBf16,
}

/// Declares the FFT stages of a generation for the listed
/// `(input, output, twiddle)` combinations; `STAGE` and `OUT_VECTOR_SIZE`
/// come from the generation's `stage` and `out_vector_size` functions.
macro_rules! fft_modes {
    ($gen:ty: $(($ti:ident, $to:ident, $tw:ident)),+ $(,)?) => {
        $(
            unsafe impl<const R: usize, const V: usize>
                vecengine_hal::oep::FftImpl<R, V, vecengine_hal::layouts::$ti, vecengine_hal::layouts::$to, vecengine_hal::layouts::$tw>
                for $gen
            {
                const STAGE: i32 = stage(R, V, FftLane::$ti, FftLane::$to, FftLane::$tw);
                const OUT_VECTOR_SIZE: usize = out_vector_size(R, V, FftLane::$ti, FftLane::$to, FftLane::$tw);
            }
        )+
    };
}

pub(crate) use {
    accum_for, default_accum, fft_modes, impl_additive_ops, impl_integer_ops, impl_lane_ops, impl_nibble_unpack,
    impl_ordered_ops, mmul_modes, sliding_mul_modes,
};
