use std::any::TypeId;

use vecengine_hal::{
    layouts::{
        Acc32, Acc48, Acc64, Acc80, AccFloat, Accum, Arch, Bf16, CAcc32, CAcc48, CAcc64, CAcc80, CAccFloat, CAccLane,
        CFloat, CInt16, CInt32, DefaultAccumTag, DefaultMmul, DefaultSlidingMul, DefaultTwiddleOf, Engine, I4, Mmul,
        MmulBits, Vector,
    },
    test_suite::{
        mmul::{test_mmul, test_mmul_storage, test_mmul_to_vector},
        sliding_mul::test_sliding_mul,
    },
};

use crate::{ARCH, DefaultGen, Gen1, Gen2, Gen2p, default_engine};

#[cfg(test)]
mod vecengine_arch {
    use vecengine_hal::{backend_test_suite, cross_backend_test_suite};

    backend_test_suite! {
        mod gen1_vector_ops,
        backend = crate::Gen1,
        tests = {
            test_bitwise => vecengine_hal::test_suite::vector_ops::test_bitwise,
            test_compare => vecengine_hal::test_suite::vector_ops::test_compare,
            test_max_min => vecengine_hal::test_suite::vector_ops::test_max_min,
            test_shift => vecengine_hal::test_suite::vector_ops::test_shift,
            test_arith => vecengine_hal::test_suite::vector_ops::test_arith,
            test_permute => vecengine_hal::test_suite::vector_ops::test_permute,
            test_interleave_wide_step => vecengine_hal::test_suite::vector_ops::test_interleave_wide_step,
            test_reduce => vecengine_hal::test_suite::vector_ops::test_reduce,
        }
    }

    backend_test_suite! {
        mod gen2_vector_ops,
        backend = crate::Gen2,
        tests = {
            test_bitwise => vecengine_hal::test_suite::vector_ops::test_bitwise,
            test_compare => vecengine_hal::test_suite::vector_ops::test_compare,
            test_max_min => vecengine_hal::test_suite::vector_ops::test_max_min,
            test_shift => vecengine_hal::test_suite::vector_ops::test_shift,
            test_arith => vecengine_hal::test_suite::vector_ops::test_arith,
            test_permute => vecengine_hal::test_suite::vector_ops::test_permute,
            test_interleave_wide_step => vecengine_hal::test_suite::vector_ops::test_interleave_wide_step,
            test_reduce => vecengine_hal::test_suite::vector_ops::test_reduce,
            test_subbyte => vecengine_hal::test_suite::vector_ops::test_subbyte,
        }
    }

    backend_test_suite! {
        mod gen2p_vector_ops,
        backend = crate::Gen2p,
        tests = {
            test_bitwise => vecengine_hal::test_suite::vector_ops::test_bitwise,
            test_compare => vecengine_hal::test_suite::vector_ops::test_compare,
            test_max_min => vecengine_hal::test_suite::vector_ops::test_max_min,
            test_shift => vecengine_hal::test_suite::vector_ops::test_shift,
            test_arith => vecengine_hal::test_suite::vector_ops::test_arith,
            test_permute => vecengine_hal::test_suite::vector_ops::test_permute,
            test_interleave_wide_step => vecengine_hal::test_suite::vector_ops::test_interleave_wide_step,
            test_reduce => vecengine_hal::test_suite::vector_ops::test_reduce,
            test_subbyte => vecengine_hal::test_suite::vector_ops::test_subbyte,
        }
    }

    cross_backend_test_suite! {
        mod gen1_gen2_vector_ops,
        backend_ref = crate::Gen1,
        backend_test = crate::Gen2,
        tests = {
            test_cross_vector_ops => vecengine_hal::test_suite::vector_ops::test_cross_vector_ops,
        }
    }

    cross_backend_test_suite! {
        mod gen2_gen2p_vector_ops,
        backend_ref = crate::Gen2,
        backend_test = crate::Gen2p,
        tests = {
            test_cross_vector_ops => vecengine_hal::test_suite::vector_ops::test_cross_vector_ops,
        }
    }

    backend_test_suite! {
        mod gen1_elementary,
        backend = crate::Gen1,
        tests = {
            test_sqrt => vecengine_hal::test_suite::elementary::test_sqrt,
            test_inv => vecengine_hal::test_suite::elementary::test_inv,
            test_fix_float_round_trip => vecengine_hal::test_suite::elementary::test_fix_float_round_trip,
            test_float2fix_saturates => vecengine_hal::test_suite::elementary::test_float2fix_saturates,
            test_float2fix_huge_inputs => vecengine_hal::test_suite::elementary::test_float2fix_huge_inputs,
            test_sincos => vecengine_hal::test_suite::elementary::test_sincos,
        }
    }

    backend_test_suite! {
        mod gen2_elementary,
        backend = crate::Gen2,
        tests = {
            test_inv => vecengine_hal::test_suite::elementary::test_inv,
            test_inv_bf16 => vecengine_hal::test_suite::elementary::test_inv_bf16,
            test_fix_float_round_trip => vecengine_hal::test_suite::elementary::test_fix_float_round_trip,
            test_float2fix_saturates => vecengine_hal::test_suite::elementary::test_float2fix_saturates,
            test_float2fix_huge_inputs => vecengine_hal::test_suite::elementary::test_float2fix_huge_inputs,
            test_float2fix_bf16 => vecengine_hal::test_suite::elementary::test_float2fix_bf16,
            test_fix2float_acc => vecengine_hal::test_suite::elementary::test_fix2float_acc,
        }
    }

    backend_test_suite! {
        mod gen2p_elementary,
        backend = crate::Gen2p,
        tests = {
            test_sqrt => vecengine_hal::test_suite::elementary::test_sqrt,
            test_inv => vecengine_hal::test_suite::elementary::test_inv,
            test_inv_bf16 => vecengine_hal::test_suite::elementary::test_inv_bf16,
            test_fix_float_round_trip => vecengine_hal::test_suite::elementary::test_fix_float_round_trip,
            test_float2fix_saturates => vecengine_hal::test_suite::elementary::test_float2fix_saturates,
            test_float2fix_huge_inputs => vecengine_hal::test_suite::elementary::test_float2fix_huge_inputs,
            test_float2fix_bf16 => vecengine_hal::test_suite::elementary::test_float2fix_bf16,
            test_fix2float_bf16 => vecengine_hal::test_suite::elementary::test_fix2float_bf16,
            test_sqrt_bf16 => vecengine_hal::test_suite::elementary::test_sqrt_bf16,
            test_fix2float_acc => vecengine_hal::test_suite::elementary::test_fix2float_acc,
            test_tanh_exp2 => vecengine_hal::test_suite::elementary::test_tanh_exp2,
        }
    }

    backend_test_suite! {
        mod gen1_fft,
        backend = crate::Gen1,
        tests = {
            test_fft_radix2 => vecengine_hal::test_suite::fft::test_fft_radix2::<crate::Gen1, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_radix3 => vecengine_hal::test_suite::fft::test_fft_radix3::<crate::Gen1, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_radix4 => vecengine_hal::test_suite::fft::test_fft_radix4::<crate::Gen1, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_radix5 => vecengine_hal::test_suite::fft::test_fft_radix5::<crate::Gen1, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_radix2_cint32 => vecengine_hal::test_suite::fft::test_fft_radix2::<crate::Gen1, vecengine_hal::layouts::CInt32, vecengine_hal::layouts::CInt32>,
            test_fft_radix3_cint32 => vecengine_hal::test_suite::fft::test_fft_radix3::<crate::Gen1, vecengine_hal::layouts::CInt32, vecengine_hal::layouts::CInt32>,
            test_fft_radix4_cint32 => vecengine_hal::test_suite::fft::test_fft_radix4::<crate::Gen1, vecengine_hal::layouts::CInt32, vecengine_hal::layouts::CInt32>,
            test_fft_radix5_cint32 => vecengine_hal::test_suite::fft::test_fft_radix5::<crate::Gen1, vecengine_hal::layouts::CInt32, vecengine_hal::layouts::CInt32>,
            test_fft_radix2_cfloat => vecengine_hal::test_suite::fft::test_fft_radix2::<crate::Gen1, vecengine_hal::layouts::CFloat, vecengine_hal::layouts::CFloat>,
            test_fft_radix3_cfloat => vecengine_hal::test_suite::fft::test_fft_radix3::<crate::Gen1, vecengine_hal::layouts::CFloat, vecengine_hal::layouts::CFloat>,
            test_fft_radix5_cfloat => vecengine_hal::test_suite::fft::test_fft_radix5::<crate::Gen1, vecengine_hal::layouts::CFloat, vecengine_hal::layouts::CFloat>,
            test_fft_min_points => vecengine_hal::test_suite::fft::test_fft_min_points::<crate::Gen1, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_min_points_cint32 => vecengine_hal::test_suite::fft::test_fft_min_points::<crate::Gen1, vecengine_hal::layouts::CInt32, vecengine_hal::layouts::CInt32>,
            test_fft_min_points_cfloat => vecengine_hal::test_suite::fft::test_fft_min_points::<crate::Gen1, vecengine_hal::layouts::CFloat, vecengine_hal::layouts::CFloat>,
            test_fft_stage_iterator => vecengine_hal::test_suite::fft::test_fft_stage_iterator::<crate::Gen1, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_two_point => vecengine_hal::test_suite::fft::test_fft_two_point::<crate::Gen1, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_dyn_vectorization => vecengine_hal::test_suite::fft::test_fft_dyn_vectorization::<crate::Gen1, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_two_point_cfloat => vecengine_hal::test_suite::fft::test_fft_two_point::<crate::Gen1, vecengine_hal::layouts::CFloat, vecengine_hal::layouts::CFloat>,
            test_fft_dyn_vectorization_cfloat => vecengine_hal::test_suite::fft::test_fft_dyn_vectorization::<crate::Gen1, vecengine_hal::layouts::CFloat, vecengine_hal::layouts::CFloat>,
        }
    }

    backend_test_suite! {
        mod gen2_fft,
        backend = crate::Gen2,
        tests = {
            test_fft_radix2 => vecengine_hal::test_suite::fft::test_fft_radix2::<crate::Gen2, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_radix3 => vecengine_hal::test_suite::fft::test_fft_radix3::<crate::Gen2, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_radix4 => vecengine_hal::test_suite::fft::test_fft_radix4::<crate::Gen2, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_radix5 => vecengine_hal::test_suite::fft::test_fft_radix5::<crate::Gen2, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_radix2_cint32 => vecengine_hal::test_suite::fft::test_fft_radix2::<crate::Gen2, vecengine_hal::layouts::CInt32, vecengine_hal::layouts::CInt16>,
            test_fft_radix4_cint32 => vecengine_hal::test_suite::fft::test_fft_radix4::<crate::Gen2, vecengine_hal::layouts::CInt32, vecengine_hal::layouts::CInt16>,
            test_fft_radix2_cbf16 => vecengine_hal::test_suite::fft::test_fft_radix2::<crate::Gen2, vecengine_hal::layouts::CBf16, vecengine_hal::layouts::CBf16>,
            test_fft_radix4_cbf16 => vecengine_hal::test_suite::fft::test_fft_radix4::<crate::Gen2, vecengine_hal::layouts::CBf16, vecengine_hal::layouts::CBf16>,
            test_fft_min_points => vecengine_hal::test_suite::fft::test_fft_min_points::<crate::Gen2, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_min_points_cbf16 => vecengine_hal::test_suite::fft::test_fft_min_points::<crate::Gen2, vecengine_hal::layouts::CBf16, vecengine_hal::layouts::CBf16>,
            test_fft_stage_iterator => vecengine_hal::test_suite::fft::test_fft_stage_iterator::<crate::Gen2, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_two_point => vecengine_hal::test_suite::fft::test_fft_two_point::<crate::Gen2, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_dyn_vectorization => vecengine_hal::test_suite::fft::test_fft_dyn_vectorization::<crate::Gen2, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_dyn_vectorization_cbf16 => vecengine_hal::test_suite::fft::test_fft_dyn_vectorization::<crate::Gen2, vecengine_hal::layouts::CBf16, vecengine_hal::layouts::CBf16>,
        }
    }

    backend_test_suite! {
        mod gen2p_fft,
        backend = crate::Gen2p,
        tests = {
            test_fft_radix2 => vecengine_hal::test_suite::fft::test_fft_radix2::<crate::Gen2p, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_radix4 => vecengine_hal::test_suite::fft::test_fft_radix4::<crate::Gen2p, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_radix2_cint32 => vecengine_hal::test_suite::fft::test_fft_radix2::<crate::Gen2p, vecengine_hal::layouts::CInt32, vecengine_hal::layouts::CInt16>,
            test_fft_radix4_cint32 => vecengine_hal::test_suite::fft::test_fft_radix4::<crate::Gen2p, vecengine_hal::layouts::CInt32, vecengine_hal::layouts::CInt16>,
            test_fft_min_points => vecengine_hal::test_suite::fft::test_fft_min_points::<crate::Gen2p, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_stage_iterator => vecengine_hal::test_suite::fft::test_fft_stage_iterator::<crate::Gen2p, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_two_point => vecengine_hal::test_suite::fft::test_fft_two_point::<crate::Gen2p, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
            test_fft_dyn_vectorization => vecengine_hal::test_suite::fft::test_fft_dyn_vectorization::<crate::Gen2p, vecengine_hal::layouts::CInt16, vecengine_hal::layouts::CInt16>,
        }
    }

    backend_test_suite! {
        mod gen1_mmul,
        backend = crate::Gen1,
        tests = {
            test_mmul_to_vector => vecengine_hal::test_suite::mmul::test_mmul_to_vector::<crate::Gen1, vecengine_hal::layouts::Acc48>,
        }
    }

    backend_test_suite! {
        mod gen2_mmul,
        backend = crate::Gen2,
        tests = {
            test_mmul_to_vector => vecengine_hal::test_suite::mmul::test_mmul_to_vector::<crate::Gen2, vecengine_hal::layouts::Acc32>,
        }
    }

    backend_test_suite! {
        mod gen2p_mmul,
        backend = crate::Gen2p,
        tests = {
            test_mmul_to_vector => vecengine_hal::test_suite::mmul::test_mmul_to_vector::<crate::Gen2p, vecengine_hal::layouts::Acc64>,
        }
    }
}

/// Runs [test_mmul] on every line of a generation's tile mode table.
macro_rules! check_mmul_modes {
    ($gen:ty; $($ta:ty, $tb:ty, $acc:ty: $(($m:literal, $k:literal, $n:literal) $layout:ident),+);+ $(;)?) => {{
        let engine: Engine<$gen> = Engine::new();
        $(
            $(
                test_mmul::<$gen, $ta, $tb, $acc, $m, $k, $n, { $m * $k }, { $k * $n }, { $m * $n }>(&engine);
            )+
        )+
    }};
}

#[test]
fn test_mmul_modes_gen1() {
    crate::gen1::mmul::gen1_mmul_table!(check_mmul_modes);
}

#[test]
fn test_mmul_modes_gen2() {
    crate::gen2::mmul::gen2_mmul_table!(check_mmul_modes);
}

#[test]
fn test_mmul_modes_gen2p() {
    crate::gen2p::mmul::gen2p_mmul_table!(check_mmul_modes);
}

/// Runs [test_sliding_mul] on every line of a generation's sliding multiply
/// table, with twice the native lanes and one point more than native.
macro_rules! check_sliding_mul_modes {
    ($gen:ty; $($tc:ty, $td:ty, $acc:ty: ($lanes:literal, $points:literal));+ $(;)?) => {{
        let engine: Engine<$gen> = Engine::new();
        $(
            test_sliding_mul::<$gen, $tc, $td, $acc, { 2 * $lanes }, { $points + 1 }, 1, 1, 1, 16, 32>(&engine);
        )+
    }};
}

#[test]
fn test_sliding_mul_modes_gen1() {
    crate::gen1::sliding_mul::gen1_sliding_mul_table!(check_sliding_mul_modes);
}

#[test]
fn test_sliding_mul_modes_gen2() {
    crate::gen2::sliding_mul::gen2_sliding_mul_table!(check_sliding_mul_modes);
}

#[test]
fn test_sliding_mul_modes_gen2p() {
    crate::gen2p::sliding_mul::gen2p_sliding_mul_table!(check_sliding_mul_modes);
}

#[test]
fn test_sliding_mul_steps() {
    test_sliding_mul::<Gen1, i16, i16, Acc48, 16, 8, 2, 3, 2, 16, 64>(&Engine::new());
    test_sliding_mul::<Gen1, CInt16, CInt16, CAcc48, 4, 3, 3, 1, 4, 8, 32>(&Engine::new());
    test_sliding_mul::<Gen2, i16, i16, Acc32, 32, 4, 2, 2, 2, 32, 128>(&Engine::new());
    test_sliding_mul::<Gen2p, Bf16, Bf16, AccFloat, 16, 5, 1, 2, 1, 32, 64>(&Engine::new());
    test_sliding_mul::<Gen2p, i16, i16, Acc32, 4, 2, 1, 1, 1, 16, 16>(&Engine::new());
}

#[test]
fn test_default_sliding_mul() {
    // 4-tap FIR on Gen1: y[l] = sum_p h[p] * x[l + p]
    let h: Vector<i16, 16> = Vector::from_fn(|i| if i < 4 { i as i16 + 1 } else { 0 });
    let x: Vector<i16, 32> = Vector::from_fn(|i| i as i16);
    let y: Accum<Acc32, 8> = DefaultSlidingMul::<Gen1, i16, i16, 8, 4>::mul(&h, 0, &x, 0);
    for l in 0..8 {
        let want: i128 = (0..4usize).map(|p| (p as i128 + 1) * (l + p) as i128).sum();
        assert_eq!(y.get(l), want, "lane {l}");
    }
}

#[test]
fn test_mmul_storage_wraps() {
    test_mmul_storage::<Gen1, i32, i16, Acc48, 4, 4, 4, 16, 16, 16>(&Engine::new());
    test_mmul_storage::<Gen1, i32, i32, Acc64, 2, 2, 2, 4, 4, 4>(&Engine::new());
    test_mmul_storage::<Gen2, i16, i16, Acc32, 4, 4, 4, 16, 16, 16>(&Engine::new());
    test_mmul_storage::<Gen2p, i32, i32, Acc64, 4, 4, 4, 16, 16, 16>(&Engine::new());
}

#[test]
fn test_default_and_sized_accumulators() {
    assert_eq!(TypeId::of::<DefaultAccumTag<Gen1, i16, i16>>(), TypeId::of::<Acc32>());
    assert_eq!(TypeId::of::<DefaultAccumTag<Gen1, i32, i16>>(), TypeId::of::<Acc48>());
    assert_eq!(TypeId::of::<DefaultAccumTag<Gen2, i32, i16>>(), TypeId::of::<Acc64>());
    assert_eq!(TypeId::of::<DefaultAccumTag<Gen2p, Bf16, Bf16>>(), TypeId::of::<AccFloat>());
    assert_eq!(TypeId::of::<DefaultAccumTag<Gen1, CInt16, i16>>(), TypeId::of::<CAcc32>());
    assert_eq!(TypeId::of::<DefaultAccumTag<Gen1, CInt32, CInt16>>(), TypeId::of::<CAcc64>());
    assert_eq!(TypeId::of::<DefaultAccumTag<Gen2p, CInt16, i16>>(), TypeId::of::<CAcc64>());

    let a: Vector<i16, 16> = Vector::from_fn(|i| i as i16 - 8);
    let b: Vector<i16, 32> = Vector::from_fn(|i| 3 * i as i16);
    let mut c: DefaultMmul<Gen2, i16, i16, 4, 4, 8> = Mmul::new();
    c.mac(&a, &b);
    let acc: Accum<Acc32, 32> = c.to_accum();
    // row 0 of A is [-8, -7, -6, -5], column 0 of B is [0, 24, 48, 72]
    assert_eq!(acc.get(0), -7 * 24 - 6 * 48 - 5 * 72);

    // 48 bits are served by the 64-bit accumulator on Gen2
    let mut wide: MmulBits<Gen2, i16, i16, 48, 4, 4, 8> = Mmul::new();
    wide.mac(&a, &b);
    let wide: Accum<Acc64, 32> = wide.to_accum();
    assert_eq!(wide.get(0), acc.get(0));

    // complex by real on Gen1: (1 + 2i) * 3 + (-1 + i) * 4
    let ca: Vector<CInt16, 4> = Vector::from_fn(|i| if i % 2 == 0 { CInt16::new(1, 2) } else { CInt16::new(-1, 1) });
    let cb: Vector<i16, 8> = Vector::from_fn(|i| if i < 4 { 3 } else { 4 });
    let mut cc: DefaultMmul<Gen1, CInt16, i16, 2, 2, 4> = Mmul::new();
    cc.mac(&ca, &cb);
    let cacc: Accum<CAcc32, 8> = cc.to_accum();
    assert_eq!(cacc.get(0), CAccLane::new(-1, 10));

    let mut c80: MmulBits<Gen1, CInt32, CInt16, 80, 2, 2, 2> = Mmul::new();
    let a32: Vector<CInt32, 4> = Vector::from_fn(|_| CInt32::new(1 << 30, 0));
    let b16: Vector<CInt16, 4> = Vector::from_fn(|_| CInt16::new(0, 1 << 14));
    c80.mac(&a32, &b16);
    let acc80: Accum<CAcc80, 4> = c80.to_accum();
    assert_eq!(acc80.get(3), CAccLane::new(0, 1 << 45));
}

#[test]
fn test_default_twiddles() {
    assert_eq!(TypeId::of::<DefaultTwiddleOf<Gen1, CInt32>>(), TypeId::of::<CInt16>());
    assert_eq!(TypeId::of::<DefaultTwiddleOf<Gen1, CFloat>>(), TypeId::of::<CFloat>());
    assert_eq!(TypeId::of::<DefaultTwiddleOf<Gen2p, CInt32>>(), TypeId::of::<CInt16>());
}

#[test]
fn test_generation_widths() {
    assert_eq!(Engine::<Gen1>::new().native_lanes::<i16>(), 16);
    assert_eq!(Engine::<Gen2>::new().native_lanes::<i16>(), 32);
    assert_eq!(Engine::<Gen2p>::new().native_lanes::<I4>(), 128);
    assert_eq!(Engine::<Gen2p>::new().arch(), Arch::Gen2p);
    assert_eq!(default_engine().arch(), ARCH);
    assert_eq!(TypeId::of::<DefaultGen>() == TypeId::of::<Gen2>(), ARCH == Arch::Gen2);
}

