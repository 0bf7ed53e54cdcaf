use vecengine_hal::{
    layouts::{Acc32, Acc64, AccumTag, Bf16},
    oep::{
        Exp2Impl, Fix2FloatAccImpl, Fix2FloatImpl, Float2FixImpl, InvImpl, InvSqrtImpl, SqrtImpl, TanhImpl,
    },
    reference::elementary::{
        bf16_to_int_ref, exp2_ref, fix2float_acc_emulated_ref, fix2float_emulated_ref, fix2float_ref,
        float2fix_emulated_ref, inv_emulated_ref, inv_ref, invsqrt_emulated_ref, invsqrt_ref, sqrt_ref, tanh_ref,
    },
};

use super::Gen2p;

unsafe impl SqrtImpl<f32> for Gen2p {
    fn sqrt_impl(a: &[f32], res: &mut [f32]) {
        sqrt_ref(a, res);
    }
}

unsafe impl SqrtImpl<Bf16> for Gen2p {
    fn sqrt_impl(a: &[Bf16], res: &mut [Bf16]) {
        sqrt_ref(a, res);
    }
}

unsafe impl SqrtImpl<Bf16, f32> for Gen2p {
    fn sqrt_impl(a: &[Bf16], res: &mut [f32]) {
        sqrt_ref(a, res);
    }
}

unsafe impl InvImpl<f32> for Gen2p {
    fn inv_impl(a: &[f32], res: &mut [f32]) {
        inv_ref(a, res);
    }
}

// bfloat16 has no native reciprocal
unsafe impl InvImpl<Bf16> for Gen2p {
    fn inv_impl(a: &[Bf16], res: &mut [Bf16]) {
        inv_emulated_ref(a, res);
    }
}

unsafe impl InvSqrtImpl<f32> for Gen2p {
    fn invsqrt_impl(a: &[f32], res: &mut [f32]) {
        invsqrt_ref(a, res);
    }
}

unsafe impl InvSqrtImpl<Bf16> for Gen2p {
    fn invsqrt_impl(a: &[Bf16], res: &mut [Bf16]) {
        invsqrt_emulated_ref(a, res);
    }
}

unsafe impl Fix2FloatImpl<i16> for Gen2p {
    fn fix2float_impl(a: &[i16], shift: i32, res: &mut [f32]) {
        fix2float_emulated_ref(a, shift, res);
    }
}

unsafe impl Fix2FloatImpl<i32> for Gen2p {
    fn fix2float_impl(a: &[i32], shift: i32, res: &mut [f32]) {
        fix2float_emulated_ref(a, shift, res);
    }
}

// integer to bfloat16 is a native conversion
unsafe impl Fix2FloatImpl<i16, Bf16> for Gen2p {
    fn fix2float_impl(a: &[i16], shift: i32, res: &mut [Bf16]) {
        fix2float_ref(a, shift, res);
    }
}

unsafe impl Fix2FloatImpl<i32, Bf16> for Gen2p {
    fn fix2float_impl(a: &[i32], shift: i32, res: &mut [Bf16]) {
        fix2float_ref(a, shift, res);
    }
}

unsafe impl Fix2FloatAccImpl<Acc32> for Gen2p {
    fn fix2float_acc_impl(a: &[i128], shift: i32, res: &mut [f32]) {
        fix2float_acc_emulated_ref(a, Acc32::BITS, shift, res);
    }
}

unsafe impl Fix2FloatAccImpl<Acc64> for Gen2p {
    fn fix2float_acc_impl(a: &[i128], shift: i32, res: &mut [f32]) {
        fix2float_acc_emulated_ref(a, Acc64::BITS, shift, res);
    }
}

unsafe impl Float2FixImpl<i16> for Gen2p {
    fn float2fix_impl(a: &[f32], shift: i32, res: &mut [i16]) {
        float2fix_emulated_ref(a, shift, res);
    }
}

unsafe impl Float2FixImpl<i32> for Gen2p {
    fn float2fix_impl(a: &[f32], shift: i32, res: &mut [i32]) {
        float2fix_emulated_ref(a, shift, res);
    }
}

unsafe impl Float2FixImpl<i16, Bf16> for Gen2p {
    fn float2fix_impl(a: &[Bf16], shift: i32, res: &mut [i16]) {
        bf16_to_int_ref(a, shift, res);
    }
}

unsafe impl Float2FixImpl<i32, Bf16> for Gen2p {
    fn float2fix_impl(a: &[Bf16], shift: i32, res: &mut [i32]) {
        bf16_to_int_ref(a, shift, res);
    }
}

unsafe impl TanhImpl<f32> for Gen2p {
    fn tanh_impl(a: &[f32], res: &mut [Bf16]) {
        tanh_ref(a, res);
    }
}

unsafe impl Exp2Impl<f32> for Gen2p {
    fn exp2_impl(a: &[f32], res: &mut [Bf16]) {
        exp2_ref(a, res);
    }
}
