use vecengine_hal::{
    layouts::{SaturationMode, rounding},
    oep::{Fix2FloatImpl, Float2FixImpl, InvImpl, InvSqrtImpl, SinCosImpl, SqrtImpl},
    reference::elementary::{fix2float_ref, float2fix_ref, inv_ref, invsqrt_ref, sincos_ref, sqrt_ref},
};

use super::Gen1;

unsafe impl SqrtImpl<f32> for Gen1 {
    fn sqrt_impl(a: &[f32], res: &mut [f32]) {
        sqrt_ref(a, res);
    }
}

unsafe impl InvImpl<f32> for Gen1 {
    fn inv_impl(a: &[f32], res: &mut [f32]) {
        inv_ref(a, res);
    }
}

unsafe impl InvSqrtImpl<f32> for Gen1 {
    fn invsqrt_impl(a: &[f32], res: &mut [f32]) {
        invsqrt_ref(a, res);
    }
}

unsafe impl SinCosImpl<f32> for Gen1 {
    fn sincos_impl(a: &[f32], sin: &mut [f32], cos: &mut [f32]) {
        sincos_ref(a, sin, cos);
    }
}

unsafe impl Fix2FloatImpl<i16> for Gen1 {
    fn fix2float_impl(a: &[i16], shift: i32, res: &mut [f32]) {
        fix2float_ref(a, shift, res);
    }
}

unsafe impl Fix2FloatImpl<i32> for Gen1 {
    fn fix2float_impl(a: &[i32], shift: i32, res: &mut [f32]) {
        fix2float_ref(a, shift, res);
    }
}

// the conversion unit always saturates
unsafe impl Float2FixImpl<i16> for Gen1 {
    fn float2fix_impl(a: &[f32], shift: i32, res: &mut [i16]) {
        float2fix_ref(a, shift, rounding(), SaturationMode::Saturate, res);
    }
}

unsafe impl Float2FixImpl<i32> for Gen1 {
    fn float2fix_impl(a: &[f32], shift: i32, res: &mut [i32]) {
        float2fix_ref(a, shift, rounding(), SaturationMode::Saturate, res);
    }
}
