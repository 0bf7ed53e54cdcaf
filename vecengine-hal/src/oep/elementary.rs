use crate::layouts::{AccumTag, Bf16};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::elementary::sqrt_ref] for reference code.
/// * See [crate::api::VecSqrt] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait SqrtImpl<T, TR = T> {
    fn sqrt_impl(a: &[T], res: &mut [TR]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::elementary::inv_ref] and [crate::reference::elementary::inv_emulated_ref] for reference code.
/// * See [crate::api::VecInv] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait InvImpl<T> {
    fn inv_impl(a: &[T], res: &mut [T]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::elementary::invsqrt_ref] and [crate::reference::elementary::invsqrt_emulated_ref] for reference code.
/// * See [crate::api::VecInvSqrt] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait InvSqrtImpl<T> {
    fn invsqrt_impl(a: &[T], res: &mut [T]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::elementary::sincos_ref] for reference code.
/// * See [crate::api::VecSinCos] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait SinCosImpl<T> {
    fn sincos_impl(a: &[T], sin: &mut [T], cos: &mut [T]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::elementary::fix2float_ref] and [crate::reference::elementary::fix2float_emulated_ref] for reference code.
/// * See [crate::api::VecFix2Float] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait Fix2FloatImpl<T, TR = f32> {
    fn fix2float_impl(a: &[T], shift: i32, res: &mut [TR]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::elementary::fix2float_acc_emulated_ref] for reference code.
/// * See [crate::api::VecFix2FloatAcc] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait Fix2FloatAccImpl<A: AccumTag> {
    fn fix2float_acc_impl(a: &[A::Lane], shift: i32, res: &mut [f32]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::elementary::float2fix_ref], [crate::reference::elementary::float2fix_emulated_ref] and [crate::reference::elementary::bf16_to_int_ref] for reference code.
/// * See [crate::api::VecFloat2Fix] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait Float2FixImpl<TR, T = f32> {
    fn float2fix_impl(a: &[T], shift: i32, res: &mut [TR]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::elementary::tanh_ref] for reference code.
/// * See [crate::api::VecTanh] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait TanhImpl<T> {
    fn tanh_impl(a: &[T], res: &mut [Bf16]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::elementary::exp2_ref] for reference code.
/// * See [crate::api::VecExp2] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait Exp2Impl<T> {
    fn exp2_impl(a: &[T], res: &mut [Bf16]);
}
