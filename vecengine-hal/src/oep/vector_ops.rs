use crate::layouts::{ArithOp, BitwiseOp, CmpOp, Element, EqOp, MaxMinOp};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::bitwise::bitwise_ref] for reference code.
/// * See [crate::api::VecBitwise] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait NativeBitwiseImpl<T> {
    fn bitwise_impl(op: BitwiseOp, a: &[T], b: &[T], res: &mut [T]);
    fn not_impl(a: &[T], res: &mut [T]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::compare::cmp_ref] for reference code.
/// * See [crate::api::VecCompare] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait NativeCmpImpl<T> {
    /// Returns the mask of the native register, lane `i` in bit `i`.
    fn cmp_impl(op: CmpOp, a: &[T], b: &[T]) -> u64;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::compare::eq_ref] for reference code.
/// * See [crate::api::VecEq] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait NativeEqImpl<T> {
    fn eq_impl(op: EqOp, a: &[T], b: &[T]) -> u64;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::compare::max_min_ref] and [crate::reference::compare::max_min_cmp_ref] for reference code.
/// * See [crate::api::VecMaxMin] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait NativeMaxMinImpl<T> {
    fn max_min_impl(op: MaxMinOp, a: &[T], b: &[T], res: &mut [T]);

    /// Writes `max(a, b)` (resp. `min`) and returns the mask of lanes where
    /// `a < b` (resp. `a >= b`).
    fn max_min_cmp_impl(op: MaxMinOp, a: &[T], b: &[T], res: &mut [T]) -> u64;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::arith::shift_ref] for reference code.
/// * See [crate::api::VecShift] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait NativeShiftImpl<T> {
    /// Upshifts by `up` into the accumulator, then shift-round-saturates by
    /// `down` with the current modes.
    fn shift_impl(a: &[T], up: u32, down: u32, res: &mut [T]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::arith::arith_ref] for reference code.
/// * See [crate::api::VecArith] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait NativeArithImpl<T> {
    fn arith_impl(op: ArithOp, a: &[T], b: &[T], res: &mut [T]);
    fn neg_impl(a: &[T], res: &mut [T]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::permute::reverse_ref], [crate::reference::permute::select_ref] and [crate::reference::permute::interleave_zip_ref] for reference code.
/// * See [crate::api::VecPermute] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait NativePermuteImpl<T> {
    fn reverse_impl(a: &[T], res: &mut [T]);
    fn broadcast_impl(value: T, res: &mut [T]);

    /// Lane `i` of `res` is `b[i]` when bit `i` of `mask` is set, `a[i]` otherwise.
    fn select_impl(a: &[T], b: &[T], mask: u64, res: &mut [T]);

    /// Interleaves chunks of `step` lanes of `a` and `b`; the first register
    /// of the result goes to `lo`, the second to `hi`.
    fn interleave_zip_impl(a: &[T], b: &[T], step: usize, lo: &mut [T], hi: &mut [T]);

    /// Inverse of [NativePermuteImpl::interleave_zip_impl].
    fn interleave_unzip_impl(lo: &[T], hi: &[T], step: usize, a: &mut [T], b: &mut [T]);
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::reduce::reduce_max_min_ref] and [crate::reference::reduce::reduce_halving_ref] for reference code.
/// * See [crate::api::VecReduce] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait NativeReduceImpl<T> {
    /// Reduces the first `len` lanes of one native register.
    fn reduce_max_min_impl(op: MaxMinOp, a: &[T], len: usize) -> T;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::reduce::reduce_add_ref] and [crate::reference::reduce::reduce_halving_ref] for reference code.
/// * See [crate::api::VecReduceAdd] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait NativeReduceAddImpl<T> {
    /// Sums the first `len` lanes of one native register.
    fn reduce_add_impl(a: &[T], len: usize) -> T;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::pack] for reference code.
/// * See [crate::delegates] for its use ahead of every native primitive.
/// # Safety [crate::doc::backend_safety] for safety contract.
///
/// Converts lanes to and from the type the native unit computes on. For
/// every type but the 4-bit integers this is a plain copy; a generation
/// without 4-bit support does not implement it for them.
pub unsafe trait UnpackImpl<T: Element> {
    fn unpack_impl(a: &[T], res: &mut [T::Compute]);
    fn pack_impl(a: &[T::Compute], res: &mut [T]);
}
