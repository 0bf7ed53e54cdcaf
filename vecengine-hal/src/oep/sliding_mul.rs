use crate::layouts::{AccumTag, SlidingPattern};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::sliding_mul::sliding_mul_ref] for reference code.
/// * See [crate::layouts::SlidingMul] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
///
/// Declares that the generation runs sliding multiplies of `TC`
/// coefficients by `TD` data into accumulator `A`, producing at most
/// `NATIVE_LANES` lanes of at most `NATIVE_POINTS` products per call.
pub unsafe trait SlidingMulImpl<TC, TD, A: AccumTag> {
    const NATIVE_LANES: usize;
    const NATIVE_POINTS: usize;

    /// Writes `res.len()` lanes of `pattern`, adding to them when
    /// `accumulate` is set.
    fn sliding_mac_impl(pattern: &SlidingPattern, coeff: &[TC], data: &[TD], accumulate: bool, res: &mut [A::Lane]);
}
