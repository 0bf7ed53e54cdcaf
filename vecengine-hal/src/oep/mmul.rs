use crate::layouts::{AccumTag, CBlockLayout};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::mmul::mmul_block_ref] for reference code.
/// * See [crate::layouts::Mmul] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
///
/// Declares that the generation multiplies `M x K` tiles of `TA` by `K x N`
/// tiles of `TB` into accumulator `A`, and how the result is laid out in
/// its registers. A combination without an implementation does not compile.
///
/// [crate::layouts::Mmul] splits a tile along [CBlockLayout] and calls
/// [MmulImpl::mac_impl] once per accumulator register.
pub unsafe trait MmulImpl<TA, TB, A: AccumTag, const M: usize, const K: usize, const N: usize> {
    const LAYOUT: CBlockLayout;

    /// Native product of a row-major `rows x K` block `a` and a row-major
    /// `K x cols` block `b` into one register: output `i` goes to
    /// `reg[i * stride]`, added to it when `accumulate` is set.
    fn mac_impl(a: &[TA], b: &[TB], accumulate: bool, reg: &mut [A::Lane], stride: usize);
}
