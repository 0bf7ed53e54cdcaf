/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::fft::dit_ref] for reference code.
/// * See [crate::layouts::FftDit] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
///
/// Support table of a radix-`R` decimation-in-time stage with vectorization
/// `V`, input `TI`, output `TO` and twiddles `TW`.
pub unsafe trait FftImpl<const R: usize, const V: usize, TI, TO, TW> {
    /// Native addressing mode of the stage; negative when the combination
    /// has no native support, which fails compilation on first use.
    const STAGE: i32;

    /// Lanes produced per butterfly output vector.
    const OUT_VECTOR_SIZE: usize;
}
