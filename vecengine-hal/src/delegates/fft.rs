use crate::{
    error::Result,
    layouts::{Complex, Engine, FftDit, FftDitDyn, Generation, MAX_FFT_LANES},
    oep::FftImpl,
};

impl<G: Generation> Engine<G> {
    /// Radix-2 decimation-in-time stage over `n` points with vectorization `V`.
    #[allow(clippy::too_many_arguments)]
    pub fn fft_dit_r2_stage<const V: usize, TI, TO, TW>(
        &self,
        x: &[TI],
        tw0: &[TW],
        n: usize,
        shift_tw: u32,
        shift: u32,
        inv: bool,
        out: &mut [TO],
    ) where
        G: FftImpl<2, V, TI, TO, TW>,
        TI: Complex,
        TO: Complex,
        TW: Complex,
    {
        FftDit::<G, 2, V, TI, TO, TW>::new().run(x, &[tw0], n, shift_tw, shift, inv, out)
    }

    /// Radix-3 decimation-in-time stage over `n` points with vectorization `V`.
    #[allow(clippy::too_many_arguments)]
    pub fn fft_dit_r3_stage<const V: usize, TI, TO, TW>(
        &self,
        x: &[TI],
        tw0: &[TW],
        tw1: &[TW],
        n: usize,
        shift_tw: u32,
        shift: u32,
        inv: bool,
        out: &mut [TO],
    ) where
        G: FftImpl<3, V, TI, TO, TW>,
        TI: Complex,
        TO: Complex,
        TW: Complex,
    {
        FftDit::<G, 3, V, TI, TO, TW>::new().run(x, &[tw0, tw1], n, shift_tw, shift, inv, out)
    }

    /// Radix-4 decimation-in-time stage over `n` points with vectorization `V`.
    #[allow(clippy::too_many_arguments)]
    pub fn fft_dit_r4_stage<const V: usize, TI, TO, TW>(
        &self,
        x: &[TI],
        tw0: &[TW],
        tw1: &[TW],
        tw2: &[TW],
        n: usize,
        shift_tw: u32,
        shift: u32,
        inv: bool,
        out: &mut [TO],
    ) where
        G: FftImpl<4, V, TI, TO, TW>,
        TI: Complex,
        TO: Complex,
        TW: Complex,
    {
        FftDit::<G, 4, V, TI, TO, TW>::new().run(x, &[tw0, tw1, tw2], n, shift_tw, shift, inv, out)
    }

    /// Radix-5 decimation-in-time stage over `n` points with vectorization `V`.
    #[allow(clippy::too_many_arguments)]
    pub fn fft_dit_r5_stage<const V: usize, TI, TO, TW>(
        &self,
        x: &[TI],
        tw0: &[TW],
        tw1: &[TW],
        tw2: &[TW],
        tw3: &[TW],
        n: usize,
        shift_tw: u32,
        shift: u32,
        inv: bool,
        out: &mut [TO],
    ) where
        G: FftImpl<5, V, TI, TO, TW>,
        TI: Complex,
        TO: Complex,
        TW: Complex,
    {
        FftDit::<G, 5, V, TI, TO, TW>::new().run(x, &[tw0, tw1, tw2, tw3], n, shift_tw, shift, inv, out)
    }

    /// Radix-2 stage over `n` points with a vectorization chosen at run time.
    #[allow(clippy::too_many_arguments)]
    pub fn fft_dit_r2_stage_dyn<TI, TO, TW>(
        &self,
        x: &[TI],
        tw0: &[TW],
        n: usize,
        vectorization: usize,
        shift_tw: u32,
        shift: u32,
        inv: bool,
        out: &mut [TO],
    ) -> Result<()>
    where
        G: FftImpl<2, 1, TI, TO, TW>
            + FftImpl<2, 2, TI, TO, TW>
            + FftImpl<2, 4, TI, TO, TW>
            + FftImpl<2, MAX_FFT_LANES, TI, TO, TW>,
        TI: Complex,
        TO: Complex,
        TW: Complex,
    {
        FftDitDyn::<G, 2, TI, TO, TW>::new(vectorization)?.run(x, &[tw0], n, shift_tw, shift, inv, out)
    }

    /// Radix-3 stage over `n` points with a vectorization chosen at run time.
    #[allow(clippy::too_many_arguments)]
    pub fn fft_dit_r3_stage_dyn<TI, TO, TW>(
        &self,
        x: &[TI],
        tw0: &[TW],
        tw1: &[TW],
        n: usize,
        vectorization: usize,
        shift_tw: u32,
        shift: u32,
        inv: bool,
        out: &mut [TO],
    ) -> Result<()>
    where
        G: FftImpl<3, 1, TI, TO, TW>
            + FftImpl<3, 2, TI, TO, TW>
            + FftImpl<3, 4, TI, TO, TW>
            + FftImpl<3, MAX_FFT_LANES, TI, TO, TW>,
        TI: Complex,
        TO: Complex,
        TW: Complex,
    {
        FftDitDyn::<G, 3, TI, TO, TW>::new(vectorization)?.run(x, &[tw0, tw1], n, shift_tw, shift, inv, out)
    }

    /// Radix-4 stage over `n` points with a vectorization chosen at run time.
    #[allow(clippy::too_many_arguments)]
    pub fn fft_dit_r4_stage_dyn<TI, TO, TW>(
        &self,
        x: &[TI],
        tw0: &[TW],
        tw1: &[TW],
        tw2: &[TW],
        n: usize,
        vectorization: usize,
        shift_tw: u32,
        shift: u32,
        inv: bool,
        out: &mut [TO],
    ) -> Result<()>
    where
        G: FftImpl<4, 1, TI, TO, TW>
            + FftImpl<4, 2, TI, TO, TW>
            + FftImpl<4, 4, TI, TO, TW>
            + FftImpl<4, MAX_FFT_LANES, TI, TO, TW>,
        TI: Complex,
        TO: Complex,
        TW: Complex,
    {
        FftDitDyn::<G, 4, TI, TO, TW>::new(vectorization)?.run(x, &[tw0, tw1, tw2], n, shift_tw, shift, inv, out)
    }

    /// Radix-5 stage over `n` points with a vectorization chosen at run time.
    #[allow(clippy::too_many_arguments)]
    pub fn fft_dit_r5_stage_dyn<TI, TO, TW>(
        &self,
        x: &[TI],
        tw0: &[TW],
        tw1: &[TW],
        tw2: &[TW],
        tw3: &[TW],
        n: usize,
        vectorization: usize,
        shift_tw: u32,
        shift: u32,
        inv: bool,
        out: &mut [TO],
    ) -> Result<()>
    where
        G: FftImpl<5, 1, TI, TO, TW>
            + FftImpl<5, 2, TI, TO, TW>
            + FftImpl<5, 4, TI, TO, TW>
            + FftImpl<5, MAX_FFT_LANES, TI, TO, TW>,
        TI: Complex,
        TO: Complex,
        TW: Complex,
    {
        FftDitDyn::<G, 5, TI, TO, TW>::new(vectorization)?.run(x, &[tw0, tw1, tw2, tw3], n, shift_tw, shift, inv, out)
    }
}
