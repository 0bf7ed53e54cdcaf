use std::{f64::consts::PI, marker::PhantomData};

use crate::{
    error::{EngineError, Result},
    layouts::{Complex, Generation, SaturationMode, rounding, saturation},
    oep::FftImpl,
    reference::fft::{MAX_RADIX, dit_ref},
};

/// Widest butterfly vector of any generation.
pub const MAX_FFT_LANES: usize = 16;

/// Twiddle type used by default for stages over `TI` on a generation.
pub trait DefaultTwiddle<TI>: Generation {
    type Twiddle: Complex;
}

pub type DefaultTwiddleOf<G, TI> = <G as DefaultTwiddle<TI>>::Twiddle;

/// Operands of one butterfly iteration: `radix` data vectors and the
/// `radix - 1` twiddle vectors that weight inputs `1..radix`.
#[derive(Clone, Copy, Debug)]
pub struct StageInput<TI, TW> {
    data: [[TI; MAX_FFT_LANES]; MAX_RADIX],
    twiddles: [[TW; MAX_FFT_LANES]; MAX_RADIX - 1],
    lanes: usize,
    radix: usize,
}

impl<TI: Complex, TW: Complex> StageInput<TI, TW> {
    fn new(radix: usize, lanes: usize) -> Self {
        Self {
            data: [[TI::default(); MAX_FFT_LANES]; MAX_RADIX],
            twiddles: [[TW::default(); MAX_FFT_LANES]; MAX_RADIX - 1],
            lanes,
            radix,
        }
    }

    pub fn radix(&self) -> usize {
        self.radix
    }

    pub fn lanes(&self) -> usize {
        self.lanes
    }

    pub fn data(&self, q: usize) -> &[TI] {
        &self.data[q][..self.lanes]
    }

    pub fn twiddle(&self, q: usize) -> &[TW] {
        &self.twiddles[q][..self.lanes]
    }
}

/// Results of one butterfly iteration: `radix` output vectors.
#[derive(Clone, Copy, Debug)]
pub struct StageOutput<TO> {
    data: [[TO; MAX_FFT_LANES]; MAX_RADIX],
    lanes: usize,
    radix: usize,
}

impl<TO: Complex> StageOutput<TO> {
    pub fn radix(&self) -> usize {
        self.radix
    }

    pub fn lanes(&self) -> usize {
        self.lanes
    }

    pub fn output(&self, k: usize) -> &[TO] {
        &self.data[k][..self.lanes]
    }
}

/// Walks the inputs of a stage one butterfly vector at a time.
///
/// Iteration `j` covers the flat lane indices `j * lanes..(j + 1) * lanes`;
/// lane `m` belongs to block `m / v` and position `m % v` inside the block.
/// When `v >= lanes` a whole iteration sits inside one block, the data is
/// contiguous and the block twiddle is broadcast. Otherwise every iteration
/// gathers `lanes / v` blocks.
pub struct StageIterator<'a, TI, TW> {
    x: &'a [TI],
    tw: &'a [&'a [TW]],
    radix: usize,
    v: usize,
    lanes: usize,
    j: usize,
    count: usize,
}

impl<'a, TI: Complex, TW: Complex> StageIterator<'a, TI, TW> {
    pub fn broadcast(&self) -> bool {
        self.v >= self.lanes
    }

    fn gather(&self, j: usize) -> StageInput<TI, TW> {
        let mut input: StageInput<TI, TW> = StageInput::new(self.radix, self.lanes);
        let (radix, v, lanes) = (self.radix, self.v, self.lanes);

        if self.broadcast() {
            let first: usize = j * lanes;
            let (b, i) = (first / v, first % v);
            for q in 0..radix {
                let base: usize = b * radix * v + q * v + i;
                input.data[q][..lanes].copy_from_slice(&self.x[base..base + lanes]);
            }
            for q in 0..radix - 1 {
                input.twiddles[q][..lanes].fill(self.tw[q][b]);
            }
        } else {
            for l in 0..lanes {
                let m: usize = j * lanes + l;
                let (b, i) = (m / v, m % v);
                for q in 0..radix {
                    input.data[q][l] = self.x[b * radix * v + q * v + i];
                }
                for q in 0..radix - 1 {
                    input.twiddles[q][l] = self.tw[q][b];
                }
            }
        }
        input
    }
}

impl<TI: Complex, TW: Complex> Iterator for StageIterator<'_, TI, TW> {
    type Item = StageInput<TI, TW>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.j == self.count {
            return None;
        }
        let input: StageInput<TI, TW> = self.gather(self.j);
        self.j += 1;
        Some(input)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left: usize = self.count - self.j;
        (left, Some(left))
    }
}

impl<TI: Complex, TW: Complex> ExactSizeIterator for StageIterator<'_, TI, TW> {}

/// Radix-`R` decimation-in-time stage with vectorization `V` on generation `G`.
///
/// For `b < n / (R * V)` and `i < V` the stage reads
/// `x[b * R * V + q * V + i]` for `q < R`, weights input `q >= 1` by
/// `tw[q - 1][b]`, and writes output `k` of the butterfly to
/// `out[k * n / R + b * V + i]`. A full transform of `n = R_1 * ... * R_s`
/// points chains stages with `V = n / R_1`, then `V / R_2`, down to `V = 1`.
///
/// Unsupported combinations of generation, radix, vectorization and types
/// fail to compile.
#[derive(Clone, Copy, Debug, Default)]
pub struct FftDit<G, const R: usize, const V: usize, TI, TO, TW> {
    _phantom: PhantomData<fn() -> (G, TI, TO, TW)>,
}

impl<G, const R: usize, const V: usize, TI, TO, TW> FftDit<G, R, V, TI, TO, TW>
where
    G: Generation + FftImpl<R, V, TI, TO, TW>,
    TI: Complex,
    TO: Complex,
    TW: Complex,
{
    pub const RADIX: usize = R;
    pub const VECTORIZATION: usize = V;
    pub const STAGE: i32 = G::STAGE;
    pub const OUT_VECTOR_SIZE: usize = G::OUT_VECTOR_SIZE;

    /// Smallest point size, and the granularity of every valid point size.
    pub const MIN_POINT_SIZE: usize = R * if V > G::OUT_VECTOR_SIZE { V } else { G::OUT_VECTOR_SIZE };

    const SUPPORTED: () = assert!(
        G::STAGE >= 0
            && V.is_power_of_two()
            && R >= 2
            && R <= MAX_RADIX
            && G::OUT_VECTOR_SIZE <= MAX_FFT_LANES
            && G::OUT_VECTOR_SIZE.is_power_of_two(),
        "unsupported FFT stage for this generation and type combination"
    );

    pub fn new() -> Self {
        let () = Self::SUPPORTED;
        Self { _phantom: PhantomData }
    }

    /// Butterfly iterations needed for `n` points.
    ///
    /// Radix 3 and 5 divide with a fixed-point reciprocal, exact for every
    /// valid point size of the generation.
    pub fn block_size(n: usize) -> usize {
        debug_assert!(
            n % Self::MIN_POINT_SIZE == 0,
            "radix-{R} stage: point size {n} is not a multiple of {}",
            Self::MIN_POINT_SIZE
        );
        stage_block_size(R, n, G::OUT_VECTOR_SIZE)
    }

    /// Checked variant of [Self::block_size].
    pub fn try_block_size(n: usize) -> Result<usize> {
        if n == 0 || n % Self::MIN_POINT_SIZE != 0 {
            return Err(EngineError::PointSize {
                arch: G::ARCH,
                radix: R,
                n,
                min: Self::MIN_POINT_SIZE,
            });
        }
        Ok(Self::block_size(n))
    }

    /// Starts iterating over the butterflies of an `n`-point stage.
    pub fn begin_stage<'a>(&self, x: &'a [TI], tw: &'a [&'a [TW]], n: usize) -> StageIterator<'a, TI, TW> {
        #[cfg(debug_assertions)]
        {
            assert_eq!(x.len(), n);
            assert_eq!(tw.len(), R - 1);
            for t in tw {
                assert!(t.len() >= n / (R * V), "twiddle table shorter than {}", n / (R * V));
            }
        }
        StageIterator {
            x,
            tw,
            radix: R,
            v: V,
            lanes: G::OUT_VECTOR_SIZE,
            j: 0,
            count: Self::block_size(n),
        }
    }

    /// Computes one butterfly iteration with the current rounding and
    /// saturation modes.
    pub fn dit(&self, input: &StageInput<TI, TW>, shift_tw: u32, shift: u32, inv: bool) -> StageOutput<TO> {
        butterflies::<R, TI, TO, TW>(input, shift_tw, shift, inv)
    }

    /// Runs the whole `n`-point stage from `x` into `out`.
    #[allow(clippy::too_many_arguments)]
    pub fn run(&self, x: &[TI], tw: &[&[TW]], n: usize, shift_tw: u32, shift: u32, inv: bool, out: &mut [TO]) {
        let iter: StageIterator<'_, TI, TW> = self.begin_stage(x, tw, n);
        log::debug!(
            "{} radix-{R} stage {}: n={n} v={V} lanes={} iterations={} broadcast={}",
            G::ARCH,
            G::STAGE,
            G::OUT_VECTOR_SIZE,
            iter.len(),
            iter.broadcast()
        );
        write_stage::<R, TI, TO, TW>(iter, n, shift_tw, shift, inv, out);
    }
}

/// Radix-`R` decimation-in-time stage whose vectorization is only known at
/// run time.
///
/// Vectorizations 1, 2 and 4 run on the native stage of that width; wider
/// ones run on the widest native stage, walking blocks of the requested
/// width. Addressing and twiddles are those of [FftDit] with
/// `V = vectorization`.
#[derive(Clone, Copy, Debug)]
pub struct FftDitDyn<G, const R: usize, TI, TO, TW> {
    vectorization: usize,
    lanes: usize,
    _phantom: PhantomData<fn() -> (G, TI, TO, TW)>,
}

impl<G, const R: usize, TI, TO, TW> FftDitDyn<G, R, TI, TO, TW>
where
    G: Generation
        + FftImpl<R, 1, TI, TO, TW>
        + FftImpl<R, 2, TI, TO, TW>
        + FftImpl<R, 4, TI, TO, TW>
        + FftImpl<R, MAX_FFT_LANES, TI, TO, TW>,
    TI: Complex,
    TO: Complex,
    TW: Complex,
{
    pub const RADIX: usize = R;

    /// Selects the native stage for `vectorization`, failing when the
    /// generation has none.
    pub fn new(vectorization: usize) -> Result<Self> {
        let (stage, lanes): (i32, usize) = match vectorization {
            1 => (
                <G as FftImpl<R, 1, TI, TO, TW>>::STAGE,
                <G as FftImpl<R, 1, TI, TO, TW>>::OUT_VECTOR_SIZE,
            ),
            2 => (
                <G as FftImpl<R, 2, TI, TO, TW>>::STAGE,
                <G as FftImpl<R, 2, TI, TO, TW>>::OUT_VECTOR_SIZE,
            ),
            4 => (
                <G as FftImpl<R, 4, TI, TO, TW>>::STAGE,
                <G as FftImpl<R, 4, TI, TO, TW>>::OUT_VECTOR_SIZE,
            ),
            v if v > 4 && v.is_power_of_two() => (
                <G as FftImpl<R, MAX_FFT_LANES, TI, TO, TW>>::STAGE,
                <G as FftImpl<R, MAX_FFT_LANES, TI, TO, TW>>::OUT_VECTOR_SIZE,
            ),
            _ => (-1, 0),
        };
        let supported: bool = stage >= 0
            && (2..=MAX_RADIX).contains(&R)
            && lanes.is_power_of_two()
            && lanes <= MAX_FFT_LANES;
        if !supported {
            return Err(EngineError::Vectorization {
                arch: G::ARCH,
                radix: R,
                vectorization,
            });
        }
        Ok(Self {
            vectorization,
            lanes,
            _phantom: PhantomData,
        })
    }

    pub fn vectorization(&self) -> usize {
        self.vectorization
    }

    /// Lanes produced per butterfly output vector by the selected stage.
    pub fn out_vector_size(&self) -> usize {
        self.lanes
    }

    /// Smallest point size, and the granularity of every valid point size.
    pub fn min_point_size(&self) -> usize {
        R * self.vectorization.max(self.lanes)
    }

    /// Butterfly iterations needed for `n` points.
    pub fn try_block_size(&self, n: usize) -> Result<usize> {
        let min: usize = self.min_point_size();
        if n == 0 || n % min != 0 {
            return Err(EngineError::PointSize {
                arch: G::ARCH,
                radix: R,
                n,
                min,
            });
        }
        Ok(stage_block_size(R, n, self.lanes))
    }

    /// Starts iterating over the butterflies of an `n`-point stage.
    pub fn begin_stage<'a>(&self, x: &'a [TI], tw: &'a [&'a [TW]], n: usize) -> Result<StageIterator<'a, TI, TW>> {
        let count: usize = self.try_block_size(n)?;
        #[cfg(debug_assertions)]
        {
            assert_eq!(x.len(), n);
            assert_eq!(tw.len(), R - 1);
            for t in tw {
                assert!(t.len() >= n / (R * self.vectorization));
            }
        }
        Ok(StageIterator {
            x,
            tw,
            radix: R,
            v: self.vectorization,
            lanes: self.lanes,
            j: 0,
            count,
        })
    }

    /// Computes one butterfly iteration with the current rounding and
    /// saturation modes.
    pub fn dit(&self, input: &StageInput<TI, TW>, shift_tw: u32, shift: u32, inv: bool) -> StageOutput<TO> {
        butterflies::<R, TI, TO, TW>(input, shift_tw, shift, inv)
    }

    /// Runs the whole `n`-point stage from `x` into `out`.
    #[allow(clippy::too_many_arguments)]
    pub fn run(&self, x: &[TI], tw: &[&[TW]], n: usize, shift_tw: u32, shift: u32, inv: bool, out: &mut [TO]) -> Result<()> {
        let iter: StageIterator<'_, TI, TW> = self.begin_stage(x, tw, n)?;
        log::debug!(
            "{} radix-{R} dynamic stage: n={n} v={} lanes={} iterations={} broadcast={}",
            G::ARCH,
            self.vectorization,
            self.lanes,
            iter.len(),
            iter.broadcast()
        );
        write_stage::<R, TI, TO, TW>(iter, n, shift_tw, shift, inv, out);
        Ok(())
    }
}

/// Butterfly iterations of an `n`-point stage with `lanes` lanes per output
/// vector.
fn stage_block_size(radix: usize, n: usize, lanes: usize) -> usize {
    match radix {
        3 => ((n * 10923) >> 15) / lanes,
        5 => ((n * 6554) >> 15) / lanes,
        _ => n / (radix * lanes),
    }
}

fn butterflies<const R: usize, TI: Complex, TO: Complex, TW: Complex>(
    input: &StageInput<TI, TW>,
    shift_tw: u32,
    shift: u32,
    inv: bool,
) -> StageOutput<TO> {
    let (rnd, sat) = (rounding(), saturation());
    let lanes: usize = input.lanes;
    let mut out: StageOutput<TO> = StageOutput {
        data: [[TO::default(); MAX_FFT_LANES]; MAX_RADIX],
        lanes,
        radix: R,
    };
    let mut x: [TI; MAX_RADIX] = [TI::default(); MAX_RADIX];
    let mut w: [TW; MAX_RADIX - 1] = [TW::default(); MAX_RADIX - 1];
    let mut y: [TO; MAX_RADIX] = [TO::default(); MAX_RADIX];
    for l in 0..lanes {
        for q in 0..R {
            x[q] = input.data[q][l];
        }
        for q in 0..R - 1 {
            w[q] = input.twiddles[q][l];
        }
        dit_ref(&x[..R], &w[..R - 1], shift_tw, shift, inv, rnd, sat, &mut y[..R]);
        for k in 0..R {
            out.data[k][l] = y[k];
        }
    }
    out
}

fn write_stage<const R: usize, TI: Complex, TO: Complex, TW: Complex>(
    iter: StageIterator<'_, TI, TW>,
    n: usize,
    shift_tw: u32,
    shift: u32,
    inv: bool,
    out: &mut [TO],
) {
    debug_assert_eq!(out.len(), n);
    let stride: usize = n / R;
    let lanes: usize = iter.lanes;
    for (j, input) in iter.enumerate() {
        let res: StageOutput<TO> = butterflies::<R, TI, TO, TW>(&input, shift_tw, shift, inv);
        // flat lane m maps to b * V + i in every output part
        let base: usize = j * lanes;
        for k in 0..R {
            out[k * stride + base..k * stride + base + lanes].copy_from_slice(res.output(k));
        }
    }
}

/// Twiddles `exp(-2 pi j q b v / n)` for `b < n / (radix * v)`, weighting
/// input `q` of a radix-`radix` stage with vectorization `v`.
///
/// Fixed-point twiddles are scaled by `2^shift_tw`, rounded and saturated;
/// float twiddles ignore `shift_tw`.
pub fn twiddle_table<TW: Complex>(n: usize, radix: usize, v: usize, q: usize, shift_tw: u32) -> Vec<TW> {
    debug_assert!(n % (radix * v) == 0, "twiddle_table: {n} is not a multiple of {radix} * {v}");
    let scale: f64 = (shift_tw as f64).exp2();
    (0..n / (radix * v))
        .map(|b| {
            let theta: f64 = -2.0 * PI * (q * b * v) as f64 / n as f64;
            if TW::FLOAT {
                TW::from_f32(theta.cos() as f32, theta.sin() as f32)
            } else {
                TW::narrow_fixed(
                    (theta.cos() * scale).round() as i128,
                    (theta.sin() * scale).round() as i128,
                    SaturationMode::Saturate,
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::{CFloat, CInt16};

    #[test]
    fn twiddles_quantise_and_saturate() {
        let tw: Vec<CInt16> = twiddle_table(16, 2, 2, 1, 15);
        assert_eq!(tw.len(), 4);
        assert_eq!(tw[0], CInt16::new(i16::MAX, 0));
        // exp(-j pi / 2)
        assert_eq!(tw[2], CInt16::new(0, i16::MIN));
        let tw: Vec<CFloat> = twiddle_table(8, 2, 1, 1, 0);
        assert!((tw[1].re - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert!((tw[1].im + std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }
}
