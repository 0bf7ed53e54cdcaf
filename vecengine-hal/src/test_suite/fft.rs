use std::f64::consts::PI;

use itertools::izip;
use rand_distr::{Distribution, Normal};

use crate::{
    error::EngineError,
    layouts::{Complex, Engine, FftDit, FftDitDyn, Generation, ModeGuard, RoundingMode, SaturationMode, twiddle_table},
    oep::FftImpl,
    source::Source,
    test_suite::SmallLane,
};

/// `(shift_tw, shift)` of a stage that neither grows nor shrinks the
/// butterfly outputs: fixed twiddles carry 15 fractional bits.
fn unit_gain<TW: Complex>() -> (u32, u32) {
    if TW::FLOAT { (0, 0) } else { (15, 15) }
}

fn twiddles<TW: Complex>(n: usize, radix: usize, v: usize, shift_tw: u32) -> Vec<Vec<TW>> {
    (1..radix).map(|q| twiddle_table(n, radix, v, q, shift_tw)).collect()
}

fn stage<G, const R: usize, const V: usize, TI, TW>(x: &[TI], n: usize, inv: bool) -> Vec<TI>
where
    G: Generation + FftImpl<R, V, TI, TI, TW>,
    TI: Complex,
    TW: Complex,
{
    let (shift_tw, shift) = unit_gain::<TW>();
    let tw: Vec<Vec<TW>> = twiddles(n, R, V, shift_tw);
    let tw: Vec<&[TW]> = tw.iter().map(|t| t.as_slice()).collect();
    let mut out: Vec<TI> = vec![TI::default(); n];
    FftDit::<G, R, V, TI, TI, TW>::new().run(x, &tw, n, shift_tw, shift, inv, &mut out);
    out
}

/// Small integers for fixed-point lanes, normal samples of deviation 50 for
/// float lanes.
fn random<TI: Complex + SmallLane>(n: usize, seed: u8) -> Vec<TI> {
    let mut source: Source = Source::new([seed; 32]);
    if !TI::FLOAT {
        return (0..n).map(|_| TI::small(&mut source)).collect();
    }
    let normal: Normal<f64> = Normal::new(0.0, 50.0).unwrap();
    (0..n)
        .map(|_| TI::from_f32(normal.sample(&mut source) as f32, normal.sample(&mut source) as f32))
        .collect()
}

/// Compares `y` with the exact DFT of `x` (positive exponent when `inv`).
fn assert_dft<TI: Complex>(x: &[TI], y: &[TI], inv: bool, what: &str) {
    let n: usize = x.len();
    let sign: f64 = if inv { 1.0 } else { -1.0 };
    let want: Vec<(f64, f64)> = (0..n)
        .map(|k| {
            x.iter().enumerate().fold((0.0, 0.0), |s, (m, v)| {
                let (re, im) = v.re_im_f32();
                let theta: f64 = sign * 2.0 * PI * ((k * m) % n) as f64 / n as f64;
                let (c, d) = (theta.cos(), theta.sin());
                (s.0 + re as f64 * c - im as f64 * d, s.1 + re as f64 * d + im as f64 * c)
            })
        })
        .collect();
    let peak: f64 = want.iter().fold(0.0, |p, (re, im)| p.max(re.abs()).max(im.abs()));
    // bfloat16 lanes keep 8 significant bits
    let rel: f64 = if TI::FLOAT && TI::BITS == 32 { 0.05 } else { 1e-3 };
    let tol: f64 = if TI::FLOAT { rel * peak } else { 2.0 * n as f64 + rel * peak };
    for (k, have, want) in izip!(0..n, y, &want) {
        let (re, im) = have.re_im_f32();
        assert!(
            (re as f64 - want.0).abs() <= tol && (im as f64 - want.1).abs() <= tol,
            "{what}: bin {k} of {n}: ({re}, {im}) vs ({:.1}, {:.1}), tol {tol:.1}",
            want.0,
            want.1
        );
    }
}

/// 32 points as five radix-2 stages, `V = 16` down to `V = 1`.
pub fn test_fft_radix2<G, TI, TW>(engine: &Engine<G>)
where
    G: Generation
        + FftImpl<2, 16, TI, TI, TW>
        + FftImpl<2, 8, TI, TI, TW>
        + FftImpl<2, 4, TI, TI, TW>
        + FftImpl<2, 2, TI, TI, TW>
        + FftImpl<2, 1, TI, TI, TW>,
    TI: Complex + SmallLane,
    TW: Complex,
{
    const N: usize = 32;
    let _guard: ModeGuard = ModeGuard::new(RoundingMode::SymmetricInf, SaturationMode::Saturate);
    let x: Vec<TI> = random(N, 41);
    for inv in [false, true] {
        let (shift_tw, shift) = unit_gain::<TW>();
        let tw0: Vec<TW> = twiddle_table(N, 2, 16, 1, shift_tw);
        let mut first: Vec<TI> = vec![TI::default(); N];
        engine.fft_dit_r2_stage::<16, TI, TI, TW>(&x, &tw0, N, shift_tw, shift, inv, &mut first);
        assert_eq!(first, stage::<G, 2, 16, TI, TW>(&x, N, inv));

        let y: Vec<TI> = stage::<G, 2, 8, TI, TW>(&first, N, inv);
        let y: Vec<TI> = stage::<G, 2, 4, TI, TW>(&y, N, inv);
        let y: Vec<TI> = stage::<G, 2, 2, TI, TW>(&y, N, inv);
        let y: Vec<TI> = stage::<G, 2, 1, TI, TW>(&y, N, inv);
        assert_dft(&x, &y, inv, &format!("{} radix-2", G::ARCH));
    }
}

/// 64 points as three radix-4 stages, `V = 16, 4, 1`.
pub fn test_fft_radix4<G, TI, TW>(engine: &Engine<G>)
where
    G: Generation + FftImpl<4, 16, TI, TI, TW> + FftImpl<4, 4, TI, TI, TW> + FftImpl<4, 1, TI, TI, TW>,
    TI: Complex + SmallLane,
    TW: Complex,
{
    const N: usize = 64;
    let _guard: ModeGuard = ModeGuard::new(RoundingMode::SymmetricInf, SaturationMode::Saturate);
    let x: Vec<TI> = random(N, 42);
    for inv in [false, true] {
        let (shift_tw, shift) = unit_gain::<TW>();
        let tw: Vec<Vec<TW>> = twiddles(N, 4, 16, shift_tw);
        let mut first: Vec<TI> = vec![TI::default(); N];
        engine.fft_dit_r4_stage::<16, TI, TI, TW>(&x, &tw[0], &tw[1], &tw[2], N, shift_tw, shift, inv, &mut first);

        let y: Vec<TI> = stage::<G, 4, 4, TI, TW>(&first, N, inv);
        let y: Vec<TI> = stage::<G, 4, 1, TI, TW>(&y, N, inv);
        assert_dft(&x, &y, inv, &format!("{} radix-4", G::ARCH));
    }
}

/// 48 points: one radix-3 stage with `V = 16`, then radix-2 down to `V = 1`.
pub fn test_fft_radix3<G, TI, TW>(engine: &Engine<G>)
where
    G: Generation
        + FftImpl<3, 16, TI, TI, TW>
        + FftImpl<2, 8, TI, TI, TW>
        + FftImpl<2, 4, TI, TI, TW>
        + FftImpl<2, 2, TI, TI, TW>
        + FftImpl<2, 1, TI, TI, TW>,
    TI: Complex + SmallLane,
    TW: Complex,
{
    const N: usize = 48;
    let _guard: ModeGuard = ModeGuard::new(RoundingMode::SymmetricInf, SaturationMode::Saturate);
    let x: Vec<TI> = random(N, 43);
    for inv in [false, true] {
        let (shift_tw, shift) = unit_gain::<TW>();
        let tw: Vec<Vec<TW>> = twiddles(N, 3, 16, shift_tw);
        let mut first: Vec<TI> = vec![TI::default(); N];
        engine.fft_dit_r3_stage::<16, TI, TI, TW>(&x, &tw[0], &tw[1], N, shift_tw, shift, inv, &mut first);

        let y: Vec<TI> = stage::<G, 2, 8, TI, TW>(&first, N, inv);
        let y: Vec<TI> = stage::<G, 2, 4, TI, TW>(&y, N, inv);
        let y: Vec<TI> = stage::<G, 2, 2, TI, TW>(&y, N, inv);
        let y: Vec<TI> = stage::<G, 2, 1, TI, TW>(&y, N, inv);
        assert_dft(&x, &y, inv, &format!("{} radix-3", G::ARCH));
    }
}

/// 80 points: one radix-5 stage with `V = 16`, then radix-2 down to `V = 1`.
pub fn test_fft_radix5<G, TI, TW>(engine: &Engine<G>)
where
    G: Generation
        + FftImpl<5, 16, TI, TI, TW>
        + FftImpl<2, 8, TI, TI, TW>
        + FftImpl<2, 4, TI, TI, TW>
        + FftImpl<2, 2, TI, TI, TW>
        + FftImpl<2, 1, TI, TI, TW>,
    TI: Complex + SmallLane,
    TW: Complex,
{
    const N: usize = 80;
    let _guard: ModeGuard = ModeGuard::new(RoundingMode::SymmetricInf, SaturationMode::Saturate);
    let x: Vec<TI> = random(N, 44);
    for inv in [false, true] {
        let (shift_tw, shift) = unit_gain::<TW>();
        let tw: Vec<Vec<TW>> = twiddles(N, 5, 16, shift_tw);
        let mut first: Vec<TI> = vec![TI::default(); N];
        engine.fft_dit_r5_stage::<16, TI, TI, TW>(
            &x, &tw[0], &tw[1], &tw[2], &tw[3], N, shift_tw, shift, inv, &mut first,
        );

        let y: Vec<TI> = stage::<G, 2, 8, TI, TW>(&first, N, inv);
        let y: Vec<TI> = stage::<G, 2, 4, TI, TW>(&y, N, inv);
        let y: Vec<TI> = stage::<G, 2, 2, TI, TW>(&y, N, inv);
        let y: Vec<TI> = stage::<G, 2, 1, TI, TW>(&y, N, inv);
        assert_dft(&x, &y, inv, &format!("{} radix-5", G::ARCH));
    }
}

/// A single `V = 1` radix-2 stage with unit twiddles over the smallest
/// point size is a plain sum and difference of neighbours.
pub fn test_fft_min_points<G, TI, TW>(_engine: &Engine<G>)
where
    G: Generation + FftImpl<2, 1, TI, TI, TW>,
    TI: Complex + SmallLane,
    TW: Complex,
{
    type Stage<G, TI, TW> = FftDit<G, 2, 1, TI, TI, TW>;
    let n: usize = Stage::<G, TI, TW>::MIN_POINT_SIZE;
    let ov: usize = Stage::<G, TI, TW>::OUT_VECTOR_SIZE;
    assert_eq!(n, 2 * ov);
    assert!(Stage::<G, TI, TW>::STAGE >= 0);

    assert_eq!(Stage::<G, TI, TW>::try_block_size(n).ok(), Some(1));
    assert_eq!(Stage::<G, TI, TW>::try_block_size(4 * n).ok(), Some(4));
    assert!(Stage::<G, TI, TW>::try_block_size(0).is_err());
    assert!(Stage::<G, TI, TW>::try_block_size(n + 1).is_err());

    let mut source: Source = Source::new([45u8; 32]);
    let x: Vec<TI> = (0..n).map(|_| TI::small(&mut source)).collect();
    let one: Vec<TW> = vec![TW::narrow_fixed(1, 0, SaturationMode::Saturate); n / 2];
    let mut out: Vec<TI> = vec![TI::default(); n];
    Stage::<G, TI, TW>::new().run(&x, &[one.as_slice()], n, 0, 0, false, &mut out);
    for b in 0..n / 2 {
        let (x0, x1) = (x[2 * b].re_im_f32(), x[2 * b + 1].re_im_f32());
        assert_eq!(out[b].re_im_f32(), (x0.0 + x1.0, x0.1 + x1.1), "sum {b}");
        assert_eq!(out[n / 2 + b].re_im_f32(), (x0.0 - x1.0, x0.1 - x1.1), "difference {b}");
    }
}

/// The canonical two-point butterfly `[x0 + x1, x0 - x1]` under a unit
/// twiddle, read through the stage iterator and through a whole stage.
pub fn test_fft_two_point<G, TI, TW>(_engine: &Engine<G>)
where
    G: Generation + FftImpl<2, 1, TI, TI, TW>,
    TI: Complex,
    TW: Complex,
{
    type Stage<G, TI, TW> = FftDit<G, 2, 1, TI, TI, TW>;
    let n: usize = Stage::<G, TI, TW>::MIN_POINT_SIZE;
    let sat: SaturationMode = SaturationMode::Saturate;
    let mut x: Vec<TI> = vec![TI::default(); n];
    x[0] = TI::narrow_fixed(3, -4, sat);
    x[1] = TI::narrow_fixed(1, 2, sat);
    let one: Vec<TW> = vec![TW::narrow_fixed(1, 0, sat); n / 2];
    let tw: [&[TW]; 1] = [one.as_slice()];

    let fft = Stage::<G, TI, TW>::new();
    let mut iter = fft.begin_stage(&x, &tw, n);
    let input = iter.next().unwrap();
    assert_eq!((input.data(0)[0], input.data(1)[0]), (x[0], x[1]));
    assert_eq!(input.twiddle(0)[0], one[0]);
    let res = fft.dit(&input, 0, 0, false);
    assert_eq!(res.output(0)[0].re_im_f32(), (4.0, -2.0));
    assert_eq!(res.output(1)[0].re_im_f32(), (2.0, -6.0));
    for l in 1..input.lanes() {
        assert_eq!(res.output(0)[l], TI::default(), "lane {l}");
        assert_eq!(res.output(1)[l], TI::default(), "lane {l}");
    }

    let mut out: Vec<TI> = vec![TI::default(); n];
    fft.run(&x, &tw, n, 0, 0, false, &mut out);
    assert_eq!(out[0].re_im_f32(), (4.0, -2.0));
    assert_eq!(out[n / 2].re_im_f32(), (2.0, -6.0));
}

/// A vectorization chosen at run time matches the fixed stage of the same
/// width, chains into a full transform, and rejects widths no stage runs.
pub fn test_fft_dyn_vectorization<G, TI, TW>(engine: &Engine<G>)
where
    G: Generation
        + FftImpl<2, 16, TI, TI, TW>
        + FftImpl<2, 8, TI, TI, TW>
        + FftImpl<2, 4, TI, TI, TW>
        + FftImpl<2, 2, TI, TI, TW>
        + FftImpl<2, 1, TI, TI, TW>,
    TI: Complex + SmallLane,
    TW: Complex,
{
    const N: usize = 32;
    let _guard: ModeGuard = ModeGuard::new(RoundingMode::SymmetricInf, SaturationMode::Saturate);
    let x: Vec<TI> = random(N, 47);
    let (shift_tw, shift) = unit_gain::<TW>();
    for inv in [false, true] {
        let mut y: Vec<TI> = x.clone();
        for v in [16, 8, 4, 2, 1] {
            let tw0: Vec<TW> = twiddle_table(N, 2, v, 1, shift_tw);
            let mut dynamic: Vec<TI> = vec![TI::default(); N];
            engine
                .fft_dit_r2_stage_dyn(&y, &tw0, N, v, shift_tw, shift, inv, &mut dynamic)
                .unwrap();
            let fixed: Vec<TI> = match v {
                16 => stage::<G, 2, 16, TI, TW>(&y, N, inv),
                8 => stage::<G, 2, 8, TI, TW>(&y, N, inv),
                4 => stage::<G, 2, 4, TI, TW>(&y, N, inv),
                2 => stage::<G, 2, 2, TI, TW>(&y, N, inv),
                _ => stage::<G, 2, 1, TI, TW>(&y, N, inv),
            };
            assert_eq!(dynamic, fixed, "vectorization {v}");
            y = dynamic;
        }
        assert_dft(&x, &y, inv, &format!("{} dynamic radix-2", G::ARCH));
    }

    type Dyn<G, TI, TW> = FftDitDyn<G, 2, TI, TI, TW>;
    for v in [0, 3, 12] {
        assert_eq!(
            Dyn::<G, TI, TW>::new(v).err(),
            Some(EngineError::Vectorization {
                arch: G::ARCH,
                radix: 2,
                vectorization: v,
            })
        );
    }
    let wide = Dyn::<G, TI, TW>::new(16).unwrap();
    assert_eq!(wide.vectorization(), 16);
    assert_eq!(wide.min_point_size(), 2 * wide.out_vector_size().max(16));
    assert_eq!(wide.try_block_size(N).ok(), Some(N / (2 * wide.out_vector_size())));
    assert!(wide.try_block_size(N + 2).is_err());
    let mut out: Vec<TI> = vec![TI::default(); N + 2];
    let tw0: Vec<TW> = twiddle_table(N + 2, 2, 1, 1, shift_tw);
    let x2: Vec<TI> = random(N + 2, 48);
    assert!(wide.run(&x2, &[tw0.as_slice()], N + 2, shift_tw, shift, false, &mut out).is_err());
}

/// Broadcast and gathered addressing agree with the flat lane order.
pub fn test_fft_stage_iterator<G, TI, TW>(_engine: &Engine<G>)
where
    G: Generation + FftImpl<2, 16, TI, TI, TW> + FftImpl<2, 1, TI, TI, TW>,
    TI: Complex + SmallLane,
    TW: Complex,
{
    const N: usize = 64;
    let x: Vec<TI> = random(N, 46);
    let tw: Vec<TW> = twiddle_table(N, 2, 1, 1, 15);
    let tw_refs: [&[TW]; 1] = [tw.as_slice()];

    let wide = FftDit::<G, 2, 16, TI, TI, TW>::new();
    let ov: usize = FftDit::<G, 2, 16, TI, TI, TW>::OUT_VECTOR_SIZE;
    let iter = wide.begin_stage(&x, &tw_refs, N);
    assert_eq!(iter.broadcast(), 16 >= ov);
    assert_eq!(iter.len(), N / (2 * ov));
    for (j, input) in iter.enumerate() {
        for l in 0..input.lanes() {
            let m: usize = j * ov + l;
            let (b, i) = (m / 16, m % 16);
            assert_eq!(input.data(0)[l], x[b * 32 + i]);
            assert_eq!(input.data(1)[l], x[b * 32 + 16 + i]);
            assert_eq!(input.twiddle(0)[l], tw[b]);
        }
    }

    let narrow = FftDit::<G, 2, 1, TI, TI, TW>::new();
    let iter = narrow.begin_stage(&x, &tw_refs, N);
    assert!(!iter.broadcast());
    for (j, input) in iter.enumerate() {
        for l in 0..input.lanes() {
            let b: usize = j * ov + l;
            assert_eq!(input.data(0)[l], x[2 * b]);
            assert_eq!(input.data(1)[l], x[2 * b + 1]);
            assert_eq!(input.twiddle(0)[l], tw[b]);
        }
    }
}
