use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use crate::{
    layouts::{Complex, FftDit, Generation, twiddle_table},
    oep::FftImpl,
    source::Source,
    test_suite::SmallLane,
};

/// One radix-`R` stage with vectorization `V` over several point sizes.
pub fn bench_fft_stage<G, const R: usize, const V: usize, TI, TO, TW>(c: &mut Criterion, label: &str)
where
    G: Generation + FftImpl<R, V, TI, TO, TW>,
    TI: Complex + SmallLane,
    TO: Complex,
    TW: Complex,
{
    let group_name: String = format!("fft_dit_r{R}_v{V}::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<G, const R: usize, const V: usize, TI, TO, TW>(n: usize) -> impl FnMut()
    where
        G: Generation + FftImpl<R, V, TI, TO, TW>,
        TI: Complex + SmallLane,
        TO: Complex,
        TW: Complex,
    {
        let shift_tw: u32 = if TW::FLOAT { 0 } else { 15 };
        let mut source: Source = Source::new([6u8; 32]);
        let x: Vec<TI> = (0..n).map(|_| TI::small(&mut source)).collect();
        let tw: Vec<Vec<TW>> = (1..R).map(|q| twiddle_table(n, R, V, q, shift_tw)).collect();
        let mut out: Vec<TO> = vec![TO::default(); n];
        let stage: FftDit<G, R, V, TI, TO, TW> = FftDit::new();

        move || {
            let tw: Vec<&[TW]> = tw.iter().map(|t| t.as_slice()).collect();
            stage.run(&x, &tw, n, shift_tw, shift_tw, false, &mut out);
            black_box(&mut out);
        }
    }

    let min: usize = FftDit::<G, R, V, TI, TO, TW>::MIN_POINT_SIZE;
    for n in [min, 4 * min, 16 * min] {
        let id: BenchmarkId = BenchmarkId::from_parameter(n);
        let mut runner = runner::<G, R, V, TI, TO, TW>(n);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}
