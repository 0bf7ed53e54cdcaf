use criterion::{Criterion, criterion_group, criterion_main};
use vecengine_arch::{Gen1, Gen2, Gen2p};
use vecengine_hal::{
    bench_suite::fft::bench_fft_stage,
    layouts::{CBf16, CFloat, CInt16, CInt32},
};

fn bench_fft_radix2(c: &mut Criterion) {
    bench_fft_stage::<Gen1, 2, 1, CInt16, CInt16, CInt16>(c, "gen1");
    bench_fft_stage::<Gen1, 2, 1, CFloat, CFloat, CFloat>(c, "gen1");
    bench_fft_stage::<Gen2, 2, 1, CInt16, CInt16, CInt16>(c, "gen2");
    bench_fft_stage::<Gen2, 2, 1, CBf16, CBf16, CBf16>(c, "gen2");
    bench_fft_stage::<Gen2p, 2, 1, CInt32, CInt16, CInt16>(c, "gen2p");
}

fn bench_fft_radix4(c: &mut Criterion) {
    bench_fft_stage::<Gen1, 4, 1, CInt32, CInt32, CInt32>(c, "gen1");
    bench_fft_stage::<Gen2, 4, 4, CInt16, CInt16, CInt16>(c, "gen2");
    bench_fft_stage::<Gen2p, 4, 1, CInt32, CInt32, CInt16>(c, "gen2p");
}

fn bench_fft_radix3_radix5(c: &mut Criterion) {
    bench_fft_stage::<Gen1, 3, 4, CInt16, CInt16, CInt16>(c, "gen1");
    bench_fft_stage::<Gen1, 5, 4, CFloat, CFloat, CFloat>(c, "gen1");
    bench_fft_stage::<Gen2, 3, 8, CInt16, CInt16, CInt16>(c, "gen2");
    bench_fft_stage::<Gen2, 5, 8, CInt32, CInt32, CInt16>(c, "gen2");
}

criterion_group!(benches, bench_fft_radix2, bench_fft_radix4, bench_fft_radix3_radix5);
criterion_main!(benches);
