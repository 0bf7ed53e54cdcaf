use criterion::{Criterion, criterion_group, criterion_main};
use vecengine_arch::{Gen1, Gen2, Gen2p};
use vecengine_hal::{
    bench_suite::mmul::bench_mmul_mac,
    layouts::{Acc32, Acc48, Acc64, AccFloat, Bf16, CAcc64, CInt16},
};

fn bench_mmul_int16(c: &mut Criterion) {
    bench_mmul_mac::<Gen1, i16, i16, Acc48, 4, 4, 4, 16, 16>(c, "gen1");
    bench_mmul_mac::<Gen2, i16, i16, Acc32, 4, 4, 8, 16, 32>(c, "gen2");
    bench_mmul_mac::<Gen2p, i16, i16, Acc64, 4, 4, 8, 16, 32>(c, "gen2p");
}

fn bench_mmul_int8(c: &mut Criterion) {
    bench_mmul_mac::<Gen1, i8, i8, Acc48, 4, 16, 8, 64, 128>(c, "gen1");
    bench_mmul_mac::<Gen2, i8, i8, Acc32, 4, 16, 8, 64, 128>(c, "gen2");
    bench_mmul_mac::<Gen2p, i8, i8, Acc32, 8, 8, 8, 64, 64>(c, "gen2p");
}

fn bench_mmul_float(c: &mut Criterion) {
    bench_mmul_mac::<Gen1, f32, f32, AccFloat, 4, 4, 2, 16, 8>(c, "gen1");
    bench_mmul_mac::<Gen2, Bf16, Bf16, AccFloat, 4, 8, 8, 32, 64>(c, "gen2");
    bench_mmul_mac::<Gen2p, Bf16, Bf16, AccFloat, 8, 8, 8, 64, 64>(c, "gen2p");
}

fn bench_mmul_complex(c: &mut Criterion) {
    bench_mmul_mac::<Gen2, CInt16, CInt16, CAcc64, 2, 4, 8, 8, 32>(c, "gen2");
    bench_mmul_mac::<Gen2p, CInt16, CInt16, CAcc64, 1, 4, 8, 4, 32>(c, "gen2p");
}

criterion_group!(benches, bench_mmul_int16, bench_mmul_int8, bench_mmul_float, bench_mmul_complex);
criterion_main!(benches);
