use criterion::{Criterion, criterion_group, criterion_main};
use vecengine_arch::{Gen1, Gen2, Gen2p};
use vecengine_hal::bench_suite::elementary::{bench_fix2float, bench_invsqrt};

fn bench_invsqrt_all(c: &mut Criterion) {
    bench_invsqrt::<Gen1>(c, "gen1");
    bench_invsqrt::<Gen2>(c, "gen2");
    bench_invsqrt::<Gen2p>(c, "gen2p");
}

fn bench_fix2float_all(c: &mut Criterion) {
    bench_fix2float::<Gen1>(c, "gen1");
    bench_fix2float::<Gen2>(c, "gen2");
    bench_fix2float::<Gen2p>(c, "gen2p");
}

criterion_group!(benches, bench_invsqrt_all, bench_fix2float_all);
criterion_main!(benches);
