use criterion::{Criterion, criterion_group, criterion_main};
use vecengine_arch::{Gen1, Gen2, Gen2p};
use vecengine_hal::bench_suite::vector_ops::{bench_add, bench_max, bench_reduce_add};

fn bench_add_all(c: &mut Criterion) {
    bench_add::<Gen1>(c, "gen1");
    bench_add::<Gen2>(c, "gen2");
    bench_add::<Gen2p>(c, "gen2p");
}

fn bench_max_all(c: &mut Criterion) {
    bench_max::<Gen1>(c, "gen1");
    bench_max::<Gen2>(c, "gen2");
    bench_max::<Gen2p>(c, "gen2p");
}

fn bench_reduce_add_all(c: &mut Criterion) {
    bench_reduce_add::<Gen1>(c, "gen1");
    bench_reduce_add::<Gen2>(c, "gen2");
    bench_reduce_add::<Gen2p>(c, "gen2p");
}

criterion_group!(benches, bench_add_all, bench_max_all, bench_reduce_add_all);
criterion_main!(benches);
