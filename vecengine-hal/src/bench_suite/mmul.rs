use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use crate::{
    layouts::{AccumTag, Generation, Mmul, Multiply, Vector},
    oep::MmulImpl,
    source::Source,
    test_suite::SmallLane,
};

/// `steps` chained `mac` calls on one `M x K x N` tile.
pub fn bench_mmul_mac<G, TA, TB, A, const M: usize, const K: usize, const N: usize, const MK: usize, const KN: usize>(
    c: &mut Criterion,
    label: &str,
) where
    G: Generation + MmulImpl<TA, TB, A, M, K, N>,
    TA: SmallLane + Multiply<TB, A::Lane>,
    TB: SmallLane,
    A: AccumTag,
{
    let group_name: String = format!("mmul_mac::{label}::{}x{}x{}_{}", M, K, N, A::NAME);

    let mut group = c.benchmark_group(group_name);

    fn runner<G, TA, TB, A, const M: usize, const K: usize, const N: usize, const MK: usize, const KN: usize>(
        steps: usize,
    ) -> impl FnMut()
    where
        G: Generation + MmulImpl<TA, TB, A, M, K, N>,
        TA: SmallLane + Multiply<TB, A::Lane>,
        TB: SmallLane,
        A: AccumTag,
    {
        let mut source: Source = Source::new([5u8; 32]);
        let a: Vec<Vector<TA, MK>> = (0..steps).map(|_| Vector::from_fn(|_| TA::small(&mut source))).collect();
        let b: Vec<Vector<TB, KN>> = (0..steps).map(|_| Vector::from_fn(|_| TB::small(&mut source))).collect();

        move || {
            let mut tile: Mmul<G, TA, TB, A, M, K, N> = Mmul::new();
            a.iter().zip(b.iter()).for_each(|(a, b)| tile.mac(a, b));
            black_box(tile);
        }
    }

    for steps in [1, 8, 64] {
        let id: BenchmarkId = BenchmarkId::from_parameter(steps);
        let mut runner = runner::<G, TA, TB, A, M, K, N, MK, KN>(steps);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}
