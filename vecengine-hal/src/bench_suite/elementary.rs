use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use crate::{
    api::{VecFix2Float, VecInvSqrt},
    layouts::{Engine, Generation, Vector},
    source::Source,
};

pub fn bench_invsqrt<G>(c: &mut Criterion, label: &str)
where
    Engine<G>: VecInvSqrt<f32>,
    G: Generation,
{
    let group_name: String = format!("invsqrt::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<G, const N: usize>() -> impl FnMut()
    where
        Engine<G>: VecInvSqrt<f32>,
        G: Generation,
    {
        let engine: Engine<G> = Engine::new();
        let mut source: Source = Source::new([3u8; 32]);
        let a: Vector<f32, N> = source.vector_f32(0.5, 1000.0);

        move || {
            black_box(engine.invsqrt(black_box(&a)));
        }
    }

    let mut run = |n: usize, mut runner: Box<dyn FnMut()>| {
        let id: BenchmarkId = BenchmarkId::from_parameter(n);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    };
    run(16, Box::new(runner::<G, 16>()));
    run(64, Box::new(runner::<G, 64>()));

    group.finish();
}

pub fn bench_fix2float<G>(c: &mut Criterion, label: &str)
where
    Engine<G>: VecFix2Float<i32>,
    G: Generation,
{
    let group_name: String = format!("fix2float::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<G, const N: usize>() -> impl FnMut()
    where
        Engine<G>: VecFix2Float<i32>,
        G: Generation,
    {
        let engine: Engine<G> = Engine::new();
        let mut source: Source = Source::new([4u8; 32]);
        let a: Vector<i32, N> = source.vector();

        move || {
            black_box(engine.fix2float(black_box(&a), 12));
        }
    }

    let mut run = |n: usize, mut runner: Box<dyn FnMut()>| {
        let id: BenchmarkId = BenchmarkId::from_parameter(n);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    };
    run(16, Box::new(runner::<G, 16>()));
    run(64, Box::new(runner::<G, 64>()));

    group.finish();
}
