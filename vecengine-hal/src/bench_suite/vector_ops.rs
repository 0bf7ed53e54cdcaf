use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use crate::{
    api::{VecArith, VecMaxMin, VecReduceAdd},
    layouts::{Engine, Generation, Vector},
    source::Source,
};

pub fn bench_add<G>(c: &mut Criterion, label: &str)
where
    Engine<G>: VecArith<i16>,
    G: Generation,
{
    let group_name: String = format!("vec_add::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<G, const N: usize>() -> impl FnMut()
    where
        Engine<G>: VecArith<i16>,
        G: Generation,
    {
        let engine: Engine<G> = Engine::new();
        let mut source: Source = Source::new([0u8; 32]);
        let a: Vector<i16, N> = source.vector();
        let b: Vector<i16, N> = source.vector();

        move || {
            black_box(engine.add(black_box(a), black_box(b)));
        }
    }

    let mut run = |n: usize, mut runner: Box<dyn FnMut()>| {
        let id: BenchmarkId = BenchmarkId::from_parameter(n);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    };
    run(8, Box::new(runner::<G, 8>()));
    run(32, Box::new(runner::<G, 32>()));
    run(128, Box::new(runner::<G, 128>()));

    group.finish();
}

pub fn bench_max<G>(c: &mut Criterion, label: &str)
where
    Engine<G>: VecMaxMin<i32>,
    G: Generation,
{
    let group_name: String = format!("vec_max::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<G, const N: usize>() -> impl FnMut()
    where
        Engine<G>: VecMaxMin<i32>,
        G: Generation,
    {
        let engine: Engine<G> = Engine::new();
        let mut source: Source = Source::new([1u8; 32]);
        let a: Vector<i32, N> = source.vector();
        let b: Vector<i32, N> = source.vector();

        move || {
            black_box(engine.max(black_box(a), black_box(b)));
        }
    }

    let mut run = |n: usize, mut runner: Box<dyn FnMut()>| {
        let id: BenchmarkId = BenchmarkId::from_parameter(n);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    };
    run(4, Box::new(runner::<G, 4>()));
    run(16, Box::new(runner::<G, 16>()));
    run(64, Box::new(runner::<G, 64>()));

    group.finish();
}

pub fn bench_reduce_add<G>(c: &mut Criterion, label: &str)
where
    Engine<G>: VecReduceAdd<i32>,
    G: Generation,
{
    let group_name: String = format!("vec_reduce_add::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<G, const N: usize>() -> impl FnMut()
    where
        Engine<G>: VecReduceAdd<i32>,
        G: Generation,
    {
        let engine: Engine<G> = Engine::new();
        let mut source: Source = Source::new([2u8; 32]);
        let a: Vector<i32, N> = source.vector();

        move || {
            black_box(engine.reduce_add(black_box(&a)));
        }
    }

    let mut run = |n: usize, mut runner: Box<dyn FnMut()>| {
        let id: BenchmarkId = BenchmarkId::from_parameter(n);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    };
    run(8, Box::new(runner::<G, 8>()));
    run(16, Box::new(runner::<G, 16>()));
    run(64, Box::new(runner::<G, 64>()));

    group.finish();
}
