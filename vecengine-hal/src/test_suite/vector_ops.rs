use rand_core::RngCore;

use crate::{
    api::{VecArith, VecBitwise, VecCompare, VecEq, VecMaxMin, VecPermute, VecReduce, VecReduceAdd, VecShift},
    layouts::{CInt16, Engine, Generation, I4, Integral, Mask, ModeGuard, RoundingMode, SaturationMode, Vector, srs},
    reference::permute::{interleave_unzip_ref, interleave_zip_ref},
    source::Source,
    test_suite::SmallLane,
};

fn lanes_eq<T: PartialEq + std::fmt::Debug, const N: usize>(have: &Vector<T, N>, want: impl Fn(usize) -> T, what: &str)
where
    T: crate::layouts::Element,
{
    (0..N).for_each(|i| assert_eq!(have.get(i), want(i), "{what}: lane {i} of {N}"));
}

fn mask_eq<const N: usize>(have: &Mask<N>, want: impl Fn(usize) -> bool, what: &str) {
    (0..N).for_each(|i| assert_eq!(have.test(i), want(i), "{what}: lane {i} of {N}"));
}

fn check_bitwise<G: Generation, const N: usize>(engine: &Engine<G>, source: &mut Source)
where
    Engine<G>: VecBitwise<i16> + VecBitwise<u8>,
{
    let a: Vector<i16, N> = source.vector();
    let b: Vector<i16, N> = source.vector();
    lanes_eq(&engine.and(a, b), |i| a.get(i) & b.get(i), "and");
    lanes_eq(&engine.or(a, b), |i| a.get(i) | b.get(i), "or");
    lanes_eq(&engine.xor(a, b), |i| a.get(i) ^ b.get(i), "xor");
    lanes_eq(&engine.not(&a), |i| !a.get(i), "not");
    lanes_eq(&engine.and(a, 0x0F0Fi16), |i| a.get(i) & 0x0F0F, "and scalar");

    let c: Vector<u8, N> = source.vector();
    lanes_eq(&engine.xor(0xFFu8, c), |i| !c.get(i), "xor scalar");
}

pub fn test_bitwise<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecBitwise<i16> + VecBitwise<u8>,
{
    let mut source: Source = Source::new([1u8; 32]);
    check_bitwise::<G, 4>(engine, &mut source);
    check_bitwise::<G, 32>(engine, &mut source);
    check_bitwise::<G, 128>(engine, &mut source);
}

fn check_compare<G: Generation, const N: usize>(engine: &Engine<G>, source: &mut Source)
where
    Engine<G>: VecCompare<i32> + VecEq<i32>,
{
    let a: Vector<i32, N> = Vector::from_fn(|_| (source.next_u32() % 8) as i32 - 4);
    let b: Vector<i32, N> = Vector::from_fn(|_| (source.next_u32() % 8) as i32 - 4);
    mask_eq(&engine.lt(a, b), |i| a.get(i) < b.get(i), "lt");
    mask_eq(&engine.le(a, b), |i| a.get(i) <= b.get(i), "le");
    mask_eq(&engine.gt(a, b), |i| a.get(i) > b.get(i), "gt");
    mask_eq(&engine.ge(a, b), |i| a.get(i) >= b.get(i), "ge");
    mask_eq(&engine.eq(a, b), |i| a.get(i) == b.get(i), "eq");
    mask_eq(&engine.neq(a, b), |i| a.get(i) != b.get(i), "neq");
    mask_eq(&engine.lt(a, 0i32), |i| a.get(i) < 0, "lt scalar");

    assert!(engine.equal(a, a));
    assert!(!engine.not_equal(a, a));
    let mut c: Vector<i32, N> = a;
    c.set(N - 1, a.get(N - 1).wrapping_add(1));
    assert!(!engine.equal(a, c));
    assert!(engine.not_equal(a, c));
}

pub fn test_compare<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecCompare<i32> + VecEq<i32>,
{
    let mut source: Source = Source::new([2u8; 32]);
    check_compare::<G, 2>(engine, &mut source);
    check_compare::<G, 16>(engine, &mut source);
    check_compare::<G, 64>(engine, &mut source);
}

fn check_max_min<G: Generation, const N: usize>(engine: &Engine<G>, source: &mut Source)
where
    Engine<G>: VecMaxMin<i16>,
{
    let a: Vector<i16, N> = Vector::from_fn(|_| (source.next_u32() % 16) as i16 - 8);
    let b: Vector<i16, N> = Vector::from_fn(|_| (source.next_u32() % 16) as i16 - 8);
    lanes_eq(&engine.max(a, b), |i| a.get(i).max(b.get(i)), "max");
    lanes_eq(&engine.min(a, b), |i| a.get(i).min(b.get(i)), "min");

    let (v, m) = engine.max_cmp(a, b);
    lanes_eq(&v, |i| a.get(i).max(b.get(i)), "max_cmp value");
    mask_eq(&m, |i| a.get(i) < b.get(i), "max_cmp flag");

    let (v, m) = engine.min_cmp(a, b);
    lanes_eq(&v, |i| a.get(i).min(b.get(i)), "min_cmp value");
    mask_eq(&m, |i| a.get(i) >= b.get(i), "min_cmp flag");
}

pub fn test_max_min<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecMaxMin<i16>,
{
    let mut source: Source = Source::new([3u8; 32]);
    check_max_min::<G, 8>(engine, &mut source);
    check_max_min::<G, 32>(engine, &mut source);
    check_max_min::<G, 128>(engine, &mut source);
}

pub fn test_shift<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecShift<i16> + VecShift<i32>,
{
    let mut source: Source = Source::new([4u8; 32]);
    let a: Vector<i16, 64> = source.vector();

    for (rnd, sat) in [
        (RoundingMode::Floor, SaturationMode::Saturate),
        (RoundingMode::SymmetricInf, SaturationMode::Saturate),
        (RoundingMode::ConvEven, SaturationMode::None),
    ] {
        let _guard: ModeGuard = ModeGuard::new(rnd, sat);
        let have: Vector<i16, 64> = engine.shift(&a, 4, 6);
        lanes_eq(&have, |i| i16::narrow(srs((a.get(i) as i128) << 4, 6, rnd), sat), "shift");
    }

    // 8 saturated lanes
    let b: Vector<i32, 8> = Vector::from_array([1, -1, i32::MAX, i32::MIN, 3, -3, 1 << 30, -(1 << 30)]);
    let up: Vector<i32, 8> = engine.upshift(&b, 2);
    assert_eq!(up.as_slice(), &[4, -4, i32::MAX, i32::MIN, 12, -12, i32::MAX, i32::MIN]);
    let down: Vector<i32, 8> = engine.downshift(&b, 1);
    assert_eq!(down.get(0), 0);
    assert_eq!(down.get(1), -1);
    assert_eq!(down.get(4), 1);
}

fn check_arith<G: Generation, const N: usize>(engine: &Engine<G>, source: &mut Source)
where
    Engine<G>: VecArith<i32> + VecArith<CInt16>,
{
    let a: Vector<i32, N> = source.vector();
    let b: Vector<i32, N> = source.vector();
    lanes_eq(&engine.add(a, b), |i| a.get(i).wrapping_add(b.get(i)), "add");
    lanes_eq(&engine.sub(a, b), |i| a.get(i).wrapping_sub(b.get(i)), "sub");
    lanes_eq(&engine.neg(&a), |i| a.get(i).wrapping_neg(), "neg");
    lanes_eq(&engine.add(a, 1i32), |i| a.get(i).wrapping_add(1), "add scalar");

    let c: Vector<CInt16, N> = Vector::from_fn(|_| CInt16::small(source));
    let d: Vector<CInt16, N> = Vector::from_fn(|_| CInt16::small(source));
    lanes_eq(
        &engine.add(c, d),
        |i| CInt16::new(c.get(i).re + d.get(i).re, c.get(i).im + d.get(i).im),
        "complex add",
    );
}

pub fn test_arith<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecArith<i32> + VecArith<CInt16>,
{
    let mut source: Source = Source::new([5u8; 32]);
    check_arith::<G, 4>(engine, &mut source);
    check_arith::<G, 16>(engine, &mut source);
    check_arith::<G, 64>(engine, &mut source);
}

fn check_permute<G: Generation, const N: usize>(engine: &Engine<G>, source: &mut Source)
where
    Engine<G>: VecPermute<i16> + VecCompare<i16>,
{
    let a: Vector<i16, N> = source.vector();
    let b: Vector<i16, N> = source.vector();
    lanes_eq(&engine.reverse(&a), |i| a.get(N - 1 - i), "reverse");
    lanes_eq(&engine.broadcast::<N>(-7), |_| -7, "broadcast");

    let m: Mask<N> = engine.lt(a, b);
    lanes_eq(&engine.select(a, b, &m), |i| if m.test(i) { b.get(i) } else { a.get(i) }, "select");
    lanes_eq(&engine.select(a, 0i16, &m), |i| if m.test(i) { 0 } else { a.get(i) }, "select scalar");

    let mut step: usize = 1;
    while step <= N {
        let (lo, hi) = engine.interleave_zip(&a, &b, step);
        let mut want_lo: Vec<i16> = vec![0; N];
        let mut want_hi: Vec<i16> = vec![0; N];
        interleave_zip_ref(a.as_slice(), b.as_slice(), step, &mut want_lo, &mut want_hi);
        assert_eq!(lo.as_slice(), want_lo.as_slice(), "zip lo: step {step} of {N}");
        assert_eq!(hi.as_slice(), want_hi.as_slice(), "zip hi: step {step} of {N}");

        let (ua, ub) = engine.interleave_unzip(&lo, &hi, step);
        assert_eq!(ua, a, "unzip a: step {step} of {N}");
        assert_eq!(ub, b, "unzip b: step {step} of {N}");

        let mut back_a: Vec<i16> = vec![0; N];
        let mut back_b: Vec<i16> = vec![0; N];
        interleave_unzip_ref(lo.as_slice(), hi.as_slice(), step, &mut back_a, &mut back_b);
        assert_eq!(back_a.as_slice(), a.as_slice());
        step *= 2;
    }
}

pub fn test_permute<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecPermute<i16> + VecCompare<i16>,
{
    let mut source: Source = Source::new([6u8; 32]);
    check_permute::<G, 4>(engine, &mut source);
    check_permute::<G, 32>(engine, &mut source);
    check_permute::<G, 128>(engine, &mut source);
}

/// Steps spanning several native registers move whole blocks.
pub fn test_interleave_wide_step<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecPermute<i32>,
{
    let a: Vector<i32, 32> = Vector::from_fn(|i| i as i32);
    let b: Vector<i32, 32> = Vector::from_fn(|i| 100 + i as i32);

    let (lo, hi) = engine.interleave_zip(&a, &b, 32);
    assert_eq!(lo, a);
    assert_eq!(hi, b);
    assert_eq!(engine.interleave_unzip(&lo, &hi, 32), (a, b));

    let (lo, hi) = engine.interleave_zip(&a, &b, 16);
    lanes_eq(&lo, |i| if i < 16 { i as i32 } else { 100 + i as i32 - 16 }, "zip lo step 16");
    lanes_eq(&hi, |i| if i < 16 { 16 + i as i32 } else { 100 + i as i32 }, "zip hi step 16");
    assert_eq!(engine.interleave_unzip(&lo, &hi, 16), (a, b));
}

fn check_reduce<G: Generation, const N: usize>(engine: &Engine<G>, source: &mut Source)
where
    Engine<G>: VecReduce<i32> + VecReduceAdd<i32> + VecReduce<i16> + VecReduceAdd<i16>,
{
    let a: Vector<i32, N> = source.vector();
    assert_eq!(engine.reduce_max(&a), *a.iter().max().unwrap_or(&i32::MIN), "reduce_max {N}");
    assert_eq!(engine.reduce_min(&a), *a.iter().min().unwrap_or(&i32::MAX), "reduce_min {N}");
    assert_eq!(engine.reduce_add(&a), a.iter().fold(0i32, |s, x| s.wrapping_add(*x)), "reduce_add {N}");

    let b: Vector<i16, N> = source.vector();
    assert_eq!(engine.reduce_max(&b), b.iter().copied().max().unwrap_or(i16::MIN));
    assert_eq!(engine.reduce_add(&b), b.iter().fold(0i16, |s, x| s.wrapping_add(*x)));
}

pub fn test_reduce<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecReduce<i32> + VecReduceAdd<i32> + VecReduce<i16> + VecReduceAdd<i16>,
{
    let mut source: Source = Source::new([7u8; 32]);
    check_reduce::<G, 1>(engine, &mut source);
    check_reduce::<G, 4>(engine, &mut source);
    check_reduce::<G, 16>(engine, &mut source);
    check_reduce::<G, 64>(engine, &mut source);
}

/// 4-bit lanes go through the unpack, 8-bit dispatch, pack path.
pub fn test_subbyte<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecMaxMin<I4> + VecPermute<I4> + VecArith<I4> + VecReduce<I4> + VecEq<I4>,
{
    let mut source: Source = Source::new([8u8; 32]);
    let a: Vector<I4, 512> = Vector::from_fn(|_| I4::small(&mut source));
    let b: Vector<I4, 512> = Vector::from_fn(|_| I4::small(&mut source));

    lanes_eq(&engine.max(a, b), |i| I4::new(a.get(i).get().max(b.get(i).get())), "nibble max");
    lanes_eq(&engine.reverse(&a), |i| a.get(511 - i), "nibble reverse");
    assert_eq!(engine.reduce_max(&a).get(), a.iter().map(|x| x.get()).max().unwrap_or(-8));
    mask_eq(&engine.eq(a, b), |i| a.get(i) == b.get(i), "nibble eq");

    // sums leaving [-8, 7] saturate when packed back
    let sevens: Vector<I4, 16> = Vector::broadcast(I4::new(7));
    lanes_eq(&engine.add(sevens, sevens), |_| I4::new(7), "nibble add saturates");
    {
        let _guard: ModeGuard = ModeGuard::saturation(SaturationMode::None);
        lanes_eq(&engine.add(sevens, sevens), |_| I4::new(-2), "nibble add wraps without saturation");
    }

    let small: Vector<I4, 8> = Vector::from_fn(|i| I4::new(i as i8 - 4));
    let sum: Vector<I4, 8> = engine.add(small, I4::new(1));
    lanes_eq(&sum, |i| I4::new(i as i8 - 3), "nibble add");
}

/// Every dispatch family agrees between two generations on the lane types
/// both support.
pub fn test_cross_vector_ops<GR: Generation, GT: Generation>(engine_ref: &Engine<GR>, engine_test: &Engine<GT>)
where
    Engine<GR>: VecBitwise<u16>
        + VecCompare<i16>
        + VecEq<u32>
        + VecMaxMin<i32>
        + VecShift<i16>
        + VecArith<u8>
        + VecPermute<i32>
        + VecReduce<i16>
        + VecReduceAdd<i32>,
    Engine<GT>: VecBitwise<u16>
        + VecCompare<i16>
        + VecEq<u32>
        + VecMaxMin<i32>
        + VecShift<i16>
        + VecArith<u8>
        + VecPermute<i32>
        + VecReduce<i16>
        + VecReduceAdd<i32>,
{
    let mut source: Source = Source::new([9u8; 32]);
    for _ in 0..4 {
        let a: Vector<u16, 64> = source.vector();
        let b: Vector<u16, 64> = source.vector();
        assert_eq!(engine_ref.xor(a, b), engine_test.xor(a, b));

        let a: Vector<i16, 128> = source.vector();
        let b: Vector<i16, 128> = source.vector();
        assert_eq!(engine_ref.le(a, b), engine_test.le(a, b));
        assert_eq!(engine_ref.shift(&a, 3, 5), engine_test.shift(&a, 3, 5));
        assert_eq!(engine_ref.reduce_min(&a), engine_test.reduce_min(&a));

        let a: Vector<u32, 8> = source.vector();
        let b: Vector<u32, 8> = Vector::from_fn(|i| if i % 2 == 0 { a.get(i) } else { 0 });
        assert_eq!(engine_ref.neq(a, b), engine_test.neq(a, b));

        let a: Vector<i32, 32> = source.vector();
        let b: Vector<i32, 32> = source.vector();
        assert_eq!(engine_ref.min_cmp(a, b), engine_test.min_cmp(a, b));
        assert_eq!(engine_ref.reverse(&a), engine_test.reverse(&a));
        assert_eq!(engine_ref.interleave_zip(&a, &b, 2), engine_test.interleave_zip(&a, &b, 2));
        assert_eq!(engine_ref.reduce_add(&a), engine_test.reduce_add(&a));

        let a: Vector<u8, 256> = source.vector();
        let b: Vector<u8, 256> = source.vector();
        assert_eq!(engine_ref.sub(a, b), engine_test.sub(a, b));
    }
}
