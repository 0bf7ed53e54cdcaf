use crate::{
    layouts::{
        AccLane, Accum, AccumTag, Element, Engine, Generation, Integral, Mmul, ModeGuard, Multiply, SaturationMode,
        Vector, wrap_bits,
    },
    oep::MmulImpl,
    source::Source,
    test_suite::SmallLane,
};

fn naive<TA, TB, A, const M: usize, const K: usize, const N: usize, const MK: usize, const KN: usize, const MN: usize>(
    a: &Vector<TA, MK>,
    b: &Vector<TB, KN>,
) -> Accum<A, MN>
where
    TA: Multiply<TB, A::Lane> + Element,
    TB: Element,
    A: AccumTag,
{
    Accum::from_fn(|i| {
        let (row, col) = (i / N, i % N);
        (0..K).fold(A::Lane::default(), |sum, k| {
            sum.acc_add(a.get(row * K + k).mul_lane(b.get(k * N + col)))
        })
    })
}

/// Products, accumulation and the zero flag of one tile shape.
pub fn test_mmul<G, TA, TB, A, const M: usize, const K: usize, const N: usize, const MK: usize, const KN: usize, const MN: usize>(
    _engine: &Engine<G>,
) where
    G: Generation + MmulImpl<TA, TB, A, M, K, N>,
    TA: SmallLane + Multiply<TB, A::Lane>,
    TB: SmallLane,
    A: AccumTag,
{
    let mut source: Source = Source::new([31u8; 32]);
    let a0: Vector<TA, MK> = Vector::from_fn(|_| TA::small(&mut source));
    let b0: Vector<TB, KN> = Vector::from_fn(|_| TB::small(&mut source));
    let a1: Vector<TA, MK> = Vector::from_fn(|_| TA::small(&mut source));
    let b1: Vector<TB, KN> = Vector::from_fn(|_| TB::small(&mut source));

    let p0: Accum<A, MN> = naive::<TA, TB, A, M, K, N, MK, KN, MN>(&a0, &b0);
    let p1: Accum<A, MN> = naive::<TA, TB, A, M, K, N, MK, KN, MN>(&a1, &b1);
    let what: String = format!("{}x{}x{} {}", M, K, N, A::NAME);

    let mut c: Mmul<G, TA, TB, A, M, K, N> = Mmul::new();
    assert!(c.is_zero(), "{what}");
    assert_eq!(c.to_accum::<MN>(), Accum::zeros(), "{what}");

    // the first mac of a fresh tile overwrites
    c.mac(&a0, &b0);
    assert!(!c.is_zero());
    assert_eq!(c.to_accum::<MN>(), p0, "{what}: mac on zero tile");

    c.mac(&a1, &b1);
    assert_eq!(c.to_accum::<MN>(), p0.add(&p1), "{what}: mac");

    c.mul(&a1, &b1);
    assert_eq!(c.to_accum::<MN>(), p1, "{what}: mul");

    let d: Mmul<G, TA, TB, A, M, K, N> = Mmul::from_accum(&p0);
    assert!(!d.is_zero());
    assert_eq!(d.to_accum::<MN>(), p0, "{what}: from_accum");

    let mut e: Mmul<G, TA, TB, A, M, K, N> = Mmul::from_accum(&p1);
    e.mac(&a0, &b0);
    assert_eq!(e.to_accum::<MN>(), p0.add(&p1), "{what}: mac on loaded tile");
}

/// Full-range integer operands: results wrap at the width the generation
/// physically stores for `A`.
pub fn test_mmul_storage<G, TA, TB, A, const M: usize, const K: usize, const N: usize, const MK: usize, const KN: usize, const MN: usize>(
    _engine: &Engine<G>,
) where
    G: Generation + MmulImpl<TA, TB, A, M, K, N>,
    TA: Integral + Multiply<TB, i128>,
    TB: Integral,
    A: AccumTag<Lane = i128>,
{
    let mut source: Source = Source::new([32u8; 32]);
    let a: Vector<TA, MK> = source.vector();
    let b: Vector<TB, KN> = source.vector();
    let bits: u32 = G::accum_storage_bits(A::BITS);

    let mut c: Mmul<G, TA, TB, A, M, K, N> = Mmul::new();
    c.mul(&a, &b);
    let have: Accum<A, MN> = c.to_accum();
    for i in 0..MN {
        let (row, col) = (i / N, i % N);
        let full: i128 = (0..K).map(|k| a.get(row * K + k).to_i128() * b.get(k * N + col).to_i128()).sum();
        assert_eq!(have.get(i), wrap_bits(full, bits), "lane {i}, {bits} stored bits");
    }
}

/// Narrowing a `4x4x8` tile through `to_vector` follows the current
/// saturation mode.
pub fn test_mmul_to_vector<G, A>(_engine: &Engine<G>)
where
    G: Generation + MmulImpl<i16, i16, A, 4, 4, 8>,
    A: AccumTag<Lane = i128>,
{
    // A = 1000 * I, so C = 1000 * B
    let a: Vector<i16, 16> = Vector::from_fn(|i| if i % 5 == 0 { 1000 } else { 0 });
    let b: Vector<i16, 32> = Vector::from_fn(|i| if i % 9 == 0 { 100 } else { -(i as i16) });
    let mut c: Mmul<G, i16, i16, A, 4, 4, 8> = Mmul::new();
    c.mul(&a, &b);

    let v: Vector<i16, 32> = c.to_vector(0);
    (0..32).for_each(|i| {
        let want: i16 = if i % 9 == 0 { i16::MAX } else { -1000 * i as i16 };
        assert_eq!(v.get(i), want, "lane {i}");
    });

    let shifted: Vector<i16, 32> = c.to_vector(4);
    assert_eq!(shifted.get(0), (100000 >> 4) as i16);
    assert_eq!(shifted.get(1), -1000 >> 4);

    {
        let _guard: ModeGuard = ModeGuard::saturation(SaturationMode::None);
        let wrapped: Vector<i16, 32> = c.to_vector(0);
        assert_eq!(wrapped.get(9), 100000i32 as i16);
    }

    let from: Mmul<G, i16, i16, A, 4, 4, 8> = Mmul::from_vector(&v, 2);
    let acc: Accum<A, 32> = from.to_accum();
    assert_eq!(acc.get(0), (i16::MAX as i128) << 2);
    assert!(c.layout().storage_lanes(4, 8) >= 32);
}
