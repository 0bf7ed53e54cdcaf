use crate::{
    api::{VecExp2, VecFix2Float, VecFix2FloatAcc, VecFloat2Fix, VecInv, VecInvSqrt, VecSinCos, VecSqrt, VecTanh},
    layouts::{Acc64, Accum, Bf16, CFloat, Engine, Generation, ModeGuard, RoundingMode, SaturationMode, Vector, saturation},
    source::Source,
};

const ROUNDING_MODES: [RoundingMode; 8] = [
    RoundingMode::Floor,
    RoundingMode::Ceil,
    RoundingMode::PositiveInf,
    RoundingMode::NegativeInf,
    RoundingMode::SymmetricInf,
    RoundingMode::SymmetricZero,
    RoundingMode::ConvEven,
    RoundingMode::ConvOdd,
];

fn positive<const N: usize>(source: &mut Source) -> Vector<f32, N> {
    Vector::from_fn(|_| source.next_f64(-12.0, 12.0).exp() as f32)
}

pub fn test_sqrt<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecSqrt<f32>,
{
    let mut source: Source = Source::new([11u8; 32]);
    let a: Vector<f32, 64> = positive(&mut source);
    let r: Vector<f32, 64> = engine.sqrt(&a);
    (0..64).for_each(|i| assert!((r.get(i) / a.get(i).sqrt() - 1.0).abs() < 1e-6));
    assert_eq!(engine.sqrt_scalar(16.0f32), 4.0);
}

pub fn test_sqrt_bf16<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecSqrt<Bf16> + VecSqrt<Bf16, f32>,
{
    let a: Vector<Bf16, 64> = Vector::from_fn(|i| Bf16::from_f32((i * i) as f32 / 16.0));
    let narrow: Vector<Bf16, 64> = engine.sqrt(&a);
    let wide: Vector<f32, 64> = engine.sqrt(&a);
    for i in 0..64 {
        let want: f32 = a.get(i).to_f32().sqrt();
        assert!((narrow.get(i).to_f32() - want).abs() <= want * 1e-2, "bf16 sqrt lane {i}");
        assert!((wide.get(i) - want).abs() <= want * 1e-6, "f32 sqrt lane {i}");
    }
}

pub fn test_inv<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecInv<f32> + VecInvSqrt<f32>,
{
    let mut source: Source = Source::new([12u8; 32]);
    let a: Vector<f32, 32> = positive(&mut source);

    let r: Vector<f32, 32> = engine.inv(&a);
    (0..32).for_each(|i| assert!((r.get(i) * a.get(i) - 1.0).abs() < 1e-6, "inv({})", a.get(i)));

    // one refinement step: relative error below 2^-10
    let r: Vector<f32, 32> = engine.invsqrt(&a);
    (0..32).for_each(|i| {
        let want: f64 = 1.0 / (a.get(i) as f64).sqrt();
        assert!((r.get(i) as f64 / want - 1.0).abs() < 1.0 / 1024.0, "invsqrt({})", a.get(i));
    });

    let x: f32 = engine.inv_scalar(4.0f32);
    assert!((x - 0.25).abs() < 1e-6);
    let y: f32 = engine.invsqrt_scalar(4.0f32);
    assert!((y - 0.5).abs() < 1e-3);
}

pub fn test_inv_bf16<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecInv<Bf16> + VecInvSqrt<Bf16>,
{
    let mut source: Source = Source::new([13u8; 32]);
    let a: Vector<Bf16, 32> = Vector::from_fn(|_| Bf16::from_f32(source.next_f64(-8.0, 8.0).exp() as f32));
    let r: Vector<Bf16, 32> = engine.inv(&a);
    (0..32).for_each(|i| assert!((r.get(i).to_f32() * a.get(i).to_f32() - 1.0).abs() < 2e-2));
    let r: Vector<Bf16, 32> = engine.invsqrt(&a);
    (0..32).for_each(|i| {
        let x: f32 = a.get(i).to_f32();
        assert!((r.get(i).to_f32() * x.sqrt() - 1.0).abs() < 2e-2, "invsqrt({x})");
    });
}

pub fn test_fix_float_round_trip<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecFix2Float<i32> + VecFloat2Fix<i32> + VecFix2Float<i16> + VecFloat2Fix<i16>,
{
    let mut source: Source = Source::new([14u8; 32]);
    // 24-bit values survive the trip through f32
    let a: Vector<i32, 32> = Vector::from_fn(|_| source.next_i32() >> 8);
    for shift in [0, 3, 8, 20] {
        let f: Vector<f32, 32> = engine.fix2float(&a, shift);
        (0..32).for_each(|i| assert_eq!(f.get(i) as f64, a.get(i) as f64 / (shift as f64).exp2()));
        let back: Vector<i32, 32> = engine.float2fix(&f, shift);
        assert_eq!(back, a, "shift {shift}");
    }

    let b: Vector<i16, 64> = Vector::from_fn(|_| source.next_i32() as i16);
    let f: Vector<f32, 64> = engine.fix2float(&b, 15);
    let back: Vector<i16, 64> = engine.float2fix(&f, 15);
    assert_eq!(back, b);

    assert_eq!(engine.fix2float_scalar(-3i32, 1), -1.5);
    let x: i16 = engine.float2fix_scalar(0.25, 4);
    assert_eq!(x, 4);
}

pub fn test_float2fix_bf16<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecFloat2Fix<i32, Bf16> + VecFloat2Fix<i16, Bf16>,
{
    let a: Vector<Bf16, 64> = Vector::from_fn(|i| Bf16::from_f32((i as f32 - 32.0) * 0.75));
    let wide: Vector<i32, 64> = engine.float2fix(&a, 2);
    let narrow: Vector<i16, 64> = engine.float2fix(&a, 2);
    for i in 0..64 {
        assert_eq!(wide.get(i), (i as i32 - 32) * 3, "lane {i}");
        assert_eq!(narrow.get(i) as i32, wide.get(i), "lane {i}");
    }
    // ties go to even
    let x: i32 = engine.float2fix_scalar(Bf16::from_f32(2.5), 0);
    assert_eq!(x, 2);
    let y: i16 = engine.float2fix_scalar(Bf16::from_f32(-3.5), 0);
    assert_eq!(y, -4);
}

pub fn test_fix2float_bf16<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecFix2Float<i16, Bf16> + VecFix2Float<i32, Bf16>,
{
    let a: Vector<i16, 64> = Vector::from_fn(|i| (i as i16 - 32) * 3);
    let r: Vector<Bf16, 64> = engine.fix2float(&a, 1);
    (0..64).for_each(|i| assert_eq!(r.get(i).to_f32(), (i as f32 - 32.0) * 1.5, "i16 lane {i}"));

    let b: Vector<i32, 32> = Vector::from_fn(|i| (i as i32 - 16) << 20);
    let r: Vector<Bf16, 32> = engine.fix2float(&b, 20);
    (0..32).for_each(|i| assert_eq!(r.get(i).to_f32(), i as f32 - 16.0, "i32 lane {i}"));
}

/// Out-of-range floats saturate whatever the caller's saturation mode, and
/// the caller's mode is left as it was.
pub fn test_float2fix_saturates<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecFloat2Fix<i32> + VecFloat2Fix<i16>,
{
    let a: Vector<f32, 4> = Vector::from_array([1e20, -1e20, 40000.0, -40000.0]);
    let _guard: ModeGuard = ModeGuard::saturation(SaturationMode::None);
    let r: Vector<i32, 4> = engine.float2fix(&a, 0);
    assert_eq!(r.as_slice(), &[i32::MAX, i32::MIN, 40000, -40000]);
    let r: Vector<i16, 4> = engine.float2fix(&a, 0);
    assert_eq!(r.as_slice(), &[i16::MAX, i16::MIN, i16::MAX, i16::MIN]);
    assert_eq!(saturation(), SaturationMode::None);
}

/// Products far outside the accumulator range saturate under every
/// rounding mode.
pub fn test_float2fix_huge_inputs<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecFloat2Fix<i32> + VecFloat2Fix<i16>,
{
    let a: Vector<f32, 4> = Vector::from_array([1e30, -1e30, f32::MAX, f32::MIN]);
    for rnd in ROUNDING_MODES {
        let _guard: ModeGuard = ModeGuard::rounding(rnd);
        for shift in [0, 31] {
            let r: Vector<i32, 4> = engine.float2fix(&a, shift);
            assert_eq!(r.as_slice(), &[i32::MAX, i32::MIN, i32::MAX, i32::MIN], "{rnd:?} shift {shift}");
        }
        let r: Vector<i16, 4> = engine.float2fix(&a, 15);
        assert_eq!(r.as_slice(), &[i16::MAX, i16::MIN, i16::MAX, i16::MIN], "{rnd:?}");
    }
}

pub fn test_fix2float_acc<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecFix2FloatAcc<Acc64>,
{
    let acc: Accum<Acc64, 8> = Accum::from_fn(|i| (i as i128 - 4) * (1i128 << 40) + 3);
    let r: Vector<f32, 8> = engine.fix2float_acc(&acc, 20);
    (0..8).for_each(|i| {
        let want: f64 = acc.get(i) as f64 / (1u64 << 20) as f64;
        assert!((r.get(i) as f64 - want).abs() <= want.abs() * 1e-6 + 1e-5, "lane {i}");
    });
}

pub fn test_sincos<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecSinCos,
{
    let a: Vector<f32, 32> = Vector::from_fn(|i| (i as f32 - 16.0) * 0.41);
    let (s, c) = engine.sincos(&a);
    let z: Vector<CFloat, 32> = engine.sincos_complex(&a);
    for i in 0..32 {
        let x: f32 = a.get(i);
        assert!((s.get(i) - x.sin()).abs() < 1e-3, "sin({x})");
        assert!((c.get(i) - x.cos()).abs() < 1e-3, "cos({x})");
        assert_eq!(z.get(i), CFloat::new(c.get(i), s.get(i)));
    }
    assert_eq!(engine.sin(&a), s);

    // large arguments are reduced modulo one turn
    let big: Vector<f32, 4> = Vector::from_array([1e30, -1e30, f32::MAX, 3.0e7]);
    for rnd in ROUNDING_MODES {
        let _guard: ModeGuard = ModeGuard::rounding(rnd);
        let z: Vector<CFloat, 4> = engine.sincos_complex(&big);
        for i in 0..4 {
            let (re, im) = (z.get(i).re, z.get(i).im);
            assert!((re * re + im * im - 1.0).abs() < 1e-3, "sincos({}) under {rnd:?}", big.get(i));
        }
        assert!(z.get(0).im.abs() < 1e-4 && (z.get(0).re - 1.0).abs() < 1e-4);
    }
    assert_eq!(engine.cos(&a), c);
    assert!(engine.sin_scalar(0.0).abs() < 1e-4);
    assert!((engine.cos_scalar(0.0) - 1.0).abs() < 1e-4);
}

pub fn test_tanh_exp2<G: Generation>(engine: &Engine<G>)
where
    Engine<G>: VecTanh + VecExp2,
{
    let a: Vector<f32, 32> = Vector::from_fn(|i| (i as f32 - 16.0) * 0.25);
    let t: Vector<Bf16, 32> = engine.tanh(&a);
    let e: Vector<Bf16, 32> = engine.exp2(&a);
    for i in 0..32 {
        let x: f32 = a.get(i);
        assert!((t.get(i).to_f32() - x.tanh()).abs() < 1e-2, "tanh({x})");
        assert!((e.get(i).to_f32() / x.exp2() - 1.0).abs() < 1e-2, "exp2({x})");
    }
    assert_eq!(engine.exp2_scalar(3.0).to_f32(), 8.0);
    assert_eq!(engine.tanh_scalar(0.0).to_f32(), 0.0);
}
