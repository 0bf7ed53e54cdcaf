//! Elementary functions and fixed/float conversions.
//!
//! The `_emulated` variants reproduce the bit tricks used on generations
//! without a native instruction: magic-number exponent seeds refined by
//! polynomial steps, and float/integer conversions through the mantissa of
//! a biased float.

use crate::layouts::{Bf16, Integral, ModeGuard, RoundingMode, SaturationMode, saturation, srs};

/// Floating point lanes with an `f32` view.
pub trait FloatLane: Copy {
    fn to_f32(self) -> f32;
    fn from_f32(x: f32) -> Self;
}

impl FloatLane for f32 {
    #[inline(always)]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline(always)]
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl FloatLane for Bf16 {
    #[inline(always)]
    fn to_f32(self) -> f32 {
        Bf16::to_f32(self)
    }

    #[inline(always)]
    fn from_f32(x: f32) -> Self {
        Bf16::from_f32(x)
    }
}

/// Bias of the low (`2^16` units) magic float, as bfloat16 bits at shift 0.
const MAGIC_LO: i32 = 0x4b01;
/// Bias of the high magic float, `2^16` times [MAGIC_LO].
const MAGIC_HI: i32 = 0x5301;

/// `f32` whose unit in the last place is `2^(scale - shift)`, leaving
/// `2^16` units of headroom below it.
#[inline(always)]
fn magic(base: i32, shift: i32) -> u32 {
    ((base - 128 * shift) as u32) << 16
}

#[inline(always)]
fn lane_map<T: Copy, U>(a: &[T], res: &mut [U], f: impl Fn(T) -> U) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    res.iter_mut().zip(a.iter()).for_each(|(r, x)| *r = f(*x));
}

pub fn sqrt_ref<T: FloatLane, TR: FloatLane>(a: &[T], res: &mut [TR]) {
    lane_map(a, res, |x| TR::from_f32(x.to_f32().sqrt()));
}

pub fn inv_ref<T: FloatLane>(a: &[T], res: &mut [T]) {
    lane_map(a, res, |x| T::from_f32(1.0 / x.to_f32()));
}

pub fn invsqrt_ref<T: FloatLane>(a: &[T], res: &mut [T]) {
    lane_map(a, res, |x| T::from_f32(1.0 / x.to_f32().sqrt()));
}

/// Reciprocal from an exponent-negating seed and two Newton steps.
pub fn inv_emulated_ref<T: FloatLane>(a: &[T], res: &mut [T]) {
    const SEED: u32 = 0x7eb5_3567;
    const K1: f32 = 1.939_597_4;
    const K2: f32 = 1.436_142;
    lane_map(a, res, |x| {
        let x: f32 = x.to_f32();
        let y0: f32 = f32::from_bits(SEED.wrapping_sub(x.to_bits()));
        let z: f32 = K1 * y0 * (K2 - x * y0);
        T::from_f32(z * (2.0 - z * x))
    });
}

/// Reciprocal square root from an exponent-halving seed and one tuned
/// Newton step. Relative error stays below `7e-4`.
pub fn invsqrt_emulated_ref<T: FloatLane>(a: &[T], res: &mut [T]) {
    const SEED: u32 = 0x5F1F_FFF9;
    const C2: f32 = 0.703_952_25;
    const C3: f32 = 2.389_244_6;
    lane_map(a, res, |x| {
        let x: f32 = x.to_f32();
        let y: f32 = f32::from_bits(SEED.wrapping_sub(x.to_bits() >> 1));
        T::from_f32(y * (C2 * C3 - (x * C2) * y * y))
    });
}

/// `a * 2^-shift`.
pub fn fix2float_ref<T: Integral, TR: FloatLane>(a: &[T], shift: i32, res: &mut [TR]) {
    let scale: f64 = (-shift as f64).exp2();
    lane_map(a, res, |x| TR::from_f32((x.to_i128() as f64 * scale) as f32));
}

/// Converts a signed value that fits in 16 bits plus headroom: integer-add
/// to the bits of a magic float, then subtract the magic float.
#[inline(always)]
fn fix2float_slice(v: i32, base: i32, shift: i32) -> f32 {
    let m: u32 = magic(base, shift);
    f32::from_bits(m.wrapping_add_signed(v)) - f32::from_bits(m)
}

#[inline(always)]
fn fix2float_emulated(v: i128, bits: usize, shift: i32) -> f32 {
    if bits <= 16 {
        return fix2float_slice(v as i32, MAGIC_LO, shift);
    }
    let hi: f32 = fix2float_slice((v >> 16) as i32, MAGIC_HI, shift);
    let lo: f32 = fix2float_slice((v & 0xFFFF) as i32, MAGIC_LO, shift);
    hi + lo
}

/// Same result as [fix2float_ref], computed through biased floats.
pub fn fix2float_emulated_ref<T: Integral>(a: &[T], shift: i32, res: &mut [f32]) {
    lane_map(a, res, |x| fix2float_emulated(x.to_i128(), T::BITS, shift));
}

/// Accumulator lanes of `bits` bits to float, by 16-bit slices for lanes
/// wider than 32 bits.
pub fn fix2float_acc_emulated_ref(a: &[i128], bits: u32, shift: i32, res: &mut [f32]) {
    lane_map(a, res, |v| {
        if bits <= 32 {
            return fix2float_emulated(v, 32, shift);
        }
        let top: f32 = fix2float_slice((v >> 48) as i32, MAGIC_LO, shift - 48);
        (1..=3).rev().fold(top, |acc, k| {
            let slice: i32 = ((v >> (16 * (k - 1))) & 0xFFFF) as i32;
            acc + fix2float_slice(slice, MAGIC_LO, shift - 16 * (k - 1))
        })
    });
}

/// `a * 2^shift` rounded with `rnd` and narrowed with `sat`.
pub fn float2fix_ref<TR: Integral>(a: &[f32], shift: i32, rnd: RoundingMode, sat: SaturationMode, res: &mut [TR]) {
    let scale: f64 = ((shift + 32) as f64).exp2();
    // a power of two above every target: saturates, and wraps to zero
    let bound: f64 = ((TR::BITS + 33) as f64).exp2();
    lane_map(a, res, |x| {
        let v: i128 = (x as f64 * scale).floor().clamp(-bound, bound) as i128;
        TR::narrow(srs(v, 32, rnd), sat)
    });
}

/// bfloat16 to integer: `a * 2^shift` rounded to nearest even and
/// saturated to 32 bits. Narrower targets keep the low bits of the 32-bit
/// result.
pub fn bf16_to_int_ref<TR: Integral>(a: &[Bf16], shift: i32, res: &mut [TR]) {
    let scale: f64 = (shift as f64).exp2();
    lane_map(a, res, |x| {
        let v: f64 = (x.to_f32() as f64 * scale).round_ties_even();
        let wide: i32 = v.clamp(i32::MIN as f64, i32::MAX as f64) as i32;
        TR::narrow(wide as i128, SaturationMode::None)
    });
}

/// Rounds `x * 2^shift` to nearest even through a biased float and returns
/// the integer offset from the bias.
#[inline(always)]
fn float2fix_slice(x: f32, base: i32, shift: i32) -> i64 {
    let m: u32 = magic(base, shift);
    (x + f32::from_bits(m)).to_bits() as i32 as i64 - m as i32 as i64
}

/// [float2fix_ref] with round-to-nearest-even, built from a 16-bit high
/// part and a signed 17-bit residual. Saturation is forced for the duration
/// of the conversion and the caller's mode is restored afterwards.
pub fn float2fix_emulated_ref<TR: Integral>(a: &[f32], shift: i32, res: &mut [TR]) {
    let _guard: ModeGuard = ModeGuard::saturation(SaturationMode::Saturate);
    let sat: SaturationMode = saturation();
    lane_map(a, res, |x| {
        if TR::BITS <= 16 {
            return TR::narrow(float2fix_slice(x, MAGIC_LO, shift) as i128, sat);
        }
        let hi: i128 = i16::narrow(float2fix_slice(x, MAGIC_HI, shift) as i128, sat) as i128;
        let residual: f32 = x - (hi as f32) * ((16 - shift) as f32).exp2();
        let lo: i128 = float2fix_slice(residual, MAGIC_LO, shift) as i128;
        let lo_pos: i128 = u16::narrow(lo, sat) as i128;
        let lo_neg: i128 = u16::narrow(-lo, sat) as i128;
        TR::narrow((hi << 16) + lo_pos - lo_neg, sat)
    });
}

/// Sine and cosine through a 32-bit phase accumulator and a Q15 table
/// lookup, the way the first generation evaluates them. The phase wraps
/// modulo one turn, so any finite input is accepted.
pub fn sincos_ref(a: &[f32], sin: &mut [f32], cos: &mut [f32]) {
    const INV_PI: f32 = 1.0 / std::f32::consts::PI;
    let mut phase: [i32; 1] = [0];
    #[cfg(debug_assertions)]
    {
        assert_eq!(sin.len(), a.len());
        assert_eq!(cos.len(), a.len());
    }
    for i in 0..a.len() {
        // half turns in [-1, 1), exact for every f32
        let turns: f64 = ((a[i] * INV_PI) as f64).rem_euclid(2.0);
        let turns: f32 = (if turns >= 1.0 { turns - 2.0 } else { turns }) as f32;
        float2fix_ref(&[turns], 31, RoundingMode::SymmetricInf, SaturationMode::None, &mut phase);
        let angle: f64 = phase[0] as f64 * std::f64::consts::PI / 2f64.powi(31);
        let q15 = |x: f64| (x * 32768.0).round().clamp(-32768.0, 32767.0) as i16;
        let mut out: [f32; 2] = [0.0; 2];
        fix2float_ref(&[q15(angle.sin()), q15(angle.cos())], 15, &mut out);
        sin[i] = out[0];
        cos[i] = out[1];
    }
}

pub fn tanh_ref(a: &[f32], res: &mut [Bf16]) {
    lane_map(a, res, |x| Bf16::from_f32(x.tanh()));
}

pub fn exp2_ref(a: &[f32], res: &mut [Bf16]) {
    lane_map(a, res, |x| Bf16::from_f32(x.exp2()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Source;

    fn random_positive(source: &mut Source, n: usize) -> Vec<f32> {
        (0..n).map(|_| ((source.next_f64(-20.0, 20.0)).exp()) as f32).collect()
    }

    #[test]
    fn emulated_reciprocals_track_exact() {
        let mut source: Source = Source::new([3u8; 32]);
        let a: Vec<f32> = random_positive(&mut source, 256);
        let (mut exact, mut emu) = (vec![0f32; 256], vec![0f32; 256]);

        inv_ref(&a, &mut exact);
        inv_emulated_ref(&a, &mut emu);
        exact.iter().zip(&emu).for_each(|(e, r)| assert!((r / e - 1.0).abs() < 1e-6, "{r} vs {e}"));

        invsqrt_ref(&a, &mut exact);
        invsqrt_emulated_ref(&a, &mut emu);
        exact.iter().zip(&emu).for_each(|(e, r)| assert!((r / e - 1.0).abs() < 7e-4, "{r} vs {e}"));

        let b: Vec<Bf16> = a.iter().map(|x| Bf16::from_f32(*x)).collect();
        let mut emu_b: Vec<Bf16> = vec![Bf16::default(); 256];
        inv_emulated_ref(&b, &mut emu_b);
        b.iter().zip(&emu_b).for_each(|(x, r)| assert!((r.to_f32() * x.to_f32() - 1.0).abs() < 1e-2));
    }

    #[test]
    fn fix2float_emulated_is_exact() {
        let mut source: Source = Source::new([5u8; 32]);
        let a32: Vec<i32> = (0..512).map(|_| source.next_i32()).collect();
        let a16: Vec<i16> = (0..512).map(|_| source.next_i32() as i16).collect();
        let (mut native, mut emu) = (vec![0f32; 512], vec![0f32; 512]);
        for shift in [0, 5, 15, 31] {
            fix2float_ref(&a32, shift, &mut native);
            fix2float_emulated_ref(&a32, shift, &mut emu);
            assert_eq!(native, emu, "i32 shift={shift}");
            fix2float_ref(&a16, shift, &mut native);
            fix2float_emulated_ref(&a16, shift, &mut emu);
            assert_eq!(native, emu, "i16 shift={shift}");
        }
    }

    #[test]
    fn fix2float_acc64_is_close() {
        let a: [i128; 4] = [1 << 40, -(3 << 50) + 12345, 7, -1];
        let mut res: [f32; 4] = [0.0; 4];
        fix2float_acc_emulated_ref(&a, 64, 10, &mut res);
        a.iter().zip(&res).for_each(|(v, r)| {
            let want: f64 = *v as f64 / 1024.0;
            assert!(((*r as f64) - want).abs() <= want.abs() * 1e-6, "{r} vs {want}");
        });
    }

    #[test]
    fn float2fix_emulated_matches_round_to_even() {
        let mut source: Source = Source::new([7u8; 32]);
        let a: Vec<f32> = (0..512).map(|_| source.next_f64(-70000.0, 70000.0) as f32).collect();
        let (mut native, mut emu) = (vec![0i32; 512], vec![0i32; 512]);
        for shift in [0, 4, 12] {
            float2fix_ref(&a, shift, RoundingMode::ConvEven, SaturationMode::Saturate, &mut native);
            float2fix_emulated_ref(&a, shift, &mut emu);
            assert_eq!(native, emu, "i32 shift={shift}");
        }
        let (mut native, mut emu) = (vec![0i16; 512], vec![0i16; 512]);
        float2fix_ref(&a, 0, RoundingMode::ConvEven, SaturationMode::Saturate, &mut native);
        float2fix_emulated_ref(&a, 0, &mut emu);
        assert_eq!(native, emu);

        let big: [f32; 2] = [1e20, -1e20];
        let mut out: [i32; 2] = [0; 2];
        let _guard: ModeGuard = ModeGuard::saturation(SaturationMode::None);
        float2fix_emulated_ref(&big, 0, &mut out);
        assert_eq!(out, [i32::MAX, i32::MIN]);
        assert_eq!(saturation(), SaturationMode::None);
    }

    #[test]
    fn bf16_to_int_rounds_to_even_and_keeps_low_half() {
        let a: [Bf16; 4] = [2.5, -3.5, 0.75, 65536.0].map(Bf16::from_f32);
        let mut wide: [i32; 4] = [0; 4];
        bf16_to_int_ref(&a, 0, &mut wide);
        assert_eq!(wide, [2, -4, 1, 65536]);
        bf16_to_int_ref(&a, 2, &mut wide);
        assert_eq!(wide, [10, -14, 3, 262144]);
        let mut narrow: [i16; 4] = [0; 4];
        bf16_to_int_ref(&a, 0, &mut narrow);
        assert_eq!(narrow, [2, -4, 1, 0]);
        let huge: [Bf16; 2] = [Bf16::from_f32(1e20), Bf16::from_f32(-1e20)];
        let mut out: [i32; 2] = [0; 2];
        bf16_to_int_ref(&huge, 0, &mut out);
        assert_eq!(out, [i32::MAX, i32::MIN]);
    }

    #[test]
    fn float2fix_clamps_huge_products() {
        let a: [f32; 4] = [1e30, -1e30, f32::MAX, f32::MIN];
        let mut out: [i32; 4] = [0; 4];
        for rnd in [RoundingMode::Floor, RoundingMode::SymmetricInf, RoundingMode::PositiveInf, RoundingMode::ConvOdd] {
            float2fix_ref(&a, 31, rnd, SaturationMode::Saturate, &mut out);
            assert_eq!(out, [i32::MAX, i32::MIN, i32::MAX, i32::MIN], "{rnd:?}");
        }
        float2fix_ref(&a, 0, RoundingMode::Floor, SaturationMode::None, &mut out);
        assert_eq!(out, [0; 4]);
    }

    #[test]
    fn sincos_is_periodic_and_accurate() {
        let a: Vec<f32> = (0..64).map(|i| (i as f32 - 32.0) * 0.37).collect();
        let (mut s, mut c) = (vec![0f32; 64], vec![0f32; 64]);
        sincos_ref(&a, &mut s, &mut c);
        for i in 0..64 {
            assert!((s[i] - a[i].sin()).abs() < 1e-4, "sin({})", a[i]);
            assert!((c[i] - a[i].cos()).abs() < 1e-4, "cos({})", a[i]);
        }
    }
}
