use std::f64::consts::PI;

use crate::layouts::{Complex, Integral, RoundingMode, SaturationMode, srs};

/// Largest supported radix.
pub const MAX_RADIX: usize = 5;

/// Fractional bits of the fixed-point roots used by the radix-3 and
/// radix-5 butterflies, for twiddles of `tw_bits` bits.
#[inline(always)]
pub fn root_frac_bits(tw_bits: usize) -> u32 {
    if tw_bits >= 64 { 31 } else { 15 }
}

/// `exp(-2 pi j e / radix)` (conjugated when `inv`) quantised to
/// `2^shift_tw`, truncated from `2^frac` fractional bits. A `shift_tw`
/// above `frac` upshifts the `frac`-bit root.
pub fn fixed_root(e: usize, radix: usize, frac: u32, shift_tw: u32, inv: bool) -> (i128, i128) {
    let theta: f64 = 2.0 * PI * e as f64 / radix as f64;
    let scale: f64 = (frac as f64).exp2();
    let im: f64 = if inv { theta.sin() } else { -theta.sin() };
    let re: i128 = (theta.cos() * scale).round() as i128;
    let im: i128 = (im * scale).round() as i128;
    match frac.checked_sub(shift_tw) {
        Some(down) => (re >> down, im >> down),
        None => (re << (shift_tw - frac), im << (shift_tw - frac)),
    }
}

#[inline(always)]
fn cmul(a: (i128, i128), b: (i128, i128)) -> (i128, i128) {
    (a.0 * b.0 - a.1 * b.1, a.0 * b.1 + a.1 * b.0)
}

#[inline(always)]
fn cadd(a: (i128, i128), b: (i128, i128)) -> (i128, i128) {
    (a.0 + b.0, a.1 + b.1)
}

#[inline(always)]
fn csub(a: (i128, i128), b: (i128, i128)) -> (i128, i128) {
    (a.0 - b.0, a.1 - b.1)
}

/// One radix-`x.len()` decimation-in-time butterfly on a single lane.
///
/// `x[q]` for `q >= 1` is weighted by `tw[q - 1]` (conjugated when `inv`),
/// then the radix-point DFT of the weighted inputs is written to `out`.
///
/// Fixed-point types: `x[0]` is upshifted by `shift_tw`, twiddle products
/// are exact, and each output is shift-round-saturated by `shift` with
/// `rnd`/`sat`. Radix 3 and 5 narrow the twiddled inputs back to 32 bits
/// before the multiplication by the fixed-point roots. Float twiddles use
/// `f32` arithmetic and ignore the shifts.
#[allow(clippy::too_many_arguments)]
pub fn dit_ref<TI: Complex, TO: Complex, TW: Complex>(
    x: &[TI],
    tw: &[TW],
    shift_tw: u32,
    shift: u32,
    inv: bool,
    rnd: RoundingMode,
    sat: SaturationMode,
    out: &mut [TO],
) {
    let radix: usize = x.len();

    #[cfg(debug_assertions)]
    {
        assert!((2..=MAX_RADIX).contains(&radix), "unsupported radix {radix}");
        assert_eq!(tw.len(), radix - 1);
        assert_eq!(out.len(), radix);
    }

    if TW::FLOAT {
        dit_float(x, tw, inv, out);
        return;
    }

    let mut y: [(i128, i128); MAX_RADIX] = [(0, 0); MAX_RADIX];
    let (x0r, x0i) = x[0].re_im_fixed();
    y[0] = (x0r << shift_tw, x0i << shift_tw);
    for q in 1..radix {
        let (wr, wi) = tw[q - 1].re_im_fixed();
        y[q] = cmul(x[q].re_im_fixed(), (wr, if inv { -wi } else { wi }));
    }

    let mut acc: [(i128, i128); MAX_RADIX] = [(0, 0); MAX_RADIX];
    match radix {
        2 => {
            acc[0] = cadd(y[0], y[1]);
            acc[1] = csub(y[0], y[1]);
        }
        4 => {
            let g: (i128, i128) = cadd(y[0], y[2]);
            let h: (i128, i128) = csub(y[0], y[2]);
            let p: (i128, i128) = cadd(y[1], y[3]);
            let d: (i128, i128) = csub(y[1], y[3]);
            // -j * d and +j * d by swapping components
            let mj: (i128, i128) = (d.1, -d.0);
            let pj: (i128, i128) = (-d.1, d.0);
            acc[0] = cadd(g, p);
            acc[2] = csub(g, p);
            acc[1] = cadd(h, if inv { pj } else { mj });
            acc[3] = cadd(h, if inv { mj } else { pj });
        }
        _ => {
            let frac: u32 = root_frac_bits(TW::BITS);
            let mut d: [(i128, i128); MAX_RADIX] = [(0, 0); MAX_RADIX];
            for m in 1..radix {
                d[m] = (
                    i32::narrow(srs(y[m].0, shift_tw, rnd), sat) as i128,
                    i32::narrow(srs(y[m].1, shift_tw, rnd), sat) as i128,
                );
            }
            acc[0] = y[..radix].iter().fold((0, 0), |s, v| cadd(s, *v));
            for (k, a) in acc.iter_mut().enumerate().take(radix).skip(1) {
                *a = (1..radix).fold(y[0], |s, m| cadd(s, cmul(fixed_root(k * m % radix, radix, frac, shift_tw, inv), d[m])));
            }
        }
    }

    for k in 0..radix {
        out[k] = TO::narrow_fixed(srs(acc[k].0, shift, rnd), srs(acc[k].1, shift, rnd), sat);
    }
}

fn dit_float<TI: Complex, TO: Complex, TW: Complex>(x: &[TI], tw: &[TW], inv: bool, out: &mut [TO]) {
    let radix: usize = x.len();
    let mul = |a: (f32, f32), b: (f32, f32)| (a.0 * b.0 - a.1 * b.1, a.0 * b.1 + a.1 * b.0);

    let mut y: [(f32, f32); MAX_RADIX] = [(0.0, 0.0); MAX_RADIX];
    y[0] = x[0].re_im_f32();
    for q in 1..radix {
        let (wr, wi) = tw[q - 1].re_im_f32();
        y[q] = mul(x[q].re_im_f32(), (wr, if inv { -wi } else { wi }));
    }

    let sign: f32 = if inv { 1.0 } else { -1.0 };
    for (k, o) in out.iter_mut().enumerate().take(radix) {
        let (re, im) = (0..radix).fold((0.0f32, 0.0f32), |s, q| {
            let theta: f32 = 2.0 * std::f32::consts::PI * ((k * q) % radix) as f32 / radix as f32;
            let v: (f32, f32) = mul(y[q], (theta.cos(), sign * theta.sin()));
            (s.0 + v.0, s.1 + v.1)
        });
        *o = TO::from_f32(re, im);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::{CFloat, CInt16, CInt32};

    #[test]
    fn radix2_butterfly_with_unit_twiddle() {
        let x: [CInt16; 2] = [CInt16::new(100, -20), CInt16::new(7, 3)];
        let tw: [CInt16; 1] = [CInt16::new(1, 0)];
        let mut out: [CInt16; 2] = [CInt16::default(); 2];
        dit_ref(&x, &tw, 0, 0, false, RoundingMode::Floor, SaturationMode::Saturate, &mut out);
        assert_eq!(out, [CInt16::new(107, -17), CInt16::new(93, -23)]);
    }

    #[test]
    fn roots_follow_twiddle_precision() {
        // exp(-j pi / 2) with 15 fractional bits
        assert_eq!(fixed_root(1, 4, 15, 15, false), (0, -(1 << 15)));
        assert_eq!(fixed_root(1, 4, 15, 14, false), (0, -(1 << 14)));
        assert_eq!(fixed_root(1, 4, 15, 17, true), (0, 1 << 17));
        let (re, _) = fixed_root(1, 3, 15, 20, false);
        assert_eq!(re, -(1 << 14) << 5);
    }

    #[test]
    fn outputs_saturate() {
        let x: [CInt16; 2] = [CInt16::new(i16::MAX, i16::MIN), CInt16::new(i16::MAX, i16::MIN)];
        let tw: [CInt16; 1] = [CInt16::new(1, 0)];
        let mut out: [CInt16; 2] = [CInt16::default(); 2];
        dit_ref(&x, &tw, 0, 0, false, RoundingMode::Floor, SaturationMode::Saturate, &mut out);
        assert_eq!(out[0], CInt16::new(i16::MAX, i16::MIN));
        assert_eq!(out[1], CInt16::new(0, 0));
    }

    #[test]
    fn radix4_applies_minus_j() {
        // x = [0, 1, 0, 0] with unit twiddles: X_k = exp(-2 pi j k / 4)
        let x: [CInt32; 4] = [CInt32::new(0, 0), CInt32::new(1000, 0), CInt32::new(0, 0), CInt32::new(0, 0)];
        let one: CInt16 = CInt16::new(1, 0);
        let mut out: [CInt32; 4] = [CInt32::default(); 4];
        dit_ref(&x, &[one; 3], 0, 0, false, RoundingMode::Floor, SaturationMode::Saturate, &mut out);
        assert_eq!(
            out,
            [CInt32::new(1000, 0), CInt32::new(0, -1000), CInt32::new(-1000, 0), CInt32::new(0, 1000)]
        );
        dit_ref(&x, &[one; 3], 0, 0, true, RoundingMode::Floor, SaturationMode::Saturate, &mut out);
        assert_eq!(out[1], CInt32::new(0, 1000));
    }

    #[test]
    fn odd_radix_matches_float() {
        let xs: [CInt32; 5] = [
            CInt32::new(300, -100),
            CInt32::new(-50, 70),
            CInt32::new(20, 20),
            CInt32::new(-400, 0),
            CInt32::new(90, -33),
        ];
        let one: CInt16 = CInt16::new(i16::MAX, 0);
        for radix in [3, 5] {
            let mut fixed: [CInt32; 5] = [CInt32::default(); 5];
            dit_ref(
                &xs[..radix],
                &[one; 4][..radix - 1],
                15,
                15,
                false,
                RoundingMode::SymmetricInf,
                SaturationMode::Saturate,
                &mut fixed[..radix],
            );
            let xf: Vec<CFloat> = xs[..radix].iter().map(|c| CFloat::new(c.re as f32, c.im as f32)).collect();
            let mut float: [CFloat; 5] = [CFloat::default(); 5];
            dit_ref(
                &xf,
                &[CFloat::new(1.0, 0.0); 4][..radix - 1],
                0,
                0,
                false,
                RoundingMode::Floor,
                SaturationMode::Saturate,
                &mut float[..radix],
            );
            for k in 0..radix {
                assert!((fixed[k].re as f32 - float[k].re).abs() < 2.5, "radix {radix} k {k}");
                assert!((fixed[k].im as f32 - float[k].im).abs() < 2.5, "radix {radix} k {k}");
            }
        }
    }
}
