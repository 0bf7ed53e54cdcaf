//! Width-recursive decomposition of logical vector operations onto native
//! registers.
//!
//! Every helper here works on the compute lanes of a vector: 4-bit lanes
//! are first unpacked to 8 bits in chunks of [SUBBYTE_CHUNK] lanes through
//! [UnpackImpl], and packed back afterwards. The lanes are then split in
//! halves until one native register is reached; a vector narrower than a
//! register is zero-extended into a scratch register and only its first
//! lanes are kept.

use crate::{
    layouts::{Element, MAX_VECTOR_BITS, Mask, Vector},
    oep::UnpackImpl,
};

/// Widest native register in lanes, over every generation and lane type.
pub const MAX_NATIVE_LANES: usize = 64;

/// Largest number of 4-bit lanes unpacked by one native call.
pub const SUBBYTE_CHUNK: usize = 128;

// room for the interleaved sequence of two 4-bit vectors
const MAX_LANES: usize = 2 * MAX_VECTOR_BITS / 4;

/// Compute lanes of a logical vector.
pub(crate) struct Lanes<C> {
    data: [C; MAX_LANES],
    len: usize,
}

impl<C: Element> Lanes<C> {
    pub(crate) fn zeros(len: usize) -> Self {
        debug_assert!(len <= MAX_LANES);
        Self {
            data: [C::default(); MAX_LANES],
            len,
        }
    }

    pub(crate) fn as_slice(&self) -> &[C] {
        &self.data[..self.len]
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [C] {
        &mut self.data[..self.len]
    }
}

fn chunk<T: Element, const N: usize>() -> usize {
    if T::SUBBYTE { SUBBYTE_CHUNK.min(N) } else { N }
}

pub(crate) fn unpack<G, T, const N: usize>(a: &Vector<T, N>) -> Lanes<T::Compute>
where
    G: UnpackImpl<T>,
    T: Element,
{
    let mut out: Lanes<T::Compute> = Lanes::zeros(N);
    let step: usize = chunk::<T, N>();
    a.as_slice()
        .chunks(step)
        .zip(out.as_mut_slice().chunks_mut(step))
        .for_each(|(src, dst)| G::unpack_impl(src, dst));
    out
}

pub(crate) fn pack<G, T, const N: usize>(a: &Lanes<T::Compute>) -> Vector<T, N>
where
    G: UnpackImpl<T>,
    T: Element,
{
    let mut out: Vector<T, N> = Vector::zeros();
    let step: usize = chunk::<T, N>();
    a.as_slice()
        .chunks(step)
        .zip(out.as_mut_slice().chunks_mut(step))
        .for_each(|(src, dst)| G::pack_impl(src, dst));
    out
}

fn grow<C: Copy + Default>(a: &[C], nn: usize) -> [C; MAX_NATIVE_LANES] {
    debug_assert!(nn <= MAX_NATIVE_LANES, "native register of {nn} lanes");
    let mut s: [C; MAX_NATIVE_LANES] = [C::default(); MAX_NATIVE_LANES];
    s[..a.len()].copy_from_slice(a);
    s
}

/// Applies a one-input native primitive over `a`, `nn` lanes at a time.
pub fn unary_lanes<C: Element>(nn: usize, a: &[C], res: &mut [C], native: &mut impl FnMut(&[C], &mut [C])) {
    let len: usize = a.len();
    if len > nn {
        let h: usize = len / 2;
        let (r0, r1) = res.split_at_mut(h);
        unary_lanes(nn, &a[..h], r0, native);
        unary_lanes(nn, &a[h..], r1, native);
    } else if len == nn {
        native(a, res);
    } else {
        let sa: [C; MAX_NATIVE_LANES] = grow(a, nn);
        let mut sr: [C; MAX_NATIVE_LANES] = [C::default(); MAX_NATIVE_LANES];
        native(&sa[..nn], &mut sr[..nn]);
        res.copy_from_slice(&sr[..len]);
    }
}

/// Applies a native conversion from `CI` lanes to `CO` lanes, `nn` lanes at
/// a time.
pub fn convert_lanes<CI: Copy + Default, CO: Copy + Default>(
    nn: usize,
    a: &[CI],
    res: &mut [CO],
    native: &mut impl FnMut(&[CI], &mut [CO]),
) {
    let len: usize = a.len();
    if len > nn {
        let h: usize = len / 2;
        let (r0, r1) = res.split_at_mut(h);
        convert_lanes(nn, &a[..h], r0, native);
        convert_lanes(nn, &a[h..], r1, native);
    } else if len == nn {
        native(a, res);
    } else {
        let sa: [CI; MAX_NATIVE_LANES] = grow(a, nn);
        let mut sr: [CO; MAX_NATIVE_LANES] = [CO::default(); MAX_NATIVE_LANES];
        native(&sa[..nn], &mut sr[..nn]);
        res.copy_from_slice(&sr[..len]);
    }
}

/// Applies a two-input native primitive over `a` and `b`, `nn` lanes at a time.
pub fn binary_lanes<C: Element>(
    nn: usize,
    a: &[C],
    b: &[C],
    res: &mut [C],
    native: &mut impl FnMut(&[C], &[C], &mut [C]),
) {
    let len: usize = a.len();
    if len > nn {
        let h: usize = len / 2;
        let (r0, r1) = res.split_at_mut(h);
        binary_lanes(nn, &a[..h], &b[..h], r0, native);
        binary_lanes(nn, &a[h..], &b[h..], r1, native);
    } else if len == nn {
        native(a, b, res);
    } else {
        let (sa, sb) = (grow(a, nn), grow(b, nn));
        let mut sr: [C; MAX_NATIVE_LANES] = [C::default(); MAX_NATIVE_LANES];
        native(&sa[..nn], &sb[..nn], &mut sr[..nn]);
        res.copy_from_slice(&sr[..len]);
    }
}

/// Applies a two-input native primitive that also yields one bit per lane.
/// The bits of the register starting at lane `offset` are handed to `sink`.
pub fn binary_mask_lanes<C: Element>(
    nn: usize,
    offset: usize,
    a: &[C],
    b: &[C],
    res: &mut [C],
    native: &mut impl FnMut(&[C], &[C], &mut [C]) -> u64,
    sink: &mut impl FnMut(usize, u64, usize),
) {
    let len: usize = a.len();
    if len > nn {
        let h: usize = len / 2;
        let (r0, r1) = res.split_at_mut(h);
        binary_mask_lanes(nn, offset, &a[..h], &b[..h], r0, native, sink);
        binary_mask_lanes(nn, offset + h, &a[h..], &b[h..], r1, native, sink);
    } else if len == nn {
        let bits: u64 = native(a, b, res);
        sink(offset, bits, len);
    } else {
        let (sa, sb) = (grow(a, nn), grow(b, nn));
        let mut sr: [C; MAX_NATIVE_LANES] = [C::default(); MAX_NATIVE_LANES];
        let bits: u64 = native(&sa[..nn], &sb[..nn], &mut sr[..nn]);
        res.copy_from_slice(&sr[..len]);
        sink(offset, bits & low_bits(len), len);
    }
}

/// Two-input native primitive with a per-lane mask argument.
pub fn select_lanes<C: Element>(
    nn: usize,
    offset: usize,
    a: &[C],
    b: &[C],
    mask: &impl Fn(usize, usize) -> u64,
    res: &mut [C],
    native: &mut impl FnMut(&[C], &[C], u64, &mut [C]),
) {
    let len: usize = a.len();
    if len > nn {
        let h: usize = len / 2;
        let (r0, r1) = res.split_at_mut(h);
        select_lanes(nn, offset, &a[..h], &b[..h], mask, r0, native);
        select_lanes(nn, offset + h, &a[h..], &b[h..], mask, r1, native);
    } else if len == nn {
        native(a, b, mask(offset, len), res);
    } else {
        let (sa, sb) = (grow(a, nn), grow(b, nn));
        let mut sr: [C; MAX_NATIVE_LANES] = [C::default(); MAX_NATIVE_LANES];
        native(&sa[..nn], &sb[..nn], mask(offset, len), &mut sr[..nn]);
        res.copy_from_slice(&sr[..len]);
    }
}

/// Reverses `a` into `res`. Halves are reversed independently and swapped;
/// a short vector is reversed inside a zero-extended register and the last
/// lanes are kept.
pub fn reverse_lanes<C: Element>(nn: usize, a: &[C], res: &mut [C], native: &mut impl FnMut(&[C], &mut [C])) {
    let len: usize = a.len();
    if len > nn {
        let h: usize = len / 2;
        let (r0, r1) = res.split_at_mut(h);
        reverse_lanes(nn, &a[h..], r0, native);
        reverse_lanes(nn, &a[..h], r1, native);
    } else if len == nn {
        native(a, res);
    } else {
        let sa: [C; MAX_NATIVE_LANES] = grow(a, nn);
        let mut sr: [C; MAX_NATIVE_LANES] = [C::default(); MAX_NATIVE_LANES];
        native(&sa[..nn], &mut sr[..nn]);
        res.copy_from_slice(&sr[nn - len..nn]);
    }
}

/// Reduces `a` to one lane: halves are combined with the binary primitive
/// until one native register is left, which `finish` reduces over its
/// first `len` lanes.
pub fn reduce_lanes<C: Element>(
    nn: usize,
    a: &[C],
    combine: &mut impl FnMut(&[C], &[C], &mut [C]),
    finish: &mut impl FnMut(&[C], usize) -> C,
) -> C {
    let len: usize = a.len();
    if len > nn {
        let h: usize = len / 2;
        let mut half: [C; MAX_LANES / 2] = [C::default(); MAX_LANES / 2];
        binary_lanes(nn, &a[..h], &a[h..], &mut half[..h], combine);
        reduce_lanes(nn, &half[..h], combine, finish)
    } else {
        let sa: [C; MAX_NATIVE_LANES] = grow(a, nn);
        finish(&sa[..nn], len)
    }
}

#[inline(always)]
pub(crate) fn low_bits(count: usize) -> u64 {
    if count >= 64 { u64::MAX } else { (1u64 << count) - 1 }
}

/// Sink writing native register masks into a logical mask.
pub(crate) fn mask_sink<const N: usize>(mask: &mut Mask<N>) -> impl FnMut(usize, u64, usize) + '_ {
    move |offset, bits, count| mask.insert_bits(offset, bits, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_vectors_grow_into_one_register() {
        let mut calls: usize = 0;
        let a: [i32; 4] = [1, 2, 3, 4];
        let mut res: [i32; 4] = [0; 4];
        unary_lanes(16, &a, &mut res, &mut |x: &[i32], r: &mut [i32]| {
            calls += 1;
            assert_eq!(x.len(), 16);
            r.iter_mut().zip(x).for_each(|(r, x)| *r = x * 10);
        });
        assert_eq!(calls, 1);
        assert_eq!(res, [10, 20, 30, 40]);
    }

    #[test]
    fn wide_vectors_split_into_registers() {
        let a: Vec<i16> = (0..64).collect();
        let b: Vec<i16> = (0..64).map(|x| 2 * x).collect();
        let mut res: Vec<i16> = vec![0; 64];
        let mut calls: usize = 0;
        binary_lanes(16, &a, &b, &mut res, &mut |x: &[i16], y: &[i16], r: &mut [i16]| {
            calls += 1;
            assert_eq!(x.len(), 16);
            r.iter_mut().zip(x.iter().zip(y)).for_each(|(r, (x, y))| *r = x + y);
        });
        assert_eq!(calls, 4);
        assert!(res.iter().enumerate().all(|(i, r)| *r == 3 * i as i16));
    }

    #[test]
    fn reverse_swaps_halves_and_keeps_tail() {
        let native = &mut |x: &[u8], r: &mut [u8]| {
            r.iter_mut().zip(x.iter().rev()).for_each(|(r, x)| *r = *x);
        };
        let a: Vec<u8> = (0..32).collect();
        let mut res: Vec<u8> = vec![0; 32];
        reverse_lanes(8, &a, &mut res, &mut *native);
        assert!(res.iter().enumerate().all(|(i, r)| *r as usize == 31 - i));

        let mut short: [u8; 3] = [0; 3];
        reverse_lanes(8, &[7, 8, 9], &mut short, native);
        assert_eq!(short, [9, 8, 7]);
    }

    #[test]
    fn masks_land_at_lane_offsets() {
        let a: Vec<i32> = (0..40).map(|i| if i % 3 == 0 { 1 } else { 0 }).collect();
        let mut res: Vec<i32> = vec![0; 40];
        let mut seen: Vec<(usize, u64, usize)> = Vec::new();
        // 40 is not a power of two: halves of 20 lanes, each narrower than 32
        binary_mask_lanes(
            32,
            0,
            &a,
            &a,
            &mut res,
            &mut |x: &[i32], _: &[i32], _: &mut [i32]| {
                x.iter().enumerate().fold(0u64, |m, (i, v)| m | ((*v as u64) << i))
            },
            &mut |offset, bits, count| seen.push((offset, bits, count)),
        );
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, 0);
        assert_eq!(seen[1].0, 20);
        assert_eq!(seen[1].2, 20);
        // lane 21 is a multiple of 3
        assert_eq!(seen[1].1 >> 1 & 1, 1);
    }

    #[test]
    fn reduce_combines_halves_then_finishes() {
        let a: Vec<i32> = (1..=128).collect();
        let mut combines: usize = 0;
        let sum: i32 = reduce_lanes(
            16,
            &a,
            &mut |x: &[i32], y: &[i32], r: &mut [i32]| {
                combines += 1;
                r.iter_mut().zip(x.iter().zip(y)).for_each(|(r, (x, y))| *r = x + y);
            },
            &mut |x: &[i32], len: usize| x[..len].iter().sum(),
        );
        assert_eq!(sum, 128 * 129 / 2);
        // 64 + 32 + 16 lanes of combines
        assert_eq!(combines, 4 + 2 + 1);
    }
}
