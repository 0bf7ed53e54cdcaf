use crate::{
    api::{VecArith, VecBitwise, VecCompare, VecEq, VecMaxMin, VecPermute, VecReduce, VecReduceAdd, VecShift},
    dispatch::{
        Lanes, binary_lanes, binary_mask_lanes, mask_sink, pack, reduce_lanes, reverse_lanes, select_lanes, unary_lanes, unpack,
    },
    layouts::{ArithOp, BitwiseOp, CmpOp, Element, Engine, EqOp, Generation, Mask, MaxMinOp, Operand, Vector},
    oep::{
        NativeArithImpl, NativeBitwiseImpl, NativeCmpImpl, NativeEqImpl, NativeMaxMinImpl, NativePermuteImpl, NativeReduceAddImpl,
        NativeReduceImpl, NativeShiftImpl, UnpackImpl,
    },
};

#[inline(always)]
fn native_lanes<G: Generation, T: Element>() -> usize {
    G::native_lanes::<T::Compute>()
}

fn map1<G, T, const N: usize>(a: &Vector<T, N>, native: &mut impl FnMut(&[T::Compute], &mut [T::Compute])) -> Vector<T, N>
where
    G: Generation + UnpackImpl<T>,
    T: Element,
{
    let ua: Lanes<T::Compute> = unpack::<G, T, N>(a);
    let mut res: Lanes<T::Compute> = Lanes::zeros(N);
    unary_lanes(native_lanes::<G, T>(), ua.as_slice(), res.as_mut_slice(), native);
    pack::<G, T, N>(&res)
}

fn map2<G, T, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    native: &mut impl FnMut(&[T::Compute], &[T::Compute], &mut [T::Compute]),
) -> Vector<T, N>
where
    G: Generation + UnpackImpl<T>,
    T: Element,
{
    let (ua, ub) = (unpack::<G, T, N>(a), unpack::<G, T, N>(b));
    let mut res: Lanes<T::Compute> = Lanes::zeros(N);
    binary_lanes(native_lanes::<G, T>(), ua.as_slice(), ub.as_slice(), res.as_mut_slice(), native);
    pack::<G, T, N>(&res)
}

fn map2_mask<G, T, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    native: &mut impl FnMut(&[T::Compute], &[T::Compute], &mut [T::Compute]) -> u64,
) -> (Vector<T, N>, Mask<N>)
where
    G: Generation + UnpackImpl<T>,
    T: Element,
{
    let (ua, ub) = (unpack::<G, T, N>(a), unpack::<G, T, N>(b));
    let mut res: Lanes<T::Compute> = Lanes::zeros(N);
    let mut mask: Mask<N> = Mask::new(false);
    binary_mask_lanes(
        native_lanes::<G, T>(),
        0,
        ua.as_slice(),
        ub.as_slice(),
        res.as_mut_slice(),
        native,
        &mut mask_sink(&mut mask),
    );
    (pack::<G, T, N>(&res), mask)
}

fn to_mask<G, T, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    native: impl Fn(&[T::Compute], &[T::Compute]) -> u64,
) -> Mask<N>
where
    G: Generation + UnpackImpl<T>,
    T: Element,
{
    map2_mask::<G, T, N>(a, b, &mut |x, y, _| native(x, y)).1
}

impl<G, T> VecBitwise<T> for Engine<G>
where
    G: Generation + UnpackImpl<T> + NativeBitwiseImpl<T::Compute>,
    T: Element,
{
    fn bitwise<const N: usize>(&self, op: BitwiseOp, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Vector<T, N> {
        map2::<G, T, N>(&a.into_vector(), &b.into_vector(), &mut |x, y, r| G::bitwise_impl(op, x, y, r))
    }

    fn not<const N: usize>(&self, a: &Vector<T, N>) -> Vector<T, N> {
        map1::<G, T, N>(a, &mut |x, r| G::not_impl(x, r))
    }
}

impl<G, T> VecCompare<T> for Engine<G>
where
    G: Generation + UnpackImpl<T> + NativeCmpImpl<T::Compute>,
    T: Element,
{
    fn cmp<const N: usize>(&self, op: CmpOp, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Mask<N> {
        to_mask::<G, T, N>(&a.into_vector(), &b.into_vector(), |x, y| G::cmp_impl(op, x, y))
    }
}

impl<G, T> VecEq<T> for Engine<G>
where
    G: Generation + UnpackImpl<T> + NativeEqImpl<T::Compute>,
    T: Element,
{
    fn eq_mask<const N: usize>(&self, op: EqOp, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Mask<N> {
        to_mask::<G, T, N>(&a.into_vector(), &b.into_vector(), |x, y| G::eq_impl(op, x, y))
    }
}

impl<G, T> VecMaxMin<T> for Engine<G>
where
    G: Generation + UnpackImpl<T> + NativeMaxMinImpl<T::Compute>,
    T: Element,
{
    fn max_min<const N: usize>(&self, op: MaxMinOp, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Vector<T, N> {
        map2::<G, T, N>(&a.into_vector(), &b.into_vector(), &mut |x, y, r| G::max_min_impl(op, x, y, r))
    }

    fn max_min_cmp<const N: usize>(
        &self,
        op: MaxMinOp,
        a: impl Operand<T, N>,
        b: impl Operand<T, N>,
    ) -> (Vector<T, N>, Mask<N>) {
        map2_mask::<G, T, N>(&a.into_vector(), &b.into_vector(), &mut |x, y, r| G::max_min_cmp_impl(op, x, y, r))
    }
}

impl<G, T> VecShift<T> for Engine<G>
where
    G: Generation + UnpackImpl<T> + NativeShiftImpl<T::Compute>,
    T: Element,
{
    fn shift<const N: usize>(&self, a: &Vector<T, N>, up: u32, down: u32) -> Vector<T, N> {
        map1::<G, T, N>(a, &mut |x, r| G::shift_impl(x, up, down, r))
    }
}

impl<G, T> VecArith<T> for Engine<G>
where
    G: Generation + UnpackImpl<T> + NativeArithImpl<T::Compute>,
    T: Element,
{
    fn arith<const N: usize>(&self, op: ArithOp, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Vector<T, N> {
        map2::<G, T, N>(&a.into_vector(), &b.into_vector(), &mut |x, y, r| G::arith_impl(op, x, y, r))
    }

    fn neg<const N: usize>(&self, a: &Vector<T, N>) -> Vector<T, N> {
        map1::<G, T, N>(a, &mut |x, r| G::neg_impl(x, r))
    }
}

impl<G, T> VecPermute<T> for Engine<G>
where
    G: Generation + UnpackImpl<T> + NativePermuteImpl<T::Compute>,
    T: Element,
{
    fn reverse<const N: usize>(&self, a: &Vector<T, N>) -> Vector<T, N> {
        let ua: Lanes<T::Compute> = unpack::<G, T, N>(a);
        let mut res: Lanes<T::Compute> = Lanes::zeros(N);
        reverse_lanes(native_lanes::<G, T>(), ua.as_slice(), res.as_mut_slice(), &mut |x, r| G::reverse_impl(x, r));
        pack::<G, T, N>(&res)
    }

    fn broadcast<const N: usize>(&self, value: T) -> Vector<T, N> {
        let lane: Lanes<T::Compute> = unpack::<G, T, 1>(&Vector::from_array([value]));
        let value: T::Compute = lane.as_slice()[0];
        let zeros: Vector<T, N> = Vector::zeros();
        map1::<G, T, N>(&zeros, &mut |_, r| G::broadcast_impl(value, r))
    }

    fn select<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>, mask: &Mask<N>) -> Vector<T, N> {
        let (ua, ub) = (unpack::<G, T, N>(&a.into_vector()), unpack::<G, T, N>(&b.into_vector()));
        let mut res: Lanes<T::Compute> = Lanes::zeros(N);
        select_lanes(
            native_lanes::<G, T>(),
            0,
            ua.as_slice(),
            ub.as_slice(),
            &|offset, count| mask.bits_at(offset, count),
            res.as_mut_slice(),
            &mut |x, y, m, r| G::select_impl(x, y, m, r),
        );
        pack::<G, T, N>(&res)
    }

    fn interleave_zip<const N: usize>(&self, a: &Vector<T, N>, b: &Vector<T, N>, step: usize) -> (Vector<T, N>, Vector<T, N>) {
        debug_assert!(step > 0 && N % step == 0, "interleave_zip: step {step} does not divide {N}");
        let (ua, ub) = (unpack::<G, T, N>(a), unpack::<G, T, N>(b));
        let nn: usize = native_lanes::<G, T>();
        // interleaved sequence of 2N lanes
        let mut seq: Lanes<T::Compute> = Lanes::zeros(2 * N);
        if step > nn {
            // whole registers alternate: no lane moves inside a register
            zip_blocks(ua.as_slice(), ub.as_slice(), step, seq.as_mut_slice());
        } else if N >= nn {
            let s: &mut [T::Compute] = seq.as_mut_slice();
            for (c, (ca, cb)) in ua.as_slice().chunks_exact(nn).zip(ub.as_slice().chunks_exact(nn)).enumerate() {
                let (lo, hi) = s[2 * c * nn..2 * (c + 1) * nn].split_at_mut(nn);
                G::interleave_zip_impl(ca, cb, step, lo, hi);
            }
        } else {
            let (ga, gb) = (grown(ua.as_slice(), nn), grown(ub.as_slice(), nn));
            let mut g: Lanes<T::Compute> = Lanes::zeros(2 * nn);
            let (lo, hi) = g.as_mut_slice().split_at_mut(nn);
            G::interleave_zip_impl(&ga.as_slice()[..nn], &gb.as_slice()[..nn], step, lo, hi);
            seq.as_mut_slice().copy_from_slice(&g.as_slice()[..2 * N]);
        }
        split_halves::<G, T, N>(&seq)
    }

    fn interleave_unzip<const N: usize>(
        &self,
        lo: &Vector<T, N>,
        hi: &Vector<T, N>,
        step: usize,
    ) -> (Vector<T, N>, Vector<T, N>) {
        debug_assert!(step > 0 && N % step == 0, "interleave_unzip: step {step} does not divide {N}");
        let nn: usize = native_lanes::<G, T>();
        let mut seq: Lanes<T::Compute> = Lanes::zeros(2 * N.max(nn));
        seq.as_mut_slice()[..N].copy_from_slice(unpack::<G, T, N>(lo).as_slice());
        seq.as_mut_slice()[N..2 * N].copy_from_slice(unpack::<G, T, N>(hi).as_slice());
        let mut res: Lanes<T::Compute> = Lanes::zeros(2 * N.max(nn));
        if step > nn {
            let (ra, rb) = res.as_mut_slice().split_at_mut(N);
            unzip_blocks(&seq.as_slice()[..2 * N], step, ra, &mut rb[..N]);
        } else {
            let (ra, rb) = res.as_mut_slice().split_at_mut(N.max(nn));
            for (c, pair) in seq.as_slice().chunks_exact(2 * nn).enumerate() {
                let (l, h) = pair.split_at(nn);
                G::interleave_unzip_impl(l, h, step, &mut ra[c * nn..(c + 1) * nn], &mut rb[c * nn..(c + 1) * nn]);
            }
        }
        let (ra, rb) = res.as_slice().split_at(N.max(nn));
        (pack_slice::<G, T, N>(&ra[..N]), pack_slice::<G, T, N>(&rb[..N]))
    }
}

fn zip_blocks<C: Element>(a: &[C], b: &[C], step: usize, seq: &mut [C]) {
    for (pair, (ca, cb)) in seq.chunks_exact_mut(2 * step).zip(a.chunks_exact(step).zip(b.chunks_exact(step))) {
        let (x, y) = pair.split_at_mut(step);
        x.copy_from_slice(ca);
        y.copy_from_slice(cb);
    }
}

fn unzip_blocks<C: Element>(seq: &[C], step: usize, a: &mut [C], b: &mut [C]) {
    for (pair, (ca, cb)) in seq.chunks_exact(2 * step).zip(a.chunks_exact_mut(step).zip(b.chunks_exact_mut(step))) {
        let (x, y) = pair.split_at(step);
        ca.copy_from_slice(x);
        cb.copy_from_slice(y);
    }
}

fn grown<C: Element>(a: &[C], nn: usize) -> Lanes<C> {
    let mut g: Lanes<C> = Lanes::zeros(nn);
    g.as_mut_slice()[..a.len()].copy_from_slice(a);
    g
}

fn pack_slice<G, T, const N: usize>(a: &[T::Compute]) -> Vector<T, N>
where
    G: Generation + UnpackImpl<T>,
    T: Element,
{
    let mut l: Lanes<T::Compute> = Lanes::zeros(N);
    l.as_mut_slice().copy_from_slice(a);
    pack::<G, T, N>(&l)
}

fn split_halves<G, T, const N: usize>(seq: &Lanes<T::Compute>) -> (Vector<T, N>, Vector<T, N>)
where
    G: Generation + UnpackImpl<T>,
    T: Element,
{
    let (lo, hi) = seq.as_slice().split_at(N);
    (pack_slice::<G, T, N>(lo), pack_slice::<G, T, N>(hi))
}

fn reduce<G, T, const N: usize>(
    a: &Vector<T, N>,
    combine: &mut impl FnMut(&[T::Compute], &[T::Compute], &mut [T::Compute]),
    finish: &mut impl FnMut(&[T::Compute], usize) -> T::Compute,
) -> T
where
    G: Generation + UnpackImpl<T>,
    T: Element,
{
    let ua: Lanes<T::Compute> = unpack::<G, T, N>(a);
    let lane: T::Compute = reduce_lanes(native_lanes::<G, T>(), ua.as_slice(), combine, finish);
    let mut out: [T; 1] = [T::default()];
    G::pack_impl(&[lane], &mut out);
    out[0]
}

impl<G, T> VecReduce<T> for Engine<G>
where
    G: Generation + UnpackImpl<T> + NativeMaxMinImpl<T::Compute> + NativeReduceImpl<T::Compute>,
    T: Element,
{
    fn reduce_max_min<const N: usize>(&self, op: MaxMinOp, a: &Vector<T, N>) -> T {
        reduce::<G, T, N>(
            a,
            &mut |x, y, r| G::max_min_impl(op, x, y, r),
            &mut |x, len| G::reduce_max_min_impl(op, x, len),
        )
    }
}

impl<G, T> VecReduceAdd<T> for Engine<G>
where
    G: Generation + UnpackImpl<T> + NativeArithImpl<T::Compute> + NativeReduceAddImpl<T::Compute>,
    T: Element,
{
    fn reduce_add<const N: usize>(&self, a: &Vector<T, N>) -> T {
        reduce::<G, T, N>(
            a,
            &mut |x, y, r| G::arith_impl(ArithOp::Add, x, y, r),
            &mut |x, len| G::reduce_add_impl(x, len),
        )
    }
}
