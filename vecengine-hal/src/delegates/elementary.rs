use crate::{
    api::{VecExp2, VecFix2Float, VecFix2FloatAcc, VecFloat2Fix, VecInv, VecInvSqrt, VecSinCos, VecSqrt, VecTanh},
    dispatch::{MAX_NATIVE_LANES, convert_lanes},
    layouts::{Accum, AccumTag, Bf16, CFloat, Element, ElementaryOp, Engine, Generation, Vector},
    oep::{Exp2Impl, Fix2FloatAccImpl, Fix2FloatImpl, Float2FixImpl, InvImpl, InvSqrtImpl, SinCosImpl, SqrtImpl, TanhImpl},
};

fn convert<TI: Copy + Default, TO: Element, const N: usize>(
    op: ElementaryOp,
    bits: usize,
    a: &[TI],
    native: &mut impl FnMut(&[TI], &mut [TO]),
) -> Vector<TO, N> {
    let mut res: Vector<TO, N> = Vector::zeros();
    convert_lanes(op.native_lanes(bits), a, res.as_mut_slice(), native);
    res
}

impl<G, T, TR> VecSqrt<T, TR> for Engine<G>
where
    G: Generation + SqrtImpl<T, TR>,
    T: Element,
    TR: Element,
{
    fn sqrt<const N: usize>(&self, a: &Vector<T, N>) -> Vector<TR, N> {
        convert(ElementaryOp::Sqrt, T::BITS.max(TR::BITS), a.as_slice(), &mut |x, r| G::sqrt_impl(x, r))
    }
}

impl<G, T> VecInv<T> for Engine<G>
where
    G: Generation + InvImpl<T>,
    T: Element,
{
    fn inv<const N: usize>(&self, a: &Vector<T, N>) -> Vector<T, N> {
        convert(ElementaryOp::Inv, T::BITS, a.as_slice(), &mut |x, r| G::inv_impl(x, r))
    }
}

impl<G, T> VecInvSqrt<T> for Engine<G>
where
    G: Generation + InvSqrtImpl<T>,
    T: Element,
{
    fn invsqrt<const N: usize>(&self, a: &Vector<T, N>) -> Vector<T, N> {
        convert(ElementaryOp::InvSqrt, T::BITS, a.as_slice(), &mut |x, r| G::invsqrt_impl(x, r))
    }
}

impl<G> VecSinCos for Engine<G>
where
    G: Generation + SinCosImpl<f32>,
{
    fn sincos_complex<const N: usize>(&self, a: &Vector<f32, N>) -> Vector<CFloat, N> {
        convert(ElementaryOp::SinCos, 32, a.as_slice(), &mut |x, r: &mut [CFloat]| {
            let mut sin: [f32; MAX_NATIVE_LANES] = [0.0; MAX_NATIVE_LANES];
            let mut cos: [f32; MAX_NATIVE_LANES] = [0.0; MAX_NATIVE_LANES];
            let n: usize = x.len();
            G::sincos_impl(x, &mut sin[..n], &mut cos[..n]);
            r.iter_mut()
                .zip(sin.iter().zip(cos.iter()))
                .for_each(|(r, (s, c))| *r = CFloat::new(*c, *s));
        })
    }
}

impl<G, T, TR> VecFix2Float<T, TR> for Engine<G>
where
    G: Generation + Fix2FloatImpl<T, TR>,
    T: Element,
    TR: Element,
{
    fn fix2float<const N: usize>(&self, a: &Vector<T, N>, shift: i32) -> Vector<TR, N> {
        convert(ElementaryOp::Fix2Float, T::BITS.max(32), a.as_slice(), &mut |x, r| {
            G::fix2float_impl(x, shift, r)
        })
    }
}

impl<G, A> VecFix2FloatAcc<A> for Engine<G>
where
    G: Generation + Fix2FloatAccImpl<A>,
    A: AccumTag,
{
    fn fix2float_acc<const N: usize>(&self, a: &Accum<A, N>, shift: i32) -> Vector<f32, N> {
        convert(ElementaryOp::Fix2Float, (A::BITS as usize).max(32), a.lanes(), &mut |x, r| {
            G::fix2float_acc_impl(x, shift, r)
        })
    }
}

impl<G, TR, T> VecFloat2Fix<TR, T> for Engine<G>
where
    G: Generation + Float2FixImpl<TR, T>,
    TR: Element,
    T: Element,
{
    fn float2fix<const N: usize>(&self, a: &Vector<T, N>, shift: i32) -> Vector<TR, N> {
        convert(ElementaryOp::Float2Fix, TR::BITS.max(32), a.as_slice(), &mut |x, r| {
            G::float2fix_impl(x, shift, r)
        })
    }
}

impl<G> VecTanh for Engine<G>
where
    G: Generation + TanhImpl<f32>,
{
    fn tanh<const N: usize>(&self, a: &Vector<f32, N>) -> Vector<Bf16, N> {
        convert(ElementaryOp::Tanh, 32, a.as_slice(), &mut |x, r| G::tanh_impl(x, r))
    }
}

impl<G> VecExp2 for Engine<G>
where
    G: Generation + Exp2Impl<f32>,
{
    fn exp2<const N: usize>(&self, a: &Vector<f32, N>) -> Vector<Bf16, N> {
        convert(ElementaryOp::Exp2, 32, a.as_slice(), &mut |x, r| G::exp2_impl(x, r))
    }
}
