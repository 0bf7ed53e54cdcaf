use std::fmt::{Debug, Display, Formatter};

use crate::layouts::{
    Bf16, CBf16, CFloat, CInt16, CInt32, Complex, Element, FixedParts, Generation, Integral, RoundingMode, SaturationMode,
    Vector, rounding, saturation, srs, wrap_bits,
};

/// Storage of a single accumulator lane.
pub trait AccLane: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    fn acc_add(self, other: Self) -> Self;
    fn acc_sub(self, other: Self) -> Self;
    fn acc_neg(self) -> Self;

    /// Sign-extends from `bits`. Float lanes are returned unchanged.
    fn wrap(self, bits: u32) -> Self;
}

/// Complex integer accumulator lane.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct CAccLane {
    pub re: i128,
    pub im: i128,
}

impl CAccLane {
    pub const fn new(re: i128, im: i128) -> Self {
        Self { re, im }
    }
}

impl AccLane for i128 {
    #[inline(always)]
    fn acc_add(self, other: Self) -> Self {
        self.wrapping_add(other)
    }

    #[inline(always)]
    fn acc_sub(self, other: Self) -> Self {
        self.wrapping_sub(other)
    }

    #[inline(always)]
    fn acc_neg(self) -> Self {
        self.wrapping_neg()
    }

    #[inline(always)]
    fn wrap(self, bits: u32) -> Self {
        wrap_bits(self, bits)
    }
}

impl AccLane for CAccLane {
    fn acc_add(self, other: Self) -> Self {
        Self::new(self.re.wrapping_add(other.re), self.im.wrapping_add(other.im))
    }

    fn acc_sub(self, other: Self) -> Self {
        Self::new(self.re.wrapping_sub(other.re), self.im.wrapping_sub(other.im))
    }

    fn acc_neg(self) -> Self {
        Self::new(self.re.wrapping_neg(), self.im.wrapping_neg())
    }

    fn wrap(self, bits: u32) -> Self {
        Self::new(wrap_bits(self.re, bits), wrap_bits(self.im, bits))
    }
}

impl AccLane for f32 {
    fn acc_add(self, other: Self) -> Self {
        self + other
    }

    fn acc_sub(self, other: Self) -> Self {
        self - other
    }

    fn acc_neg(self) -> Self {
        -self
    }

    fn wrap(self, _bits: u32) -> Self {
        self
    }
}

impl AccLane for CFloat {
    fn acc_add(self, other: Self) -> Self {
        CFloat::new(self.re + other.re, self.im + other.im)
    }

    fn acc_sub(self, other: Self) -> Self {
        CFloat::new(self.re - other.re, self.im - other.im)
    }

    fn acc_neg(self) -> Self {
        CFloat::new(-self.re, -self.im)
    }

    fn wrap(self, _bits: u32) -> Self {
        self
    }
}

/// Accumulator precision tag.
pub trait AccumTag: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
    type Lane: AccLane;
    const BITS: u32;
    const NAME: &'static str;
}

macro_rules! acc_tags {
    ($($tag:ident => $lane:ty, $bits:literal, $name:literal);+ $(;)?) => {
        $(
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
            pub struct $tag;

            impl AccumTag for $tag {
                type Lane = $lane;
                const BITS: u32 = $bits;
                const NAME: &'static str = $name;
            }
        )+
    };
}

acc_tags!(
    Acc16 => i128, 16, "acc16";
    Acc24 => i128, 24, "acc24";
    Acc32 => i128, 32, "acc32";
    Acc40 => i128, 40, "acc40";
    Acc48 => i128, 48, "acc48";
    Acc56 => i128, 56, "acc56";
    Acc64 => i128, 64, "acc64";
    Acc72 => i128, 72, "acc72";
    Acc80 => i128, 80, "acc80";
    CAcc32 => CAccLane, 32, "cacc32";
    CAcc48 => CAccLane, 48, "cacc48";
    CAcc64 => CAccLane, 64, "cacc64";
    CAcc80 => CAccLane, 80, "cacc80";
    AccFloat => f32, 32, "accfloat";
    CAccFloat => CFloat, 64, "caccfloat";
);

/// Exact product of a lane of `Self` and a lane of `TB` as an accumulator lane `L`.
pub trait Multiply<TB, L> {
    fn mul_lane(self, b: TB) -> L;
}

impl<TA: Integral, TB: Integral> Multiply<TB, i128> for TA {
    #[inline(always)]
    fn mul_lane(self, b: TB) -> i128 {
        self.to_i128() * b.to_i128()
    }
}

impl<TA: FixedParts, TB: FixedParts> Multiply<TB, CAccLane> for TA {
    #[inline(always)]
    fn mul_lane(self, b: TB) -> CAccLane {
        let (ar, ai) = self.parts();
        let (br, bi) = b.parts();
        CAccLane::new(ar * br - ai * bi, ar * bi + ai * br)
    }
}

impl Multiply<f32, f32> for f32 {
    fn mul_lane(self, b: f32) -> f32 {
        self * b
    }
}

impl Multiply<Bf16, f32> for Bf16 {
    fn mul_lane(self, b: Bf16) -> f32 {
        self.to_f32() * b.to_f32()
    }
}

impl Multiply<CFloat, CFloat> for CFloat {
    fn mul_lane(self, b: CFloat) -> CFloat {
        CFloat::new(self.re * b.re - self.im * b.im, self.re * b.im + self.im * b.re)
    }
}

impl Multiply<CBf16, CFloat> for CBf16 {
    fn mul_lane(self, b: CBf16) -> CFloat {
        let (ar, ai) = self.re_im_f32();
        let (br, bi) = b.re_im_f32();
        CFloat::new(ar * br - ai * bi, ar * bi + ai * br)
    }
}

/// Widening of a vector lane into an accumulator lane, scaled by `2^shift`.
pub trait IntoLane<L> {
    fn into_lane(self, shift: u32) -> L;
}

/// Shift-round-saturate of an accumulator lane back into a vector lane.
pub trait FromLane<L>: Sized {
    fn from_lane(lane: L, shift: u32, rnd: RoundingMode, sat: SaturationMode) -> Self;
}

impl<T: Integral> IntoLane<i128> for T {
    #[inline(always)]
    fn into_lane(self, shift: u32) -> i128 {
        self.to_i128() << shift
    }
}

impl<T: Integral> FromLane<i128> for T {
    #[inline(always)]
    fn from_lane(lane: i128, shift: u32, rnd: RoundingMode, sat: SaturationMode) -> Self {
        T::narrow(srs(lane, shift, rnd), sat)
    }
}

macro_rules! impl_complex_lane {
    ($($t:ty),+) => {
        $(
            impl IntoLane<CAccLane> for $t {
                fn into_lane(self, shift: u32) -> CAccLane {
                    CAccLane::new((self.re as i128) << shift, (self.im as i128) << shift)
                }
            }

            impl FromLane<CAccLane> for $t {
                fn from_lane(lane: CAccLane, shift: u32, rnd: RoundingMode, sat: SaturationMode) -> Self {
                    <$t>::narrow_fixed(srs(lane.re, shift, rnd), srs(lane.im, shift, rnd), sat)
                }
            }
        )+
    };
}

impl_complex_lane!(CInt16, CInt32);

impl IntoLane<f32> for f32 {
    fn into_lane(self, _shift: u32) -> f32 {
        self
    }
}

impl FromLane<f32> for f32 {
    fn from_lane(lane: f32, _shift: u32, _rnd: RoundingMode, _sat: SaturationMode) -> Self {
        lane
    }
}

impl IntoLane<f32> for Bf16 {
    fn into_lane(self, _shift: u32) -> f32 {
        self.to_f32()
    }
}

impl FromLane<f32> for Bf16 {
    fn from_lane(lane: f32, _shift: u32, _rnd: RoundingMode, _sat: SaturationMode) -> Self {
        Bf16::from_f32(lane)
    }
}

impl IntoLane<CFloat> for CFloat {
    fn into_lane(self, _shift: u32) -> CFloat {
        self
    }
}

impl FromLane<CFloat> for CFloat {
    fn from_lane(lane: CFloat, _shift: u32, _rnd: RoundingMode, _sat: SaturationMode) -> Self {
        lane
    }
}

impl IntoLane<CFloat> for CBf16 {
    fn into_lane(self, _shift: u32) -> CFloat {
        let (re, im) = self.re_im_f32();
        CFloat::new(re, im)
    }
}

impl FromLane<CFloat> for CBf16 {
    fn from_lane(lane: CFloat, _shift: u32, _rnd: RoundingMode, _sat: SaturationMode) -> Self {
        CBf16::new(lane.re, lane.im)
    }
}

/// `N` accumulator lanes of precision `A`. Integer lanes wrap at `A::BITS`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Accum<A: AccumTag, const N: usize> {
    lanes: [A::Lane; N],
}

impl<A: AccumTag, const N: usize> Accum<A, N> {
    pub const SIZE: usize = N;

    const SHAPE_OK: () = assert!(
        N.is_power_of_two() && N <= 256,
        "accumulator lane count must be a power of two no larger than 256"
    );

    pub fn from_lanes(lanes: [A::Lane; N]) -> Self {
        let () = Self::SHAPE_OK;
        Self {
            lanes: lanes.map(|l| l.wrap(A::BITS)),
        }
    }

    pub fn from_fn(mut f: impl FnMut(usize) -> A::Lane) -> Self {
        Self::from_lanes(std::array::from_fn(|i| f(i)))
    }

    pub fn zeros() -> Self {
        Self::from_lanes([A::Lane::default(); N])
    }

    pub fn lanes(&self) -> &[A::Lane; N] {
        &self.lanes
    }

    pub fn get(&self, i: usize) -> A::Lane {
        self.lanes[i]
    }

    pub fn set(&mut self, i: usize, lane: A::Lane) {
        self.lanes[i] = lane.wrap(A::BITS);
    }

    /// Loads `v` upshifted by `shift` bits.
    pub fn from_vector<T: IntoLane<A::Lane> + Element>(v: &Vector<T, N>, shift: u32) -> Self {
        Self::from_fn(|i| v.0[i].into_lane(shift))
    }

    /// Shift-round-saturate into a vector with the current rounding and
    /// saturation modes.
    pub fn to_vector<T: FromLane<A::Lane> + Element>(&self, shift: u32) -> Vector<T, N> {
        let (rnd, sat) = (rounding(), saturation());
        Vector::from_fn(|i| T::from_lane(self.lanes[i], shift, rnd, sat))
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::from_fn(|i| self.lanes[i].acc_add(other.lanes[i]))
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self::from_fn(|i| self.lanes[i].acc_sub(other.lanes[i]))
    }

    pub fn neg(&self) -> Self {
        Self::from_fn(|i| self.lanes[i].acc_neg())
    }

    /// Element-wise product of two vectors.
    pub fn mul<TA, TB>(a: &Vector<TA, N>, b: &Vector<TB, N>) -> Self
    where
        TA: Multiply<TB, A::Lane> + Element,
        TB: Element,
    {
        Self::from_fn(|i| a.0[i].mul_lane(b.0[i]))
    }

    /// Adds the element-wise product of two vectors.
    pub fn mac<TA, TB>(&self, a: &Vector<TA, N>, b: &Vector<TB, N>) -> Self
    where
        TA: Multiply<TB, A::Lane> + Element,
        TB: Element,
    {
        self.add(&Self::mul(a, b))
    }

    /// Subtracts the element-wise product of two vectors.
    pub fn msc<TA, TB>(&self, a: &Vector<TA, N>, b: &Vector<TB, N>) -> Self
    where
        TA: Multiply<TB, A::Lane> + Element,
        TB: Element,
    {
        self.sub(&Self::mul(a, b))
    }

    pub fn extract<const M: usize>(&self, idx: usize) -> Accum<A, M> {
        const { assert!(M <= N && N % M == 0, "extract: M must divide N") };
        Accum::from_fn(|i| self.lanes[idx * M + i])
    }

    pub fn insert<const M: usize>(&mut self, idx: usize, sub: &Accum<A, M>) {
        const { assert!(M <= N && N % M == 0, "insert: M must divide N") };
        self.lanes[idx * M..(idx + 1) * M].copy_from_slice(&sub.lanes);
    }

    pub fn grow<const M: usize>(&self) -> Accum<A, M> {
        const { assert!(M >= N && M % N == 0, "grow: N must divide M") };
        Accum::from_fn(|i| if i < N { self.lanes[i] } else { A::Lane::default() })
    }

    pub fn concat<const K: usize, const M: usize>(parts: &[Accum<A, N>; K]) -> Accum<A, M> {
        const { assert!(M == N * K, "concat: M must equal N * K") };
        Accum::from_fn(|i| parts[i / N].lanes[i % N])
    }
}

impl<A: AccumTag, const N: usize> Default for Accum<A, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<A: AccumTag, const N: usize> Display for Accum<A, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "accum<{}, {N}>: {:?}", A::NAME, self.lanes)
    }
}

/// Accumulator precision selected by a generation for products of `TA` and `TB`.
pub trait DefaultAccum<TA, TB>: Generation {
    type Tag: AccumTag;
}

/// Accumulator precision of at least `BITS` bits for products of `TA` and `TB`.
pub trait AccumFor<TA, TB, const BITS: u32>: Generation {
    type Tag: AccumTag;
}

pub type DefaultAccumTag<G, TA, TB> = <G as DefaultAccum<TA, TB>>::Tag;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::ModeGuard;

    #[test]
    fn narrowing_saturates_by_default() {
        let acc: Accum<Acc48, 4> = Accum::from_lanes([1 << 40, -(1 << 40), 1234, -1234]);
        let v: Vector<i16, 4> = acc.to_vector(0);
        assert_eq!(v.as_slice(), &[i16::MAX, i16::MIN, 1234, -1234]);
        {
            let _guard: ModeGuard = ModeGuard::saturation(SaturationMode::None);
            let w: Vector<i16, 4> = acc.to_vector(0);
            assert_eq!(w.get(0), 0);
        }
        let s: Vector<i16, 4> = acc.to_vector(4);
        assert_eq!(s.get(2), 1234 >> 4);
    }

    #[test]
    fn lanes_wrap_at_tag_width() {
        let acc: Accum<Acc32, 2> = Accum::from_lanes([i32::MAX as i128, 0]);
        let one: Accum<Acc32, 2> = Accum::from_lanes([1, 1]);
        assert_eq!(acc.add(&one).get(0), i32::MIN as i128);
    }

    #[test]
    fn mac_matches_products() {
        let a: Vector<i16, 8> = Vector::from_fn(|i| i as i16 * 1000);
        let b: Vector<i8, 8> = Vector::from_fn(|i| -(i as i8));
        let acc: Accum<Acc32, 8> = Accum::<Acc32, 8>::zeros().mac(&a, &b).msc(&a, &b).mac(&a, &b);
        (0..8).for_each(|i| assert_eq!(acc.get(i), -(i as i128 * i as i128 * 1000)));

        let c: Vector<CInt16, 2> = Vector::from_array([CInt16::new(1, 2), CInt16::new(-3, 4)]);
        let d: Vector<CInt16, 2> = Vector::from_array([CInt16::new(5, 6), CInt16::new(7, -8)]);
        let cacc: Accum<CAcc48, 2> = Accum::mul(&c, &d);
        assert_eq!(cacc.get(0), CAccLane::new(-7, 16));
        let out: Vector<CInt16, 2> = cacc.to_vector(0);
        assert_eq!(out.get(1), CInt16::new(11, 52));
    }

    #[test]
    fn upshift_then_downshift_is_identity() {
        let v: Vector<i32, 16> = Vector::from_fn(|i| (i as i32 - 8) * 77777);
        let acc: Accum<Acc64, 16> = Accum::from_vector(&v, 12);
        assert_eq!(acc.to_vector::<i32>(12), v);
        let halves: Accum<Acc64, 8> = acc.extract(1);
        let joined: Accum<Acc64, 16> = Accum::concat(&[acc.extract::<8>(0), halves]);
        assert_eq!(joined, acc);
    }
}
