use std::fmt::{Debug, Display, Formatter};

use bytemuck::{Pod, Zeroable};

use crate::layouts::{SaturationMode, saturation};

/// Broad classification of a lane type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElemKind {
    Int,
    UInt,
    Float,
    BFloat,
    CInt,
    CFloat,
    CBFloat,
}

/// A scalar lane type that can be held by a [crate::layouts::Vector].
///
/// `Compute` is the type the lane is widened to before it reaches the
/// native vector unit. It is `Self` for every type except the 4-bit
/// integers, which are processed as 8-bit lanes.
pub trait Element: Copy + Default + PartialEq + Debug + Display + Pod + Send + Sync + 'static {
    const BITS: usize;
    const KIND: ElemKind;
    const NAME: &'static str;
    const SUBBYTE: bool = false;
    type Compute: Element;
}

/// Two's complement (or unsigned) integer lanes, including the 4-bit types.
pub trait Integral: Element + Ordered + Additive {
    const SIGNED: bool;
    const LANE_MIN: i128;
    const LANE_MAX: i128;

    fn to_i128(self) -> i128;

    /// Wraps `v` into the lane width.
    fn from_i128(v: i128) -> Self;

    /// Narrows `v` into the lane with the given saturation policy.
    fn narrow(v: i128, sat: SaturationMode) -> Self {
        match sat {
            SaturationMode::None => Self::from_i128(v),
            SaturationMode::Saturate => Self::from_i128(v.clamp(Self::LANE_MIN, Self::LANE_MAX)),
            SaturationMode::Symmetric => {
                let lo: i128 = if Self::SIGNED { -Self::LANE_MAX } else { 0 };
                Self::from_i128(v.clamp(lo, Self::LANE_MAX))
            }
        }
    }
}

/// Lanes with a total order used by compare, max/min and their reductions.
pub trait Ordered: Element {
    fn lane_lt(self, other: Self) -> bool;

    fn lane_max(self, other: Self) -> Self {
        if self.lane_lt(other) { other } else { self }
    }

    fn lane_min(self, other: Self) -> Self {
        if other.lane_lt(self) { other } else { self }
    }
}

/// Lanes supporting element-wise add, sub and neg. Integer lanes wrap.
pub trait Additive: Element {
    fn lane_add(self, other: Self) -> Self;
    fn lane_sub(self, other: Self) -> Self;
    fn lane_neg(self) -> Self;
}

/// Complex lanes consumed and produced by the FFT stages and complex mmul.
pub trait Complex: Element {
    const FLOAT: bool;

    fn re_im_fixed(self) -> (i128, i128);
    fn re_im_f32(self) -> (f32, f32);
    fn from_f32(re: f32, im: f32) -> Self;

    /// Narrows a fixed point pair with the given saturation policy.
    fn narrow_fixed(re: i128, im: i128, sat: SaturationMode) -> Self;
}

macro_rules! impl_int_element {
    ($($t:ty => $kind:expr, $name:literal, $signed:literal);+ $(;)?) => {
        $(
            impl Element for $t {
                const BITS: usize = <$t>::BITS as usize;
                const KIND: ElemKind = $kind;
                const NAME: &'static str = $name;
                type Compute = $t;
            }

            impl Integral for $t {
                const SIGNED: bool = $signed;
                const LANE_MIN: i128 = <$t>::MIN as i128;
                const LANE_MAX: i128 = <$t>::MAX as i128;

                #[inline(always)]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline(always)]
                fn from_i128(v: i128) -> Self {
                    v as $t
                }
            }

            impl Ordered for $t {
                #[inline(always)]
                fn lane_lt(self, other: Self) -> bool {
                    self < other
                }
            }

            impl Additive for $t {
                #[inline(always)]
                fn lane_add(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }

                #[inline(always)]
                fn lane_sub(self, other: Self) -> Self {
                    self.wrapping_sub(other)
                }

                #[inline(always)]
                fn lane_neg(self) -> Self {
                    self.wrapping_neg()
                }
            }
        )+
    };
}

impl_int_element!(
    i8 => ElemKind::Int, "int8", true;
    u8 => ElemKind::UInt, "uint8", false;
    i16 => ElemKind::Int, "int16", true;
    u16 => ElemKind::UInt, "uint16", false;
    i32 => ElemKind::Int, "int32", true;
    u32 => ElemKind::UInt, "uint32", false;
);

/// Signed 4-bit lane. Only the low nibble of the cell is significant.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Pod, Zeroable)]
pub struct I4(u8);

/// Unsigned 4-bit lane. Only the low nibble of the cell is significant.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Pod, Zeroable)]
pub struct U4(u8);

impl I4 {
    pub const fn new(v: i8) -> Self {
        Self((v as u8) & 0xF)
    }

    pub const fn get(self) -> i8 {
        ((self.0 << 4) as i8) >> 4
    }
}

impl U4 {
    pub const fn new(v: u8) -> Self {
        Self(v & 0xF)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

macro_rules! impl_nibble_element {
    ($t:ty, $compute:ty, $kind:expr, $name:literal, $signed:literal, $min:literal, $max:literal) => {
        impl Element for $t {
            const BITS: usize = 4;
            const KIND: ElemKind = $kind;
            const NAME: &'static str = $name;
            const SUBBYTE: bool = true;
            type Compute = $compute;
        }

        impl Integral for $t {
            const SIGNED: bool = $signed;
            const LANE_MIN: i128 = $min;
            const LANE_MAX: i128 = $max;

            #[inline(always)]
            fn to_i128(self) -> i128 {
                self.get() as i128
            }

            #[inline(always)]
            fn from_i128(v: i128) -> Self {
                Self((v as u8) & 0xF)
            }
        }

        impl Ordered for $t {
            fn lane_lt(self, other: Self) -> bool {
                self.get() < other.get()
            }
        }

        impl Additive for $t {
            fn lane_add(self, other: Self) -> Self {
                Self::from_i128(self.to_i128() + other.to_i128())
            }

            fn lane_sub(self, other: Self) -> Self {
                Self::from_i128(self.to_i128() - other.to_i128())
            }

            fn lane_neg(self) -> Self {
                Self::from_i128(-self.to_i128())
            }
        }

        impl Display for $t {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.get())
            }
        }
    };
}

impl_nibble_element!(I4, i8, ElemKind::Int, "int4", true, -8, 7);
impl_nibble_element!(U4, u8, ElemKind::UInt, "uint4", false, 0, 15);

impl Element for f32 {
    const BITS: usize = 32;
    const KIND: ElemKind = ElemKind::Float;
    const NAME: &'static str = "float";
    type Compute = f32;
}

impl Ordered for f32 {
    #[inline(always)]
    fn lane_lt(self, other: Self) -> bool {
        self < other
    }
}

impl Additive for f32 {
    fn lane_add(self, other: Self) -> Self {
        self + other
    }

    fn lane_sub(self, other: Self) -> Self {
        self - other
    }

    fn lane_neg(self) -> Self {
        -self
    }
}

/// Brain floating point: the upper 16 bits of an IEEE `f32`.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Pod, Zeroable)]
pub struct Bf16(pub u16);

impl Bf16 {
    pub const ONE: Bf16 = Bf16(0x3F80);

    /// Rounds to nearest, ties to even.
    pub fn from_f32(x: f32) -> Self {
        let bits: u32 = x.to_bits();
        if x.is_nan() {
            return Bf16(((bits >> 16) as u16) | 0x0040);
        }
        let round: u32 = 0x7FFF + ((bits >> 16) & 1);
        Bf16((bits.wrapping_add(round) >> 16) as u16)
    }

    pub fn to_f32(self) -> f32 {
        f32::from_bits((self.0 as u32) << 16)
    }

    pub fn to_bits(self) -> u16 {
        self.0
    }

    pub fn from_bits(bits: u16) -> Self {
        Bf16(bits)
    }
}

impl Element for Bf16 {
    const BITS: usize = 16;
    const KIND: ElemKind = ElemKind::BFloat;
    const NAME: &'static str = "bfloat16";
    type Compute = Bf16;
}

impl Ordered for Bf16 {
    fn lane_lt(self, other: Self) -> bool {
        self.to_f32() < other.to_f32()
    }
}

impl Additive for Bf16 {
    fn lane_add(self, other: Self) -> Self {
        Bf16::from_f32(self.to_f32() + other.to_f32())
    }

    fn lane_sub(self, other: Self) -> Self {
        Bf16::from_f32(self.to_f32() - other.to_f32())
    }

    fn lane_neg(self) -> Self {
        Bf16(self.0 ^ 0x8000)
    }
}

impl Display for Bf16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

/// Complex lane with 16-bit signed components.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Pod, Zeroable)]
pub struct CInt16 {
    pub re: i16,
    pub im: i16,
}

/// Complex lane with 32-bit signed components.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Pod, Zeroable)]
pub struct CInt32 {
    pub re: i32,
    pub im: i32,
}

/// Complex lane with `f32` components.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Debug, Pod, Zeroable)]
pub struct CFloat {
    pub re: f32,
    pub im: f32,
}

/// Complex lane with [Bf16] components.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Pod, Zeroable)]
pub struct CBf16 {
    pub re: Bf16,
    pub im: Bf16,
}

macro_rules! impl_cint {
    ($t:ident, $c:ty, $bits:literal, $name:literal) => {
        impl $t {
            pub const fn new(re: $c, im: $c) -> Self {
                Self { re, im }
            }
        }

        impl Element for $t {
            const BITS: usize = $bits;
            const KIND: ElemKind = ElemKind::CInt;
            const NAME: &'static str = $name;
            type Compute = $t;
        }

        impl Additive for $t {
            fn lane_add(self, other: Self) -> Self {
                Self::new(self.re.wrapping_add(other.re), self.im.wrapping_add(other.im))
            }

            fn lane_sub(self, other: Self) -> Self {
                Self::new(self.re.wrapping_sub(other.re), self.im.wrapping_sub(other.im))
            }

            fn lane_neg(self) -> Self {
                Self::new(self.re.wrapping_neg(), self.im.wrapping_neg())
            }
        }

        impl Complex for $t {
            const FLOAT: bool = false;

            fn re_im_fixed(self) -> (i128, i128) {
                (self.re as i128, self.im as i128)
            }

            fn re_im_f32(self) -> (f32, f32) {
                (self.re as f32, self.im as f32)
            }

            fn from_f32(re: f32, im: f32) -> Self {
                Self::new(re.round() as $c, im.round() as $c)
            }

            fn narrow_fixed(re: i128, im: i128, sat: SaturationMode) -> Self {
                Self::new(<$c>::narrow(re, sat), <$c>::narrow(im, sat))
            }
        }

        impl Display for $t {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "({}, {})", self.re, self.im)
            }
        }
    };
}

impl_cint!(CInt16, i16, 32, "cint16");
impl_cint!(CInt32, i32, 64, "cint32");

impl CFloat {
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

impl CBf16 {
    pub fn new(re: f32, im: f32) -> Self {
        Self {
            re: Bf16::from_f32(re),
            im: Bf16::from_f32(im),
        }
    }
}

impl Element for CFloat {
    const BITS: usize = 64;
    const KIND: ElemKind = ElemKind::CFloat;
    const NAME: &'static str = "cfloat";
    type Compute = CFloat;
}

impl Element for CBf16 {
    const BITS: usize = 32;
    const KIND: ElemKind = ElemKind::CBFloat;
    const NAME: &'static str = "cbfloat16";
    type Compute = CBf16;
}

impl Additive for CFloat {
    fn lane_add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }

    fn lane_sub(self, other: Self) -> Self {
        Self::new(self.re - other.re, self.im - other.im)
    }

    fn lane_neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl Additive for CBf16 {
    fn lane_add(self, other: Self) -> Self {
        Self {
            re: self.re.lane_add(other.re),
            im: self.im.lane_add(other.im),
        }
    }

    fn lane_sub(self, other: Self) -> Self {
        Self {
            re: self.re.lane_sub(other.re),
            im: self.im.lane_sub(other.im),
        }
    }

    fn lane_neg(self) -> Self {
        Self {
            re: self.re.lane_neg(),
            im: self.im.lane_neg(),
        }
    }
}

impl Complex for CFloat {
    const FLOAT: bool = true;

    fn re_im_fixed(self) -> (i128, i128) {
        (self.re.round() as i128, self.im.round() as i128)
    }

    fn re_im_f32(self) -> (f32, f32) {
        (self.re, self.im)
    }

    fn from_f32(re: f32, im: f32) -> Self {
        Self::new(re, im)
    }

    fn narrow_fixed(re: i128, im: i128, _sat: SaturationMode) -> Self {
        Self::new(re as f32, im as f32)
    }
}

impl Complex for CBf16 {
    const FLOAT: bool = true;

    fn re_im_fixed(self) -> (i128, i128) {
        (self.re.to_f32().round() as i128, self.im.to_f32().round() as i128)
    }

    fn re_im_f32(self) -> (f32, f32) {
        (self.re.to_f32(), self.im.to_f32())
    }

    fn from_f32(re: f32, im: f32) -> Self {
        Self::new(re, im)
    }

    fn narrow_fixed(re: i128, im: i128, _sat: SaturationMode) -> Self {
        Self::new(re as f32, im as f32)
    }
}

impl Display for CFloat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}

impl Display for CBf16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}

/// Integer and complex-integer lanes as a complex `i128` pair, used by the
/// exact multiply paths.
pub trait FixedParts: Element {
    fn parts(self) -> (i128, i128);
}

macro_rules! impl_fixed_parts_real {
    ($($t:ty),+) => {
        $(
            impl FixedParts for $t {
                #[inline(always)]
                fn parts(self) -> (i128, i128) {
                    (self.to_i128(), 0)
                }
            }
        )+
    };
}

impl_fixed_parts_real!(i8, u8, i16, u16, i32, u32, I4, U4);

impl FixedParts for CInt16 {
    fn parts(self) -> (i128, i128) {
        self.re_im_fixed()
    }
}

impl FixedParts for CInt32 {
    fn parts(self) -> (i128, i128) {
        self.re_im_fixed()
    }
}

/// Narrows with the saturation mode currently in effect.
pub fn narrow_current<T: Integral>(v: i128) -> T {
    T::narrow(v, saturation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bf16_rounds_to_nearest_even() {
        // 1 + 2^-8 lies exactly between two bf16 values; ties go to the even mantissa.
        assert_eq!(Bf16::from_f32(1.0 + 1.0 / 256.0), Bf16::ONE);
        assert_eq!(Bf16::from_f32(1.0 + 3.0 / 256.0).to_f32(), 1.0 + 4.0 / 256.0);
        assert_eq!(Bf16::from_f32(-2.5).to_f32(), -2.5);
    }

    #[test]
    fn nibble_lanes_sign_extend() {
        assert_eq!(I4::new(-8).get(), -8);
        assert_eq!(I4::new(7).get(), 7);
        assert_eq!(I4::from_i128(9).get(), -7);
        assert_eq!(U4::from_i128(17).get(), 1);
        assert_eq!(I4::narrow(100, SaturationMode::Saturate).get(), 7);
        assert_eq!(I4::narrow(-100, SaturationMode::Symmetric).get(), -7);
    }

    #[test]
    fn integral_narrow_policies() {
        assert_eq!(i16::narrow(40000, SaturationMode::Saturate), i16::MAX);
        assert_eq!(i16::narrow(-40000, SaturationMode::Saturate), i16::MIN);
        assert_eq!(i16::narrow(-40000, SaturationMode::Symmetric), -i16::MAX);
        assert_eq!(i16::narrow(40000, SaturationMode::None), 40000i32 as i16);
        assert_eq!(u8::narrow(-3, SaturationMode::Saturate), 0);
    }
}
