use crate::layouts::{Accum, AccumTag, Bf16, CFloat, Element, Vector};

/// Lane-wise square root, optionally widening bfloat16 lanes to `f32`.
pub trait VecSqrt<T: Element, TR: Element = T> {
    fn sqrt<const N: usize>(&self, a: &Vector<T, N>) -> Vector<TR, N>;

    fn sqrt_scalar(&self, a: T) -> TR {
        self.sqrt(&Vector::<T, 1>::broadcast(a)).get(0)
    }
}

pub trait VecInv<T: Element> {
    /// Lane-wise `1 / a`.
    fn inv<const N: usize>(&self, a: &Vector<T, N>) -> Vector<T, N>;

    fn inv_scalar(&self, a: T) -> T {
        self.inv(&Vector::<T, 1>::broadcast(a)).get(0)
    }
}

pub trait VecInvSqrt<T: Element> {
    /// Lane-wise `1 / sqrt(a)`.
    fn invsqrt<const N: usize>(&self, a: &Vector<T, N>) -> Vector<T, N>;

    fn invsqrt_scalar(&self, a: T) -> T {
        self.invsqrt(&Vector::<T, 1>::broadcast(a)).get(0)
    }
}

/// Sine and cosine through the native fixed-point phase unit.
pub trait VecSinCos {
    /// `CFloat(cos(a), sin(a))` for every lane.
    fn sincos_complex<const N: usize>(&self, a: &Vector<f32, N>) -> Vector<CFloat, N>;

    /// `(sin(a), cos(a))`.
    fn sincos<const N: usize>(&self, a: &Vector<f32, N>) -> (Vector<f32, N>, Vector<f32, N>) {
        let c: Vector<CFloat, N> = self.sincos_complex(a);
        (Vector::from_fn(|i| c.get(i).im), Vector::from_fn(|i| c.get(i).re))
    }

    fn sin<const N: usize>(&self, a: &Vector<f32, N>) -> Vector<f32, N> {
        self.sincos(a).0
    }

    fn cos<const N: usize>(&self, a: &Vector<f32, N>) -> Vector<f32, N> {
        self.sincos(a).1
    }

    fn sincos_scalar(&self, a: f32) -> (f32, f32) {
        let c: CFloat = self.sincos_complex(&Vector::<f32, 1>::broadcast(a)).get(0);
        (c.im, c.re)
    }

    fn sin_scalar(&self, a: f32) -> f32 {
        self.sincos_scalar(a).0
    }

    fn cos_scalar(&self, a: f32) -> f32 {
        self.sincos_scalar(a).1
    }
}

pub trait VecFix2Float<T: Element, TR: Element = f32> {
    /// Lane-wise `a * 2^-shift` as `f32` or bfloat16.
    fn fix2float<const N: usize>(&self, a: &Vector<T, N>, shift: i32) -> Vector<TR, N>;

    fn fix2float_scalar(&self, a: T, shift: i32) -> TR {
        self.fix2float(&Vector::<T, 1>::broadcast(a), shift).get(0)
    }
}

pub trait VecFix2FloatAcc<A: AccumTag> {
    /// Lane-wise `a * 2^-shift` as `f32`.
    fn fix2float_acc<const N: usize>(&self, a: &Accum<A, N>, shift: i32) -> Vector<f32, N>;
}

pub trait VecFloat2Fix<TR: Element, T: Element = f32> {
    /// Lane-wise `a * 2^shift` rounded and saturated into `TR`.
    fn float2fix<const N: usize>(&self, a: &Vector<T, N>, shift: i32) -> Vector<TR, N>;

    fn float2fix_scalar(&self, a: T, shift: i32) -> TR {
        self.float2fix(&Vector::<T, 1>::broadcast(a), shift).get(0)
    }
}

pub trait VecTanh {
    fn tanh<const N: usize>(&self, a: &Vector<f32, N>) -> Vector<Bf16, N>;

    fn tanh_scalar(&self, a: f32) -> Bf16 {
        self.tanh(&Vector::<f32, 1>::broadcast(a)).get(0)
    }
}

pub trait VecExp2 {
    /// Lane-wise `2^a`.
    fn exp2<const N: usize>(&self, a: &Vector<f32, N>) -> Vector<Bf16, N>;

    fn exp2_scalar(&self, a: f32) -> Bf16 {
        self.exp2(&Vector::<f32, 1>::broadcast(a)).get(0)
    }
}
