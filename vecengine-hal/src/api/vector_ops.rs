use crate::layouts::{ArithOp, BitwiseOp, CmpOp, Element, EqOp, Mask, MaxMinOp, Operand, Vector};

pub trait VecBitwise<T: Element> {
    /// Lane-wise `a op b`.
    fn bitwise<const N: usize>(&self, op: BitwiseOp, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Vector<T, N>;

    /// Lane-wise complement.
    fn not<const N: usize>(&self, a: &Vector<T, N>) -> Vector<T, N>;

    fn and<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Vector<T, N> {
        self.bitwise(BitwiseOp::And, a, b)
    }

    fn or<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Vector<T, N> {
        self.bitwise(BitwiseOp::Or, a, b)
    }

    fn xor<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Vector<T, N> {
        self.bitwise(BitwiseOp::Xor, a, b)
    }
}

pub trait VecCompare<T: Element> {
    /// Mask of the lanes where `a op b` holds.
    fn cmp<const N: usize>(&self, op: CmpOp, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Mask<N>;

    fn lt<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Mask<N> {
        self.cmp(CmpOp::Lt, a, b)
    }

    fn le<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Mask<N> {
        self.cmp(CmpOp::Le, a, b)
    }

    fn gt<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Mask<N> {
        self.cmp(CmpOp::Gt, a, b)
    }

    fn ge<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Mask<N> {
        self.cmp(CmpOp::Ge, a, b)
    }
}

pub trait VecEq<T: Element> {
    /// Mask of the lanes where `a op b` holds.
    fn eq_mask<const N: usize>(&self, op: EqOp, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Mask<N>;

    fn eq<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Mask<N> {
        self.eq_mask(EqOp::Eq, a, b)
    }

    fn neq<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Mask<N> {
        self.eq_mask(EqOp::Neq, a, b)
    }

    /// Whether every lane of `a` equals the lane of `b`.
    fn equal<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> bool {
        self.eq_mask(EqOp::Neq, a, b).empty()
    }

    /// Whether at least one lane differs.
    fn not_equal<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> bool {
        !self.equal(a, b)
    }
}

pub trait VecMaxMin<T: Element> {
    fn max_min<const N: usize>(&self, op: MaxMinOp, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Vector<T, N>;

    /// Lane-wise max (resp. min) together with the mask of lanes where
    /// `a < b` (resp. `a >= b`).
    fn max_min_cmp<const N: usize>(
        &self,
        op: MaxMinOp,
        a: impl Operand<T, N>,
        b: impl Operand<T, N>,
    ) -> (Vector<T, N>, Mask<N>);

    fn max<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Vector<T, N> {
        self.max_min(MaxMinOp::Max, a, b)
    }

    fn min<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Vector<T, N> {
        self.max_min(MaxMinOp::Min, a, b)
    }

    fn max_cmp<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> (Vector<T, N>, Mask<N>) {
        self.max_min_cmp(MaxMinOp::Max, a, b)
    }

    fn min_cmp<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> (Vector<T, N>, Mask<N>) {
        self.max_min_cmp(MaxMinOp::Min, a, b)
    }
}

pub trait VecShift<T: Element> {
    /// Shifts every lane left by `up` into the accumulator, then right by
    /// `down` with the current rounding and saturation modes.
    fn shift<const N: usize>(&self, a: &Vector<T, N>, up: u32, down: u32) -> Vector<T, N>;

    fn upshift<const N: usize>(&self, a: &Vector<T, N>, shift: u32) -> Vector<T, N> {
        self.shift(a, shift, 0)
    }

    fn downshift<const N: usize>(&self, a: &Vector<T, N>, shift: u32) -> Vector<T, N> {
        self.shift(a, 0, shift)
    }
}

pub trait VecArith<T: Element> {
    /// Lane-wise `a op b`. Lanes of 8 bits and wider wrap; 4-bit lanes are
    /// computed on 8 bits and packed back under the current saturation mode.
    fn arith<const N: usize>(&self, op: ArithOp, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Vector<T, N>;

    fn neg<const N: usize>(&self, a: &Vector<T, N>) -> Vector<T, N>;

    fn add<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Vector<T, N> {
        self.arith(ArithOp::Add, a, b)
    }

    fn sub<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>) -> Vector<T, N> {
        self.arith(ArithOp::Sub, a, b)
    }
}

pub trait VecPermute<T: Element> {
    /// Lane `i` of the result is lane `N - 1 - i` of `a`.
    fn reverse<const N: usize>(&self, a: &Vector<T, N>) -> Vector<T, N>;

    fn broadcast<const N: usize>(&self, value: T) -> Vector<T, N>;

    /// Lane `i` is `b[i]` where `mask` is set and `a[i]` elsewhere.
    fn select<const N: usize>(&self, a: impl Operand<T, N>, b: impl Operand<T, N>, mask: &Mask<N>) -> Vector<T, N>;

    /// Interleaves chunks of `step` lanes of `a` and `b` and returns the two
    /// halves of the interleaved sequence. `step` must divide `N`.
    fn interleave_zip<const N: usize>(&self, a: &Vector<T, N>, b: &Vector<T, N>, step: usize) -> (Vector<T, N>, Vector<T, N>);

    /// Inverse of [VecPermute::interleave_zip].
    fn interleave_unzip<const N: usize>(
        &self,
        lo: &Vector<T, N>,
        hi: &Vector<T, N>,
        step: usize,
    ) -> (Vector<T, N>, Vector<T, N>);
}

pub trait VecReduce<T: Element> {
    fn reduce_max_min<const N: usize>(&self, op: MaxMinOp, a: &Vector<T, N>) -> T;

    fn reduce_max<const N: usize>(&self, a: &Vector<T, N>) -> T {
        self.reduce_max_min(MaxMinOp::Max, a)
    }

    fn reduce_min<const N: usize>(&self, a: &Vector<T, N>) -> T {
        self.reduce_max_min(MaxMinOp::Min, a)
    }
}

pub trait VecReduceAdd<T: Element> {
    /// Wrapping sum of all lanes.
    fn reduce_add<const N: usize>(&self, a: &Vector<T, N>) -> T;
}
