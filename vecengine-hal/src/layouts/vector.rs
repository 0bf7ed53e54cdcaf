use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
};

use crate::layouts::{Element, I4, Integral, U4, saturation};

/// Widest logical vector, in bits.
pub const MAX_VECTOR_BITS: usize = 2048;

/// A fixed-size SIMD value of `N` lanes of type `T`.
///
/// `N` must be a power of two and `N * T::BITS` must not exceed
/// [MAX_VECTOR_BITS]. Both conditions are checked when the vector is
/// instantiated, so an invalid shape fails to compile.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

impl<T: Element, const N: usize> Vector<T, N> {
    pub const SIZE: usize = N;
    pub const BITS: usize = N * T::BITS;

    const SHAPE_OK: () = assert!(
        N.is_power_of_two() && N * T::BITS <= MAX_VECTOR_BITS,
        "vector lane count must be a power of two and fit in 2048 bits"
    );

    pub fn from_array(data: [T; N]) -> Self {
        let () = Self::SHAPE_OK;
        Self(data)
    }

    pub fn from_slice(src: &[T]) -> Self {
        assert_eq!(src.len(), N, "from_slice: {} != {N}", src.len());
        let mut data: [T; N] = [T::default(); N];
        data.copy_from_slice(src);
        Self::from_array(data)
    }

    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::from_array(std::array::from_fn(f))
    }

    pub fn zeros() -> Self {
        Self::from_array([T::default(); N])
    }

    pub fn broadcast(value: T) -> Self {
        Self::from_array([value; N])
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    pub fn into_array(self) -> [T; N] {
        self.0
    }

    pub fn get(&self, i: usize) -> T {
        self.0[i]
    }

    pub fn set(&mut self, i: usize, value: T) {
        self.0[i] = value;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns the `idx`-th sub-vector of `M` lanes.
    pub fn extract<const M: usize>(&self, idx: usize) -> Vector<T, M> {
        const { assert!(M <= N && N % M == 0, "extract: M must divide N") };
        debug_assert!(idx < N / M, "extract: idx={idx} >= {}", N / M);
        Vector::from_slice(&self.0[idx * M..(idx + 1) * M])
    }

    /// Overwrites the `idx`-th sub-vector of `M` lanes.
    pub fn insert<const M: usize>(&mut self, idx: usize, sub: &Vector<T, M>) {
        const { assert!(M <= N && N % M == 0, "insert: M must divide N") };
        debug_assert!(idx < N / M, "insert: idx={idx} >= {}", N / M);
        self.0[idx * M..(idx + 1) * M].copy_from_slice(&sub.0);
    }

    /// Zero-extends to `M` lanes.
    pub fn grow<const M: usize>(&self) -> Vector<T, M> {
        const { assert!(M >= N && M % N == 0, "grow: N must divide M") };
        let mut out: Vector<T, M> = Vector::zeros();
        out.0[..N].copy_from_slice(&self.0);
        out
    }

    /// Extends to `M` lanes by repeating the vector.
    pub fn grow_replicate<const M: usize>(&self) -> Vector<T, M> {
        const { assert!(M >= N && M % N == 0, "grow_replicate: N must divide M") };
        Vector::from_fn(|i| self.0[i % N])
    }

    /// Concatenates `K` vectors into one of `M = N * K` lanes.
    pub fn concat<const K: usize, const M: usize>(parts: &[Vector<T, N>; K]) -> Vector<T, M> {
        const { assert!(M == N * K, "concat: M must equal N * K") };
        let mut out: Vector<T, M> = Vector::zeros();
        out.0
            .chunks_exact_mut(N)
            .zip(parts.iter())
            .for_each(|(dst, src)| dst.copy_from_slice(&src.0));
        out
    }

    /// Splits into `K` vectors of `M` lanes.
    pub fn split<const M: usize, const K: usize>(&self) -> [Vector<T, M>; K] {
        const { assert!(M * K == N, "split: M * K must equal N") };
        std::array::from_fn(|i| self.extract::<M>(i))
    }

    /// Reinterprets the bits of the vector as `M` lanes of `U`.
    pub fn cast_to<U: Element, const M: usize>(&self) -> Vector<U, M> {
        const {
            assert!(
                !T::SUBBYTE && !U::SUBBYTE && N * T::BITS == M * U::BITS,
                "cast_to: source and destination must have the same width"
            )
        };
        let mut out: Vector<U, M> = Vector::zeros();
        bytemuck::cast_slice_mut::<U, u8>(&mut out.0).copy_from_slice(bytemuck::cast_slice::<T, u8>(&self.0));
        out
    }
}

impl<const N: usize> Vector<I4, N> {
    /// Widens every nibble to an 8-bit lane.
    pub fn unpack(&self) -> Vector<i8, N> {
        Vector::from_fn(|i| self.0[i].get())
    }
}

impl<const N: usize> Vector<U4, N> {
    /// Widens every nibble to an 8-bit lane.
    pub fn unpack(&self) -> Vector<u8, N> {
        Vector::from_fn(|i| self.0[i].get())
    }
}

impl<const N: usize> Vector<i8, N> {
    /// Narrows every lane to a nibble with the current saturation mode.
    pub fn pack(&self) -> Vector<I4, N> {
        let sat = saturation();
        Vector::from_fn(|i| I4::narrow(self.0[i] as i128, sat))
    }
}

impl<const N: usize> Vector<u8, N> {
    /// Narrows every lane to a nibble with the current saturation mode.
    pub fn pack(&self) -> Vector<U4, N> {
        let sat = saturation();
        Vector::from_fn(|i| U4::narrow(self.0[i] as i128, sat))
    }
}

impl<T: Element, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: Element, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "vector<{}, {N}>: [", T::NAME)?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

/// An argument accepted where a vector is expected: either a vector of the
/// right shape or a scalar that is broadcast to every lane.
pub trait Operand<T: Element, const N: usize>: Copy {
    fn into_vector(self) -> Vector<T, N>;
}

impl<T: Element, const N: usize> Operand<T, N> for Vector<T, N> {
    #[inline(always)]
    fn into_vector(self) -> Vector<T, N> {
        self
    }
}

impl<T: Element, const N: usize> Operand<T, N> for T {
    #[inline(always)]
    fn into_vector(self) -> Vector<T, N> {
        Vector::broadcast(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_insert_concat() {
        let v: Vector<i16, 32> = Vector::from_fn(|i| i as i16);
        let hi: Vector<i16, 16> = v.extract(1);
        assert_eq!(hi.get(0), 16);
        let parts: [Vector<i16, 16>; 2] = v.split();
        let joined: Vector<i16, 32> = Vector::concat(&parts);
        assert_eq!(joined, v);
        let mut w: Vector<i16, 32> = Vector::zeros();
        w.insert(1, &hi);
        assert_eq!(w.get(15), 0);
        assert_eq!(w.get(31), 31);
    }

    #[test]
    fn grow_zero_extends_and_replicates() {
        let v: Vector<u8, 4> = Vector::from_array([1, 2, 3, 4]);
        let g: Vector<u8, 8> = v.grow();
        assert_eq!(g.as_slice(), &[1, 2, 3, 4, 0, 0, 0, 0]);
        let r: Vector<u8, 8> = v.grow_replicate();
        assert_eq!(r.as_slice(), &[1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    fn cast_reinterprets_bits() {
        let v: Vector<u16, 4> = Vector::from_array([0x0201, 0x0403, 0x0605, 0x0807]);
        let b: Vector<u8, 8> = v.cast_to();
        if cfg!(target_endian = "little") {
            assert_eq!(b.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        }
        let back: Vector<u16, 4> = b.cast_to();
        assert_eq!(back, v);
    }

    #[test]
    fn nibble_pack_unpack() {
        let v: Vector<I4, 16> = Vector::from_fn(|i| I4::new(i as i8 - 8));
        let wide: Vector<i8, 16> = v.unpack();
        assert_eq!(wide.get(0), -8);
        assert_eq!(wide.get(15), 7);
        assert_eq!(wide.pack(), v);
        let big: Vector<i8, 2> = Vector::from_array([100, -100]);
        assert_eq!(big.pack().unpack().as_slice(), &[7, -8]);
    }

    #[test]
    fn display_lists_lanes() {
        let v: Vector<i32, 2> = Vector::from_array([3, -1]);
        assert_eq!(v.to_string(), "vector<int32, 2>: [3, -1]");
    }
}
