use std::{
    fmt::{Display, Formatter},
    ops::{BitAnd, BitOr, Not, Shl, Shr},
};

use crate::error::{EngineError, Result};

/// Widest mask, in lanes.
pub const MAX_MASK_LANES: usize = 512;

const MASK_WORDS: usize = MAX_MASK_LANES / 32;

/// One bit per lane: bit `i` of word `i / 32` is lane `i`.
///
/// Bits beyond `N` are always clear, so two masks compare equal exactly
/// when their lanes do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Mask<const N: usize> {
    words: [u32; MASK_WORDS],
}

impl<const N: usize> Mask<N> {
    pub const SIZE: usize = N;

    /// Number of 32-bit words holding the lanes.
    pub const WORDS: usize = N.div_ceil(32);

    const SHAPE_OK: () = assert!(
        N.is_power_of_two() && N <= MAX_MASK_LANES,
        "mask lane count must be a power of two no larger than 512"
    );

    fn last_word_mask() -> u32 {
        if N % 32 == 0 { u32::MAX } else { (1u32 << (N % 32)) - 1 }
    }

    fn from_words(mut words: [u32; MASK_WORDS]) -> Self {
        let () = Self::SHAPE_OK;
        words[Self::WORDS - 1] &= Self::last_word_mask();
        words[Self::WORDS..].iter_mut().for_each(|w| *w = 0);
        Self { words }
    }

    pub fn new(initial: bool) -> Self {
        Self::from_words([if initial { u32::MAX } else { 0 }; MASK_WORDS])
    }

    /// Builds a mask from its raw 32-bit words. Bits beyond `N` are dropped.
    pub fn from_uint32(src: &[u32]) -> Self {
        assert_eq!(src.len(), Self::WORDS, "from_uint32: {} != {}", src.len(), Self::WORDS);
        let mut words: [u32; MASK_WORDS] = [0; MASK_WORDS];
        words[..Self::WORDS].copy_from_slice(src);
        Self::from_words(words)
    }

    pub fn try_from_uint32(src: &[u32]) -> Result<Self> {
        if src.len() != Self::WORDS {
            return Err(EngineError::MaskWordCount {
                lanes: N,
                word_bits: 32,
                expected: Self::WORDS,
                got: src.len(),
            });
        }
        Ok(Self::from_uint32(src))
    }

    /// Builds a mask from its raw 64-bit words. `N` must be a multiple of 64.
    pub fn from_uint64(src: &[u64]) -> Self {
        const { assert!(N % 64 == 0, "from_uint64: N must be a multiple of 64") };
        assert_eq!(src.len(), N / 64, "from_uint64: {} != {}", src.len(), N / 64);
        let mut words: [u32; MASK_WORDS] = [0; MASK_WORDS];
        src.iter().enumerate().for_each(|(i, w)| {
            words[2 * i] = *w as u32;
            words[2 * i + 1] = (*w >> 32) as u32;
        });
        Self::from_words(words)
    }

    pub fn try_from_uint64(src: &[u64]) -> Result<Self> {
        if N % 64 != 0 {
            return Err(EngineError::MaskNotWordAligned(N));
        }
        if src.len() != N / 64 {
            return Err(EngineError::MaskWordCount {
                lanes: N,
                word_bits: 64,
                expected: N / 64,
                got: src.len(),
            });
        }
        let mut words: [u32; MASK_WORDS] = [0; MASK_WORDS];
        src.iter().enumerate().for_each(|(i, w)| {
            words[2 * i] = *w as u32;
            words[2 * i + 1] = (*w >> 32) as u32;
        });
        Ok(Self::from_words(words))
    }

    /// Concatenates `K` masks of `M` lanes, the first one in the low lanes.
    pub fn from_masks<const M: usize, const K: usize>(parts: &[Mask<M>; K]) -> Self {
        const { assert!(M * K == N, "from_masks: M * K must equal N") };
        let mut out: Self = Self::new(false);
        parts.iter().enumerate().for_each(|(i, m)| out.insert(i, m));
        out
    }

    pub fn test(&self, i: usize) -> bool {
        debug_assert!(i < N, "test: lane {i} >= {N}");
        (self.words[i / 32] >> (i % 32)) & 1 == 1
    }

    pub fn set(&mut self, i: usize) {
        debug_assert!(i < N, "set: lane {i} >= {N}");
        self.words[i / 32] |= 1 << (i % 32);
    }

    pub fn clear(&mut self, i: usize) {
        debug_assert!(i < N, "clear: lane {i} >= {N}");
        self.words[i / 32] &= !(1 << (i % 32));
    }

    pub fn set_value(&mut self, i: usize, value: bool) {
        if value { self.set(i) } else { self.clear(i) }
    }

    /// Number of set lanes.
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Number of clear lanes above the highest set lane.
    pub fn clz(&self) -> u32 {
        (0..N).rev().position(|i| self.test(i)).unwrap_or(N) as u32
    }

    pub fn empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    pub fn full(&self) -> bool {
        self.count() as usize == N
    }

    pub fn to_uint32(&self, i: usize) -> u32 {
        assert!(i < Self::WORDS, "to_uint32: word {i} >= {}", Self::WORDS);
        self.words[i]
    }

    pub fn to_uint64(&self, i: usize) -> u64 {
        const { assert!(N % 64 == 0, "to_uint64: N must be a multiple of 64") };
        assert!(i < N / 64, "to_uint64: word {i} >= {}", N / 64);
        self.words[2 * i] as u64 | ((self.words[2 * i + 1] as u64) << 32)
    }

    /// Returns lanes `[idx * M, (idx + 1) * M)`.
    pub fn extract<const M: usize>(&self, idx: usize) -> Mask<M> {
        const { assert!(M <= N && N % M == 0, "extract: M must divide N") };
        let mut out: Mask<M> = Mask::new(false);
        (0..M).filter(|i| self.test(idx * M + i)).for_each(|i| out.set(i));
        out
    }

    /// Overwrites lanes `[idx * M, (idx + 1) * M)`.
    pub fn insert<const M: usize>(&mut self, idx: usize, sub: &Mask<M>) {
        const { assert!(M <= N && N % M == 0, "insert: M must divide N") };
        (0..M).for_each(|i| self.set_value(idx * M + i, sub.test(i)));
    }

    /// Writes the low `count` bits of `bits` to lanes `[offset, offset + count)`.
    pub(crate) fn insert_bits(&mut self, offset: usize, bits: u64, count: usize) {
        debug_assert!(count <= 64 && offset + count <= N);
        (0..count).for_each(|i| self.set_value(offset + i, (bits >> i) & 1 == 1));
    }

    /// Reads lanes `[offset, offset + count)` as the low bits of a word.
    pub(crate) fn bits_at(&self, offset: usize, count: usize) -> u64 {
        debug_assert!(count <= 64 && offset + count <= N);
        (0..count).fold(0u64, |acc, i| acc | ((self.test(offset + i) as u64) << i))
    }
}

impl<const N: usize> Default for Mask<N> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<const N: usize> BitAnd for Mask<N> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_words(std::array::from_fn(|i| self.words[i] & rhs.words[i]))
    }
}

impl<const N: usize> BitOr for Mask<N> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_words(std::array::from_fn(|i| self.words[i] | rhs.words[i]))
    }
}

impl<const N: usize> Not for Mask<N> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_words(std::array::from_fn(|i| !self.words[i]))
    }
}

/// Moves lane `i` to lane `i + k`; lanes shifted past `N` are lost.
impl<const N: usize> Shl<usize> for Mask<N> {
    type Output = Self;

    fn shl(self, k: usize) -> Self {
        if k >= N {
            return Self::new(false);
        }
        let (ws, bs) = (k / 32, k % 32);
        let mut out: [u32; MASK_WORDS] = [0; MASK_WORDS];
        for i in ws..Self::WORDS {
            let mut w: u32 = self.words[i - ws] << bs;
            if bs > 0 && i > ws {
                w |= self.words[i - ws - 1] >> (32 - bs);
            }
            out[i] = w;
        }
        Self::from_words(out)
    }
}

/// Moves lane `i` to lane `i - k`; the top `k` lanes become clear.
impl<const N: usize> Shr<usize> for Mask<N> {
    type Output = Self;

    fn shr(self, k: usize) -> Self {
        if k >= N {
            return Self::new(false);
        }
        let (ws, bs) = (k / 32, k % 32);
        let mut out: [u32; MASK_WORDS] = [0; MASK_WORDS];
        for i in 0..Self::WORDS - ws {
            let mut w: u32 = self.words[i + ws] >> bs;
            if bs > 0 && i + ws + 1 < Self::WORDS {
                w |= self.words[i + ws + 1] << (32 - bs);
            }
            out[i] = w;
        }
        Self::from_words(out)
    }
}

impl<const N: usize> Display for Mask<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "mask<{N}>: ")?;
        (0..N).try_for_each(|i| write!(f, "{}", if self.test(i) { '1' } else { '0' }))
    }
}

#[cfg(test)]
mod tests {
    use rand_core::RngCore;

    use super::*;
    use crate::source::Source;

    #[test]
    fn raw_words_round_trip() {
        let mut source: Source = Source::new([0u8; 32]);
        for _ in 0..16 {
            let w: u32 = source.next_u32();
            let m: Mask<16> = Mask::from_uint32(&[w]);
            assert_eq!(m.to_uint32(0), w & 0xFFFF);

            let ws: [u32; 4] = std::array::from_fn(|_| source.next_u32());
            let m: Mask<128> = Mask::from_uint32(&ws);
            (0..4).for_each(|i| assert_eq!(m.to_uint32(i), ws[i]));

            let ds: [u64; 2] = [source.next_u64(), source.next_u64()];
            let m: Mask<128> = Mask::from_uint64(&ds);
            assert_eq!(m.to_uint64(0), ds[0]);
            assert_eq!(m.to_uint64(1), ds[1]);
            assert_eq!(m.to_uint32(1), (ds[0] >> 32) as u32);
        }
    }

    #[test]
    fn checked_constructors() {
        assert!(Mask::<64>::try_from_uint32(&[1, 2]).is_ok());
        assert_eq!(
            Mask::<64>::try_from_uint32(&[1]),
            Err(EngineError::MaskWordCount {
                lanes: 64,
                word_bits: 32,
                expected: 2,
                got: 1
            })
        );
        assert_eq!(Mask::<32>::try_from_uint64(&[1]), Err(EngineError::MaskNotWordAligned(32)));
    }

    #[test]
    fn shifts_clear_shifted_out_lanes() {
        let mut source: Source = Source::new([1u8; 32]);
        let words: [u32; 2] = [source.next_u32(), source.next_u32()];
        let m: Mask<64> = Mask::from_uint32(&words);
        for k in 0..=64 {
            let back: Mask<64> = (m << k) >> k;
            for i in 0..64 {
                let expected: bool = i + k < 64 && m.test(i);
                assert_eq!(back.test(i), expected, "k={k} i={i}");
            }
        }
        assert_eq!(m << 64, Mask::new(false));
        assert_eq!(m >> 100, Mask::new(false));

        let small: Mask<8> = Mask::from_uint32(&[0b1000_0001]);
        assert_eq!((small << 1).to_uint32(0), 0b0000_0010);
        assert_eq!((small >> 7).to_uint32(0), 1);
        assert_eq!((!small).to_uint32(0), 0b0111_1110);
    }

    #[test]
    fn counts_and_sub_masks() {
        let mut m: Mask<32> = Mask::new(false);
        assert!(m.empty());
        assert_eq!(m.clz(), 32);
        m.set(3);
        m.set(20);
        assert_eq!(m.count(), 2);
        assert_eq!(m.clz(), 11);
        let hi: Mask<16> = m.extract(1);
        assert!(hi.test(4));
        let joined: Mask<32> = Mask::from_masks(&[m.extract::<16>(0), hi]);
        assert_eq!(joined, m);
        assert!(Mask::<256>::new(true).full());
        assert_eq!(Mask::<4>::new(true).to_uint32(0), 0xF);
        assert_eq!(Mask::<4>::new(true).to_string(), "mask<4>: 1111");
    }
}
