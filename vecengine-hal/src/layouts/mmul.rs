use std::marker::PhantomData;

use crate::{
    layouts::{
        Accum, AccumFor, AccumTag, DefaultAccum, Element, FromLane, Generation, IntoLane, Multiply, Vector, rounding,
        saturation,
    },
    oep::MmulImpl,
};

/// Largest number of accumulator lanes a tile may occupy.
pub const CBLOCK_CAPACITY: usize = 128;

/// Largest half of a B tile regrouped for an interleaved result.
const INTERLEAVED_B_CAPACITY: usize = 256;

/// Placement of the `M x N` logical result in the accumulator registers of
/// a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CBlockLayout {
    /// One register, row-major.
    Single,
    /// `regs` registers, each holding a contiguous block of rows.
    Array { regs: usize },
    /// Internal accumulator `factor` times wider than the logical one:
    /// logical lane `i` sits at internal lane `i * factor`.
    Wide { factor: usize },
    /// Two registers: the first holds column pairs `0, 2, 4, ...`, the
    /// second column pairs `1, 3, 5, ...`.
    Interleaved,
}

impl CBlockLayout {
    /// Internal lanes occupied by an `m x n` result.
    pub const fn storage_lanes(self, m: usize, n: usize) -> usize {
        match self {
            CBlockLayout::Wide { factor } => m * n * factor,
            _ => m * n,
        }
    }

    /// Whether an `m x n` result splits evenly into the registers of the
    /// layout.
    pub const fn splits(self, m: usize, n: usize) -> bool {
        match self {
            CBlockLayout::Single => true,
            CBlockLayout::Array { regs } => regs > 0 && m % regs == 0,
            CBlockLayout::Wide { factor } => factor > 0,
            CBlockLayout::Interleaved => n % 4 == 0,
        }
    }

    /// Internal lane of logical element `(row, col)`.
    pub const fn index(self, row: usize, col: usize, m: usize, n: usize) -> usize {
        match self {
            CBlockLayout::Single | CBlockLayout::Array { .. } => row * n + col,
            CBlockLayout::Wide { factor } => (row * n + col) * factor,
            CBlockLayout::Interleaved => {
                let half: usize = n / 2;
                let reg: usize = (col / 2) % 2;
                let local: usize = (col / 4) * 2 + col % 2;
                reg * m * half + row * half + local
            }
        }
    }
}

/// Matrix-multiply tile: `C (M x N) = A (M x K) * B (K x N)` with `A` of
/// `TA`, `B` of `TB` and accumulation in `A`.
///
/// A tile only exists for the shapes generation `G` declares through
/// [MmulImpl]; any other combination fails to compile. Operands and results
/// are row-major.
///
/// A new tile is logically zero without touching its registers: the first
/// [Mmul::mac] after [Mmul::new] overwrites instead of adding.
#[derive(Clone, Copy, Debug)]
pub struct Mmul<G, TA, TB, A: AccumTag, const M: usize, const K: usize, const N: usize> {
    data: [A::Lane; CBLOCK_CAPACITY],
    zero: bool,
    _phantom: PhantomData<fn() -> (G, TA, TB)>,
}

impl<G, TA, TB, A, const M: usize, const K: usize, const N: usize> Mmul<G, TA, TB, A, M, K, N>
where
    G: Generation + MmulImpl<TA, TB, A, M, K, N>,
    TA: Element + Multiply<TB, A::Lane>,
    TB: Element,
    A: AccumTag,
{
    pub const LAYOUT: CBlockLayout = G::LAYOUT;
    pub const SIZE_A: usize = M * K;
    pub const SIZE_B: usize = K * N;
    pub const SIZE_C: usize = M * N;

    const SHAPE_OK: () = {
        assert!(
            G::LAYOUT.storage_lanes(M, N) <= CBLOCK_CAPACITY,
            "tile result does not fit the accumulator registers"
        );
        assert!(G::LAYOUT.splits(M, N), "tile result does not split into its registers");
        assert!(K * N / 2 <= INTERLEAVED_B_CAPACITY, "B tile too large");
    };

    pub fn new() -> Self {
        let () = Self::SHAPE_OK;
        Self {
            data: [A::Lane::default(); CBLOCK_CAPACITY],
            zero: true,
            _phantom: PhantomData,
        }
    }

    /// Tile initialised from a row-major `M x N` accumulator.
    pub fn from_accum<const MN: usize>(acc: &Accum<A, MN>) -> Self {
        const { assert!(MN == M * N, "from_accum: accumulator must have M * N lanes") };
        let mut c: Self = Self::new();
        for i in 0..MN {
            c.data[Self::LAYOUT.index(i / N, i % N, M, N)] = acc.get(i);
        }
        c.zero = false;
        c
    }

    /// Tile initialised from a row-major `M x N` vector upshifted by `shift`.
    pub fn from_vector<T, const MN: usize>(v: &Vector<T, MN>, shift: u32) -> Self
    where
        T: Element + IntoLane<A::Lane>,
    {
        Self::from_accum(&Accum::<A, MN>::from_vector(v, shift))
    }

    pub fn is_zero(&self) -> bool {
        self.zero
    }

    pub fn layout(&self) -> CBlockLayout {
        Self::LAYOUT
    }

    /// `C = A * B`.
    pub fn mul<const MK: usize, const KN: usize>(&mut self, a: &Vector<TA, MK>, b: &Vector<TB, KN>) {
        self.multiply(a, b, false);
    }

    /// `C += A * B`; behaves as [Mmul::mul] on a tile that is still zero.
    pub fn mac<const MK: usize, const KN: usize>(&mut self, a: &Vector<TA, MK>, b: &Vector<TB, KN>) {
        self.multiply(a, b, !self.zero);
    }

    fn multiply<const MK: usize, const KN: usize>(&mut self, a: &Vector<TA, MK>, b: &Vector<TB, KN>, accumulate: bool) {
        const {
            assert!(MK == M * K, "A tile must have M * K lanes");
            assert!(KN == K * N, "B tile must have K * N lanes");
        };
        let (a, b) = (a.as_slice(), b.as_slice());
        let lanes: usize = Self::LAYOUT.storage_lanes(M, N);
        let data: &mut [A::Lane] = &mut self.data[..lanes];
        match Self::LAYOUT {
            CBlockLayout::Single => G::mac_impl(a, b, accumulate, data, 1),
            CBlockLayout::Array { regs } => {
                let rows: usize = M / regs;
                for (a_rows, reg) in a.chunks_exact(rows * K).zip(data.chunks_exact_mut(rows * N)) {
                    G::mac_impl(a_rows, b, accumulate, reg, 1);
                }
            }
            CBlockLayout::Wide { factor } => G::mac_impl(a, b, accumulate, data, factor),
            CBlockLayout::Interleaved => {
                let half: usize = N / 2;
                let mut b_half: [TB; INTERLEAVED_B_CAPACITY] = [TB::default(); INTERLEAVED_B_CAPACITY];
                for (g, reg) in data.chunks_exact_mut(M * half).enumerate() {
                    // column pairs g, g + 2, g + 4, ...
                    for row in 0..K {
                        let cols = (0..N).filter(|col| (col / 2) % 2 == g);
                        for (j, col) in cols.enumerate() {
                            b_half[row * half + j] = b[row * N + col];
                        }
                    }
                    G::mac_impl(a, &b_half[..K * half], accumulate, reg, 1);
                }
            }
        }
        self.zero = false;
    }

    /// Full-precision row-major result.
    pub fn to_accum<const MN: usize>(&self) -> Accum<A, MN> {
        const { assert!(MN == M * N, "to_accum: accumulator must have M * N lanes") };
        if self.zero {
            return Accum::zeros();
        }
        Accum::from_fn(|i| self.data[Self::LAYOUT.index(i / N, i % N, M, N)])
    }

    /// Row-major result narrowed from the internal registers with a
    /// shift-round-saturate by `shift` under the current modes.
    pub fn to_vector<T, const MN: usize>(&self, shift: u32) -> Vector<T, MN>
    where
        T: Element + FromLane<A::Lane>,
    {
        const { assert!(MN == M * N, "to_vector: vector must have M * N lanes") };
        let (rnd, sat) = (rounding(), saturation());
        Vector::from_fn(|i| {
            let lane: A::Lane = if self.zero {
                A::Lane::default()
            } else {
                self.data[Self::LAYOUT.index(i / N, i % N, M, N)]
            };
            T::from_lane(lane, shift, rnd, sat)
        })
    }
}

impl<G, TA, TB, A, const M: usize, const K: usize, const N: usize> Default for Mmul<G, TA, TB, A, M, K, N>
where
    G: Generation + MmulImpl<TA, TB, A, M, K, N>,
    TA: Element + Multiply<TB, A::Lane>,
    TB: Element,
    A: AccumTag,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Tile accumulating in the default precision of `G` for `TA x TB`.
pub type DefaultMmul<G, TA, TB, const M: usize, const K: usize, const N: usize> =
    Mmul<G, TA, TB, <G as DefaultAccum<TA, TB>>::Tag, M, K, N>;

/// Tile accumulating in at least `BITS` bits.
pub type MmulBits<G, TA, TB, const BITS: u32, const M: usize, const K: usize, const N: usize> =
    Mmul<G, TA, TB, <G as AccumFor<TA, TB, BITS>>::Tag, M, K, N>;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{
        layouts::{Acc32, Acc48, Acc64, Arch},
        reference::mmul::mmul_block_ref,
    };

    #[test]
    fn layouts_are_bijective() {
        let layouts: [CBlockLayout; 5] = [
            CBlockLayout::Single,
            CBlockLayout::Array { regs: 2 },
            CBlockLayout::Wide { factor: 2 },
            CBlockLayout::Wide { factor: 4 },
            CBlockLayout::Interleaved,
        ];
        for layout in layouts {
            let (m, n) = (4, 8);
            let mut seen: Vec<bool> = vec![false; layout.storage_lanes(m, n)];
            for row in 0..m {
                for col in 0..n {
                    let idx: usize = layout.index(row, col, m, n);
                    assert!(!seen[idx], "{layout:?}: ({row}, {col}) collides");
                    seen[idx] = true;
                }
            }
            assert_eq!(seen.iter().filter(|s| **s).count(), m * n);
        }
    }

    #[test]
    fn interleaved_splits_column_pairs() {
        let l: CBlockLayout = CBlockLayout::Interleaved;
        // columns 0,1 then 4,5 in the first register, 2,3 then 6,7 in the second
        assert_eq!(l.index(0, 0, 4, 8), 0);
        assert_eq!(l.index(0, 1, 4, 8), 1);
        assert_eq!(l.index(0, 4, 4, 8), 2);
        assert_eq!(l.index(0, 2, 4, 8), 16);
        assert_eq!(l.index(1, 7, 4, 8), 16 + 4 + 3);
    }

    thread_local! {
        // (A lanes, B lanes, stride) of every native call
        static CALLS: RefCell<Vec<(usize, usize, usize)>> = const { RefCell::new(Vec::new()) };
    }

    #[derive(Clone, Copy, Debug, Default)]
    struct Recording;

    impl Generation for Recording {
        const ARCH: Arch = Arch::Gen2;
        const NATIVE_VECTOR_BITS: usize = 512;
        const NATIVE_REDUCE: bool = false;
    }

    macro_rules! recording_mode {
        ($acc:ty, $m:literal, $k:literal, $n:literal, $layout:expr) => {
            unsafe impl MmulImpl<i16, i16, $acc, $m, $k, $n> for Recording {
                const LAYOUT: CBlockLayout = $layout;

                fn mac_impl(a: &[i16], b: &[i16], accumulate: bool, reg: &mut [i128], stride: usize) {
                    CALLS.with(|c| c.borrow_mut().push((a.len(), b.len(), stride)));
                    mmul_block_ref($k, a, b, accumulate, 64, reg, stride);
                }
            }
        };
    }

    recording_mode!(Acc32, 4, 4, 4, CBlockLayout::Single);
    recording_mode!(Acc32, 4, 4, 8, CBlockLayout::Array { regs: 2 });
    recording_mode!(Acc48, 2, 4, 8, CBlockLayout::Wide { factor: 2 });
    recording_mode!(Acc64, 2, 4, 8, CBlockLayout::Interleaved);

    fn take_calls() -> Vec<(usize, usize, usize)> {
        CALLS.with(|c| std::mem::take(&mut *c.borrow_mut()))
    }

    fn naive(m: usize, k: usize, n: usize, a: &[i16], b: &[i16]) -> Vec<i128> {
        (0..m * n)
            .map(|i| (0..k).map(|j| a[(i / n) * k + j] as i128 * b[j * n + i % n] as i128).sum())
            .collect()
    }

    fn check_tile<A, const M: usize, const K: usize, const N: usize, const MK: usize, const KN: usize, const MN: usize>(
        expected: &[(usize, usize, usize)],
    ) where
        A: AccumTag<Lane = i128>,
        Recording: MmulImpl<i16, i16, A, M, K, N>,
    {
        let a: Vector<i16, MK> = Vector::from_fn(|i| i as i16 - 3);
        let b: Vector<i16, KN> = Vector::from_fn(|i| 2 * i as i16 + 1);
        let mut c: Mmul<Recording, i16, i16, A, M, K, N> = Mmul::new();
        take_calls();
        c.mul(&a, &b);
        assert_eq!(take_calls(), expected, "{:?}", Mmul::<Recording, i16, i16, A, M, K, N>::LAYOUT);
        let want: Vec<i128> = naive(M, K, N, a.as_slice(), b.as_slice());
        let got: Accum<A, MN> = c.to_accum();
        assert_eq!(&got.lanes()[..], &want[..]);

        c.mac(&a, &b);
        take_calls();
        let got: Accum<A, MN> = c.to_accum();
        assert!(got.lanes().iter().zip(&want).all(|(g, w)| *g == 2 * w));
    }

    #[test]
    fn tiles_split_into_native_register_products() {
        check_tile::<Acc32, 4, 4, 4, 16, 16, 16>(&[(16, 16, 1)]);
        check_tile::<Acc32, 4, 4, 8, 16, 32, 32>(&[(8, 32, 1), (8, 32, 1)]);
        check_tile::<Acc48, 2, 4, 8, 8, 32, 16>(&[(8, 32, 2)]);
        check_tile::<Acc64, 2, 4, 8, 8, 32, 16>(&[(8, 16, 1), (8, 16, 1)]);
    }
}
