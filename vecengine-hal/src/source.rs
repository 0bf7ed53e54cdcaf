use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::RngCore;

use crate::layouts::{Integral, Vector};

const MAXF64: f64 = 9007199254740992.0;

/// Seeded lane generator used by the test and bench suites.
pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    #[inline(always)]
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        min + ((self.next_u64() << 11 >> 11) as f64) / MAXF64 * (max - min)
    }

    #[inline(always)]
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    /// Uniform over every value of the lane type.
    #[inline(always)]
    pub fn next_lane<T: Integral>(&mut self) -> T {
        T::from_i128(self.next_u64() as i128)
    }

    pub fn vector<T: Integral, const N: usize>(&mut self) -> Vector<T, N> {
        Vector::from_fn(|_| self.next_lane())
    }

    pub fn vector_f32<const N: usize>(&mut self, min: f64, max: f64) -> Vector<f32, N> {
        Vector::from_fn(|_| self.next_f64(min, max) as f32)
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
