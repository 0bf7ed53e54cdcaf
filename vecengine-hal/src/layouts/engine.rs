use std::{
    fmt::{Debug, Display, Formatter},
    marker::PhantomData,
    str::FromStr,
};

use crate::{
    error::EngineError,
    layouts::Element,
};

/// Vector engine architecture generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arch {
    /// First generation: 256-bit native vectors, floating point elementary
    /// functions in hardware, no 4-bit lanes.
    Gen1,
    /// Second generation: 512-bit native vectors, 4-bit lanes, bfloat16.
    Gen2,
    /// Second generation refresh: 512-bit native vectors, native horizontal
    /// reductions and hardware `tanh`/`exp2`.
    Gen2p,
}

impl Arch {
    pub const ALL: [Arch; 3] = [Arch::Gen1, Arch::Gen2, Arch::Gen2p];

    pub fn name(self) -> &'static str {
        match self {
            Arch::Gen1 => "gen1",
            Arch::Gen2 => "gen2",
            Arch::Gen2p => "gen2p",
        }
    }
}

impl Display for Arch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Arch {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gen1" | "aie" => Ok(Arch::Gen1),
            "gen2" | "aie-ml" | "aieml" => Ok(Arch::Gen2),
            "gen2p" | "xdna2" => Ok(Arch::Gen2p),
            _ => Err(EngineError::UnknownArch(s.to_string())),
        }
    }
}

/// A vector engine generation: the set of native widths and primitives
/// that the dispatch layer decomposes every logical operation onto.
///
/// The primitives themselves are provided by implementing the traits of
/// [crate::oep] for the generation type.
pub trait Generation: Copy + Default + Debug + Send + Sync + 'static {
    const ARCH: Arch;

    /// Width in bits of one native vector register.
    const NATIVE_VECTOR_BITS: usize;

    /// Whether horizontal reductions are a single native instruction.
    const NATIVE_REDUCE: bool;

    /// Bits physically stored for an accumulator of `bits` logical bits.
    fn accum_storage_bits(bits: u32) -> u32 {
        bits
    }

    /// Lanes of `T` in one native register.
    fn native_lanes<T: Element>() -> usize {
        Self::NATIVE_VECTOR_BITS / T::BITS
    }
}

/// Zero-sized handle through which the operations of [crate::api] are
/// invoked for generation `G`.
#[derive(Clone, Copy)]
pub struct Engine<G: Generation> {
    _phantom: PhantomData<G>,
}

impl<G: Generation> Engine<G> {
    pub fn new() -> Self {
        log::debug!(
            "vector engine {}: {}-bit native vectors, native reduce: {}",
            G::ARCH,
            G::NATIVE_VECTOR_BITS,
            G::NATIVE_REDUCE
        );
        Self { _phantom: PhantomData }
    }

    pub fn arch(&self) -> Arch {
        G::ARCH
    }

    pub fn native_lanes<T: Element>(&self) -> usize {
        G::native_lanes::<T>()
    }
}

impl<G: Generation> Default for Engine<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Generation> Debug for Engine<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Engine<{}>", G::ARCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arch_parses_names_and_aliases() {
        for arch in Arch::ALL {
            assert_eq!(arch.to_string().parse::<Arch>(), Ok(arch));
        }
        assert_eq!("AIE-ML".parse::<Arch>(), Ok(Arch::Gen2));
        assert_eq!(" xdna2 ".parse::<Arch>(), Ok(Arch::Gen2p));
        assert_eq!(
            "gen3".parse::<Arch>(),
            Err(EngineError::UnknownArch("gen3".to_string()))
        );
    }
}
