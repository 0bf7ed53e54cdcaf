use thiserror::Error;

use crate::layouts::Arch;

/// Errors reported by the checked entry points of the crate.
///
/// Unsupported type, shape and generation combinations are rejected at
/// compile time and never surface here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The name does not match any known vector engine generation.
    #[error("unknown vector engine architecture: {0}")]
    UnknownArch(String),

    /// A raw mask was built from the wrong number of words.
    #[error("mask of {lanes} lanes needs {expected} words of {word_bits} bits, got {got}")]
    MaskWordCount {
        lanes: usize,
        word_bits: usize,
        expected: usize,
        got: usize,
    },

    /// 64-bit words were requested for a mask that is not a multiple of 64 lanes.
    #[error("mask of {0} lanes is not a multiple of 64")]
    MaskNotWordAligned(usize),

    /// The FFT point size is not a multiple of the stage minimum.
    #[error("{arch} radix-{radix} stage: point size {n} is not a multiple of {min}")]
    PointSize {
        arch: Arch,
        radix: usize,
        n: usize,
        min: usize,
    },

    /// No native stage runs the requested vectorization.
    #[error("{arch} radix-{radix} stage: unsupported vectorization {vectorization}")]
    Vectorization {
        arch: Arch,
        radix: usize,
        vectorization: usize,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
