//! Criterion-based benchmark harnesses, generic over any generation.
//!
//! Architecture crates call these functions to measure the decomposition
//! overhead of the dispatch layer at several logical widths.

pub mod elementary;
pub mod fft;
pub mod mmul;
pub mod vector_ops;
