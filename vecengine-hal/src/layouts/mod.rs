mod accum;
mod element;
mod engine;
mod fft;
mod mask;
mod mmul;
mod mode;
mod ops;
mod sliding_mul;
mod vector;

pub use accum::*;
pub use element::*;
pub use engine::*;
pub use fft::*;
pub use mask::*;
pub use mmul::*;
pub use mode::*;
pub use ops::*;
pub use sliding_mul::*;
pub use vector::*;
