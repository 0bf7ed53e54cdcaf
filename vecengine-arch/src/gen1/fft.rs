//! FFT stages of [Gen1].
//!
//! Three twiddle families: `cint16` twiddles over 16 or 32-bit data,
//! `cint32` twiddles over 16 or 32-bit data and `cfloat` twiddles over
//! `cfloat` data. Radix 4 has no `cfloat` stage.

use vecengine_hal::layouts::{CFloat, CInt16, CInt32, DefaultTwiddle};

use super::Gen1;
use crate::macros::{FftLane, fft_modes};

const fn stage(r: usize, v: usize, ti: FftLane, to: FftLane, tw: FftLane) -> i32 {
    let same: bool = matches!(
        (ti, to),
        (FftLane::CInt16, FftLane::CInt16) | (FftLane::CInt32, FftLane::CInt32) | (FftLane::CFloat, FftLane::CFloat)
    );
    match tw {
        FftLane::CInt16 => match (r, same) {
            (2, true) => match (ti, v) {
                (FftLane::CInt16, 1) => 3,
                (FftLane::CInt16, 2) => 2,
                (FftLane::CInt16, 4) => 1,
                (FftLane::CInt32, 1) => 2,
                (FftLane::CInt32, 2) => 1,
                _ => 0,
            },
            (4, true) => match v {
                1 => 1,
                2 => -1,
                _ => 0,
            },
            (3 | 5, true) => {
                if v >= 4 {
                    0
                } else {
                    -1
                }
            }
            (2, false) => {
                if v == 1 {
                    2
                } else {
                    0
                }
            }
            (4, false) => {
                if v == 1 {
                    1
                } else {
                    0
                }
            }
            (3 | 5, false) => {
                if v == 1 {
                    -1
                } else {
                    0
                }
            }
            _ => -1,
        },
        FftLane::CInt32 => match (r, ti, to) {
            (2, FftLane::CInt16, FftLane::CInt16) => {
                if v == 1 {
                    2
                } else {
                    -1
                }
            }
            (2, FftLane::CInt32, FftLane::CInt32) => {
                if v == 1 {
                    1
                } else {
                    0
                }
            }
            (4, FftLane::CInt32, FftLane::CInt32) => match v {
                1 => 1,
                2 => -1,
                _ => 0,
            },
            (3 | 5, FftLane::CInt32, FftLane::CInt32) => {
                if v >= 2 {
                    0
                } else {
                    -1
                }
            }
            (2 | 4, FftLane::CInt16, FftLane::CInt32) | (2 | 4, FftLane::CInt32, FftLane::CInt16) => {
                if v == 1 {
                    1
                } else {
                    0
                }
            }
            _ => -1,
        },
        FftLane::CFloat => match r {
            2 => match v {
                1 => 2,
                2 => 1,
                _ => 0,
            },
            3 | 5 => {
                if v >= 4 {
                    0
                } else {
                    -1
                }
            }
            _ => -1,
        },
        FftLane::CBf16 => -1,
    }
}

const fn out_vector_size(r: usize, _v: usize, ti: FftLane, to: FftLane, tw: FftLane) -> usize {
    match tw {
        FftLane::CInt16 => {
            if r == 2 && matches!(ti, FftLane::CInt16) {
                8
            } else {
                4
            }
        }
        FftLane::CInt32 => {
            if matches!((ti, to), (FftLane::CInt32, FftLane::CInt32)) {
                2
            } else {
                4
            }
        }
        _ => 4,
    }
}

fft_modes!(Gen1:
    (CInt16, CInt16, CInt16),
    (CInt16, CInt32, CInt16),
    (CInt32, CInt16, CInt16),
    (CInt32, CInt32, CInt16),
    (CInt16, CInt16, CInt32),
    (CInt16, CInt32, CInt32),
    (CInt32, CInt16, CInt32),
    (CInt32, CInt32, CInt32),
    (CFloat, CFloat, CFloat),
);

impl DefaultTwiddle<CInt16> for Gen1 {
    type Twiddle = CInt16;
}

impl DefaultTwiddle<CInt32> for Gen1 {
    type Twiddle = CInt16;
}

impl DefaultTwiddle<CFloat> for Gen1 {
    type Twiddle = CFloat;
}
