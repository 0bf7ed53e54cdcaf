//! FFT stages of [Gen2p]: radix 2 and 4 with `cint16` twiddles over 16
//! or 32-bit data.
//!
//! Radix 2 stages from 32 to 16-bit data exist only without
//! vectorization.

use vecengine_hal::layouts::{CInt16, CInt32, DefaultTwiddle};

use super::Gen2p;
use crate::macros::{FftLane, fft_modes};

const fn stage(r: usize, v: usize, ti: FftLane, to: FftLane, tw: FftLane) -> i32 {
    if !matches!(tw, FftLane::CInt16) || !matches!(r, 2 | 4) {
        return -1;
    }
    let same: bool = matches!((ti, to), (FftLane::CInt16, FftLane::CInt16) | (FftLane::CInt32, FftLane::CInt32));
    if !same && matches!(ti, FftLane::CInt16) {
        return 0;
    }
    match (r, same) {
        (2, true) => match v {
            1 => 4,
            2 => 3,
            4 => 2,
            8 => 1,
            _ => 0,
        },
        (2, false) => {
            if v == 1 {
                4
            } else {
                -1
            }
        }
        _ => match v {
            1 => 2,
            4 => 1,
            _ => 0,
        },
    }
}

const fn out_vector_size(r: usize, v: usize, ti: FftLane, _to: FftLane, _tw: FftLane) -> usize {
    if r == 4 && v == 1 && matches!(ti, FftLane::CInt32) {
        8
    } else {
        16
    }
}

fft_modes!(Gen2p:
    (CInt16, CInt16, CInt16),
    (CInt16, CInt32, CInt16),
    (CInt32, CInt16, CInt16),
    (CInt32, CInt32, CInt16),
);

impl DefaultTwiddle<CInt16> for Gen2p {
    type Twiddle = CInt16;
}

impl DefaultTwiddle<CInt32> for Gen2p {
    type Twiddle = CInt16;
}
