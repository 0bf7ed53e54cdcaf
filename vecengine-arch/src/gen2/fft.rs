//! FFT stages of [Gen2]: `cint16` twiddles over 16 or 32-bit data, and
//! radix 2 and 4 stages in `cbf16`.

use vecengine_hal::layouts::{CBf16, CInt16, CInt32, DefaultTwiddle};

use super::Gen2;
use crate::macros::{FftLane, fft_modes};

const fn stage(r: usize, v: usize, _ti: FftLane, _to: FftLane, tw: FftLane) -> i32 {
    match (r, tw) {
        (2, FftLane::CInt16 | FftLane::CBf16) => match v {
            1 => 3,
            2 => 2,
            4 => 1,
            _ => 0,
        },
        (4, FftLane::CInt16 | FftLane::CBf16) => match v {
            1 => 2,
            4 => 1,
            _ => 0,
        },
        (3 | 5, FftLane::CInt16) => {
            if v >= 8 {
                0
            } else {
                -1
            }
        }
        _ => -1,
    }
}

const fn out_vector_size(_r: usize, _v: usize, _ti: FftLane, _to: FftLane, _tw: FftLane) -> usize {
    8
}

fft_modes!(Gen2:
    (CInt16, CInt16, CInt16),
    (CInt16, CInt32, CInt16),
    (CInt32, CInt16, CInt16),
    (CInt32, CInt32, CInt16),
    (CBf16, CBf16, CBf16),
);

impl DefaultTwiddle<CInt16> for Gen2 {
    type Twiddle = CInt16;
}

impl DefaultTwiddle<CInt32> for Gen2 {
    type Twiddle = CInt16;
}

impl DefaultTwiddle<CBf16> for Gen2 {
    type Twiddle = CBf16;
}
