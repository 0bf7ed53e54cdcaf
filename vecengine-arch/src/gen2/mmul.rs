//! Tile modes and accumulator defaults of [Gen2].

use vecengine_hal::layouts::{Acc32, Acc64, AccFloat, Bf16, CAcc64, CInt16, CInt32, I4};

use super::Gen2;
use crate::macros::{accum_for, default_accum, mmul_modes};

macro_rules! gen2_mmul_table {
    ($apply:ident) => {
        $apply! { Gen2;
            i8, i8, Acc32: (4, 8, 4) Array2, (4, 16, 4) Array2, (4, 8, 8) Single, (8, 8, 4) Single, (4, 16, 8) Single,
                (8, 8, 8) Array2, (8, 16, 8) Array2, (4, 16, 16) Array2, (2, 8, 8) Wide2, (2, 16, 8) Wide2,
                (1, 16, 8) Wide4;
            i8, i8, Acc64: (4, 8, 4) Array2, (4, 16, 4) Array2, (8, 8, 4) Array2;
            i8, I4, Acc32: (4, 16, 8) Single, (4, 32, 8) Single, (8, 16, 8) Array2;
            i16, i8, Acc32: (2, 8, 8) Single, (2, 16, 8) Single, (4, 8, 4) Single, (4, 4, 8) Single, (4, 4, 4) Single,
                (8, 4, 4) Single, (4, 16, 8) Array2, (8, 4, 8) Array2;
            i8, i16, Acc32: (4, 4, 4) Single, (4, 4, 8) Array2;
            i16, i16, Acc32: (4, 4, 4) Single, (2, 4, 8) Single, (4, 4, 8) Array2;
            i16, i16, Acc64: (4, 4, 4) Single, (2, 4, 8) Single, (4, 4, 8) Array2;
            i16, i32, Acc64: (2, 4, 8) Single, (4, 4, 4) Single;
            i32, i16, Acc64: (2, 4, 8) Single, (4, 2, 4) Single, (4, 4, 4) Single, (4, 1, 8) Array2, (4, 4, 8) Array2;
            Bf16, Bf16, AccFloat: (4, 8, 4) Single, (4, 16, 4) Single, (4, 8, 8) Interleaved, (8, 8, 8) Interleaved,
                (8, 8, 4) Array2, (8, 1, 8) Array4;
            CInt16, CInt16, CAcc64: (1, 4, 8) Single, (2, 4, 8) Array2;
            CInt32, CInt16, CAcc64: (1, 2, 4) Wide2, (1, 2, 8) Single, (1, 4, 8) Single, (2, 2, 8) Array2,
                (2, 4, 8) Array2;
            CInt32, CInt32, CAcc64: (1, 2, 8) Single;
        }
    };
}

pub(crate) use gen2_mmul_table;

gen2_mmul_table!(mmul_modes);

default_accum!(Gen2:
    (i8, i8) => Acc32,
    (i8, I4) => Acc32,
    (i16, i8) => Acc32,
    (i8, i16) => Acc32,
    (i16, i16) => Acc32,
    (i16, i32) => Acc64,
    (i32, i16) => Acc64,
    (Bf16, Bf16) => AccFloat,
    (CInt16, CInt16) => CAcc64,
    (CInt32, CInt16) => CAcc64,
    (CInt32, CInt32) => CAcc64,
);

accum_for!(Gen2: [(i8, i8), (i16, i16)] { 32 => Acc32, 48 => Acc64, 64 => Acc64 });
accum_for!(Gen2: [(i8, I4), (i16, i8), (i8, i16)] { 32 => Acc32 });
accum_for!(Gen2: [(i16, i32), (i32, i16)] { 32 => Acc64, 48 => Acc64, 64 => Acc64 });
accum_for!(Gen2: [(CInt16, CInt16), (CInt32, CInt16), (CInt32, CInt32)] { 32 => CAcc64, 48 => CAcc64, 64 => CAcc64 });
