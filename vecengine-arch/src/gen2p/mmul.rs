//! Tile modes and accumulator defaults of [Gen2p].

use vecengine_hal::layouts::{Acc32, Acc64, AccFloat, Bf16, CAcc64, CInt16, CInt32, I4};

use super::Gen2p;
use crate::macros::{accum_for, default_accum, mmul_modes};

macro_rules! gen2p_mmul_table {
    ($apply:ident) => {
        $apply! { Gen2p;
            i8, i8, Acc32: (2, 8, 8) Wide4, (4, 8, 8) Wide2, (4, 16, 8) Wide2, (8, 8, 8) Single, (8, 16, 8) Single;
            i8, I4, Acc32: (4, 16, 16) Single;
            i16, i8, Acc32: (4, 4, 8) Wide2, (8, 4, 8) Single;
            i16, i8, Acc64: (2, 16, 8) Single, (4, 16, 8) Single, (4, 8, 8) Single;
            i8, i16, Acc32: (4, 4, 8) Single, (8, 2, 8) Single;
            i16, i16, Acc32: (4, 2, 8) Wide2, (8, 1, 8) Single, (8, 2, 8) Single;
            i16, i16, Acc64: (2, 4, 8) Wide2, (2, 8, 8) Single, (4, 4, 8) Single, (4, 8, 8) Single;
            i16, i32, Acc64: (4, 4, 8) Single;
            i32, i16, Acc64: (2, 4, 8) Wide2, (4, 1, 8) Single, (4, 2, 8) Single, (4, 4, 8) Single;
            i32, i32, Acc64: (4, 1, 8) Single, (4, 2, 8) Single, (4, 4, 8) Single, (4, 4, 4) Single, (8, 2, 8) Array2;
            f32, f32, AccFloat: (4, 1, 4) Single, (4, 1, 8) Single, (4, 8, 4) Single;
            Bf16, Bf16, AccFloat: (4, 8, 4) Single, (4, 8, 8) Single, (8, 8, 4) Single, (8, 8, 8) Single,
                (8, 1, 8) Single;
            CInt16, i16, CAcc64: (2, 4, 8) Interleaved, (4, 4, 8) Interleaved;
            CInt16, CInt16, CAcc64: (1, 4, 8) Wide2, (2, 2, 16) Array2;
            CInt32, CInt16, CAcc64: (1, 2, 16) Single, (1, 2, 4) Single, (1, 2, 8) Single;
            CInt32, CInt32, CAcc64: (1, 2, 8) Single;
        }
    };
}

pub(crate) use gen2p_mmul_table;

gen2p_mmul_table!(mmul_modes);

default_accum!(Gen2p:
    (i8, i8) => Acc32,
    (i8, I4) => Acc32,
    (i16, i8) => Acc32,
    (i8, i16) => Acc32,
    (i16, i16) => Acc32,
    (i16, i32) => Acc64,
    (i32, i16) => Acc64,
    (i32, i32) => Acc64,
    (f32, f32) => AccFloat,
    (Bf16, Bf16) => AccFloat,
    (CInt16, i16) => CAcc64,
    (CInt16, CInt16) => CAcc64,
    (CInt32, CInt16) => CAcc64,
    (CInt32, CInt32) => CAcc64,
);

accum_for!(Gen2p: [(i16, i8), (i16, i16)] { 32 => Acc32, 48 => Acc64, 64 => Acc64 });
accum_for!(Gen2p: [(i8, i8), (i8, I4), (i8, i16)] { 32 => Acc32 });
accum_for!(Gen2p: [(i16, i32), (i32, i16), (i32, i32)] { 32 => Acc64, 48 => Acc64, 64 => Acc64 });
accum_for!(Gen2p: [(CInt16, i16), (CInt16, CInt16), (CInt32, CInt16), (CInt32, CInt32)] {
    32 => CAcc64,
    48 => CAcc64,
    64 => CAcc64,
});
