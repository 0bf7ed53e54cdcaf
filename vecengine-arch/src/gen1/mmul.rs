//! Tile modes and accumulator defaults of [Gen1].
//!
//! 8 and 16-bit operands accumulate in 48 bits whether 32 or 48 are
//! requested; products involving 32-bit operands accumulate in 48 or 80.
//! Complex 16-bit by real 16-bit products keep the requested 32 or 48 bit
//! tag, both stored in 48.

use vecengine_hal::layouts::{Acc32, Acc48, Acc64, Acc80, AccFloat, CAcc32, CAcc48, CAcc64, CAcc80, CAccFloat, CFloat, CInt16, CInt32};

use super::Gen1;
use crate::macros::{accum_for, default_accum, mmul_modes};

macro_rules! gen1_mmul_table {
    ($apply:ident) => {
        $apply! { Gen1;
            i8, i8, Acc32: (4, 8, 4) Single, (4, 16, 4) Array2, (4, 8, 8) Single, (2, 8, 8) Single, (8, 8, 4) Single,
                (4, 16, 8) Single, (1, 16, 8) Single, (2, 16, 8) Single;
            i8, i8, Acc48: (4, 8, 4) Single, (4, 16, 4) Array2, (4, 8, 8) Single, (2, 8, 8) Single, (8, 8, 4) Single,
                (4, 16, 8) Single, (1, 16, 8) Single, (2, 16, 8) Single;
            i16, i8, Acc32: (4, 4, 4) Single, (4, 4, 8) Array2, (4, 8, 4) Single, (8, 4, 4) Array2;
            i16, i8, Acc48: (4, 4, 4) Single, (4, 4, 8) Array2, (4, 8, 4) Single, (8, 4, 4) Array2;
            i8, i16, Acc32: (4, 4, 4) Single, (4, 4, 8) Array2, (8, 8, 1) Single;
            i8, i16, Acc48: (4, 4, 4) Single, (4, 4, 8) Array2, (8, 8, 1) Single;
            i16, i16, Acc32: (2, 4, 8) Single, (4, 2, 8) Array2, (4, 4, 4) Single, (4, 4, 8) Array2, (8, 8, 1) Single;
            i16, i16, Acc48: (2, 4, 8) Single, (4, 2, 8) Array2, (4, 4, 4) Single, (4, 4, 8) Array2, (8, 8, 1) Single;
            i16, i32, Acc48: (2, 4, 8) Array2, (4, 2, 2) Single, (4, 4, 4) Array2;
            i16, i32, Acc64: (2, 4, 8) Array2, (4, 2, 2) Single, (4, 4, 4) Array2;
            i16, i32, Acc80: (2, 4, 8) Array2, (4, 2, 2) Single, (4, 4, 4) Array2;
            i32, i16, Acc48: (2, 2, 4) Single, (2, 2, 8) Array2, (2, 4, 4) Single, (2, 4, 8) Array2, (4, 2, 4) Array2,
                (4, 4, 2) Single, (4, 4, 4) Array2;
            i32, i16, Acc64: (2, 2, 4) Single, (2, 2, 8) Array2, (2, 4, 4) Single, (2, 4, 8) Array2, (4, 2, 4) Array2,
                (4, 4, 2) Single, (4, 4, 4) Array2;
            i32, i16, Acc80: (2, 2, 4) Single, (2, 2, 8) Array2, (2, 4, 4) Single, (2, 4, 8) Array2, (4, 2, 4) Array2,
                (4, 4, 2) Single, (4, 4, 4) Array2;
            i32, i32, Acc64: (2, 2, 2) Single, (2, 4, 2) Single, (2, 8, 2) Single, (4, 4, 1) Single, (2, 4, 4) Array2,
                (4, 2, 2) Array2, (4, 4, 2) Array2, (4, 2, 4) Array2;
            i32, i32, Acc80: (2, 2, 2) Single, (2, 4, 2) Single, (2, 8, 2) Single, (4, 4, 1) Single, (2, 4, 4) Array2,
                (4, 2, 2) Array2, (4, 4, 2) Array2, (4, 2, 4) Array2;
            f32, f32, AccFloat: (2, 2, 2) Wide2, (2, 4, 2) Wide2, (2, 8, 2) Wide2, (4, 4, 1) Wide2, (2, 4, 4) Single,
                (4, 2, 2) Single, (4, 4, 2) Single, (4, 2, 4) Array2;
            CInt16, CInt16, CAcc48: (2, 2, 2) Single, (2, 4, 2) Single, (4, 4, 1) Single, (2, 4, 4) Array2,
                (4, 2, 2) Array2;
            CInt16, i16, CAcc32: (2, 2, 4) Single, (2, 4, 4) Single, (4, 2, 4) Array2, (4, 4, 2) Single, (4, 4, 4) Array2,
                (2, 2, 8) Array2, (2, 4, 8) Array2;
            CInt16, i16, CAcc48: (2, 2, 4) Single, (2, 4, 4) Single, (4, 2, 4) Array2, (4, 4, 2) Single, (4, 4, 4) Array2,
                (2, 2, 8) Array2, (2, 4, 8) Array2;
            CInt32, CInt16, CAcc64: (2, 2, 2) Single, (2, 4, 2) Single, (4, 4, 1) Single;
            CInt32, CInt16, CAcc80: (2, 2, 2) Single, (2, 4, 2) Single, (4, 4, 1) Single;
            CInt32, CInt32, CAcc64: (1, 2, 2) Single, (2, 2, 1) Single, (2, 2, 2) Array2;
            CInt32, CInt32, CAcc80: (1, 2, 2) Single, (2, 2, 1) Single, (2, 2, 2) Array2;
            CFloat, CFloat, CAccFloat: (2, 2, 2) Single, (2, 4, 2) Single, (4, 2, 1) Single, (2, 2, 4) Array2,
                (4, 2, 2) Array2;
        }
    };
}

pub(crate) use gen1_mmul_table;

gen1_mmul_table!(mmul_modes);

default_accum!(Gen1:
    (i8, i8) => Acc32,
    (i16, i8) => Acc32,
    (i8, i16) => Acc32,
    (i16, i16) => Acc32,
    (i16, i32) => Acc48,
    (i32, i16) => Acc48,
    (i32, i32) => Acc64,
    (f32, f32) => AccFloat,
    (CInt16, i16) => CAcc32,
    (CInt16, CInt16) => CAcc48,
    (CInt32, CInt16) => CAcc64,
    (CInt32, CInt32) => CAcc64,
    (CFloat, CFloat) => CAccFloat,
);

accum_for!(Gen1: [(i8, i8), (i16, i8), (i8, i16), (i16, i16)] { 32 => Acc32, 48 => Acc48 });
accum_for!(Gen1: [(i16, i32), (i32, i16)] { 32 => Acc48, 48 => Acc48, 64 => Acc64, 80 => Acc80 });
accum_for!(Gen1: [(i32, i32)] { 32 => Acc64, 48 => Acc64, 64 => Acc64, 80 => Acc80 });
accum_for!(Gen1: [(CInt16, i16)] { 32 => CAcc32, 48 => CAcc48 });
accum_for!(Gen1: [(CInt16, CInt16)] { 32 => CAcc48, 48 => CAcc48 });
accum_for!(Gen1: [(CInt32, CInt16), (CInt32, CInt32)] { 32 => CAcc64, 48 => CAcc64, 64 => CAcc64, 80 => CAcc80 });
