//! Sliding multiplies of [Gen1]: 8 lanes of 16-bit products per call, fewer
//! lanes or points for wider and complex operands.

use vecengine_hal::layouts::{
    Acc32, Acc48, Acc64, Acc80, AccFloat, CAcc32, CAcc48, CAcc64, CAcc80, CAccFloat, CFloat, CInt16, CInt32,
};

use super::Gen1;
use crate::macros::sliding_mul_modes;

macro_rules! gen1_sliding_mul_table {
    ($apply:ident) => {
        $apply! { Gen1;
            i16, i16, Acc32: (8, 4);
            i16, i16, Acc48: (8, 4);
            i16, i32, Acc48: (8, 2);
            i16, i32, Acc80: (8, 2);
            i32, i16, Acc48: (8, 2);
            i32, i16, Acc80: (8, 2);
            i32, i32, Acc64: (4, 2);
            i32, i32, Acc80: (4, 2);
            i16, CInt16, CAcc48: (8, 2);
            CInt16, i16, CAcc32: (8, 2);
            CInt16, i16, CAcc48: (8, 2);
            CInt16, CInt16, CAcc48: (4, 2);
            CInt32, CInt16, CAcc64: (4, 1);
            CInt32, CInt16, CAcc80: (4, 1);
            CInt32, CInt32, CAcc64: (2, 1);
            CInt32, CInt32, CAcc80: (2, 1);
            f32, f32, AccFloat: (8, 1);
            CFloat, CFloat, CAccFloat: (4, 1);
        }
    };
}

pub(crate) use gen1_sliding_mul_table;

gen1_sliding_mul_table!(sliding_mul_modes);
