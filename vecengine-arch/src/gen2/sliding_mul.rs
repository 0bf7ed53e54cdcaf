//! Sliding multiplies of [Gen2]: 16 lanes of 4 products for 16 and 32-bit
//! operands, complex products emulated from real ones.

use vecengine_hal::layouts::{Acc32, Acc64, AccFloat, Bf16, CAcc64, CInt16, CInt32};

use super::Gen2;
use crate::macros::sliding_mul_modes;

macro_rules! gen2_sliding_mul_table {
    ($apply:ident) => {
        $apply! { Gen2;
            i8, i8, Acc32: (32, 8);
            i16, i16, Acc32: (16, 4);
            i16, i16, Acc64: (16, 4);
            i16, i32, Acc64: (16, 4);
            i32, i16, Acc64: (16, 4);
            i32, i32, Acc64: (16, 4);
            i16, CInt16, CAcc64: (16, 4);
            CInt16, i16, CAcc64: (16, 4);
            CInt16, CInt16, CAcc64: (16, 4);
            CInt32, CInt16, CAcc64: (8, 4);
            CInt32, CInt32, CAcc64: (8, 1);
            Bf16, Bf16, AccFloat: (16, 1);
        }
    };
}

pub(crate) use gen2_sliding_mul_table;

gen2_sliding_mul_table!(sliding_mul_modes);
