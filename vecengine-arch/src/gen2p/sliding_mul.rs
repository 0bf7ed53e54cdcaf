//! Sliding multiplies of [Gen2p]: the [crate::Gen2] modes plus `f32`
//! coefficients and data.

use vecengine_hal::layouts::{Acc32, Acc64, AccFloat, Bf16, CAcc64, CInt16, CInt32};

use super::Gen2p;
use crate::macros::sliding_mul_modes;

macro_rules! gen2p_sliding_mul_table {
    ($apply:ident) => {
        $apply! { Gen2p;
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
            f32, f32, AccFloat: (32, 1);
        }
    };
}

pub(crate) use gen2p_sliding_mul_table;

gen2p_sliding_mul_table!(sliding_mul_modes);
