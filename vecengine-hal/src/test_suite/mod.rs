pub mod elementary;
pub mod fft;
pub mod mmul;
pub mod sliding_mul;
pub mod vector_ops;

use rand::Rng;

use crate::{
    layouts::{Bf16, CBf16, CFloat, CInt16, CInt32, Element, I4, Integral, U4},
    source::Source,
};

/// Random lanes small enough that sums of a few hundred products stay exact
/// in every accumulator, float ones included.
pub trait SmallLane: Element {
    fn small(source: &mut Source) -> Self;
}

fn small_int(source: &mut Source, bound: i64) -> i64 {
    source.random_range(-bound..=bound)
}

macro_rules! impl_small_int {
    ($($t:ty => $bound:literal),+ $(,)?) => {
        $(
            impl SmallLane for $t {
                fn small(source: &mut Source) -> Self {
                    <$t as Integral>::from_i128(small_int(source, $bound) as i128)
                }
            }
        )+
    };
}

impl_small_int!(i8 => 100, i16 => 1000, i32 => 100000, I4 => 7);

impl SmallLane for u8 {
    fn small(source: &mut Source) -> Self {
        source.random_range(0..200)
    }
}

impl SmallLane for U4 {
    fn small(source: &mut Source) -> Self {
        U4::new(source.random_range(0..16))
    }
}

impl SmallLane for f32 {
    fn small(source: &mut Source) -> Self {
        small_int(source, 8) as f32
    }
}

impl SmallLane for Bf16 {
    fn small(source: &mut Source) -> Self {
        Bf16::from_f32(small_int(source, 8) as f32)
    }
}

impl SmallLane for CInt16 {
    fn small(source: &mut Source) -> Self {
        CInt16::new(small_int(source, 100) as i16, small_int(source, 100) as i16)
    }
}

impl SmallLane for CInt32 {
    fn small(source: &mut Source) -> Self {
        CInt32::new(small_int(source, 100) as i32, small_int(source, 100) as i32)
    }
}

impl SmallLane for CFloat {
    fn small(source: &mut Source) -> Self {
        CFloat::new(small_int(source, 100) as f32, small_int(source, 100) as f32)
    }
}

impl SmallLane for CBf16 {
    fn small(source: &mut Source) -> Self {
        CBf16::new(small_int(source, 100) as f32, small_int(source, 100) as f32)
    }
}

#[macro_export]
macro_rules! backend_test_suite {
    (
        mod $modname:ident,
        backend = $backend:ty,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use vecengine_hal::layouts::Engine;

            use once_cell::sync::Lazy;

            static ENGINE: Lazy<Engine<$backend>> = Lazy::new(Engine::<$backend>::new);

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(&*ENGINE);
                }
            )+
        }
    };
}

#[macro_export]
macro_rules! cross_backend_test_suite {
    (
        mod $modname:ident,
        backend_ref = $backend_ref:ty,
        backend_test = $backend_test:ty,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use vecengine_hal::layouts::Engine;

            use once_cell::sync::Lazy;

            static ENGINE_REF: Lazy<Engine<$backend_ref>> = Lazy::new(Engine::<$backend_ref>::new);
            static ENGINE_TEST: Lazy<Engine<$backend_test>> = Lazy::new(Engine::<$backend_test>::new);

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(&*ENGINE_REF, &*ENGINE_TEST);
                }
            )+
        }
    };
}
