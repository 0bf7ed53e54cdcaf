use std::cell::Cell;

/// Rounding applied when an accumulator is shifted right into a narrower lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Truncate towards negative infinity.
    #[default]
    Floor,
    /// Round towards positive infinity.
    Ceil,
    /// Round to nearest, ties towards positive infinity.
    PositiveInf,
    /// Round to nearest, ties towards negative infinity.
    NegativeInf,
    /// Round to nearest, ties away from zero.
    SymmetricInf,
    /// Round to nearest, ties towards zero.
    SymmetricZero,
    /// Round to nearest, ties to even.
    ConvEven,
    /// Round to nearest, ties to odd.
    ConvOdd,
}

/// Behaviour of a narrowing conversion when the value does not fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SaturationMode {
    /// Wrap around (two's complement truncation).
    None,
    /// Clamp to `[MIN, MAX]`.
    #[default]
    Saturate,
    /// Clamp to `[-MAX, MAX]`.
    Symmetric,
}

thread_local! {
    static MODES: Cell<(RoundingMode, SaturationMode)> =
        const { Cell::new((RoundingMode::Floor, SaturationMode::Saturate)) };
}

pub fn rounding() -> RoundingMode {
    MODES.with(|m| m.get().0)
}

pub fn saturation() -> SaturationMode {
    MODES.with(|m| m.get().1)
}

/// Sets the rounding mode of the calling thread and returns the previous one.
pub fn set_rounding(mode: RoundingMode) -> RoundingMode {
    MODES.with(|m| {
        let (prev, sat) = m.get();
        m.set((mode, sat));
        prev
    })
}

/// Sets the saturation mode of the calling thread and returns the previous one.
pub fn set_saturation(mode: SaturationMode) -> SaturationMode {
    MODES.with(|m| {
        let (rnd, prev) = m.get();
        m.set((rnd, mode));
        prev
    })
}

/// Scoped override of the rounding and saturation modes.
///
/// The modes that were active when the guard was created are restored when
/// it is dropped, on every exit path including unwinding.
#[must_use = "the previous modes are restored as soon as the guard is dropped"]
pub struct ModeGuard {
    rounding: RoundingMode,
    saturation: SaturationMode,
}

impl ModeGuard {
    pub fn new(rnd: RoundingMode, sat: SaturationMode) -> Self {
        let rounding: RoundingMode = set_rounding(rnd);
        let saturation: SaturationMode = set_saturation(sat);
        log::trace!("mode guard: {rounding:?}/{saturation:?} -> {rnd:?}/{sat:?}");
        Self { rounding, saturation }
    }

    pub fn rounding(rnd: RoundingMode) -> Self {
        Self::new(rnd, saturation())
    }

    pub fn saturation(sat: SaturationMode) -> Self {
        Self::new(rounding(), sat)
    }
}

impl Drop for ModeGuard {
    fn drop(&mut self) {
        log::trace!("mode guard: restoring {:?}/{:?}", self.rounding, self.saturation);
        set_rounding(self.rounding);
        set_saturation(self.saturation);
    }
}

/// Shift-round: `v / 2^shift` rounded with `rnd`.
///
/// Rounding is decided from the floor quotient and the remainder, so every
/// `i128` input is accepted.
pub fn srs(v: i128, shift: u32, rnd: RoundingMode) -> i128 {
    if shift == 0 {
        return v;
    }
    let half: i128 = 1 << (shift - 1);
    let q: i128 = v >> shift;
    let r: i128 = v - (q << shift);
    let up: bool = match rnd {
        RoundingMode::Floor => false,
        RoundingMode::Ceil => r != 0,
        RoundingMode::PositiveInf => r >= half,
        RoundingMode::NegativeInf => r > half,
        RoundingMode::SymmetricInf => r > half || (r == half && q >= 0),
        RoundingMode::SymmetricZero => r > half || (r == half && q < 0),
        RoundingMode::ConvEven => r > half || (r == half && q & 1 == 1),
        RoundingMode::ConvOdd => r > half || (r == half && q & 1 == 0),
    };
    // q is at most i128::MAX >> 1
    q + up as i128
}

/// Sign-extends the low `bits` bits of `v`.
pub fn wrap_bits(v: i128, bits: u32) -> i128 {
    if bits >= 128 {
        return v;
    }
    let s: u32 = 128 - bits;
    (v << s) >> s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srs_rounding_modes() {
        // 5 / 2 = 2.5 and -5 / 2 = -2.5
        let cases: [(RoundingMode, i128, i128); 8] = [
            (RoundingMode::Floor, 2, -3),
            (RoundingMode::Ceil, 3, -2),
            (RoundingMode::PositiveInf, 3, -2),
            (RoundingMode::NegativeInf, 2, -3),
            (RoundingMode::SymmetricInf, 3, -3),
            (RoundingMode::SymmetricZero, 2, -2),
            (RoundingMode::ConvEven, 2, -2),
            (RoundingMode::ConvOdd, 3, -3),
        ];
        for (mode, pos, neg) in cases {
            assert_eq!(srs(5, 1, mode), pos, "{mode:?}");
            assert_eq!(srs(-5, 1, mode), neg, "{mode:?}");
        }
        assert_eq!(srs(7, 2, RoundingMode::ConvEven), 2);
        assert_eq!(srs(-7, 2, RoundingMode::Ceil), -1);
    }

    #[test]
    fn srs_accepts_extreme_inputs() {
        let modes: [RoundingMode; 8] = [
            RoundingMode::Floor,
            RoundingMode::Ceil,
            RoundingMode::PositiveInf,
            RoundingMode::NegativeInf,
            RoundingMode::SymmetricInf,
            RoundingMode::SymmetricZero,
            RoundingMode::ConvEven,
            RoundingMode::ConvOdd,
        ];
        for mode in modes {
            let top: i128 = srs(i128::MAX, 63, mode);
            assert!(top == i128::MAX >> 63 || top == (i128::MAX >> 63) + 1, "{mode:?}");
            let bottom: i128 = srs(i128::MIN, 63, mode);
            assert_eq!(bottom, i128::MIN >> 63, "{mode:?}");
        }
    }

    #[test]
    fn guard_restores_on_drop() {
        assert_eq!(rounding(), RoundingMode::Floor);
        assert_eq!(saturation(), SaturationMode::Saturate);
        {
            let _guard: ModeGuard = ModeGuard::new(RoundingMode::ConvEven, SaturationMode::None);
            assert_eq!(rounding(), RoundingMode::ConvEven);
            assert_eq!(saturation(), SaturationMode::None);
            {
                let _inner: ModeGuard = ModeGuard::saturation(SaturationMode::Symmetric);
                assert_eq!(saturation(), SaturationMode::Symmetric);
                assert_eq!(rounding(), RoundingMode::ConvEven);
            }
            assert_eq!(saturation(), SaturationMode::None);
        }
        assert_eq!(rounding(), RoundingMode::Floor);
        assert_eq!(saturation(), SaturationMode::Saturate);
    }

    #[test]
    fn guard_restores_on_unwind() {
        let res = std::panic::catch_unwind(|| {
            let _guard: ModeGuard = ModeGuard::rounding(RoundingMode::Ceil);
            panic!("unwinding through the guard");
        });
        assert!(res.is_err());
        assert_eq!(rounding(), RoundingMode::Floor);
    }

    #[test]
    fn wrap_bits_sign_extends() {
        assert_eq!(wrap_bits(0x80, 8), -128);
        assert_eq!(wrap_bits(0x7F, 8), 127);
        assert_eq!(wrap_bits(1 << 48, 48), 0);
    }
}
