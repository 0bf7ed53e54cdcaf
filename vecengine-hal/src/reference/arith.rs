use crate::layouts::{Additive, ArithOp, Integral, RoundingMode, SaturationMode, srs};

/// Upshift by `up` into an accumulator, then shift-round-saturate by `down`.
#[inline(always)]
pub fn shift_ref<T: Integral>(a: &[T], up: u32, down: u32, rnd: RoundingMode, sat: SaturationMode, res: &mut [T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert!(up < 64 && down < 64, "shift out of range: up={up} down={down}");
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = T::narrow(srs(a[i].to_i128() << up, down, rnd), sat);
    }
}

#[inline(always)]
pub fn arith_ref<T: Additive>(op: ArithOp, a: &[T], b: &[T], res: &mut [T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = match op {
            ArithOp::Add => a[i].lane_add(b[i]),
            ArithOp::Sub => a[i].lane_sub(b[i]),
        };
    }
}

#[inline(always)]
pub fn neg_ref<T: Additive>(a: &[T], res: &mut [T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = a[i].lane_neg();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::CInt16;

    #[test]
    fn shift_saturates_and_rounds() {
        let a: [i16; 4] = [1000, -1000, 3, -3];
        let mut res: [i16; 4] = [0; 4];
        shift_ref(&a, 6, 0, RoundingMode::Floor, SaturationMode::Saturate, &mut res);
        assert_eq!(res, [i16::MAX, i16::MIN, 192, -192]);
        shift_ref(&a, 0, 1, RoundingMode::SymmetricInf, SaturationMode::Saturate, &mut res);
        assert_eq!(res, [500, -500, 2, -2]);
        shift_ref(&a, 0, 1, RoundingMode::Floor, SaturationMode::Saturate, &mut res);
        assert_eq!(res, [500, -500, 1, -2]);
        shift_ref(&a, 6, 0, RoundingMode::Floor, SaturationMode::None, &mut res);
        assert_eq!(res[0], (1000i32 << 6) as i16);
    }

    #[test]
    fn add_wraps_per_component() {
        let a: [CInt16; 2] = [CInt16::new(i16::MAX, 1), CInt16::new(-5, 7)];
        let b: [CInt16; 2] = [CInt16::new(1, 1), CInt16::new(5, -7)];
        let mut res: [CInt16; 2] = [CInt16::default(); 2];
        arith_ref(ArithOp::Add, &a, &b, &mut res);
        assert_eq!(res, [CInt16::new(i16::MIN, 2), CInt16::new(0, 0)]);
        neg_ref(&b, &mut res);
        assert_eq!(res, [CInt16::new(-1, -1), CInt16::new(-5, 7)]);
    }
}
