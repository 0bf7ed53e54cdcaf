use crate::layouts::{BitwiseOp, Integral};

#[inline(always)]
pub fn bitwise_ref<T: Integral>(op: BitwiseOp, a: &[T], b: &[T], res: &mut [T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        let (x, y) = (a[i].to_i128(), b[i].to_i128());
        res[i] = T::from_i128(match op {
            BitwiseOp::And => x & y,
            BitwiseOp::Or => x | y,
            BitwiseOp::Xor => x ^ y,
        });
    }
}

#[inline(always)]
pub fn not_ref<T: Integral>(a: &[T], res: &mut [T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = T::from_i128(!a[i].to_i128());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::I4;

    #[test]
    fn bitwise_matches_native_operators() {
        let a: [i16; 4] = [0x0F0F, -1, 0, i16::MIN];
        let b: [i16; 4] = [0x00FF, 0x1234, -1, -1];
        let mut res: [i16; 4] = [0; 4];
        bitwise_ref(BitwiseOp::And, &a, &b, &mut res);
        assert_eq!(res, [0x000F, 0x1234, 0, i16::MIN]);
        bitwise_ref(BitwiseOp::Xor, &a, &b, &mut res);
        assert_eq!(res, [0x0FF0, !0x1234, -1, i16::MAX]);
        not_ref(&a, &mut res);
        assert_eq!(res, [!0x0F0F, 0, -1, i16::MAX]);
    }

    #[test]
    fn nibble_not_stays_in_range() {
        let a: [I4; 2] = [I4::new(0), I4::new(-8)];
        let mut res: [I4; 2] = [I4::default(); 2];
        not_ref(&a, &mut res);
        assert_eq!(res, [I4::new(-1), I4::new(7)]);
    }
}
