use crate::layouts::{CmpOp, Element, EqOp, MaxMinOp, Ordered};

#[inline(always)]
pub fn cmp_ref<T: Ordered>(op: CmpOp, a: &[T], b: &[T]) -> u64 {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), b.len());
        assert!(a.len() <= 64);
    }

    let mut bits: u64 = 0;
    for i in 0..a.len() {
        let (x, y) = (a[i], b[i]);
        let hit: bool = match op {
            CmpOp::Lt => x.lane_lt(y),
            CmpOp::Le => !y.lane_lt(x),
            CmpOp::Gt => y.lane_lt(x),
            CmpOp::Ge => !x.lane_lt(y),
        };
        bits |= (hit as u64) << i;
    }
    bits
}

#[inline(always)]
pub fn eq_ref<T: Element>(op: EqOp, a: &[T], b: &[T]) -> u64 {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), b.len());
        assert!(a.len() <= 64);
    }

    let mut bits: u64 = 0;
    for i in 0..a.len() {
        let hit: bool = match op {
            EqOp::Eq => a[i] == b[i],
            EqOp::Neq => a[i] != b[i],
        };
        bits |= (hit as u64) << i;
    }
    bits
}

#[inline(always)]
pub fn max_min_ref<T: Ordered>(op: MaxMinOp, a: &[T], b: &[T], res: &mut [T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = match op {
            MaxMinOp::Max => a[i].lane_max(b[i]),
            MaxMinOp::Min => a[i].lane_min(b[i]),
        };
    }
}

/// `max` flags the lanes where `a < b`, `min` the lanes where `a >= b`.
pub fn max_min_cmp_ref<T: Ordered>(op: MaxMinOp, a: &[T], b: &[T], res: &mut [T]) -> u64 {
    max_min_ref(op, a, b, res);
    match op {
        MaxMinOp::Max => cmp_ref(CmpOp::Lt, a, b),
        MaxMinOp::Min => cmp_ref(CmpOp::Ge, a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::Bf16;

    #[test]
    fn compare_bits_follow_lane_order() {
        let a: [i8; 4] = [1, 5, -3, 7];
        let b: [i8; 4] = [2, 5, -4, 7];
        assert_eq!(cmp_ref(CmpOp::Lt, &a, &b), 0b0001);
        assert_eq!(cmp_ref(CmpOp::Le, &a, &b), 0b1011);
        assert_eq!(cmp_ref(CmpOp::Gt, &a, &b), 0b0100);
        assert_eq!(cmp_ref(CmpOp::Ge, &a, &b), 0b1110);
        assert_eq!(eq_ref(EqOp::Eq, &a, &b), 0b1010);
        assert_eq!(eq_ref(EqOp::Neq, &a, &b), 0b0101);
    }

    #[test]
    fn max_min_flags() {
        let a: [Bf16; 3] = [Bf16::from_f32(1.0), Bf16::from_f32(-2.0), Bf16::from_f32(3.0)];
        let b: [Bf16; 3] = [Bf16::from_f32(2.0), Bf16::from_f32(-2.0), Bf16::from_f32(0.5)];
        let mut res: [Bf16; 3] = [Bf16::default(); 3];
        assert_eq!(max_min_cmp_ref(MaxMinOp::Max, &a, &b, &mut res), 0b001);
        assert_eq!(res.map(|x| x.to_f32()), [2.0, -2.0, 3.0]);
        assert_eq!(max_min_cmp_ref(MaxMinOp::Min, &a, &b, &mut res), 0b110);
        assert_eq!(res.map(|x| x.to_f32()), [1.0, -2.0, 0.5]);
    }
}
