use crate::layouts::{Additive, Element, MaxMinOp, Ordered};

/// Horizontal max or min of the first `len` lanes.
#[inline(always)]
pub fn reduce_max_min_ref<T: Ordered>(op: MaxMinOp, a: &[T], len: usize) -> T {
    debug_assert!(len > 0 && len <= a.len());
    a[1..len].iter().fold(a[0], |acc, x| match op {
        MaxMinOp::Max => acc.lane_max(*x),
        MaxMinOp::Min => acc.lane_min(*x),
    })
}

/// Horizontal sum of the first `len` lanes.
#[inline(always)]
pub fn reduce_add_ref<T: Additive>(a: &[T], len: usize) -> T {
    debug_assert!(len > 0 && len <= a.len());
    a[1..len].iter().fold(a[0], |acc, x| acc.lane_add(*x))
}

/// Reduces the first `len` lanes of a native register by repeatedly
/// combining its upper half into its lower half with the full-width binary
/// primitive `combine`.
pub fn reduce_halving_ref<T: Element>(a: &[T], len: usize, mut combine: impl FnMut(&[T], &[T], &mut [T])) -> T {
    const MAX_LANES: usize = 64;
    let nat: usize = a.len();
    debug_assert!(nat <= MAX_LANES && len > 0 && len <= nat);

    let mut cur: [T; MAX_LANES] = [T::default(); MAX_LANES];
    let mut upper: [T; MAX_LANES] = [T::default(); MAX_LANES];
    let mut res: [T; MAX_LANES] = [T::default(); MAX_LANES];
    cur[..nat].copy_from_slice(a);

    let mut len: usize = len;
    while len > 1 {
        let half: usize = len / 2;
        upper[..half].copy_from_slice(&cur[half..len]);
        combine(&cur[..nat], &upper[..nat], &mut res[..nat]);
        cur[..nat].copy_from_slice(&res[..nat]);
        len = half;
    }
    cur[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::compare::max_min_ref;

    #[test]
    fn halving_matches_horizontal() {
        let a: [i16; 16] = [3, -7, 12, 0, 5, 5, -1, 9, 100, -200, 4, 4, 8, 1, 2, 3];
        for len in [1, 2, 4, 8, 16] {
            let direct: i16 = reduce_max_min_ref(MaxMinOp::Max, &a, len);
            let halved: i16 = reduce_halving_ref(&a, len, |x, y, r| max_min_ref(MaxMinOp::Max, x, y, r));
            assert_eq!(direct, halved, "len={len}");
        }
        assert_eq!(reduce_max_min_ref(MaxMinOp::Min, &a, 16), -200);
        assert_eq!(reduce_add_ref(&a, 4), 8);
    }
}
