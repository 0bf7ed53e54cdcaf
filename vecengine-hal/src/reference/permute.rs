use crate::layouts::Element;

#[inline(always)]
pub fn reverse_ref<T: Element>(a: &[T], res: &mut [T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = a[n - 1 - i];
    }
}

#[inline(always)]
pub fn broadcast_ref<T: Element>(value: T, res: &mut [T]) {
    res.iter_mut().for_each(|x| *x = value);
}

#[inline(always)]
pub fn select_ref<T: Element>(a: &[T], b: &[T], mask: u64, res: &mut [T]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert_eq!(res.len(), b.len());
        assert!(res.len() <= 64);
    }

    let n: usize = res.len();
    for i in 0..n {
        res[i] = if (mask >> i) & 1 == 1 { b[i] } else { a[i] };
    }
}

/// Interleaves `a` and `b` in chunks of `step` lanes: the first half of the
/// interleaved sequence goes to `lo`, the second to `hi`.
pub fn interleave_zip_ref<T: Element>(a: &[T], b: &[T], step: usize, lo: &mut [T], hi: &mut [T]) {
    let n: usize = a.len();

    #[cfg(debug_assertions)]
    {
        assert_eq!(b.len(), n);
        assert_eq!(lo.len(), n);
        assert_eq!(hi.len(), n);
        assert!(step > 0 && n % step == 0, "invalid step {step} for {n} lanes");
    }

    for i in 0..2 * n {
        let chunk: usize = i / step;
        let src: &[T] = if chunk % 2 == 0 { a } else { b };
        let x: T = src[(chunk / 2) * step + i % step];
        if i < n { lo[i] = x } else { hi[i - n] = x }
    }
}

/// Inverse of [interleave_zip_ref].
pub fn interleave_unzip_ref<T: Element>(lo: &[T], hi: &[T], step: usize, a: &mut [T], b: &mut [T]) {
    let n: usize = lo.len();

    #[cfg(debug_assertions)]
    {
        assert_eq!(hi.len(), n);
        assert_eq!(a.len(), n);
        assert_eq!(b.len(), n);
        assert!(step > 0 && n % step == 0, "invalid step {step} for {n} lanes");
    }

    for i in 0..2 * n {
        let x: T = if i < n { lo[i] } else { hi[i - n] };
        let chunk: usize = i / step;
        let dst: usize = (chunk / 2) * step + i % step;
        if chunk % 2 == 0 { a[dst] = x } else { b[dst] = x }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_picks_b_on_set_bits() {
        let a: [u8; 4] = [1, 2, 3, 4];
        let b: [u8; 4] = [10, 20, 30, 40];
        let mut res: [u8; 4] = [0; 4];
        select_ref(&a, &b, 0b0110, &mut res);
        assert_eq!(res, [1, 20, 30, 4]);
        reverse_ref(&a, &mut res);
        assert_eq!(res, [4, 3, 2, 1]);
    }

    #[test]
    fn zip_then_unzip() {
        let a: [i32; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
        let b: [i32; 8] = [10, 11, 12, 13, 14, 15, 16, 17];
        let (mut lo, mut hi) = ([0; 8], [0; 8]);
        interleave_zip_ref(&a, &b, 2, &mut lo, &mut hi);
        assert_eq!(lo, [0, 1, 10, 11, 2, 3, 12, 13]);
        assert_eq!(hi, [4, 5, 14, 15, 6, 7, 16, 17]);
        let (mut x, mut y) = ([0; 8], [0; 8]);
        interleave_unzip_ref(&lo, &hi, 2, &mut x, &mut y);
        assert_eq!(x, a);
        assert_eq!(y, b);
    }
}
