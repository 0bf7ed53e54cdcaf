use crate::layouts::{AccLane, Multiply};

/// One accumulator register of a tile product: the `rows x cols` outputs of
/// a row-major `rows x k` block `a` times a row-major `k x cols` block `b`.
/// Output `i` sits at `reg[i * stride]`. Its products are summed over `k`
/// in order, added to the previous value when `accumulate` is set, then
/// wrapped at `bits`.
pub fn mmul_block_ref<TA, TB, L>(k: usize, a: &[TA], b: &[TB], accumulate: bool, bits: u32, reg: &mut [L], stride: usize)
where
    TA: Multiply<TB, L> + Copy,
    TB: Copy,
    L: AccLane,
{
    let rows: usize = a.len() / k;
    let cols: usize = b.len() / k;

    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), rows * k);
        assert_eq!(b.len(), k * cols);
        assert!(stride > 0);
        assert!(reg.len() > (rows * cols - 1) * stride);
    }

    for row in 0..rows {
        for col in 0..cols {
            let mut sum: L = a[row * k].mul_lane(b[col]);
            for i in 1..k {
                sum = sum.acc_add(a[row * k + i].mul_lane(b[i * cols + col]));
            }
            let idx: usize = (row * cols + col) * stride;
            if accumulate {
                sum = reg[idx].acc_add(sum);
            }
            reg[idx] = sum.wrap(bits);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::CFloat;

    #[test]
    fn integer_product_wraps_at_storage_width() {
        // [1 2; 3 4] * [5 6; 7 8]
        let a: [i16; 4] = [1, 2, 3, 4];
        let b: [i16; 4] = [5, 6, 7, 8];
        let mut reg: [i128; 4] = [0; 4];
        mmul_block_ref(2, &a, &b, false, 32, &mut reg, 1);
        assert_eq!(reg, [19, 22, 43, 50]);
        mmul_block_ref(2, &a, &b, true, 32, &mut reg, 1);
        assert_eq!(reg, [38, 44, 86, 100]);

        let big: [i32; 1] = [i32::MAX];
        let mut reg: [i128; 1] = [0];
        mmul_block_ref(1, &big, &big, false, 32, &mut reg, 1);
        assert_eq!(reg[0], 1);
    }

    #[test]
    fn strided_register_skips_lanes() {
        let a: [i16; 2] = [1, 2];
        let b: [i16; 4] = [1, 10, 100, 1000];
        let mut reg: [i128; 4] = [-1; 4];
        mmul_block_ref(2, &a, &b, false, 48, &mut reg, 2);
        assert_eq!(reg, [201, -1, 2010, -1]);
    }

    #[test]
    fn complex_product() {
        let a: [CFloat; 2] = [CFloat::new(1.0, 1.0), CFloat::new(0.0, 2.0)];
        let b: [CFloat; 2] = [CFloat::new(2.0, 0.0), CFloat::new(0.0, -1.0)];
        let mut reg: [CFloat; 1] = [CFloat::default()];
        mmul_block_ref(2, &a, &b, false, 64, &mut reg, 1);
        assert_eq!(reg[0], CFloat::new(4.0, 2.0));
    }
}
