use crate::layouts::{AccLane, Multiply, SlidingPattern};

/// One native sliding multiply: `res[l]` becomes the sum over
/// `p < pattern.points` of `coeff[(coeff_start + p * coeff_step) % NC]`
/// times `data[(data_start + l * data_step_y + p * data_step_x) mod ND]`,
/// added to its previous value when `accumulate` is set, then wrapped at
/// `bits`.
pub fn sliding_mul_ref<TC, TD, L>(
    pattern: &SlidingPattern,
    coeff: &[TC],
    data: &[TD],
    accumulate: bool,
    bits: u32,
    res: &mut [L],
) where
    TC: Multiply<TD, L> + Copy,
    TD: Copy,
    L: AccLane,
{
    let (nc, nd) = (coeff.len(), data.len() as i64);
    for (l, out) in res.iter_mut().enumerate() {
        let mut sum: L = if accumulate { *out } else { L::default() };
        for p in 0..pattern.points {
            let c: TC = coeff[(pattern.coeff_start + p * pattern.coeff_step) % nc];
            let d: i64 = pattern.data_start + (l * pattern.data_step_y + p * pattern.data_step_x) as i64;
            sum = sum.acc_add(c.mul_lane(data[d.rem_euclid(nd) as usize]));
        }
        *out = sum.wrap(bits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(points: usize, coeff_start: usize, data_start: i64) -> SlidingPattern {
        SlidingPattern {
            points,
            coeff_step: 1,
            data_step_x: 1,
            data_step_y: 1,
            coeff_start,
            data_start,
        }
    }

    #[test]
    fn fir_taps() {
        let coeff: [i16; 4] = [1, 2, 3, 4];
        let data: [i16; 8] = [1, 0, 0, 0, 0, 0, 0, 0];
        let mut res: [i128; 4] = [0; 4];
        // an impulse walks the taps backwards
        sliding_mul_ref(&pattern(4, 0, -3), &coeff, &data, false, 48, &mut res);
        assert_eq!(res, [4, 3, 2, 1]);
        sliding_mul_ref(&pattern(4, 0, -3), &coeff, &data, true, 48, &mut res);
        assert_eq!(res, [8, 6, 4, 2]);
    }

    #[test]
    fn starts_and_steps_wrap() {
        let coeff: [i32; 2] = [1, 100];
        let data: [i32; 4] = [1, 2, 3, 4];
        let mut res: [i128; 2] = [0; 2];
        let p: SlidingPattern = SlidingPattern {
            points: 2,
            coeff_step: 1,
            data_step_x: 2,
            data_step_y: 3,
            coeff_start: 3,
            data_start: 5,
        };
        sliding_mul_ref(&p, &coeff, &data, false, 80, &mut res);
        // lane 0: c[1] * d[1] + c[0] * d[3]; lane 1: c[1] * d[0] + c[0] * d[2]
        assert_eq!(res, [100 * 2 + 4, 100 + 3]);
    }

    #[test]
    fn sums_wrap_at_storage_width() {
        let coeff: [i32; 1] = [i32::MAX];
        let data: [i32; 1] = [i32::MAX];
        let mut res: [i128; 1] = [0];
        sliding_mul_ref(&pattern(1, 0, 0), &coeff, &data, false, 32, &mut res);
        assert_eq!(res, [1]);
    }
}
