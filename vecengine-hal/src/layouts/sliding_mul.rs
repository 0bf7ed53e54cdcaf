use std::marker::PhantomData;

use crate::{
    layouts::{Accum, AccumTag, DefaultAccum, Element, Generation, Multiply, Vector},
    oep::SlidingMulImpl,
};

/// Index pattern of one native sliding multiply.
///
/// Output lane `l` sums, for `p < points`,
/// `coeff[coeff_start + p * coeff_step] * data[data_start + l * data_step_y + p * data_step_x]`.
/// Coefficient indices wrap at the coefficient count and data indices wrap,
/// in both directions, at the data count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlidingPattern {
    pub points: usize,
    pub coeff_step: usize,
    pub data_step_x: usize,
    pub data_step_y: usize,
    pub coeff_start: usize,
    pub data_start: i64,
}

/// Sliding multiply of `LANES` outputs over `POINTS` products each, with
/// coefficients `TC`, data `TD` and accumulation in `A`: the FIR and
/// correlation pattern of [SlidingPattern].
///
/// Only the coefficient, data and accumulator combinations generation `G`
/// declares through [SlidingMulImpl] compile. Lanes beyond the native lane
/// count and points beyond the native point count are split into several
/// native calls.
#[derive(Clone, Copy, Debug)]
pub struct SlidingMul<
    G,
    TC,
    TD,
    A,
    const LANES: usize,
    const POINTS: usize,
    const COEFF_STEP: usize = 1,
    const DATA_STEP_X: usize = 1,
    const DATA_STEP_Y: usize = 1,
> {
    _phantom: PhantomData<fn() -> (G, TC, TD, A)>,
}

impl<
    G,
    TC,
    TD,
    A,
    const LANES: usize,
    const POINTS: usize,
    const COEFF_STEP: usize,
    const DATA_STEP_X: usize,
    const DATA_STEP_Y: usize,
> SlidingMul<G, TC, TD, A, LANES, POINTS, COEFF_STEP, DATA_STEP_X, DATA_STEP_Y>
where
    G: Generation + SlidingMulImpl<TC, TD, A>,
    TC: Element + Multiply<TD, A::Lane>,
    TD: Element,
    A: AccumTag,
{
    pub const LANES: usize = LANES;
    pub const POINTS: usize = POINTS;

    const SHAPE_OK: () = {
        assert!(LANES > 0 && POINTS > 0, "sliding multiply needs at least one lane and one point");
        assert!(
            COEFF_STEP > 0 && DATA_STEP_X > 0 && DATA_STEP_Y > 0,
            "sliding multiply steps must be positive"
        );
        assert!(
            G::NATIVE_LANES > 0 && G::NATIVE_POINTS > 0,
            "generation declares an empty native sliding multiply"
        );
    };

    /// `acc[l] = sum_p coeff[..] * data[..]`.
    pub fn mul<const NC: usize, const ND: usize>(
        coeff: &Vector<TC, NC>,
        coeff_start: usize,
        data: &Vector<TD, ND>,
        data_start: i64,
    ) -> Accum<A, LANES> {
        let mut lanes: [A::Lane; LANES] = [A::Lane::default(); LANES];
        Self::run(coeff, coeff_start, data, data_start, false, &mut lanes);
        Accum::from_lanes(lanes)
    }

    /// `acc[l] + sum_p coeff[..] * data[..]`.
    pub fn mac<const NC: usize, const ND: usize>(
        acc: &Accum<A, LANES>,
        coeff: &Vector<TC, NC>,
        coeff_start: usize,
        data: &Vector<TD, ND>,
        data_start: i64,
    ) -> Accum<A, LANES> {
        let mut lanes: [A::Lane; LANES] = *acc.lanes();
        Self::run(coeff, coeff_start, data, data_start, true, &mut lanes);
        Accum::from_lanes(lanes)
    }

    /// `-sum_p coeff[..] * data[..]`.
    pub fn negmul<const NC: usize, const ND: usize>(
        coeff: &Vector<TC, NC>,
        coeff_start: usize,
        data: &Vector<TD, ND>,
        data_start: i64,
    ) -> Accum<A, LANES> {
        Self::mul(coeff, coeff_start, data, data_start).neg()
    }

    fn run<const NC: usize, const ND: usize>(
        coeff: &Vector<TC, NC>,
        coeff_start: usize,
        data: &Vector<TD, ND>,
        data_start: i64,
        accumulate: bool,
        lanes: &mut [A::Lane; LANES],
    ) {
        let () = Self::SHAPE_OK;
        let (native_lanes, native_points) = (G::NATIVE_LANES, G::NATIVE_POINTS);
        for (chunk, out) in lanes.chunks_mut(native_lanes).enumerate() {
            let first_lane: usize = chunk * native_lanes;
            for p0 in (0..POINTS).step_by(native_points) {
                let pattern: SlidingPattern = SlidingPattern {
                    points: native_points.min(POINTS - p0),
                    coeff_step: COEFF_STEP,
                    data_step_x: DATA_STEP_X,
                    data_step_y: DATA_STEP_Y,
                    coeff_start: coeff_start + p0 * COEFF_STEP,
                    data_start: data_start + (first_lane * DATA_STEP_Y + p0 * DATA_STEP_X) as i64,
                };
                G::sliding_mac_impl(&pattern, coeff.as_slice(), data.as_slice(), accumulate || p0 > 0, out);
            }
        }
    }
}

/// Sliding multiply accumulating in the default precision of `G` for
/// `TC x TD`, with unit steps.
pub type DefaultSlidingMul<G, TC, TD, const LANES: usize, const POINTS: usize> =
    SlidingMul<G, TC, TD, <G as DefaultAccum<TC, TD>>::Tag, LANES, POINTS>;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{
        layouts::{Acc48, Arch},
        reference::sliding_mul::sliding_mul_ref,
    };

    thread_local! {
        static CALLS: RefCell<Vec<SlidingPattern>> = const { RefCell::new(Vec::new()) };
    }

    #[derive(Clone, Copy, Debug, Default)]
    struct Recording;

    impl Generation for Recording {
        const ARCH: Arch = Arch::Gen1;
        const NATIVE_VECTOR_BITS: usize = 256;
        const NATIVE_REDUCE: bool = false;
    }

    unsafe impl SlidingMulImpl<i16, i16, Acc48> for Recording {
        const NATIVE_LANES: usize = 4;
        const NATIVE_POINTS: usize = 2;

        fn sliding_mac_impl(pattern: &SlidingPattern, coeff: &[i16], data: &[i16], accumulate: bool, res: &mut [i128]) {
            CALLS.with(|c| c.borrow_mut().push(*pattern));
            sliding_mul_ref(pattern, coeff, data, accumulate, 48, res);
        }
    }

    #[test]
    fn lanes_and_points_split_into_native_calls() {
        let coeff: Vector<i16, 8> = Vector::from_fn(|i| i as i16 + 1);
        let data: Vector<i16, 16> = Vector::from_fn(|i| 10 * i as i16);
        let acc: Accum<Acc48, 8> = SlidingMul::<Recording, i16, i16, Acc48, 8, 3, 1, 1, 2>::mul(&coeff, 1, &data, -1);

        let calls: Vec<SlidingPattern> = CALLS.with(|c| std::mem::take(&mut *c.borrow_mut()));
        let starts: Vec<(usize, usize, i64)> = calls.iter().map(|p| (p.points, p.coeff_start, p.data_start)).collect();
        // two lane blocks of 4, each as 2 + 1 points
        assert_eq!(starts, [(2, 1, -1), (1, 3, 1), (2, 1, 7), (1, 3, 9)]);

        for l in 0..8 {
            let want: i128 = (0..3)
                .map(|p| {
                    let d: i64 = (-1 + 2 * l as i64 + p as i64).rem_euclid(16);
                    (p as i128 + 2) * 10 * d as i128
                })
                .sum();
            assert_eq!(acc.get(l), want, "lane {l}");
        }
    }
}
