use crate::{
    layouts::{AccLane, Accum, AccumTag, Engine, Generation, Multiply, SlidingMul, Vector},
    oep::SlidingMulImpl,
    source::Source,
    test_suite::SmallLane,
};

#[allow(clippy::too_many_arguments)]
fn naive<TC, TD, A, const LANES: usize, const NC: usize, const ND: usize>(
    coeff: &Vector<TC, NC>,
    coeff_start: usize,
    coeff_step: usize,
    data: &Vector<TD, ND>,
    data_start: i64,
    data_step_x: usize,
    data_step_y: usize,
    points: usize,
) -> Accum<A, LANES>
where
    TC: SmallLane + Multiply<TD, A::Lane>,
    TD: SmallLane,
    A: AccumTag,
{
    Accum::from_fn(|l| {
        (0..points).fold(A::Lane::default(), |sum, p| {
            let c: TC = coeff.get((coeff_start + p * coeff_step) % NC);
            let d: i64 = data_start + (l * data_step_y + p * data_step_x) as i64;
            sum.acc_add(c.mul_lane(data.get(d.rem_euclid(ND as i64) as usize)))
        })
    })
}

/// `mul`, `mac` and `negmul` of one sliding pattern against a direct sum,
/// from starting points that wrap in both directions.
pub fn test_sliding_mul<
    G,
    TC,
    TD,
    A,
    const LANES: usize,
    const POINTS: usize,
    const COEFF_STEP: usize,
    const DATA_STEP_X: usize,
    const DATA_STEP_Y: usize,
    const NC: usize,
    const ND: usize,
>(
    _engine: &Engine<G>,
) where
    G: Generation + SlidingMulImpl<TC, TD, A>,
    TC: SmallLane + Multiply<TD, A::Lane>,
    TD: SmallLane,
    A: AccumTag,
{
    let mut source: Source = Source::new([33u8; 32]);
    let coeff: Vector<TC, NC> = Vector::from_fn(|_| TC::small(&mut source));
    let data: Vector<TD, ND> = Vector::from_fn(|_| TD::small(&mut source));

    for (coeff_start, data_start) in [(0, 0), (3, -5), (NC + 1, ND as i64 + 2)] {
        let what: String = format!(
            "{}x{} {} lanes {LANES} points {POINTS} steps ({COEFF_STEP}, {DATA_STEP_X}, {DATA_STEP_Y}) from ({coeff_start}, {data_start})",
            TC::NAME,
            TD::NAME,
            A::NAME
        );
        let want: Accum<A, LANES> = naive(
            &coeff,
            coeff_start,
            COEFF_STEP,
            &data,
            data_start,
            DATA_STEP_X,
            DATA_STEP_Y,
            POINTS,
        );

        let have: Accum<A, LANES> = SlidingMul::<G, TC, TD, A, LANES, POINTS, COEFF_STEP, DATA_STEP_X, DATA_STEP_Y>::mul(
            &coeff,
            coeff_start,
            &data,
            data_start,
        );
        assert_eq!(have, want, "{what}: mul");

        let acc: Accum<A, LANES> = SlidingMul::<G, TC, TD, A, LANES, POINTS, COEFF_STEP, DATA_STEP_X, DATA_STEP_Y>::mac(
            &want,
            &coeff,
            coeff_start,
            &data,
            data_start,
        );
        assert_eq!(acc, want.add(&want), "{what}: mac");

        let neg: Accum<A, LANES> = SlidingMul::<G, TC, TD, A, LANES, POINTS, COEFF_STEP, DATA_STEP_X, DATA_STEP_Y>::negmul(
            &coeff,
            coeff_start,
            &data,
            data_start,
        );
        assert_eq!(neg, want.neg(), "{what}: negmul");
    }
}
