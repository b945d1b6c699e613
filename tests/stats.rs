use wellscore::math::stats::{
    lower_tail_z, round1, score_from_penalty, upper_tail_z, weighted_penalty, MarkerStat,
};

const STAT: MarkerStat = MarkerStat { mean: 2.0, sd: 0.5 };

#[test]
fn upper_tail_ignores_healthy_side() {
    assert_eq!(upper_tail_z(1.0, STAT), 0.0);
    assert_eq!(upper_tail_z(2.0, STAT), 0.0);
    assert!((upper_tail_z(3.0, STAT) - 2.0).abs() < 1e-9);
}

#[test]
fn lower_tail_ignores_healthy_side() {
    assert_eq!(lower_tail_z(3.0, STAT), 0.0);
    assert_eq!(lower_tail_z(2.0, STAT), 0.0);
    assert!((lower_tail_z(1.0, STAT) - 2.0).abs() < 1e-9);
}

#[test]
fn weighted_penalty_skips_missing_terms() {
    let terms = [(0.4, Some(1.0)), (0.3, None), (0.3, Some(2.0))];
    let sum = weighted_penalty(&terms);
    assert!((sum.penalty - 1.0).abs() < 1e-9);
    assert!((sum.weight_used - 0.7).abs() < 1e-9);
    assert_eq!(sum.markers_used, 2);
}

#[test]
fn weighted_penalty_empty() {
    let sum = weighted_penalty(&[]);
    assert_eq!(sum.penalty, 0.0);
    assert_eq!(sum.weight_used, 0.0);
    assert_eq!(sum.markers_used, 0);
}

#[test]
fn score_is_clamped_and_rounded() {
    assert_eq!(score_from_penalty(0.0, 15.0), 100.0);
    // 100 - 18 * 0.35 = 93.7
    assert!((score_from_penalty(0.35, 18.0) - 93.7).abs() < 1e-9);
    // Penalty larger than the scale allows floors at zero.
    assert_eq!(score_from_penalty(10.0, 22.0), 0.0);
    // Negative penalties cannot push past 100.
    assert_eq!(score_from_penalty(-1.0, 15.0), 100.0);
}

#[test]
fn round1_one_decimal() {
    assert!((round1(78.86296) - 78.9).abs() < 1e-9);
    assert!((round1(94.7125) - 94.7).abs() < 1e-9);
    assert_eq!(round1(100.0), 100.0);
}
