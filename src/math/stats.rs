//! Population z-score primitives and the weighted penalty combiner.
//!
//! All scoring pipelines penalize one tail only: a value on the healthy
//! side of the population mean contributes nothing.

/// Population reference for one marker.
#[derive(Debug, Clone, Copy)]
pub struct MarkerStat {
    pub mean: f64,
    pub sd: f64,
}

/// Standard deviations above the mean, clipped at zero. For markers where
/// only high values are unhealthy.
pub fn upper_tail_z(value: f64, stat: MarkerStat) -> f64 {
    ((value - stat.mean) / stat.sd).max(0.0)
}

/// Standard deviations below the mean, as a non-negative penalty. For
/// markers where only low values are unhealthy.
pub fn lower_tail_z(value: f64, stat: MarkerStat) -> f64 {
    ((value - stat.mean) / stat.sd).min(0.0).abs()
}

/// Accumulated weighted penalty over the markers that resolved.
#[derive(Debug, Clone, Copy)]
pub struct PenaltySum {
    pub penalty: f64,
    pub weight_used: f64,
    pub markers_used: u32,
}

pub fn weighted_penalty(terms: &[(f64, Option<f64>)]) -> PenaltySum {
    let mut out = PenaltySum {
        penalty: 0.0,
        weight_used: 0.0,
        markers_used: 0,
    };
    for &(weight, z) in terms {
        if let Some(z) = z {
            out.penalty += weight * z;
            out.weight_used += weight;
            out.markers_used += 1;
        }
    }
    out
}

/// 100 minus the scaled penalty, clamped to [0, 100] and rounded to one
/// decimal place.
pub fn score_from_penalty(penalty: f64, severity_scale: f64) -> f64 {
    let score = (100.0 - severity_scale * penalty).min(100.0).max(0.0);
    round1(score)
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
