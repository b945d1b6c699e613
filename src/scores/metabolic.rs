use tracing::debug;

use crate::math::stats::{score_from_penalty, upper_tail_z, weighted_penalty, MarkerStat};
use crate::panel::{find_marker, BiomarkerPanel};
use crate::schema::v1::{Level, MetabolicComponents, MetabolicScoreV1};

const GLUCOSE_ALIASES: &[&str] = &["fasting_glucose", "glucose", "blood_glucose"];
const INSULIN_ALIASES: &[&str] = &["fasting_insulin", "insulin"];
const TRIGLYCERIDES_ALIASES: &[&str] = &["triglycerides", "tg"];
const HDL_ALIASES: &[&str] = &["hdl_cholesterol", "hdl"];
const APOB_ALIASES: &[&str] = &["apob", "apo_b", "apolipoprotein_b"];
const APOA1_ALIASES: &[&str] = &["apoa1", "apo_a1", "apolipoprotein_a1"];
const HBA1C_ALIASES: &[&str] = &["hba1c", "a1c", "glycated_hemoglobin"];

const HOMA_IR_STAT: MarkerStat = MarkerStat { mean: 1.46, sd: 0.8 };
const TG_HDL_STAT: MarkerStat = MarkerStat { mean: 2.0, sd: 1.0 };
const APOB_A1_STAT: MarkerStat = MarkerStat { mean: 0.9, sd: 0.3 };
const HBA1C_STAT: MarkerStat = MarkerStat { mean: 5.3, sd: 0.4 };

const HOMA_IR_WEIGHT: f64 = 0.4;
const TG_HDL_WEIGHT: f64 = 0.3;
const APOB_A1_WEIGHT: f64 = 0.2;
const HBA1C_WEIGHT: f64 = 0.1;

const SEVERITY_SCALE: f64 = 15.0;

/// Metabolic efficiency score for a panel. Derives HOMA-IR, TG/HDL,
/// ApoB/ApoA1 and HbA1c, penalizes each for sitting above its population
/// mean and maps the weighted penalty onto 0-100. Returns `None` when
/// fewer than two of the four components can be derived.
pub fn compute_metabolic_score(panel: &BiomarkerPanel) -> Option<MetabolicScoreV1> {
    let components = extract_components(panel);
    if components.resolved() < 2 {
        debug!(
            resolved = components.resolved(),
            "metabolic score skipped, not enough markers"
        );
        return None;
    }

    let terms = [
        (
            HOMA_IR_WEIGHT,
            components.homa_ir.map(|v| upper_tail_z(v, HOMA_IR_STAT)),
        ),
        (
            TG_HDL_WEIGHT,
            components.tg_hdl_ratio.map(|v| upper_tail_z(v, TG_HDL_STAT)),
        ),
        (
            APOB_A1_WEIGHT,
            components.apob_a1_ratio.map(|v| upper_tail_z(v, APOB_A1_STAT)),
        ),
        (
            HBA1C_WEIGHT,
            components.hba1c.map(|v| upper_tail_z(v, HBA1C_STAT)),
        ),
    ];
    let sum = weighted_penalty(&terms);

    // Partial panels rescale the penalty by the weight actually used; the
    // other pipelines keep the raw weighted sum.
    let mut penalty = sum.penalty;
    if sum.weight_used > 0.0 && sum.weight_used < 1.0 {
        penalty /= sum.weight_used;
    }

    let score = score_from_penalty(penalty, SEVERITY_SCALE);
    let (level, description, summary) = interpret(score);
    debug!(score, markers_used = sum.markers_used, "metabolic score computed");

    Some(MetabolicScoreV1 {
        score,
        markers_used: sum.markers_used,
        level,
        description: description.to_string(),
        summary: summary.to_string(),
        components,
    })
}

/// Resolve and derive the four metabolic components from a raw panel.
pub fn extract_components(panel: &BiomarkerPanel) -> MetabolicComponents {
    let glucose = nonzero_magnitude(panel, GLUCOSE_ALIASES).map(glucose_mmol_l);
    let insulin = nonzero_magnitude(panel, INSULIN_ALIASES);
    let tg = nonzero_magnitude(panel, TRIGLYCERIDES_ALIASES).map(triglycerides_mg_dl);
    let hdl = nonzero_magnitude(panel, HDL_ALIASES).map(lipid_mg_dl);
    let apob = nonzero_magnitude(panel, APOB_ALIASES).map(lipid_mg_dl);
    let apoa1 = nonzero_magnitude(panel, APOA1_ALIASES).map(lipid_mg_dl);
    let hba1c = nonzero_magnitude(panel, HBA1C_ALIASES);

    let homa_ir = match (glucose, insulin) {
        (Some(glucose), Some(insulin)) => Some(glucose * insulin / 22.5),
        _ => None,
    };
    let tg_hdl_ratio = match (tg, hdl) {
        (Some(tg), Some(hdl)) => Some(tg / hdl),
        _ => None,
    };
    let apob_a1_ratio = match (apob, apoa1) {
        (Some(apob), Some(apoa1)) => Some(apob / apoa1),
        _ => None,
    };

    MetabolicComponents {
        homa_ir,
        tg_hdl_ratio,
        apob_a1_ratio,
        hba1c,
    }
}

// The metabolic markers ignore the unit token; magnitude heuristics in the
// conversion helpers separate the unit systems instead. A reading of
// exactly zero is treated as absent.
fn nonzero_magnitude(panel: &BiomarkerPanel, aliases: &[&str]) -> Option<f64> {
    find_marker(panel, aliases)
        .map(|m| m.value)
        .filter(|v| *v != 0.0)
}

/// Glucose in mmol/L. mg/dL readings always sit above 20; anything at or
/// below is already mmol/L.
pub fn glucose_mmol_l(value: f64) -> f64 {
    if value > 20.0 {
        value / 18.0
    } else {
        value
    }
}

/// Triglycerides in mg/dL. Readings under 10 are g/L and scale up by 100.
pub fn triglycerides_mg_dl(value: f64) -> f64 {
    if value < 10.0 {
        value * 100.0
    } else {
        value
    }
}

/// HDL, ApoB and ApoA1 in mg/dL. Readings under 5 are g/L and scale up
/// by 100.
pub fn lipid_mg_dl(value: f64) -> f64 {
    if value < 5.0 {
        value * 100.0
    } else {
        value
    }
}

pub fn interpret(score: f64) -> (Level, &'static str, &'static str) {
    if score >= 85.0 {
        (
            Level::Optimal,
            "Low fasting insulin, stable glucose, low TG/HDL, good ApoB/A1 ratio",
            "Your body efficiently maintains stable glucose and lipid levels with minimal \
             insulin. Excellent metabolic flexibility — your cells respond well to insulin \
             and energy balance is stable.",
        )
    } else if score >= 65.0 {
        (
            Level::Good,
            "Slightly elevated fasting insulin or TG/HDL ratio",
            "Your body is starting to require more insulin to maintain balance. Improving \
             sleep, stress management, and meal timing could help.",
        )
    } else {
        (
            Level::NeedsImprovement,
            "High insulin, high TG/HDL, elevated HbA1c and ApoB/A1 ratio",
            "Your metabolism is less efficient — your body needs more insulin to control \
             glucose, and lipid handling shows early resistance. This can precede \
             prediabetes or cardiovascular risk.",
        )
    }
}
