use tracing::debug;

use crate::math::stats::{score_from_penalty, upper_tail_z, weighted_penalty, MarkerStat};
use crate::panel::{find_marker, BiomarkerPanel};
use crate::schema::v1::{InflammationComponents, InflammationScoreV1, Level};

const HSCRP_ALIASES: &[&str] = &["hscrp", "hs_crp", "crp", "c_reactive_protein"];
const ESR_ALIASES: &[&str] = &["esr", "sed_rate", "sedimentation_rate"];
const FERRITIN_ALIASES: &[&str] = &["ferritin", "serum_ferritin"];
const WBC_ALIASES: &[&str] = &["wbc", "white_blood_cells", "leucocytes", "leukocytes"];

const HSCRP_WEIGHT: f64 = 0.40;
const ESR_WEIGHT: f64 = 0.25;
const FERRITIN_WEIGHT: f64 = 0.20;
const WBC_WEIGHT: f64 = 0.15;

const SEVERITY_SCALE: f64 = 18.0;

/// Population baselines for the inflammation markers. Menstruating women
/// run lower hsCRP, ESR and ferritin baselines, so the two profiles are
/// kept separate and selected per caller.
#[derive(Debug, Clone, Copy)]
pub struct InflammationRefs {
    pub hscrp: MarkerStat,
    pub esr: MarkerStat,
    pub ferritin: MarkerStat,
    pub wbc: MarkerStat,
}

impl InflammationRefs {
    pub fn premenopausal() -> Self {
        Self {
            hscrp: MarkerStat { mean: 0.8, sd: 0.8 },
            esr: MarkerStat { mean: 12.0, sd: 8.0 },
            ferritin: MarkerStat {
                mean: 35.0,
                sd: 20.0,
            },
            wbc: MarkerStat { mean: 6.5, sd: 2.0 },
        }
    }

    pub fn postmenopausal() -> Self {
        Self {
            hscrp: MarkerStat { mean: 1.5, sd: 1.0 },
            esr: MarkerStat {
                mean: 20.0,
                sd: 10.0,
            },
            ferritin: MarkerStat {
                mean: 100.0,
                sd: 50.0,
            },
            wbc: MarkerStat { mean: 6.5, sd: 2.0 },
        }
    }

    pub fn for_status(is_menstruating: bool) -> Self {
        if is_menstruating {
            Self::premenopausal()
        } else {
            Self::postmenopausal()
        }
    }
}

/// Inflammation and recovery score for a panel, against baselines chosen
/// by menstruation status. Returns `None` when fewer than two of hsCRP,
/// ESR, ferritin and WBC resolve.
pub fn compute_inflammation_score(
    panel: &BiomarkerPanel,
    is_menstruating: bool,
) -> Option<InflammationScoreV1> {
    let components = extract_components(panel);
    if components.resolved() < 2 {
        debug!(
            resolved = components.resolved(),
            "inflammation score skipped, not enough markers"
        );
        return None;
    }

    let refs = InflammationRefs::for_status(is_menstruating);
    // Low ferritin is iron deficiency, not inflammation; every marker here
    // penalizes the high tail only.
    let terms = [
        (
            HSCRP_WEIGHT,
            components.hscrp.map(|v| upper_tail_z(v, refs.hscrp)),
        ),
        (ESR_WEIGHT, components.esr.map(|v| upper_tail_z(v, refs.esr))),
        (
            FERRITIN_WEIGHT,
            components.ferritin.map(|v| upper_tail_z(v, refs.ferritin)),
        ),
        (WBC_WEIGHT, components.wbc.map(|v| upper_tail_z(v, refs.wbc))),
    ];
    let sum = weighted_penalty(&terms);

    let score = score_from_penalty(sum.penalty, SEVERITY_SCALE);
    let (level, description, summary) = interpret(score);
    debug!(
        score,
        markers_used = sum.markers_used,
        is_menstruating,
        "inflammation score computed"
    );

    Some(InflammationScoreV1 {
        score,
        markers_used: sum.markers_used,
        level,
        description: description.to_string(),
        summary: summary.to_string(),
        is_menstruating,
        components,
    })
}

/// Resolve the four inflammation markers from a raw panel, in canonical
/// units (hsCRP mg/L, ESR mm/h, ferritin µg/L, WBC x10^9/L).
pub fn extract_components(panel: &BiomarkerPanel) -> InflammationComponents {
    InflammationComponents {
        hscrp: find_marker(panel, HSCRP_ALIASES).map(|m| hscrp_mg_l(m.value, &m.unit)),
        esr: find_marker(panel, ESR_ALIASES).map(|m| m.value),
        ferritin: find_marker(panel, FERRITIN_ALIASES).map(|m| m.value),
        wbc: find_marker(panel, WBC_ALIASES).map(|m| m.value),
    }
}

/// hsCRP in mg/L. mg/dL readings scale up by 10; everything else is
/// already mg/L.
pub fn hscrp_mg_l(value: f64, unit: &str) -> f64 {
    if unit.to_ascii_lowercase().contains("mg/dl") {
        value * 10.0
    } else {
        value
    }
}

pub fn interpret(score: f64) -> (Level, &'static str, &'static str) {
    if score >= 80.0 {
        (
            Level::Optimal,
            "Low inflammation, excellent recovery capacity",
            "Your body shows excellent recovery capacity and low baseline inflammation. \
             You're adapting well to training and lifestyle stress.",
        )
    } else if score >= 60.0 {
        (
            Level::Good,
            "Mild systemic stress or recent inflammation",
            "Slight inflammation may indicate recent intense training, poor sleep, or \
             psychological stress. Consider active recovery, sauna/cold exposure, and \
             antioxidant-rich foods.",
        )
    } else {
        (
            Level::NeedsImprovement,
            "High inflammatory load, compromised recovery",
            "Your body shows signs of systemic inflammation. This could stem from \
             overtraining, infection, poor gut health, or inadequate recovery. Scale back \
             training intensity and focus on restoration.",
        )
    }
}
