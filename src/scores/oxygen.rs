use tracing::debug;

use crate::math::stats::{lower_tail_z, score_from_penalty, weighted_penalty, MarkerStat};
use crate::panel::{find_marker, BiomarkerPanel};
use crate::schema::v1::{Level, OxygenComponents, OxygenScoreV1};

const HEMOGLOBIN_ALIASES: &[&str] = &["hemoglobin", "hb", "hgb", "haemoglobin"];
const HEMATOCRIT_ALIASES: &[&str] = &["hematocrit", "hct", "haematocrit"];
const RBC_ALIASES: &[&str] = &["rbc", "red_blood_cells", "red_blood_cell_count", "erythrocytes"];
const IRON_ALIASES: &[&str] = &["iron", "serum_iron", "fe", "serum_fe"];

const HEMOGLOBIN_STAT: MarkerStat = MarkerStat { mean: 13.5, sd: 1.2 };
const HEMATOCRIT_STAT: MarkerStat = MarkerStat { mean: 41.0, sd: 3.5 };
const RBC_STAT: MarkerStat = MarkerStat {
    mean: 4.5,
    sd: 0.35,
};
const IRON_STAT: MarkerStat = MarkerStat {
    mean: 90.0,
    sd: 25.0,
};

const HEMOGLOBIN_WEIGHT: f64 = 0.40;
const HEMATOCRIT_WEIGHT: f64 = 0.25;
const RBC_WEIGHT: f64 = 0.20;
const IRON_WEIGHT: f64 = 0.15;

const SEVERITY_SCALE: f64 = 22.0;

/// mmol/L hemoglobin converts with the monomer molar mass (16.11 g/mol).
const HEMOGLOBIN_MMOL_FACTOR: f64 = 1.611;
/// µmol/L iron converts with the molar mass of iron (55.85 g/mol).
const IRON_UMOL_FACTOR: f64 = 5.587;

/// Oxygen transport score for a panel. The only pipeline that penalizes
/// the low tail: hemoglobin, hematocrit, RBC or iron below the population
/// mean reduce the score, elevated values do not. Returns `None` when
/// fewer than two of the four markers resolve.
pub fn compute_oxygen_score(panel: &BiomarkerPanel) -> Option<OxygenScoreV1> {
    let components = extract_components(panel);
    if components.resolved() < 2 {
        debug!(
            resolved = components.resolved(),
            "oxygen score skipped, not enough markers"
        );
        return None;
    }

    let terms = [
        (
            HEMOGLOBIN_WEIGHT,
            components.hemoglobin.map(|v| lower_tail_z(v, HEMOGLOBIN_STAT)),
        ),
        (
            HEMATOCRIT_WEIGHT,
            components.hematocrit.map(|v| lower_tail_z(v, HEMATOCRIT_STAT)),
        ),
        (RBC_WEIGHT, components.rbc.map(|v| lower_tail_z(v, RBC_STAT))),
        (
            IRON_WEIGHT,
            components.iron.map(|v| lower_tail_z(v, IRON_STAT)),
        ),
    ];
    let sum = weighted_penalty(&terms);

    let score = score_from_penalty(sum.penalty, SEVERITY_SCALE);
    let (level, description, summary) = interpret(score);
    debug!(score, markers_used = sum.markers_used, "oxygen score computed");

    Some(OxygenScoreV1 {
        score,
        markers_used: sum.markers_used,
        level,
        description: description.to_string(),
        summary: summary.to_string(),
        components,
    })
}

/// Resolve the four oxygen markers from a raw panel, in canonical units
/// (hemoglobin g/dL, hematocrit %, RBC x10^12/L, iron µg/dL).
pub fn extract_components(panel: &BiomarkerPanel) -> OxygenComponents {
    OxygenComponents {
        hemoglobin: find_marker(panel, HEMOGLOBIN_ALIASES)
            .map(|m| hemoglobin_g_dl(m.value, &m.unit)),
        hematocrit: find_marker(panel, HEMATOCRIT_ALIASES).map(|m| hematocrit_pct(m.value)),
        rbc: find_marker(panel, RBC_ALIASES).map(|m| rbc_e12_per_l(m.value, &m.unit)),
        iron: find_marker(panel, IRON_ALIASES).map(|m| iron_ug_dl(m.value, &m.unit)),
    }
}

/// Hemoglobin in g/dL. g/L readings scale down by 10, mmol/L readings
/// convert by molar mass.
pub fn hemoglobin_g_dl(value: f64, unit: &str) -> f64 {
    let unit = unit.to_ascii_lowercase();
    if unit.contains("g/l") && !unit.contains("g/dl") {
        value / 10.0
    } else if unit.contains("mmol/l") {
        value * HEMOGLOBIN_MMOL_FACTOR
    } else {
        value
    }
}

/// Hematocrit in percent. A reading inside [0, 1] is a fraction and
/// scales up by 100.
pub fn hematocrit_pct(value: f64) -> f64 {
    if (0.0..=1.0).contains(&value) {
        value * 100.0
    } else {
        value
    }
}

/// RBC count in x10^12/L. Readings flagged x10^6/µL scale down by 1000.
pub fn rbc_e12_per_l(value: f64, unit: &str) -> f64 {
    let unit = unit.to_ascii_lowercase();
    if unit.contains("x10^6") || unit.contains("10^6") || unit.contains("million") {
        value / 1000.0
    } else {
        value
    }
}

/// Serum iron in µg/dL. µmol/L readings convert by molar mass, µg/L
/// readings scale down by 10.
pub fn iron_ug_dl(value: f64, unit: &str) -> f64 {
    let unit = unit.to_ascii_lowercase();
    if unit.contains("µmol/l") || unit.contains("umol/l") {
        value * IRON_UMOL_FACTOR
    } else if unit.contains("µg/l") || unit.contains("ug/l") {
        value / 10.0
    } else {
        value
    }
}

pub fn interpret(score: f64) -> (Level, &'static str, &'static str) {
    if score >= 80.0 {
        (
            Level::Optimal,
            "Excellent oxygen transport capacity",
            "Your blood carries oxygen efficiently — excellent endurance potential. Your \
             hemoglobin and iron levels support optimal oxygen delivery to tissues.",
        )
    } else if score >= 60.0 {
        (
            Level::Good,
            "Slight reduction in oxygen transport markers",
            "Slight reduction in iron or hemoglobin — may slightly limit performance. \
             Consider monitoring iron intake, especially if you're very active or have \
             heavy menstrual cycles.",
        )
    } else {
        (
            Level::NeedsImprovement,
            "Low oxygen transport capacity",
            "Low hemoglobin or ferritin — could affect stamina and recovery. Consider iron \
             supplementation and medical evaluation to rule out anemia. Low oxygen capacity \
             can cause fatigue, poor endurance, and delayed recovery.",
        )
    }
}
