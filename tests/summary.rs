use wellscore::io::json_writer::build_report;
use wellscore::io::summary::format_summary;
use wellscore::panel::{BiomarkerPanel, PanelValue};
use wellscore::schema::v1::ProfileV1;

fn profile(entries: &[(&str, &str)], is_menstruating: Option<bool>) -> ProfileV1 {
    let biomarkers: BiomarkerPanel = entries
        .iter()
        .map(|(k, v)| (k.to_string(), PanelValue::from(*v)))
        .collect();
    ProfileV1 {
        biomarkers,
        is_menstruating,
    }
}

#[test]
fn summary_lists_all_three_scores() {
    let p = profile(
        &[
            ("fasting_glucose", "82 mg/dL"),
            ("fasting_insulin", "6"),
            ("hba1c", "5.0"),
            ("hscrp", "0.4"),
            ("esr", "10"),
            ("hemoglobin", "14.5"),
            ("hematocrit", "44"),
        ],
        Some(true),
    );
    let s = format_summary(&build_report(&p));

    assert!(s.contains("wellscore v"));
    assert!(s.contains("Input: 7 markers, menstruating=yes"));
    assert!(s.contains("Metabolic: 100.0 (optimal, 2 markers)"));
    assert!(s.contains("Inflammation: 100.0 (optimal, 2 markers)"));
    assert!(s.contains("Oxygen: 100.0 (optimal, 2 markers)"));
}

#[test]
fn summary_spells_out_skips() {
    let p = profile(&[("hemoglobin", "14.5"), ("hematocrit", "44")], None);
    let s = format_summary(&build_report(&p));

    assert!(s.contains("menstruating=unset"));
    assert!(s.contains("Metabolic: n/a (insufficient markers)"));
    assert!(s.contains("Inflammation: n/a (menstruation status unset)"));
    assert!(s.contains("Oxygen: 100.0 (optimal, 2 markers)"));
}

#[test]
fn summary_shows_rounded_score() {
    let p = profile(
        &[("ferritin", "70"), ("wbc", "6.0"), ("hscrp", "0.4")],
        Some(true),
    );
    let s = format_summary(&build_report(&p));
    // ferritin z = 1.75, penalty 0.35, score 93.7
    assert!(s.contains("Inflammation: 93.7 (optimal, 3 markers)"));
}
