use wellscore::io::json_writer::build_report;
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
fn json_report_populated() {
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
    let report = build_report(&p);
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["tool"], "wellscore");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["input_meta"]["markers"], 7);
    assert_eq!(json["input_meta"]["is_menstruating"], true);

    assert_eq!(json["scores"]["metabolic"]["score"], 100.0);
    assert_eq!(json["scores"]["metabolic"]["markers_used"], 2);
    assert_eq!(json["scores"]["metabolic"]["level"], "optimal");
    assert!(json["scores"]["metabolic"]["components"]["homa_ir"].is_number());
    // Unresolved components serialize as explicit nulls.
    assert!(json["scores"]["metabolic"]["components"]["tg_hdl_ratio"].is_null());

    assert_eq!(json["scores"]["inflammation"]["is_menstruating"], true);
    assert_eq!(json["scores"]["oxygen"]["markers_used"], 2);
}

#[test]
fn skipped_pipelines_serialize_as_null() {
    let p = profile(&[("hemoglobin", "14.5"), ("hematocrit", "44")], None);
    let report = build_report(&p);
    let json = serde_json::to_value(report).unwrap();

    assert!(json["input_meta"]["is_menstruating"].is_null());
    assert!(json["scores"]["metabolic"].is_null());
    assert!(json["scores"]["inflammation"].is_null());
    assert!(json["scores"]["oxygen"].is_object());
}

#[test]
fn needs_improvement_level_spelling() {
    let p = profile(
        &[
            ("hemoglobin", "10.0"),
            ("hematocrit", "31"),
            ("rbc", "3.5"),
            ("iron", "40"),
        ],
        None,
    );
    let report = build_report(&p);
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["scores"]["oxygen"]["level"], "needs_improvement");
}

#[test]
fn report_version_matches_crate() {
    let p = profile(&[], None);
    let report = build_report(&p);
    assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(report.input_meta.markers, 0);
}
