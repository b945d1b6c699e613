use crate::schema::v1::WellnessReportV1;

pub fn format_summary(report: &WellnessReportV1) -> String {
    let status = match report.input_meta.is_menstruating {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unset",
    };

    let mut out = String::new();
    out.push_str(&format!("wellscore v{}\n", report.version));
    out.push_str(&format!(
        "Input: {} markers, menstruating={}\n",
        report.input_meta.markers, status
    ));

    match &report.scores.metabolic {
        Some(s) => out.push_str(&format!(
            "Metabolic: {:.1} ({}, {} markers)\n",
            s.score,
            s.level.label(),
            s.markers_used
        )),
        None => out.push_str("Metabolic: n/a (insufficient markers)\n"),
    }

    match &report.scores.inflammation {
        Some(s) => out.push_str(&format!(
            "Inflammation: {:.1} ({}, {} markers)\n",
            s.score,
            s.level.label(),
            s.markers_used
        )),
        None if report.input_meta.is_menstruating.is_none() => {
            out.push_str("Inflammation: n/a (menstruation status unset)\n");
        }
        None => out.push_str("Inflammation: n/a (insufficient markers)\n"),
    }

    match &report.scores.oxygen {
        Some(s) => out.push_str(&format!(
            "Oxygen: {:.1} ({}, {} markers)\n",
            s.score,
            s.level.label(),
            s.markers_used
        )),
        None => out.push_str("Oxygen: n/a (insufficient markers)\n"),
    }

    out
}
