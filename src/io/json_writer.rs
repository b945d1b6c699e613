use crate::schema::v1::{ProfileV1, WellnessReportV1};
use crate::scores::score_panel;

pub fn build_report(profile: &ProfileV1) -> WellnessReportV1 {
    let mut report = WellnessReportV1::new(
        env!("CARGO_PKG_VERSION"),
        profile.biomarkers.len() as u64,
        profile.is_menstruating,
    );
    report.scores = score_panel(&profile.biomarkers, profile.is_menstruating);
    report
}
