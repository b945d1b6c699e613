pub mod inflammation;
pub mod metabolic;
pub mod oxygen;

use crate::panel::BiomarkerPanel;
use crate::schema::v1::WellnessScores;

pub use inflammation::compute_inflammation_score;
pub use metabolic::compute_metabolic_score;
pub use oxygen::compute_oxygen_score;

/// Run a panel through all three pipelines. Each pipeline fails soft: a
/// panel without enough markers for one score still produces the others.
/// The inflammation pipeline needs a menstruation status to pick its
/// reference baselines and is skipped when none is supplied.
pub fn score_panel(panel: &BiomarkerPanel, is_menstruating: Option<bool>) -> WellnessScores {
    WellnessScores {
        metabolic: compute_metabolic_score(panel),
        inflammation: is_menstruating
            .and_then(|status| compute_inflammation_score(panel, status)),
        oxygen: compute_oxygen_score(panel),
    }
}
