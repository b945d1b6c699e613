use serde::{Deserialize, Serialize};

use crate::panel::BiomarkerPanel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileV1 {
    pub biomarkers: BiomarkerPanel,
    #[serde(default)]
    pub is_menstruating: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Optimal,
    Good,
    NeedsImprovement,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Optimal => "optimal",
            Level::Good => "good",
            Level::NeedsImprovement => "needs_improvement",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetabolicComponents {
    pub homa_ir: Option<f64>,
    pub tg_hdl_ratio: Option<f64>,
    pub apob_a1_ratio: Option<f64>,
    pub hba1c: Option<f64>,
}

impl MetabolicComponents {
    pub fn entries(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("homa_ir", self.homa_ir),
            ("tg_hdl_ratio", self.tg_hdl_ratio),
            ("apob_a1_ratio", self.apob_a1_ratio),
            ("hba1c", self.hba1c),
        ]
    }

    pub fn resolved(&self) -> u32 {
        self.entries().iter().filter(|(_, v)| v.is_some()).count() as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetabolicScoreV1 {
    pub score: f64,
    pub markers_used: u32,
    pub level: Level,
    pub description: String,
    pub summary: String,
    pub components: MetabolicComponents,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflammationComponents {
    pub hscrp: Option<f64>,
    pub esr: Option<f64>,
    pub ferritin: Option<f64>,
    pub wbc: Option<f64>,
}

impl InflammationComponents {
    pub fn entries(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("hscrp", self.hscrp),
            ("esr", self.esr),
            ("ferritin", self.ferritin),
            ("wbc", self.wbc),
        ]
    }

    pub fn resolved(&self) -> u32 {
        self.entries().iter().filter(|(_, v)| v.is_some()).count() as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflammationScoreV1 {
    pub score: f64,
    pub markers_used: u32,
    pub level: Level,
    pub description: String,
    pub summary: String,
    pub is_menstruating: bool,
    pub components: InflammationComponents,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OxygenComponents {
    pub hemoglobin: Option<f64>,
    pub hematocrit: Option<f64>,
    pub rbc: Option<f64>,
    pub iron: Option<f64>,
}

impl OxygenComponents {
    pub fn entries(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("hemoglobin", self.hemoglobin),
            ("hematocrit", self.hematocrit),
            ("rbc", self.rbc),
            ("iron", self.iron),
        ]
    }

    pub fn resolved(&self) -> u32 {
        self.entries().iter().filter(|(_, v)| v.is_some()).count() as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OxygenScoreV1 {
    pub score: f64,
    pub markers_used: u32,
    pub level: Level,
    pub description: String,
    pub summary: String,
    pub components: OxygenComponents,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessScores {
    pub metabolic: Option<MetabolicScoreV1>,
    pub inflammation: Option<InflammationScoreV1>,
    pub oxygen: Option<OxygenScoreV1>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub markers: u64,
    pub is_menstruating: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub scores: WellnessScores,
}

impl WellnessReportV1 {
    pub fn new(tool_version: &str, markers: u64, is_menstruating: Option<bool>) -> Self {
        Self {
            tool: "wellscore".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                markers,
                is_menstruating,
            },
            scores: WellnessScores {
                metabolic: None,
                inflammation: None,
                oxygen: None,
            },
        }
    }
}
