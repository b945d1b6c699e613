use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod extract;
pub mod parse;

pub use extract::{find_marker, RawMarker};
pub use parse::{normalize_key, parse_magnitude, unit_token};

/// A biomarker panel as supplied by the caller: marker names in whatever
/// casing and spacing the lab report used, mapped to raw readings. A
/// reading is either a bare number, a string that embeds a magnitude and
/// usually a unit ("5.6 mmol/L", "82 mg/dL"), or an explicit null for a
/// test that was ordered but not reported.
///
/// Keys are kept ordered so alias resolution sees candidates in a stable
/// order regardless of how the map was built.
pub type BiomarkerPanel = BTreeMap<String, PanelValue>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PanelValue {
    Number(f64),
    Text(String),
    Null,
}

impl From<f64> for PanelValue {
    fn from(value: f64) -> Self {
        PanelValue::Number(value)
    }
}

impl From<&str> for PanelValue {
    fn from(value: &str) -> Self {
        PanelValue::Text(value.to_string())
    }
}
